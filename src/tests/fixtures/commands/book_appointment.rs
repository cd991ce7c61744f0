// Shared test fixture for the BookAppointment command.
// Defaults describe a valid 14:00 manicure on 2024-03-01.

use crate::modules::appointments::use_cases::book_appointment::command::BookAppointment;

pub struct BookAppointmentBuilder {
    inner: BookAppointment,
}

impl Default for BookAppointmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookAppointmentBuilder {
    pub fn new() -> Self {
        Self {
            inner: BookAppointment {
                name: "Jane Doe".to_string(),
                treatment: "Manicure".to_string(),
                phone: "+31612345678".to_string(),
                date: "2024-03-01".to_string(),
                time: "14:00".to_string(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn treatment(mut self, v: impl Into<String>) -> Self {
        self.inner.treatment = v.into();
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.phone = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = v.into();
        self
    }

    pub fn build(self) -> BookAppointment {
        self.inner
    }

    /// The command as an `application/x-www-form-urlencoded` body.
    pub fn form_body(self) -> String {
        let command = self.inner;
        serde_urlencoded::to_string([
            ("name", command.name),
            ("treatment", command.treatment),
            ("phone", command.phone),
            ("date", command.date),
            ("time", command.time),
        ])
        .unwrap()
    }
}

#[cfg(test)]
mod book_appointment_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = BookAppointmentBuilder::new()
            .name("Ann")
            .treatment("Pedicure")
            .phone("0612345678")
            .date("2024-04-02")
            .time("10:15")
            .build();

        assert_eq!(custom.name, "Ann");
        assert_eq!(custom.treatment, "Pedicure");
        assert_eq!(custom.phone, "0612345678");
        assert_eq!(custom.date, "2024-04-02");
        assert_eq!(custom.time, "10:15");
    }

    #[rstest]
    fn it_should_encode_the_form_body() {
        let body = BookAppointmentBuilder::new().form_body();
        assert_eq!(
            body,
            "name=Jane+Doe&treatment=Manicure&phone=%2B31612345678&date=2024-03-01&time=14%3A00"
        );
    }
}
