/// Raw booking form submission, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookAppointment {
    pub name: String,
    pub treatment: String,
    pub phone: String,
    pub date: String,
    pub time: String,
}
