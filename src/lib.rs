pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod messagebird;
        pub mod notification_scheduler;
        pub mod phone_lookup;
    }
}

pub mod modules {
    pub mod appointments {
        pub mod core {
            pub mod business_hours;
            pub mod local_time;
            pub mod validate_time;
            pub mod validation_outcome;
        }
        pub mod use_cases {
            pub mod book_appointment {
                pub mod booking_request;
                pub mod command;
                pub mod decision;
                pub mod handler;
                pub mod messages;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
