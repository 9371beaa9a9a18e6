// prediction backend endpoints, joined onto BACKEND_URL
pub const ASTROLOGY_PATH: &str = "/astrology";
pub const COMPATIBILITY_PATH: &str = "/compatibility";

// horoscope requests are rejected before forwarding unless all of these are present
pub const REQUIRED_HOROSCOPE_FIELDS: [&str; 6] = [
    "name",
    "date_of_birth",
    "time_of_birth",
    "gender",
    "state",
    "city",
];

// field the browser's date picker fills with yyyy-mm-dd
pub const DATE_OF_BIRTH_FIELD: &str = "date_of_birth";
