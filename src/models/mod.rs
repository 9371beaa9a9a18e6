pub mod date;
pub mod reply;
pub mod submission;
pub mod zodiac;
