pub mod astrology;
pub mod compatibility;
pub mod form;
pub mod zodiac;
