use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The twelve tropical zodiac signs, in zodiac order starting at Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

/// Static description of a sign as shown in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct SignInfo {
    pub sign: ZodiacSign,
    pub name: &'static str,
    pub symbol: &'static str,
    pub dates: &'static str,
    pub element: Element,
    pub ruling: &'static str,
    pub traits: [&'static str; 4],
    pub description: &'static str,
    pub color: &'static str,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Lowercase form used on the wire.
    pub fn slug(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    /// Sun sign for a birth date.
    pub fn from_birth_date(date: NaiveDate) -> Self {
        let (month, day) = (date.month(), date.day());
        match (month, day) {
            (3, 21..) | (4, ..=19) => ZodiacSign::Aries,
            (4, _) | (5, ..=20) => ZodiacSign::Taurus,
            (5, _) | (6, ..=20) => ZodiacSign::Gemini,
            (6, _) | (7, ..=22) => ZodiacSign::Cancer,
            (7, _) | (8, ..=22) => ZodiacSign::Leo,
            (8, _) | (9, ..=22) => ZodiacSign::Virgo,
            (9, _) | (10, ..=22) => ZodiacSign::Libra,
            (10, _) | (11, ..=21) => ZodiacSign::Scorpio,
            (11, _) | (12, ..=21) => ZodiacSign::Sagittarius,
            (12, _) | (1, ..=19) => ZodiacSign::Capricorn,
            (1, _) | (2, ..=18) => ZodiacSign::Aquarius,
            _ => ZodiacSign::Pisces,
        }
    }

    pub fn info(self) -> SignInfo {
        let (name, symbol, dates, element, ruling, traits, description, color) = match self {
            ZodiacSign::Aries => (
                "Aries",
                "♈",
                "March 21 - April 19",
                Element::Fire,
                "Mars",
                ["Bold", "Independent", "Courageous", "Impulsive"],
                "The first sign of the zodiac: bold, ambitious, passionate and quick to act.",
                "#FF5757",
            ),
            ZodiacSign::Taurus => (
                "Taurus",
                "♉",
                "April 20 - May 20",
                Element::Earth,
                "Venus",
                ["Patient", "Reliable", "Stubborn", "Sensual"],
                "Grounded and practical, with a taste for the finer things in life.",
                "#7BC950",
            ),
            ZodiacSign::Gemini => (
                "Gemini",
                "♊",
                "May 21 - June 20",
                Element::Air,
                "Mercury",
                ["Versatile", "Curious", "Communicative", "Inconsistent"],
                "Adaptable communicators: intellectual, quick-witted and social.",
                "#FFD166",
            ),
            ZodiacSign::Cancer => (
                "Cancer",
                "♋",
                "June 21 - July 22",
                Element::Water,
                "Moon",
                ["Intuitive", "Emotional", "Protective", "Moody"],
                "Emotionally deep and nurturing, closely tied to home and family.",
                "#73C2FB",
            ),
            ZodiacSign::Leo => (
                "Leo",
                "♌",
                "July 23 - August 22",
                Element::Fire,
                "Sun",
                ["Confident", "Creative", "Generous", "Dramatic"],
                "Confident and charismatic natural leaders who enjoy the spotlight.",
                "#FF9E00",
            ),
            ZodiacSign::Virgo => (
                "Virgo",
                "♍",
                "August 23 - September 22",
                Element::Earth,
                "Mercury",
                ["Analytical", "Practical", "Diligent", "Critical"],
                "Detail-oriented and methodical, always striving for perfection.",
                "#B5BA72",
            ),
            ZodiacSign::Libra => (
                "Libra",
                "♎",
                "September 23 - October 22",
                Element::Air,
                "Venus",
                ["Diplomatic", "Harmonious", "Indecisive", "Fair-minded"],
                "Social and diplomatic, guided by balance and a strong sense of justice.",
                "#FF85A1",
            ),
            ZodiacSign::Scorpio => (
                "Scorpio",
                "♏",
                "October 23 - November 21",
                Element::Water,
                "Pluto, Mars",
                ["Passionate", "Resourceful", "Secretive", "Intense"],
                "Intense and resourceful, with a powerful emotional presence.",
                "#8A2BE2",
            ),
            ZodiacSign::Sagittarius => (
                "Sagittarius",
                "♐",
                "November 22 - December 21",
                Element::Fire,
                "Jupiter",
                ["Optimistic", "Adventurous", "Independent", "Restless"],
                "Freedom-loving optimists, always looking for the next experience.",
                "#9370DB",
            ),
            ZodiacSign::Capricorn => (
                "Capricorn",
                "♑",
                "December 22 - January 19",
                Element::Earth,
                "Saturn",
                ["Disciplined", "Responsible", "Ambitious", "Reserved"],
                "Ambitious and disciplined, with a strong work ethic.",
                "#4B5320",
            ),
            ZodiacSign::Aquarius => (
                "Aquarius",
                "♒",
                "January 20 - February 18",
                Element::Air,
                "Uranus, Saturn",
                ["Innovative", "Independent", "Humanitarian", "Eccentric"],
                "Original, forward-thinking and often ahead of their time.",
                "#00BFFF",
            ),
            ZodiacSign::Pisces => (
                "Pisces",
                "♓",
                "February 19 - March 20",
                Element::Water,
                "Neptune, Jupiter",
                ["Compassionate", "Intuitive", "Artistic", "Dreamy"],
                "Compassionate and creative, deeply connected to the spiritual realm.",
                "#7EB6FF",
            ),
        };

        SignInfo {
            sign: self,
            name,
            symbol,
            dates,
            element,
            ruling,
            traits,
            description,
            color,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownSign(pub String);

impl fmt::Display for UnknownSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown zodiac sign {:?}", self.0)
    }
}

impl FromStr for ZodiacSign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ZodiacSign::ALL
            .into_iter()
            .find(|sign| sign.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}
