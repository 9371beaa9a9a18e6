use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{AppError, ProxyResult};
use crate::models::date::{is_iso_date, normalize_date};
use crate::models::zodiac::{SignInfo, ZodiacSign};

#[derive(Debug, Serialize)]
pub struct SignLookup {
    pub date_of_birth: NaiveDate,
    pub sign: SignInfo,
}

/// Sun sign for a `dd-mm-yyyy` (or `yyyy-mm-dd`) birth date.
pub fn lookup_sign(date_of_birth: &str) -> ProxyResult<SignLookup> {
    let value = date_of_birth.trim();
    let value = if is_iso_date(value) {
        normalize_date(value)
    } else {
        value.to_string()
    };

    let date = NaiveDate::parse_from_str(&value, "%d-%m-%Y")
        .map_err(|_| AppError::InvalidDate(date_of_birth.to_string()))?;

    Ok(SignLookup {
        date_of_birth: date,
        sign: ZodiacSign::from_birth_date(date).info(),
    })
}

pub fn catalog() -> Vec<SignInfo> {
    ZodiacSign::ALL.into_iter().map(ZodiacSign::info).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_date_orders() {
        let backend_order = lookup_sign("04-07-1990").unwrap();
        let iso_order = lookup_sign("1990-07-04").unwrap();
        assert_eq!(backend_order.sign.sign, ZodiacSign::Cancer);
        assert_eq!(backend_order.date_of_birth, iso_order.date_of_birth);
    }

    #[test]
    fn impossible_dates_are_rejected() {
        let err = lookup_sign("2024-13-99").unwrap_err();
        assert!(matches!(err, AppError::InvalidDate(ref value) if value == "2024-13-99"));
        assert!(lookup_sign("yesterday").is_err());
    }

    #[test]
    fn catalog_lists_all_signs_in_order() {
        let signs: Vec<_> = catalog().into_iter().map(|info| info.sign).collect();
        assert_eq!(signs, ZodiacSign::ALL.to_vec());
    }
}
