//! Age computation

use chrono::{DateTime, Datelike, Local, NaiveDate};

/// Whole years between `birth_date` and `today`.
///
/// The year difference is reduced by one when today's (month, day) comes
/// before the birth (month, day). Accepts `YYYY-MM-DD`, RFC 3339 timestamps
/// and the reduced FHIR forms `YYYY` and `YYYY-MM`, which count from the
/// first day of the period.
///
/// Returns `None` for unparseable dates and for dates after `today`.
pub fn age_from_birth_date(birth_date: &str, today: NaiveDate) -> Option<u32> {
    let birth = parse_birth_date(birth_date)?;
    if birth > today {
        return None;
    }

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// [`age_from_birth_date`] against the local calendar date
pub fn age_today(birth_date: &str) -> Option<u32> {
    age_from_birth_date(birth_date, Local::now().date_naive())
}

fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    match raw.len() {
        4 => NaiveDate::parse_from_str(&format!("{raw}-01-01"), "%Y-%m-%d").ok(),
        7 => NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok(),
        len if len >= 10 => raw
            .get(..10)
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()),
        _ => None,
    }
}
