//! Date-of-birth representation and age arithmetic
//!
//! Questionnaires accept either a bare four-digit birth year or a full
//! calendar date in one of the supported formats. Both the condition
//! evaluator's inline age fallback and the derived-variable age computation
//! go through this type, so the two paths cannot drift apart.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date formats accepted for full calendar dates, tried in order.
const FULL_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

/// A parsed date-of-birth answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dob {
    /// Only the birth year is known
    Year(i32),
    /// Full calendar date of birth
    Full(NaiveDate),
}

impl Dob {
    /// Parse a raw date-of-birth answer.
    ///
    /// Accepts a bare four-digit year (`"1980"`) or a full date in ISO
    /// (`"1985-06-15"`), dotted (`"15.06.1985"`), or slashed
    /// (`"15/06/1985"`) form. Anything else yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();

        if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed.parse::<i32>().ok().map(Self::Year);
        }

        for format in FULL_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Some(Self::Full(date));
            }
        }
        None
    }

    /// Birth year
    pub fn year(&self) -> i32 {
        match self {
            Self::Year(y) => *y,
            Self::Full(d) => d.year(),
        }
    }

    /// Age in whole years on the given date.
    ///
    /// A year-only birth date uses plain year subtraction. A full date
    /// subtracts one more year when the birthday has not yet occurred in
    /// the reference year.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        match self {
            Self::Year(y) => today.year() - y,
            Self::Full(born) => {
                let mut age = today.year() - born.year();
                if (today.month(), today.day()) < (born.month(), born.day()) {
                    age -= 1;
                }
                age
            }
        }
    }
}

impl fmt::Display for Dob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(y) => write!(f, "{y}"),
            Self::Full(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl TryFrom<String> for Dob {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unrecognized date of birth: {value:?}"))
    }
}

impl From<Dob> for String {
    fn from(dob: Dob) -> Self {
        dob.to_string()
    }
}
