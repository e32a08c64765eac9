//! Error type for calendar conversion and table lookup.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::lunar::{FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR};

/// Errors from lunisolar conversion and transition-table access.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Date falls outside the supported lunisolar table range.
    OutOfRange(NaiveDate),
    /// Malformed transition-table text.
    Parse(String),
    /// No transition date recorded for the requested (year, month).
    MissingTransition {
        /// Gregorian year of the lookup.
        year: i32,
        /// Gregorian month of the lookup (1-12).
        month: u32,
    },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(date) => write!(
                f,
                "date {date} outside supported lunar years {FIRST_LUNAR_YEAR}..={LAST_LUNAR_YEAR}"
            ),
            Self::Parse(msg) => write!(f, "transition table parse error: {msg}"),
            Self::MissingTransition { year, month } => {
                write!(f, "no transition date for {year}-{month:02}")
            }
        }
    }
}

impl Error for CalendarError {}
