//! Error type for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sizhu_calendar::CalendarError;

/// Errors from parsing chart inputs or computing pillars.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed date, time, or sex input.
    Parse(String),
    /// Lunisolar conversion or transition-table failure.
    Calendar(CalendarError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<CalendarError> for ChartError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
