//! Error type for report building.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sizhu_calendar::CalendarError;
use sizhu_chart::ChartError;

use crate::star::Star;

/// Errors from parsing star tables or probing report dates.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ReportError {
    /// Malformed star rule or star detail table text.
    Parse(String),
    /// A probe-date pillar computation failed.
    Chart(ChartError),
    /// A matched star has no row in the detail table.
    MissingStarDetail(Star),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Chart(e) => write!(f, "chart error: {e}"),
            Self::MissingStarDetail(star) => write!(f, "no detail entry for star {star}"),
        }
    }
}

impl Error for ReportError {}

impl From<ChartError> for ReportError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<CalendarError> for ReportError {
    fn from(e: CalendarError) -> Self {
        Self::Chart(ChartError::from(e))
    }
}
