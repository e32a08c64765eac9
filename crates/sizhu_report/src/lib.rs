//! Energy reports and star matching on top of Four-Pillars charts.
//!
//! Annotates the months of the current Chinese year, the annual pillars of
//! the next five years, and the days of the upcoming week, and matches a
//! birth chart against a target day through externally supplied star rule
//! and detail tables.

pub mod energy;
pub mod error;
pub mod star;

pub use energy::{
    AnnualEnergy, DailyEnergy, MonthEnergy, WeekEnergyReport, YearEnergyReport,
    current_year_energy, five_year_forecast, month_energy_for_year, next_week_daily_energy,
};
pub use error::ReportError;
pub use star::{
    ALL_STARS, Star, StarDetailTable, StarMatch, StarReport, StarRule, StarRuleTable, star_report,
};
