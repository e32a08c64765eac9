//! Four-Pillars (BaZi) chart computation.
//!
//! Builds the year/month/day/hour stem-branch pillars of a birth moment,
//! annotates them (elements, animals, hidden stems, Ten Gods), schedules
//! the nine decade-long luck pillars, and aggregates the element
//! distribution. `ChartContext` ties the pieces together over a shared
//! month-transition table.

pub mod annotate;
pub mod context;
pub mod distribution;
pub mod error;
pub mod luck;
pub mod pillars;
pub mod types;

pub use annotate::{annotate, annotate_pair};
pub use context::ChartContext;
pub use distribution::element_distribution;
pub use error::ChartError;
pub use luck::{compute_luck_pillars, luck_direction, luck_start_age};
pub use pillars::{day_pillar, hour_branch, hour_pillar, month_pillar, year_pillar};
pub use types::{
    AnnotatedPillar, BaziChart, BirthInfo, Direction, ElementDistribution, FourPillars,
    LuckPillarPeriod, LuckPillars, RawPillars, Sex,
};
