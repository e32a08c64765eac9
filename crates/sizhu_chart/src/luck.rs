//! Luck-pillar scheduling.
//!
//! Nine decade-long periods stepped from the month pillar. The walk
//! direction is fixed by year-stem polarity and sex; the opening age counts
//! days between birth and the governing solar-term transition. The exact
//! step windows (forward +1..=+9, backward -2..=-10, age-ascending) and the
//! 0-promotes-to-9 age rule are pinned behavior.

use chrono::{Datelike, NaiveDate};

use sizhu_calendar::MonthTransitionTable;
use sizhu_core::{HeavenlyStem, Polarity};

use crate::annotate::annotate_pair;
use crate::error::ChartError;
use crate::types::{Direction, LuckPillarPeriod, LuckPillars, RawPillars, Sex};

/// Direction of the luck-pillar walk: yang years run forward for males,
/// yin years forward for females.
pub fn luck_direction(year_stem: HeavenlyStem, sex: Sex) -> Direction {
    match (year_stem.polarity(), sex) {
        (Polarity::Yang, Sex::Male) | (Polarity::Yin, Sex::Female) => Direction::Forward,
        _ => Direction::Backward,
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// Age at which the first luck period opens, 1..=9.
///
/// Forward walks count to the next Gregorian month's transition; backward
/// walks count from the current month's transition when the birth day has
/// passed it, else from the previous month's. The day count is inclusive;
/// every 3 days make one year, taken modulo 10 with 0 promoted to 9.
pub fn luck_start_age(
    birth: NaiveDate,
    direction: Direction,
    table: &MonthTransitionTable,
) -> Result<u8, ChartError> {
    let diff = match direction {
        Direction::Forward => {
            let (year, month) = next_month(birth.year(), birth.month());
            let transition = table.transition_date(year, month)?;
            transition.signed_duration_since(birth).num_days() + 1
        }
        Direction::Backward => {
            let current = table.transition_date(birth.year(), birth.month())?;
            let transition = if birth.day() > current.day() {
                current
            } else {
                let (year, month) = previous_month(birth.year(), birth.month());
                table.transition_date(year, month)?
            };
            birth.signed_duration_since(transition).num_days() + 1
        }
    };
    let age = (diff / 3).rem_euclid(10) as u8;
    Ok(if age == 0 { 9 } else { age })
}

/// The full 9-period schedule for a birth.
pub fn compute_luck_pillars(
    sex: Sex,
    birth: NaiveDate,
    raw: &RawPillars,
    table: &MonthTransitionTable,
) -> Result<LuckPillars, ChartError> {
    let direction = luck_direction(raw.year.stem, sex);
    let start_age = luck_start_age(birth, direction, table)?;
    let day_stem = raw.day.stem;

    let periods = (0..9u8)
        .map(|k| {
            let offset = match direction {
                Direction::Forward => i32::from(k) + 1,
                Direction::Backward => -(i32::from(k) + 2),
            };
            let start = start_age + 10 * k;
            LuckPillarPeriod {
                start_age: start,
                end_age: start + 10,
                pillar: annotate_pair(raw.month.cycle(offset), day_stem),
            }
        })
        .collect();

    Ok(LuckPillars { direction, start_age, periods })
}
