//! Stem/branch computation for the four pillars.
//!
//! Year and month pillars index off the lunisolar date; the day pillar is a
//! pure day count from the 1900-01-31 anchor (a Jia Chen day); the hour
//! pillar combines the 2-hour branch buckets with the five-rats stem rule.

use chrono::{Datelike, NaiveDate};

use sizhu_calendar::{LunarDate, MonthTransitionTable, solar_to_lunar};
use sizhu_core::{ALL_BRANCHES, ALL_STEMS, EarthlyBranch, HeavenlyStem, StemBranch};

use crate::error::ChartError;

/// Days from CE 0001-01-01 to 1900-01-31 on chrono's `num_days_from_ce`
/// scale; the day-pillar anchor.
const DAY_EPOCH_DAYS_FROM_CE: i64 = 693_626;

/// Year pillar of a lunar year.
pub fn year_pillar(lunar_year: i32) -> StemBranch {
    let offset = lunar_year - 4;
    StemBranch::new(
        ALL_STEMS[offset.rem_euclid(10) as usize],
        ALL_BRANCHES[offset.rem_euclid(12) as usize],
    )
}

/// Month pillar of a date, given its lunisolar equivalent.
///
/// The base indices follow from the lunar year stem and month; the governing
/// month then flips by one when the solar-term transition of the Gregorian
/// (year, month) falls late in its lunar month (day > 15) or inside a leap
/// month. That threshold is a pinned behavior; the transition date itself
/// comes from the external table.
pub fn month_pillar(
    lunar: LunarDate,
    date: NaiveDate,
    table: &MonthTransitionTable,
) -> Result<StemBranch, ChartError> {
    let year_stem = (lunar.year - 4).rem_euclid(10);
    let mut stem = (2 * year_stem + lunar.month as i32 - 9).rem_euclid(10);
    let mut branch = (lunar.month as i32 + 1).rem_euclid(12);

    let transition = table.transition_date(date.year(), date.month())?;
    let transition_lunar = solar_to_lunar(transition)?;
    if transition_lunar.day > 15 || transition_lunar.leap {
        stem = (stem + 1).rem_euclid(10);
        branch = (branch + 1).rem_euclid(12);
    }

    Ok(StemBranch::new(ALL_STEMS[stem as usize], ALL_BRANCHES[branch as usize]))
}

/// Day pillar from the 1900-01-31 anchor, which carries Jia Chen.
pub fn day_pillar(date: NaiveDate) -> StemBranch {
    let days = i64::from(date.num_days_from_ce()) - DAY_EPOCH_DAYS_FROM_CE;
    StemBranch::new(
        ALL_STEMS[days.rem_euclid(10) as usize],
        ALL_BRANCHES[(days + 4).rem_euclid(12) as usize],
    )
}

/// Earthly branch of a clock hour: 2-hour buckets opening on the odd hour,
/// with 23:00 wrapping into the same Zi bucket as 00:00.
pub fn hour_branch(hour: u32) -> EarthlyBranch {
    ALL_BRANCHES[(((hour + 1) / 2) % 12) as usize]
}

/// Hour pillar via the five-rats rule: each day-stem pair opens its Zi hour
/// on a fixed stem, and later hours advance stem and branch together.
pub fn hour_pillar(hour: u32, day_stem: HeavenlyStem) -> StemBranch {
    let branch = hour_branch(hour);
    let base = match day_stem {
        HeavenlyStem::Jia | HeavenlyStem::Ji => HeavenlyStem::Jia,
        HeavenlyStem::Yi | HeavenlyStem::Geng => HeavenlyStem::Bing,
        HeavenlyStem::Bing | HeavenlyStem::Xin => HeavenlyStem::Wu,
        HeavenlyStem::Ding | HeavenlyStem::Ren => HeavenlyStem::Geng,
        HeavenlyStem::Wu | HeavenlyStem::Gui => HeavenlyStem::Ren,
    };
    StemBranch::new(base.cycle(i32::from(branch.index())), branch)
}
