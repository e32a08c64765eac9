//! Multi-probe energy reports.
//!
//! Each report is a series of pillar computations at fixed probe dates: the
//! current-year report reads 12 month pillars, the forecast reads 5 year
//! pillars stepping 365 days at a time, and the weekly report reads the day
//! pillars of the coming Monday-to-Sunday week. Only year, month, and day
//! pillars are consulted, so the probes carry no clock time. The first
//! failing probe aborts the whole report.

use chrono::{Datelike, Days, Duration, NaiveDate};
use serde::Serialize;

use sizhu_calendar::CalendarError;
use sizhu_chart::{AnnotatedPillar, ChartContext};

use crate::error::ReportError;

/// Governing month pillar for one probed month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthEnergy {
    /// Probed Gregorian month, 1-12.
    pub month: u32,
    /// Month pillar at day 15 of that month.
    pub pillar: AnnotatedPillar,
}

/// Annual pillar of an anchor date plus the 12 month pillars of its
/// reference year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearEnergyReport {
    /// The anchor date the report was built for.
    pub anchor_date: NaiveDate,
    /// Year whose 12 months were probed: the anchor's Gregorian year once
    /// the anchor is past Feb 15, else the year before.
    pub reference_year: i32,
    /// Year pillar of the anchor date itself.
    pub annual: AnnotatedPillar,
    /// Month pillars probed at day 15 of each month, January first.
    pub months: Vec<MonthEnergy>,
}

/// Year pillar of one forecast step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualEnergy {
    /// Gregorian year of the probe date.
    pub year: i32,
    /// Year pillar at the probe date.
    pub pillar: AnnotatedPillar,
}

/// Day pillar of one day in the weekly report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyEnergy {
    /// Probed date.
    pub date: NaiveDate,
    /// Full weekday name of the date.
    pub weekday: String,
    /// Day pillar of the date.
    pub pillar: AnnotatedPillar,
}

/// Day pillars of the coming week plus that week's month and year pillars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekEnergyReport {
    /// The anchor date the report was built for.
    pub anchor_date: NaiveDate,
    /// Year pillar of the week's Monday.
    pub year: AnnotatedPillar,
    /// Month pillar of the week's Monday.
    pub month: AnnotatedPillar,
    /// Monday through Sunday, in order.
    pub days: Vec<DailyEnergy>,
}

/// Annual pillar of the anchor date and the month pillars of the reference
/// year, probed at day 15 of each month.
pub fn current_year_energy(
    ctx: &ChartContext<'_>,
    anchor: NaiveDate,
) -> Result<YearEnergyReport, ReportError> {
    let annual = ctx.four_pillars(anchor, None)?.year;
    let reference_year = reference_year(anchor);
    let months = month_energy_for_year(ctx, reference_year)?;
    Ok(YearEnergyReport { anchor_date: anchor, reference_year, annual, months })
}

/// The 12 governing month pillars of one Gregorian year, January first.
pub fn month_energy_for_year(
    ctx: &ChartContext<'_>,
    year: i32,
) -> Result<Vec<MonthEnergy>, ReportError> {
    let mut months = Vec::with_capacity(12);
    for month in 1..=12u32 {
        let probe = NaiveDate::from_ymd_opt(year, month, 15).ok_or_else(|| {
            ReportError::Parse(format!("probe date {year}-{month:02}-15 out of range"))
        })?;
        months.push(MonthEnergy { month, pillar: ctx.four_pillars(probe, None)?.month });
    }
    Ok(months)
}

/// Five year pillars stepping exactly 365 days at a time from the anchor.
///
/// The step is day-based rather than calendar-based, so a leap year can put
/// two probes in the same Gregorian year; both entries are kept.
pub fn five_year_forecast(
    ctx: &ChartContext<'_>,
    anchor: NaiveDate,
) -> Result<Vec<AnnualEnergy>, ReportError> {
    let mut entries = Vec::with_capacity(5);
    let mut date = anchor;
    for _ in 0..5 {
        let pillars = ctx.four_pillars(date, None)?;
        entries.push(AnnualEnergy { year: date.year(), pillar: pillars.year });
        date += Duration::days(365);
    }
    Ok(entries)
}

/// Day pillars of the coming Monday-to-Sunday week.
///
/// The week opens on the Monday strictly after the anchor, so a Monday
/// anchor reports the following week.
pub fn next_week_daily_energy(
    ctx: &ChartContext<'_>,
    anchor: NaiveDate,
) -> Result<WeekEnergyReport, ReportError> {
    let days_ahead = 7 - u64::from(anchor.weekday().num_days_from_monday());
    let monday = anchor
        .checked_add_days(Days::new(days_ahead))
        .ok_or(CalendarError::OutOfRange(anchor))?;

    let monday_pillars = ctx.four_pillars(monday, None)?;
    let mut days = Vec::with_capacity(7);
    days.push(daily(monday, monday_pillars.day));

    let mut date = monday + Duration::days(1);
    for _ in 0..6 {
        let pillars = ctx.four_pillars(date, None)?;
        days.push(daily(date, pillars.day));
        date += Duration::days(1);
    }

    Ok(WeekEnergyReport {
        anchor_date: anchor,
        year: monday_pillars.year,
        month: monday_pillars.month,
        days,
    })
}

/// Year whose months a report probes. The pillar year rolls over near early
/// February; up to and including Feb 15 the previous Gregorian year governs.
fn reference_year(anchor: NaiveDate) -> i32 {
    if anchor.month() > 2 || (anchor.month() == 2 && anchor.day() > 15) {
        anchor.year()
    } else {
        anchor.year() - 1
    }
}

fn daily(date: NaiveDate, pillar: AnnotatedPillar) -> DailyEnergy {
    DailyEnergy { date, weekday: date.format("%A").to_string(), pillar }
}
