//! Chart construction entry point.

use chrono::{NaiveDate, NaiveTime, Timelike};

use sizhu_calendar::{MonthTransitionTable, solar_to_lunar};

use crate::annotate::annotate;
use crate::distribution::element_distribution;
use crate::error::ChartError;
use crate::luck::compute_luck_pillars;
use crate::pillars::{day_pillar, hour_pillar, month_pillar, year_pillar};
use crate::types::{BaziChart, BirthInfo, FourPillars, LuckPillars, RawPillars};

/// Borrowed view over the solar-term transition table. Every pillar
/// computation, for a birth chart or a probe date, goes through one of
/// these; the table itself is parsed once and shared.
#[derive(Debug, Clone, Copy)]
pub struct ChartContext<'a> {
    table: &'a MonthTransitionTable,
}

impl<'a> ChartContext<'a> {
    pub fn new(table: &'a MonthTransitionTable) -> Self {
        Self { table }
    }

    /// Stem/branch pairs of a moment. A missing time leaves the hour pillar
    /// out; the year, month, and day pillars never depend on it.
    pub fn raw_pillars(
        &self,
        date: NaiveDate,
        time: Option<NaiveTime>,
    ) -> Result<RawPillars, ChartError> {
        let lunar = solar_to_lunar(date)?;
        let day = day_pillar(date);
        Ok(RawPillars {
            lunar_date: lunar,
            year: year_pillar(lunar.year),
            month: month_pillar(lunar, date, self.table)?,
            day,
            hour: time.map(|t| hour_pillar(t.hour(), day.stem)),
        })
    }

    /// Annotated pillars of a moment.
    pub fn four_pillars(
        &self,
        date: NaiveDate,
        time: Option<NaiveTime>,
    ) -> Result<FourPillars, ChartError> {
        Ok(annotate(&self.raw_pillars(date, time)?))
    }

    /// The 9-period luck schedule for a birth; the clock time never enters
    /// it.
    pub fn luck_pillars(&self, birth: &BirthInfo) -> Result<LuckPillars, ChartError> {
        let raw = self.raw_pillars(birth.date, None)?;
        compute_luck_pillars(birth.sex, birth.date, &raw, self.table)
    }

    /// Full chart: annotated pillars, luck schedule, element distribution.
    pub fn chart(&self, birth: &BirthInfo) -> Result<BaziChart, ChartError> {
        let raw = self.raw_pillars(birth.date, birth.time)?;
        let four_pillars = annotate(&raw);
        let luck_pillars = compute_luck_pillars(birth.sex, birth.date, &raw, self.table)?;
        let element_distribution = element_distribution(&four_pillars);
        Ok(BaziChart { birth: *birth, four_pillars, luck_pillars, element_distribution })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_core::{EarthlyBranch, HeavenlyStem, StemBranch};

    const TRANSITIONS: &str = "\
year,month_1,month_2,month_3,month_4,month_5,month_6,month_7,month_8,month_9,month_10,month_11,month_12
1999,6,4,6,5,6,6,7,8,8,9,8,7
2000,6,4,5,4,5,5,7,7,7,8,7,7
";

    fn pair(stem: HeavenlyStem, branch: EarthlyBranch) -> StemBranch {
        StemBranch::new(stem, branch)
    }

    #[test]
    fn raw_pillars_millennium_noon() {
        let table = MonthTransitionTable::parse(TRANSITIONS).unwrap();
        let ctx = ChartContext::new(&table);
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        let raw = ctx.raw_pillars(date, Some(noon)).unwrap();
        assert_eq!(raw.year, pair(HeavenlyStem::Ji, EarthlyBranch::Mao));
        assert_eq!(raw.month, pair(HeavenlyStem::Ding, EarthlyBranch::Chou));
        assert_eq!(raw.day, pair(HeavenlyStem::Wu, EarthlyBranch::Wu));
        assert_eq!(raw.hour, Some(pair(HeavenlyStem::Wu, EarthlyBranch::Wu)));
        assert_eq!(raw.lunar_date.to_string(), "1999-11-25");
    }

    #[test]
    fn missing_time_leaves_hour_out() {
        let table = MonthTransitionTable::parse(TRANSITIONS).unwrap();
        let ctx = ChartContext::new(&table);
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

        let raw = ctx.raw_pillars(date, None).unwrap();
        assert_eq!(raw.hour, None);
        let pillars = ctx.four_pillars(date, None).unwrap();
        assert!(pillars.hour.is_none());
    }

    #[test]
    fn out_of_table_date_fails() {
        let table = MonthTransitionTable::parse(TRANSITIONS).unwrap();
        let ctx = ChartContext::new(&table);
        let date = NaiveDate::from_ymd_opt(1899, 6, 1).unwrap();
        assert!(ctx.raw_pillars(date, None).is_err());
    }
}
