//! Golden-value integration tests for the full chart pipeline.
//!
//! The millennium fixture (2000-01-01 12:00, male) exercises every layer at
//! once: lunisolar conversion across a Gregorian year boundary, the month
//! pillar correction, ten-god labeling, hidden stems, the backward luck
//! walk, and the element distribution.

use chrono::{NaiveDate, NaiveTime};

use sizhu_calendar::MonthTransitionTable;
use sizhu_chart::{BirthInfo, ChartContext, Direction, Sex};
use sizhu_core::{EarthlyBranch, HeavenlyStem, StemBranch, TenGod};

const TRANSITIONS: &str = "\
year,month_1,month_2,month_3,month_4,month_5,month_6,month_7,month_8,month_9,month_10,month_11,month_12
1999,6,4,6,5,6,6,7,8,8,9,8,7
2000,6,4,5,4,5,5,7,7,7,8,7,7
";

fn table() -> MonthTransitionTable {
    MonthTransitionTable::parse(TRANSITIONS).unwrap()
}

fn millennium_birth(time: Option<(u32, u32)>) -> BirthInfo {
    let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let time = time.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap());
    BirthInfo::new(date, time, Sex::Male)
}

fn pair(stem: HeavenlyStem, branch: EarthlyBranch) -> StemBranch {
    StemBranch::new(stem, branch)
}

#[test]
fn millennium_chart_pillars() {
    let table = table();
    let ctx = ChartContext::new(&table);
    let chart = ctx.chart(&millennium_birth(Some((12, 0)))).unwrap();

    let pillars = &chart.four_pillars;
    assert_eq!(pillars.lunar_date.to_string(), "1999-11-25");
    assert_eq!(pillars.year.pair(), pair(HeavenlyStem::Ji, EarthlyBranch::Mao));
    assert_eq!(pillars.month.pair(), pair(HeavenlyStem::Ding, EarthlyBranch::Chou));
    assert_eq!(pillars.day.pair(), pair(HeavenlyStem::Wu, EarthlyBranch::Wu));
    assert_eq!(
        pillars.hour.as_ref().map(|p| p.pair()),
        Some(pair(HeavenlyStem::Wu, EarthlyBranch::Wu))
    );
}

#[test]
fn millennium_chart_ten_gods() {
    let table = table();
    let ctx = ChartContext::new(&table);
    let chart = ctx.chart(&millennium_birth(Some((12, 0)))).unwrap();

    let pillars = &chart.four_pillars;
    assert_eq!(pillars.year.stem_ten_god, TenGod::RobWealth);
    assert_eq!(pillars.month.stem_ten_god, TenGod::DirectResource);
    assert_eq!(pillars.day.stem_ten_god, TenGod::Friend);
    assert_eq!(pillars.hour.as_ref().unwrap().stem_ten_god, TenGod::Friend);

    // Hidden stems follow the branch tables: Mao hides Yi, Chou hides
    // Ji/Gui/Xin, the Wu branch hides Ding/Ji.
    assert_eq!(pillars.year.hidden_stems, vec![HeavenlyStem::Yi]);
    assert_eq!(pillars.year.hidden_stem_ten_gods, vec![TenGod::DirectOfficer]);
    assert_eq!(
        pillars.month.hidden_stems,
        vec![HeavenlyStem::Ji, HeavenlyStem::Gui, HeavenlyStem::Xin]
    );
    assert_eq!(
        pillars.month.hidden_stem_ten_gods,
        vec![TenGod::RobWealth, TenGod::DirectWealth, TenGod::HurtingOfficer]
    );
    assert_eq!(pillars.day.hidden_stems, vec![HeavenlyStem::Ding, HeavenlyStem::Ji]);
    assert_eq!(
        pillars.day.hidden_stem_ten_gods,
        vec![TenGod::DirectResource, TenGod::RobWealth]
    );

    let signed: Vec<String> =
        pillars.month.hidden_stem_elements.iter().map(|e| e.to_string()).collect();
    assert_eq!(signed, vec!["-Earth", "-Water", "-Metal"]);
}

#[test]
fn millennium_chart_luck() {
    let table = table();
    let ctx = ChartContext::new(&table);
    let chart = ctx.chart(&millennium_birth(Some((12, 0)))).unwrap();

    let luck = &chart.luck_pillars;
    assert_eq!(luck.direction, Direction::Backward);
    assert_eq!(luck.start_age, 8);
    assert_eq!(luck.periods.len(), 9);

    let expected = [
        (8, 18, pair(HeavenlyStem::Yi, EarthlyBranch::Hai)),
        (18, 28, pair(HeavenlyStem::Jia, EarthlyBranch::Xu)),
        (28, 38, pair(HeavenlyStem::Gui, EarthlyBranch::You)),
        (38, 48, pair(HeavenlyStem::Ren, EarthlyBranch::Shen)),
        (48, 58, pair(HeavenlyStem::Xin, EarthlyBranch::Wei)),
        (58, 68, pair(HeavenlyStem::Geng, EarthlyBranch::Wu)),
        (68, 78, pair(HeavenlyStem::Ji, EarthlyBranch::Si)),
        (78, 88, pair(HeavenlyStem::Wu, EarthlyBranch::Chen)),
        (88, 98, pair(HeavenlyStem::Ding, EarthlyBranch::Mao)),
    ];
    for (period, (start, end, sb)) in luck.periods.iter().zip(expected) {
        assert_eq!(period.start_age, start);
        assert_eq!(period.end_age, end);
        assert_eq!(period.pillar.pair(), sb);
    }
}

#[test]
fn millennium_chart_distribution() {
    let table = table();
    let ctx = ChartContext::new(&table);
    let chart = ctx.chart(&millennium_birth(Some((12, 0)))).unwrap();

    let dist = &chart.element_distribution;
    assert_eq!(dist.earth, 7.0 / 16.0);
    assert_eq!(dist.fire, 5.0 / 16.0);
    assert_eq!(dist.wood, 2.0 / 16.0);
    assert_eq!(dist.water, 1.0 / 16.0);
    assert_eq!(dist.metal, 1.0 / 16.0);
}

#[test]
fn no_time_chart_drops_hour_everywhere() {
    let table = table();
    let ctx = ChartContext::new(&table);
    let chart = ctx.chart(&millennium_birth(None)).unwrap();

    assert!(chart.birth.time.is_none());
    assert!(chart.four_pillars.hour.is_none());

    // Distribution shrinks to the three present pillars.
    let dist = &chart.element_distribution;
    assert_eq!(dist.earth, 5.0 / 12.0);
    assert_eq!(dist.fire, 3.0 / 12.0);

    // Luck pillars never depended on the hour.
    let with_time = ctx.chart(&millennium_birth(Some((12, 0)))).unwrap();
    assert_eq!(chart.luck_pillars, with_time.luck_pillars);
}

#[test]
fn chart_is_deterministic() {
    let table = table();
    let ctx = ChartContext::new(&table);
    let birth = millennium_birth(Some((12, 0)));
    assert_eq!(ctx.chart(&birth).unwrap(), ctx.chart(&birth).unwrap());
}

#[test]
fn late_night_hours_share_the_zi_pillar() {
    let table = table();
    let ctx = ChartContext::new(&table);
    let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let t = |h, m| Some(NaiveTime::from_hms_opt(h, m, 0).unwrap());

    let before_midnight = ctx.raw_pillars(date, t(23, 30)).unwrap();
    let after_midnight = ctx.raw_pillars(date, t(0, 30)).unwrap();
    assert_eq!(before_midnight.hour, after_midnight.hour);
    assert_eq!(before_midnight.hour.unwrap().branch, EarthlyBranch::Zi);
}

#[test]
fn chart_serializes_with_romanized_names() {
    let table = table();
    let ctx = ChartContext::new(&table);
    let chart = ctx.chart(&millennium_birth(Some((12, 0)))).unwrap();

    let value = serde_json::to_value(&chart).unwrap();
    let year = &value["four_pillars"]["year"];
    assert_eq!(year["stem"], "Ji");
    assert_eq!(year["branch"], "Mao");
    assert_eq!(year["branch_animal"], "Rabbit");
    assert_eq!(year["stem_ten_god"], "RW");
    assert_eq!(year["hidden_stem_elements"][0], "-Wood");
    assert_eq!(value["luck_pillars"]["direction"], "Backward");
    assert_eq!(value["birth"]["sex"], "Male");
}
