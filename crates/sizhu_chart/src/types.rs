//! Types for chart computation results.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use sizhu_calendar::LunarDate;
use sizhu_core::{
    Animal, EarthlyBranch, Element, HeavenlyStem, Polarity, SignedElement, StemBranch, TenGod,
};

use crate::error::ChartError;

/// Birth sex; only the luck-pillar direction depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// English name of the sex.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("male") {
            Some(Self::Male)
        } else if name.eq_ignore_ascii_case("female") {
            Some(Self::Female)
        } else {
            None
        }
    }
}

/// Parsed birth input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthInfo {
    /// Gregorian birth date.
    pub date: NaiveDate,
    /// Clock time of birth; absent when unknown, which suppresses the hour
    /// pillar in the chart.
    pub time: Option<NaiveTime>,
    /// Birth sex.
    pub sex: Sex,
}

impl BirthInfo {
    /// Assemble from already-parsed parts.
    pub const fn new(date: NaiveDate, time: Option<NaiveTime>, sex: Sex) -> Self {
        Self { date, time, sex }
    }

    /// Parse `YYYY-MM-DD`, optional `HH:MM`, and `male`/`female` inputs.
    pub fn parse(date: &str, time: Option<&str>, sex: &str) -> Result<Self, ChartError> {
        let parsed_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ChartError::Parse(format!("invalid date '{date}', expected YYYY-MM-DD")))?;
        let parsed_time = match time {
            Some(t) => Some(
                NaiveTime::parse_from_str(t, "%H:%M")
                    .map_err(|_| ChartError::Parse(format!("invalid time '{t}', expected HH:MM")))?,
            ),
            None => None,
        };
        let parsed_sex = Sex::from_name(sex).ok_or_else(|| {
            ChartError::Parse(format!("invalid sex '{sex}', expected male or female"))
        })?;
        Ok(Self { date: parsed_date, time: parsed_time, sex: parsed_sex })
    }
}

/// Stem/branch pairs of the four pillars before annotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPillars {
    /// Lunisolar equivalent of the input date.
    pub lunar_date: LunarDate,
    /// Year pillar.
    pub year: StemBranch,
    /// Month pillar.
    pub month: StemBranch,
    /// Day pillar.
    pub day: StemBranch,
    /// Hour pillar; None when no time was supplied.
    pub hour: Option<StemBranch>,
}

/// One pillar with its full annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedPillar {
    /// The heavenly stem.
    pub stem: HeavenlyStem,
    /// The earthly branch.
    pub branch: EarthlyBranch,
    /// Element of the stem.
    pub stem_element: Element,
    /// Element of the branch.
    pub branch_element: Element,
    /// Zodiac animal of the branch.
    pub branch_animal: Animal,
    /// Polarity of the branch (equal to the stem's in any sexagenary pair).
    pub polarity: Polarity,
    /// Hidden stems of the branch, principal first.
    pub hidden_stems: Vec<HeavenlyStem>,
    /// Ten-god label of the stem relative to the day master.
    pub stem_ten_god: TenGod,
    /// Ten-god label of each hidden stem, in hidden-stem order.
    pub hidden_stem_ten_gods: Vec<TenGod>,
    /// Signed element of each hidden stem, in hidden-stem order.
    pub hidden_stem_elements: Vec<SignedElement>,
}

impl AnnotatedPillar {
    /// The raw stem/branch pair.
    pub fn pair(&self) -> StemBranch {
        StemBranch::new(self.stem, self.branch)
    }
}

/// The annotated four pillars of a moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FourPillars {
    /// Lunisolar equivalent of the input date.
    pub lunar_date: LunarDate,
    /// Year pillar.
    pub year: AnnotatedPillar,
    /// Month pillar.
    pub month: AnnotatedPillar,
    /// Day pillar (the ten-god pivot).
    pub day: AnnotatedPillar,
    /// Hour pillar; None when no time was supplied.
    pub hour: Option<AnnotatedPillar>,
}

/// Walk direction of the luck-pillar cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// English name of the direction.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// One decade-long luck period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckPillarPeriod {
    /// Age at which the period opens.
    pub start_age: u8,
    /// Age at which the period closes (start + 10).
    pub end_age: u8,
    /// The period's annotated stem/branch pair.
    pub pillar: AnnotatedPillar,
}

/// The 9-period luck-pillar schedule, ordered by increasing start age.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckPillars {
    /// Walk direction fixed by year-stem polarity and sex.
    pub direction: Direction,
    /// Opening age of the first period, 1..=9.
    pub start_age: u8,
    /// The nine periods, youngest bracket first.
    pub periods: Vec<LuckPillarPeriod>,
}

/// Fraction of each element across a chart's stems, branches, and hidden
/// stems. Fractions sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementDistribution {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementDistribution {
    /// Fraction for one element.
    pub fn fraction(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// (element, fraction) pairs in generation-cycle order.
    pub fn entries(&self) -> [(Element, f64); 5] {
        [
            (Element::Wood, self.wood),
            (Element::Fire, self.fire),
            (Element::Earth, self.earth),
            (Element::Metal, self.metal),
            (Element::Water, self.water),
        ]
    }
}

/// A complete birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaziChart {
    /// Echo of the parsed input.
    pub birth: BirthInfo,
    /// The annotated four pillars.
    pub four_pillars: FourPillars,
    /// The luck-pillar schedule.
    pub luck_pillars: LuckPillars,
    /// Elemental balance over the present pillars.
    pub element_distribution: ElementDistribution,
}
