//! Star matching over external rule and detail tables.
//!
//! A rule row names a star and the pillar components it requires: up to
//! four birth-chart components and up to two components of the target day.
//! Each star consults a fixed pair of columns; Peach Blossom and Clash
//! retry with a secondary pair when the primary pair matches no row. The
//! matched stars are reported in a fixed order with their descriptions from
//! the detail table.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::Serialize;

use sizhu_chart::{ChartContext, FourPillars};
use sizhu_core::{EarthlyBranch, HeavenlyStem};

use crate::error::ReportError;

/// The five matchable stars, in matching and output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Star {
    Nobleman,
    PeachBlossom,
    HeavenlyVirtue,
    FortuneVirtue,
    Clash,
}

/// All 5 stars in matching order.
pub const ALL_STARS: [Star; 5] = [
    Star::Nobleman,
    Star::PeachBlossom,
    Star::HeavenlyVirtue,
    Star::FortuneVirtue,
    Star::Clash,
];

impl Star {
    /// English name of the star, in the sentence case the tables use.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nobleman => "Nobleman",
            Self::PeachBlossom => "Peach blossom",
            Self::HeavenlyVirtue => "Heavenly virtue",
            Self::FortuneVirtue => "Fortune virtue",
            Self::Clash => "Clash",
        }
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_STARS.into_iter().find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl Display for Star {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Star {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One rule row. Empty cells parse to `None`; a `None` column fails any
/// equality test against a concrete component, so a rule only ever matches
/// through columns it fills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRule {
    /// Star the row belongs to.
    pub star: Star,
    /// Required birth day stem (`fourpillar_day_stem`).
    pub birth_day_stem: Option<HeavenlyStem>,
    /// Required birth day branch (`fourpillar_day_branch`).
    pub birth_day_branch: Option<EarthlyBranch>,
    /// Required birth month branch (`fourpillar_month_branch`).
    pub birth_month_branch: Option<EarthlyBranch>,
    /// Required birth year branch (`fourpillar_year_branch`).
    pub birth_year_branch: Option<EarthlyBranch>,
    /// Required target day stem (`day_stem`).
    pub target_day_stem: Option<HeavenlyStem>,
    /// Required target day branch (`day_branch`).
    pub target_day_branch: Option<EarthlyBranch>,
}

/// The star rule table.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRuleTable {
    rows: Vec<StarRule>,
}

impl StarRuleTable {
    /// Parse the CSV form of the table.
    ///
    /// The header names the `star`, `fourpillar_day_stem`,
    /// `fourpillar_day_branch`, `fourpillar_month_branch`,
    /// `fourpillar_year_branch`, `day_stem`, and `day_branch` columns in any
    /// order. Stem, branch, and star cells hold romanized names matched
    /// case-insensitively; stem and branch cells may be empty. Blank lines
    /// are skipped.
    pub fn parse(text: &str) -> Result<Self, ReportError> {
        let mut lines = text.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines
            .next()
            .ok_or_else(|| ReportError::Parse("empty star rule table".to_string()))?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        let column = |name: &str| {
            columns
                .iter()
                .position(|&c| c == name)
                .ok_or_else(|| ReportError::Parse(format!("header missing '{name}' column")))
        };
        let star_col = column("star")?;
        let birth_day_stem_col = column("fourpillar_day_stem")?;
        let birth_day_branch_col = column("fourpillar_day_branch")?;
        let birth_month_branch_col = column("fourpillar_month_branch")?;
        let birth_year_branch_col = column("fourpillar_year_branch")?;
        let target_day_stem_col = column("day_stem")?;
        let target_day_branch_col = column("day_branch")?;

        let mut rows = Vec::new();
        for (index, line) in lines {
            let lineno = index + 1;
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != columns.len() {
                return Err(ReportError::Parse(format!(
                    "line {lineno}: expected {} fields, found {}",
                    columns.len(),
                    fields.len()
                )));
            }
            let star_cell = fields[star_col];
            let star = Star::from_name(star_cell).ok_or_else(|| {
                ReportError::Parse(format!("line {lineno}: unknown star '{star_cell}'"))
            })?;
            rows.push(StarRule {
                star,
                birth_day_stem: parse_stem(fields[birth_day_stem_col], lineno)?,
                birth_day_branch: parse_branch(fields[birth_day_branch_col], lineno)?,
                birth_month_branch: parse_branch(fields[birth_month_branch_col], lineno)?,
                birth_year_branch: parse_branch(fields[birth_year_branch_col], lineno)?,
                target_day_stem: parse_stem(fields[target_day_stem_col], lineno)?,
                target_day_branch: parse_branch(fields[target_day_branch_col], lineno)?,
            });
        }

        Ok(Self { rows })
    }

    /// Stars whose rules match the (birth chart, target day) pair, in the
    /// fixed star order, each star at most once.
    pub fn match_stars(&self, birth: &FourPillars, target: &FourPillars) -> Vec<Star> {
        let birth_day_stem = Some(birth.day.stem);
        let birth_day_branch = Some(birth.day.branch);
        let birth_month_branch = Some(birth.month.branch);
        let birth_year_branch = Some(birth.year.branch);
        let target_day_stem = Some(target.day.stem);
        let target_day_branch = Some(target.day.branch);

        let mut matched = Vec::new();
        for star in ALL_STARS {
            let hit = match star {
                Star::Nobleman => self.any_rule(star, |r| {
                    r.birth_day_stem == birth_day_stem && r.target_day_branch == target_day_branch
                }),
                Star::PeachBlossom => {
                    self.any_rule(star, |r| {
                        r.birth_day_branch == birth_day_branch
                            && r.target_day_branch == target_day_branch
                    }) || self.any_rule(star, |r| {
                        r.birth_year_branch == birth_year_branch
                            && r.target_day_branch == target_day_branch
                    })
                }
                Star::HeavenlyVirtue => self.any_rule(star, |r| {
                    r.birth_month_branch == birth_month_branch
                        && r.target_day_stem == target_day_stem
                }),
                Star::FortuneVirtue => self.any_rule(star, |r| {
                    r.birth_year_branch == birth_year_branch
                        && r.target_day_branch == target_day_branch
                }),
                Star::Clash => {
                    self.any_rule(star, |r| {
                        r.birth_day_branch == birth_day_branch
                            && r.target_day_branch == target_day_branch
                    }) || self.any_rule(star, |r| {
                        // The fallback compares the rule's month-branch
                        // column against the birth day branch, not the birth
                        // month branch. Pinned lookup behavior.
                        r.birth_month_branch == birth_day_branch
                            && r.target_day_branch == target_day_branch
                    })
                }
            };
            if hit {
                matched.push(star);
            }
        }
        matched
    }

    fn any_rule(&self, star: Star, pred: impl Fn(&StarRule) -> bool) -> bool {
        self.rows.iter().any(|r| r.star == star && pred(r))
    }

    /// Number of rule rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Star descriptions keyed by star.
#[derive(Debug, Clone, PartialEq)]
pub struct StarDetailTable {
    rows: BTreeMap<Star, String>,
}

impl StarDetailTable {
    /// Parse the CSV form of the table.
    ///
    /// The header names a `star` and a `description` column. Rows split at
    /// the first comma, so a description may itself contain commas when the
    /// description column comes second. Duplicate stars are parse errors.
    pub fn parse(text: &str) -> Result<Self, ReportError> {
        let mut lines = text.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines
            .next()
            .ok_or_else(|| ReportError::Parse("empty star detail table".to_string()))?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        if columns.len() != 2 || !columns.contains(&"star") || !columns.contains(&"description") {
            return Err(ReportError::Parse(
                "header must name 'star' and 'description' columns".to_string(),
            ));
        }
        let star_first = columns[0] == "star";

        let mut rows = BTreeMap::new();
        for (index, line) in lines {
            let lineno = index + 1;
            let (first, rest) = line.split_once(',').ok_or_else(|| {
                ReportError::Parse(format!("line {lineno}: expected 2 fields, found 1"))
            })?;
            let (star_cell, description) =
                if star_first { (first, rest) } else { (rest, first) };
            let star_cell = star_cell.trim();
            let star = Star::from_name(star_cell).ok_or_else(|| {
                ReportError::Parse(format!("line {lineno}: unknown star '{star_cell}'"))
            })?;
            if rows.insert(star, description.trim().to_string()).is_some() {
                return Err(ReportError::Parse(format!(
                    "line {lineno}: duplicate star '{star}'"
                )));
            }
        }

        Ok(Self { rows })
    }

    /// Description of a star, if present.
    pub fn description(&self, star: Star) -> Option<&str> {
        self.rows.get(&star).map(String::as_str)
    }

    /// Number of detail rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One matched star with its description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarMatch {
    /// The matched star.
    pub star: Star,
    /// Description from the detail table.
    pub description: String,
}

/// Stars matching a (birth date, target date) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarReport {
    /// Birth date of the chart the rules were matched against.
    pub birth_date: NaiveDate,
    /// The annotated day.
    pub target_date: NaiveDate,
    /// Matched stars in the fixed star order.
    pub stars: Vec<StarMatch>,
}

/// Match a birth chart against a target day and attach star descriptions.
///
/// Both charts are computed through `ctx`; the clock time is immaterial
/// because only day, month, and year components are consulted.
pub fn star_report(
    ctx: &ChartContext<'_>,
    birth_date: NaiveDate,
    target_date: NaiveDate,
    rules: &StarRuleTable,
    details: &StarDetailTable,
) -> Result<StarReport, ReportError> {
    let birth = ctx.four_pillars(birth_date, None)?;
    let target = ctx.four_pillars(target_date, None)?;

    let stars = rules
        .match_stars(&birth, &target)
        .into_iter()
        .map(|star| {
            details
                .description(star)
                .map(|d| StarMatch { star, description: d.to_string() })
                .ok_or(ReportError::MissingStarDetail(star))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StarReport { birth_date, target_date, stars })
}

fn parse_stem(cell: &str, lineno: usize) -> Result<Option<HeavenlyStem>, ReportError> {
    if cell.is_empty() {
        return Ok(None);
    }
    HeavenlyStem::from_name(cell)
        .map(Some)
        .ok_or_else(|| ReportError::Parse(format!("line {lineno}: unknown stem '{cell}'")))
}

fn parse_branch(cell: &str, lineno: usize) -> Result<Option<EarthlyBranch>, ReportError> {
    if cell.is_empty() {
        return Ok(None);
    }
    EarthlyBranch::from_name(cell)
        .map(Some)
        .ok_or_else(|| ReportError::Parse(format!("line {lineno}: unknown branch '{cell}'")))
}
