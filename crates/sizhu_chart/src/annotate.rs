//! Pillar annotation: elements, animals, hidden stems, ten gods.

use sizhu_core::{HeavenlyStem, StemBranch, ten_god};

use crate::types::{AnnotatedPillar, FourPillars, RawPillars};

/// Annotate one stem/branch pair against the day-master stem.
pub fn annotate_pair(pair: StemBranch, day_stem: HeavenlyStem) -> AnnotatedPillar {
    let hidden = pair.branch.hidden_stems();
    AnnotatedPillar {
        stem: pair.stem,
        branch: pair.branch,
        stem_element: pair.stem.element(),
        branch_element: pair.branch.element(),
        branch_animal: pair.branch.animal(),
        polarity: pair.branch.polarity(),
        hidden_stems: hidden.to_vec(),
        stem_ten_god: ten_god(day_stem, pair.stem),
        hidden_stem_ten_gods: hidden.iter().map(|&h| ten_god(day_stem, h)).collect(),
        hidden_stem_elements: hidden.iter().map(|&h| h.signed_element()).collect(),
    }
}

/// Annotate all pillars.
///
/// The day pillar is the ten-god pivot: its stem must be final before any
/// label is assigned, so it is read once up front and every pillar
/// (including the day itself, which labels as Friend) is annotated against
/// it.
pub fn annotate(raw: &RawPillars) -> FourPillars {
    let day_stem = raw.day.stem;
    FourPillars {
        lunar_date: raw.lunar_date,
        year: annotate_pair(raw.year, day_stem),
        month: annotate_pair(raw.month, day_stem),
        day: annotate_pair(raw.day, day_stem),
        hour: raw.hour.map(|pair| annotate_pair(pair, day_stem)),
    }
}
