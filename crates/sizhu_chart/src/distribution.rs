//! Element distribution over a chart's pillars.

use sizhu_core::Element;

use crate::types::{ElementDistribution, FourPillars};

/// Fraction of each element among every stem, branch, and hidden stem of
/// the chart. Charts without an hour pillar aggregate over three pillars
/// only, so the denominator shrinks with them.
pub fn element_distribution(pillars: &FourPillars) -> ElementDistribution {
    let mut counts = [0u32; 5];
    let mut total = 0u32;

    let visible = [&pillars.year, &pillars.month, &pillars.day];
    for pillar in visible.into_iter().chain(&pillars.hour) {
        counts[pillar.stem_element.index() as usize] += 1;
        counts[pillar.branch_element.index() as usize] += 1;
        total += 2;
        for hidden in &pillar.hidden_stems {
            counts[hidden.element().index() as usize] += 1;
            total += 1;
        }
    }

    let fraction =
        |element: Element| f64::from(counts[element.index() as usize]) / f64::from(total);
    ElementDistribution {
        wood: fraction(Element::Wood),
        fire: fraction(Element::Fire),
        earth: fraction(Element::Earth),
        metal: fraction(Element::Metal),
        water: fraction(Element::Water),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_calendar::LunarDate;
    use sizhu_core::{EarthlyBranch, HeavenlyStem, StemBranch};

    use crate::annotate::annotate;
    use crate::types::RawPillars;

    fn sample_raw(with_hour: bool) -> RawPillars {
        // 2000-01-01: Ji Mao year, Ding Chou month, Wu Wu day and hour.
        RawPillars {
            lunar_date: LunarDate { year: 1999, month: 11, day: 25, leap: false },
            year: StemBranch::new(HeavenlyStem::Ji, EarthlyBranch::Mao),
            month: StemBranch::new(HeavenlyStem::Ding, EarthlyBranch::Chou),
            day: StemBranch::new(HeavenlyStem::Wu, EarthlyBranch::Wu),
            hour: with_hour.then(|| StemBranch::new(HeavenlyStem::Wu, EarthlyBranch::Wu)),
        }
    }

    #[test]
    fn four_pillar_fractions() {
        let dist = element_distribution(&annotate(&sample_raw(true)));
        assert_eq!(dist.earth, 7.0 / 16.0);
        assert_eq!(dist.fire, 5.0 / 16.0);
        assert_eq!(dist.wood, 2.0 / 16.0);
        assert_eq!(dist.water, 1.0 / 16.0);
        assert_eq!(dist.metal, 1.0 / 16.0);
    }

    #[test]
    fn three_pillar_fractions_without_hour() {
        let dist = element_distribution(&annotate(&sample_raw(false)));
        assert_eq!(dist.earth, 5.0 / 12.0);
        assert_eq!(dist.fire, 3.0 / 12.0);
        assert_eq!(dist.wood, 2.0 / 12.0);
        assert_eq!(dist.water, 1.0 / 12.0);
        assert_eq!(dist.metal, 1.0 / 12.0);
    }

    #[test]
    fn fractions_sum_to_one() {
        for with_hour in [true, false] {
            let dist = element_distribution(&annotate(&sample_raw(with_hour)));
            let sum: f64 = dist.entries().iter().map(|(_, f)| f).sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }
}
