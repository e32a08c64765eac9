//! The 10 heavenly stems (tiangan).
//!
//! Stems cycle Jia..Gui; each carries a fixed element and polarity. Two
//! consecutive stems share an element (yang variant first), so the stem for
//! a given (element, polarity) pair is a direct index computation.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::element::{Element, Polarity, SignedElement};

/// The 10 heavenly stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Romanized name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Chinese glyph of the stem.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based index into ALL_STEMS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Element of the stem.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Polarity of the stem (even index = yang).
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Jia | Self::Bing | Self::Wu | Self::Geng | Self::Ren => Polarity::Yang,
            Self::Yi | Self::Ding | Self::Ji | Self::Xin | Self::Gui => Polarity::Yin,
        }
    }

    /// Element with the stem's polarity sign attached.
    pub const fn signed_element(self) -> SignedElement {
        SignedElement { element: self.element(), polarity: self.polarity() }
    }

    /// The yang/yin variant pair table: the stem carrying (element, polarity).
    pub fn of(element: Element, polarity: Polarity) -> Self {
        let offset = match polarity {
            Polarity::Yang => 0,
            Polarity::Yin => 1,
        };
        ALL_STEMS[(element.index() * 2 + offset) as usize]
    }

    /// Stem `offset` steps away in the 10-cycle; negative steps walk backward.
    pub fn cycle(self, offset: i32) -> Self {
        let index = (self.index() as i32 + offset).rem_euclid(10);
        ALL_STEMS[index as usize]
    }

    /// Case-insensitive lookup by romanized name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_STEMS.into_iter().find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl Display for HeavenlyStem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), 10);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn polarity_alternates() {
        for s in ALL_STEMS {
            let expected = if s.index() % 2 == 0 { Polarity::Yang } else { Polarity::Yin };
            assert_eq!(s.polarity(), expected);
        }
    }

    #[test]
    fn jia_is_yang_wood() {
        assert_eq!(HeavenlyStem::Jia.element(), Element::Wood);
        assert_eq!(HeavenlyStem::Jia.polarity(), Polarity::Yang);
    }

    #[test]
    fn variant_pair_round_trips() {
        for s in ALL_STEMS {
            assert_eq!(HeavenlyStem::of(s.element(), s.polarity()), s);
        }
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(HeavenlyStem::Gui.cycle(1), HeavenlyStem::Jia);
        assert_eq!(HeavenlyStem::Jia.cycle(-1), HeavenlyStem::Gui);
        assert_eq!(HeavenlyStem::Bing.cycle(10), HeavenlyStem::Bing);
        assert_eq!(HeavenlyStem::Bing.cycle(-23), HeavenlyStem::Gui);
    }

    #[test]
    fn display_carries_glyph() {
        assert_eq!(HeavenlyStem::Jia.to_string(), "Jia (甲)");
    }

    #[test]
    fn from_name_round_trips() {
        for s in ALL_STEMS {
            assert_eq!(HeavenlyStem::from_name(s.name()), Some(s));
        }
        assert_eq!(HeavenlyStem::from_name("geng"), Some(HeavenlyStem::Geng));
        assert_eq!(HeavenlyStem::from_name("Zeta"), None);
    }
}
