//! The 12 earthly branches (dizhi) and their zodiac animals.
//!
//! Branches cycle Zi..Hai; each carries a fixed element, polarity, animal,
//! and one to three hidden stems (principal stem first). The hidden-stem
//! assignments follow the standard branch tables.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::stem::HeavenlyStem;

/// The 12 earthly branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// Romanized name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese glyph of the branch.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// 0-based index into ALL_BRANCHES.
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
        }
    }

    /// Polarity of the branch (even index = yang).
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Zi | Self::Yin | Self::Chen | Self::Wu | Self::Shen | Self::Xu => Polarity::Yang,
            Self::Chou | Self::Mao | Self::Si | Self::Wei | Self::You | Self::Hai => Polarity::Yin,
        }
    }

    /// Zodiac animal of the branch.
    pub const fn animal(self) -> Animal {
        match self {
            Self::Zi => Animal::Rat,
            Self::Chou => Animal::Ox,
            Self::Yin => Animal::Tiger,
            Self::Mao => Animal::Rabbit,
            Self::Chen => Animal::Dragon,
            Self::Si => Animal::Snake,
            Self::Wu => Animal::Horse,
            Self::Wei => Animal::Goat,
            Self::Shen => Animal::Monkey,
            Self::You => Animal::Rooster,
            Self::Xu => Animal::Dog,
            Self::Hai => Animal::Pig,
        }
    }

    /// Hidden stems of the branch, principal stem first.
    pub const fn hidden_stems(self) -> &'static [HeavenlyStem] {
        match self {
            Self::Zi => &[HeavenlyStem::Gui],
            Self::Chou => &[HeavenlyStem::Ji, HeavenlyStem::Gui, HeavenlyStem::Xin],
            Self::Yin => &[HeavenlyStem::Jia, HeavenlyStem::Bing, HeavenlyStem::Wu],
            Self::Mao => &[HeavenlyStem::Yi],
            Self::Chen => &[HeavenlyStem::Wu, HeavenlyStem::Yi, HeavenlyStem::Gui],
            Self::Si => &[HeavenlyStem::Bing, HeavenlyStem::Wu, HeavenlyStem::Geng],
            Self::Wu => &[HeavenlyStem::Ding, HeavenlyStem::Ji],
            Self::Wei => &[HeavenlyStem::Ji, HeavenlyStem::Ding, HeavenlyStem::Yi],
            Self::Shen => &[HeavenlyStem::Geng, HeavenlyStem::Ren, HeavenlyStem::Wu],
            Self::You => &[HeavenlyStem::Xin],
            Self::Xu => &[HeavenlyStem::Wu, HeavenlyStem::Xin, HeavenlyStem::Ding],
            Self::Hai => &[HeavenlyStem::Ren, HeavenlyStem::Jia],
        }
    }

    /// Branch `offset` steps away in the 12-cycle; negative steps walk backward.
    pub fn cycle(self, offset: i32) -> Self {
        let index = (self.index() as i32 + offset).rem_euclid(12);
        ALL_BRANCHES[index as usize]
    }

    /// Case-insensitive lookup by romanized name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_BRANCHES.into_iter().find(|b| b.name().eq_ignore_ascii_case(name))
    }
}

impl Display for EarthlyBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.glyph())
    }
}

/// The 12 zodiac animals, one per branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Animal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Animal {
    /// English name of the animal.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

impl Display for Animal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
