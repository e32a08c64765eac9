//! A paired heavenly stem and earthly branch.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// One stem/branch pair, the raw form of a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StemBranch {
    /// The heavenly stem.
    pub stem: HeavenlyStem,
    /// The earthly branch.
    pub branch: EarthlyBranch,
}

impl StemBranch {
    /// Pair up a stem and a branch.
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Pair `offset` steps away, stepping both cycles together.
    pub fn cycle(self, offset: i32) -> Self {
        Self { stem: self.stem.cycle(offset), branch: self.branch.cycle(offset) }
    }
}

impl Display for StemBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.stem, self.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_steps_both() {
        let pair = StemBranch::new(HeavenlyStem::Jia, EarthlyBranch::Zi);
        let next = pair.cycle(1);
        assert_eq!(next.stem, HeavenlyStem::Yi);
        assert_eq!(next.branch, EarthlyBranch::Chou);
        assert_eq!(pair.cycle(60), pair);
        assert_eq!(pair.cycle(-1).stem, HeavenlyStem::Gui);
        assert_eq!(pair.cycle(-1).branch, EarthlyBranch::Hai);
    }

    #[test]
    fn display_shows_both_glyphs() {
        let pair = StemBranch::new(HeavenlyStem::Jia, EarthlyBranch::Chen);
        assert_eq!(pair.to_string(), "Jia (甲) Chen (辰)");
    }
}
