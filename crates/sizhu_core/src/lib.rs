//! Symbols and attribute tables for Four-Pillars (BaZi) computation.
//!
//! The 10 heavenly stems and 12 earthly branches with their fixed
//! element/polarity/animal/hidden-stem attributes, the five-element relation
//! cycle, and the ten-god labeling derived from it. Everything here is a
//! process-wide constant; no I/O, no state.

pub mod branch;
pub mod element;
pub mod pair;
pub mod stem;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Animal, EarthlyBranch};
pub use element::{ALL_ELEMENTS, Element, Polarity, SignedElement};
pub use pair::StemBranch;
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use ten_god::{Relation, TenGod, relation_between, relation_gods, ten_god};
