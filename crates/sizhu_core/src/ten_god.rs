//! Ten-god (shi shen) labeling relative to the day-master stem.
//!
//! A stem's label combines two facts: where its element sits relative to the
//! day-master's element in the generation cycle (the [`Relation`]), and
//! whether its polarity matches the day-master's. Each relation owns a pair
//! of gods; matching polarity selects the first of the pair.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::element::Element;
use crate::stem::HeavenlyStem;

/// Relation of an element to the day-master element in the generation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relation {
    /// Same element as the day master.
    Companion,
    /// Element the day master produces.
    Output,
    /// Element the day master controls.
    Wealth,
    /// Element that controls the day master.
    Influence,
    /// Element that produces the day master.
    Resource,
}

impl Relation {
    /// English name of the relation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::Output => "Output",
            Self::Wealth => "Wealth",
            Self::Influence => "Influence",
            Self::Resource => "Resource",
        }
    }
}

/// Relation of `other` to `day`, from their generation-cycle offset.
///
/// ALL_ELEMENTS is ordered along the generation cycle, so producing is one
/// step forward and controlling is two.
pub fn relation_between(day: Element, other: Element) -> Relation {
    let diff = (other.index() as i32 - day.index() as i32).rem_euclid(5);
    match diff {
        0 => Relation::Companion,
        1 => Relation::Output,
        2 => Relation::Wealth,
        3 => Relation::Influence,
        _ => Relation::Resource,
    }
}

/// The ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    Friend,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

impl TenGod {
    /// Short label used in chart output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Friend => "F",
            Self::RobWealth => "RW",
            Self::EatingGod => "EG",
            Self::HurtingOfficer => "HO",
            Self::IndirectWealth => "IW",
            Self::DirectWealth => "DW",
            Self::SevenKillings => "7K",
            Self::DirectOfficer => "DO",
            Self::IndirectResource => "IR",
            Self::DirectResource => "DR",
        }
    }

    /// Spelled-out name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }
}

impl Display for TenGod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TenGod {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// God pair for a relation: (same polarity as day master, opposite polarity).
pub const fn relation_gods(relation: Relation) -> (TenGod, TenGod) {
    match relation {
        Relation::Companion => (TenGod::Friend, TenGod::RobWealth),
        Relation::Output => (TenGod::EatingGod, TenGod::HurtingOfficer),
        Relation::Wealth => (TenGod::IndirectWealth, TenGod::DirectWealth),
        Relation::Influence => (TenGod::SevenKillings, TenGod::DirectOfficer),
        Relation::Resource => (TenGod::IndirectResource, TenGod::DirectResource),
    }
}

/// Ten-god label of `stem` relative to the day-master `day_stem`.
pub fn ten_god(day_stem: HeavenlyStem, stem: HeavenlyStem) -> TenGod {
    let relation = relation_between(day_stem.element(), stem.element());
    let (same, opposite) = relation_gods(relation);
    if stem.polarity() == day_stem.polarity() { same } else { opposite }
}
