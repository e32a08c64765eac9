//! The five elements (wuxing) and yin/yang polarity.
//!
//! `ALL_ELEMENTS` is ordered along the generation cycle (Wood feeds Fire,
//! Fire feeds Earth, ...), which makes every five-element relation a fixed
//! index offset. Hidden stems surface their element with a polarity sign
//! (`+Wood` for yang wood), modeled by [`SignedElement`].

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// The 5 elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generation-cycle order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based index into ALL_ELEMENTS (generation-cycle position).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_ELEMENTS.into_iter().find(|e| e.name().eq_ignore_ascii_case(name))
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Yang/yin polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// English name of the polarity.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    /// Sign prefix used when rendering signed elements.
    pub const fn sign(self) -> char {
        match self {
            Self::Yang => '+',
            Self::Yin => '-',
        }
    }
}

impl Display for Polarity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An element tagged with the polarity of the stem carrying it.
///
/// Renders as `+Wood` / `-Wood`; this is how hidden-stem elements appear in
/// chart output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignedElement {
    /// The bare element.
    pub element: Element,
    /// Polarity of the carrying stem.
    pub polarity: Polarity,
}

impl Display for SignedElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.polarity.sign(), self.element.name())
    }
}

impl Serialize for SignedElement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
