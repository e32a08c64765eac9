//! Lunisolar calendar support for Four-Pillars computation.
//!
//! Two pieces: conversion of Gregorian dates to the Chinese lunisolar
//! calendar over a packed month-length table (1900-2049), and the
//! month-transition table of solar-term boundary dates supplied as external
//! reference data. Both are loaded/derived once and read-only afterward.

pub mod error;
pub mod lunar;
pub mod transition;

pub use error::CalendarError;
pub use lunar::{FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR, LunarDate, leap_month, solar_to_lunar};
pub use transition::MonthTransitionTable;
