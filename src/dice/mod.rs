//! Dice rolling module
//!
//! Implements tabletop dice mechanics:
//! - Notation parsing (e.g., "2d6+3")
//! - Rolling, with advantage/disadvantage on single-d20 checks
//! - Critical (natural 20) and fumble (natural 1) detection
//! - Injectable randomness for deterministic tests

mod notation;
mod roll;
pub mod test_utils;

pub use notation::{DiceNotation, MalformedNotation};
pub use roll::{resolve, roll, DieSource, RollOptions, RollResult};
