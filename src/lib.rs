//! dicebox - tabletop dice mechanics
//!
//! The deterministic core of a tabletop session manager: dice notation
//! parsing and rolling, plus the chat command layer that fronts it.
//! Transport, persistence, and session handling belong to the caller.

pub mod command;
pub mod dice;

pub use dice::{DiceNotation, MalformedNotation, RollOptions, RollResult};
