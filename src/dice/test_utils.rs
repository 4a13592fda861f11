//! Shared test utilities for dice resolution
//!
//! Provides ScriptedDice, a die source that replays a fixed sequence
//! of results, so unit and integration tests can assert exact outcomes
//! without reaching into RNG internals.

use std::collections::VecDeque;

use super::DieSource;

/// Die source that replays a fixed sequence of results
///
/// Panics if the script runs dry or a scripted value does not fit the
/// requested die; both indicate a broken test.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    script: VecDeque<u32>,
}

impl ScriptedDice {
    /// Create a source that yields the given values in order
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let value = self
            .script
            .pop_front()
            .expect("ScriptedDice ran out of values");
        assert!(
            (1..=sides).contains(&value),
            "scripted value {} does not fit a d{}",
            value,
            sides
        );
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let mut dice = ScriptedDice::new([3, 17, 5]);
        assert_eq!(dice.roll_die(20), 3);
        assert_eq!(dice.roll_die(20), 17);
        assert_eq!(dice.remaining(), 1);
        assert_eq!(dice.roll_die(6), 5);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "ran out of values")]
    fn test_panics_when_exhausted() {
        let mut dice = ScriptedDice::new([4]);
        dice.roll_die(6);
        dice.roll_die(6);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_panics_on_impossible_value() {
        let mut dice = ScriptedDice::new([7]);
        dice.roll_die(6);
    }
}
