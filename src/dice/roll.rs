//! Dice resolution
//!
//! Rolls a parsed notation and reports the outcome:
//! - Advantage/disadvantage on single-d20 checks
//! - Critical (natural 20) and fumble (natural 1) detection
//! - A human-readable breakdown of the computation
//!
//! Randomness is injected through [`DieSource`] so callers can supply
//! the thread-local RNG, a seeded RNG, or a scripted sequence in tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{DiceNotation, MalformedNotation};

/// Source of individual die results
pub trait DieSource {
    /// Produce a uniform value in `[1, sides]`
    fn roll_die(&mut self, sides: u32) -> u32;
}

/// Any `rand` RNG is a die source
impl<R: Rng> DieSource for R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides)
    }
}

/// Options for a roll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOptions {
    /// Roll two d20s and keep the higher (single-d20 checks only)
    pub advantage: bool,
    /// Roll two d20s and keep the lower (single-d20 checks only)
    pub disadvantage: bool,
}

/// Which of the two dice to keep when rolling twice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keep {
    High,
    Low,
}

impl RollOptions {
    /// Advantage and disadvantage cancel out when both are set
    fn keep(&self) -> Option<Keep> {
        match (self.advantage, self.disadvantage) {
            (true, false) => Some(Keep::High),
            (false, true) => Some(Keep::Low),
            _ => None,
        }
    }
}

/// Result of resolving a dice notation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// The notation that was rolled
    pub notation: DiceNotation,
    /// Every die drawn, in order; both d20s under advantage/disadvantage
    pub rolls: Vec<u32>,
    /// Sum of the kept dice, before the modifier
    pub dice_total: i32,
    /// Modifier that was applied
    pub modifier: i32,
    /// Final total (kept dice + modifier)
    pub total: i32,
    /// Human-readable account of the computation
    pub breakdown: String,
    /// Natural 20 on a single-d20 check
    pub critical: bool,
    /// Natural 1 on a single-d20 check
    pub fumble: bool,
}

impl DiceNotation {
    /// Roll this notation and return the full result
    ///
    /// Advantage/disadvantage only change the roll for a plain 1d20;
    /// on any other configuration the flags are accepted and ignored,
    /// matching tabletop convention.
    pub fn resolve(&self, options: RollOptions, dice: &mut impl DieSource) -> RollResult {
        let d20_check = self.count == 1 && self.sides == 20;
        let keep = if d20_check { options.keep() } else { None };

        let (rolls, dice_total) = match keep {
            Some(keep) => {
                let first = dice.roll_die(self.sides);
                let second = dice.roll_die(self.sides);
                let kept = match keep {
                    Keep::High => first.max(second),
                    Keep::Low => first.min(second),
                };
                (vec![first, second], kept as i32)
            }
            None => {
                let mut rolls = Vec::with_capacity(self.count as usize);
                for _ in 0..self.count {
                    rolls.push(dice.roll_die(self.sides));
                }
                let sum: u32 = rolls.iter().sum();
                (rolls, sum as i32)
            }
        };

        let total = dice_total + self.modifier;
        let breakdown = self.breakdown(&rolls, keep, dice_total, total);

        RollResult {
            notation: *self,
            rolls,
            dice_total,
            modifier: self.modifier,
            total,
            breakdown,
            critical: d20_check && dice_total == 20,
            fumble: d20_check && dice_total == 1,
        }
    }

    /// Format a breakdown like "1d20(14) + 5 = 19" or "2d6[4, 5] + 3 = 12"
    fn breakdown(&self, rolls: &[u32], keep: Option<Keep>, dice_total: i32, total: i32) -> String {
        let rolls_str = rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let dice_part = match keep {
            Some(Keep::High) => format!("[{}] advantage({})", rolls_str, dice_total),
            Some(Keep::Low) => format!("[{}] disadvantage({})", rolls_str, dice_total),
            None if rolls.len() == 1 => format!("({})", rolls[0]),
            None => format!("[{}]", rolls_str),
        };

        if self.modifier > 0 {
            format!(
                "{}d{}{} + {} = {}",
                self.count, self.sides, dice_part, self.modifier, total
            )
        } else if self.modifier < 0 {
            format!(
                "{}d{}{} - {} = {}",
                self.count, self.sides, dice_part, -self.modifier, total
            )
        } else {
            format!("{}d{}{} = {}", self.count, self.sides, dice_part, total)
        }
    }
}

/// Parse a notation string and roll it with the given source
pub fn resolve(
    notation: &str,
    options: RollOptions,
    dice: &mut impl DieSource,
) -> Result<RollResult, MalformedNotation> {
    Ok(DiceNotation::parse(notation)?.resolve(options, dice))
}

/// Parse a notation string and roll it with the thread-local RNG
pub fn roll(notation: &str, options: RollOptions) -> Result<RollResult, MalformedNotation> {
    resolve(notation, options, &mut rand::rng())
}
