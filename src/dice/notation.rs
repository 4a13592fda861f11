//! Dice notation parsing
//!
//! Parses notation like "2d6+3", "1d20", "4d6-2" into a structured form.
//! The accepted grammar is `<count>d<sides>` with an optional signed
//! integer modifier; anything else is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for an input that is not valid dice notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed dice notation '{input}': {reason}")]
pub struct MalformedNotation {
    /// The offending input, as the caller gave it
    pub input: String,
    /// What failed to parse
    pub reason: String,
}

impl MalformedNotation {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// A parsed dice notation like "2d6+3"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceNotation {
    /// Number of dice to roll
    pub count: u32,
    /// Number of sides per die
    pub sides: u32,
    /// Modifier to add after rolling
    pub modifier: i32,
}

impl DiceNotation {
    /// Create a notation directly
    pub fn new(count: u32, sides: u32, modifier: i32) -> Self {
        Self {
            count,
            sides,
            modifier,
        }
    }

    /// Parse a notation string like "1d20+5", "4d6-1", "2d6"
    ///
    /// The input is trimmed and matched case-insensitively; the grammar
    /// is otherwise strict. The count must be explicit ("d20" is not
    /// accepted), and both count and sides must be at least 1.
    pub fn parse(input: &str) -> Result<Self, MalformedNotation> {
        let notation = input.trim().to_ascii_lowercase();

        if notation.is_empty() {
            return Err(MalformedNotation::new(input, "empty string"));
        }

        // Split on the 'd' separator
        let d_pos = notation
            .find('d')
            .ok_or_else(|| MalformedNotation::new(input, "missing 'd' separator"))?;

        let count_str = &notation[..d_pos];
        let count = parse_number(count_str)
            .ok_or_else(|| MalformedNotation::new(input, format!("invalid dice count: '{}'", count_str)))?;

        // Sides and optional signed modifier follow the 'd'
        let rest = &notation[d_pos + 1..];

        let (sides_str, modifier) = if let Some(plus_pos) = rest.find('+') {
            let mod_str = &rest[plus_pos + 1..];
            let modifier = parse_number::<i32>(mod_str).ok_or_else(|| {
                MalformedNotation::new(input, format!("invalid modifier: '+{}'", mod_str))
            })?;
            (&rest[..plus_pos], modifier)
        } else if let Some(minus_pos) = rest.find('-') {
            let mod_str = &rest[minus_pos + 1..];
            let modifier = parse_number::<i32>(mod_str).ok_or_else(|| {
                MalformedNotation::new(input, format!("invalid modifier: '-{}'", mod_str))
            })?;
            (&rest[..minus_pos], -modifier)
        } else {
            (rest, 0)
        };

        let sides = parse_number(sides_str)
            .ok_or_else(|| MalformedNotation::new(input, format!("invalid die sides: '{}'", sides_str)))?;

        if count == 0 {
            return Err(MalformedNotation::new(input, "dice count must be at least 1"));
        }
        if sides == 0 {
            return Err(MalformedNotation::new(input, "die sides must be at least 1"));
        }

        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Minimum possible total for this notation
    pub fn min_total(&self) -> i32 {
        self.count as i32 + self.modifier
    }

    /// Maximum possible total for this notation
    pub fn max_total(&self) -> i32 {
        (self.count as i64 * self.sides as i64) as i32 + self.modifier
    }
}

/// Parse an unsigned decimal number, rejecting signs and non-digits
///
/// `str::parse` accepts a leading '+' which the notation grammar does
/// not, so digits are checked explicitly.
fn parse_number<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for DiceNotation {
    type Err = MalformedNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DiceNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier > 0 {
            write!(f, "{}d{}+{}", self.count, self.sides, self.modifier)
        } else if self.modifier < 0 {
            write!(f, "{}d{}{}", self.count, self.sides, self.modifier)
        } else {
            write!(f, "{}d{}", self.count, self.sides)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let notation = DiceNotation::parse("2d6").unwrap();
        assert_eq!(notation.count, 2);
        assert_eq!(notation.sides, 6);
        assert_eq!(notation.modifier, 0);
    }

    #[test]
    fn test_parse_with_plus() {
        let notation = DiceNotation::parse("1d20+5").unwrap();
        assert_eq!(notation.count, 1);
        assert_eq!(notation.sides, 20);
        assert_eq!(notation.modifier, 5);
    }

    #[test]
    fn test_parse_with_minus() {
        let notation = DiceNotation::parse("4d6-1").unwrap();
        assert_eq!(notation.count, 4);
        assert_eq!(notation.sides, 6);
        assert_eq!(notation.modifier, -1);
    }

    #[test]
    fn test_parse_whitespace() {
        let notation = DiceNotation::parse("  1d20+5  ").unwrap();
        assert_eq!(notation.count, 1);
        assert_eq!(notation.sides, 20);
        assert_eq!(notation.modifier, 5);
    }

    #[test]
    fn test_parse_case_insensitive() {
        let notation = DiceNotation::parse("2D6+1").unwrap();
        assert_eq!(notation.count, 2);
        assert_eq!(notation.sides, 6);
        assert_eq!(notation.modifier, 1);
    }

    #[test]
    fn test_parse_one_sided_die() {
        // Degenerate but valid: a d1 always lands on 1
        let notation = DiceNotation::parse("3d1").unwrap();
        assert_eq!(notation.sides, 1);
    }

    #[test]
    fn test_parse_rejects_implicit_count() {
        // The count is required; "d20" does not match the grammar
        assert!(DiceNotation::parse("d20").is_err());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DiceNotation::parse("").is_err());
        assert!(DiceNotation::parse("abc").is_err());
        assert!(DiceNotation::parse("20").is_err());
        assert!(DiceNotation::parse("xd6").is_err());
        assert!(DiceNotation::parse("2d").is_err());
        assert!(DiceNotation::parse("d").is_err());
        assert!(DiceNotation::parse("0d6").is_err());
        assert!(DiceNotation::parse("2d0").is_err());
        assert!(DiceNotation::parse("2d6+").is_err());
        assert!(DiceNotation::parse("2d6-").is_err());
        assert!(DiceNotation::parse("2d6+x").is_err());
        assert!(DiceNotation::parse("+2d6").is_err());
        assert!(DiceNotation::parse("2d6+3+4").is_err());
        assert!(DiceNotation::parse("1d20 + 5").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(DiceNotation::parse("99999999999d6").is_err());
        assert!(DiceNotation::parse("1d99999999999").is_err());
        assert!(DiceNotation::parse("1d20+99999999999").is_err());
    }

    #[test]
    fn test_error_names_input() {
        let err = DiceNotation::parse("xd6").unwrap_err();
        assert_eq!(err.input, "xd6");
        assert!(err.to_string().contains("xd6"));
    }

    #[test]
    fn test_min_max_total() {
        let notation = DiceNotation::parse("2d6+3").unwrap();
        assert_eq!(notation.min_total(), 5);
        assert_eq!(notation.max_total(), 15);
    }

    #[test]
    fn test_from_str() {
        let notation: DiceNotation = "1d20+5".parse().unwrap();
        assert_eq!(notation, DiceNotation::new(1, 20, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(DiceNotation::new(2, 6, 0).to_string(), "2d6");
        assert_eq!(DiceNotation::new(1, 20, 5).to_string(), "1d20+5");
        assert_eq!(DiceNotation::new(3, 8, -2).to_string(), "3d8-2");
    }
}
