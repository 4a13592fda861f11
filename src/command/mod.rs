//! Chat command parsing and dispatch
//!
//! Turns a player's chat line like "/roll 2d6+3 adv" into a reply
//! string. The transport that carries lines and replies is the
//! caller's concern; this module only decides what the reply says.

use tracing::debug;

use crate::dice::{self, DieSource, RollOptions};

/// Help text listing the available commands
const HELP_TEXT: &str =
    "Commands: /roll <notation> [adv|dis] (e.g. /roll 1d20+5 adv), /help";

/// Usage hint for a bare /roll
const ROLL_USAGE: &str = "Usage: /roll <notation> [adv|dis], e.g. /roll 1d20+5";

/// A parsed chat command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Roll dice: "/roll <notation> [adv|dis]"
    Roll {
        /// The notation argument, if one was given
        notation: Option<String>,
        /// Advantage/disadvantage flags parsed from the argument words
        options: RollOptions,
    },
    /// Show available commands
    Help,
}

impl Command {
    /// Parse a chat line into a command
    ///
    /// The leading '/' is optional and the verb is case-insensitive.
    /// Returns None for empty input or an unknown verb.
    pub fn parse(input: &str) -> Option<Command> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let (first, rest) = parts.split_first()?;
        let verb = first.trim_start_matches('/').to_lowercase();

        match verb.as_str() {
            "roll" | "r" => {
                let mut notation = None;
                let mut options = RollOptions::default();
                for word in rest {
                    match word.to_lowercase().as_str() {
                        "adv" | "advantage" => options.advantage = true,
                        "dis" | "disadvantage" => options.disadvantage = true,
                        _ => notation = Some(word.to_string()),
                    }
                }
                Some(Command::Roll { notation, options })
            }
            "help" | "h" => Some(Command::Help),
            _ => None,
        }
    }
}

/// Parse and execute a chat line, returning the reply text
pub fn dispatch(input: &str, dice: &mut impl DieSource) -> String {
    let Some(command) = Command::parse(input) else {
        return match input.split_whitespace().next() {
            Some(first) => {
                let verb = first.trim_start_matches('/');
                if verb.is_empty() {
                    "What?".to_string()
                } else {
                    format!("Unknown command: {}", verb)
                }
            }
            None => "What?".to_string(),
        };
    };

    debug!("chat command: {}", input.trim());

    match command {
        Command::Help => HELP_TEXT.to_string(),
        Command::Roll { notation: None, .. } => ROLL_USAGE.to_string(),
        Command::Roll {
            notation: Some(notation),
            options,
        } => match dice::resolve(&notation, options, dice) {
            Ok(result) => {
                let mut text = format!("You roll {}", result.breakdown);
                if result.critical {
                    text.push_str(" Critical!");
                } else if result.fumble {
                    text.push_str(" Fumble!");
                }
                text
            }
            Err(err) => err.to_string(),
        },
    }
}
