//! Input parsing for the interactive decision loop.
//!
//! The player turn accepts exactly two choices, hit or stand. Anything
//! else is rejected with a message and the caller re-prompts; there is no
//! retry limit. End of input ends the session, but that is detected at the
//! read layer, not here.

use blackjack_engine::player::TurnChoice;

/// Result type for parsing user input during the player turn.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid turn choice (hit or stand)
    Choice(TurnChoice),
    /// Invalid input with error message
    Invalid(String),
}

/// Parse one input line into a [`TurnChoice`].
///
/// Accepts the following inputs (case-insensitive, whole line):
/// - "h" or "hit" → Hit
/// - "s" or "stand" → Stand
///
/// The whole trimmed line must match; "hit me" is invalid and re-prompts.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_turn_choice, ParseResult};
/// use blackjack_engine::player::TurnChoice;
///
/// assert_eq!(parse_turn_choice("h"), ParseResult::Choice(TurnChoice::Hit));
/// assert_eq!(parse_turn_choice("STAND"), ParseResult::Choice(TurnChoice::Stand));
///
/// match parse_turn_choice("hit me") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Valid choices")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_turn_choice(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "h" | "hit" => ParseResult::Choice(TurnChoice::Hit),
        "s" | "stand" => ParseResult::Choice(TurnChoice::Stand),
        other => ParseResult::Invalid(format!(
            "Unrecognized choice '{}'. Valid choices: h, hit, s, stand",
            other
        )),
    }
}
