//! # Play Command
//!
//! One interactive blackjack round against the automated dealer.
//!
//! The session follows a fixed observable sequence: shuffle and deal status
//! messages, the table state plus a prompt for every player decision, the
//! hole-card reveal announcement, the table state after each dealer draw,
//! and finally the outcome with both totals.
//!
//! Input is read one line at a time. "h"/"hit" draws a card, "s"/"stand"
//! ends the turn; any other line is rejected and re-prompted with no retry
//! limit. End of input ends the session cleanly. Bust detection runs in the
//! engine after every card dealt to the player, including the opening deal.

use std::io::{BufRead, Write};
use std::time::Duration;

use blackjack_engine::engine::{Engine, Outcome};
use blackjack_engine::logger::{ActionKind, Actor, RoundAction, RoundLogger, RoundRecord};
use blackjack_engine::player::TurnChoice;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_dealer_line, format_table};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_turn_choice};

/// Handle the play command: one interactive round.
///
/// # Arguments
///
/// * `seed` - RNG seed for a reproducible shuffle (default: random)
/// * `delay_ms` - Pause after each display update (default: config, then 0)
/// * `log` - JSONL file to append the round record to (default: config)
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player decisions
///
/// # Returns
///
/// * `Ok(())` when the round completes or input ends early
/// * `Err(CliError)` on configuration, engine, or I/O failures
pub fn handle_play_command(
    seed: Option<u64>,
    delay_ms: Option<u64>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let delay = delay_ms.unwrap_or(cfg.delay_ms);
    let log_path = log.or(cfg.log);

    writeln!(out, "play: seed={}", seed)?;

    let mut eng = Engine::new(Some(seed));
    writeln!(out, "Shuffling cards..")?;
    pause(delay);
    eng.shuffle();
    writeln!(out, "Dealing cards..")?;
    pause(delay);
    eng.open_deal()?;

    let mut actions = Vec::new();
    let outcome = match run_round(&mut eng, &mut actions, stdin, out, delay)? {
        Some(outcome) => outcome,
        None => {
            writeln!(out, "Session ended.")?;
            return Ok(());
        }
    };

    report_outcome(&outcome, out, delay)?;

    if let Some(path) = log_path {
        let mut logger = RoundLogger::create(&path)?;
        let round_id = logger.next_id();
        logger.write(&RoundRecord {
            round_id,
            seed: Some(seed),
            actions,
            player_total: eng.player().total(),
            dealer_total: eng.dealer().total(),
            outcome,
            ts: None,
        })?;
    }
    Ok(())
}

/// Run the player turn and the dealer turn to an outcome.
///
/// Returns `Ok(None)` if input ended (EOF) before the round was decided.
fn run_round(
    eng: &mut Engine,
    actions: &mut Vec<RoundAction>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    delay: u64,
) -> Result<Option<Outcome>, CliError> {
    // The engine already ran the bust check on the opening deal.
    if eng.player_busted() {
        writeln!(out, "You busted! ({})", eng.player().total())?;
        pause(delay);
        return Ok(Some(eng.resolve()));
    }

    while eng.player_can_act() {
        writeln!(out, "{}", format_table(eng))?;
        pause(delay);
        writeln!(out, "Will you hit (h) or stand (s)?")?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_turn_choice(&line) {
            ParseResult::Choice(TurnChoice::Hit) => {
                eng.player_hit()?;
                actions.push(RoundAction {
                    actor: Actor::Player,
                    action: ActionKind::Hit,
                });
                if eng.player_busted() {
                    writeln!(out, "You busted! ({})", eng.player().total())?;
                    pause(delay);
                    return Ok(Some(eng.resolve()));
                }
            }
            ParseResult::Choice(TurnChoice::Stand) => {
                eng.player_stand();
                actions.push(RoundAction {
                    actor: Actor::Player,
                    action: ActionKind::Stand,
                });
            }
            ParseResult::Invalid(_) => {
                writeln!(out, "Invalid choice.")?;
                pause(delay);
            }
        }
    }

    if eng.begin_dealer_turn() {
        writeln!(out, "The dealer reveals the hole card!")?;
        pause(delay);
        writeln!(out, "{}", format_dealer_line(eng.dealer(), true))?;
        pause(delay);
        actions.push(RoundAction {
            actor: Actor::Dealer,
            action: ActionKind::Reveal,
        });
    }
    while eng.dealer_must_draw() {
        eng.dealer_draw()?;
        actions.push(RoundAction {
            actor: Actor::Dealer,
            action: ActionKind::Draw,
        });
        writeln!(out, "{}", format_table(eng))?;
        pause(delay);
    }
    Ok(Some(eng.resolve()))
}

fn report_outcome(outcome: &Outcome, out: &mut dyn Write, delay: u64) -> Result<(), CliError> {
    let (player, dealer) = match outcome {
        // The bust message was already printed when the round ended.
        Outcome::PlayerBust { .. } => return Ok(()),
        Outcome::Push { player, dealer } => {
            writeln!(out, "You tied with the dealer.")?;
            (player, dealer)
        }
        Outcome::PlayerWin { player, dealer } => {
            writeln!(out, "You won!")?;
            (player, dealer)
        }
        Outcome::DealerWin { player, dealer } => {
            writeln!(out, "The dealer won :(")?;
            (player, dealer)
        }
    };
    pause(delay);
    writeln!(out, "Dealer card value: {}", dealer)?;
    writeln!(out, "Your card value: {}", player)?;
    Ok(())
}

fn pause(delay_ms: u64) {
    if delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(delay_ms));
    }
}
