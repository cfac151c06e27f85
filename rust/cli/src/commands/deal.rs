//! Deal command handler for opening-deal inspection.
//!
//! This module provides the `deal` command which performs one shuffled
//! opening deal and displays both hands face up, including the dealer's
//! hole card. The command supports optional seeding for deterministic
//! dealing.

use std::io::Write;

use blackjack_engine::engine::Engine;

use crate::error::CliError;
use crate::formatters::format_cards;

/// Handle the deal command.
///
/// Shuffles a fresh deck, performs the opening deal, and prints both hands
/// face up with their totals. Supports optional seeding for deterministic
/// dealing and reproducibility.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut eng = Engine::new(Some(base_seed));
    eng.shuffle();
    eng.open_deal()?;

    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Dealer: {}", format_cards(eng.dealer().hand().cards()))?;
    writeln!(out, "Player: {}", format_cards(eng.player().hand().cards()))?;
    writeln!(
        out,
        "Totals: dealer={} player={}",
        eng.dealer().total(),
        eng.player().total()
    )?;
    Ok(())
}
