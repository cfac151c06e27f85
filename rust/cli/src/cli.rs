//! Clap argument surface for the blackjack CLI.

use clap::{Parser, Subcommand};

/// Single-player blackjack played in the terminal against the house dealer.
#[derive(Debug, Parser)]
#[command(name = "blackjack", version, about = "Single-player blackjack in the terminal")]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play one interactive round against the dealer
    Play {
        /// RNG seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Pause after each display update, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Append a JSONL round record to this file
        #[arg(long)]
        log: Option<String>,
    },
    /// Deal one opening with the hole card face up, for inspection
    Deal {
        /// RNG seed for deterministic dealing
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display current configuration settings
    Cfg,
}
