//! # blackjack-engine: Blackjack Rule Engine Core
//!
//! A deterministic single-round blackjack engine for play against an
//! automated dealer. Provides deck construction and shuffling, hand scoring
//! under the fixed Ace-as-1 rule, the player turn state machine, the dealer
//! draw-to-17 policy, and round logging with reproducible RNG.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand accumulation, scoring, and display ordering
//! - [`player`] - Player turn state, dealer draw policy, and thresholds
//! - [`engine`] - Round orchestration: deal-out, bust detection, reveal, resolution
//! - [`logger`] - Round records and JSONL serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::engine::{Engine, Outcome};
//!
//! let mut engine = Engine::new(Some(42));
//! engine.shuffle();
//! engine.open_deal().unwrap();
//!
//! // Stand immediately and let the dealer play out.
//! engine.player_stand();
//! engine.begin_dealer_turn();
//! while engine.dealer_must_draw() {
//!     engine.dealer_draw().unwrap();
//! }
//!
//! match engine.resolve() {
//!     Outcome::PlayerWin { player, dealer } => println!("won {} to {}", player, dealer),
//!     other => println!("{:?}", other),
//! }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All rounds are reproducible using seeded RNG:
//!
//! ```rust
//! use blackjack_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will have identical card order
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
