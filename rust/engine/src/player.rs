use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::Hand;

/// Hand total above which a participant is bust.
pub const BUST_THRESHOLD: u32 = 21;

/// The dealer draws while below this total and stands at or above it.
pub const DEALER_STAND_TOTAL: u32 = 17;

/// Turn state of the interactive player.
///
/// `Active` is the only state in which the player may act; `Standing` and
/// `Busted` are terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnState {
    /// May still hit or stand
    Active,
    /// Voluntarily stopped drawing
    Standing,
    /// Total exceeded the bust threshold
    Busted,
}

/// A decision made by the player during their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnChoice {
    /// Draw one more card
    Hit,
    /// Stop drawing and end the turn
    Stand,
}

/// The interactive participant: a hand plus a turn state machine.
///
/// The player never flips its own `Busted` flag; bust detection is an
/// engine-level check after every dealt card.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hand: Hand,
    state: TurnState,
}

impl Default for TurnState {
    fn default() -> Self {
        TurnState::Active
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            hand: Hand::new(),
            state: TurnState::Active,
        }
    }

    pub fn receive(&mut self, card: Card) {
        self.hand.receive(card);
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn total(&self) -> u32 {
        self.hand.total()
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// True iff the player may still hit or stand.
    pub fn can_act(&self) -> bool {
        self.state == TurnState::Active
    }

    pub fn stand(&mut self) {
        self.state = TurnState::Standing;
    }

    pub(crate) fn bust(&mut self) {
        self.state = TurnState::Busted;
    }
}

/// The automated participant: a hand plus the fixed draw policy.
///
/// The dealer has no turn flags; its turn is a deterministic one-shot run of
/// the draw-to-17 policy.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    pub fn new() -> Self {
        Self { hand: Hand::new() }
    }

    pub fn receive(&mut self, card: Card) {
        self.hand.receive(card);
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn total(&self) -> u32 {
        self.hand.total()
    }

    /// The dealer's first dealt card, hidden until the reveal.
    pub fn hole_card(&self) -> Option<Card> {
        self.hand.cards().first().copied()
    }

    /// Fixed auto-play policy: keep drawing while the total is below 17.
    pub fn must_draw(&self) -> bool {
        self.total() < DEALER_STAND_TOTAL
    }
}
