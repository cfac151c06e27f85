use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::{Dealer, Player, TurnState, BUST_THRESHOLD};

/// Phase of the round, advanced strictly forward by the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Deck built, nothing dealt yet
    Setup,
    /// Opening deal in progress
    Dealing,
    /// Player may hit or stand
    PlayerTurn,
    /// Hole card revealed, dealer policy running
    DealerTurn,
    /// Outcome determined
    Resolved,
}

/// Final result of a round, carrying the totals it was decided on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// Player exceeded the bust threshold; round ended early with a loss.
    PlayerBust { player: u32 },
    /// Player total strictly above the dealer total.
    PlayerWin { player: u32, dealer: u32 },
    /// Dealer total at least the player total. The comparison is purely
    /// numeric; a dealer total above 21 is compared as-is.
    DealerWin { player: u32, dealer: u32 },
    /// Equal totals.
    Push { player: u32, dealer: u32 },
}

/// Core game engine that orchestrates one blackjack round against the house.
/// Owns the deck, both participants, and the hole-card reveal flag.
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::Engine;
///
/// let mut engine = Engine::new(Some(42));
/// engine.shuffle();
/// engine.open_deal().unwrap();
///
/// // Two cards each, dealt alternately.
/// assert_eq!(engine.player().hand().len(), 2);
/// assert_eq!(engine.dealer().hand().len(), 2);
/// assert_eq!(engine.deck_remaining(), 48);
/// ```
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    player: Player,
    dealer: Dealer,
    hole_revealed: bool,
    phase: Phase,
}

impl Engine {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(0xB1A2_C3A4);
        Self::with_deck(Deck::new_with_seed(seed))
    }

    /// Engine over a pre-arranged deck. Scripted rounds in tests use this to
    /// pin the exact cards dealt.
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Player::new(),
            dealer: Dealer::new(),
            hole_revealed: false,
            phase: Phase::Setup,
        }
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle();
    }

    /// Opening deal: one card to the player, one to the dealer, twice over,
    /// in strict alternation. The dealer's first card is the hole card.
    ///
    /// Runs the unconditional post-deal bust check before handing the turn
    /// to the player.
    pub fn open_deal(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::OpeningAlreadyDealt);
        }
        self.phase = Phase::Dealing;
        for _ in 0..2 {
            let c = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
            self.player.receive(c);
            let c = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
            self.dealer.receive(c);
        }
        self.phase = Phase::PlayerTurn;
        self.check_player_bust();
        Ok(())
    }

    /// Deal one card to the player, then re-evaluate the bust invariant.
    /// Busting ends the round immediately.
    pub fn player_hit(&mut self) -> Result<Card, GameError> {
        if !self.player.can_act() {
            return Err(GameError::PlayerCannotAct {
                state: self.player.state(),
            });
        }
        let c = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
        self.player.receive(c);
        self.check_player_bust();
        Ok(c)
    }

    pub fn player_stand(&mut self) {
        self.player.stand();
    }

    pub fn player_can_act(&self) -> bool {
        self.player.can_act()
    }

    pub fn player_busted(&self) -> bool {
        self.player.state() == TurnState::Busted
    }

    /// Start the dealer's turn, flipping the hole card face up if it is
    /// still hidden. Returns true iff this call performed the reveal, so
    /// the caller can announce it exactly once.
    pub fn begin_dealer_turn(&mut self) -> bool {
        self.phase = Phase::DealerTurn;
        if self.hole_revealed {
            false
        } else {
            self.hole_revealed = true;
            true
        }
    }

    pub fn dealer_must_draw(&self) -> bool {
        self.dealer.must_draw()
    }

    /// Deal one card to the dealer under the auto-play policy.
    pub fn dealer_draw(&mut self) -> Result<Card, GameError> {
        let c = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
        self.dealer.receive(c);
        Ok(c)
    }

    /// Determine the round outcome from the final totals.
    ///
    /// A busted player always loses. Otherwise the totals are compared
    /// numerically with no further bust handling on the dealer side.
    pub fn resolve(&mut self) -> Outcome {
        self.phase = Phase::Resolved;
        let player = self.player.total();
        let dealer = self.dealer.total();
        if self.player_busted() {
            return Outcome::PlayerBust { player };
        }
        if player == dealer {
            Outcome::Push { player, dealer }
        } else if player > dealer {
            Outcome::PlayerWin { player, dealer }
        } else {
            Outcome::DealerWin { player, dealer }
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    fn check_player_bust(&mut self) {
        if self.player.total() > BUST_THRESHOLD {
            self.player.bust();
            self.phase = Phase::Resolved;
        }
    }
}
