use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Shuffled draw pile. Cards leave the deck in order through [`Deck::deal_card`]
/// and are never returned within a session.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: Option<ChaCha20Rng>,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng: Some(rng),
        }
    }

    /// Deck with a fixed, pre-arranged order that `shuffle` will not disturb.
    /// Used for scripted rounds in tests.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            position: 0,
            rng: None,
        }
    }

    pub fn shuffle(&mut self) {
        if let Some(rng) = &mut self.rng {
            self.cards = full_deck();
            self.cards.shuffle(rng);
            self.position = 0;
        }
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
