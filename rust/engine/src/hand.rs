use crate::cards::Card;

/// Ordered collection of cards accumulated by one participant.
///
/// Append-only during play; the total is recomputed from the current cards
/// on every call and never cached.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn receive(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of point values over all held cards.
    pub fn total(&self) -> u32 {
        self.cards.iter().map(|c| c.point_value()).sum()
    }

    /// Cards ordered for display: descending point value, ties broken by
    /// ascending rank label (numeric ranks carry an empty label and sort
    /// ahead of named ranks). The hand itself is left untouched.
    pub fn sorted_view(&self) -> Vec<Card> {
        let mut view = self.cards.clone();
        view.sort_by(|a, b| {
            b.point_value()
                .cmp(&a.point_value())
                .then_with(|| a.rank.label().cmp(b.rank.label()))
        });
        view
    }
}
