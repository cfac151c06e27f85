//! Card and table formatters for terminal display.
//!
//! This module provides pure functions for formatting cards and the table
//! state (dealer line, player line) for terminal output. Cards render in the
//! bracketed "rank of suit" presentation form; the dealer's hole card is
//! shown as a face-down marker until it is revealed.
//!
//! ## Example
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_cli::formatters::format_card;
//!
//! let jack = Card { rank: Rank::Jack, suit: Suit::Hearts };
//! assert_eq!(format_card(&jack), "〚Jack of Hearts〛");
//!
//! let seven = Card { rank: Rank::Seven, suit: Suit::Spades };
//! assert_eq!(format_card(&seven), "〚7 of Spades〛");
//! ```

use blackjack_engine::cards::Card;
use blackjack_engine::engine::Engine;
use blackjack_engine::player::{Dealer, Player};

/// Banner printed above and below the table state.
pub const SPLITTER: &str = "━━━━━━━━━━━━━━━━━━♡♤♡━━━━━━━━━━━━━━━━━━";

/// Marker shown in place of the dealer's hole card before the reveal.
pub const FACE_DOWN: &str = "〚Face Down〛";

/// Format a card in the bracketed presentation form.
///
/// Named ranks use their label ("Jack of Hearts"); numeric ranks use the
/// printed value ("7 of Spades").
pub fn format_card(card: &Card) -> String {
    let rank = match card.rank.label() {
        "" => card.rank.base_value().to_string(),
        label => label.to_string(),
    };
    format!("〚{} of {}〛", rank, card.suit.name())
}

/// Format a sequence of cards, space-separated.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Dealer line: card count plus the cards, with the hole card masked until
/// revealed.
pub fn format_dealer_line(dealer: &Dealer, hole_revealed: bool) -> String {
    let cards = dealer.hand().cards();
    let mut parts: Vec<String> = Vec::new();
    let skip = if hole_revealed || cards.is_empty() {
        0
    } else {
        parts.push(FACE_DOWN.to_string());
        1
    };
    for card in cards.iter().skip(skip) {
        parts.push(format_card(card));
    }
    format!("Dealer's cards: {}\n{}", cards.len(), parts.join(" "))
}

/// Player line: cards in display order (descending value).
pub fn format_player_line(player: &Player) -> String {
    format!(
        "Your cards:\n{}",
        format_cards(&player.hand().sorted_view())
    )
}

/// Full table state between splitter banners: cards left in the deck, the
/// dealer line, and the player line.
pub fn format_table(engine: &Engine) -> String {
    format!(
        "{}\nCards left: {}\n{}\n\n{}\n{}",
        SPLITTER,
        engine.deck_remaining(),
        format_dealer_line(engine.dealer(), engine.hole_revealed()),
        format_player_line(engine.player()),
        SPLITTER
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::cards::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { suit, rank }
    }

    #[test]
    fn test_format_card_named_rank() {
        assert_eq!(
            format_card(&card(Rank::Queen, Suit::Diamonds)),
            "〚Queen of Diamonds〛"
        );
        assert_eq!(format_card(&card(Rank::Ace, Suit::Clubs)), "〚Ace of Clubs〛");
    }

    #[test]
    fn test_format_card_numeric_rank() {
        assert_eq!(format_card(&card(Rank::Two, Suit::Hearts)), "〚2 of Hearts〛");
        assert_eq!(format_card(&card(Rank::Ten, Suit::Spades)), "〚10 of Spades〛");
    }

    #[test]
    fn test_format_cards_space_separated() {
        let cards = [card(Rank::Two, Suit::Hearts), card(Rank::King, Suit::Clubs)];
        assert_eq!(format_cards(&cards), "〚2 of Hearts〛 〚King of Clubs〛");
    }

    #[test]
    fn test_dealer_line_masks_hole_card_until_revealed() {
        let mut dealer = Dealer::new();
        dealer.receive(card(Rank::Six, Suit::Hearts));
        dealer.receive(card(Rank::Eight, Suit::Spades));

        let hidden = format_dealer_line(&dealer, false);
        assert!(hidden.starts_with("Dealer's cards: 2\n"));
        assert!(hidden.contains(FACE_DOWN));
        assert!(!hidden.contains("6 of Hearts"));
        assert!(hidden.contains("〚8 of Spades〛"));

        let revealed = format_dealer_line(&dealer, true);
        assert!(!revealed.contains(FACE_DOWN));
        assert!(revealed.contains("〚6 of Hearts〛"));
        assert!(revealed.contains("〚8 of Spades〛"));
    }

    #[test]
    fn test_player_line_uses_display_order() {
        let mut player = Player::new();
        player.receive(card(Rank::Two, Suit::Hearts));
        player.receive(card(Rank::King, Suit::Clubs));

        let line = format_player_line(&player);
        assert!(line.starts_with("Your cards:\n"));
        // King (10) sorts ahead of the two.
        let king_at = line.find("King of Clubs").unwrap();
        let two_at = line.find("2 of Hearts").unwrap();
        assert!(king_at < two_at);
    }

    #[test]
    fn test_table_is_framed_by_splitters() {
        let mut engine = Engine::new(Some(42));
        engine.shuffle();
        engine.open_deal().unwrap();
        let table = format_table(&engine);
        assert!(table.starts_with(SPLITTER));
        assert!(table.ends_with(SPLITTER));
        assert!(table.contains("Cards left: 48"));
        assert!(table.contains(FACE_DOWN));
    }
}
