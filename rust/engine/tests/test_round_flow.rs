use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::deck::Deck;
use blackjack_engine::engine::{Engine, Outcome, Phase};

fn card(rank: Rank, suit: Suit) -> Card {
    Card { suit, rank }
}

/// The full scripted reference round: player opens on 10+9 and stands,
/// dealer opens on 6(hole)+8, draws a five to 19, and the round pushes.
#[test]
fn scripted_round_plays_out_to_a_push() {
    let deck = Deck::from_cards(vec![
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Five, Suit::Clubs),
    ]);
    let mut engine = Engine::with_deck(deck);
    engine.shuffle();
    engine.open_deal().unwrap();

    assert_eq!(engine.phase(), Phase::PlayerTurn);
    assert_eq!(engine.player().total(), 19);
    assert_eq!(engine.dealer().total(), 14);
    assert_eq!(
        engine.dealer().hole_card(),
        Some(card(Rank::Six, Suit::Hearts))
    );
    assert!(!engine.hole_revealed());

    engine.player_stand();
    assert!(!engine.player_can_act());

    assert!(engine.begin_dealer_turn());
    assert!(engine.hole_revealed());

    let mut draws = 0;
    while engine.dealer_must_draw() {
        engine.dealer_draw().unwrap();
        draws += 1;
    }
    assert_eq!(draws, 1);
    assert_eq!(engine.dealer().total(), 19);

    assert_eq!(
        engine.resolve(),
        Outcome::Push {
            player: 19,
            dealer: 19
        }
    );
    assert_eq!(engine.phase(), Phase::Resolved);
}

#[test]
fn seeded_round_conserves_all_52_cards() {
    let mut engine = Engine::new(Some(1234));
    engine.shuffle();
    engine.open_deal().unwrap();

    engine.player_stand();
    engine.begin_dealer_turn();
    while engine.dealer_must_draw() {
        engine.dealer_draw().unwrap();
    }
    let _ = engine.resolve();

    let held = engine.player().hand().len() + engine.dealer().hand().len();
    assert_eq!(engine.deck_remaining() + held, 52);
}

#[test]
fn seeded_rounds_with_the_same_seed_are_identical() {
    let run = |seed: u64| {
        let mut engine = Engine::new(Some(seed));
        engine.shuffle();
        engine.open_deal().unwrap();
        engine.player_stand();
        engine.begin_dealer_turn();
        while engine.dealer_must_draw() {
            engine.dealer_draw().unwrap();
        }
        engine.resolve()
    };
    assert_eq!(run(555), run(555));
}
