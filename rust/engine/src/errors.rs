use thiserror::Error;

use crate::player::TurnState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Opening deal already performed")]
    OpeningAlreadyDealt,
    #[error("Player cannot act in state {state:?}")]
    PlayerCannotAct { state: TurnState },
}
