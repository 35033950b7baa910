use thiserror::Error;

use crate::{Action, Screen, Symbol};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card id")]
    InvalidCard,
    #[error("Symbol alphabet is empty")]
    EmptyAlphabet,
    #[error("Symbol alphabet does not fit on the board")]
    TooManySymbols,
    #[error("Symbol {0} appears more than once in the alphabet")]
    DuplicateSymbol(Symbol),
    #[error("Symbol {0} does not appear exactly twice in the deck")]
    UnpairedSymbol(Symbol),
    #[error("Cannot {action:?} from the {from:?} screen")]
    InvalidTransition { from: Screen, action: Action },
}

pub type Result<T> = core::result::Result<T, GameError>;
