#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use deck::*;
pub use engine::*;
pub use error::*;
pub use screen::*;
pub use sound::*;
pub use types::*;

mod card;
mod deck;
mod engine;
mod error;
mod screen;
mod sound;
mod types;

/// Largest board a `CardId` can address.
pub const MAX_CARDS: usize = CardId::MAX as usize;

pub const HEARTS: [Symbol; 8] = [
    Symbol('💕'),
    Symbol('💖'),
    Symbol('💗'),
    Symbol('💘'),
    Symbol('💝'),
    Symbol('💞'),
    Symbol('💟'),
    Symbol('💌'),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    symbols: Vec<Symbol>,
    /// Elapsed time at which a round is lost.
    pub time_limit_secs: Seconds,
    pub tick_ms: u32,
    /// How long a mismatched pair stays face up.
    pub mismatch_delay_ms: u32,
    /// Pause between the final match and the win screen.
    pub win_delay_ms: u32,
}

impl GameConfig {
    pub const DEFAULT_TIME_LIMIT_SECS: Seconds = 300;
    pub const DEFAULT_TICK_MS: u32 = 1000;
    pub const DEFAULT_MISMATCH_DELAY_MS: u32 = 1000;
    pub const DEFAULT_WIN_DELAY_MS: u32 = 500;

    /// Takes the alphabet of distinct symbols, each of which ends up on two cards.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(GameError::EmptyAlphabet);
        }
        if symbols.len() * 2 > MAX_CARDS {
            return Err(GameError::TooManySymbols);
        }
        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(GameError::DuplicateSymbol(*symbol));
            }
        }

        Ok(Self {
            symbols,
            time_limit_secs: Self::DEFAULT_TIME_LIMIT_SECS,
            tick_ms: Self::DEFAULT_TICK_MS,
            mismatch_delay_ms: Self::DEFAULT_MISMATCH_DELAY_MS,
            win_delay_ms: Self::DEFAULT_WIN_DELAY_MS,
        })
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn pair_count(&self) -> PairCount {
        self.symbols.len().try_into().unwrap_or(PairCount::MAX)
    }

    pub fn card_count(&self) -> CardId {
        self.pair_count().saturating_mul(2)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: HEARTS.to_vec(),
            time_limit_secs: Self::DEFAULT_TIME_LIMIT_SECS,
            tick_ms: Self::DEFAULT_TICK_MS,
            mismatch_delay_ms: Self::DEFAULT_MISMATCH_DELAY_MS,
            win_delay_ms: Self::DEFAULT_WIN_DELAY_MS,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Matched,
    Mismatched,
    /// The last pair was matched.
    Completed,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn default_config_has_eight_heart_pairs() {
        let config = GameConfig::default();

        assert_eq!(config.pair_count(), 8);
        assert_eq!(config.card_count(), 16);
        assert_eq!(config.time_limit_secs, 300);
        assert_eq!(GameConfig::new(HEARTS.to_vec()), Ok(config));
    }

    #[test]
    fn config_rejects_bad_alphabets() {
        assert_eq!(GameConfig::new(vec![]), Err(GameError::EmptyAlphabet));
        assert_eq!(
            GameConfig::new(vec![Symbol('a'), Symbol('b'), Symbol('a')]),
            Err(GameError::DuplicateSymbol(Symbol('a')))
        );

        let too_many: Vec<_> = ('\u{4e00}'..).take(128).map(Symbol).collect();
        assert_eq!(GameConfig::new(too_many), Err(GameError::TooManySymbols));
    }
}
