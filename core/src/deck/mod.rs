use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;
pub use shuffled::*;

mod shuffled;

pub trait DeckGenerator {
    fn generate(self, config: &GameConfig) -> Deck;
}

/// Symbols in board order, every symbol present exactly twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    symbols: Vec<Symbol>,
}

impl Deck {
    pub(crate) const fn new_unchecked(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Builds a deck from an explicit layout.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(GameError::EmptyAlphabet);
        }
        if symbols.len() > MAX_CARDS {
            return Err(GameError::TooManySymbols);
        }

        let mut counts: BTreeMap<Symbol, u8> = BTreeMap::new();
        for &symbol in &symbols {
            let count = counts.entry(symbol).or_default();
            *count = count.saturating_add(1);
        }
        if let Some((&symbol, _)) = counts.iter().find(|&(_, &count)| count != 2) {
            return Err(GameError::UnpairedSymbol(symbol));
        }

        Ok(Self::new_unchecked(symbols))
    }

    pub fn card_count(&self) -> CardId {
        self.symbols.len().try_into().unwrap_or(CardId::MAX)
    }

    pub fn pair_count(&self) -> PairCount {
        self.card_count() / 2
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub(crate) fn into_cards(self) -> Vec<Card> {
        self.symbols
            .into_iter()
            .zip(0..=CardId::MAX)
            .map(|(symbol, id)| Card::new(id, symbol))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_symbols_accepts_pairs_in_any_order() {
        let deck = Deck::from_symbols(vec![Symbol('a'), Symbol('b'), Symbol('b'), Symbol('a')]).unwrap();

        assert_eq!(deck.card_count(), 4);
        assert_eq!(deck.pair_count(), 2);
    }

    #[test]
    fn from_symbols_rejects_unpaired_symbols() {
        assert_eq!(
            Deck::from_symbols(vec![Symbol('a'), Symbol('a'), Symbol('b')]),
            Err(GameError::UnpairedSymbol(Symbol('b')))
        );
        assert_eq!(
            Deck::from_symbols(vec![Symbol('a'), Symbol('a'), Symbol('a'), Symbol('a')]),
            Err(GameError::UnpairedSymbol(Symbol('a')))
        );
        assert_eq!(Deck::from_symbols(vec![]), Err(GameError::EmptyAlphabet));
    }

    #[test]
    fn cards_are_numbered_in_board_order() {
        let deck = Deck::from_symbols(vec![Symbol('x'), Symbol('y'), Symbol('x'), Symbol('y')]).unwrap();

        let cards = deck.into_cards();

        let ids: Vec<_> = cards.iter().map(|card| card.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(cards[2].symbol(), Symbol('x'));
        assert!(cards.iter().all(|card| card.face() == CardFace::Hidden));
    }
}
