use serde::{Deserialize, Serialize};

use crate::*;

/// What the player currently sees on a card.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    #[default]
    Hidden,
    Revealed(Symbol),
    Matched(Symbol),
    /// Face up as half of a mismatched pair, about to be hidden again.
    Wrong(Symbol),
}

impl CardFace {
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Self::Hidden => None,
            Self::Revealed(symbol) | Self::Matched(symbol) | Self::Wrong(symbol) => Some(symbol),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    symbol: Symbol,
    flipped: bool,
    matched: bool,
    wrong: bool,
}

impl Card {
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            flipped: false,
            matched: false,
            wrong: false,
        }
    }

    pub const fn id(&self) -> CardId {
        self.id
    }

    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub const fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    pub const fn can_reveal(&self) -> bool {
        !self.flipped && !self.matched
    }

    pub const fn face(&self) -> CardFace {
        if self.matched {
            CardFace::Matched(self.symbol)
        } else if self.wrong {
            CardFace::Wrong(self.symbol)
        } else if self.flipped {
            CardFace::Revealed(self.symbol)
        } else {
            CardFace::Hidden
        }
    }

    pub(crate) fn flip(&mut self) {
        self.flipped = true;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
        self.wrong = false;
    }

    pub(crate) fn mark_wrong(&mut self) {
        self.wrong = true;
    }

    pub(crate) fn hide(&mut self) {
        self.flipped = false;
        self.wrong = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_follows_card_lifecycle() {
        let symbol = Symbol('💕');
        let mut card = Card::new(3, symbol);
        assert_eq!(card.face(), CardFace::Hidden);
        assert!(card.can_reveal());

        card.flip();
        assert_eq!(card.face(), CardFace::Revealed(symbol));
        assert!(!card.can_reveal());

        card.mark_wrong();
        assert_eq!(card.face(), CardFace::Wrong(symbol));

        card.hide();
        assert_eq!(card.face(), CardFace::Hidden);
        assert!(card.can_reveal());

        card.flip();
        card.mark_matched();
        assert_eq!(card.face(), CardFace::Matched(symbol));
        assert!(!card.can_reveal());
    }
}
