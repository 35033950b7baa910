use alloc::format;
use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Position of a card on the board, `0..card_count`.
pub type CardId = u8;

/// Count type used for pairs on the board.
pub type PairCount = u8;

/// Whole seconds of play.
pub type Seconds = u32;

/// Face value printed on a card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generation number of a round, bumped on every start.
///
/// Delayed callbacks carry the round they were scheduled for so that a callback outliving its round can be told
/// apart from a current one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundId(u32);

impl RoundId {
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Renders elapsed seconds as `MM:SS`.
pub fn format_clock(secs: Seconds) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(300), "05:00");
    }

    #[test]
    fn round_ids_are_distinct_after_next() {
        let first = RoundId::default();
        assert_ne!(first, first.next());
        assert_eq!(first.next(), RoundId::default().next());
    }
}
