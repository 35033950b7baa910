use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Start,
    Playing,
    Lost,
    Won,
    ProposalAccepted,
}

impl Screen {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Applies `action`, failing for any pair not in the transition table.
    pub fn next(self, action: Action) -> Result<Self> {
        match (self, action) {
            (Self::Start, Action::Start) => Ok(Self::Playing),
            (Self::Playing, Action::Complete) => Ok(Self::Won),
            (Self::Playing, Action::Timeout) => Ok(Self::Lost),
            (Self::Won, Action::Accept) => Ok(Self::ProposalAccepted),
            (Self::Won, Action::Reject) => Ok(Self::Start),
            (Self::Playing | Self::Lost | Self::Won | Self::ProposalAccepted, Action::Restart) => {
                Ok(Self::Start)
            }
            (from, action) => Err(GameError::InvalidTransition { from, action }),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Start,
    Complete,
    Timeout,
    Accept,
    Reject,
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREENS: [Screen; 5] = [
        Screen::Start,
        Screen::Playing,
        Screen::Lost,
        Screen::Won,
        Screen::ProposalAccepted,
    ];

    const ACTIONS: [Action; 6] = [
        Action::Start,
        Action::Complete,
        Action::Timeout,
        Action::Accept,
        Action::Reject,
        Action::Restart,
    ];

    #[test]
    fn happy_path_reaches_proposal_and_back() {
        let screen = Screen::default();
        let screen = screen.next(Action::Start).unwrap();
        assert_eq!(screen, Screen::Playing);
        let screen = screen.next(Action::Complete).unwrap();
        assert_eq!(screen, Screen::Won);
        let screen = screen.next(Action::Accept).unwrap();
        assert_eq!(screen, Screen::ProposalAccepted);
        assert_eq!(screen.next(Action::Restart), Ok(Screen::Start));
    }

    #[test]
    fn only_listed_transitions_are_permitted() {
        let mut permitted = 0;
        for from in SCREENS {
            for action in ACTIONS {
                match from.next(action) {
                    Ok(_) => permitted += 1,
                    Err(err) => assert_eq!(err, GameError::InvalidTransition { from, action }),
                }
            }
        }
        // start, complete, timeout, accept, reject, and restart from four screens
        assert_eq!(permitted, 9);
    }

    #[test]
    fn every_non_start_screen_restarts_to_start() {
        for from in SCREENS.into_iter().filter(|&s| s != Screen::Start) {
            assert_eq!(from.next(Action::Restart), Ok(Screen::Start));
        }
        assert!(Screen::Start.next(Action::Restart).is_err());
    }

    #[test]
    fn timeout_loses_and_reject_returns_to_start() {
        assert_eq!(Screen::Playing.next(Action::Timeout), Ok(Screen::Lost));
        assert_eq!(Screen::Won.next(Action::Reject), Ok(Screen::Start));
        assert!(Screen::Lost.next(Action::Accept).is_err());
    }
}
