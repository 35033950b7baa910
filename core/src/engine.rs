use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::*;

/// Shown when the proposal is turned down.
pub const REJECT_MESSAGE: &str = "Too bad! 😢 But you can always try again!";

/// Delayed follow-up the host has to schedule on the engine's behalf.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wake {
    HideMismatch,
    DeclareWin,
}

/// Side effect requested by a transition, executed by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Sound(Cue),
    /// Call [`Game::tick`] with this round every `tick_ms` until [`Effect::StopTicker`].
    StartTicker(RoundId),
    /// Cancel the ticker and any pending wake.
    StopTicker,
    WakeAfter {
        delay_ms: u32,
        round: RoundId,
        wake: Wake,
    },
    Notify(&'static str),
}

pub type Effects = SmallVec<[Effect; 4]>;

/// Counters shown above the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub pairs: PairCount,
    pub total_pairs: PairCount,
    pub moves: u32,
    pub elapsed_secs: Seconds,
}

impl Scoreboard {
    pub fn clock(&self) -> String {
        format_clock(self.elapsed_secs)
    }
}

/// Cards and counters of a single playthrough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    id: RoundId,
    cards: Vec<Card>,
    unresolved: SmallVec<[CardId; 2]>,
    pairs_found: PairCount,
    total_pairs: PairCount,
    moves: u32,
    elapsed_secs: Seconds,
}

impl Round {
    pub fn new(id: RoundId, deck: Deck) -> Self {
        let total_pairs = deck.pair_count();
        Self {
            id,
            cards: deck.into_cards(),
            unresolved: SmallVec::new(),
            pairs_found: 0,
            total_pairs,
            moves: 0,
            elapsed_secs: 0,
        }
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(usize::from(id))
    }

    pub fn card_face(&self, id: CardId) -> CardFace {
        self.card(id).map_or(CardFace::Hidden, Card::face)
    }

    /// Face-up cards that have not been settled as a match yet.
    pub fn unresolved(&self) -> &[CardId] {
        &self.unresolved
    }

    pub fn pairs_found(&self) -> PairCount {
        self.pairs_found
    }

    pub fn total_pairs(&self) -> PairCount {
        self.total_pairs
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_complete(&self) -> bool {
        self.pairs_found == self.total_pairs
    }

    pub fn has_pending_mismatch(&self) -> bool {
        self.unresolved.len() == 2
    }

    pub fn can_reveal(&self, id: CardId) -> bool {
        self.unresolved.len() < 2 && self.card(id).is_some_and(Card::can_reveal)
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            pairs: self.pairs_found,
            total_pairs: self.total_pairs,
            moves: self.moves,
            elapsed_secs: self.elapsed_secs,
        }
    }

    pub fn reveal(&mut self, id: CardId) -> Result<RevealOutcome> {
        let index = self.validate_card(id)?;
        if !self.can_reveal(id) {
            return Ok(RevealOutcome::NoChange);
        }

        self.cards[index].flip();
        self.unresolved.push(id);

        let &[first, second] = self.unresolved.as_slice() else {
            return Ok(RevealOutcome::Revealed);
        };
        self.moves = self.moves.saturating_add(1);

        let (first, second) = (usize::from(first), usize::from(second));
        if self.cards[first].symbol() == self.cards[second].symbol() {
            self.cards[first].mark_matched();
            self.cards[second].mark_matched();
            self.unresolved.clear();
            self.pairs_found += 1;

            if self.is_complete() {
                Ok(RevealOutcome::Completed)
            } else {
                Ok(RevealOutcome::Matched)
            }
        } else {
            // both stay unresolved until hidden, which blocks further reveals
            self.cards[first].mark_wrong();
            self.cards[second].mark_wrong();
            Ok(RevealOutcome::Mismatched)
        }
    }

    /// Turns a mismatched pair face down again, returns whether there was one.
    pub fn hide_mismatch(&mut self) -> bool {
        if !self.has_pending_mismatch() {
            return false;
        }

        for id in self.unresolved.drain(..) {
            self.cards[usize::from(id)].hide();
        }
        true
    }

    fn tick(&mut self) -> Seconds {
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        self.elapsed_secs
    }

    fn validate_card(&self, id: CardId) -> Result<usize> {
        let index = usize::from(id);
        if index < self.cards.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidCard)
        }
    }
}

/// Whole game: current screen, the round being shown, and player preferences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    screen: Screen,
    round: Option<Round>,
    last_round: RoundId,
    muted: bool,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            screen: Screen::default(),
            round: None,
            last_round: RoundId::default(),
            muted: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.round.as_ref().map_or_else(
            || Scoreboard {
                total_pairs: self.config.pair_count(),
                ..Scoreboard::default()
            },
            Round::scoreboard,
        )
    }

    pub fn card_face(&self, id: CardId) -> CardFace {
        self.round
            .as_ref()
            .map_or(CardFace::Hidden, |round| round.card_face(id))
    }

    pub fn can_reveal(&self, id: CardId) -> bool {
        self.screen.is_playing() && self.round.as_ref().is_some_and(|round| round.can_reveal(id))
    }

    /// Deals `deck` and starts the clock.
    pub fn start(&mut self, deck: Deck) -> Result<Effects> {
        let screen = self.screen.next(Action::Start)?;
        let id = self.last_round.next();

        self.last_round = id;
        self.round = Some(Round::new(id, deck));
        self.screen = screen;
        log::debug!("round {:?} started", id);

        let mut effects = smallvec![Effect::StartTicker(id)];
        self.push_sound(&mut effects, Cue::Start);
        Ok(effects)
    }

    /// Invalid reveals are ignored and come back as [`RevealOutcome::NoChange`].
    pub fn reveal(&mut self, id: CardId) -> Result<(RevealOutcome, Effects)> {
        let mut effects = Effects::new();
        if !self.screen.is_playing() {
            return Ok((RevealOutcome::NoChange, effects));
        }
        let Some(round) = self.round.as_mut() else {
            return Ok((RevealOutcome::NoChange, effects));
        };

        let round_id = round.id();
        let outcome = round.reveal(id)?;
        if outcome.has_update() {
            self.push_sound(&mut effects, Cue::Reveal);
        }
        match outcome {
            RevealOutcome::NoChange | RevealOutcome::Revealed => {}
            RevealOutcome::Matched => self.push_sound(&mut effects, Cue::Match),
            RevealOutcome::Mismatched => {
                self.push_sound(&mut effects, Cue::Mismatch);
                effects.push(Effect::WakeAfter {
                    delay_ms: self.config.mismatch_delay_ms,
                    round: round_id,
                    wake: Wake::HideMismatch,
                });
            }
            RevealOutcome::Completed => {
                self.push_sound(&mut effects, Cue::Match);
                effects.push(Effect::WakeAfter {
                    delay_ms: self.config.win_delay_ms,
                    round: round_id,
                    wake: Wake::DeclareWin,
                });
            }
        }
        log::trace!("reveal {} -> {:?}", id, outcome);

        Ok((outcome, effects))
    }

    /// Advances the clock by one tick, losing the round at the time limit.
    pub fn tick(&mut self, round: RoundId) -> Effects {
        let time_limit = self.config.time_limit_secs;
        let Some(current) = self.playing_round_mut(round) else {
            log::trace!("ignoring tick for round {:?}", round);
            return Effects::new();
        };

        if current.tick() < time_limit {
            return Effects::new();
        }

        log::debug!("round {:?} timed out with {} pairs", round, current.pairs_found());
        self.transition(Action::Timeout, Cue::Timeout)
    }

    /// Executes a delayed follow-up scheduled through [`Effect::WakeAfter`].
    pub fn wake(&mut self, round: RoundId, wake: Wake) -> Effects {
        match wake {
            Wake::HideMismatch => {
                self.hide_mismatch(round);
                Effects::new()
            }
            Wake::DeclareWin => self.declare_win(round),
        }
    }

    pub fn hide_mismatch(&mut self, round: RoundId) -> bool {
        self.playing_round_mut(round)
            .is_some_and(|current| current.hide_mismatch())
    }

    pub fn declare_win(&mut self, round: RoundId) -> Effects {
        let complete = self
            .playing_round_mut(round)
            .is_some_and(|current| current.is_complete());
        if !complete {
            return Effects::new();
        }

        log::debug!("round {:?} won", round);
        self.transition(Action::Complete, Cue::Win)
    }

    pub fn accept_proposal(&mut self) -> Result<Effects> {
        self.screen = self.screen.next(Action::Accept)?;

        let mut effects = Effects::new();
        self.push_sound(&mut effects, Cue::Accept);
        Ok(effects)
    }

    pub fn reject_proposal(&mut self) -> Result<Effects> {
        self.screen = self.screen.next(Action::Reject)?;
        self.round = None;

        Ok(smallvec![Effect::StopTicker, Effect::Notify(REJECT_MESSAGE)])
    }

    /// Back to the start screen, dropping the round.
    pub fn restart(&mut self) -> Result<Effects> {
        self.screen = self.screen.next(Action::Restart)?;
        self.round = None;

        Ok(smallvec![Effect::StopTicker])
    }

    /// Flips the mute preference, returns the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    fn transition(&mut self, action: Action, cue: Cue) -> Effects {
        let mut effects = Effects::new();
        match self.screen.next(action) {
            Ok(screen) => {
                self.screen = screen;
                effects.push(Effect::StopTicker);
                self.push_sound(&mut effects, cue);
            }
            Err(err) => log::warn!("{}", err),
        }
        effects
    }

    fn playing_round_mut(&mut self, round: RoundId) -> Option<&mut Round> {
        if !self.screen.is_playing() {
            return None;
        }
        self.round.as_mut().filter(|current| current.id() == round)
    }

    fn push_sound(&self, effects: &mut Effects, cue: Cue) {
        if !self.muted {
            effects.push(Effect::Sound(cue));
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
