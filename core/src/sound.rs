use serde::{Deserialize, Serialize};

/// Starting gain of every tone.
pub const PEAK_GAIN: f32 = 0.2;

/// Gain each tone decays to by the end of its duration.
pub const FLOOR_GAIN: f32 = 0.01;

/// A single sine beep, `offset_ms` after the cue starts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u16,
    pub offset_ms: u16,
}

impl Tone {
    const fn at(frequency_hz: f32, duration_ms: u16, offset_ms: u16) -> Self {
        Self {
            frequency_hz,
            duration_ms,
            offset_ms,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    Start,
    Reveal,
    Match,
    Mismatch,
    Timeout,
    Win,
    Accept,
}

static START: [Tone; 1] = [Tone::at(440.0, 200, 0)];
static REVEAL: [Tone; 1] = [Tone::at(523.0, 100, 0)];
static MATCH: [Tone; 1] = [Tone::at(659.0, 200, 0)];
static MISMATCH: [Tone; 1] = [Tone::at(200.0, 300, 0)];
static TIMEOUT: [Tone; 1] = [Tone::at(200.0, 500, 0)];
static WIN: [Tone; 3] = [
    Tone::at(523.0, 200, 0),
    Tone::at(659.0, 200, 200),
    Tone::at(784.0, 300, 400),
];
static ACCEPT: [Tone; 4] = [
    Tone::at(523.0, 200, 0),
    Tone::at(659.0, 200, 200),
    Tone::at(784.0, 200, 400),
    Tone::at(1047.0, 300, 600),
];

impl Cue {
    pub fn tones(self) -> &'static [Tone] {
        use Cue::*;
        match self {
            Start => &START,
            Reveal => &REVEAL,
            Match => &MATCH,
            Mismatch => &MISMATCH,
            Timeout => &TIMEOUT,
            Win => &WIN,
            Accept => &ACCEPT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_ascending(tones: &[Tone]) -> bool {
        tones.windows(2).all(|pair| {
            pair[0].frequency_hz < pair[1].frequency_hz && pair[0].offset_ms < pair[1].offset_ms
        })
    }

    #[test]
    fn win_and_accept_are_ascending_sequences() {
        assert_eq!(Cue::Win.tones().len(), 3);
        assert!(is_ascending(Cue::Win.tones()));
        assert_eq!(Cue::Accept.tones().len(), 4);
        assert!(is_ascending(Cue::Accept.tones()));
    }

    #[test]
    fn event_cues_are_distinct() {
        let cues = [Cue::Reveal, Cue::Match, Cue::Mismatch, Cue::Timeout];
        for (i, a) in cues.iter().enumerate() {
            for b in &cues[i + 1..] {
                assert_ne!(a.tones(), b.tones(), "{a:?} vs {b:?}");
            }
        }
    }
}
