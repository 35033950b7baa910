use memorito_core::{Cue, FLOOR_GAIN, PEAK_GAIN, Tone};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, OscillatorType};

/// Plays cues through the Web Audio API, or nothing at all when the browser has no audio context.
#[derive(Debug, Default)]
pub(crate) struct WebAudio {
    context: Option<AudioContext>,
}

impl WebAudio {
    pub(crate) fn new() -> Self {
        match AudioContext::new() {
            Ok(context) => Self {
                context: Some(context),
            },
            Err(err) => {
                log::warn!("Web Audio unavailable, sound disabled: {:?}", err);
                Self::default()
            }
        }
    }

    pub(crate) fn is_available(&self) -> bool {
        self.context.is_some()
    }

    /// Schedules every tone of `cue` on the audio clock.
    pub(crate) fn play(&self, cue: Cue) {
        let Some(context) = &self.context else {
            return;
        };

        // browsers keep the context suspended until the first user gesture
        if context.state() == AudioContextState::Suspended {
            if let Err(err) = context.resume() {
                log::warn!("failed to resume audio: {:?}", err);
            }
        }

        let now = context.current_time();
        for tone in cue.tones() {
            if let Err(err) = play_tone(context, tone, now) {
                log::warn!("failed to play {:?}: {:?}", cue, err);
                break;
            }
        }
    }
}

fn play_tone(context: &AudioContext, tone: &Tone, now: f64) -> Result<(), JsValue> {
    let start = now + f64::from(tone.offset_ms) / 1000.;
    let end = start + f64::from(tone.duration_ms) / 1000.;

    let oscillator = context.create_oscillator()?;
    let gain = context.create_gain()?;
    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&context.destination())?;

    oscillator.set_type(OscillatorType::Sine);
    oscillator
        .frequency()
        .set_value_at_time(tone.frequency_hz, start)?;
    gain.gain().set_value_at_time(PEAK_GAIN, start)?;
    gain.gain().exponential_ramp_to_value_at_time(FLOOR_GAIN, end)?;

    oscillator.start_with_when(start)?;
    oscillator.stop_with_when(end)?;
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const CUES: [Cue; 7] = [
        Cue::Start,
        Cue::Reveal,
        Cue::Match,
        Cue::Mismatch,
        Cue::Timeout,
        Cue::Win,
        Cue::Accept,
    ];

    #[wasm_bindgen_test]
    fn missing_backend_is_silent() {
        let audio = WebAudio::default();

        assert!(!audio.is_available());
        for cue in CUES {
            audio.play(cue);
        }
    }

    #[wasm_bindgen_test]
    fn browser_backend_schedules_every_cue() {
        let audio = WebAudio::new();

        assert!(audio.is_available());
        for cue in CUES {
            audio.play(cue);
        }
    }
}
