//! Click / success sound cues over Web Audio.
//!
//! Cue shapes are plain data so they can be checked natively; emission is a
//! best-effort wrapper around `AudioContext` that silently does nothing when
//! the environment lacks audio or the visitor is muted.

use std::cell::RefCell;

use web_sys::{AudioContext, OscillatorType};

use crate::storage::{self, KeyValue};

/// One oscillator retune within a cue, at an offset from the cue start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    pub freq_hz: f32,
    pub at_secs: f64,
}

/// A short sine cue: a note schedule plus a gain envelope that decays
/// exponentially from `gain` to `END_GAIN` over `duration_secs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    pub notes: &'static [Note],
    pub gain: f32,
    pub duration_secs: f64,
}

const END_GAIN: f32 = 0.01;

/// Single-tone acknowledgment for button presses.
pub const CLICK: Cue = Cue {
    notes: &[Note {
        freq_hz: 800.0,
        at_secs: 0.0,
    }],
    gain: 0.1,
    duration_secs: 0.1,
};

/// Ascending three-note arpeggio (C5, E5, G5) for the riddle solve.
pub const SUCCESS: Cue = Cue {
    notes: &[
        Note {
            freq_hz: 523.25,
            at_secs: 0.0,
        },
        Note {
            freq_hz: 659.25,
            at_secs: 0.1,
        },
        Note {
            freq_hz: 783.99,
            at_secs: 0.2,
        },
    ],
    gain: 0.2,
    duration_secs: 0.3,
};

/// Mute state plus a lazily created `AudioContext`. The flag is hydrated from
/// the store at construction and written back on every toggle.
pub struct SoundCues<S: KeyValue> {
    store: S,
    muted: bool,
    ctx: RefCell<Option<AudioContext>>,
}

impl<S: KeyValue> SoundCues<S> {
    pub fn new(store: S) -> Self {
        let muted = storage::muted(&store);
        Self {
            store,
            muted,
            ctx: RefCell::new(None),
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flips and persists the mute flag; returns the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        storage::save_muted(&self.store, self.muted);
        self.muted
    }

    /// Returns whether a cue was actually emitted.
    pub fn play_click(&self) -> bool {
        self.play(&CLICK)
    }

    pub fn play_success(&self) -> bool {
        self.play(&SUCCESS)
    }

    fn play(&self, cue: &Cue) -> bool {
        if self.muted {
            return false;
        }
        self.emit(cue).is_some()
    }

    /// Schedules one cue on the shared context. Any missing capability along
    /// the way aborts silently; the context is created on first use so a
    /// muted visitor never pays for one.
    fn emit(&self, cue: &Cue) -> Option<()> {
        let mut slot = self.ctx.borrow_mut();
        if slot.is_none() {
            *slot = AudioContext::new().ok();
        }
        let ctx = slot.as_ref()?;

        let oscillator = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;
        oscillator.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;
        oscillator.set_type(OscillatorType::Sine);

        let start = ctx.current_time();
        for note in cue.notes {
            oscillator
                .frequency()
                .set_value_at_time(note.freq_hz, start + note.at_secs)
                .ok()?;
        }
        gain.gain().set_value_at_time(cue.gain, start).ok()?;
        gain.gain()
            .exponential_ramp_to_value_at_time(END_GAIN, start + cue.duration_secs)
            .ok()?;

        oscillator.start().ok()?;
        oscillator.stop_with_when(start + cue.duration_secs).ok()?;
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeys;

    #[test]
    fn starts_muted_by_default() {
        let store = MemoryKeys::new();
        let cues = SoundCues::new(&store);
        assert!(cues.is_muted());
    }

    #[test]
    fn muted_play_emits_nothing() {
        let store = MemoryKeys::new();
        let cues = SoundCues::new(&store);
        assert!(!cues.play_click());
        assert!(!cues.play_success());
    }

    #[test]
    fn toggle_round_trips_the_persisted_flag() {
        let store = MemoryKeys::new();
        let mut cues = SoundCues::new(&store);
        assert!(!cues.toggle_mute());
        assert!(!storage::muted(&store));
        assert!(cues.toggle_mute());
        assert!(storage::muted(&store));
    }

    #[test]
    fn success_cue_ascends() {
        let freqs: Vec<f32> = SUCCESS.notes.iter().map(|n| n.freq_hz).collect();
        let mut sorted = freqs.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(freqs, sorted);
        assert_eq!(SUCCESS.notes.len(), 3);
        assert_eq!(CLICK.notes.len(), 1);
    }

    #[test]
    fn cue_offsets_fit_their_duration() {
        for cue in [&CLICK, &SUCCESS] {
            for note in cue.notes {
                assert!(note.at_secs < cue.duration_secs);
            }
        }
    }
}
