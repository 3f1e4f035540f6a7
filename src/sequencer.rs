//! # Melody Sequencer
//!
//! Plays a melody on a [`ToneOutput`] without ever blocking the caller.
//!
//! ## Usage
//!
//! ```ignore
//! let mut sequencer = Sequencer::new(output, clock, BuzzerConfig::default());
//! sequencer.begin();
//! sequencer.play_startup();
//!
//! loop {
//!     // ... other periodic work ...
//!     sequencer.update();
//! }
//! ```
//!
//! ## Timing
//!
//! - `play()` and `stop()` take effect on their own call
//! - `update()` is the only place the clock is read and the output is written
//!   to while a melody runs; it does O(1) work and returns straight away
//! - A note ends on the first `update()` at least `duration_ms` after it
//!   started, so note boundaries are only as precise as the poll rate
//! - Elapsed time uses wrapping u32 arithmetic and survives a clock wrap

use crate::config::{volume_to_duty, BuzzerConfig};
use crate::melodies::{self, Cue};
use crate::notes::Note;
use crate::tone_output::{MillisClock, ToneOutput};

/// Where the sequencer is within a melody.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Playback {
    /// Nothing playing; output silenced.
    Idle,
    /// `play()` was called; the first note starts on the next `update()`.
    Pending,
    /// Note `index` has been sounding since `started_at` (clock ms).
    Sounding { index: usize, started_at: u32 },
}

/// What a single `update()` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Not playing; nothing was done.
    Idle,
    /// Current note still has time left.
    Holding,
    /// Note `index` was just started.
    Started { index: usize },
    /// The last note ended and the output was silenced.
    Finished,
}

pub struct Sequencer<'m, P, C> {
    output: P,
    clock: C,
    config: BuzzerConfig,
    melody: &'m [Note],
    playback: Playback,
    volume_duty: u16,
}

impl<'m, P: ToneOutput, C: MillisClock> Sequencer<'m, P, C> {
    pub fn new(output: P, clock: C, config: BuzzerConfig) -> Self {
        let volume_duty = volume_to_duty(config.volume_percent, config.effective_resolution_bits());
        Self {
            output,
            clock,
            config,
            melody: &[],
            playback: Playback::Idle,
            volume_duty,
        }
    }

    /// Attach the PWM output and start silent. Call once before playing.
    pub fn begin(&mut self) {
        let bits = self.config.effective_resolution_bits();
        self.output.attach(self.config.base_frequency_hz, bits);
        self.output.set_duty(0);
        info!(
            "Buzzer attached: {}Hz carrier, {}-bit duty, volume duty {}",
            self.config.base_frequency_hz,
            bits,
            self.volume_duty
        );
    }

    /// Set loudness as a percentage; values above 100 count as 100.
    ///
    /// A note that is already sounding keeps its duty; the new value is used
    /// from the next note on.
    pub fn configure_volume(&mut self, percent: u8) {
        self.volume_duty = volume_to_duty(percent, self.config.effective_resolution_bits());
        info!("Volume {}% -> duty {}", percent, self.volume_duty);
    }

    /// Start `melody` from its first note, replacing anything already playing.
    ///
    /// The first note sounds on the next `update()`. An empty melody just stops.
    pub fn play(&mut self, melody: &'m [Note]) {
        if melody.is_empty() {
            self.stop();
            return;
        }
        self.melody = melody;
        self.playback = Playback::Pending;
        debug!("Playing melody of {} notes", melody.len());
    }

    pub fn play_cue(&mut self, cue: Cue) {
        debug!("Cue {}", cue.name());
        self.play(cue.melody());
    }

    pub fn play_startup(&mut self) {
        self.play(melodies::STARTUP);
    }

    pub fn play_success(&mut self) {
        self.play(melodies::SUCCESS);
    }

    pub fn play_failure(&mut self) {
        self.play(melodies::FAILURE);
    }

    pub fn play_beep(&mut self) {
        self.play(melodies::BEEP);
    }

    pub fn play_hit(&mut self) {
        self.play(melodies::HIT);
    }

    /// Silence the output immediately and drop the current melody.
    pub fn stop(&mut self) {
        if self.playback != Playback::Idle {
            debug!("Playback stopped");
        }
        self.playback = Playback::Idle;
        self.melody = &[];
        self.output.set_duty(0);
    }

    /// Advance playback from the clock. Call on every main loop iteration.
    pub fn update(&mut self) -> Tick {
        match self.playback {
            Playback::Idle => Tick::Idle,
            Playback::Pending => {
                let now = self.clock.now_ms();
                self.start_note(0, now);
                Tick::Started { index: 0 }
            }
            Playback::Sounding { index, started_at } => {
                let now = self.clock.now_ms();
                if now.wrapping_sub(started_at) < self.melody[index].duration_ms {
                    return Tick::Holding;
                }

                let next = index + 1;
                if next >= self.melody.len() {
                    self.stop();
                    debug!("Melody finished");
                    return Tick::Finished;
                }

                self.start_note(next, now);
                Tick::Started { index: next }
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback != Playback::Idle
    }

    /// Index of the sounding note, once the first `update()` has started it.
    pub fn current_index(&self) -> Option<usize> {
        match self.playback {
            Playback::Sounding { index, .. } => Some(index),
            Playback::Idle | Playback::Pending => None,
        }
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn volume_duty(&self) -> u16 {
        self.volume_duty
    }

    pub fn config(&self) -> &BuzzerConfig {
        &self.config
    }

    pub fn output(&self) -> &P {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut P {
        &mut self.output
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Give back the output and clock.
    pub fn release(self) -> (P, C) {
        (self.output, self.clock)
    }

    fn start_note(&mut self, index: usize, now: u32) {
        let note = self.melody[index];
        if note.is_rest() {
            self.output.set_duty(0);
        } else {
            self.output.set_frequency(note.frequency_hz);
            self.output.set_duty(self.volume_duty);
        }
        self.playback = Playback::Sounding {
            index,
            started_at: now,
        };
        trace!(
            "Note {}: {}Hz for {}ms",
            index,
            note.frequency_hz,
            note.duration_ms
        );
    }
}
