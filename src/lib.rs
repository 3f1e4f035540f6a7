#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module below.
mod fmt;

pub mod config;
pub mod constants;
pub mod melodies;
pub mod notes;
pub mod pwm_timing;
pub mod sequencer;
pub mod tone_output;

#[cfg(feature = "rp235x")]
pub mod cue_input;
#[cfg(feature = "rp235x")]
pub mod rp_pwm;

pub use config::BuzzerConfig;
pub use melodies::Cue;
pub use notes::Note;
pub use sequencer::{Playback, Sequencer, Tick};
pub use tone_output::{MillisClock, ToneOutput};
