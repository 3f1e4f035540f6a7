//! Built-in melodies and the cues that select them.

use crate::notes::*;

/// Short Mario theme, played once at power-up.
pub const STARTUP: &[Note] = &[
    Note::new(NOTE_E5, 100),
    Note::rest(10),
    Note::new(NOTE_E5, 100),
    Note::rest(100),
    Note::new(NOTE_E5, 100),
    Note::rest(100),
    Note::new(NOTE_C5, 100),
    Note::new(NOTE_E5, 100),
    Note::rest(100),
    Note::new(NOTE_G5, 100),
    Note::rest(300),
    Note::new(NOTE_G4, 100),
    Note::rest(300),
];

/// Rising 1-UP chime.
pub const SUCCESS: &[Note] = &[
    Note::new(NOTE_E6, 100),
    Note::new(NOTE_G6, 100),
    Note::new(NOTE_E7, 100),
    Note::new(NOTE_C7, 100),
    Note::new(NOTE_D7, 100),
    Note::new(NOTE_G7, 100),
];

/// Low falling pair.
pub const FAILURE: &[Note] = &[Note::new(NOTE_C3, 150), Note::new(NOTE_G2, 300)];

/// Single short acknowledgment beep.
pub const BEEP: &[Note] = &[Note::new(NOTE_A5, 50)];

/// Brief two-note rising hit cue.
pub const HIT: &[Note] = &[Note::new(NOTE_E6, 50), Note::new(NOTE_G6, 50)];

/// Named selection of a built-in melody.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    Startup,
    Success,
    Failure,
    Beep,
    Hit,
}

impl Cue {
    pub const ALL: [Cue; 5] = [Cue::Startup, Cue::Success, Cue::Failure, Cue::Beep, Cue::Hit];

    pub const fn melody(self) -> &'static [Note] {
        match self {
            Cue::Startup => STARTUP,
            Cue::Success => SUCCESS,
            Cue::Failure => FAILURE,
            Cue::Beep => BEEP,
            Cue::Hit => HIT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cue::Startup => "STARTUP",
            Cue::Success => "SUCCESS",
            Cue::Failure => "FAILURE",
            Cue::Beep => "BEEP",
            Cue::Hit => "HIT",
        }
    }
}
