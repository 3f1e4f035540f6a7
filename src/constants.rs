//! # Hardware Constants Module
//!
//! This module contains the constants used by the buzzer sequencer and its
//! RP2350 adapters, organized by functional area.

/// Buzzer PWM Constants
pub mod buzzer {
    /// PWM carrier frequency used when the output is first attached (5kHz)
    pub const BASE_FREQUENCY_HZ: u32 = 5_000;

    /// Logical duty resolution in bits (duty range 0..=4095)
    pub const RESOLUTION_BITS: u8 = 12;

    /// Smallest supported duty resolution
    pub const MIN_RESOLUTION_BITS: u8 = 1;

    /// Largest supported duty resolution (duty must fit in a u16)
    pub const MAX_RESOLUTION_BITS: u8 = 16;

    /// Maximum volume percentage
    pub const MAX_VOLUME_PERCENT: u8 = 100;

    /// Volume applied by `BuzzerConfig::default()`
    pub const DEFAULT_VOLUME_PERCENT: u8 = 100;

    /// Volume used by the quiet preset
    pub const QUIET_VOLUME_PERCENT: u8 = 30;

    /// Full volume maps to 1/4 of the duty range (~25% duty).
    /// Piezo buzzers distort audibly above that.
    pub const VOLUME_HEADROOM_DIVISOR: u32 = 4;
}

/// System Clock Constants
pub mod system {
    /// RP2350 default system clock frequency in Hz
    pub const CLOCK_FREQ_HZ: u32 = 150_000_000;

    /// Largest integer PWM clock divider
    pub const PWM_MAX_DIVIDER: u32 = 255;

    /// Largest PWM counter wrap value
    pub const PWM_MAX_TOP: u32 = u16::MAX as u32;
}

/// Timing Constants (in milliseconds)
pub mod timing {
    /// Main loop poll period; must stay well below the shortest note
    pub const LOOP_POLL_MS: u64 = 1;

    /// Button debounce window
    pub const BUTTON_DEBOUNCE_MS: u64 = 20;
}

/// Channel Buffer Sizes
pub mod buffers {
    /// Pending cue depth between input tasks and the sequencer loop
    pub const CUE_CHANNEL_DEPTH: usize = 4;
}
