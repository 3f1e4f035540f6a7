//! PWM slice timing: how a tone frequency and a logical duty value land on
//! an RP2350 PWM slice.
//!
//! A slice counts from 0 to `top` at `clk_sys / divider`, so its output
//! frequency is `clk_sys / (divider * (top + 1))`. The sequencer works in a
//! fixed duty domain `0..=2^bits - 1`, which gets rescaled onto `0..=top`.

use crate::constants::system;

/// Divider and wrap value for one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SliceTiming {
    pub divider: u8,
    pub top: u16,
}

impl SliceTiming {
    /// Frequency this timing actually produces.
    pub fn frequency_hz(&self, clk_sys_hz: u32) -> u32 {
        clk_sys_hz / (self.divider as u32 * (self.top as u32 + 1))
    }
}

/// Pick the smallest integer divider that lets `top` fit in 16 bits.
///
/// Frequencies out of the slice's reach are clamped: too low ends at the
/// largest divider and `top`, too high at `top = 1`.
pub fn slice_timing(clk_sys_hz: u32, frequency_hz: u32) -> SliceTiming {
    let counts = (clk_sys_hz / frequency_hz.max(1)).max(2);
    let period = system::PWM_MAX_TOP + 1;

    let divider = counts.div_ceil(period).clamp(1, system::PWM_MAX_DIVIDER);
    let top = (counts / divider).saturating_sub(1).clamp(1, system::PWM_MAX_TOP);

    SliceTiming {
        divider: divider as u8,
        top: top as u16,
    }
}

/// Rescale a duty value from the `resolution_bits` domain onto `0..=top`.
pub fn scale_duty(duty: u16, resolution_bits: u8, top: u16) -> u16 {
    let bits = crate::config::clamp_resolution_bits(resolution_bits);
    let full_scale = (1u64 << bits) - 1;
    let duty = (duty as u64).min(full_scale);
    let compare = (duty * (top as u64 + 1)) >> bits;
    compare.min(top as u64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::{NOTE_A4, NOTE_B0, NOTE_C3, NOTE_DS8};

    const CLK: u32 = system::CLOCK_FREQ_HZ;

    #[test]
    fn carrier_needs_no_divider() {
        let timing = slice_timing(CLK, 5_000);
        assert_eq!(timing, SliceTiming { divider: 1, top: 29_999 });
        assert_eq!(timing.frequency_hz(CLK), 5_000);
    }

    #[test]
    fn low_notes_use_a_divider() {
        let timing = slice_timing(CLK, NOTE_B0);
        assert!(timing.divider > 1);
        let actual = timing.frequency_hz(CLK);
        assert!(actual.abs_diff(NOTE_B0) <= 1, "{actual}");
    }

    #[test]
    fn musical_range_stays_within_one_percent() {
        for hz in [NOTE_C3, NOTE_A4, NOTE_DS8] {
            let actual = slice_timing(CLK, hz).frequency_hz(CLK);
            assert!(actual.abs_diff(hz) * 100 <= hz, "{hz} -> {actual}");
        }
    }

    #[test]
    fn unreachable_frequencies_are_clamped() {
        let slow = slice_timing(CLK, 1);
        assert_eq!(slow.divider, 255);
        assert_eq!(slow.top, u16::MAX);

        let zero = slice_timing(CLK, 0);
        assert_eq!(zero, slow);

        let fast = slice_timing(CLK, CLK);
        assert_eq!(fast, SliceTiming { divider: 1, top: 1 });
    }

    #[test]
    fn duty_is_rescaled_onto_top() {
        assert_eq!(scale_duty(0, 12, 29_999), 0);
        assert_eq!(scale_duty(1024, 12, 29_999), 7_500);
        assert_eq!(scale_duty(2048, 12, 999), 500);
        assert!(scale_duty(4095, 12, 999) <= 999);
        assert_eq!(scale_duty(u16::MAX, 12, 999), scale_duty(4095, 12, 999));
    }
}
