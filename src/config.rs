//! Buzzer configuration and the volume-to-duty mapping.

use crate::constants::buzzer;

/// Sequencer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BuzzerConfig {
    pub base_frequency_hz: u32, // Carrier frequency used at attach time
    pub resolution_bits: u8,    // Duty resolution, clamped to 1..=16
    pub volume_percent: u8,     // Initial volume, clamped to 0..=100
}

impl Default for BuzzerConfig {
    fn default() -> Self {
        Self {
            base_frequency_hz: buzzer::BASE_FREQUENCY_HZ,
            resolution_bits: buzzer::RESOLUTION_BITS,
            volume_percent: buzzer::DEFAULT_VOLUME_PERCENT,
        }
    }
}

impl BuzzerConfig {
    /// Default carrier and resolution at reduced loudness.
    pub fn quiet() -> Self {
        Self {
            volume_percent: buzzer::QUIET_VOLUME_PERCENT,
            ..Self::default()
        }
    }

    /// Resolution actually used by the sequencer.
    pub fn effective_resolution_bits(&self) -> u8 {
        clamp_resolution_bits(self.resolution_bits)
    }
}

pub const fn clamp_resolution_bits(bits: u8) -> u8 {
    if bits < buzzer::MIN_RESOLUTION_BITS {
        buzzer::MIN_RESOLUTION_BITS
    } else if bits > buzzer::MAX_RESOLUTION_BITS {
        buzzer::MAX_RESOLUTION_BITS
    } else {
        bits
    }
}

/// Largest duty value for the given resolution (`2^bits - 1`).
pub const fn duty_full_scale(resolution_bits: u8) -> u16 {
    let bits = clamp_resolution_bits(resolution_bits);
    ((1u32 << bits) - 1) as u16
}

/// Duty ceiling reached at 100% volume.
pub const fn max_volume_duty(resolution_bits: u8) -> u16 {
    let bits = clamp_resolution_bits(resolution_bits);
    ((1u32 << bits) / buzzer::VOLUME_HEADROOM_DIVISOR) as u16
}

/// Map a volume percentage onto a duty value.
///
/// Percentages above 100 are treated as 100. The mapping is linear, so the
/// result never decreases as `percent` grows, and 0% is silence.
pub const fn volume_to_duty(percent: u8, resolution_bits: u8) -> u16 {
    let percent = if percent > buzzer::MAX_VOLUME_PERCENT {
        buzzer::MAX_VOLUME_PERCENT
    } else {
        percent
    };
    let ceiling = max_volume_duty(resolution_bits) as u32;
    (ceiling * percent as u32 / buzzer::MAX_VOLUME_PERCENT as u32) as u16
}
