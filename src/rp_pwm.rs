//! # RP2350 Buzzer Output
//!
//! [`ToneOutput`] on an embassy-rp PWM slice, and a [`MillisClock`] backed by
//! the embassy time driver.
//!
//! ## Pin Configuration
//!
//! Each PWM slice drives two pins (A and B). The buzzer uses one of them; the
//! other keeps a zero compare value. Example: `PWM_SLICE7` drives GPIO 14 (A)
//! and GPIO 15 (B).
//!
//! ```ignore
//! let pwm = Pwm::new_output_b(p.PWM_SLICE7, p.PIN_15, PwmConfig::default());
//! let output = RpTonePwm::new(pwm, PwmOutput::B);
//! let mut sequencer = Sequencer::new(output, EmbassyClock, BuzzerConfig::default());
//! ```

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Instant;

use crate::constants::buzzer;
use crate::pwm_timing::{scale_duty, slice_timing};
use crate::tone_output::{MillisClock, ToneOutput};

/// Which slice output the buzzer is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum PwmOutput {
    A,
    B,
}

pub struct RpTonePwm<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
    output: PwmOutput,
    resolution_bits: u8,
    duty: u16,
}

impl<'d> RpTonePwm<'d> {
    pub fn new(pwm: Pwm<'d>, output: PwmOutput) -> Self {
        let mut config = PwmConfig::default();
        config.compare_a = 0;
        config.compare_b = 0;
        config.enable = true;

        Self {
            pwm,
            config,
            output,
            resolution_bits: buzzer::RESOLUTION_BITS,
            duty: 0,
        }
    }

    /// Push divider, top and the rescaled duty to the slice.
    fn apply(&mut self) {
        let compare = scale_duty(self.duty, self.resolution_bits, self.config.top);
        match self.output {
            PwmOutput::A => self.config.compare_a = compare,
            PwmOutput::B => self.config.compare_b = compare,
        }
        self.pwm.set_config(&self.config);
    }
}

impl ToneOutput for RpTonePwm<'_> {
    fn attach(&mut self, base_frequency_hz: u32, resolution_bits: u8) {
        self.resolution_bits = resolution_bits;
        self.duty = 0;
        self.set_frequency(base_frequency_hz);
        defmt::debug!(
            "PWM {} attached at {}Hz ({}-bit duty)",
            self.output,
            base_frequency_hz,
            resolution_bits
        );
    }

    fn set_frequency(&mut self, frequency_hz: u32) {
        let clk = clk_sys_freq();
        let timing = slice_timing(clk, frequency_hz);
        self.config.divider = timing.divider.into();
        self.config.top = timing.top;
        self.apply();
        defmt::trace!(
            "PWM {}Hz -> div {} top {} ({}Hz)",
            frequency_hz,
            timing.divider,
            timing.top,
            timing.frequency_hz(clk)
        );
    }

    fn set_duty(&mut self, duty: u16) {
        self.duty = duty;
        self.apply();
    }
}

/// Millisecond clock from the embassy time driver, truncated to u32 so it
/// wraps roughly every 49 days.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MillisClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
