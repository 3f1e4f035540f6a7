//! Seams between the sequencer and the hardware it drives.
//!
//! The sequencer only ever talks to a [`ToneOutput`] (a PWM channel that can
//! change pitch and loudness) and reads a [`MillisClock`]. Both are plain
//! traits so the same sequencer runs on the RP2350 and in host tests.

/// A PWM output wired to a buzzer.
///
/// Implementors own their pin. Calls are assumed to succeed; hardware
/// adapters swallow HAL errors rather than surfacing them.
pub trait ToneOutput {
    /// One-time setup: carrier frequency and duty resolution.
    ///
    /// After this call the duty domain is `0..=2^resolution_bits - 1`.
    fn attach(&mut self, base_frequency_hz: u32, resolution_bits: u8);

    /// Change the oscillation frequency, keeping the current duty.
    fn set_frequency(&mut self, frequency_hz: u32);

    /// Set the duty value; `0` silences the buzzer.
    fn set_duty(&mut self, duty: u16);
}

/// Free-running millisecond counter that wraps on overflow.
pub trait MillisClock {
    fn now_ms(&self) -> u32;
}

impl<T: ToneOutput + ?Sized> ToneOutput for &mut T {
    fn attach(&mut self, base_frequency_hz: u32, resolution_bits: u8) {
        (**self).attach(base_frequency_hz, resolution_bits)
    }

    fn set_frequency(&mut self, frequency_hz: u32) {
        (**self).set_frequency(frequency_hz)
    }

    fn set_duty(&mut self, duty: u16) {
        (**self).set_duty(duty)
    }
}

impl<T: MillisClock + ?Sized> MillisClock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

impl<T: MillisClock + ?Sized> MillisClock for &mut T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
