use pico_buzzer::{MillisClock, ToneOutput};

/// Output state as seen by the buzzer at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sound {
    pub frequency_hz: u32,
    pub duty: u16,
}

#[derive(Debug, Default)]
pub struct FakeBuzzer {
    pub attached: Option<(u32, u8)>,
    pub frequency_hz: u32,
    pub duty: u16,
    pub writes: usize,
}

impl FakeBuzzer {
    pub fn sound(&self) -> Sound {
        Sound {
            frequency_hz: self.frequency_hz,
            duty: self.duty,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.duty == 0
    }
}

impl ToneOutput for FakeBuzzer {
    fn attach(&mut self, base_frequency_hz: u32, resolution_bits: u8) {
        self.attached = Some((base_frequency_hz, resolution_bits));
        self.frequency_hz = base_frequency_hz;
        self.writes += 1;
    }

    fn set_frequency(&mut self, frequency_hz: u32) {
        self.frequency_hz = frequency_hz;
        self.writes += 1;
    }

    fn set_duty(&mut self, duty: u16) {
        self.duty = duty;
        self.writes += 1;
    }
}

#[derive(Debug, Default)]
pub struct FakeClock {
    pub now: u32,
}

impl FakeClock {
    pub fn starting_at(now: u32) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
    }
}

impl MillisClock for FakeClock {
    fn now_ms(&self) -> u32 {
        self.now
    }
}
