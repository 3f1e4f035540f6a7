//! Cue delivery from input tasks to the sequencer loop.
//!
//! Input tasks push a [`Cue`] into [`CUE_CHANNEL`]; the loop that owns the
//! [`Sequencer`](crate::Sequencer) drains it with `try_receive()` so it never
//! waits on input.

use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::PIN_16;
use embassy_rp::Peri;
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_time::{Duration, Timer};

use crate::constants::{buffers, timing};
use crate::melodies::Cue;

/// Global channel for requesting cues from anywhere in the firmware
pub static CUE_CHANNEL: Channel<ThreadModeRawMutex, Cue, { buffers::CUE_CHANNEL_DEPTH }> =
    Channel::new();

pub fn get_cue_sender() -> Sender<'static, ThreadModeRawMutex, Cue, { buffers::CUE_CHANNEL_DEPTH }>
{
    CUE_CHANNEL.sender()
}

/// Queue a cue without waiting. Returns false if the channel is full and the
/// cue was dropped.
pub fn send_cue(cue: Cue) -> bool {
    get_cue_sender().try_send(cue).is_ok()
}

/// Button on GPIO 16 (to GND, internal pull-up) that requests `cue` on press.
#[embassy_executor::task]
pub async fn cue_button_task(pin: Peri<'static, PIN_16>, cue: Cue) -> ! {
    let mut button = Input::new(pin, Pull::Up);
    defmt::info!("Cue button ready on GPIO 16 -> {}", cue.name());

    loop {
        button.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(timing::BUTTON_DEBOUNCE_MS)).await;

        if button.is_low() {
            if !send_cue(cue) {
                defmt::warn!("Cue channel full, dropped {}", cue.name());
            }
            button.wait_for_high().await;
        }
    }
}
