#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Duration, Timer};

use pico_buzzer::constants::timing;
use pico_buzzer::cue_input::{cue_button_task, CUE_CHANNEL};
use pico_buzzer::rp_pwm::{EmbassyClock, PwmOutput, RpTonePwm};
use pico_buzzer::{BuzzerConfig, Cue, Sequencer, Tick};

use {defmt_rtt as _, panic_probe as _};

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

// Program metadata for `picotool info`.
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"Pico Buzzer"),
    embassy_rp::binary_info::rp_program_description!(
        c"Non-blocking melody player for a PWM buzzer on RP Pico 2 W"
    ),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Pico Buzzer starting");

    info!("Pin connections:");
    info!("  Buzzer: GPIO 15 (PWM_SLICE7 B)");
    info!("  Button: GPIO 16 to GND (plays a beep)");

    let pwm = Pwm::new_output_b(p.PWM_SLICE7, p.PIN_15, PwmConfig::default());
    let output = RpTonePwm::new(pwm, PwmOutput::B);

    let mut sequencer = Sequencer::new(output, EmbassyClock, BuzzerConfig::default());
    sequencer.begin();
    sequencer.play_cue(Cue::Startup);

    unwrap!(spawner.spawn(cue_button_task(p.PIN_16, Cue::Beep)));

    let receiver = CUE_CHANNEL.receiver();
    loop {
        if let Ok(cue) = receiver.try_receive() {
            info!("Cue requested: {}", cue.name());
            sequencer.play_cue(cue);
        }

        if sequencer.update() == Tick::Finished {
            info!("Cue finished");
        }

        // Other periodic work would go here; the sequencer only needs to be
        // polled well inside the shortest note duration.
        Timer::after(Duration::from_millis(timing::LOOP_POLL_MS)).await;
    }
}
