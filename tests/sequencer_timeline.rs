mod common;

use common::{FakeBuzzer, FakeClock, Sound};
use pico_buzzer::melodies::{self, Cue};
use pico_buzzer::notes::{total_duration_ms, Note, NOTE_A4, NOTE_A5};
use pico_buzzer::{BuzzerConfig, Sequencer, Tick};

const V: u16 = 1024;

static THREE_STEP: [Note; 3] = [
    Note::new(NOTE_A4, 100),
    Note::rest(50),
    Note::new(NOTE_A5, 100),
];

fn started(clock: FakeClock) -> Sequencer<'static, FakeBuzzer, FakeClock> {
    let mut sequencer = Sequencer::new(FakeBuzzer::default(), clock, BuzzerConfig::default());
    sequencer.begin();
    sequencer
}

/// Poll once per millisecond from `from` up to and including `to`, returning
/// what the buzzer was doing after each poll.
fn poll_range(
    sequencer: &mut Sequencer<'static, FakeBuzzer, FakeClock>,
    from: u32,
    to: u32,
) -> Vec<(u32, Sound, bool)> {
    let mut trace = Vec::new();
    for offset in from..=to {
        sequencer.clock_mut().now = offset;
        sequencer.update();
        trace.push((offset, sequencer.output().sound(), sequencer.is_playing()));
    }
    trace
}

#[test]
fn tone_rest_tone_timeline() {
    let mut sequencer = started(FakeClock::default());
    sequencer.play(&THREE_STEP);

    let trace = poll_range(&mut sequencer, 0, 300);
    let at = |t: u32| trace[t as usize];

    assert_eq!(at(0).1, Sound { frequency_hz: 440, duty: V });
    assert_eq!(at(99).1, Sound { frequency_hz: 440, duty: V });
    assert_eq!(at(100).1.duty, 0);
    assert_eq!(at(149).1.duty, 0);
    assert_eq!(at(150).1, Sound { frequency_hz: 880, duty: V });
    assert_eq!(at(249).1, Sound { frequency_hz: 880, duty: V });
    assert!(at(249).2);

    assert_eq!(at(250).1.duty, 0);
    assert!(!at(250).2);
    assert!(trace[250..].iter().all(|(_, sound, playing)| sound.duty == 0 && !playing));
}

#[test]
fn timeline_holds_across_clock_wrap() {
    let origin = u32::MAX - 120;
    let mut sequencer = started(FakeClock::starting_at(origin));
    sequencer.play(&THREE_STEP);
    sequencer.update();

    let checkpoints = [
        (99, Sound { frequency_hz: 440, duty: V }, true),
        (100, Sound { frequency_hz: 440, duty: 0 }, true),
        (150, Sound { frequency_hz: 880, duty: V }, true),
        (250, Sound { frequency_hz: 880, duty: 0 }, false),
    ];
    for (offset, expected, playing) in checkpoints {
        sequencer.clock_mut().now = origin.wrapping_add(offset);
        sequencer.update();
        assert_eq!(sequencer.output().sound(), expected, "at +{offset}ms");
        assert_eq!(sequencer.is_playing(), playing, "at +{offset}ms");
    }
}

#[test]
fn slow_polling_delays_but_never_skips_notes() {
    let mut sequencer = started(FakeClock::default());
    sequencer.play(&THREE_STEP);

    let mut started_indices = Vec::new();
    loop {
        match sequencer.update() {
            Tick::Started { index } => started_indices.push(index),
            Tick::Finished => break,
            Tick::Holding => {}
            Tick::Idle => panic!("went idle before finishing"),
        }
        sequencer.clock_mut().advance(400);
    }
    assert_eq!(started_indices, [0, 1, 2]);
    assert!(sequencer.output().is_silent());
}

#[test]
fn replacing_a_melody_discards_its_remaining_notes() {
    let mut sequencer = started(FakeClock::default());
    sequencer.play_startup();
    sequencer.update();
    sequencer.clock_mut().advance(100);
    sequencer.update();

    sequencer.play_cue(Cue::Hit);
    let mut starts = 0;
    for _ in 0..=total_duration_ms(melodies::HIT) {
        if let Tick::Started { .. } = sequencer.update() {
            starts += 1;
        }
        sequencer.clock_mut().advance(1);
    }
    assert_eq!(starts, melodies::HIT.len());
    assert!(!sequencer.is_playing());
    assert_eq!(sequencer.output().frequency_hz, melodies::HIT[1].frequency_hz);
}

#[test]
fn replay_restarts_from_the_first_note() {
    let mut sequencer = started(FakeClock::default());
    sequencer.play_success();
    sequencer.update();
    sequencer.clock_mut().advance(250);
    sequencer.update();
    assert_eq!(sequencer.current_index(), Some(1));

    sequencer.play_success();
    assert_eq!(sequencer.current_index(), None);
    assert_eq!(sequencer.update(), Tick::Started { index: 0 });
    assert_eq!(sequencer.output().frequency_hz, melodies::SUCCESS[0].frequency_hz);
}

#[test]
fn quiet_config_lowers_duty_and_release_returns_hardware() {
    let mut sequencer = Sequencer::new(
        FakeBuzzer::default(),
        FakeClock::default(),
        BuzzerConfig::quiet(),
    );
    sequencer.begin();
    sequencer.play_beep();
    sequencer.update();
    assert_eq!(sequencer.output().duty, 307);

    let (buzzer, clock) = sequencer.release();
    assert_eq!(buzzer.attached, Some((5_000, 12)));
    assert_eq!(buzzer.writes, 4);
    assert_eq!(clock.now, 0);
}
