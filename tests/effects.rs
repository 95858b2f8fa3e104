mod common;

use common::{RING_SIZE, RecordingDriver, ScriptedPacer, TestRunner, WriteFailed, lit_count, runner};
use myrtio_light_ring::color::BLACK;
use myrtio_light_ring::effect::{
    pulse_frame_count, pulse_levels, render_rainbow, render_spinner, render_theater_chase,
};
use myrtio_light_ring::{Brightness, Duration, EffectError, Rgb};

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
const CYAN: Rgb = Rgb {
    r: 0,
    g: 255,
    b: 255,
};
const WAIT: Duration = Duration::from_millis(5);

#[test]
fn test_clear_turns_every_pixel_off() {
    let mut runner = runner();
    runner.fill(RED).unwrap();
    runner.clear().unwrap();

    assert!(runner.pixels().iter().all(|&pixel| pixel == BLACK));
    assert_eq!(runner.output().last_frame(), Some(&[BLACK; RING_SIZE][..]));
    assert!(runner.pacer().waits.is_empty());
}

#[test]
fn test_color_wipe_fills_ring() {
    let mut runner = runner();
    runner.color_wipe(RED, Duration::from_millis(0)).unwrap();

    assert_eq!(runner.pixels(), &[RED; RING_SIZE]);
    let frames = &runner.output().frames;
    assert_eq!(frames.len(), RING_SIZE);
    // One more pixel per flush
    for (index, frame) in frames.iter().enumerate() {
        assert_eq!(lit_count(frame), index + 1);
    }
    assert_eq!(runner.pacer().waits.len(), RING_SIZE);
}

#[test]
fn test_rainbow_cycle_frame_count() {
    let mut runner = runner();
    runner.rainbow_cycle(WAIT, 2).unwrap();

    let frames = &runner.output().frames;
    assert_eq!(frames.len(), 512);
    assert_eq!(runner.pacer().waits, vec![WAIT; 512]);
    // Same phase one full wheel later
    assert_eq!(frames[3], frames[3 + 256]);
    assert_ne!(frames[3], frames[4]);
}

#[test]
fn test_rainbow_is_periodic() {
    let mut first = [BLACK; RING_SIZE];
    let mut second = [BLACK; RING_SIZE];
    for frame in [0, 17, 255] {
        render_rainbow(&mut first, frame);
        render_rainbow(&mut second, frame + 256);
        assert_eq!(first, second);
    }
}

#[test]
fn test_rainbow_spreads_wheel_over_ring() {
    let mut leds = [BLACK; RING_SIZE];
    render_rainbow(&mut leds, 0);
    assert_eq!(leds[0], myrtio_light_ring::color::wheel(0));
    // 256 / 12 = 21.33, pixel 6 sits at phase 128
    assert_eq!(leds[6], myrtio_light_ring::color::wheel(128));
}

#[test]
fn test_theater_chase_lights_at_most_a_third() {
    let mut runner = runner();
    runner.fill(CYAN).unwrap();
    runner.theater_chase(RED, WAIT, 4).unwrap();

    let frames = &runner.output().frames[1..];
    assert_eq!(frames.len(), 4 * 3);
    let limit = RING_SIZE.div_ceil(3);
    for frame in frames {
        assert!(lit_count(frame) <= limit);
        assert!(frame.iter().all(|&pixel| pixel == RED || pixel == BLACK));
    }
    // Offsets rotate 0, 1, 2
    assert_eq!(frames[0][0], RED);
    assert_eq!(frames[1][1], RED);
    assert_eq!(frames[2][2], RED);
    assert_eq!(frames[3], frames[0]);
}

#[test]
fn test_theater_chase_buffer_matches_ring() {
    let mut runner = runner();
    runner.theater_chase(RED, Duration::from_millis(0), 1).unwrap();

    assert_eq!(runner.output().last_frame(), Some(&runner.pixels()[..]));
    assert_eq!(lit_count(runner.pixels()), RING_SIZE / 3);
    assert_eq!(runner.pixels()[2], RED);
}

#[test]
fn test_theater_chase_uneven_ring() {
    let mut leds = [BLACK; 7];
    for offset in 0..3 {
        render_theater_chase(&mut leds, offset, RED);
        assert!(lit_count(&leds) <= 3);
    }
    render_theater_chase(&mut leds, 0, RED);
    assert_eq!(lit_count(&leds), 3);
}

#[test]
fn test_pulse_ramp_is_symmetric() {
    let levels: Vec<u16> = pulse_levels(50).collect();
    assert_eq!(levels.len(), pulse_frame_count(50));
    assert_eq!(levels.first(), Some(&0));
    assert_eq!(levels.last(), Some(&0));
    assert_eq!(levels.iter().max(), Some(&50));
    let reversed: Vec<u16> = levels.iter().rev().copied().collect();
    assert_eq!(levels, reversed);
}

#[test]
fn test_pulse_scales_whole_ring() {
    let mut runner = runner();
    runner.pulse(RED, WAIT, 4).unwrap();

    let frames = &runner.output().frames;
    assert_eq!(frames.len(), 9);
    let reds: Vec<u8> = frames.iter().map(|frame| frame[0].r).collect();
    assert_eq!(reds, vec![0, 63, 127, 191, 255, 191, 127, 63, 0]);
    for frame in frames {
        assert!(frame.iter().all(|&pixel| pixel == frame[0]));
    }
}

#[test]
fn test_spinner_lights_one_pixel() {
    let mut runner = runner();
    runner.spinner(CYAN, WAIT, 3).unwrap();

    let frames = &runner.output().frames;
    assert_eq!(frames.len(), 3 * RING_SIZE);
    for (index, frame) in frames.iter().enumerate() {
        assert_eq!(lit_count(frame), 1);
        assert_eq!(frame[index % RING_SIZE], CYAN);
    }
    // Back at the start after a full turn
    assert_eq!(frames[0], frames[RING_SIZE]);
    assert_eq!(frames[5], frames[5 + RING_SIZE]);
}

#[test]
fn test_spinner_position_wraps() {
    let mut leds = [BLACK; 4];
    render_spinner(&mut leds, 6, RED);
    assert_eq!(leds, [BLACK, BLACK, RED, BLACK]);

    let mut empty: [Rgb; 0] = [];
    render_spinner(&mut empty, 3, RED);
}

#[test]
fn test_set_pixel_out_of_range() {
    let mut runner = runner();
    runner.set_pixel(3, RED).unwrap();
    assert_eq!(runner.pixels()[3], RED);

    assert_eq!(
        runner.set_pixel(RING_SIZE, RED),
        Err(EffectError::PixelOutOfRange {
            index: RING_SIZE,
            count: RING_SIZE
        })
    );
    assert_eq!(runner.output().frames.len(), 1);
}

#[test]
fn test_brightness_is_passed_to_driver() {
    let mut runner = TestRunner::new(
        RecordingDriver::new(),
        ScriptedPacer::new(),
        Brightness::from_unit(0.3),
    );
    runner.fill(RED).unwrap();
    runner.set_brightness(Brightness::from_raw(10)).unwrap();

    assert_eq!(
        runner.output().brightness,
        vec![Brightness::from_raw(77), Brightness::from_raw(10)]
    );
    // Buffer keeps full colors, scaling happens in the driver
    assert_eq!(runner.pixels(), &[RED; RING_SIZE]);
}

#[test]
fn test_driver_failure_propagates() {
    let mut runner = TestRunner::new(
        RecordingDriver::failing_at(2),
        ScriptedPacer::new(),
        Brightness::FULL,
    );
    assert_eq!(
        runner.color_wipe(RED, WAIT),
        Err(EffectError::Output(WriteFailed))
    );
    assert_eq!(runner.output().frames.len(), 2);
}

#[test]
fn test_interrupt_stops_effect() {
    let mut runner = TestRunner::new(
        RecordingDriver::new(),
        ScriptedPacer::interrupting_after(3),
        Brightness::FULL,
    );
    let result = runner.spinner(RED, WAIT, 5);
    assert_eq!(result, Err(EffectError::Interrupted));
    assert!(result.unwrap_err().is_interrupted());
    assert_eq!(runner.output().frames.len(), 4);
}

#[test]
fn test_unbounded_iterations_stop_on_interrupt() {
    let mut runner = TestRunner::new(
        RecordingDriver::new(),
        ScriptedPacer::interrupting_after(3),
        Brightness::FULL,
    );
    assert_eq!(runner.rainbow_cycle(WAIT, usize::MAX), Err(EffectError::Interrupted));
    assert_eq!(runner.output().frames.len(), 4);

    let mut runner = TestRunner::new(
        RecordingDriver::new(),
        ScriptedPacer::interrupting_after(3),
        Brightness::FULL,
    );
    assert_eq!(runner.spinner(RED, WAIT, usize::MAX), Err(EffectError::Interrupted));
    assert_eq!(runner.output().frames.len(), 4);
}

#[test]
fn test_guard_clears_on_error() {
    let mut runner = TestRunner::new(
        RecordingDriver::new(),
        ScriptedPacer::interrupting_after(1),
        Brightness::FULL,
    );
    {
        let mut ring = runner.clear_on_drop();
        assert!(ring.color_wipe(RED, WAIT).is_err());
        assert_eq!(ring.pixels()[1], RED);
    }
    assert_eq!(runner.output().last_frame(), Some(&[BLACK; RING_SIZE][..]));
}

#[test]
fn test_end_to_end_red_wipe() {
    let mut runner = runner();
    runner.color_wipe(RED, Duration::from_millis(0)).unwrap();
    assert_eq!(runner.pixels().to_vec(), vec![Rgb::new(255, 0, 0); 12]);
}
