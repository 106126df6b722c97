#![cfg(feature = "host")]
#![allow(missing_docs, reason = "integration tests")]
//! Rainbow frame generator behaviour.

use rainbow_panel::animation::tick;
use rainbow_panel::color::HueMap;
use rainbow_panel::rainbow::{
    AnimationState, BRIGHTNESS_MAX, BRIGHTNESS_MIN, RainbowRenderer, brightness_at, dim,
    render_frame,
};
use smart_leds::RGB8;

type Renderer = RainbowRenderer<32, 32>;

#[test]
fn top_left_pixel_at_phase_zero() {
    let frame = Renderer::new().render(&AnimationState::new());
    assert_eq!(frame[(0, 0)], RGB8::new(76, 0, 0));
}

#[test]
fn every_pixel_follows_the_formula() {
    let renderer = Renderer::new();
    let state = AnimationState::new().with_phase(37.5).with_stripe_width(4.0);
    let frame = renderer.render(&state);

    for y_index in 0..32 {
        for x_index in 0..32 {
            let base = renderer.hue_map()[x_index];
            let brightness = brightness_at(x_index, y_index, 4.0, 37.5 / 15.0);
            assert_eq!(frame[(x_index, y_index)], dim(base, brightness));
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let renderer = Renderer::new();
    let state = AnimationState::new().with_phase(123.0).with_hue_offset(0.25);
    assert_eq!(renderer.render(&state), renderer.render(&state));

    let hue_map = HueMap::<32>::new();
    let from_fn: rainbow_panel::led2d::Frame2d<32, 32> = render_frame(&hue_map, &state);
    assert_eq!(from_fn, renderer.render(&state));
}

#[test]
fn brightness_stays_within_bounds() {
    for stripe_width in [0.5_f32, 1.0, 3.0, 7.25] {
        for phase_step in 0..40_u16 {
            let phase_percent = f32::from(phase_step) * 0.37;
            for y_index in 0..16 {
                for x_index in 0..16 {
                    let brightness = brightness_at(x_index, y_index, stripe_width, phase_percent);
                    assert!(
                        (BRIGHTNESS_MIN..=BRIGHTNESS_MAX).contains(&brightness),
                        "{brightness} at ({x_index}, {y_index})"
                    );
                }
            }
        }
    }
}

#[test]
fn phase_moves_the_stripes() {
    let renderer = Renderer::new();
    let still = renderer.render(&AnimationState::new());
    let moved = renderer.render(&AnimationState::new().with_phase(5.0));
    assert_ne!(still, moved);
}

#[test]
fn pixels_on_the_same_diagonal_share_brightness() {
    let phase_percent = AnimationState::new().with_phase(10.0).phase_percent();
    let along = brightness_at(2, 5, 3.0, phase_percent);
    assert_eq!(along, brightness_at(5, 2, 3.0, phase_percent));
    assert_eq!(along, brightness_at(7, 0, 3.0, phase_percent));
}

#[test]
fn hue_offset_rotates_base_colors() {
    let renderer = Renderer::new();
    let rotated = renderer.render(&AnimationState::new().with_hue_offset(0.5));

    // Row 0, column 0: entry 16 of the hue map at brightness 0.6.
    let expected = dim(renderer.hue_map()[16], brightness_at(0, 0, 3.0, 0.0));
    assert_eq!(rotated[(0, 0)], expected);
    assert_ne!(rotated, renderer.render(&AnimationState::new()));
}

#[test]
fn three_ticks_at_speed_five_reach_phase_fifteen() {
    let state = AnimationState::new().with_speed(5.0);
    let state = tick(tick(tick(state)));
    assert_eq!(state.phase, 15.0);
    assert_eq!(state.phase_percent(), 1.0);
}

#[test]
fn ticks_leave_phase_alone_when_animation_is_off() {
    let state = AnimationState::new().with_phase(4.0).with_animate(false);
    assert_eq!(tick(tick(state)).phase, 4.0);
}

#[test]
fn dim_truncates_each_channel() {
    assert_eq!(dim(RGB8::new(127, 64, 10), 0.6), RGB8::new(76, 38, 6));
    assert_eq!(dim(RGB8::new(255, 255, 255), 1.0), RGB8::new(255, 255, 255));
}

#[test]
#[should_panic(expected = "stripe_width must be positive and finite")]
fn zero_stripe_width_is_rejected() {
    let _ = AnimationState::new().with_stripe_width(0.0);
}

#[test]
fn non_square_panels_render() {
    let frame = RainbowRenderer::<12, 4>::new().render(&AnimationState::new());
    assert_eq!(frame.0.len(), 4);
    assert_eq!(frame.0[0].len(), 12);
    assert_eq!(frame[(0, 0)], RGB8::new(76, 0, 0));
}
