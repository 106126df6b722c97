#![cfg(feature = "host")]
#![allow(missing_docs, reason = "integration tests")]
//! HSV conversion and hue map properties.

use rainbow_panel::color::{HueMap, from_hsv};
use smart_leds::RGB8;

#[test]
fn red_at_half_value() {
    assert_eq!(from_hsv(0.0, 1.0, 0.5), RGB8::new(127, 0, 0));
}

#[test]
fn half_value_sweep_stays_in_range() {
    // Every hue on a fine grid; channels can never exceed 127 at value 0.5.
    for step in 0..1024_u16 {
        let hue = f32::from(step) / 1024.0;
        let color = from_hsv(hue, 1.0, 0.5);
        assert!(color.r <= 127 && color.g <= 127 && color.b <= 127, "{hue}: {color:?}");
        // One channel is always at the value, one at zero.
        assert_eq!(color.r.max(color.g).max(color.b), 127, "{hue}: {color:?}");
        assert_eq!(color.r.min(color.g).min(color.b), 0, "{hue}: {color:?}");
    }
}

#[test]
fn hue_is_periodic() {
    // Dyadic hues stay exact after adding whole turns.
    for step in 0..64_u16 {
        let hue = f32::from(step) / 64.0;
        assert_eq!(from_hsv(hue, 1.0, 0.5), from_hsv(hue + 1.0, 1.0, 0.5), "{hue}");
        assert_eq!(from_hsv(hue, 0.75, 1.0), from_hsv(hue - 1.0, 0.75, 1.0), "{hue}");
    }
}

#[test]
fn hue_map_matches_conversion_per_column() {
    let hue_map = HueMap::<32>::new();
    assert_eq!(hue_map.len(), 32);
    assert_eq!(HueMap::<32>::LEN, 32);
    assert_eq!(hue_map[0], from_hsv(0.0, 1.0, 0.5));
    for (x_index, &color) in hue_map.iter().enumerate() {
        assert_eq!(color, from_hsv(x_index as f32 / 32.0, 1.0, 0.5));
    }
}

#[test]
fn hue_map_length_follows_width() {
    assert_eq!(HueMap::<1>::new().len(), 1);
    assert_eq!(HueMap::<7>::new().len(), 7);
    assert_eq!(HueMap::<64>::new().len(), 64);
}

#[test]
fn zero_offset_keeps_columns_in_place() {
    let hue_map = HueMap::<32>::new();
    for x_index in 0..32 {
        assert_eq!(hue_map.color_for_column(x_index, 0.0), hue_map[x_index]);
    }
}

#[test]
fn offset_rotates_columns() {
    let hue_map = HueMap::<32>::new();
    // Half a panel: column 0 shows entry 16, column 20 wraps to entry 4.
    assert_eq!(hue_map.color_for_column(0, 0.5), hue_map[16]);
    assert_eq!(hue_map.color_for_column(20, 0.5), hue_map[4]);
    // Whole turns change nothing.
    assert_eq!(hue_map.color_for_column(5, 1.0), hue_map[5]);
    assert_eq!(hue_map.color_for_column(5, 3.0), hue_map[5]);
}

#[test]
fn negative_offset_wraps_like_floored_modulo() {
    let hue_map = HueMap::<32>::new();
    // -0.25 of 32 columns = -8: column 0 shows entry 24.
    assert_eq!(hue_map.color_for_column(0, -0.25), hue_map[24]);
    assert_eq!(hue_map.color_for_column(10, -0.25), hue_map[2]);
}

#[test]
fn fractional_offset_truncates_to_a_column() {
    let hue_map = HueMap::<32>::new();
    // 0.01 * 32 = 0.32 columns, floored away.
    assert_eq!(hue_map.color_for_column(3, 0.01), hue_map[3]);
}
