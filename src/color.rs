//! HSV colour sweep used to build the rainbow.
//!
//! [`from_hsv`] converts one hue/saturation/value triple to an LED colour.
//! [`HueMap`] precomputes one fully saturated, half-bright colour per panel column.
//!
//! ```rust
//! use rainbow_panel::color::{HueMap, from_hsv};
//! use smart_leds::RGB8;
//!
//! assert_eq!(from_hsv(0.0, 1.0, 0.5), RGB8::new(127, 0, 0));
//!
//! let hue_map = HueMap::<32>::new();
//! assert_eq!(hue_map[0], from_hsv(0.0, 1.0, 0.5));
//! ```

use core::ops::Deref;

use smart_leds::RGB8;

/// Saturation used for every [`HueMap`] entry.
pub const HUE_MAP_SATURATION: f32 = 1.0;

/// Value (brightness) used for every [`HueMap`] entry.
pub const HUE_MAP_VALUE: f32 = 0.5;

/// Convert hue, saturation and value to an [`RGB8`].
///
/// `hue` is a fraction of a full turn. It is reduced by the sector modulo, so
/// `from_hsv(h, s, v) == from_hsv(h + 1.0, s, v)` and `1.0` lands back on red.
/// `saturation` and `value` are clamped to `0.0..=1.0`. Channels are truncated toward zero.
#[must_use]
pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> RGB8 {
    let saturation = saturation.clamp(0.0, 1.0);
    let value = value.clamp(0.0, 1.0) * 255.0;

    let sector_start = libm::floorf(hue * 6.0);
    let fraction = hue * 6.0 - sector_start;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - fraction * saturation);
    let t = value * (1.0 - (1.0 - fraction) * saturation);

    let (red, green, blue) = match (sector_start as i32).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    RGB8::new(red as u8, green as u8, blue as u8)
}

/// One base colour per panel column, built once at startup.
///
/// Entry `x` holds `from_hsv(x / W, 1.0, 0.5)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HueMap<const W: usize>([RGB8; W]);

impl<const W: usize> HueMap<W> {
    /// Number of entries, equal to the panel width.
    pub const LEN: usize = W;

    /// Build the hue map for a panel `W` columns wide.
    #[must_use]
    pub fn new() -> Self {
        Self(core::array::from_fn(|x_index| {
            from_hsv(
                x_index as f32 / W as f32,
                HUE_MAP_SATURATION,
                HUE_MAP_VALUE,
            )
        }))
    }

    /// Base colour shown in column `x_index` after rotating the rainbow by `hue_offset`.
    ///
    /// `hue_offset` is a fraction of the panel width; `0.5` on a 32 wide panel shows
    /// entry 16 in column 0. The rotated position wraps like a floored modulo, so negative
    /// offsets rotate the other way.
    #[must_use]
    pub fn color_for_column(&self, x_index: usize, hue_offset: f32) -> RGB8 {
        assert!(W > 0, "hue map must have at least one column");
        let width = W as f32;
        let shifted = x_index as f32 + hue_offset * width;
        let wrapped = shifted - libm::floorf(shifted / width) * width;
        // Float rounding can land exactly on `width` for tiny negative inputs.
        let column = (libm::floorf(wrapped) as usize).min(W - 1);
        self.0.get(column).copied().unwrap_or_default()
    }
}

impl<const W: usize> Default for HueMap<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> Deref for HueMap<W> {
    type Target = [RGB8; W];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize> From<HueMap<W>> for [RGB8; W] {
    fn from(hue_map: HueMap<W>) -> Self {
        hue_map.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_sector_matches_the_table() {
        // Sector midpoints at full saturation and value.
        assert_eq!(from_hsv(1.0 / 12.0, 1.0, 1.0), RGB8::new(255, 127, 0));
        assert_eq!(from_hsv(3.0 / 12.0, 1.0, 1.0), RGB8::new(127, 255, 0));
        assert_eq!(from_hsv(5.0 / 12.0, 1.0, 1.0), RGB8::new(0, 255, 127));
        assert_eq!(from_hsv(7.0 / 12.0, 1.0, 1.0), RGB8::new(0, 127, 255));
        assert_eq!(from_hsv(9.0 / 12.0, 1.0, 1.0), RGB8::new(127, 0, 255));
        assert_eq!(from_hsv(11.0 / 12.0, 1.0, 1.0), RGB8::new(255, 0, 127));
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(from_hsv(0.3, 0.0, 1.0), RGB8::new(255, 255, 255));
        assert_eq!(from_hsv(0.7, 0.0, 0.5), RGB8::new(127, 127, 127));
    }

    #[test]
    fn out_of_range_saturation_and_value_are_clamped() {
        assert_eq!(from_hsv(0.0, 2.0, 3.0), from_hsv(0.0, 1.0, 1.0));
        assert_eq!(from_hsv(0.0, -1.0, -0.5), RGB8::new(0, 0, 0));
    }

    #[test]
    fn hue_of_one_wraps_to_red() {
        assert_eq!(from_hsv(1.0, 1.0, 0.5), from_hsv(0.0, 1.0, 0.5));
    }
}
