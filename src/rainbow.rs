//! Moving rainbow stripes.
//!
//! Every column gets a base colour from a [`HueMap`]. Every pixel is then dimmed by a sine
//! wave running along the diagonal `x + y`, and the wave slides as the animation phase
//! grows, so bright bands drift across the panel.
//!
//! ```rust
//! use rainbow_panel::rainbow::{AnimationState, RainbowRenderer};
//! use smart_leds::RGB8;
//!
//! let renderer = RainbowRenderer::<32, 32>::new();
//! let frame = renderer.render(&AnimationState::new());
//!
//! // Base colour (127, 0, 0) at brightness (sin(0) + 1.5) / 2.5 = 0.6.
//! assert_eq!(frame[(0, 0)], RGB8::new(76, 0, 0));
//! ```

use smart_leds::RGB8;

use crate::{color::HueMap, led2d::Frame2d};

/// Divides the accumulated phase before it enters the sine.
pub const PHASE_DIVISOR: f32 = 15.0;

/// Default phase advance per tick.
pub const SPEED_DEFAULT: f32 = 5.0;

/// Default stripe width; larger values give wider, slower-varying bands.
pub const STRIPE_WIDTH_DEFAULT: f32 = 3.0;

/// Default horizontal rotation of the rainbow, as a fraction of the panel width.
pub const HUE_OFFSET_DEFAULT: f32 = 0.0;

/// Dimmest brightness the stripe wave produces: `(-1 + 1.5) / 2.5`.
pub const BRIGHTNESS_MIN: f32 = 0.2;

/// Brightest brightness the stripe wave produces: `(1 + 1.5) / 2.5`.
pub const BRIGHTNESS_MAX: f32 = 1.0;

const BRIGHTNESS_LIFT: f32 = 1.5;
const BRIGHTNESS_SPAN: f32 = 2.5;

/// Everything that drives one rainbow frame.
///
/// The state is a plain value: [`crate::animation::tick`] takes one and returns the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Accumulated animation time. Grows by `speed` each tick while `animate` is set.
    pub phase: f32,
    /// Rotation of the hue map, as a fraction of the panel width.
    pub hue_offset: f32,
    /// Spatial period control for the diagonal brightness wave.
    pub stripe_width: f32,
    /// Phase advance per tick.
    pub speed: f32,
    /// When `false`, ticks leave the phase alone and the picture freezes.
    pub animate: bool,
}

impl AnimationState {
    /// Phase 0 with the default speed, stripe width and hue offset, animation on.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: 0.0,
            hue_offset: HUE_OFFSET_DEFAULT,
            stripe_width: STRIPE_WIDTH_DEFAULT,
            speed: SPEED_DEFAULT,
            animate: true,
        }
    }

    /// Start from a different phase.
    #[must_use]
    pub const fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    /// Change the phase advance per tick.
    #[must_use]
    pub const fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Change the stripe width.
    ///
    /// # Panics
    ///
    /// Panics if `stripe_width` is not a positive, finite number.
    #[must_use]
    pub const fn with_stripe_width(mut self, stripe_width: f32) -> Self {
        assert!(
            stripe_width > 0.0 && stripe_width < f32::INFINITY,
            "stripe_width must be positive and finite"
        );
        self.stripe_width = stripe_width;
        self
    }

    /// Rotate the rainbow horizontally by a fraction of the panel width.
    #[must_use]
    pub const fn with_hue_offset(mut self, hue_offset: f32) -> Self {
        self.hue_offset = hue_offset;
        self
    }

    /// Turn phase advancement on or off.
    #[must_use]
    pub const fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// The phase scaled into the sine argument.
    #[must_use]
    pub fn phase_percent(&self) -> f32 {
        self.phase / PHASE_DIVISOR
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Brightness multiplier for pixel `(x, y)`.
///
/// `(sin((x + y) / stripe_width + phase_percent) + 1.5) / 2.5`, always within
/// [`BRIGHTNESS_MIN`]`..=`[`BRIGHTNESS_MAX`].
#[must_use]
pub fn brightness_at(x_index: usize, y_index: usize, stripe_width: f32, phase_percent: f32) -> f32 {
    let diagonal = (x_index + y_index) as f32;
    let wave = libm::sinf(diagonal / stripe_width + phase_percent);
    ((wave + BRIGHTNESS_LIFT) / BRIGHTNESS_SPAN).clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX)
}

/// Scale each channel of `color` by `brightness`, truncating toward zero.
#[must_use]
pub fn dim(color: RGB8, brightness: f32) -> RGB8 {
    RGB8::new(
        (f32::from(color.r) * brightness) as u8,
        (f32::from(color.g) * brightness) as u8,
        (f32::from(color.b) * brightness) as u8,
    )
}

/// Compute one complete rainbow frame.
///
/// Pure: the same hue map and state always produce the same frame.
#[must_use]
pub fn render_frame<const W: usize, const H: usize>(
    hue_map: &HueMap<W>,
    state: &AnimationState,
) -> Frame2d<W, H> {
    let phase_percent = state.phase_percent();
    let column_colors: [RGB8; W] =
        core::array::from_fn(|x_index| hue_map.color_for_column(x_index, state.hue_offset));

    let mut frame = Frame2d::new();
    for (y_index, row) in frame.iter_mut().enumerate() {
        for (x_index, (pixel, &color)) in row.iter_mut().zip(column_colors.iter()).enumerate() {
            let brightness = brightness_at(x_index, y_index, state.stripe_width, phase_percent);
            *pixel = dim(color, brightness);
        }
    }
    frame
}

/// Owns the hue map for a `W` x `H` panel and renders frames from it.
#[derive(Clone, Copy, Debug)]
pub struct RainbowRenderer<const W: usize, const H: usize> {
    hue_map: HueMap<W>,
}

impl<const W: usize, const H: usize> RainbowRenderer<W, H> {
    /// Build the hue map once for this panel width.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hue_map: HueMap::new(),
        }
    }

    /// The precomputed per-column colours.
    #[must_use]
    pub const fn hue_map(&self) -> &HueMap<W> {
        &self.hue_map
    }

    /// Render the frame for `state`.
    #[must_use]
    pub fn render(&self, state: &AnimationState) -> Frame2d<W, H> {
        render_frame(&self.hue_map, state)
    }
}

impl<const W: usize, const H: usize> Default for RainbowRenderer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}
