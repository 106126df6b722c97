//! In-memory frames for rectangular LED panels.
//!
//! A [`Frame2d`] is the full pixel buffer for one displayed image. The rainbow renderer
//! fills one per tick and a [`Panel`](crate::panel::Panel) pushes it to hardware.
//! Frames are also an [`embedded-graphics`](https://docs.rs/embedded-graphics) draw target,
//! so shapes and text can be drawn over a rendered frame before it is written.
//!
//! Physical wiring lives in [`LedLayout`]; [`Frame2d::to_strip`] reorders a frame into the
//! order the LEDs sit on the data line.

pub mod layout;

pub use layout::LedLayout;

// Drawing code needs these alongside `Frame2d`.
pub use embedded_graphics::geometry::{Point, Size};

use core::{
    convert::Infallible,
    ops::{Deref, DerefMut, Index, IndexMut},
};
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888, prelude::*};
use smart_leds::RGB8;

/// Every pixel of one `W` x `H` panel image.
///
/// Rows are stored top to bottom; `frame[(x, y)]` reads column `x` of row `y`.
///
/// ```rust
/// use rainbow_panel::led2d::Frame2d;
/// use rainbow_panel::rainbow::{AnimationState, RainbowRenderer};
/// use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::{Line, PrimitiveStyle}};
/// use smart_leds::RGB8;
///
/// let mut frame: Frame2d<16, 16> = RainbowRenderer::new().render(&AnimationState::new());
///
/// // Overlay a white baseline on the rendered rainbow.
/// Line::new(Point::new(0, 15), Point::new(15, 15))
///     .into_styled(PrimitiveStyle::with_stroke(Rgb888::WHITE, 1))
///     .draw(&mut frame)
///     .expect("frames accept every pixel");
///
/// assert_eq!(frame[(7, 15)], RGB8::new(255, 255, 255));
/// assert_ne!(frame[(7, 14)], RGB8::new(255, 255, 255));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame2d<const W: usize, const H: usize>(pub [[RGB8; W]; H]);

impl<const W: usize, const H: usize> Frame2d<W, H> {
    /// Columns.
    pub const WIDTH: usize = W;
    /// Rows.
    pub const HEIGHT: usize = H;
    /// Pixel count, `W * H`.
    pub const LEN: usize = W * H;
    /// Panel size for embedded-graphics.
    pub const SIZE: Size = Size::new(W as u32, H as u32);
    /// Origin for embedded-graphics drawing.
    pub const TOP_LEFT: Point = Point::new(0, 0);

    /// All LEDs off.
    #[must_use]
    pub const fn new() -> Self {
        Self::filled(RGB8::new(0, 0, 0))
    }

    /// Every LED showing `color`.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([[color; W]; H])
    }

    /// Reorder this frame into physical LED order.
    ///
    /// Entry `i` of the result is the color for LED `i` on the data line.
    #[must_use]
    pub fn to_strip<const N: usize>(&self, led_layout: &LedLayout<N, W, H>) -> [RGB8; N] {
        let mut strip = [RGB8::new(0, 0, 0); N];
        for (led_index, &(x_index, y_index)) in led_layout.index_to_xy().iter().enumerate() {
            if let Some(slot) = strip.get_mut(led_index) {
                *slot = self[(usize::from(x_index), usize::from(y_index))];
            }
        }
        strip
    }
}

impl<const W: usize, const H: usize> Deref for Frame2d<W, H> {
    type Target = [[RGB8; W]; H];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize, const H: usize> DerefMut for Frame2d<W, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const W: usize, const H: usize> Index<(usize, usize)> for Frame2d<W, H> {
    type Output = RGB8;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < W && y_index < H, "pixel ({x_index}, {y_index}) is off the panel");
        &self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> IndexMut<(usize, usize)> for Frame2d<W, H> {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < W && y_index < H, "pixel ({x_index}, {y_index}) is off the panel");
        &mut self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> From<[[RGB8; W]; H]> for Frame2d<W, H> {
    fn from(rows: [[RGB8; W]; H]) -> Self {
        Self(rows)
    }
}

impl<const W: usize, const H: usize> Default for Frame2d<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Frame2d<W, H> {
    fn size(&self) -> Size {
        Self::SIZE
    }
}

impl<const W: usize, const H: usize> DrawTarget for Frame2d<W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (Ok(x_index), Ok(y_index)) = (usize::try_from(coord.x), usize::try_from(coord.y))
            else {
                continue;
            };
            if let Some(pixel) = self
                .0
                .get_mut(y_index)
                .and_then(|row| row.get_mut(x_index))
            {
                *pixel = RGB8::new(color.r(), color.g(), color.b());
            }
        }
        Ok(())
    }
}
