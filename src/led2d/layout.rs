//! Physical wiring of LED panels.
//!
//! WS2812 panels are a single strip folded into a grid. An [`LedLayout`] records, for each
//! LED on the data line, which `(x, y)` cell it lights. Layouts are `const` values so
//! mistakes (duplicate or missing cells) fail at compile time.
//!
//! ```rust
//! use rainbow_panel::led2d::LedLayout;
//!
//! // Two 16x8 serpentine tiles side by side make a 32x8 panel.
//! const TILE: LedLayout<128, 16, 8> = LedLayout::serpentine_column_major();
//! const PANEL: LedLayout<256, 32, 8> = TILE.combine_h(TILE);
//!
//! assert_eq!(PANEL.index_to_xy()[128], (16, 0));
//! ```

/// Maps LED strip indices to `(x, y)` panel coordinates.
///
/// `N` is the LED count, `W` and `H` the panel size; `W * H` must equal `N` and every cell
/// must be covered exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
}

impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Validate and wrap an explicit index-to-coordinate table.
    ///
    /// Entry `i` is the `(x, y)` cell lit by LED `i`.
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "layout must have at least one row and column");
        assert!(W * H == N, "W * H must equal N");
        assert!(N <= u16::MAX as usize, "layout must fit in u16 indices");

        let mut covered = [false; N];
        let mut led_index = 0;
        while led_index < N {
            let (x_index, y_index) = map[led_index];
            assert!((x_index as usize) < W, "x coordinate out of bounds");
            assert!((y_index as usize) < H, "y coordinate out of bounds");
            let cell = y_index as usize * W + x_index as usize;
            assert!(!covered[cell], "two LEDs map to the same cell");
            covered[cell] = true;
            led_index += 1;
        }
        // N cells, N distinct hits: every cell is covered.
        Self { map }
    }

    /// The `(x, y)` cell for every LED, in strip order.
    #[must_use]
    pub const fn index_to_xy(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// Panel width in LEDs.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Panel height in LEDs.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    /// Total LED count.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`; layouts cover at least one LED.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Invert the layout: entry `y * W + x` is the strip index of cell `(x, y)`.
    #[must_use]
    pub const fn xy_to_index(&self) -> [u16; N] {
        let mut inverse = [0_u16; N];
        let mut led_index = 0;
        while led_index < N {
            let (x_index, y_index) = self.map[led_index];
            inverse[y_index as usize * W + x_index as usize] = led_index as u16;
            led_index += 1;
        }
        inverse
    }

    /// A single row wired left to right.
    #[must_use]
    pub const fn linear_h() -> Self {
        assert!(H == 1, "linear_h requires a single row");
        let mut map = [(0_u16, 0_u16); N];
        let mut led_index = 0;
        while led_index < N {
            map[led_index] = (led_index as u16, 0);
            led_index += 1;
        }
        Self::new(map)
    }

    /// A single column wired top to bottom.
    #[must_use]
    pub const fn linear_v() -> Self {
        assert!(W == 1, "linear_v requires a single column");
        let mut map = [(0_u16, 0_u16); N];
        let mut led_index = 0;
        while led_index < N {
            map[led_index] = (0, led_index as u16);
            led_index += 1;
        }
        Self::new(map)
    }

    /// Columns wired in a snake: down the even columns, up the odd ones.
    ///
    /// This is how most flexible WS2812 matrices ship.
    #[must_use]
    pub const fn serpentine_column_major() -> Self {
        assert!(W * H == N, "W * H must equal N");
        let mut map = [(0_u16, 0_u16); N];
        let mut led_index = 0;
        while led_index < N {
            let x_index = led_index / H;
            let step = led_index % H;
            let y_index = if x_index % 2 == 0 { step } else { H - 1 - step };
            map[led_index] = (x_index as u16, y_index as u16);
            led_index += 1;
        }
        Self::new(map)
    }

    /// Rows wired in a snake: right along the even rows, left along the odd ones.
    #[must_use]
    pub const fn serpentine_row_major() -> Self {
        assert!(W * H == N, "W * H must equal N");
        let mut map = [(0_u16, 0_u16); N];
        let mut led_index = 0;
        while led_index < N {
            let y_index = led_index / W;
            let step = led_index % W;
            let x_index = if y_index % 2 == 0 { step } else { W - 1 - step };
            map[led_index] = (x_index as u16, y_index as u16);
            led_index += 1;
        }
        Self::new(map)
    }

    /// Swap rows and columns.
    #[must_use]
    pub const fn transpose(self) -> LedLayout<N, H, W> {
        let mut map = [(0_u16, 0_u16); N];
        let mut led_index = 0;
        while led_index < N {
            let (x_index, y_index) = self.map[led_index];
            map[led_index] = (y_index, x_index);
            led_index += 1;
        }
        LedLayout::<N, H, W>::new(map)
    }

    /// Mirror left to right.
    #[must_use]
    pub const fn flip_h(self) -> Self {
        let mut map = self.map;
        let mut led_index = 0;
        while led_index < N {
            map[led_index].0 = (W - 1 - map[led_index].0 as usize) as u16;
            led_index += 1;
        }
        Self::new(map)
    }

    /// Mirror top to bottom.
    #[must_use]
    pub const fn flip_v(self) -> Self {
        let mut map = self.map;
        let mut led_index = 0;
        while led_index < N {
            map[led_index].1 = (H - 1 - map[led_index].1 as usize) as u16;
            led_index += 1;
        }
        Self::new(map)
    }

    /// Rotate the panel a quarter turn clockwise.
    #[must_use]
    pub const fn rotate_cw(self) -> LedLayout<N, H, W> {
        self.flip_v().transpose()
    }

    /// Rotate the panel a quarter turn counter-clockwise.
    #[must_use]
    pub const fn rotate_ccw(self) -> LedLayout<N, H, W> {
        self.transpose().flip_v()
    }

    /// Rotate the panel half a turn.
    #[must_use]
    pub const fn rotate_180(self) -> Self {
        self.flip_h().flip_v()
    }

    /// Chain `right` after this panel on the data line, placed to its right.
    #[must_use]
    pub const fn combine_h<const N2: usize, const OUT_N: usize, const W2: usize, const OUT_W: usize>(
        self,
        right: LedLayout<N2, W2, H>,
    ) -> LedLayout<OUT_N, OUT_W, H> {
        assert!(OUT_N == N + N2, "OUT_N must equal N + N2");
        assert!(OUT_W == W + W2, "OUT_W must equal W + W2");
        let mut map = [(0_u16, 0_u16); OUT_N];
        let mut led_index = 0;
        while led_index < OUT_N {
            map[led_index] = if led_index < N {
                self.map[led_index]
            } else {
                let (x_index, y_index) = right.map[led_index - N];
                ((x_index as usize + W) as u16, y_index)
            };
            led_index += 1;
        }
        LedLayout::<OUT_N, OUT_W, H>::new(map)
    }

    /// Chain `bottom` after this panel on the data line, placed below it.
    #[must_use]
    pub const fn combine_v<const N2: usize, const OUT_N: usize, const H2: usize, const OUT_H: usize>(
        self,
        bottom: LedLayout<N2, W, H2>,
    ) -> LedLayout<OUT_N, W, OUT_H> {
        self.transpose()
            .combine_h::<N2, OUT_N, H2, OUT_H>(bottom.transpose())
            .transpose()
    }
}
