//! Display sinks for rendered frames.
//!
//! A [`Panel`] is started once and then receives whole frames. The animation loop never
//! sets individual pixels on hardware; it fills a [`Frame2d`] and hands it over.
//!
//! - [`LedStripPanel`] drives a WS2812 style panel through any blocking
//!   [`SmartLedsWrite`] driver, reordering pixels with an [`LedLayout`].
//! - `PioPanel` (hardware builds) drives the panel from an RP2040/RP2350 PIO state machine.
//! - `RecordingPanel` (host builds) keeps every frame for tests and previews.

#[cfg(not(feature = "host"))]
mod pio;

#[cfg(not(feature = "host"))]
pub use pio::PioPanel;

use smart_leds::{RGB8, SmartLedsWrite};

use crate::{
    Error, Result,
    led2d::{Frame2d, LedLayout},
};

/// A `W` x `H` display that accepts complete frames.
pub trait Panel<const W: usize, const H: usize> {
    /// Bring the hardware up. Called once before the first frame.
    async fn begin(&mut self) -> Result<()>;

    /// Show `frame`, replacing whatever was displayed.
    async fn write_frame(&mut self, frame: &Frame2d<W, H>) -> Result<()>;
}

/// [`Panel`] over a blocking `smart-leds` driver.
///
/// Frames are converted to strip order with the panel's [`LedLayout`] and written in one
/// call. Any driver error becomes [`Error::PanelWrite`].
pub struct LedStripPanel<S, const N: usize, const W: usize, const H: usize> {
    writer: S,
    led_layout: LedLayout<N, W, H>,
    started: bool,
}

impl<S, const N: usize, const W: usize, const H: usize> LedStripPanel<S, N, W, H>
where
    S: SmartLedsWrite<Color = RGB8>,
{
    /// Wrap `writer`, whose LEDs are wired as described by `led_layout`.
    #[must_use]
    pub const fn new(writer: S, led_layout: LedLayout<N, W, H>) -> Self {
        Self {
            writer,
            led_layout,
            started: false,
        }
    }

    /// Give the driver back.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.writer
    }
}

impl<S, const N: usize, const W: usize, const H: usize> Panel<W, H> for LedStripPanel<S, N, W, H>
where
    S: SmartLedsWrite<Color = RGB8>,
{
    async fn begin(&mut self) -> Result<()> {
        // Start dark so a stale image is not shown while the first frame renders.
        self.writer
            .write([RGB8::default(); N])
            .map_err(|_| Error::PanelWrite)?;
        self.started = true;
        Ok(())
    }

    async fn write_frame(&mut self, frame: &Frame2d<W, H>) -> Result<()> {
        if !self.started {
            return Err(Error::PanelNotStarted);
        }
        self.writer
            .write(frame.to_strip(&self.led_layout))
            .map_err(|_| Error::PanelWrite)
    }
}

/// In-memory [`Panel`] that records every frame.
///
/// `fail_after` makes it reject writes once that many frames were accepted, to exercise
/// error paths.
#[cfg(feature = "host")]
#[derive(Clone, Debug, Default)]
pub struct RecordingPanel<const W: usize, const H: usize> {
    begin_count: usize,
    frames: std::vec::Vec<Frame2d<W, H>>,
    fail_after: Option<usize>,
}

#[cfg(feature = "host")]
impl<const W: usize, const H: usize> RecordingPanel<W, H> {
    /// An empty recorder that never fails.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            begin_count: 0,
            frames: std::vec::Vec::new(),
            fail_after: None,
        }
    }

    /// Fail with [`Error::PanelWrite`] once `frame_count` frames have been recorded.
    #[must_use]
    pub const fn failing_after(mut self, frame_count: usize) -> Self {
        self.fail_after = Some(frame_count);
        self
    }

    /// How many times [`Panel::begin`] was called.
    #[must_use]
    pub const fn begin_count(&self) -> usize {
        self.begin_count
    }

    /// Every frame written so far, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[Frame2d<W, H>] {
        &self.frames
    }
}

#[cfg(feature = "host")]
impl<const W: usize, const H: usize> Panel<W, H> for RecordingPanel<W, H> {
    async fn begin(&mut self) -> Result<()> {
        self.begin_count += 1;
        Ok(())
    }

    async fn write_frame(&mut self, frame: &Frame2d<W, H>) -> Result<()> {
        if self.begin_count == 0 {
            return Err(Error::PanelNotStarted);
        }
        if self.fail_after == Some(self.frames.len()) {
            return Err(Error::PanelWrite);
        }
        self.frames.push(*frame);
        Ok(())
    }
}
