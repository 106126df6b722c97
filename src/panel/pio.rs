use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::{PioWs2812, RgbColorOrder};
use smart_leds::RGB8;

use crate::{
    Result,
    led2d::{Frame2d, LedLayout},
    panel::Panel,
};

/// [`Panel`] for a WS2812 matrix driven by a PIO state machine with DMA.
///
/// Construct the `PioWs2812` driver with `embassy_rp` (see `demos/rainbow_32x32.rs`) and
/// pair it with the panel's wiring.
pub struct PioPanel<'d, PIO, const SM: usize, const N: usize, ORDER, const W: usize, const H: usize>
where
    PIO: Instance,
    ORDER: RgbColorOrder,
{
    driver: PioWs2812<'d, PIO, SM, N, ORDER>,
    led_layout: LedLayout<N, W, H>,
}

impl<'d, PIO, const SM: usize, const N: usize, ORDER, const W: usize, const H: usize>
    PioPanel<'d, PIO, SM, N, ORDER, W, H>
where
    PIO: Instance,
    ORDER: RgbColorOrder,
{
    /// Pair a PIO driver with the panel's wiring.
    #[must_use]
    pub const fn new(driver: PioWs2812<'d, PIO, SM, N, ORDER>, led_layout: LedLayout<N, W, H>) -> Self {
        Self { driver, led_layout }
    }
}

impl<PIO, const SM: usize, const N: usize, ORDER, const W: usize, const H: usize> Panel<W, H>
    for PioPanel<'_, PIO, SM, N, ORDER, W, H>
where
    PIO: Instance,
    ORDER: RgbColorOrder,
{
    async fn begin(&mut self) -> Result<()> {
        defmt::info!("PioPanel::begin: {}x{} panel, {} LEDs", W, H, N);
        self.driver.write(&[RGB8::default(); N]).await;
        Ok(())
    }

    async fn write_frame(&mut self, frame: &Frame2d<W, H>) -> Result<()> {
        self.driver.write(&frame.to_strip(&self.led_layout)).await;
        Ok(())
    }
}
