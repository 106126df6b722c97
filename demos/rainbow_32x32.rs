#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, future, panic};

use embassy_executor::Spawner;
use embassy_rp::{
    bind_interrupts,
    peripherals::PIO0,
    pio::{InterruptHandler, Pio},
    pio_programs::ws2812::{PioWs2812, PioWs2812Program},
};
use rainbow_panel::{
    Result,
    animation::{FRAME_INTERVAL_DEFAULT, StopSignal, run_rainbow},
    clock::EmbassyClock,
    led2d::LedLayout,
    panel::PioPanel,
    rainbow::{AnimationState, RainbowRenderer},
};
use {defmt_rtt as _, panic_probe as _};

// Four 16x16 serpentine tiles chained left-to-right, then top-to-bottom.
const LED_LAYOUT_16X16: LedLayout<256, 16, 16> = LedLayout::serpentine_column_major();
const LED_LAYOUT_32X16: LedLayout<512, 32, 16> = LED_LAYOUT_16X16.combine_h(LED_LAYOUT_16X16);
const LED_LAYOUT_32X32: LedLayout<1024, 32, 32> = LED_LAYOUT_32X16.combine_v(LED_LAYOUT_32X16);

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

// Nothing raises this yet; the animation runs until reset.
static STOP: StopSignal = StopSignal::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().await.unwrap_err();
    panic!("{err}");
}

async fn inner_main() -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let driver = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_4, &program);
    let mut panel = PioPanel::new(driver, LED_LAYOUT_32X32);

    let renderer = RainbowRenderer::<32, 32>::new();
    let state = run_rainbow(
        &mut panel,
        &mut EmbassyClock,
        &renderer,
        AnimationState::new(),
        FRAME_INTERVAL_DEFAULT,
        &STOP,
    )
    .await?;
    defmt::info!("rainbow stopped at phase {}", state.phase);

    future::pending().await // hold the last frame
}
