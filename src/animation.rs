//! The animation loop.
//!
//! Each iteration advances the phase, waits a fixed pacing interval, renders a full frame
//! and writes it to the panel, then reports how long the iteration took. The loop runs until
//! a [`StopSignal`] fires or the panel returns an error.
//!
//! # Example
//!
//! ```rust
//! use embassy_futures::block_on;
//! use rainbow_panel::animation::{FRAME_INTERVAL_DEFAULT, StopSignal, run_rainbow_with};
//! use rainbow_panel::clock::ManualClock;
//! use rainbow_panel::panel::RecordingPanel;
//! use rainbow_panel::rainbow::{AnimationState, RainbowRenderer};
//!
//! let stop = StopSignal::new();
//! let mut panel = RecordingPanel::<8, 8>::new();
//! let mut clock = ManualClock::new();
//!
//! let state = block_on(run_rainbow_with(
//!     &mut panel,
//!     &mut clock,
//!     &RainbowRenderer::new(),
//!     AnimationState::new(),
//!     FRAME_INTERVAL_DEFAULT,
//!     &stop,
//!     |report| {
//!         if report.frame_index == 2 {
//!             stop.signal(());
//!         }
//!     },
//! ))
//! .expect("recording panel does not fail");
//!
//! assert_eq!(panel.frames().len(), 3);
//! assert_eq!(state.phase, 15.0);
//! ```

use embassy_futures::select::{Either, select};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::Duration;

use crate::{
    Result,
    clock::Clock,
    panel::Panel,
    rainbow::{AnimationState, RainbowRenderer},
};

/// Default pacing delay before each frame.
pub const FRAME_INTERVAL_DEFAULT: Duration = Duration::from_millis(200);

/// Raise this to make [`run_rainbow`] return at its next check.
pub type StopSignal = Signal<CriticalSectionRawMutex, ()>;

/// What one loop iteration did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Zero-based count of frames written.
    pub frame_index: u32,
    /// Phase the frame was rendered at.
    pub phase: f32,
    /// Time from the start of the pacing sleep until the frame was written.
    pub elapsed: Duration,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FrameReport {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        defmt::write!(
            fmt,
            "frame {} phase {} took {} ms",
            self.frame_index,
            self.phase,
            self.elapsed.as_millis()
        );
    }
}

/// Advance the animation by one tick.
#[must_use]
pub fn tick(state: AnimationState) -> AnimationState {
    if state.animate {
        state.with_phase(state.phase + state.speed)
    } else {
        state
    }
}

/// Run the rainbow on `panel` until `stop` is signaled.
///
/// Calls [`Panel::begin`] once, then loops. Returns the last state on stop; a panel error
/// ends the loop and is returned as-is.
pub async fn run_rainbow<P, C, const W: usize, const H: usize>(
    panel: &mut P,
    clock: &mut C,
    renderer: &RainbowRenderer<W, H>,
    state: AnimationState,
    frame_interval: Duration,
    stop: &StopSignal,
) -> Result<AnimationState>
where
    P: Panel<W, H>,
    C: Clock,
{
    run_rainbow_with(panel, clock, renderer, state, frame_interval, stop, |_| {}).await
}

/// [`run_rainbow`], also handing each [`FrameReport`] to `on_frame`.
pub async fn run_rainbow_with<P, C, F, const W: usize, const H: usize>(
    panel: &mut P,
    clock: &mut C,
    renderer: &RainbowRenderer<W, H>,
    mut state: AnimationState,
    frame_interval: Duration,
    stop: &StopSignal,
    mut on_frame: F,
) -> Result<AnimationState>
where
    P: Panel<W, H>,
    C: Clock,
    F: FnMut(FrameReport),
{
    #[cfg(feature = "defmt")]
    defmt::info!("run_rainbow: starting {}x{} panel", W, H);
    panel.begin().await?;

    let mut frame_index: u32 = 0;
    loop {
        if stop.try_take().is_some() {
            #[cfg(feature = "defmt")]
            defmt::info!("run_rainbow: stopped after {} frames", frame_index);
            return Ok(state);
        }

        state = tick(state);
        let start = clock.now();

        if let Either::First(()) = select(stop.wait(), clock.sleep(frame_interval)).await {
            #[cfg(feature = "defmt")]
            defmt::info!("run_rainbow: stopped during pacing after {} frames", frame_index);
            return Ok(state);
        }

        let frame = renderer.render(&state);
        if let Err(err) = panel.write_frame(&frame).await {
            #[cfg(feature = "defmt")]
            defmt::error!("run_rainbow: panel write failed: {}", err);
            return Err(err);
        }

        let report = FrameReport {
            frame_index,
            phase: state.phase,
            elapsed: clock.now() - start,
        };
        #[cfg(feature = "defmt")]
        defmt::info!("run_rainbow: {}", report);
        on_frame(report);
        frame_index = frame_index.wrapping_add(1);
    }
}
