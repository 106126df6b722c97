//! Animated rainbow stripes for RGB LED matrix panels on the Pico 1 and 2.
//!
//! The crate splits the animation into pure colour math and thin hardware seams:
//!
//! - [`color`]: HSV-to-RGB conversion and the per-column [`HueMap`](color::HueMap).
//! - [`rainbow`]: the frame generator and the [`AnimationState`](rainbow::AnimationState)
//!   it reads.
//! - [`led2d`]: the [`Frame2d`](led2d::Frame2d) pixel buffer and panel wiring layouts.
//! - [`panel`]: the [`Panel`](panel::Panel) display sink trait and its implementations.
//! - [`clock`]: the [`Clock`](clock::Clock) time source.
//! - [`animation`]: the paced render loop, stoppable with a
//!   [`StopSignal`](animation::StopSignal).
//!
//! # Glossary
//!
//! - **Phase:** accumulated animation time, advanced by a fixed speed each tick.
//! - **Stripe width:** controls the spatial frequency of the diagonal brightness wave.
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):**
//!   the Pico state machines that generate the WS2812 signal.
#![cfg_attr(not(any(test, feature = "host")), no_std)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2' (or 'host' for tests)");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

#[cfg(all(feature = "host", any(feature = "pico1", feature = "pico2")))]
compile_error!("'host' cannot be combined with a board feature; use --no-default-features");

pub mod animation;
pub mod clock;
pub mod color;
mod error;
pub mod led2d;
pub mod panel;
pub mod rainbow;
#[cfg(feature = "host")]
pub mod to_png;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
