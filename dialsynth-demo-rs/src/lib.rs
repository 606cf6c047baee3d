//! Synthesizer dials demo.
//!
//! Wires the dial state from [`dialsynth`] and the renderers from
//! [`dialsynth_display_rs`] into a frame-driven program:
//!
//! 1. A direction button is held or pressed on the host.
//! 2. [`DialsDemo::update`] steps the active dial or moves the selection.
//! 3. If a dial value changed, the whole voice record is resubmitted to
//!    the host audio engine.
//! 4. [`DialsDemo::draw`] renders the dial grid, the envelope preview and
//!    one more sample of the scrolling scope.
//!
//! The host owns the run loop and calls `update` then `draw` once per
//! tick. Hosts running Embassy can use `frame_loop` instead.
//!
//! # Crate Features
//!
//! - **`defmt`** - structured logging via [`defmt`].
//! - **`task`** - the `frame_loop` async driver (requires an
//!   `embassy-time` driver on the target).

#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod demo;
#[cfg(feature = "task")]
pub mod frame_loop;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use config::DemoConfig;
pub use demo::DialsDemo;
#[cfg(feature = "task")]
pub use frame_loop::frame_loop;
