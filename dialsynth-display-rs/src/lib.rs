//! Rendering for the dialsynth demo using `embedded-graphics`.
//!
//! This crate draws the [`DialBank`] as a grid of rotary knobs and the
//! host audio engine's output as two waveform panels. Every renderer
//! targets any [`DrawTarget`] with [`Rgb565`] pixels.
//!
//! # Quick Start
//!
//! ```no_run
//! use dialsynth::dials::DialBank;
//! use dialsynth::voice::{Voice, VoiceEngine};
//! use dialsynth_display_rs::{render_frame, LayoutConfig, ScopeTrace};
//! # use embedded_graphics::{pixelcolor::Rgb565, draw_target::DrawTarget};
//! # fn example(display: &mut impl DrawTarget<Color = Rgb565>, engine: &impl VoiceEngine) {
//!
//! let bank = DialBank::new();
//! let voice = Voice::from_dials(&bank);
//! let config = LayoutConfig::default();
//! let mut scope = ScopeTrace::new();
//!
//! // Once per frame:
//! render_frame(display, &bank, &voice, engine, &mut scope, &config).ok();
//! # }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** - `defmt::Format` for public data types.
//!
//! [`DialBank`]: dialsynth::dials::DialBank
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
//! [`Rgb565`]: embedded_graphics::pixelcolor::Rgb565

#![no_std]

#[cfg(test)]
extern crate std;

pub mod frame;
pub mod knob;
pub mod layout;
pub mod pen;
pub mod waveform;

#[cfg(test)]
mod test_support;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use frame::render_frame;
pub use knob::{render_dial, render_dial_panels};
pub use layout::LayoutConfig;
pub use pen::Pen;
pub use waveform::{render_envelope_preview, render_scope, render_status, ScopeTrace};
