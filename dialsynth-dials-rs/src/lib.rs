//! Dial state for the synthesizer dials demo.
//!
//! - [`dials`] - the static dial table and the [`DialBank`](dials::DialBank)
//!   holding current values and the active-dial selector.
//! - [`voice`] - the [`Voice`](voice::Voice) parameter record and the
//!   host [`VoiceEngine`](voice::VoiceEngine) trait.
//! - [`input`] - the host [`Buttons`](input::Buttons) trait.
//! - [`control`] - the per-frame input-to-parameter update.
//!
//! # Crate Features
//!
//! - **`defmt`** - structured logging via [`defmt`].

#![no_std]

pub mod control;
pub mod dials;
pub mod input;
pub mod voice;
