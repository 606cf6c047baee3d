//! Per-frame translation of button input into dial changes and voice
//! submissions.
//!
//! # Frame order
//!
//! 1. `Up` held → increment the active dial (repeats every frame held).
//! 2. `Down` held → decrement the active dial.
//! 3. `Left` pressed → select the previous dial (edge-triggered).
//! 4. `Right` pressed → select the next dial.
//! 5. If any dial value changed, rebuild the whole [`Voice`] and submit
//!    it once.

use crate::dials::DialBank;
use crate::input::{Button, Buttons};
use crate::voice::{Voice, VoiceEngine};

/// What one frame of input did to the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameInput {
    /// At least one dial value moved.
    pub value_changed: bool,
    /// The active dial index moved.
    pub selection_changed: bool,
}

/// Apply one frame of button input to `bank`.
///
/// Adjustments hit the dial that is active at the start of the frame;
/// selection moves afterwards. `value_changed` compares the dial's
/// value at the end of the frame with its value at the start.
pub fn apply_input<B: Buttons + ?Sized>(bank: &mut DialBank, buttons: &B) -> FrameInput {
    let mut frame = FrameInput::default();
    let active = bank.active_id();
    let start = bank.value(active);

    if buttons.held(Button::Up) {
        bank.increment(active);
    }

    if buttons.held(Button::Down) {
        bank.decrement(active);
    }

    // Up and Down together can land back on the starting value.
    frame.value_changed = bank.value(active) != start;

    if buttons.pressed(Button::Left) {
        bank.select_previous();
        frame.selection_changed = true;
    }

    if buttons.pressed(Button::Right) {
        bank.select_next();
        frame.selection_changed = true;
    }

    frame
}

/// Run the input-to-parameter step for one frame.
///
/// Returns the submitted voice, or `None` when no dial value changed and
/// nothing was sent to `engine`.
///
/// # Examples
///
/// ```
/// use dialsynth::control::update;
/// use dialsynth::dials::DialBank;
/// use dialsynth::input::{Button, Buttons};
/// use dialsynth::voice::{Voice, VoiceEngine};
///
/// struct HoldUp;
/// impl Buttons for HoldUp {
///     fn held(&self, b: Button) -> bool { b == Button::Up }
///     fn pressed(&self, _: Button) -> bool { false }
/// }
///
/// #[derive(Default)]
/// struct Engine { plays: u32 }
/// impl VoiceEngine for Engine {
///     fn play(&mut self, _: &Voice) { self.plays += 1; }
///     fn last_sample(&self) -> u8 { 0 }
///     fn sample_at(&self, _: u32) -> u8 { 0 }
/// }
///
/// let mut bank = DialBank::new();
/// let mut engine = Engine::default();
/// let voice = update(&mut bank, &HoldUp, &mut engine).unwrap();
/// assert_eq!(voice.frequency, 445);
/// assert_eq!(engine.plays, 1);
/// ```
pub fn update<B, E>(bank: &mut DialBank, buttons: &B, engine: &mut E) -> Option<Voice>
where
    B: Buttons + ?Sized,
    E: VoiceEngine + ?Sized,
{
    let frame = apply_input(bank, buttons);

    if frame.selection_changed {
        #[cfg(feature = "defmt")]
        defmt::debug!("active dial: {}", bank.active().name());
    }

    if !frame.value_changed {
        return None;
    }

    let voice = Voice::from_dials(bank);
    engine.play(&voice);

    #[cfg(feature = "defmt")]
    defmt::debug!("voice submitted: {}", voice);

    Some(voice)
}
