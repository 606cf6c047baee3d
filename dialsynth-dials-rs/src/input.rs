//! Host button interface.

/// The four direction buttons used by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
}

/// Debounced button state provided by the host SDK.
pub trait Buttons {
    /// `true` on every frame the button is held down.
    fn held(&self, button: Button) -> bool;

    /// `true` only on the frame the button went down.
    fn pressed(&self, button: Button) -> bool;
}
