//! 4-bit RGBA pens and the demo palette.
//!
//! The frame buffer is opaque [`Rgb565`]. Translucent pens are resolved
//! against the color already known to be underneath them with
//! [`Pen::over()`] before drawing, so renderers never read pixels back.

use embedded_graphics::pixelcolor::Rgb565;

/// A drawing color with 4-bit red, green, blue and alpha channels.
///
/// Alpha `15` is fully opaque, `0` fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pen {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pen {
    /// Opaque pen. Channels are masked to 4 bits.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 15)
    }

    /// Pen with alpha. Channels are masked to 4 bits.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r & 0x0f,
            g: g & 0x0f,
            b: b & 0x0f,
            a: a & 0x0f,
        }
    }

    /// Composite this pen over an opaque `backdrop`.
    ///
    /// Returns an opaque pen: `out = (src * a + dst * (15 - a)) / 15`
    /// per channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use dialsynth_display_rs::Pen;
    ///
    /// let white = Pen::rgb(15, 15, 15);
    /// let half_black = Pen::rgba(0, 0, 0, 8);
    /// assert_eq!(half_black.over(white), Pen::rgb(7, 7, 7));
    /// assert_eq!(Pen::rgb(1, 2, 3).over(white), Pen::rgb(1, 2, 3));
    /// ```
    pub const fn over(self, backdrop: Pen) -> Pen {
        Pen::rgb(
            mix(self.r, backdrop.r, self.a),
            mix(self.g, backdrop.g, self.a),
            mix(self.b, backdrop.b, self.a),
        )
    }

    /// Frame buffer color, ignoring alpha.
    pub fn to_rgb565(self) -> Rgb565 {
        Rgb565::new(
            (self.r << 1) | (self.r >> 3),
            (self.g << 2) | (self.g >> 2),
            (self.b << 1) | (self.b >> 3),
        )
    }
}

const fn mix(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u16;
    ((src as u16 * a + dst as u16 * (15 - a)) / 15) as u8
}

impl From<Pen> for Rgb565 {
    fn from(pen: Pen) -> Self {
        pen.to_rgb565()
    }
}

// ── Palette ──────────────────────────────────────────────────────────────

/// Translucent wash over the dial row color for each knob's panel.
pub const KNOB_TINT: Pen = Pen::rgba(0, 2, 3, 2);
/// Highlight half of the corner bevel.
pub const BEVEL_LIGHT: Pen = Pen::rgba(15, 15, 15, 8);
/// Shadow half of the corner bevel.
pub const BEVEL_DARK: Pen = Pen::rgba(0, 2, 3, 8);
/// Drop shadow under the knob body.
pub const KNOB_SHADOW: Pen = Pen::rgba(0, 2, 3, 2);
/// Knob rim.
pub const KNOB_BODY: Pen = Pen::rgb(0, 2, 3);
/// Knob cap.
pub const KNOB_FACE: Pen = Pen::rgb(15, 15, 12);
/// Indicator dot and label text.
pub const INK: Pen = Pen::rgb(0, 2, 3);
/// Border around the active dial.
pub const HIGHLIGHT: Pen = Pen::rgb(0, 15, 0);
/// Envelope preview background.
pub const PREVIEW_BACKGROUND: Pen = Pen::rgb(0, 0, 0);
/// Waveform traces and status text.
pub const TRACE: Pen = Pen::rgb(15, 15, 15);
