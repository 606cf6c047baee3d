//! Screen geometry for the dial demo.
//!
//! [`LayoutConfig`] is the single source of layout geometry; renderers
//! read every position and size from it.

use embedded_graphics::prelude::*;

use dialsynth::dials::N_DIALS;

use crate::pen::Pen;

// ── LayoutConfig ─────────────────────────────────────────────────────────

/// Configuration for the screen layout.
///
/// Every pixel offset and size the renderers use is a field of this
/// struct. The drawing code reads positions from the config it is handed
/// and hard-codes none, so a different screen only needs a different
/// `LayoutConfig` value.
///
/// [`LayoutConfig::default()`] reproduces the stock 240×240 screen:
/// a 60 px waveform band on top and three rows of 60 × 60 px dials.
///
/// Knob offsets (`knob_centre`, `name_y`, `value_y`) are relative to the
/// top-left corner of each dial cell.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Total display width in pixels. Default: 240.
    pub display_width: u32,
    /// Total display height in pixels. Default: 240.
    pub display_height: u32,

    // ── Dial grid ────────────────────────────────────────────────────
    /// Side length of each square dial cell. Default: 60.
    pub dial_size: u32,
    /// Dials per row. Default: 4.
    pub dials_per_row: u32,
    /// Y coordinate of the first dial row. Default: 60.
    pub dials_top: i32,
    /// Background color of each dial row; rows past the end reuse the
    /// colors cyclically. Default: yellow, cyan, magenta.
    pub row_colors: [Pen; 3],

    // ── Knob ─────────────────────────────────────────────────────────
    /// Knob centre within the cell. Default: (30, 20).
    pub knob_centre: Point,
    /// Radius of the knob body. Default: 18.
    pub knob_radius: u32,
    /// Radius of the knob cap. Default: 14.
    pub face_radius: u32,
    /// Offset of the drop shadow, applied to both axes. Default: 3.
    pub shadow_offset: i32,
    /// Distance of the indicator dot from the knob centre. Default: 10.
    pub indicator_orbit: f32,
    /// Radius of the indicator dot. Default: 3.
    pub indicator_radius: u32,
    /// Y offset of the dial name text. Default: 40.
    pub name_y: i32,
    /// Y offset of the value + unit text. Default: 50.
    pub value_y: i32,

    // ── Envelope preview ─────────────────────────────────────────────
    /// Height of the waveform band at the top of the screen. Default: 60.
    pub preview_height: u32,
    /// Number of envelope samples plotted. Default: 230.
    pub preview_points: u32,
    /// X coordinate of the first plotted sample. Default: 5.
    pub preview_x: i32,
    /// Y coordinate of a zero sample. Default: 55.
    pub preview_baseline: i32,

    // ── Status readout ───────────────────────────────────────────────
    /// Top-left corner of the first status line. Default: (10, 20).
    pub status_origin: Point,
    /// Vertical distance between status lines. Default: 10.
    pub status_line_height: i32,

    // ── Scope ────────────────────────────────────────────────────────
    /// Y coordinate of a zero sample on the scrolling scope. Default: 180.
    pub scope_baseline: i32,
    /// Horizontal pixels advanced per frame. Default: 2.
    pub scope_step: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            display_width: 240,
            display_height: 240,
            dial_size: 60,
            dials_per_row: 4,
            dials_top: 60,
            row_colors: [
                Pen::rgb(12, 12, 2),
                Pen::rgb(2, 12, 12),
                Pen::rgb(12, 2, 12),
            ],
            knob_centre: Point::new(30, 20),
            knob_radius: 18,
            face_radius: 14,
            shadow_offset: 3,
            indicator_orbit: 10.0,
            indicator_radius: 3,
            name_y: 40,
            value_y: 50,
            preview_height: 60,
            preview_points: 230,
            preview_x: 5,
            preview_baseline: 55,
            status_origin: Point::new(10, 20),
            status_line_height: 10,
            scope_baseline: 180,
            scope_step: 2,
        }
    }
}

impl LayoutConfig {
    /// Number of dial rows needed for every dial.
    pub fn row_count(&self) -> u32 {
        let per_row = self.dials_per_row.max(1);
        (N_DIALS as u32).div_ceil(per_row)
    }

    /// Top-left corner of the cell for dial `index`.
    ///
    /// Dials fill rows left to right, top to bottom.
    pub fn dial_origin(&self, index: usize) -> Point {
        let per_row = self.dials_per_row.max(1) as usize;
        let col = (index % per_row) as i32;
        let row = (index / per_row) as i32;
        let size = self.dial_size as i32;
        Point::new(col * size, self.dials_top + row * size)
    }

    /// Y coordinate of the top of dial row `row`.
    pub fn row_top(&self, row: u32) -> i32 {
        self.dials_top + (row * self.dial_size) as i32
    }

    /// Background color of dial row `row`.
    pub fn row_color(&self, row: u32) -> Pen {
        self.row_colors[row as usize % self.row_colors.len()]
    }

    /// Dial row containing dial `index`.
    pub fn row_of(&self, index: usize) -> u32 {
        (index / self.dials_per_row.max(1) as usize) as u32
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
