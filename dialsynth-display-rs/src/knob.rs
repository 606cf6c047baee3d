//! Rotary knob rendering.
//!
//! Each dial is drawn into a square cell:
//!
//! ```text
//! ┌────────────────────┐
//! │ .                . │  ← bevel dots
//! │       ╭────╮       │
//! │      │  ●   │      │  ← knob body, cap and indicator dot
//! │       ╰────╯       │
//! │      frequency     │  ← name_y
//! │        440hz       │  ← value_y
//! │ .                . │
//! └────────────────────┘
//! ```

use core::f32::consts::TAU;
use core::fmt::Write;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use heapless::String;

use dialsynth::dials::{Dial, DialBank};

use crate::layout::LayoutConfig;
use crate::pen::{
    Pen, BEVEL_DARK, BEVEL_LIGHT, HIGHLIGHT, INK, KNOB_BODY, KNOB_FACE, KNOB_SHADOW, KNOB_TINT,
};

/// Offset of the indicator dot from the knob centre.
///
/// The dot turns clockwise from straight down (`fraction = 0`) through a
/// full revolution at `fraction = 1`: `θ = 2π · fraction`, offset
/// `(-sin θ · orbit, cos θ · orbit)`, truncated toward zero.
///
/// # Examples
///
/// ```
/// use dialsynth_display_rs::knob::indicator_offset;
/// use embedded_graphics::prelude::Point;
///
/// assert_eq!(indicator_offset(0.0, 10.0), Point::new(0, 10));
/// assert_eq!(indicator_offset(0.25, 10.0), Point::new(-10, 0));
/// ```
pub fn indicator_offset(fraction: f32, orbit: f32) -> Point {
    let theta = fraction * TAU;
    Point::new(
        (-libm::sinf(theta) * orbit) as i32,
        (libm::cosf(theta) * orbit) as i32,
    )
}

/// Render one dial into the cell whose top-left corner is `origin`.
///
/// `backdrop` is the opaque color already under the cell; translucent
/// layers are composited over it.
pub fn render_dial<D>(
    target: &mut D,
    dial: &Dial,
    origin: Point,
    backdrop: Pen,
    active: bool,
    config: &LayoutConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let size = config.dial_size;
    let far = size as i32;
    let panel = KNOB_TINT.over(backdrop);

    // ── Panel ────────────────────────────────────────────────────────
    fill_rect(target, origin, Size::new(size, size), panel)?;
    stroke_rect(target, origin, Size::new(size, size), KNOB_TINT.over(panel))?;

    // ── Bevel corners ────────────────────────────────────────────────
    for (inset, pen) in [(4, BEVEL_LIGHT), (3, BEVEL_DARK)] {
        let shade = pen.over(panel);
        for corner in [
            Point::new(inset, inset),
            Point::new(far - inset, inset),
            Point::new(inset, far - inset),
            Point::new(far - inset, far - inset),
        ] {
            fill_circle(target, origin + corner, 1, shade)?;
        }
    }

    // ── Knob ─────────────────────────────────────────────────────────
    let centre = origin + config.knob_centre;
    let shadow = Point::new(config.shadow_offset, config.shadow_offset);
    fill_circle(target, centre + shadow, config.knob_radius, KNOB_SHADOW.over(panel))?;
    fill_circle(target, centre, config.knob_radius, KNOB_BODY)?;
    fill_circle(target, centre, config.face_radius, KNOB_FACE)?;

    let dot = centre + indicator_offset(dial.fraction(), config.indicator_orbit);
    fill_circle(target, dot, config.indicator_radius, INK)?;

    // ── Labels ───────────────────────────────────────────────────────
    let ink = MonoTextStyle::new(&FONT_6X10, INK.to_rgb565());
    let centred = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    let label_x = origin.x + config.knob_centre.x;

    Text::with_text_style(
        dial.name(),
        Point::new(label_x, origin.y + config.name_y),
        ink,
        centred,
    )
    .draw(target)?;

    let mut label: String<16> = String::new();
    // Longest label is "8000hz"; overflow would only truncate.
    let _ = write!(label, "{}{}", dial.value(), dial.unit());
    Text::with_text_style(
        label.as_str(),
        Point::new(label_x, origin.y + config.value_y),
        ink,
        centred,
    )
    .draw(target)?;

    // ── Selection ────────────────────────────────────────────────────
    if active {
        stroke_rect(target, origin, Size::new(size, size), HIGHLIGHT)?;
        stroke_rect(
            target,
            origin + Point::new(1, 1),
            Size::new(size.saturating_sub(2), size.saturating_sub(2)),
            HIGHLIGHT,
        )?;
    }

    Ok(())
}

/// Render every dial row: the row background first, then its dials.
///
/// # Layout
///
/// ```text
/// ┌──────────┬──────────┬──────────┬──────────┐
/// │frequency │  volume  │ sustain  │ distort  │  row 0
/// ├──────────┼──────────┼──────────┼──────────┤
/// │  attack  │  decay   │   hold   │ release  │  row 1
/// ├──────────┼──────────┼──────────┼──────────┘
/// │  reverb  │   bend   │  noise   │             row 2
/// └──────────┴──────────┴──────────┘
/// ```
pub fn render_dial_panels<D>(
    target: &mut D,
    bank: &DialBank,
    config: &LayoutConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut dials = bank.iter().enumerate().peekable();

    for row in 0..config.row_count() {
        let row_color = config.row_color(row);
        fill_rect(
            target,
            Point::new(0, config.row_top(row)),
            Size::new(config.display_width, config.dial_size),
            row_color,
        )?;

        while let Some((index, (id, dial))) = dials.next_if(|(i, _)| config.row_of(*i) == row) {
            render_dial(
                target,
                dial,
                config.dial_origin(index),
                row_color,
                bank.is_active(id),
                config,
            )?;
        }
    }

    Ok(())
}

// ── Primitives ───────────────────────────────────────────────────────────

pub(crate) fn fill_rect<D>(target: &mut D, top_left: Point, size: Size, pen: Pen) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(top_left, size)
        .into_styled(PrimitiveStyle::with_fill(pen.to_rgb565()))
        .draw(target)
}

fn stroke_rect<D>(target: &mut D, top_left: Point, size: Size, pen: Pen) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(pen.to_rgb565())
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    Rectangle::new(top_left, size).into_styled(style).draw(target)
}

fn fill_circle<D>(target: &mut D, centre: Point, radius: u32, pen: Pen) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(centre, radius * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(pen.to_rgb565()))
        .draw(target)
}
