//! Waveform panels: the envelope preview, the status readout and the
//! scrolling scope trace.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    text::{Baseline, Text},
};
use heapless::String;

use dialsynth::voice::{Voice, VoiceEngine};

use crate::knob::fill_rect;
use crate::layout::LayoutConfig;
use crate::pen::{PREVIEW_BACKGROUND, TRACE};

// ── Envelope preview ─────────────────────────────────────────────────────

/// Envelope offset (ms) queried for preview point `index`.
///
/// Points are spread evenly across `duration_ms`:
/// `index * duration_ms / points`.
pub fn preview_offset_ms(index: u32, points: u32, duration_ms: u32) -> u32 {
    if points == 0 {
        return 0;
    }
    (u64::from(index) * u64::from(duration_ms) / u64::from(points)) as u32
}

/// Clear the waveform band and plot the whole envelope of `voice`.
///
/// Samples are read from `engine` at `preview_points` fixed offsets
/// across [`Voice::envelope_duration_ms()`]. Sample `s` at point `i` is
/// plotted at `(preview_x + i, preview_baseline - s / 2)`.
pub fn render_envelope_preview<D, E>(
    target: &mut D,
    engine: &E,
    voice: &Voice,
    config: &LayoutConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    E: VoiceEngine + ?Sized,
{
    fill_rect(
        target,
        Point::zero(),
        Size::new(config.display_width, config.preview_height),
        PREVIEW_BACKGROUND,
    )?;

    let duration = voice.envelope_duration_ms();
    let trace = TRACE.to_rgb565();
    let points = (0..config.preview_points).map(|i| {
        let sample = engine.sample_at(preview_offset_ms(i, config.preview_points, duration));
        Pixel(
            Point::new(
                config.preview_x + i as i32,
                config.preview_baseline - i32::from(sample / 2),
            ),
            trace,
        )
    });
    target.draw_iter(points)
}

// ── Status readout ───────────────────────────────────────────────────────

/// Draw the `frequency:` and `volume:` readout lines.
pub fn render_status<D>(target: &mut D, voice: &Voice, config: &LayoutConfig) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(&FONT_6X10, TRACE.to_rgb565());
    let lines = [("frequency", voice.frequency), ("volume", voice.volume)];

    for (row, (label, value)) in lines.iter().enumerate() {
        let mut buf: String<24> = String::new();
        let _ = write!(buf, "{}:  {}", label, value);
        let origin = config.status_origin + Point::new(0, row as i32 * config.status_line_height);
        Text::with_baseline(buf.as_str(), origin, style, Baseline::Top).draw(target)?;
    }

    Ok(())
}

// ── Scope ────────────────────────────────────────────────────────────────

/// Scrolling scope state: the frame counter that positions the next
/// plotted sample.
///
/// The counter only ever increases (wrapping at `u32::MAX`); the plot
/// position is that counter scaled by `scope_step` and reduced modulo
/// the display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScopeTrace {
    draw_tick: u32,
}

impl ScopeTrace {
    /// Start a trace at the left edge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume the trace from an existing counter value.
    pub fn with_tick(draw_tick: u32) -> Self {
        Self { draw_tick }
    }

    /// Frames plotted so far, wrapping at `u32::MAX`.
    pub fn draw_tick(&self) -> u32 {
        self.draw_tick
    }

    /// X coordinate of the next plotted sample.
    pub fn x(&self, config: &LayoutConfig) -> i32 {
        let width = u64::from(config.display_width.max(1));
        ((u64::from(self.draw_tick) * u64::from(config.scope_step)) % width) as i32
    }

    /// Move one step to the right, wrapping the counter.
    pub fn advance(&mut self) {
        self.draw_tick = self.draw_tick.wrapping_add(1);
    }
}

/// Plot `sample` at the trace's current position, then advance it.
///
/// The pixel lands at `(x, scope_baseline - sample / 2)`.
pub fn render_scope<D>(
    target: &mut D,
    trace: &mut ScopeTrace,
    sample: u8,
    config: &LayoutConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let point = Point::new(
        trace.x(config),
        config.scope_baseline - i32::from(sample / 2),
    );
    Pixel(point, TRACE.to_rgb565()).draw(target)?;
    trace.advance();
    Ok(())
}
