//! Whole-frame composition.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use dialsynth::dials::DialBank;
use dialsynth::voice::{Voice, VoiceEngine};

use crate::knob::render_dial_panels;
use crate::layout::LayoutConfig;
use crate::waveform::{render_envelope_preview, render_scope, render_status, ScopeTrace};

/// Render one complete frame.
///
/// Draw order, back to front:
/// 1. dial rows ([`render_dial_panels`]);
/// 2. envelope preview band ([`render_envelope_preview`]);
/// 3. status readout ([`render_status`]);
/// 4. one scope sample from [`VoiceEngine::last_sample()`], which also
///    advances `scope`.
///
/// `voice` is the record most recently submitted to `engine`.
pub fn render_frame<D, E>(
    target: &mut D,
    bank: &DialBank,
    voice: &Voice,
    engine: &E,
    scope: &mut ScopeTrace,
    config: &LayoutConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    E: VoiceEngine + ?Sized,
{
    render_dial_panels(target, bank, config)?;
    render_envelope_preview(target, engine, voice, config)?;
    render_status(target, voice, config)?;
    render_scope(target, scope, engine.last_sample(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pen::{HIGHLIGHT, PREVIEW_BACKGROUND, TRACE};
    use crate::test_support::Framebuffer;
    use dialsynth::dials::DialId;

    struct FlatEngine;

    impl VoiceEngine for FlatEngine {
        fn play(&mut self, _voice: &Voice) {}

        fn last_sample(&self) -> u8 {
            20
        }

        fn sample_at(&self, _ms: u32) -> u8 {
            0
        }
    }

    #[test]
    fn frame_composes_every_panel() {
        let mut bank = DialBank::new();
        bank.set_active(DialId::Hold.index()).unwrap();
        let voice = Voice::from_dials(&bank);
        let config = LayoutConfig::default();
        let mut scope = ScopeTrace::new();
        let mut fb = Framebuffer::new(240, 240);

        render_frame(&mut fb, &bank, &voice, &FlatEngine, &mut scope, &config).unwrap();

        // Preview band background and flat trace on the baseline.
        assert!(fb.is(0, 0, PREVIEW_BACKGROUND));
        assert!(fb.is(5, 55, TRACE));
        // Hold is dial 6: column 2 of row 1.
        assert!(fb.is(120, 120, HIGHLIGHT));
        // Scope sample drawn on top of the dial rows: 180 - 20 / 2 = 170.
        assert!(fb.is(0, 170, TRACE));
        assert_eq!(scope.draw_tick(), 1);
    }

    #[test]
    fn consecutive_frames_scroll_the_scope() {
        let bank = DialBank::new();
        let voice = Voice::from_dials(&bank);
        let config = LayoutConfig::default();
        let mut scope = ScopeTrace::new();
        let mut fb = Framebuffer::new(240, 240);

        for _ in 0..5 {
            render_frame(&mut fb, &bank, &voice, &FlatEngine, &mut scope, &config).unwrap();
        }

        assert_eq!(scope.draw_tick(), 5);
        // Dial rows are repainted each frame, so only the latest sample remains.
        assert!(fb.is(8, 170, TRACE));
        assert!(!fb.is(0, 170, TRACE));
    }
}
