//! The demo context driven by the host's frame loop.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use dialsynth::control;
use dialsynth::dials::DialBank;
use dialsynth::input::Buttons;
use dialsynth::voice::{Voice, VoiceEngine};
use dialsynth_display_rs::{render_frame, ScopeTrace};

use crate::config::DemoConfig;

/// Everything the demo owns between frames.
///
/// The host run loop calls [`update()`](Self::update) then
/// [`draw()`](Self::draw) once per tick. Neither blocks.
///
/// # Examples
///
/// ```
/// use dialsynth::dials::DialId;
/// use dialsynth_demo::{DemoConfig, DialsDemo};
///
/// let demo = DialsDemo::init(DemoConfig::default());
/// assert_eq!(demo.bank().active_id(), DialId::Frequency);
/// assert_eq!(demo.voice().frequency, 440);
/// ```
pub struct DialsDemo {
    bank: DialBank,
    voice: Voice,
    scope: ScopeTrace,
    config: DemoConfig,
}

impl DialsDemo {
    /// Set every dial to its default and mirror them into the voice
    /// record. Nothing is played until a dial changes.
    pub fn init(config: DemoConfig) -> Self {
        let bank = DialBank::new();
        let voice = Voice::from_dials(&bank);

        #[cfg(feature = "defmt")]
        defmt::info!("dials demo initialised: {}", voice);

        Self {
            bank,
            voice,
            scope: ScopeTrace::new(),
            config,
        }
    }

    /// Process one frame of input.
    ///
    /// When a dial value changes, the whole voice is resubmitted to
    /// `engine` and returned.
    pub fn update<B, E>(&mut self, buttons: &B, engine: &mut E) -> Option<Voice>
    where
        B: Buttons + ?Sized,
        E: VoiceEngine + ?Sized,
    {
        let submitted = control::update(&mut self.bank, buttons, engine);
        if let Some(voice) = submitted {
            self.voice = voice;
        }
        submitted
    }

    /// Render one frame and advance the scope.
    pub fn draw<D, E>(&mut self, target: &mut D, engine: &E) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
        E: VoiceEngine + ?Sized,
    {
        render_frame(
            target,
            &self.bank,
            &self.voice,
            engine,
            &mut self.scope,
            &self.config.layout,
        )
    }

    /// Dial state.
    pub fn bank(&self) -> &DialBank {
        &self.bank
    }

    /// Voice most recently submitted (or the startup voice).
    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    /// Scrolling scope position.
    pub fn scope(&self) -> &ScopeTrace {
        &self.scope
    }

    /// Configuration passed to `init`.
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }
}

impl Default for DialsDemo {
    fn default() -> Self {
        Self::init(DemoConfig::default())
    }
}
