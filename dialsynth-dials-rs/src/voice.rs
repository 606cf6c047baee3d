//! The synthesizer voice record and the host audio engine interface.

use crate::dials::{DialBank, DialId};

/// Parameters for one synthesizer voice, mirroring every dial.
///
/// Always built whole from a [`DialBank`], so a submitted voice never
/// mixes fresh and stale values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Voice {
    /// Frequency in Hz.
    pub frequency: u32,
    /// Amount added to the frequency every 10 ms.
    pub bend: u32,
    /// Attack time in ms.
    pub attack: u32,
    /// Decay time in ms.
    pub decay: u32,
    /// Hold time in ms.
    pub hold: u32,
    /// Release time in ms.
    pub release: u32,
    /// Reverb timing in ms.
    pub reverb: u32,
    /// Sustain level (0..100).
    pub sustain: u32,
    /// Overall volume (0..100).
    pub volume: u32,
    /// Additive noise per sample (0..100).
    pub noise: u32,
    /// Bitcrush level (0..100).
    pub distort: u32,
}

impl Voice {
    /// Copy the current value of every dial into a new record.
    ///
    /// # Examples
    ///
    /// ```
    /// use dialsynth::dials::DialBank;
    /// use dialsynth::voice::Voice;
    ///
    /// let voice = Voice::from_dials(&DialBank::new());
    /// assert_eq!(voice.frequency, 440);
    /// assert_eq!(voice.envelope_duration_ms(), 100 + 50 + 500 + 250);
    /// ```
    pub fn from_dials(bank: &DialBank) -> Self {
        // Dial ranges are non-negative; anything below zero reads as 0.
        let v = |id: DialId| u32::try_from(bank.value(id)).unwrap_or(0);
        Self {
            frequency: v(DialId::Frequency),
            bend: v(DialId::Bend),
            attack: v(DialId::Attack),
            decay: v(DialId::Decay),
            hold: v(DialId::Hold),
            release: v(DialId::Release),
            reverb: v(DialId::Reverb),
            sustain: v(DialId::Sustain),
            volume: v(DialId::Volume),
            noise: v(DialId::Noise),
            distort: v(DialId::Distort),
        }
    }

    /// Total length of the envelope in ms:
    /// `attack + decay + hold + release + reverb`.
    pub fn envelope_duration_ms(&self) -> u32 {
        self.attack
            .saturating_add(self.decay)
            .saturating_add(self.hold)
            .saturating_add(self.release)
            .saturating_add(self.reverb)
    }
}

impl From<&DialBank> for Voice {
    fn from(bank: &DialBank) -> Self {
        Self::from_dials(bank)
    }
}

/// Audio engine provided by the host SDK.
///
/// Synthesis and output are the host's business; the demo only submits
/// parameter records and reads samples back for its waveform panels.
pub trait VoiceEngine {
    /// Start playing `voice`, replacing whatever was playing.
    fn play(&mut self, voice: &Voice);

    /// Most recent sample sent to the audio output.
    fn last_sample(&self) -> u8;

    /// Sample of the current voice `ms` milliseconds into its envelope.
    fn sample_at(&self, ms: u32) -> u8;
}
