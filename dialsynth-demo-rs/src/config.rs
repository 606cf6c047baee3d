//! Demo configuration.

use dialsynth_display_rs::LayoutConfig;

/// Configuration for the demo and its frame loop.
///
/// [`DemoConfig::default()`] runs at 50 Hz with the default 240×240
/// layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Frames per second driven by the frame loop. Default: 50.
    pub frame_rate_hz: u32,
    /// Screen geometry.
    pub layout: LayoutConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frame_rate_hz: 50,
            layout: LayoutConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Convert the configured frame rate to a period in milliseconds.
    ///
    /// Formula: `1000 / frame_rate_hz`, with a rate of 0 treated as 1 Hz.
    pub fn frame_period_ms(&self) -> u64 {
        1000 / u64::from(self.frame_rate_hz.max(1))
    }
}
