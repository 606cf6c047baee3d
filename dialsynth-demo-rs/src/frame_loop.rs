//! Periodic frame loop for hosts that run on Embassy.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use dialsynth::input::Buttons;
use dialsynth::voice::VoiceEngine;

use crate::demo::DialsDemo;

/// Drive `demo` forever: `update` then `draw`, once per frame period.
///
/// `frame_loop` is generic over the host's button, voice and screen
/// types, so it cannot carry `#[embassy_executor::task]` itself. Spawn
/// it from a task with the host's concrete types filled in:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn demo_task(
///     demo: DialsDemo,
///     buttons: &'static HostButtons,
///     engine: &'static mut HostVoice,
///     screen: &'static mut HostScreen,
/// ) {
///     frame_loop(demo, buttons, engine, screen).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Wait for the next tick at `config.frame_rate_hz`.
/// 2. [`DialsDemo::update`] reads `buttons` and resubmits the voice to
///    `engine` if any dial changed.
/// 3. [`DialsDemo::draw`] renders the frame into `display`.
///
/// # Errors
///
/// A render failure is logged and the loop continues with the next
/// frame. The host presents the frame buffer; this loop never flushes.
pub async fn frame_loop<B, E, D>(mut demo: DialsDemo, buttons: &B, engine: &mut E, display: &mut D)
where
    B: Buttons + ?Sized,
    E: VoiceEngine + ?Sized,
    D: DrawTarget<Color = Rgb565>,
{
    let period = embassy_time::Duration::from_millis(demo.config().frame_period_ms());
    let mut ticker = embassy_time::Ticker::every(period);

    #[cfg(feature = "defmt")]
    defmt::info!("frame loop started");

    loop {
        ticker.next().await;

        demo.update(buttons, engine);

        if let Err(_e) = demo.draw(display, &*engine) {
            #[cfg(feature = "defmt")]
            defmt::error!("Render failed");
        }
    }
}
