//! Port traits — the boundary between the control logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LightService (domain)
//! ```
//!
//! Driven adapters (LED drivers, the serial log) implement these traits.
//! The [`LightService`](super::service::LightService) consumes them via
//! generics, so the control cycle never touches hardware directly and the
//! integration tests can substitute call-recording mocks.

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the control cycle commands the three LED outputs.
///
/// All operations are infallible — the LEDs are dumb actuators and the
/// controller has no failure exit; it must keep the lights safely
/// actuated no matter what the receiver sends.
pub trait ActuatorPort {
    /// Drive the on/off indicator (logic-high = on).
    fn set_onoff(&mut self, on: bool);

    /// Drive the brightness LED at the given duty (0 – 255).
    /// The dead-zone has already been applied by the caller.
    fn set_brightness(&mut self, level: u8);

    /// Drive the RGB LED.  Wiring inversion (active-low) is the
    /// implementation's concern, not the caller's.
    fn set_rgb(&mut self, r: u8, g: u8, b: u8);

    /// Kill all outputs — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The control cycle emits structured [`AppEvent`]s through this port.
/// The production adapter writes them to the serial log.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
