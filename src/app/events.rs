//! Outbound application events.
//!
//! The [`LightService`](super::service::LightService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  The adapter on the
//! other side decides what to do with them — in production, one serial
//! log line each.

use core::fmt;

/// Structured events emitted by the control cycle.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The controller has started and entered the control loop.
    Started,

    /// At least one receiver channel published a new width this cycle.
    Change(ChangeReport),
}

/// One per change event: the three raw widths plus the derived hue and
/// brightness.  Always carries all three current widths, not just the
/// channel that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeReport {
    /// CH8 width (on/off switch), µs.
    pub ch8_us: u16,
    /// CH6 width (brightness knob), µs.
    pub ch6_us: u16,
    /// CH7 width (colour knob), µs.
    pub ch7_us: u16,
    /// Derived hue angle, degrees.
    pub hue_deg: u16,
    /// Raw mapped brightness (before the dead-zone is applied).
    pub brightness: u8,
}

impl fmt::Display for ChangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CH8={} CH6={} CH7={} Hue={} BrightLED={}",
            self.ch8_us, self.ch6_us, self.ch7_us, self.hue_deg, self.brightness
        )
    }
}
