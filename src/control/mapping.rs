//! Pulse-width → actuator command derivation.
//!
//! Pure functions only — the control service composes these each tick and
//! the integration tests exercise them without hardware.
//!
//! Mapping conventions (µs → output):
//!
//! | Channel    | Range            | Output              |
//! |------------|------------------|---------------------|
//! | Switch     | > neutral (1500) | on (strict `>`)     |
//! | Brightness | 1000 – 2000      | 0 – 255, clamped    |
//! | Hue        | 1000 – 2000      | 0 – 360 degrees     |

use crate::config::SystemConfig;
use crate::control::colour::hsv_to_rgb;
use crate::sensors::pwm_input::{PulseSnapshot, RcChannel};

/// Ephemeral per-cycle actuator command.  Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightCommand {
    /// On/off indicator state.
    pub on: bool,
    /// Raw mapped brightness (0 – 255) — this is the value the change
    /// report carries; the dead-zone is applied at the actuator.
    pub brightness: u8,
    /// Derived hue angle in degrees (0 – 360).
    pub hue_deg: u16,
    /// Full-saturation, full-value colour for the hue.
    pub rgb: (u8, u8, u8),
}

/// Strict midpoint threshold: exactly neutral resolves to "off".
pub fn switch_on(width_us: u16, neutral_us: u16) -> bool {
    width_us > neutral_us
}

/// Linear map of the valid pulse range onto 0 – 255, clamped.
pub fn brightness_from_pulse(width_us: u16, cfg: &SystemConfig) -> u8 {
    let span = i32::from(cfg.pulse_max_us) - i32::from(cfg.pulse_min_us);
    let offset = i32::from(width_us) - i32::from(cfg.pulse_min_us);
    (offset * 255 / span).clamp(0, 255) as u8
}

/// Force low brightness fully off instead of a dim flickering glow.
pub fn apply_dead_zone(raw: u8, threshold: u8) -> u8 {
    if raw <= threshold { 0 } else { raw }
}

/// Linear map of the valid pulse range onto 0 – 360 degrees.
pub fn hue_from_pulse(width_us: u16, cfg: &SystemConfig) -> u16 {
    let span = i32::from(cfg.pulse_max_us) - i32::from(cfg.pulse_min_us);
    let offset = i32::from(width_us) - i32::from(cfg.pulse_min_us);
    (offset * 360 / span).clamp(0, 360) as u16
}

/// Derive the full per-cycle command from a capture snapshot.
pub fn derive_command(cfg: &SystemConfig, snap: &PulseSnapshot) -> LightCommand {
    let hue_deg = hue_from_pulse(snap.width(RcChannel::Hue), cfg);
    LightCommand {
        on: switch_on(snap.width(RcChannel::Switch), cfg.pulse_neutral_us),
        brightness: brightness_from_pulse(snap.width(RcChannel::Brightness), cfg),
        hue_deg,
        rgb: hsv_to_rgb(f32::from(hue_deg), 1.0, 1.0),
    }
}
