//! System configuration parameters
//!
//! All tunable parameters for the RCLight controller.  Values are fixed at
//! build time; the struct exists (rather than file-scope constants) so that
//! every component can be constructed against simulated values in tests.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Pulse capture ---
    /// Shortest plausible receiver pulse (microseconds).
    pub pulse_min_us: u16,
    /// Longest plausible receiver pulse (microseconds).
    pub pulse_max_us: u16,
    /// Centre-stick pulse width, used for invalid or absent readings.
    pub pulse_neutral_us: u16,

    // --- Actuation ---
    /// Brightness levels at or below this are forced fully off
    /// (avoids a faint flicker instead of true off).
    pub brightness_dead_zone: u8,
    /// Invert the RGB PWM outputs (common-anode wiring drives active-low).
    pub rgb_active_low: bool,

    // --- Timing ---
    /// Control loop interval (milliseconds).
    pub control_loop_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Pulse capture — standard RC servo convention
            pulse_min_us: 1000,
            pulse_max_us: 2000,
            pulse_neutral_us: 1500,

            // Actuation
            brightness_dead_zone: 20,
            rgb_active_low: true,

            // Timing — matches the ~20 ms receiver frame period
            control_loop_interval_ms: 20,
        }
    }
}

impl SystemConfig {
    /// Validity range and neutral default for the capture unit.
    pub fn pulse_limits(&self) -> crate::sensors::pwm_input::PulseLimits {
        crate::sensors::pwm_input::PulseLimits {
            min_us: self.pulse_min_us,
            max_us: self.pulse_max_us,
            neutral_us: self.pulse_neutral_us,
        }
    }
}
