//! Hardware adapter — [`ActuatorPort`] over the three LED drivers.
//!
//! The control cycle talks to this adapter through the port trait; the
//! adapter owns the drivers and forwards commands.  Integration tests
//! use a call-recording mock instead.

use crate::app::ports::ActuatorPort;
use crate::drivers::brightness_led::BrightnessLed;
use crate::drivers::onoff_led::OnOffLed;
use crate::drivers::rgb_led::RgbLed;

pub struct HardwareAdapter {
    onoff: OnOffLed,
    brightness: BrightnessLed,
    rgb: RgbLed,
}

impl HardwareAdapter {
    pub fn new(onoff: OnOffLed, brightness: BrightnessLed, rgb: RgbLed) -> Self {
        Self {
            onoff,
            brightness,
            rgb,
        }
    }

    /// Current logical RGB colour (for diagnostics).
    pub fn rgb_colour(&self) -> (u8, u8, u8) {
        self.rgb.current_colour()
    }
}

impl ActuatorPort for HardwareAdapter {
    fn set_onoff(&mut self, on: bool) {
        self.onoff.set(on);
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness.set(level);
    }

    fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.rgb.set_colour(r, g, b);
    }

    fn all_off(&mut self) {
        self.onoff.set(false);
        self.brightness.off();
        self.rgb.off();
    }
}
