//! RGB LED driver.
//!
//! Three LEDC PWM channels (CH1-3) drive a discrete RGB LED.  A
//! common-anode part wires the LED between VCC and the pin, so the PWM
//! duty must be inverted (255 − v) — that inversion is a property of the
//! board wiring, configured at construction, never of the colour
//! transform upstream.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives three LEDC PWM channels via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct RgbLed {
    /// Invert duty for common-anode (active-low) wiring.
    active_low: bool,
    /// Logical colour, before inversion.
    current: (u8, u8, u8),
}

impl RgbLed {
    pub fn new(active_low: bool) -> Self {
        Self {
            active_low,
            current: (0, 0, 0),
        }
    }

    pub fn set_colour(&mut self, r: u8, g: u8, b: u8) {
        hw_init::ledc_set(hw_init::LEDC_CH_LED_R, self.duty(r));
        hw_init::ledc_set(hw_init::LEDC_CH_LED_G, self.duty(g));
        hw_init::ledc_set(hw_init::LEDC_CH_LED_B, self.duty(b));
        self.current = (r, g, b);
    }

    pub fn off(&mut self) {
        self.set_colour(0, 0, 0);
    }

    /// Logical colour (wiring inversion not applied).
    pub fn current_colour(&self) -> (u8, u8, u8) {
        self.current
    }

    fn duty(&self, v: u8) -> u8 {
        if self.active_low { 255 - v } else { v }
    }
}
