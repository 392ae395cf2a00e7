//! Brightness-controlled LED driver.
//!
//! One LEDC PWM channel, 0 – 255 duty.  The dead-zone policy (low
//! levels forced fully off) is applied upstream by the control cycle;
//! this driver is a dumb actuator.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real LEDC channel via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct BrightnessLed {
    level: u8,
}

impl BrightnessLed {
    pub fn new() -> Self {
        Self { level: 0 }
    }

    pub fn set(&mut self, level: u8) {
        hw_init::ledc_set(hw_init::LEDC_CH_BRIGHT, level);
        self.level = level;
    }

    pub fn off(&mut self) {
        self.set(0);
    }

    pub fn current_level(&self) -> u8 {
        self.level
    }
}
