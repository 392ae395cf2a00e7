//! Actuator drivers and hardware initialisation.

pub mod brightness_led;
pub mod hw_init;
pub mod onoff_led;
pub mod rgb_led;
