//! Input capture subsystem.
//!
//! One module: the three-channel RC receiver PWM decoder.  Each channel is
//! fed by a GPIO edge ISR and read by the control loop through an atomic
//! multi-channel snapshot.

pub mod pwm_input;

pub use pwm_input::{PulseChannel, PulseLimits, PulseSnapshot, RcChannel};
