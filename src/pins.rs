//! GPIO / peripheral pin assignments for the RCLight main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// RC receiver inputs — pulse, interrupt-driven (both edges)
// ---------------------------------------------------------------------------

/// Receiver channel 8 — on/off switch position.
pub const RC_CH8_GPIO: i32 = 10;
/// Receiver channel 6 — brightness knob.
pub const RC_CH6_GPIO: i32 = 11;
/// Receiver channel 7 — colour (hue) knob.
pub const RC_CH7_GPIO: i32 = 12;

// ---------------------------------------------------------------------------
// LED outputs
// ---------------------------------------------------------------------------

/// Digital output: on/off indicator LED. HIGH = on.
pub const LED_ONOFF_GPIO: i32 = 2;
/// LEDC PWM output for the brightness-controlled LED.
pub const LED_BRIGHT_GPIO: i32 = 3;

/// RGB LED — red channel (LEDC PWM).
pub const LED_R_GPIO: i32 = 5;
/// RGB LED — green channel (LEDC PWM).
pub const LED_G_GPIO: i32 = 6;
/// RGB LED — blue channel (LEDC PWM).
pub const LED_B_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for all LED channels (1 kHz — flicker-free).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;
