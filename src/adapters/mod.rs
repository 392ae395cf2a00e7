//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements    | Connects to            |
//! |------------|---------------|------------------------|
//! | `hardware` | ActuatorPort  | ESP32 GPIO, LEDC PWM   |
//! | `log_sink` | EventSink     | Serial log output      |

pub mod hardware;
pub mod log_sink;
