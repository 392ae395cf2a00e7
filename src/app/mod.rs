//! Application core: port traits, outbound events, and the control cycle.

pub mod events;
pub mod ports;
pub mod service;

pub use events::{AppEvent, ChangeReport};
pub use ports::{ActuatorPort, EventSink};
pub use service::LightService;
