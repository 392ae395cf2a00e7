//! The per-tick control cycle.
//!
//! One iteration, in order: take a consistent capture snapshot (done by
//! the caller), derive the actuator command, apply it through the
//! [`ActuatorPort`], and emit a change report if any channel published a
//! new width since the previous cycle.
//!
//! Stateless across iterations except for the externally-owned capture
//! bank — the service holds only its configuration.

use crate::config::SystemConfig;
use crate::control::mapping::{apply_dead_zone, derive_command, LightCommand};
use crate::sensors::pwm_input::{PulseSnapshot, RcChannel};

use super::events::{AppEvent, ChangeReport};
use super::ports::{ActuatorPort, EventSink};

pub struct LightService {
    cfg: SystemConfig,
}

impl LightService {
    pub fn new(cfg: SystemConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &SystemConfig {
        &self.cfg
    }

    /// Run one control cycle against the given snapshot.
    ///
    /// Returns the derived command so callers (and tests) can inspect
    /// what was actuated this cycle.
    pub fn tick<A, S>(&self, snap: &PulseSnapshot, hw: &mut A, sink: &mut S) -> LightCommand
    where
        A: ActuatorPort,
        S: EventSink,
    {
        let cmd = derive_command(&self.cfg, snap);

        hw.set_onoff(cmd.on);
        hw.set_brightness(apply_dead_zone(cmd.brightness, self.cfg.brightness_dead_zone));
        let (r, g, b) = cmd.rgb;
        hw.set_rgb(r, g, b);

        if snap.any_changed() {
            sink.emit(&AppEvent::Change(ChangeReport {
                ch8_us: snap.width(RcChannel::Switch),
                ch6_us: snap.width(RcChannel::Brightness),
                ch7_us: snap.width(RcChannel::Hue),
                hue_deg: cmd.hue_deg,
                brightness: cmd.brightness,
            }));
        }

        cmd
    }
}
