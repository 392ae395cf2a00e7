//! Mock actuator and event sink for integration tests.
//!
//! Records every actuator call and emitted event so tests can assert on
//! the full command history without touching real GPIO/PWM registers.

use rclight::app::events::{AppEvent, ChangeReport};
use rclight::app::ports::{ActuatorPort, EventSink};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActuatorCall {
    SetOnOff { on: bool },
    SetBrightness { level: u8 },
    SetRgb { r: u8, g: u8, b: u8 },
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

#[derive(Default)]
pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn onoff(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetOnOff { on } => Some(*on),
            ActuatorCall::AllOff => Some(false),
            _ => None,
        })
    }

    pub fn brightness(&self) -> Option<u8> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetBrightness { level } => Some(*level),
            ActuatorCall::AllOff => Some(0),
            _ => None,
        })
    }

    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetRgb { r, g, b } => Some((*r, *g, *b)),
            ActuatorCall::AllOff => Some((0, 0, 0)),
            _ => None,
        })
    }
}

impl ActuatorPort for MockHardware {
    fn set_onoff(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetOnOff { on });
    }

    fn set_brightness(&mut self, level: u8) {
        self.calls.push(ActuatorCall::SetBrightness { level });
    }

    fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.calls.push(ActuatorCall::SetRgb { r, g, b });
    }

    fn all_off(&mut self) {
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── MockSink ──────────────────────────────────────────────────

#[derive(Default)]
pub struct MockSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<ChangeReport> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Change(r) => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for MockSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
