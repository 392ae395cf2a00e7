//! Control-cycle behaviour: snapshot in, actuator commands + reports out.

use rclight::app::LightService;
use rclight::config::SystemConfig;
use rclight::sensors::pwm_input::PulseSnapshot;

use crate::mock_hw::{ActuatorCall, MockHardware, MockSink};

fn snap(switch: u16, brightness: u16, hue: u16, changed: [bool; 3]) -> PulseSnapshot {
    PulseSnapshot {
        width_us: [switch, brightness, hue],
        changed,
    }
}

fn service() -> LightService {
    LightService::new(SystemConfig::default())
}

// ── Actuation ─────────────────────────────────────────────────

#[test]
fn tick_applies_all_three_commands() {
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    service().tick(&snap(1600, 2000, 1000, [false; 3]), &mut hw, &mut sink);

    assert_eq!(hw.onoff(), Some(true));
    assert_eq!(hw.brightness(), Some(255));
    assert_eq!(hw.rgb(), Some((255, 0, 0))); // hue 0 = red
    assert_eq!(hw.calls.len(), 3); // one call per actuator, every cycle
}

#[test]
fn switch_midpoint_resolves_off() {
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    service().tick(&snap(1500, 1500, 1500, [false; 3]), &mut hw, &mut sink);
    assert_eq!(hw.onoff(), Some(false));

    service().tick(&snap(1400, 1500, 1500, [false; 3]), &mut hw, &mut sink);
    assert_eq!(hw.onoff(), Some(false));

    service().tick(&snap(1600, 1500, 1500, [false; 3]), &mut hw, &mut sink);
    assert_eq!(hw.onoff(), Some(true));
}

#[test]
fn low_brightness_is_forced_fully_off() {
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    // Width 1078 maps to raw 19 — inside the dead-zone.
    let cmd = service().tick(&snap(1500, 1078, 1500, [false; 3]), &mut hw, &mut sink);
    assert_eq!(cmd.brightness, 19);
    assert_eq!(hw.brightness(), Some(0));

    // Width 1083 maps to raw 21 — just past the dead-zone.
    let cmd = service().tick(&snap(1500, 1083, 1500, [false; 3]), &mut hw, &mut sink);
    assert_eq!(cmd.brightness, 21);
    assert_eq!(hw.brightness(), Some(21));
}

#[test]
fn midpoint_brightness_is_not_forced_off() {
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    service().tick(&snap(1500, 1500, 1500, [false; 3]), &mut hw, &mut sink);
    assert_eq!(hw.brightness(), Some(127));
}

#[test]
fn hue_sweep_drives_primary_colours() {
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();
    let svc = service();

    // 1000 µs → 0° (red); 1333 µs → ~120° (green); 1667 µs → ~240° (blue).
    svc.tick(&snap(1500, 1500, 1000, [false; 3]), &mut hw, &mut sink);
    assert_eq!(hw.rgb(), Some((255, 0, 0)));

    svc.tick(&snap(1500, 1500, 1334, [false; 3]), &mut hw, &mut sink);
    let (r, g, b) = hw.rgb().unwrap();
    assert!(g > 250 && r < 5 && b == 0, "expected ~green, got ({r},{g},{b})");

    svc.tick(&snap(1500, 1500, 1667, [false; 3]), &mut hw, &mut sink);
    let (r, g, b) = hw.rgb().unwrap();
    assert!(b > 250 && r == 0 && g < 5, "expected ~blue, got ({r},{g},{b})");
}

// ── Change reporting ──────────────────────────────────────────

#[test]
fn quiet_cycle_emits_no_report() {
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    service().tick(&snap(1600, 1200, 1800, [false; 3]), &mut hw, &mut sink);

    assert!(sink.events.is_empty());
}

#[test]
fn single_changed_flag_emits_one_report_with_all_widths() {
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    // Only the hue channel changed, but the report carries all three
    // current widths.
    service().tick(&snap(1600, 1200, 1800, [false, false, true]), &mut hw, &mut sink);

    let reports = sink.reports();
    assert_eq!(reports.len(), 1);
    let r = reports[0];
    assert_eq!(r.ch8_us, 1600);
    assert_eq!(r.ch6_us, 1200);
    assert_eq!(r.ch7_us, 1800);
    assert_eq!(r.hue_deg, 288);
    assert_eq!(r.brightness, 51);
}

#[test]
fn report_carries_raw_brightness_before_dead_zone() {
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    // Raw brightness 0 is reported even though the actuator is off anyway.
    service().tick(&snap(1500, 1000, 1500, [false, true, false]), &mut hw, &mut sink);

    let reports = sink.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].brightness, 0);
    assert_eq!(hw.brightness(), Some(0));
}

#[test]
fn report_line_matches_serial_format() {
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    service().tick(&snap(1600, 2000, 1000, [true, true, true]), &mut hw, &mut sink);

    let reports = sink.reports();
    assert_eq!(
        reports[0].to_string(),
        "CH8=1600 CH6=2000 CH7=1000 Hue=0 BrightLED=255"
    );
}

#[test]
fn every_cycle_reactuates_even_without_changes() {
    // The outputs are re-applied each tick regardless of change flags —
    // the loop is stateless across iterations.
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();
    let svc = service();

    svc.tick(&snap(1600, 1500, 1500, [false; 3]), &mut hw, &mut sink);
    svc.tick(&snap(1600, 1500, 1500, [false; 3]), &mut hw, &mut sink);

    let onoff_calls = hw
        .calls
        .iter()
        .filter(|c| matches!(c, ActuatorCall::SetOnOff { .. }))
        .count();
    assert_eq!(onoff_calls, 2);
    assert!(sink.events.is_empty());
}
