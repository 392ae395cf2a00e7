//! RCLight Firmware — Main Entry Point
//!
//! Three receiver channels in, three LED outputs out:
//!
//! ```text
//! ┌──────────────┐   edge ISRs    ┌───────────────┐   snapshot   ┌─────────────┐
//! │ RC receiver  │──────────────▶ │ Capture bank  │────────────▶ │ LightService│
//! │ CH8/CH6/CH7  │  (both edges)  │ (critical     │  (per tick)  │ derive +    │
//! └──────────────┘                │  section)     │              │ actuate +   │
//!                                 └───────────────┘              │ report      │
//!                                                                └──────┬──────┘
//!                                          on/off · brightness · RGB    ▼
//!                                                                ┌─────────────┐
//!                                                                │ LED drivers │
//!                                                                └─────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use rclight::adapters::hardware::HardwareAdapter;
use rclight::adapters::log_sink::LogEventSink;
use rclight::app::ports::{ActuatorPort, EventSink};
use rclight::app::{AppEvent, LightService};
use rclight::config::SystemConfig;
use rclight::drivers::brightness_led::BrightnessLed;
use rclight::drivers::hw_init;
use rclight::drivers::onoff_led::OnOffLed;
use rclight::drivers::rgb_led::RgbLed;
use rclight::sensors::pwm_input;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    info!("RCLight v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (fixed at build time) ────────────────
    let config = SystemConfig::default();

    // ── 3. Capture bank + peripherals ─────────────────────────
    // Limits must be installed before any edge ISR can fire.
    pwm_input::configure(config.pulse_limits());

    let mut hw = HardwareAdapter::new(
        OnOffLed::new(),
        BrightnessLed::new(),
        RgbLed::new(config.rgb_active_low),
    );

    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — force whatever did come
        // up off, then halt.  In production the watchdog resets us.
        log::error!("HAL init failed: {} — outputs off, halting", e);
        hw.all_off();
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Err(e) = hw_init::init_isr_service() {
        // Without edge ISRs every channel stays at neutral; the lights
        // remain safely actuated, so keep running.
        log::error!("ISR service init failed: {} — continuing at neutral", e);
    }

    // ── 4. Control service ────────────────────────────────────
    let mut sink = LogEventSink::new();
    let service = LightService::new(config.clone());

    sink.emit(&AppEvent::Started);

    // ── 5. Control loop ───────────────────────────────────────
    // Fixed cadence; the sleep is the loop's only blocking point.
    // On ESP-IDF, std::thread::sleep delegates to vTaskDelay, so the
    // idle task (and the edge ISRs) run freely between ticks.
    let tick = std::time::Duration::from_millis(u64::from(config.control_loop_interval_ms));

    loop {
        let snap = pwm_input::snapshot();
        service.tick(&snap, &mut hw, &mut sink);
        std::thread::sleep(tick);
    }
}
