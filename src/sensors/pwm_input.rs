//! RC receiver PWM input capture.
//!
//! Each receiver channel carries a repeating pulse whose high time encodes
//! the stick/switch position (1000 – 2000 µs, 1500 = centre).  A GPIO ISR
//! fires on both edges: the rising edge records a timestamp, the falling
//! edge computes the elapsed width and publishes it.
//!
//! Implausible widths (glitch, lost signal) are normalised to the neutral
//! default rather than surfaced as errors — the lights must stay safely
//! actuated, so a bad frame recentres the channel for one cycle.
//!
//! ## Concurrency
//!
//! The three channel records are shared between exactly one writer (the
//! edge ISR for that channel) and one reader (the control loop).  They
//! live in a single bank guarded by `critical_section::Mutex`, and
//! [`snapshot`] copies all three widths and changed flags — and clears
//! the flags — inside one critical section, so the control loop never
//! observes a torn multi-channel read.  This is the only critical
//! section in the firmware.

use core::cell::RefCell;

use critical_section::Mutex;

/// The three receiver channels this controller decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RcChannel {
    /// Receiver CH8 — on/off switch.
    Switch,
    /// Receiver CH6 — brightness knob.
    Brightness,
    /// Receiver CH7 — colour (hue) knob.
    Hue,
}

impl RcChannel {
    pub const COUNT: usize = 3;

    pub const fn index(self) -> usize {
        match self {
            Self::Switch => 0,
            Self::Brightness => 1,
            Self::Hue => 2,
        }
    }
}

/// Validity range and neutral default for pulse capture.
///
/// Passed in at construction so tests can exercise simulated limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseLimits {
    pub min_us: u16,
    pub max_us: u16,
    pub neutral_us: u16,
}

impl PulseLimits {
    /// Standard RC servo pulse convention.
    pub const DEFAULT: Self = Self {
        min_us: 1000,
        max_us: 2000,
        neutral_us: 1500,
    };
}

impl Default for PulseLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Capture state for a single channel.
///
/// `on_edge` runs in ISR context and performs only timestamp arithmetic
/// and field writes — no formatting, no blocking calls.
#[derive(Debug, Clone, Copy)]
pub struct PulseChannel {
    limits: PulseLimits,
    /// Monotonic timestamp of the last rising edge (µs since boot).
    rise_us: u64,
    /// Latest published width.  Always within the validity range or
    /// equal to the neutral default.
    width_us: u16,
    /// Set on every falling edge; cleared when the control loop snapshots.
    changed: bool,
}

impl PulseChannel {
    pub const fn new(limits: PulseLimits) -> Self {
        Self {
            limits,
            rise_us: 0,
            // No edge observed yet — report centre-stick.
            width_us: limits.neutral_us,
            changed: false,
        }
    }

    /// Feed one logic transition of the input line.
    ///
    /// * rising edge — record the pulse start, no output change;
    /// * falling edge — publish the elapsed width if plausible, the
    ///   neutral default otherwise, and set the changed flag either way.
    pub fn on_edge(&mut self, level_high: bool, now_us: u64) {
        if level_high {
            self.rise_us = now_us;
            return;
        }

        let elapsed = now_us.wrapping_sub(self.rise_us);
        self.width_us = if elapsed >= u64::from(self.limits.min_us)
            && elapsed <= u64::from(self.limits.max_us)
        {
            elapsed as u16
        } else {
            self.limits.neutral_us
        };
        self.changed = true;
    }

    /// Latest published width (µs).
    pub fn width_us(&self) -> u16 {
        self.width_us
    }

    /// Copy width + changed flag and clear the flag.
    fn take(&mut self) -> (u16, bool) {
        let changed = self.changed;
        self.changed = false;
        (self.width_us, changed)
    }
}

/// Consistent copy of all three channels, taken once per control cycle.
/// Lives only within one control-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseSnapshot {
    pub width_us: [u16; RcChannel::COUNT],
    pub changed: [bool; RcChannel::COUNT],
}

impl PulseSnapshot {
    pub fn width(&self, channel: RcChannel) -> u16 {
        self.width_us[channel.index()]
    }

    /// True if any channel published a new width since the last snapshot.
    pub fn any_changed(&self) -> bool {
        self.changed.iter().any(|&c| c)
    }
}

// ── Shared capture bank ───────────────────────────────────────
//
// A static so the GPIO ISRs (which cannot capture closures) can reach it.
// Writers: one edge ISR per channel.  Reader: the control loop snapshot.

static CAPTURE_BANK: Mutex<RefCell<[PulseChannel; RcChannel::COUNT]>> = Mutex::new(RefCell::new(
    [PulseChannel::new(PulseLimits::DEFAULT); RcChannel::COUNT],
));

/// Install pulse limits and reset every channel to its initial state.
/// Call once at boot, before the edge ISRs are enabled.
pub fn configure(limits: PulseLimits) {
    critical_section::with(|cs| {
        *CAPTURE_BANK.borrow_ref_mut(cs) = [PulseChannel::new(limits); RcChannel::COUNT];
    });
}

/// Edge handler — register this on both edges of each receiver GPIO.
/// Safe to call from interrupt context (bounded, minimal work).
pub fn isr_edge(channel: RcChannel, level_high: bool, now_us: u64) {
    critical_section::with(|cs| {
        CAPTURE_BANK.borrow_ref_mut(cs)[channel.index()].on_edge(level_high, now_us);
    });
}

/// Atomically copy the three widths and changed flags, clearing the flags.
/// Called from the control loop, once per tick.
pub fn snapshot() -> PulseSnapshot {
    critical_section::with(|cs| {
        let mut bank = CAPTURE_BANK.borrow_ref_mut(cs);
        let mut snap = PulseSnapshot {
            width_us: [0; RcChannel::COUNT],
            changed: [false; RcChannel::COUNT],
        };
        for (i, ch) in bank.iter_mut().enumerate() {
            let (width, changed) = ch.take();
            snap.width_us[i] = width;
            snap.changed[i] = changed;
        }
        snap
    })
}
