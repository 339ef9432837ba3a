//! Media/Fn slide switch, read through an analog sense line.

use crate::config::SensorParams;
use crate::hal::AnalogInput;
use tracing::{debug, warn};

/// Outcome of a rate-limited sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// A real ADC read happened on this call.
    Fresh(bool),
    /// Inside the rate-limit window; the last computed flag is returned.
    Cached(bool),
}

impl Sample {
    pub fn flag(self) -> bool {
        match self {
            Sample::Fresh(f) | Sample::Cached(f) => f,
        }
    }

    pub fn is_fresh(self) -> bool {
        matches!(self, Sample::Fresh(_))
    }
}

#[derive(Debug, Clone)]
pub struct ModeSensor {
    params: SensorParams,
    flag: bool,
    last_read_at: u32,
    reads: u64,
}

impl ModeSensor {
    /// `started_at` anchors the first rate-limit window, so the first real
    /// read happens one interval after boot.
    pub fn new(params: SensorParams, started_at: u32) -> Self {
        Self {
            params,
            flag: false,
            last_read_at: started_at,
            reads: 0,
        }
    }

    /// Last computed flag, without touching the hardware.
    pub fn flag(&self) -> bool {
        self.flag
    }

    /// Number of real ADC reads performed so far.
    pub fn reads(&self) -> u64 {
        self.reads
    }

    pub fn next_eligible_at(&self) -> u32 {
        self.last_read_at.wrapping_add(self.params.sample_interval_ms)
    }

    /// Reads the ADC at most once per `sample_interval_ms`.
    /// `now` is the current timer value in milliseconds.
    pub fn sample<A: AnalogInput + ?Sized>(&mut self, adc: &mut A, now: u32) -> Sample {
        if now.wrapping_sub(self.last_read_at) < self.params.sample_interval_ms {
            return Sample::Cached(self.flag);
        }
        Sample::Fresh(self.read_now(adc, now))
    }

    /// Unconditional read. Restarts the rate-limit window.
    pub fn read_now<A: AnalogInput + ?Sized>(&mut self, adc: &mut A, now: u32) -> bool {
        self.last_read_at = now;
        self.reads += 1;

        let raw = adc.analog_read(self.params.adc_channel);
        self.flag = self.classify(raw);
        debug!(
            "Mode sensor read raw={} -> {}, next read at {} ms",
            raw,
            self.flag,
            self.next_eligible_at()
        );
        self.flag
    }

    /// Strict threshold, no hysteresis. Implausible readings fail safe to
    /// "disengaged".
    pub fn classify(&self, raw: u16) -> bool {
        if raw > self.params.adc_max {
            warn!(
                "Mode sensor reading {} above ADC range {}, treating as disengaged",
                raw, self.params.adc_max
            );
            return false;
        }
        raw > self.params.mode_threshold
    }
}
