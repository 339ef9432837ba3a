use crate::error::{SculptError, SculptResult};
use crate::keymap::{MAX_COLS, MAX_ROWS};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub sensor: SensorParams,
    #[command(flatten)]
    pub matrix: MatrixParams,
}

/// Media/Fn switch sense line parameters.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorParams {
    /// Readings strictly above this value engage the overlay.
    #[arg(long, default_value_t = 100)]
    pub mode_threshold: u16,
    /// Minimum spacing between two real ADC reads.
    #[arg(long, default_value_t = 1000)]
    pub sample_interval_ms: u32,
    /// Largest plausible ADC value (12-bit converter).
    #[arg(long, default_value_t = 4095)]
    pub adc_max: u16,
    #[arg(long, default_value_t = 0)]
    pub adc_channel: u8,
}

impl Default for SensorParams {
    fn default() -> Self {
        Self {
            mode_threshold: 100,
            sample_interval_ms: 1000,
            adc_max: 4095,
            adc_channel: 0,
        }
    }
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixParams {
    #[arg(long, default_value_t = 8)]
    pub rows: u8,
    #[arg(long, default_value_t = 18)]
    pub cols: u8,
}

impl Default for MatrixParams {
    fn default() -> Self {
        Self { rows: 8, cols: 18 }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SculptResult<Self> {
        let content = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SculptResult<()> {
        let m = &self.matrix;
        if m.rows == 0 || m.cols == 0 {
            return Err(SculptError::Config(format!(
                "matrix must have at least one row and column (got {}x{})",
                m.rows, m.cols
            )));
        }
        if m.rows as usize > MAX_ROWS || m.cols as usize > MAX_COLS {
            return Err(SculptError::Config(format!(
                "matrix {}x{} exceeds keymap tables {}x{}",
                m.rows, m.cols, MAX_ROWS, MAX_COLS
            )));
        }

        let s = &self.sensor;
        if s.sample_interval_ms == 0 {
            return Err(SculptError::Config(
                "sample_interval_ms must be non-zero".to_string(),
            ));
        }
        if s.mode_threshold >= s.adc_max {
            return Err(SculptError::Config(format!(
                "mode_threshold {} must be below adc_max {}",
                s.mode_threshold, s.adc_max
            )));
        }
        Ok(())
    }

    /// Overlays arguments the user typed on the command line onto a config
    /// loaded from file. Defaults filled in by clap do not override the file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field;
                }
            };
        }

        update_if_present!(sensor.mode_threshold);
        update_if_present!(sensor.sample_interval_ms);
        update_if_present!(sensor.adc_max);
        update_if_present!(sensor.adc_channel);
        update_if_present!(matrix.rows);
        update_if_present!(matrix.cols);
    }
}
