//! Configuration primitives for the MAX7219 driver.

use crate::params::{DecodeMode, Intensity, PowerMode};
use crate::registers::{MAX_INTENSITY, MAX_SCAN_LIMIT};

/// Control register values applied by [`Max7219::init`](crate::Max7219::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Decode-mode selection.
    pub decode_mode: DecodeMode,
    /// Index of the last scanned digit (`0..=7`).
    pub scan_limit: u8,
    /// Intensity duty-cycle step (`0x00..=0x0F`).
    pub intensity: u8,
    /// Shutdown register mode.
    pub power_mode: PowerMode,
}

/// Reasons a [`Config`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `scan_limit` is above 7.
    ScanLimitOutOfRange,
    /// `intensity` is above `0x0F`.
    IntensityOutOfRange,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks that every field fits its register.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.scan_limit > MAX_SCAN_LIMIT {
            return Err(ConfigError::ScanLimitOutOfRange);
        }

        if self.intensity > MAX_INTENSITY {
            return Err(ConfigError::IntensityOutOfRange);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the decode mode.
    pub fn decode_mode(mut self, mode: DecodeMode) -> Self {
        self.config.decode_mode = mode;
        self
    }

    /// Overrides the scan limit.
    pub fn scan_limit(mut self, limit: u8) -> Self {
        self.config.scan_limit = limit;
        self
    }

    /// Overrides the intensity with one of the named steps.
    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.config.intensity = intensity.duty();
        self
    }

    /// Overrides the intensity with a raw duty-cycle step.
    pub fn intensity_raw(mut self, duty: u8) -> Self {
        self.config.intensity = duty;
        self
    }

    /// Overrides the power mode applied at the end of initialization.
    pub fn power_mode(mut self, mode: PowerMode) -> Self {
        self.config.power_mode = mode;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decode_mode: DecodeMode::CodeBDigits7To0,
            scan_limit: MAX_SCAN_LIMIT,
            intensity: Intensity::Percent60.duty(),
            power_mode: PowerMode::Normal,
        }
    }
}
