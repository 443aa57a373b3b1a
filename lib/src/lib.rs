#![warn(clippy::match_same_arms)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::unnecessary_wraps)]

#[macro_use]
mod util;
mod attribute;
pub mod brightness;
mod config;
mod consts;
mod device;
mod errors;
mod operation;
mod selector;

use std::path::Path;

use regex::Regex;

pub use crate::attribute::{read_attribute, read_int_attribute, write_int_attribute};
pub use crate::config::KbacklightConfig;
use crate::consts::*;
pub use crate::device::{Device, DeviceType, TYPE_PRIORITY};
pub use crate::errors::{KbacklightError, Result};
pub use crate::operation::Operation;
pub use crate::selector::{Candidate, enumerate_devices, select_backlight_device, select_preferred};

make_log_macro!(debug, "kbacklight");

/// Used to construct [`Kbacklight`]
#[derive(Default)]
pub struct KbacklightBuilder<'a> {
    device_regex: Option<&'a str>,
    config: Option<KbacklightConfig>,
}

impl<'a> KbacklightBuilder<'a> {
    /// Create a new [`KbacklightBuilder`].
    pub fn new() -> Self {
        KbacklightBuilder::default()
    }

    /// Defaults to the `device` key of the config (all devices when unset).
    pub fn with_device_regex(mut self, device_regex: Option<&'a str>) -> Self {
        self.device_regex = device_regex;
        self
    }

    /// Defaults to [`KbacklightConfig::new()`].
    pub fn with_config(mut self, config: KbacklightConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Select the backlight device and read its current state.
    pub fn build(self) -> Result<Kbacklight> {
        let config = match self.config {
            Some(config) => config,
            None => KbacklightConfig::new()?,
        };

        let device_regex = self
            .device_regex
            .or(config.device.as_deref())
            .map(Regex::new)
            .transpose()?;

        Kbacklight::new(&config.devices_path, device_regex.as_ref())
    }
}

/// The selected backlight device together with its brightness range.
#[derive(Debug)]
pub struct Kbacklight {
    device: Device,
    raw_brightness: i64,
    max_brightness: i64,
}

impl Kbacklight {
    pub(crate) fn new(devices_path: &Path, device_regex: Option<&Regex>) -> Result<Self> {
        let device = select_backlight_device(devices_path, device_regex)?;

        let max_brightness = read_int_attribute(&device, FILE_MAX_BRIGHTNESS)?;
        if max_brightness <= 0 {
            return Err(KbacklightError::InvalidMaxBrightness {
                device: device.name().to_string(),
                value: max_brightness,
            });
        }
        let raw_brightness = read_int_attribute(&device, FILE_BRIGHTNESS)?;
        debug!(
            "{}: brightness {raw_brightness} of {max_brightness}",
            device.name()
        );

        Ok(Self {
            device,
            raw_brightness,
            max_brightness,
        })
    }

    pub fn device_name(&self) -> &str {
        self.device.name()
    }

    pub fn raw_brightness(&self) -> i64 {
        self.raw_brightness
    }

    pub fn max_brightness(&self) -> i64 {
        self.max_brightness
    }

    /// Current brightness in percent of the maximum, rounded down.
    pub fn get_brightness(&self) -> i64 {
        brightness::report(self.raw_brightness, self.max_brightness)
    }

    /// Carry out `operation`. Returns the raw value written, if any.
    pub fn apply(&mut self, operation: Operation) -> Result<Option<i64>> {
        let Some(target) = operation.target(self.raw_brightness, self.max_brightness) else {
            return Ok(None);
        };
        debug!("{operation:?}: {} -> {target}", self.raw_brightness);
        write_int_attribute(&self.device, FILE_BRIGHTNESS, target)?;
        self.raw_brightness = target;
        Ok(Some(target))
    }
}
