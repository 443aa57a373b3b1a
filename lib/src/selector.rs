use std::path::Path;

use regex::Regex;

use crate::attribute::read_attribute;
use crate::consts::FILE_TYPE;
use crate::device::{Device, DeviceType};
use crate::errors::*;

make_log_macro!(debug, "selector");

/// A scanned device paired with its control type.
#[derive(Debug)]
pub struct Candidate {
    pub device: Device,
    pub kind: DeviceType,
}

impl Candidate {
    /// Read the `type` attribute of `device`. An unreadable type is treated as empty.
    pub fn probe(device: Device) -> Self {
        let kind =
            DeviceType::from_sysfs(&read_attribute(&device, FILE_TYPE).unwrap_or_default());
        Self { device, kind }
    }
}

/// Pick the most preferred candidate: `firmware` over `platform` over
/// everything else, the first one seen winning within a tier.
pub fn select_preferred<I>(candidates: I) -> Option<Device>
where
    I: IntoIterator<Item = Candidate>,
{
    let mut best: Option<Candidate> = None;
    for candidate in candidates {
        debug!(
            "{} has type {:?}",
            candidate.device.name(),
            candidate.kind.to_string()
        );
        let replace = match &best {
            None => true,
            Some(best) => candidate.kind.rank() > best.kind.rank(),
        };
        if replace {
            best = Some(candidate);
        }
    }
    best.map(|best| {
        debug!("selected {} ({})", best.device.name(), best.kind);
        best.device
    })
}

/// Enumerate the backlight class rooted at `devices_path`, in name order,
/// keeping only device names matched by `device_regex` when one is given.
pub fn enumerate_devices(
    devices_path: &Path,
    device_regex: Option<&Regex>,
) -> Result<Vec<Device>> {
    let entries =
        std::fs::read_dir(devices_path).map_err(|source| KbacklightError::SubsystemInit {
            path: devices_path.to_path_buf(),
            source,
        })?;

    let mut devices = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("skipping unreadable entry: {e}");
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().to_string();
        if let Some(device_regex) = device_regex {
            if !device_regex.is_match(&name) {
                debug!("{name:?} does not match {}", device_regex.as_str());
                continue;
            }
        }
        devices.push(Device::new(name, entry.path()));
    }
    devices.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(devices)
}

/// Find the backlight device whose brightness is authoritative.
pub fn select_backlight_device(
    devices_path: &Path,
    device_regex: Option<&Regex>,
) -> Result<Device> {
    let devices = enumerate_devices(devices_path, device_regex)?;
    select_preferred(devices.into_iter().map(Candidate::probe))
        .ok_or(KbacklightError::NoDevices)
}
