use std::fmt;
use std::path::{Path, PathBuf};

/// Backlight control types, most preferred first. Types not listed share the
/// lowest tier.
pub const TYPE_PRIORITY: &[DeviceType] = &[DeviceType::Firmware, DeviceType::Platform];

/// The `type` attribute of a backlight-class device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeviceType {
    /// Controlled through a standard firmware interface (e.g. ACPI)
    Firmware,
    /// Controlled through a platform-specific interface
    Platform,
    /// Controlled by writing directly to the video card registers
    Raw,
    /// Missing, unreadable or unrecognised type
    Unknown(String),
}

impl DeviceType {
    pub fn from_sysfs(value: &str) -> Self {
        match value.trim() {
            "firmware" => Self::Firmware,
            "platform" => Self::Platform,
            "raw" => Self::Raw,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Higher is preferred. Every type outside [`TYPE_PRIORITY`] ranks 0.
    pub fn rank(&self) -> usize {
        TYPE_PRIORITY
            .iter()
            .position(|preferred| preferred == self)
            .map_or(0, |index| TYPE_PRIORITY.len() - index)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Firmware => f.write_str("firmware"),
            Self::Platform => f.write_str("platform"),
            Self::Raw => f.write_str("raw"),
            Self::Unknown(other) => f.write_str(other),
        }
    }
}

/// Handle to one device in the backlight class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Device {
    name: String,
    path: PathBuf,
}

impl Device {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn attribute_path(&self, attribute: &str) -> PathBuf {
        self.path.join(attribute)
    }
}
