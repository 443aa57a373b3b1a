use std::path::PathBuf;

use thiserror::Error;

/// Result type returned from functions that can have our `Error`s.
pub type Result<T, E = KbacklightError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum KbacklightError {
    #[error("Failed to enumerate backlight devices in {}: {source}", .path.display())]
    SubsystemInit {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to find backlight device")]
    NoDevices,

    #[error("Failed to read {attribute} of {device}: {reason}")]
    AttributeRead {
        device: String,
        attribute: String,
        reason: String,
    },

    #[error("Failed to set {attribute} of {device}: {source}")]
    AttributeWrite {
        device: String,
        attribute: String,
        source: std::io::Error,
    },

    #[error("Device {device} reports an invalid max_brightness of {value}")]
    InvalidMaxBrightness { device: String, value: i64 },

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("{0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("{0}")]
    Other(String),
}
