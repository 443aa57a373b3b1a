use crate::consts::*;
use crate::errors::*;
use crate::util::*;

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;
use serde::Deserializer;
use smart_default::SmartDefault;

make_log_macro!(debug, "config");

#[derive(Deserialize, Clone, Debug, SmartDefault, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct KbacklightConfig {
    /// Only devices whose name matches this regex take part in selection
    #[serde(deserialize_with = "deserialize_device_regex")]
    pub device: Option<String>,

    /// Root of the backlight class
    #[default(PathBuf::from(DEVICES_PATH))]
    pub devices_path: PathBuf,
}

fn deserialize_device_regex<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let device: Option<String> = Deserialize::deserialize(deserializer)?;
    debug!("{:?}", device);

    if let Some(device) = &device {
        if let Err(e) = Regex::new(device) {
            return Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(device),
                &format!("a valid regular expression ({e})").as_str(),
            ));
        }
    }

    Ok(device)
}

impl KbacklightConfig {
    /// Load `config.toml` from the user's config directory, or the defaults
    /// when there is none.
    pub fn new() -> Result<Self> {
        if let Some(config_path) = find_file("config", Some("toml")) {
            Self::from_file(config_path)
        } else {
            debug!("no config file, using defaults");
            Ok(KbacklightConfig::default())
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        debug!("loading {}", path.as_ref().display());
        deserialize_toml_file(path)
    }
}
