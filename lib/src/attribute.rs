use std::fs::OpenOptions;
use std::io::Write as _;

use crate::device::Device;
use crate::errors::*;
use crate::util::read_file;

make_log_macro!(debug, "attribute");

/// Raw text of an attribute, or `None` if it cannot be read.
pub fn read_attribute(device: &Device, name: &str) -> Option<String> {
    let path = device.attribute_path(name);
    match read_file(&path) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("{}: {e}", path.display());
            None
        }
    }
}

/// Read an attribute holding a base-10 integer.
pub fn read_int_attribute(device: &Device, name: &str) -> Result<i64> {
    let read_error = |reason: String| KbacklightError::AttributeRead {
        device: device.name().to_string(),
        attribute: name.to_string(),
        reason,
    };

    let path = device.attribute_path(name);
    let text = read_file(&path).map_err(|e| read_error(e.to_string()))?;
    let value = text
        .trim()
        .parse()
        .map_err(|e| read_error(format!("{text:?} is not an integer ({e})")))?;
    debug!("{} = {value}", path.display());
    Ok(value)
}

/// Write `value` as decimal text to an existing attribute.
pub fn write_int_attribute(device: &Device, name: &str, value: i64) -> Result<()> {
    let write_error = |source: std::io::Error| KbacklightError::AttributeWrite {
        device: device.name().to_string(),
        attribute: name.to_string(),
        source,
    };

    let path = device.attribute_path(name);
    debug!("{} <- {value}", path.display());
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(&path)
        .map_err(write_error)?;
    file.write_all(value.to_string().as_bytes())
        .map_err(write_error)
}
