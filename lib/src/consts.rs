/// Location of backlight devices
pub const DEVICES_PATH: &str = "/sys/class/backlight";

/// Filename for device's max brightness
pub const FILE_MAX_BRIGHTNESS: &str = "max_brightness";

/// Filename for the requested brightness level, read and written.
/// amdgpu reports `actual_brightness` on a different scale than
/// [0, max_brightness], so it is never read.
pub const FILE_BRIGHTNESS: &str = "brightness";

/// Filename for the backlight control type.
/// See https://www.kernel.org/doc/Documentation/ABI/stable/sysfs-class-backlight
pub const FILE_TYPE: &str = "type";

/// Name of the directory under the user's config dir
pub const CONFIG_DIR_NAME: &str = "kbacklight";
