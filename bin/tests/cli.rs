use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn kbacklight(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kbacklight"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Fake backlight class with one firmware device, plus a config pointing at it.
struct FakeSysfs {
    dir: tempfile::TempDir,
}

impl FakeSysfs {
    fn new(brightness: u32, max_brightness: u32) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let device = dir.path().join("backlight").join("acpi_video0");
        fs::create_dir_all(&device).unwrap();
        fs::write(device.join("type"), "firmware\n").unwrap();
        fs::write(device.join("brightness"), format!("{brightness}\n")).unwrap();
        fs::write(device.join("max_brightness"), format!("{max_brightness}\n")).unwrap();

        let sysfs = Self { dir };
        sysfs.write_config(&sysfs.class_path());
        sysfs
    }

    fn class_path(&self) -> PathBuf {
        self.dir.path().join("backlight")
    }

    fn write_config(&self, devices_path: &Path) {
        fs::write(
            self.config_path(),
            format!("devices_path = {:?}\n", devices_path.to_string_lossy()),
        )
        .unwrap();
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn run(&self, arg: Option<&str>) -> Output {
        let config = self.config_path();
        let mut args = vec!["--config", config.to_str().unwrap()];
        args.extend(arg);
        kbacklight(&args)
    }

    fn brightness(&self) -> String {
        fs::read_to_string(self.class_path().join("acpi_video0").join("brightness"))
            .unwrap()
            .trim_end()
            .to_string()
    }
}

#[test]
fn help_succeeds_without_device_access() {
    for flag in ["-h", "--help"] {
        let output = kbacklight(&[flag, "--config", "/nonexistent/config.toml"]);
        assert!(output.status.success());
        assert!(stdout(&output).contains("PERCENT"));
    }
}

#[test]
fn unknown_argument_fails_before_device_access() {
    let output = kbacklight(&["--config", "/nonexistent/config.toml", "abc"]);
    assert!(!output.status.success());
    assert_eq!(stderr(&output), "Unknown argument: abc\n");
    assert!(stdout(&output).is_empty());
}

#[test]
fn unknown_hyphenated_argument() {
    let output = kbacklight(&["--config", "/nonexistent/config.toml", "-x5"]);
    assert!(!output.status.success());
    assert_eq!(stderr(&output), "Unknown argument: -x5\n");
}

#[test]
fn reports_percentage() {
    let sysfs = FakeSysfs::new(50, 200);
    let output = sysfs.run(None);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "25%\n");
    assert_eq!(sysfs.brightness(), "50");
}

#[test]
fn adds_percentage() {
    let sysfs = FakeSysfs::new(50, 200);
    let output = sysfs.run(Some("+30"));
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert_eq!(sysfs.brightness(), "110");
}

#[test]
fn subtracts_percentage_with_clamping() {
    let sysfs = FakeSysfs::new(10, 200);
    let output = sysfs.run(Some("-10"));
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(sysfs.brightness(), "0");
}

#[test]
fn sets_percentage_with_clamping() {
    let sysfs = FakeSysfs::new(10, 200);
    let output = sysfs.run(Some("150"));
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(sysfs.brightness(), "200");

    let output = sysfs.run(Some("40"));
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(sysfs.brightness(), "80");
}

#[test]
fn empty_class_fails() {
    let sysfs = FakeSysfs::new(10, 200);
    let empty = sysfs.dir.path().join("empty");
    fs::create_dir(&empty).unwrap();
    sysfs.write_config(&empty);

    let output = sysfs.run(None);
    assert!(!output.status.success());
    assert_eq!(stderr(&output), "Failed to find backlight device\n");
}

#[test]
fn missing_class_fails() {
    let sysfs = FakeSysfs::new(10, 200);
    sysfs.write_config(&sysfs.dir.path().join("missing"));

    let output = sysfs.run(Some("+5"));
    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("Failed to enumerate backlight devices"));
}

#[test]
fn version_uses_binary_name() {
    let output = kbacklight(&["-V"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("kbacklight "), "{}", stdout(&output));
}

#[test]
fn oversized_percent_clamps_to_max() {
    let sysfs = FakeSysfs::new(10, 200);
    let output = sysfs.run(Some("99999999999999999999"));
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(sysfs.brightness(), "200");
}

#[test]
fn failed_write_is_reported() {
    let sysfs = FakeSysfs::new(50, 200);
    let path = sysfs.class_path().join("acpi_video0").join("brightness");
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&path, permissions).unwrap();
    // root ignores file modes, nothing to check then
    if fs::OpenOptions::new().write(true).open(&path).is_ok() {
        return;
    }

    let output = sysfs.run(Some("+10"));
    assert!(!output.status.success());
    assert!(
        stderr(&output).starts_with("Failed to set brightness of acpi_video0: "),
        "{}",
        stderr(&output)
    );
    assert!(stdout(&output).is_empty());
    assert_eq!(sysfs.brightness(), "50");
}
