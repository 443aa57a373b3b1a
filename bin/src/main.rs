use std::path::PathBuf;
use std::process::ExitCode;

use kbacklight::{KbacklightBuilder, KbacklightConfig, KbacklightError, Operation};

use clap::Parser;

/// Add to, subtract from or set backlight level in PERCENT.
/// If no options given, the program reports current backlight level in percent.
#[derive(Parser, Debug)]
#[command(name = "kbacklight", version, long_about = None)]
#[command(override_usage = "kbacklight [OPTIONS] [[+-]PERCENT]")]
struct Args {
    /// Regular expression for the device names to choose from
    #[arg(long, value_name = "regex")]
    device: Option<String>,

    /// Read configuration from this file instead of the user's config directory
    #[arg(long, value_name = "file")]
    config: Option<PathBuf>,

    /// +PERCENT adds to, -PERCENT subtracts from and PERCENT sets the backlight level.
    /// Percentages are of the device's maximum brightness.
    #[arg(value_name = "[+-]PERCENT", allow_hyphen_values = true)]
    adjustment: Option<String>,
}

fn run(args: Args) -> Result<(), KbacklightError> {
    // reject malformed arguments before touching any device
    let operation = Operation::from_arg(args.adjustment.as_deref())?;

    let mut builder = KbacklightBuilder::new().with_device_regex(args.device.as_deref());
    if let Some(config_path) = &args.config {
        builder = builder.with_config(KbacklightConfig::from_file(config_path)?);
    }
    let mut kbacklight = builder.build()?;

    if operation == Operation::Report {
        println!("{}%", kbacklight.get_brightness());
    } else {
        kbacklight.apply(operation)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
