use std::num::IntErrorKind;
use std::str::FromStr;

use crate::brightness;
use crate::errors::*;

/// What to do with the selected backlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Report,
    Add(i64),
    Subtract(i64),
    Set(i64),
}

impl Operation {
    /// Parse the optional positional argument; no argument means [`Operation::Report`].
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        arg.map_or(Ok(Self::Report), str::parse::<Self>)
    }

    /// Raw brightness to write, or `None` if this operation does not write.
    pub fn target(self, current: i64, max: i64) -> Option<i64> {
        match self {
            Self::Report => None,
            Self::Add(percent) => Some(brightness::add(current, max, percent)),
            Self::Subtract(percent) => Some(brightness::subtract(current, max, percent)),
            Self::Set(percent) => Some(brightness::set(max, percent)),
        }
    }
}

/// Digits too large for an `i64` saturate; the result is clamped to the raw
/// range later anyway.
fn parse_percent(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match digits.parse() {
        Ok(percent) => Some(percent),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
        Err(_) => None,
    }
}

impl FromStr for Operation {
    type Err = KbacklightError;

    fn from_str(arg: &str) -> Result<Self> {
        let parsed = if let Some(digits) = arg.strip_prefix('+') {
            parse_percent(digits).map(Self::Add)
        } else if let Some(digits) = arg.strip_prefix('-') {
            parse_percent(digits).map(Self::Subtract)
        } else {
            parse_percent(arg).map(Self::Set)
        };
        parsed.ok_or_else(|| KbacklightError::UnknownArgument(arg.to_string()))
    }
}
