//! `WIDTHxHEIGHT` command line arguments.

use std::fmt;
use std::str::FromStr;

use objfit_css::{Viewport, format_number};
use thiserror::Error;

/// Why a `WIDTHxHEIGHT` argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeArgError {
    /// No `x` between the two numbers.
    #[error("expected WIDTHxHEIGHT, got '{0}'")]
    MissingSeparator(String),
    /// One side is not a finite number.
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// One side is below zero.
    #[error("'{0}' must not be negative")]
    Negative(String),
}

/// A pair of CSS pixel dimensions such as `400x300` or `320.5x180`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeArg {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

fn dimension(raw: &str) -> Result<f64, SizeArgError> {
    let raw = raw.trim();
    let value: f64 = raw
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| SizeArgError::NotANumber(raw.to_string()))?;
    if value < 0.0 {
        return Err(SizeArgError::Negative(raw.to_string()));
    }
    Ok(value)
}

impl FromStr for SizeArg {
    type Err = SizeArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| SizeArgError::MissingSeparator(s.to_string()))?;
        Ok(Self {
            width: dimension(width)?,
            height: dimension(height)?,
        })
    }
}

impl fmt::Display for SizeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", format_number(self.width), format_number(self.height))
    }
}

impl From<SizeArg> for Viewport {
    fn from(arg: SizeArg) -> Self {
        Self::new(arg.width, arg.height)
    }
}
