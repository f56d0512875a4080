//! CSS length values and parsing
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// User agent default font size.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// The initial containing block, used to resolve viewport units and the
/// root element's size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Why a string could not be parsed as a CSS value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The value was empty or whitespace.
    #[error("empty value")]
    Empty,
    /// No numeric part could be read.
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    /// The number carried a unit this engine does not resolve.
    #[error("unsupported unit '{0}'")]
    UnsupportedUnit(String),
    /// [§ 4.1](https://www.w3.org/TR/css-values-4/#lengths)
    /// "for zero lengths the unit identifier is optional"; any other
    /// unitless number is invalid.
    #[error("unitless length '{0}' must be zero")]
    MissingUnit(String),
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in the
/// property definitions."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthValue {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px(f64),
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element"
    Em(f64),
    /// "Equal to the computed value of the font-size property of the root element."
    Rem(f64),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    Vw(f64),
    /// "1vh = 1% of viewport height"
    Vh(f64),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// "A <percentage> value is denoted by <percentage>, and consists of a
    /// <number> immediately followed by a percent sign '%'."
    Percent(f64),
}

impl LengthValue {
    /// Resolve to pixels. Percentages resolve against `basis`.
    ///
    /// Font-relative units use [`DEFAULT_FONT_SIZE_PX`]; no font cascade is
    /// modeled.
    #[must_use]
    pub fn resolve(&self, basis: f64, viewport: Viewport) -> f64 {
        match *self {
            Self::Px(px) => px,
            Self::Em(n) | Self::Rem(n) => n * DEFAULT_FONT_SIZE_PX,
            Self::Vw(n) => n * viewport.width / 100.0,
            Self::Vh(n) => n * viewport.height / 100.0,
            Self::Percent(pct) => pct * basis / 100.0,
        }
    }

    /// Whether this is a `<percentage>`.
    #[must_use]
    pub const fn is_percent(&self) -> bool {
        matches!(self, Self::Percent(_))
    }
}

impl fmt::Display for LengthValue {
    /// [CSSOM § 6.7.2 Serializing CSS Values](https://drafts.csswg.org/cssom/#serializing-css-values)
    ///
    /// "A base-ten number using digits 0-9 (U+0030 to U+0039) in the shortest
    /// form possible", followed by the unit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, unit) = match *self {
            Self::Px(n) => (n, "px"),
            Self::Em(n) => (n, "em"),
            Self::Rem(n) => (n, "rem"),
            Self::Vw(n) => (n, "vw"),
            Self::Vh(n) => (n, "vh"),
            Self::Percent(n) => (n, "%"),
        };
        write!(f, "{}{unit}", format_number(n))
    }
}

/// Shortest decimal form of `n`, never `-0`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    n.to_string()
}

/// Serialize a pixel amount, e.g. `-12.5` → `"-12.5px"`.
#[must_use]
pub fn format_px(n: f64) -> String {
    LengthValue::Px(n).to_string()
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Parse a single `<length-percentage>` such as `10px`, `-12.5px`, `50%`,
/// `1.5em` or `0`.
///
/// # Errors
/// Returns a [`ValueError`] describing why `input` is not a length.
pub fn parse_length(input: &str) -> Result<LengthValue, ValueError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValueError::Empty);
    }

    let split = input
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-')))
        .unwrap_or(input.len());
    let (number, unit) = input.split_at(split);

    let n: f64 = number
        .parse()
        .ok()
        .filter(|n: &f64| n.is_finite())
        .ok_or_else(|| ValueError::InvalidNumber(input.to_string()))?;

    match unit.to_ascii_lowercase().as_str() {
        "" if n == 0.0 => Ok(LengthValue::Px(0.0)),
        "" => Err(ValueError::MissingUnit(input.to_string())),
        "px" => Ok(LengthValue::Px(n)),
        "em" => Ok(LengthValue::Em(n)),
        "rem" => Ok(LengthValue::Rem(n)),
        "vw" => Ok(LengthValue::Vw(n)),
        "vh" => Ok(LengthValue::Vh(n)),
        "%" => Ok(LengthValue::Percent(n)),
        other => Err(ValueError::UnsupportedUnit(other.to_string())),
    }
}

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// A value that can be either 'auto' or a length (width, height, insets,
/// margins, min sizes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AutoLength {
    /// [§ 4.4](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
    ///
    /// "The keyword 'auto'... allows the user agent to compute the value
    /// based on other properties."
    Auto,
    /// A specific length value (px, %, etc.).
    Length(LengthValue),
}

impl AutoLength {
    /// `0px`.
    pub const ZERO: Self = Self::Length(LengthValue::Px(0.0));

    /// Check if the value is 'auto'.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl fmt::Display for AutoLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Length(len) => write!(f, "{len}"),
        }
    }
}

/// Parse `auto` or a length.
///
/// # Errors
/// Returns a [`ValueError`] when `input` is neither.
pub fn parse_auto_length(input: &str) -> Result<AutoLength, ValueError> {
    if input.trim().eq_ignore_ascii_case("auto") {
        return Ok(AutoLength::Auto);
    }
    parse_length(input).map(AutoLength::Length)
}

/// [§ 10.7 'max-width' / 'max-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
///
/// "none: No limit on the height of the box."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MaxLength {
    /// No limit.
    None,
    /// A limit.
    Length(LengthValue),
}

impl fmt::Display for MaxLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Length(len) => write!(f, "{len}"),
        }
    }
}

/// Parse `none` or a length.
///
/// # Errors
/// Returns a [`ValueError`] when `input` is neither.
pub fn parse_max_length(input: &str) -> Result<MaxLength, ValueError> {
    if input.trim().eq_ignore_ascii_case("none") {
        return Ok(MaxLength::None);
    }
    parse_length(input).map(MaxLength::Length)
}
