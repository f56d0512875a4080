//! The longhand properties objfit reads and writes, and their value grammars.
//!
//! [CSSOM § 6.6.1 `setProperty`](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-setproperty)
//!
//! "Let component value list be the result of parsing value for property
//! property. If component value list is null, then return."
//!
//! Writes through [`specified_value`] follow the same rule: a value the
//! property's grammar rejects is dropped, and accepted values are stored in
//! their canonical serialization (`0` becomes `0px`, keywords are
//! lower-cased).

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::values::{parse_auto_length, parse_max_length};

/// A CSS longhand property known to objfit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    /// [§ 9.3.1 'position'](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
    Position,
    /// [§ 11.1.1 'overflow'](https://www.w3.org/TR/CSS2/visufx.html#overflow)
    Overflow,
    /// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
    Display,
    /// [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    Width,
    /// [§ 10.5 'height'](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    Height,
    /// [§ 9.3.2 Box offsets](https://www.w3.org/TR/CSS2/visuren.html#position-props)
    Top,
    /// Box offset from the containing block's right edge.
    Right,
    /// Box offset from the containing block's bottom edge.
    Bottom,
    /// Box offset from the containing block's left edge.
    Left,
    /// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    MarginTop,
    /// Right margin.
    MarginRight,
    /// Bottom margin.
    MarginBottom,
    /// Left margin.
    MarginLeft,
    /// [§ 10.4 Minimum and maximum widths](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    MaxWidth,
    /// [§ 10.7 Minimum and maximum heights](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    MaxHeight,
    /// Lower bound on the used width.
    MinWidth,
    /// Lower bound on the used height.
    MinHeight,
}

/// Which value grammar a property accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// [`PositionValue`] keywords.
    Position,
    /// [`OverflowValue`] keywords.
    Overflow,
    /// [`DisplayValue`] keywords.
    Display,
    /// `auto | <length-percentage>`.
    AutoLength,
    /// `none | <length-percentage>`.
    MaxLength,
}

impl Property {
    /// The value grammar for this property.
    #[must_use]
    pub const fn grammar(self) -> Grammar {
        match self {
            Self::Position => Grammar::Position,
            Self::Overflow => Grammar::Overflow,
            Self::Display => Grammar::Display,
            Self::MaxWidth | Self::MaxHeight => Grammar::MaxLength,
            Self::Width
            | Self::Height
            | Self::Top
            | Self::Right
            | Self::Bottom
            | Self::Left
            | Self::MarginTop
            | Self::MarginRight
            | Self::MarginBottom
            | Self::MarginLeft
            | Self::MinWidth
            | Self::MinHeight => Grammar::AutoLength,
        }
    }
}

/// [§ 9.3.1](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
/// "The 'position' and 'float' properties determine which of the CSS 2
/// positioning algorithms is used to calculate the position of a box."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PositionValue {
    /// "The box is a normal box, laid out according to the normal flow."
    #[default]
    Static,
    /// "The box's position is calculated according to the normal flow.
    /// Then the box is offset relative to its normal position."
    Relative,
    /// "The box's position (and possibly size) is specified with the
    /// 'top', 'right', 'bottom', and 'left' properties."
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but the box is fixed with respect to some reference."
    Fixed,
    /// [CSS Positioned Layout 3 § 3.4](https://www.w3.org/TR/css-position-3/#stickypos-insets)
    Sticky,
}

impl PositionValue {
    /// [§ 9.3.2](https://www.w3.org/TR/CSS2/visuren.html#position-props)
    /// "An element is said to be positioned if its 'position' property has
    /// a value other than 'static'."
    #[must_use]
    pub const fn is_positioned(self) -> bool {
        !matches!(self, Self::Static)
    }

    /// Absolutely positioned boxes are taken out of normal flow.
    #[must_use]
    pub const fn is_out_of_flow(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

/// [§ 11.1.1 'overflow'](https://www.w3.org/TR/CSS2/visufx.html#overflow)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum OverflowValue {
    /// "This value indicates that content is not clipped."
    #[default]
    Visible,
    /// "This value indicates that the content is clipped and that no
    /// scrolling user interface should be provided."
    Hidden,
    /// [CSS Overflow 3](https://www.w3.org/TR/css-overflow-3/#valdef-overflow-clip)
    Clip,
    /// "the content is clipped and ... a scrolling mechanism is provided."
    Scroll,
    /// "user agent-dependent, but should cause a scrolling mechanism to be
    /// provided for overflowing boxes."
    Auto,
}

/// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// Single-keyword display values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayValue {
    /// `display: inline`, the initial value.
    #[default]
    Inline,
    /// `display: block`.
    Block,
    /// `display: inline-block`.
    InlineBlock,
    /// `display: flow-root`.
    FlowRoot,
    /// `display: flex`.
    Flex,
    /// `display: inline-flex`.
    InlineFlex,
    /// `display: grid`.
    Grid,
    /// `display: inline-grid`.
    InlineGrid,
    /// `display: table`.
    Table,
    /// `display: list-item`.
    ListItem,
    /// `display: contents`.
    Contents,
    /// `display: none`.
    None,
}

impl DisplayValue {
    /// [§ 2.1 Outer Display Roles](https://www.w3.org/TR/css-display-3/#outer-role)
    ///
    /// "The element generates a block-level box when placed in flow layout."
    #[must_use]
    pub const fn is_block_level(self) -> bool {
        matches!(
            self,
            Self::Block | Self::FlowRoot | Self::Flex | Self::Grid | Self::Table | Self::ListItem
        )
    }

    /// Whether the element generates no box of its own.
    #[must_use]
    pub const fn generates_no_box(self) -> bool {
        matches!(self, Self::None | Self::Contents)
    }
}

/// Validate `raw` against `property`'s grammar and return its canonical
/// serialization, or `None` when the value is invalid for the property.
#[must_use]
pub fn specified_value(property: Property, raw: &str) -> Option<String> {
    let raw = raw.trim();
    match property.grammar() {
        Grammar::Position => raw.parse::<PositionValue>().ok().map(|v| v.to_string()),
        Grammar::Overflow => raw.parse::<OverflowValue>().ok().map(|v| v.to_string()),
        Grammar::Display => raw.parse::<DisplayValue>().ok().map(|v| v.to_string()),
        Grammar::AutoLength => parse_auto_length(raw).ok().map(|v| v.to_string()),
        Grammar::MaxLength => parse_max_length(raw).ok().map(|v| v.to_string()),
    }
}
