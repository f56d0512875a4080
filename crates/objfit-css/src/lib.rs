//! CSS values, computed styles and box measurement for objfit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Values** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - `<length-percentage>` in px, em, rem, vw, vh and %
//!   - 'auto' and 'none' keywords
//!   - Shortest-form serialization (`0` → `0px`)
//!
//! - **Properties** ([CSSOM § 6.6](https://drafts.csswg.org/cssom/#css-declaration-blocks))
//!   - The positioning, sizing and margin longhands the fit engine touches
//!   - Grammar validation on write; invalid values are dropped
//!
//! - **Computed Styles** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/))
//!   - User-agent display defaults by tag name
//!   - Inline style cascade
//!
//! - **Measurement** ([CSS 2.1 § 10](https://www.w3.org/TR/CSS2/visudet.html))
//!   - Containing blocks for static, relative, absolute and fixed boxes
//!   - Replaced element sizing from natural dimensions and aspect ratio
//!   - min/max constraints
//!   - `clientWidth` / `clientHeight`
//!
//! # Not Implemented
//!
//! - Stylesheets, selectors and inheritance
//! - Padding, borders and box-sizing
//! - Inline formatting and text measurement

/// Computed style representation per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod computed;
/// A styled, measurable document.
pub mod document;
/// Box measurement per [CSS 2.1 § 10](https://www.w3.org/TR/CSS2/visudet.html).
pub mod layout;
/// Property names and value grammars.
pub mod properties;
/// Length values per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

pub use computed::{ComputedStyle, default_display_for_element};
pub use document::{Document, DocumentBuilder};
pub use layout::Size;
pub use properties::{DisplayValue, OverflowValue, PositionValue, Property, specified_value};
pub use values::{
    AutoLength, DEFAULT_FONT_SIZE_PX, LengthValue, MaxLength, ValueError, Viewport, format_number,
    format_px, parse_auto_length, parse_length, parse_max_length,
};
