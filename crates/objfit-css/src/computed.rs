//! CSS Computed Style
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//! "The computed value is the result of resolving the specified value..."
//!
//! Only two origins take part in the cascade here: the user-agent defaults
//! (chosen by tag name) and the element's inline style declarations.

use objfit_common::warning::warn_once;
use objfit_dom::ElementData;
use serde::Serialize;

use crate::properties::{DisplayValue, OverflowValue, PositionValue, Property};
use crate::values::{AutoLength, MaxLength, parse_auto_length, parse_max_length};

/// [HTML § 15.3 Non-replaced elements](https://html.spec.whatwg.org/multipage/rendering.html#non-replaced-elements)
///
/// Elements the user-agent stylesheet gives `display: block`.
const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "body",
    "center",
    "dd",
    "details",
    "dialog",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "html",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "summary",
    "ul",
];

/// [§ 15.3.1 Hidden elements](https://html.spec.whatwg.org/multipage/rendering.html#hidden-elements)
///
/// "The following elements must have their display set to none"
const HIDDEN_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "datalist", "head", "link", "meta", "noembed", "noframes",
    "param", "rp", "script", "style", "template", "title",
];

/// The user-agent `display` for an element with the given local name.
#[must_use]
pub fn default_display_for_element(tag_name: &str) -> DisplayValue {
    if HIDDEN_ELEMENTS.contains(&tag_name) {
        DisplayValue::None
    } else if BLOCK_ELEMENTS.contains(&tag_name) {
        DisplayValue::Block
    } else {
        DisplayValue::Inline
    }
}

/// Computed values of the properties in [`Property`] for one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedStyle {
    /// 'position'
    pub position: PositionValue,
    /// 'overflow'
    pub overflow: OverflowValue,
    /// 'display'
    pub display: DisplayValue,
    /// 'width'
    pub width: AutoLength,
    /// 'height'
    pub height: AutoLength,
    /// 'top'
    pub top: AutoLength,
    /// 'right'
    pub right: AutoLength,
    /// 'bottom'
    pub bottom: AutoLength,
    /// 'left'
    pub left: AutoLength,
    /// 'margin-top'
    pub margin_top: AutoLength,
    /// 'margin-right'
    pub margin_right: AutoLength,
    /// 'margin-bottom'
    pub margin_bottom: AutoLength,
    /// 'margin-left'
    pub margin_left: AutoLength,
    /// 'max-width'
    pub max_width: MaxLength,
    /// 'max-height'
    pub max_height: MaxLength,
    /// 'min-width'
    pub min_width: AutoLength,
    /// 'min-height'
    pub min_height: AutoLength,
}

impl Default for ComputedStyle {
    /// Initial values of every property.
    fn default() -> Self {
        Self {
            position: PositionValue::Static,
            overflow: OverflowValue::Visible,
            display: DisplayValue::Inline,
            width: AutoLength::Auto,
            height: AutoLength::Auto,
            top: AutoLength::Auto,
            right: AutoLength::Auto,
            bottom: AutoLength::Auto,
            left: AutoLength::Auto,
            margin_top: AutoLength::ZERO,
            margin_right: AutoLength::ZERO,
            margin_bottom: AutoLength::ZERO,
            margin_left: AutoLength::ZERO,
            max_width: MaxLength::None,
            max_height: MaxLength::None,
            min_width: AutoLength::ZERO,
            min_height: AutoLength::ZERO,
        }
    }
}

impl ComputedStyle {
    /// Cascade the user-agent defaults for `element`'s tag with its inline
    /// style. Inline declarations that fail to parse are ignored.
    #[must_use]
    pub fn for_element(element: &ElementData) -> Self {
        let mut style = Self {
            display: default_display_for_element(&element.tag_name),
            ..Self::default()
        };
        for (name, value) in element.style.iter() {
            let Ok(property) = name.parse::<Property>() else {
                continue;
            };
            if !style.apply(property, value) {
                warn_once(
                    "CSS",
                    &format!("ignoring invalid value '{value}' for '{property}'"),
                );
            }
        }
        style
    }

    /// Apply one declaration. Returns `false` when `value` does not match the
    /// property's grammar.
    fn apply(&mut self, property: Property, value: &str) -> bool {
        match property {
            Property::Position => value.parse().map(|v| self.position = v).is_ok(),
            Property::Overflow => value.parse().map(|v| self.overflow = v).is_ok(),
            Property::Display => value.parse().map(|v| self.display = v).is_ok(),
            Property::MaxWidth => parse_max_length(value).map(|v| self.max_width = v).is_ok(),
            Property::MaxHeight => parse_max_length(value).map(|v| self.max_height = v).is_ok(),
            _ => match (self.auto_length_mut(property), parse_auto_length(value)) {
                (Some(slot), Ok(v)) => {
                    *slot = v;
                    true
                }
                _ => false,
            },
        }
    }

    fn auto_length_mut(&mut self, property: Property) -> Option<&mut AutoLength> {
        Some(match property {
            Property::Width => &mut self.width,
            Property::Height => &mut self.height,
            Property::Top => &mut self.top,
            Property::Right => &mut self.right,
            Property::Bottom => &mut self.bottom,
            Property::Left => &mut self.left,
            Property::MarginTop => &mut self.margin_top,
            Property::MarginRight => &mut self.margin_right,
            Property::MarginBottom => &mut self.margin_bottom,
            Property::MarginLeft => &mut self.margin_left,
            Property::MinWidth => &mut self.min_width,
            Property::MinHeight => &mut self.min_height,
            Property::Position
            | Property::Overflow
            | Property::Display
            | Property::MaxWidth
            | Property::MaxHeight => return None,
        })
    }

    /// [CSSOM `getPropertyValue`](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertyvalue)
    /// on the computed style: the serialized computed value of `property`.
    #[must_use]
    pub fn get(&self, property: Property) -> String {
        match property {
            Property::Position => self.position.to_string(),
            Property::Overflow => self.overflow.to_string(),
            Property::Display => self.display.to_string(),
            Property::Width => self.width.to_string(),
            Property::Height => self.height.to_string(),
            Property::Top => self.top.to_string(),
            Property::Right => self.right.to_string(),
            Property::Bottom => self.bottom.to_string(),
            Property::Left => self.left.to_string(),
            Property::MarginTop => self.margin_top.to_string(),
            Property::MarginRight => self.margin_right.to_string(),
            Property::MarginBottom => self.margin_bottom.to_string(),
            Property::MarginLeft => self.margin_left.to_string(),
            Property::MaxWidth => self.max_width.to_string(),
            Property::MaxHeight => self.max_height.to_string(),
            Property::MinWidth => self.min_width.to_string(),
            Property::MinHeight => self.min_height.to_string(),
        }
    }
}
