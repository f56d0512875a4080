//! Inline style declaration block.
//!
//! [CSSOM § 6.6 CSS Declaration Blocks](https://drafts.csswg.org/cssom/#css-declaration-blocks)
//!
//! The DOM stores declarations verbatim. Validation and canonical
//! serialization of values belong to the CSS layer, which writes through
//! [`InlineStyle::set`] only after a value has been accepted.

use std::fmt;

/// An ordered list of `property: value` declarations.
///
/// "A CSS declaration block is an ordered collection of CSS properties with
/// their associated values, also named CSS declarations."
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    /// An empty declaration block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// [§ 6.6.1 parse a CSS declaration block](https://drafts.csswg.org/cssom/#parse-a-css-declaration-block)
    ///
    /// Splits a `style` attribute into declarations. Declarations without a
    /// colon, or with an empty name or value, are dropped. Later duplicates
    /// replace earlier ones.
    #[must_use]
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        for declaration in css_text.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let (name, value) = (name.trim(), value.trim());
            if name.is_empty() || value.is_empty() {
                continue;
            }
            style.set(name, value);
        }
        style
    }

    /// [`getPropertyValue`](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertyvalue)
    ///
    /// "If property is a case-sensitive match for a property name of a CSS
    /// declaration in the declarations, then return the result of invoking
    /// serialize a CSS value of that declaration."
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(property))
            .map(|(_, value)| value.as_str())
    }

    /// [`setProperty`](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-setproperty)
    ///
    /// Replaces an existing declaration in place, otherwise appends.
    pub fn set(&mut self, property: &str, value: &str) {
        let property = property.to_ascii_lowercase();
        match self
            .declarations
            .iter_mut()
            .find(|(name, _)| *name == property)
        {
            Some(existing) => existing.1 = value.to_string(),
            None => self.declarations.push((property, value.to_string())),
        }
    }

    /// [`removeProperty`](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-removeproperty)
    pub fn remove(&mut self, property: &str) {
        self.declarations
            .retain(|(name, _)| !name.eq_ignore_ascii_case(property));
    }

    /// Iterate declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the block has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// [`cssText`](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-csstext)
    ///
    /// "return the result of serializing the declarations."
    #[must_use]
    pub fn css_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}: {value};")?;
        }
        Ok(())
    }
}
