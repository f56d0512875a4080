//! Element data: attributes, class list, inline style and replaced content.

use std::collections::HashMap;

use crate::replaced::ReplacedContent;
use crate::style::InlineStyle;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// Element-specific data.
///
/// Per [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element):
/// "Elements have an associated namespace, namespace prefix, local name, custom element state,
/// custom element definition, is value."
///
/// NOTE: We only store the local name, the attribute list, the inline style
/// declaration block and (for `<img>`/`<video>`-like elements) the replaced
/// content. The `style` attribute is not kept in `attrs`; it lives in `style`.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
    /// [CSSOM § 6.7 `ElementCSSInlineStyle`](https://drafts.csswg.org/cssom/#the-elementcssinlinestyle-mixin)
    ///
    /// "The style attribute must return a CSS declaration block object whose
    /// readonly flag is unset."
    pub style: InlineStyle,
    /// Natural size and load state, for replaced elements only.
    pub replaced: Option<ReplacedContent>,
}

const CLASS_ATTR: &str = "class";

impl ElementData {
    /// Create an element with the given local name and no attributes.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form that attaches replaced content.
    #[must_use]
    pub fn with_replaced(mut self, replaced: ReplacedContent) -> Self {
        self.replaced = Some(replaced);
        self
    }

    /// [`Element.getAttribute`](https://dom.spec.whatwg.org/#dom-element-getattribute)
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// [`Element.hasAttribute`](https://dom.spec.whatwg.org/#dom-element-hasattribute)
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// [`Element.setAttribute`](https://dom.spec.whatwg.org/#dom-element-setattribute)
    ///
    /// Attribute names are ASCII-lowercased, as for HTML elements.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let _ = self
            .attrs
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    /// [HTML § 3.2.6.7 `data-*` attributes](https://html.spec.whatwg.org/multipage/dom.html#embedding-custom-non-visible-data-with-the-data-*-attributes)
    ///
    /// Reads `data-<name>`. Equivalent to `dataset[camelCase(name)]`.
    #[must_use]
    pub fn data(&self, name: &str) -> Option<&str> {
        self.attribute(&format!("data-{name}"))
    }

    /// Returns the class names from the class attribute, in attribute order.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The class attribute, if specified, must have a value that is a set of
    /// space-separated tokens representing the various classes that the element belongs to."
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.attribute(CLASS_ATTR)
            .map(|list| list.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    /// Whether `class` is one of the element's classes.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }

    /// [`DOMTokenList.add`](https://dom.spec.whatwg.org/#dom-domtokenlist-add)
    ///
    /// "For each token in tokens, append token to this's token set." Appending
    /// a token that is already present is a no-op.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let updated = match self.attribute(CLASS_ATTR) {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attribute(CLASS_ATTR, &updated);
    }

    /// Whether this is an `<img>` element.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.tag_name == "img"
    }
}
