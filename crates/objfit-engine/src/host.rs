//! The seam between the engine and the document it styles.

use objfit_css::{Document, Property, Size};
use objfit_dom::NodeId;

/// Everything the engine reads from or writes to a document.
///
/// The engine holds no state of its own; every call goes through this trait
/// and re-reads live values, so repeated invocations converge.
pub trait StyleHost {
    /// [`getComputedStyle(node).getPropertyValue(property)`](https://drafts.csswg.org/cssom/#dom-window-getcomputedstyle).
    ///
    /// The empty string when `node` is not an element.
    fn computed_value(&self, node: NodeId, property: Property) -> String;

    /// `node.style[property] = value`. Invalid values are ignored.
    fn write_style(&mut self, node: NodeId, property: Property, value: &str);

    /// `clientWidth` / `clientHeight`, in whole pixels.
    fn client_size(&self, node: NodeId) -> Size;

    /// The node's parent element, if it has one.
    fn parent_of(&self, node: NodeId) -> Option<NodeId>;

    /// `node.classList.add(class)`.
    fn add_class(&mut self, node: NodeId, class: &str);

    /// `node.getAttribute(name)`.
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;
}

impl StyleHost for Document {
    fn computed_value(&self, node: NodeId, property: Property) -> String {
        self.computed_style(node)
            .map(|style| style.get(property))
            .unwrap_or_default()
    }

    fn write_style(&mut self, node: NodeId, property: Property, value: &str) {
        self.set_style(node, property, value);
    }

    fn client_size(&self, node: NodeId) -> Size {
        Size::new(self.client_width(node), self.client_height(node))
    }

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.tree().parent_element(node)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.tree_mut().as_element_mut(node) {
            element.add_class(class);
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.tree()
            .as_element(node)
            .and_then(|element| element.attribute(name))
            .map(str::to_string)
    }
}
