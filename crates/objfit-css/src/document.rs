//! A DOM tree paired with a viewport: the host the fit engine styles and
//! measures.

use objfit_common::warning::warn_once;
use objfit_dom::{DomTree, ElementData, InlineStyle, NodeId, NodeType};

use crate::computed::ComputedStyle;
use crate::properties::{Property, specified_value};
use crate::values::Viewport;

/// A document whose elements can be styled and measured.
///
/// Measurement lives in [`crate::layout`]; this type owns the tree and the
/// viewport that acts as the initial containing block.
#[derive(Debug, Clone)]
pub struct Document {
    tree: DomTree,
    viewport: Viewport,
}

impl Document {
    /// Wrap an existing tree.
    #[must_use]
    pub const fn new(tree: DomTree, viewport: Viewport) -> Self {
        Self { tree, viewport }
    }

    /// The underlying DOM tree.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Mutable access to the DOM tree, e.g. to finish loading media.
    pub const fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// The current viewport.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize the viewport. Sizes derived from it change on the next
    /// measurement.
    pub const fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// [CSSOM `getComputedStyle`](https://drafts.csswg.org/cssom/#dom-window-getcomputedstyle)
    ///
    /// `None` for nodes that are not elements.
    #[must_use]
    pub fn computed_style(&self, node: NodeId) -> Option<ComputedStyle> {
        self.tree.as_element(node).map(ComputedStyle::for_element)
    }

    /// The element's inline declaration block.
    #[must_use]
    pub fn inline_style(&self, node: NodeId) -> Option<&InlineStyle> {
        self.tree.as_element(node).map(|e| &e.style)
    }

    /// The inline value of `property` on `node`, as `element.style[property]`
    /// would return it.
    #[must_use]
    pub fn inline_value(&self, node: NodeId, property: Property) -> Option<&str> {
        self.inline_style(node)
            .and_then(|style| style.get(property.as_ref()))
    }

    /// [CSSOM § 6.6.1 `setProperty`](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-setproperty)
    ///
    /// Writes `raw` into the inline style of `node` in canonical form. A value
    /// the property's grammar rejects leaves the declaration unchanged, as
    /// `element.style[property] = raw` would.
    pub fn set_style(&mut self, node: NodeId, property: Property, raw: &str) {
        let Some(value) = specified_value(property, raw) else {
            warn_once(
                "CSS",
                &format!("ignoring invalid value '{raw}' for '{property}'"),
            );
            return;
        };
        if let Some(element) = self.tree.as_element_mut(node) {
            element.style.set(property.as_ref(), &value);
        }
    }

    /// [`removeProperty`](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-removeproperty)
    pub fn remove_style(&mut self, node: NodeId, property: Property) {
        if let Some(element) = self.tree.as_element_mut(node) {
            element.style.remove(property.as_ref());
        }
    }
}

/// Builds a document with the usual `html > body` skeleton.
///
/// The `style` argument of [`append_styled`](Self::append_styled) is parsed
/// like a `style` attribute.
#[derive(Debug)]
pub struct DocumentBuilder {
    tree: DomTree,
    body: NodeId,
    viewport: Viewport,
}

impl DocumentBuilder {
    /// Start a document of the given viewport size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let mut tree = DomTree::new();
        let html = tree.alloc(NodeType::Element(ElementData::new("html")));
        tree.append_child(NodeId::ROOT, html);
        let body = tree.alloc(NodeType::Element(ElementData::new("body")));
        tree.append_child(html, body);
        Self {
            tree,
            body,
            viewport,
        }
    }

    /// The `<body>` element.
    #[must_use]
    pub const fn body(&self) -> NodeId {
        self.body
    }

    /// Append `element` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: ElementData) -> NodeId {
        let id = self.tree.alloc(NodeType::Element(element));
        self.tree.append_child(parent, id);
        id
    }

    /// Append `element` with an inline `style` attribute.
    pub fn append_styled(&mut self, parent: NodeId, mut element: ElementData, style: &str) -> NodeId {
        element.style = InlineStyle::parse(style);
        self.append(parent, element)
    }

    /// Append a text node.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.tree.alloc(NodeType::Text(text.to_string()));
        self.tree.append_child(parent, id);
        id
    }

    /// Finish building.
    #[must_use]
    pub fn finish(self) -> Document {
        Document::new(self.tree, self.viewport)
    }
}
