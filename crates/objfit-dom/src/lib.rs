//! DOM tree implementation for objfit.
//!
//! A [DOM Living Standard](https://dom.spec.whatwg.org/) tree cut down to
//! what fitting media needs: parent and child links, element attributes and
//! class list, the inline style declaration block, and the natural size of
//! replaced content.
//!
//! # Design
//!
//! Nodes live in a single arena and refer to each other through [`NodeId`]
//! indices, so the fit engine can hold a media id and its container id at the
//! same time and mutate either through one `&mut DomTree`.

mod element;
mod replaced;
mod style;

pub use element::{AttributesMap, ElementData};
pub use replaced::{LoadState, ReplacedContent};
pub use style::InlineStyle;

/// Index of a node in its [`DomTree`].
///
/// Ids are never reused; an id from another tree simply resolves to nothing
/// or to an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The Document node, created with every tree.
    pub const ROOT: Self = Self(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is, with its payload.
    pub node_type: NodeType,

    /// [§ 4.2.1](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    pub parent: Option<NodeId>,

    /// Children in tree order.
    pub children: Vec<NodeId>,
}

impl Node {
    const fn detached(node_type: NodeType) -> Self {
        Self {
            node_type,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// The node kinds objfit builds documents from.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    Element(ElementData),
    /// [§ 4.11 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
}

/// Arena-backed document tree.
#[derive(Debug, Clone)]
pub struct DomTree {
    /// Index 0 holds the Document node.
    nodes: Vec<Node>,
}

impl DomTree {
    /// A tree holding only its Document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeType::Document)],
        }
    }

    /// The node behind `id`, if it exists.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Add a detached node and return its id. Attach it with
    /// [`DomTree::append_child`].
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        self.nodes.push(Node::detached(node_type));
        NodeId(self.nodes.len() - 1)
    }

    /// [§ 4.2.3 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Make `child` the last child of `parent`. Ids this tree did not
    /// allocate, a child that already has a parent, and the Document node
    /// are left alone.
    ///
    /// [§ 4.2.3 Ensure pre-insertion validity](https://dom.spec.whatwg.org/#concept-node-ensure-pre-insertion-validity)
    /// "If node is a host-including inclusive ancestor of parent, then throw
    /// a HierarchyRequestError". The tree stays acyclic, so
    /// [`DomTree::ancestors`] always ends at a root.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let attachable = child != NodeId::ROOT
            && parent.0 < self.nodes.len()
            && self.get(child).is_some_and(|node| node.parent.is_none())
            && parent != child
            && !self.ancestors(parent).any(|ancestor| ancestor == child);
        if !attachable {
            return;
        }
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// The parent of `id`, of any node type.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    /// [`Node.parentElement`](https://dom.spec.whatwg.org/#dom-node-parentelement)
    ///
    /// "The parentElement getter steps are to return this's parent element."
    #[must_use]
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).filter(|&parent| self.is_element(parent))
    }

    /// Children of `id` in tree order; empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |node| &node.children)
    }

    /// [Inclusive ancestors](https://dom.spec.whatwg.org/#concept-tree-inclusive-ancestor)
    /// minus `id` itself, nearest first, ending at the Document.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&node| self.parent(node))
    }

    /// Every node below `id` in
    /// [tree order](https://dom.spec.whatwg.org/#concept-tree-order).
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> TreeOrder<'_> {
        TreeOrder {
            tree: self,
            pending: self.children(id).iter().rev().copied().collect(),
        }
    }

    /// Whether `id` is an element.
    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        self.as_element(id).is_some()
    }

    /// The element data of `id`, if it is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.get(id)?.node_type {
            NodeType::Element(element) => Some(element),
            NodeType::Document | NodeType::Text(_) => None,
        }
    }

    /// Mutable element data of `id`, if it is an element.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.nodes.get_mut(id.0)?.node_type {
            NodeType::Element(element) => Some(element),
            NodeType::Document | NodeType::Text(_) => None,
        }
    }

    /// The data of `id`, if it is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        match &self.get(id)?.node_type {
            NodeType::Text(text) => Some(text),
            NodeType::Document | NodeType::Element(_) => None,
        }
    }

    /// `document.querySelectorAll("[name]")`: elements carrying the
    /// attribute, in tree order.
    #[must_use]
    pub fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        self.descendants(NodeId::ROOT)
            .filter(|&id| self.as_element(id).is_some_and(|e| e.has_attribute(name)))
            .collect()
    }

    /// [The document element](https://dom.spec.whatwg.org/#document-element):
    /// the first element child of the Document.
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .copied()
            .find(|&id| self.is_element(id))
    }

    /// [The body element](https://html.spec.whatwg.org/multipage/dom.html#the-body-element-2):
    /// the first `body` child of the document element.
    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        let html = self.document_element()?;
        self.children(html).iter().copied().find(|&id| {
            self.as_element(id)
                .is_some_and(|e| e.tag_name.eq_ignore_ascii_case("body"))
        })
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Preorder walk returned by [`DomTree::descendants`].
pub struct TreeOrder<'a> {
    tree: &'a DomTree,
    /// Next node on top.
    pending: Vec<NodeId>,
}

impl Iterator for TreeOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.pending.pop()?;
        self.pending
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
