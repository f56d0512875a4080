//! What a polyfill run applies to.

use objfit_common::warning::warn_once;
use objfit_css::Document;
use objfit_dom::NodeId;
use objfit_engine::FIT_ATTR;

/// The media a run should fit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Target {
    /// Every element carrying `data-object-fit`, in document order.
    #[default]
    All,
    /// One element.
    Node(NodeId),
    /// A collection of elements, such as the result of a selector query.
    Nodes(Vec<NodeId>),
}

impl From<NodeId> for Target {
    fn from(node: NodeId) -> Self {
        Self::Node(node)
    }
}

impl From<Vec<NodeId>> for Target {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self::Nodes(nodes)
    }
}

impl Target {
    /// The elements this target names in `doc`.
    ///
    /// `None` when the target is unusable: a single node that is not an
    /// element, or a collection that is empty or does not start with an
    /// element. Inside an accepted collection, entries that are not elements
    /// are skipped with a warning.
    #[must_use]
    pub fn resolve(&self, doc: &Document) -> Option<Vec<NodeId>> {
        let tree = doc.tree();
        match self {
            Self::All => Some(tree.elements_with_attribute(FIT_ATTR)),
            Self::Node(node) => tree.is_element(*node).then(|| vec![*node]),
            Self::Nodes(nodes) => {
                let first = nodes.first()?;
                if !tree.is_element(*first) {
                    return None;
                }
                Some(
                    nodes
                        .iter()
                        .copied()
                        .filter(|&node| {
                            let element = tree.is_element(node);
                            if !element {
                                warn_once(
                                    "Polyfill",
                                    &format!("skipping non-element target {node:?}"),
                                );
                            }
                            element
                        })
                        .collect(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objfit_css::{DocumentBuilder, Viewport};
    use objfit_dom::ElementData;

    fn doc_with_image() -> (Document, NodeId, NodeId) {
        let mut builder = DocumentBuilder::new(Viewport::new(800.0, 600.0));
        let body = builder.body();
        let img = builder.append(body, ElementData::new("img").with_attribute(FIT_ATTR, ""));
        let text = builder.append_text(body, "caption");
        (builder.finish(), img, text)
    }

    #[test]
    fn all_selects_marked_elements() {
        let (doc, img, _) = doc_with_image();
        assert_eq!(Target::All.resolve(&doc), Some(vec![img]));
    }

    #[test]
    fn single_non_element_is_rejected() {
        let (doc, img, text) = doc_with_image();
        assert_eq!(Target::from(text).resolve(&doc), None);
        assert_eq!(Target::from(NodeId(999)).resolve(&doc), None);
        assert_eq!(Target::from(img).resolve(&doc), Some(vec![img]));
    }

    #[test]
    fn collections_need_a_leading_element() {
        let (doc, img, text) = doc_with_image();
        assert_eq!(Target::Nodes(Vec::new()).resolve(&doc), None);
        assert_eq!(Target::from(vec![text, img]).resolve(&doc), None);
        assert_eq!(
            Target::from(vec![img, text, NodeId(999)]).resolve(&doc),
            Some(vec![img])
        );
    }
}
