//! The dispatch layer: decides which media to fit and when.

use std::collections::BTreeSet;

use objfit_css::{Document, Viewport};
use objfit_dom::NodeId;
use objfit_engine::{FitOutcome, FitProfile, apply_fit_with};
use serde::Serialize;

use crate::readiness::Readiness;
use crate::support::NativeSupport;
use crate::target::Target;

/// What happened to one target of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Dispatch {
    /// Fitted immediately.
    Fitted(FitOutcome),
    /// Not loaded yet; will be fitted by [`Polyfill::on_media_loaded`].
    Deferred,
    /// Handled natively, or nothing to fit into.
    Skipped,
}

/// A target paired with what the run did to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    /// The media element.
    pub node: NodeId,
    /// What was done.
    pub dispatch: Dispatch,
}

/// Drives the fit engine over a document.
///
/// Holds the engine's native support, which is fixed for its lifetime, and
/// the set of media waiting for their load event.
#[derive(Debug, Clone, Default)]
pub struct Polyfill {
    support: NativeSupport,
    profile: FitProfile,
    pending: BTreeSet<NodeId>,
}

impl Polyfill {
    /// A polyfill for an engine with the given native support, using the
    /// full fit profile.
    #[must_use]
    pub fn new(support: NativeSupport) -> Self {
        Self {
            support,
            ..Self::default()
        }
    }

    /// Use `profile` for every fit.
    #[must_use]
    pub fn with_profile(mut self, profile: FitProfile) -> Self {
        self.profile = profile;
        self
    }

    /// The native support this polyfill was built for.
    #[must_use]
    pub const fn support(&self) -> NativeSupport {
        self.support
    }

    /// The fit profile in use.
    #[must_use]
    pub const fn profile(&self) -> FitProfile {
        self.profile
    }

    /// Whether `node` is waiting for its load event.
    #[must_use]
    pub fn is_pending(&self, node: NodeId) -> bool {
        self.pending.contains(&node)
    }

    /// Media waiting for their load event, in tree-index order.
    pub fn pending(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.pending.iter().copied()
    }

    /// Fit `target` and report whether it was accepted.
    ///
    /// Returns `false` without touching the document when the engine
    /// supports `object-fit` natively or the target is unusable (see
    /// [`Target::resolve`]).
    pub fn polyfill(&mut self, doc: &mut Document, target: impl Into<Target>) -> bool {
        self.run(doc, target).is_some()
    }

    /// Like [`Polyfill::polyfill`], reporting what happened to each target.
    pub fn run(&mut self, doc: &mut Document, target: impl Into<Target>) -> Option<Vec<Dispatched>> {
        if self.support == NativeSupport::Full {
            return None;
        }
        let nodes = target.into().resolve(doc)?;
        Some(
            nodes
                .into_iter()
                .map(|node| Dispatched {
                    node,
                    dispatch: self.dispatch(doc, node),
                })
                .collect(),
        )
    }

    fn dispatch(&mut self, doc: &mut Document, node: NodeId) -> Dispatch {
        let Some(element) = doc.tree().as_element(node) else {
            return Dispatch::Skipped;
        };
        if !self.support.needs_polyfill(element) {
            return Dispatch::Skipped;
        }
        if !element.is_ready() {
            let _ = self.pending.insert(node);
            return Dispatch::Deferred;
        }
        let _ = self.pending.remove(&node);
        apply_fit_with(doc, node, self.profile).map_or(Dispatch::Skipped, Dispatch::Fitted)
    }

    /// [HTML § `load`](https://html.spec.whatwg.org/multipage/indices.html#event-load)
    /// / [`loadedmetadata`](https://html.spec.whatwg.org/multipage/media.html#event-media-loadedmetadata)
    ///
    /// The resource behind `node` has loaded. If `node` was deferred, mark it
    /// loaded and fit it. Each deferral is answered once.
    pub fn on_media_loaded(&mut self, doc: &mut Document, node: NodeId) -> Option<FitOutcome> {
        if !self.pending.remove(&node) {
            return None;
        }
        if let Some(content) = doc
            .tree_mut()
            .as_element_mut(node)
            .and_then(|element| element.replaced.as_mut())
        {
            content.finish_loading();
        }
        apply_fit_with(doc, node, self.profile)
    }

    /// [HTML § `DOMContentLoaded`](https://html.spec.whatwg.org/multipage/indices.html#event-domcontentloaded)
    ///
    /// Fit every `[data-object-fit]` element.
    pub fn on_dom_content_loaded(&mut self, doc: &mut Document) -> bool {
        self.polyfill(doc, Target::All)
    }

    /// [CSSOM View § `resize`](https://drafts.csswg.org/cssom-view/#eventdef-window-resize)
    ///
    /// Resize the viewport, then refit every `[data-object-fit]` element.
    pub fn on_resize(&mut self, doc: &mut Document, viewport: Viewport) -> bool {
        doc.set_viewport(viewport);
        self.polyfill(doc, Target::All)
    }
}
