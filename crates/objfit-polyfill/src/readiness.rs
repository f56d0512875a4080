//! Whether media has loaded far enough to be measured.
//!
//! [HTML § 4.8.4.3 `img.complete`](https://html.spec.whatwg.org/multipage/embedded-content.html#dom-img-complete)
//! [HTML § 4.8.11.7 `readyState`](https://html.spec.whatwg.org/multipage/media.html#ready-states)
//!
//! Measuring before the natural size is known would size the media as an
//! empty box, so unready media waits for its load event.

use objfit_dom::{ElementData, LoadState, ReplacedContent};

/// Something that can say whether its natural size is known.
pub trait Readiness {
    /// True once the natural dimensions can be trusted.
    fn is_ready(&self) -> bool;
}

impl Readiness for LoadState {
    fn is_ready(&self) -> bool {
        match *self {
            Self::Image { complete } => complete,
            // HAVE_METADATA or later
            Self::Video { ready_state } => ready_state > 0,
            Self::Immediate => true,
        }
    }
}

impl Readiness for ReplacedContent {
    fn is_ready(&self) -> bool {
        self.load.is_ready()
    }
}

/// Elements without replaced content (a `picture`, a `div` with a
/// background) have nothing to wait for.
impl Readiness for ElementData {
    fn is_ready(&self) -> bool {
        self.replaced.as_ref().is_none_or(Readiness::is_ready)
    }
}
