//! Replaced content: natural dimensions and load state.
//!
//! [CSS 2.1 § 3.1 Replaced element](https://www.w3.org/TR/CSS2/conform.html#replaced-element)
//!
//! "An element whose content is outside the scope of the CSS formatting
//! model, such as an image, embedded document, or applet."

/// How far a replaced element has progressed in loading its resource.
///
/// Images and media elements expose different readiness signals, so each
/// variant carries the one its element type actually has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// [`HTMLImageElement.complete`](https://html.spec.whatwg.org/multipage/embedded-content.html#dom-img-complete)
    Image {
        /// "The IDL attribute complete must return true if ... the img
        /// element is completely available."
        complete: bool,
    },
    /// [`HTMLMediaElement.readyState`](https://html.spec.whatwg.org/multipage/media.html#dom-media-readystate)
    Video {
        /// `HAVE_NOTHING` (0) through `HAVE_ENOUGH_DATA` (4).
        ready_state: u8,
    },
    /// Content that is available as soon as the element exists (canvas,
    /// embedded SVG, ...).
    Immediate,
}

/// Natural size and load state of a replaced element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplacedContent {
    /// [Natural width](https://html.spec.whatwg.org/multipage/images.html#natural-dimensions) in CSS pixels.
    pub natural_width: f64,
    /// Natural height in CSS pixels.
    pub natural_height: f64,
    /// Readiness of the underlying resource.
    pub load: LoadState,
}

impl ReplacedContent {
    /// A fully loaded image.
    #[must_use]
    pub const fn image(natural_width: f64, natural_height: f64) -> Self {
        Self {
            natural_width,
            natural_height,
            load: LoadState::Image { complete: true },
        }
    }

    /// A video whose metadata has loaded (`HAVE_METADATA`).
    #[must_use]
    pub const fn video(natural_width: f64, natural_height: f64) -> Self {
        Self {
            natural_width,
            natural_height,
            load: LoadState::Video { ready_state: 1 },
        }
    }

    /// Content that needs no loading, such as a canvas bitmap.
    #[must_use]
    pub const fn immediate(natural_width: f64, natural_height: f64) -> Self {
        Self {
            natural_width,
            natural_height,
            load: LoadState::Immediate,
        }
    }

    /// Replace the load state, e.g. to model media that is still fetching.
    #[must_use]
    pub const fn with_load(mut self, load: LoadState) -> Self {
        self.load = load;
        self
    }

    /// [§ 4.8.4.3.1 Natural aspect ratio](https://html.spec.whatwg.org/multipage/images.html)
    ///
    /// `None` when either natural dimension is zero (nothing decoded yet).
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.natural_width > 0.0 && self.natural_height > 0.0)
            .then(|| self.natural_width / self.natural_height)
    }

    /// Mark the resource as loaded: images become `complete`, videos reach
    /// `HAVE_METADATA` if they were below it.
    pub fn finish_loading(&mut self) {
        self.load = match self.load {
            LoadState::Image { .. } => LoadState::Image { complete: true },
            LoadState::Video { ready_state } if ready_state > 0 => {
                LoadState::Video { ready_state }
            }
            LoadState::Video { .. } => LoadState::Video { ready_state: 1 },
            LoadState::Immediate => LoadState::Immediate,
        };
    }
}
