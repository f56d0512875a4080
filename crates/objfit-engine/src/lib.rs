//! `object-fit` / `object-position` emulation.
//!
//! [CSS Images Level 3 § 5](https://www.w3.org/TR/css-images-3/#sizing-objects)
//!
//! On an engine without native `object-fit`, the same picture can be
//! produced by absolutely positioning the media inside a clipping container
//! and choosing its width, height, insets and margins. This crate computes
//! those styles.
//!
//! # Components
//!
//! - [`normalize`]: neutralizes container and media styles that would skew
//!   measurement.
//! - [`position`]: turns a two-token position into an inset and margin along
//!   one axis.
//! - [`fit`]: picks the bound axis for each fit mode and drives the other two.
//!
//! All three talk to the document through [`StyleHost`]. Nothing is cached
//! between calls, so fitting the same media again (on resize, say) yields
//! the same styles.
//!
//! # Features
//!
//! - `fit-trace`: print every branch decision to stderr.

/// Print a fit decision when the `fit-trace` feature is enabled.
macro_rules! fit_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "fit-trace")]
        eprintln!("[FIT] {}", format_args!($($arg)*));
    };
}

/// The fit calculator per [CSS Images 3 § 5.5](https://www.w3.org/TR/css-images-3/#the-object-fit).
pub mod fit;
/// The engine's view of a document.
pub mod host;
/// Container and media constraint normalization.
pub mod normalize;
/// Axis positioning per [CSS Images 3 § 5.6](https://www.w3.org/TR/css-images-3/#the-object-position).
pub mod position;

pub use fit::{
    FIT_ATTR, FitMode, FitOutcome, FitProfile, POSITION_ATTR, apply_fit, apply_fit_with,
    requested_fit, requested_position,
};
pub use host::StyleHost;
pub use normalize::{MARKER_CLASS, MEDIA_CONSTRAINTS, normalize_container, normalize_media};
pub use position::{Axis, DEFAULT_POSITION, Placement, place, position_tokens, resolve_axis};
