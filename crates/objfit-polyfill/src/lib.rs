//! Dispatch layer for objfit.
//!
//! Finds the media to fit, skips what the engine already handles natively,
//! and holds back media whose natural size is not known yet until its load
//! event. The fitting itself is done by [`objfit_engine`].
//!
//! ```
//! use objfit_css::{DocumentBuilder, Viewport};
//! use objfit_dom::{ElementData, ReplacedContent};
//! use objfit_polyfill::{NativeSupport, Polyfill, Target};
//!
//! let mut builder = DocumentBuilder::new(Viewport::new(800.0, 600.0));
//! let body = builder.body();
//! let frame = builder.append_styled(body, ElementData::new("div"), "width: 100px; height: 100px");
//! let _ = builder.append(
//!     frame,
//!     ElementData::new("img")
//!         .with_attribute("data-object-fit", "cover")
//!         .with_replaced(ReplacedContent::image(400.0, 200.0)),
//! );
//! let mut doc = builder.finish();
//!
//! let mut polyfill = Polyfill::new(NativeSupport::None);
//! assert!(polyfill.polyfill(&mut doc, Target::All));
//! ```

/// Dispatching targets to the fit engine.
pub mod dispatch;
/// Load readiness of media.
pub mod readiness;
/// Native `object-fit` support.
pub mod support;
/// Run targets.
pub mod target;

pub use dispatch::{Dispatch, Dispatched, Polyfill};
pub use readiness::Readiness;
pub use support::NativeSupport;
pub use target::Target;
