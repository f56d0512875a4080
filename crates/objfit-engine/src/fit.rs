//! The fit calculator.
//!
//! [CSS Images 3 § 5.5 'object-fit'](https://www.w3.org/TR/css-images-3/#the-object-fit)
//!
//! "The object-fit property specifies how the contents of a replaced element
//! should be fitted to the box established by its used height and width."
//!
//! Every mode starts from the same hypothesis, `position: absolute;
//! height: 100%; width: auto`, and measures the media in that state. Whether
//! the height-bound media is wider or narrower than the container decides
//! which axis is bound and which one overflows (or letterboxes) and needs
//! positioning.

use objfit_common::warning::warn_once;
use objfit_css::Property;
use objfit_dom::NodeId;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::host::StyleHost;
use crate::normalize::{normalize_container, normalize_media};
use crate::position::{Axis, DEFAULT_POSITION, resolve_axis};

/// Attribute holding the requested fit mode.
pub const FIT_ATTR: &str = "data-object-fit";

/// Attribute holding the requested position.
pub const POSITION_ATTR: &str = "data-object-position";

/// [§ 5.5](https://www.w3.org/TR/css-images-3/#the-object-fit)
/// `fill | contain | cover | none | scale-down`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// "The replaced content is sized to fill the element's content box. The
    /// entire object will completely fill the box. If the object's concrete
    /// object size does not match that of the box, the object will be
    /// stretched to fit."
    Fill,
    /// "The replaced content is scaled to maintain its aspect ratio while
    /// fitting within the element's content box."
    Contain,
    /// "The replaced content is sized to maintain its aspect ratio while
    /// filling the element's entire content box."
    #[default]
    Cover,
    /// "The replaced content is not resized to fit inside the element's
    /// content box."
    None,
    /// "Size the content as if 'none' or 'contain' were specified, whichever
    /// would result in a smaller concrete object size."
    ScaleDown,
}

/// Which rules the calculator follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FitProfile {
    /// Every fit mode, honouring the requested position.
    #[default]
    Full,
    /// Always `cover`, always centred; the fit and position attributes are
    /// ignored.
    Basic,
}

/// What a call to [`apply_fit`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FitOutcome {
    /// The mode read from the media (or the default).
    pub requested: FitMode,
    /// The mode whose rules were applied. Differs from `requested` only for
    /// `scale-down`, which resolves to `none` or `contain`.
    pub applied: FitMode,
    /// The position the axes were resolved with.
    pub position: String,
    /// Axes that received an inset and margin, in resolution order.
    pub positioned: Vec<Axis>,
    /// The container the media was fitted into.
    #[serde(skip)]
    pub container: NodeId,
}

/// Read the requested fit mode from `media`.
///
/// A missing or empty attribute means `cover`. An unknown value also means
/// `cover`, with a warning.
#[must_use]
pub fn requested_fit(host: &dyn StyleHost, media: NodeId) -> FitMode {
    let raw = host.attribute(media, FIT_ATTR).unwrap_or_default();
    let raw = raw.trim();
    if raw.is_empty() {
        return FitMode::default();
    }
    raw.parse().unwrap_or_else(|_| {
        warn_once("Fit", &format!("unknown object-fit '{raw}', using cover"));
        FitMode::default()
    })
}

/// Read the requested position from `media`, defaulting to `50% 50%`.
#[must_use]
pub fn requested_position(host: &dyn StyleHost, media: NodeId) -> String {
    host.attribute(media, POSITION_ATTR)
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .unwrap_or_else(|| DEFAULT_POSITION.to_string())
}

/// Fit `media` into its parent element using [`FitProfile::Full`].
///
/// Returns `None`, touching nothing, when `media` has no parent element.
pub fn apply_fit(host: &mut dyn StyleHost, media: NodeId) -> Option<FitOutcome> {
    apply_fit_with(host, media, FitProfile::Full)
}

/// Fit `media` into its parent element following `profile`.
pub fn apply_fit_with(
    host: &mut dyn StyleHost,
    media: NodeId,
    profile: FitProfile,
) -> Option<FitOutcome> {
    let container = host.parent_of(media)?;

    normalize_container(host, container);
    normalize_media(host, media);

    host.write_style(media, Property::Position, "absolute");
    host.write_style(media, Property::Height, "100%");
    host.write_style(media, Property::Width, "auto");

    let outcome = match profile {
        FitProfile::Full => fit_full(host, media, container),
        FitProfile::Basic => fit_basic(host, media, container),
    };
    fit_trace!(
        "{media:?} requested={} applied={} axes={:?}",
        outcome.requested,
        outcome.applied,
        outcome.positioned
    );
    Some(outcome)
}

fn fit_full(host: &mut dyn StyleHost, media: NodeId, container: NodeId) -> FitOutcome {
    let requested = requested_fit(host, media);
    let position = requested_position(host, media);

    let applied = if requested == FitMode::ScaleDown {
        scale_down(host, media, container)
    } else {
        requested
    };

    let positioned = match applied {
        FitMode::Fill => {
            host.write_style(media, Property::Width, "100%");
            host.write_style(media, Property::Height, "100%");
            Vec::new()
        }
        FitMode::None | FitMode::ScaleDown => {
            host.write_style(media, Property::Width, "auto");
            host.write_style(media, Property::Height, "auto");
            resolve_axis(host, Axis::X, media, &position);
            resolve_axis(host, Axis::Y, media, &position);
            vec![Axis::X, Axis::Y]
        }
        FitMode::Cover | FitMode::Contain => {
            let media_width = host.client_size(media).width;
            let container_width = host.client_size(container).width;
            fit_trace!("{applied}: media width {media_width} vs container {container_width}");
            let height_bound = if applied == FitMode::Cover {
                media_width > container_width
            } else {
                media_width < container_width
            };
            if height_bound {
                host.write_style(media, Property::Top, "auto");
                host.write_style(media, Property::MarginTop, "0");
                resolve_axis(host, Axis::X, media, &position);
                vec![Axis::X]
            } else {
                host.write_style(media, Property::Width, "100%");
                host.write_style(media, Property::Height, "auto");
                host.write_style(media, Property::Left, "auto");
                host.write_style(media, Property::MarginLeft, "0");
                resolve_axis(host, Axis::Y, media, &position);
                vec![Axis::Y]
            }
        }
    };

    FitOutcome {
        requested,
        applied,
        position,
        positioned,
        container,
    }
}

/// Measure `media` at its natural size: if it is strictly smaller than the
/// container on both axes it keeps that size (`none`), otherwise it is
/// contained. Leaves the media's height ready for the chosen mode.
fn scale_down(host: &mut dyn StyleHost, media: NodeId, container: NodeId) -> FitMode {
    host.write_style(media, Property::Height, "auto");
    let natural = host.client_size(media);
    let bounds = host.client_size(container);
    if natural.width < bounds.width && natural.height < bounds.height {
        FitMode::None
    } else {
        host.write_style(media, Property::Height, "100%");
        FitMode::Contain
    }
}

/// Cover, centred: position the overflowing axis at 50% and pin the other
/// one to the start edge.
fn fit_basic(host: &mut dyn StyleHost, media: NodeId, container: NodeId) -> FitOutcome {
    let position = DEFAULT_POSITION.to_string();
    let positioned = if host.client_size(media).width > host.client_size(container).width {
        host.write_style(media, Property::Top, "0");
        host.write_style(media, Property::MarginTop, "0");
        resolve_axis(host, Axis::X, media, &position);
        vec![Axis::X]
    } else {
        host.write_style(media, Property::Width, "100%");
        host.write_style(media, Property::Height, "auto");
        host.write_style(media, Property::Left, "0");
        host.write_style(media, Property::MarginLeft, "0");
        resolve_axis(host, Axis::Y, media, &position);
        vec![Axis::Y]
    };
    FitOutcome {
        requested: FitMode::Cover,
        applied: FitMode::Cover,
        position,
        positioned,
        container,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn fit_modes_use_css_keywords() {
        let names: Vec<String> = FitMode::iter().map(|mode| mode.to_string()).collect();
        assert_eq!(names, ["fill", "contain", "cover", "none", "scale-down"]);
        assert_eq!("Scale-Down".parse::<FitMode>(), Ok(FitMode::ScaleDown));
        assert!("stretch".parse::<FitMode>().is_err());
    }

    #[test]
    fn profiles_parse_from_names() {
        assert_eq!("basic".parse::<FitProfile>(), Ok(FitProfile::Basic));
        assert_eq!(FitProfile::default(), FitProfile::Full);
    }
}
