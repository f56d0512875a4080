//! Constraint normalization.
//!
//! Absolute positioning and `clientWidth`/`clientHeight` only give usable
//! numbers once the container clips and contains positioned children and
//! the media carries no author constraints on its size or offsets. Both
//! functions overwrite only what differs, so running them again is a no-op.

use objfit_css::Property;
use objfit_dom::NodeId;

use crate::host::StyleHost;

/// Class added to every container the engine has normalized.
pub const MARKER_CLASS: &str = "object-fit-polyfill";

/// Media properties reset before measuring, with their target values.
pub const MEDIA_CONSTRAINTS: [(Property, &str); 12] = [
    (Property::MaxWidth, "none"),
    (Property::MaxHeight, "none"),
    (Property::MinWidth, "0px"),
    (Property::MinHeight, "0px"),
    (Property::Top, "auto"),
    (Property::Right, "auto"),
    (Property::Bottom, "auto"),
    (Property::Left, "auto"),
    (Property::MarginTop, "0px"),
    (Property::MarginRight, "0px"),
    (Property::MarginBottom, "0px"),
    (Property::MarginLeft, "0px"),
];

/// Make `container` a clipping containing block for absolutely positioned
/// media.
///
/// - `position` empty or `static` becomes `relative`
/// - `overflow` other than `hidden` becomes `hidden`
/// - `display` empty or `inline` becomes `block` (`<picture>` wrappers)
/// - a container with no height gets `height: 100%`
/// - [`MARKER_CLASS`] is added once
pub fn normalize_container(host: &mut dyn StyleHost, container: NodeId) {
    let position = host.computed_value(container, Property::Position);
    if position.is_empty() || position == "static" {
        host.write_style(container, Property::Position, "relative");
    }

    if host.computed_value(container, Property::Overflow) != "hidden" {
        host.write_style(container, Property::Overflow, "hidden");
    }

    let display = host.computed_value(container, Property::Display);
    if display.is_empty() || display == "inline" {
        host.write_style(container, Property::Display, "block");
    }

    // Absolutely positioned children do not give the container any height.
    if host.client_size(container).height == 0.0 {
        host.write_style(container, Property::Height, "100%");
    }

    host.add_class(container, MARKER_CLASS);
}

/// Reset every property in [`MEDIA_CONSTRAINTS`] whose computed value
/// differs from its target.
pub fn normalize_media(host: &mut dyn StyleHost, media: NodeId) {
    for (property, target) in MEDIA_CONSTRAINTS {
        if host.computed_value(media, property) != target {
            host.write_style(media, property, target);
        }
    }
}
