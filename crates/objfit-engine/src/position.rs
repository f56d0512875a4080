//! Position resolution along one axis.
//!
//! [CSS Images 3 § 5.6 'object-position'](https://www.w3.org/TR/css-images-3/#the-object-position)
//!
//! "The object-position property determines the alignment of the replaced
//! element inside its box."
//!
//! The alignment is expressed with an inset and a negative margin on the
//! absolutely positioned media: an inset of `p%` moves the media's edge to
//! `p%` of the container, and a margin of `-p%` of the media's own size
//! pulls that point of the media onto it.

use objfit_css::{Property, format_number, format_px};
use objfit_dom::NodeId;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::host::StyleHost;

/// The position used when none is given.
pub const DEFAULT_POSITION: &str = "50% 50%";

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal: `left` / `right`.
    X,
    /// Vertical: `top` / `bottom`.
    Y,
}

impl Axis {
    /// Keyword naming the start edge.
    #[must_use]
    pub const fn start_keyword(self) -> &'static str {
        match self {
            Self::X => "left",
            Self::Y => "top",
        }
    }

    /// Keyword naming the end edge.
    #[must_use]
    pub const fn end_keyword(self) -> &'static str {
        match self {
            Self::X => "right",
            Self::Y => "bottom",
        }
    }

    /// Inset property of the start edge.
    #[must_use]
    pub const fn start(self) -> Property {
        match self {
            Self::X => Property::Left,
            Self::Y => Property::Top,
        }
    }

    /// Inset property of the end edge.
    #[must_use]
    pub const fn end(self) -> Property {
        match self {
            Self::X => Property::Right,
            Self::Y => Property::Bottom,
        }
    }

    /// Margin property of the start edge.
    #[must_use]
    pub const fn start_margin(self) -> Property {
        match self {
            Self::X => Property::MarginLeft,
            Self::Y => Property::MarginTop,
        }
    }

    /// Margin property of the end edge.
    #[must_use]
    pub const fn end_margin(self) -> Property {
        match self {
            Self::X => Property::MarginRight,
            Self::Y => Property::MarginBottom,
        }
    }

    fn owns_keyword(self, token: &str) -> bool {
        token == self.start_keyword() || token == self.end_keyword()
    }
}

/// Split a position into its horizontal and vertical tokens.
///
/// Extra whitespace is ignored. An empty position is centred. A single token
/// applies to both axes, except a lone edge keyword, which leaves the other
/// axis centred.
#[must_use]
pub fn position_tokens(position: &str) -> (&str, &str) {
    let mut tokens = position.split_whitespace();
    let Some(first) = tokens.next() else {
        return ("50%", "50%");
    };
    if let Some(second) = tokens.next() {
        return (first, second);
    }
    if Axis::X.owns_keyword(first) {
        (first, "center")
    } else if Axis::Y.owns_keyword(first) {
        ("center", first)
    } else {
        (first, first)
    }
}

/// The inset and margin that place the media along one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// The inset property written.
    pub edge: Property,
    /// Its value, e.g. `50%` or `10px`.
    pub offset: String,
    /// The margin property written.
    pub margin_edge: Property,
    /// Its value in pixels.
    pub margin: String,
}

impl Placement {
    fn start(axis: Axis, offset: impl Into<String>, margin: f64) -> Self {
        Self {
            edge: axis.start(),
            offset: offset.into(),
            margin_edge: axis.start_margin(),
            margin: format_px(margin),
        }
    }

    fn end(axis: Axis, offset: impl Into<String>, margin: f64) -> Self {
        Self {
            edge: axis.end(),
            offset: offset.into(),
            margin_edge: axis.end_margin(),
            margin: format_px(margin),
        }
    }
}

/// Leading integer of `token`, the way `parseInt` reads `"37.5%"` as 37.
///
/// Any run of digits is read, however long; only a token with no leading
/// digits yields `None`.
fn leading_integer(token: &str) -> Option<f64> {
    let token = token.trim_start();
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits_end = token[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(token.len(), |i| i + sign_len);
    if digits_end == sign_len {
        return None;
    }
    token[..digits_end]
        .parse()
        .ok()
        .filter(|p: &f64| p.is_finite())
}

/// Compute the placement of media of extent `side` (its `clientWidth` or
/// `clientHeight`) along `axis`.
///
/// In order:
/// 1. the start keyword in either token anchors to the start edge;
/// 2. the end keyword in either token anchors to the end edge;
/// 3. `center` or `50%` centres the media;
/// 4. a percentage `p` anchors to the nearer edge, `p%` from the start when
///    `p < 50`, otherwise `(100 - p)%` from the end;
/// 5. anything else is used verbatim as the start inset.
#[must_use]
pub fn place(axis: Axis, position: &str, side: f64) -> Placement {
    let (x, y) = position_tokens(position);
    let (token, other) = match axis {
        Axis::X => (x, y),
        Axis::Y => (y, x),
    };

    if token == axis.start_keyword() || other == axis.start_keyword() {
        return Placement::start(axis, "0px", 0.0);
    }
    if token == axis.end_keyword() || other == axis.end_keyword() {
        return Placement::end(axis, "0px", 0.0);
    }
    if token == "center" || token == "50%" {
        return Placement::start(axis, "50%", side / -2.0);
    }
    let percentage = token
        .contains('%')
        .then(|| leading_integer(token))
        .flatten();
    if let Some(p) = percentage {
        return if p < 50.0 {
            Placement::start(axis, format!("{}%", format_number(p)), side * (p / -100.0))
        } else {
            let q = 100.0 - p;
            Placement::end(axis, format!("{}%", format_number(q)), side * (q / -100.0))
        };
    }
    Placement::start(axis, token, 0.0)
}

/// Position `media` along `axis` inside its container.
///
/// Only the inset and margin chosen by [`place`] are written; the other edge
/// keeps whatever the normalizer left there.
pub fn resolve_axis(host: &mut dyn StyleHost, axis: Axis, media: NodeId, position: &str) {
    let size = host.client_size(media);
    let side = match axis {
        Axis::X => size.width,
        Axis::Y => size.height,
    };
    let placement = place(axis, position, side);
    fit_trace!("{axis}: '{position}' side={side} -> {placement:?}");
    host.write_style(media, placement.edge, &placement.offset);
    host.write_style(media, placement.margin_edge, &placement.margin);
}
