//! Native `object-fit` support.

use objfit_dom::ElementData;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// How much of `object-fit` the host engine already implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum NativeSupport {
    /// Every replaced element honours `object-fit`; nothing to emulate.
    Full,
    /// Only `img` honours it (Edge 16 to 18); video and the other
    /// replaced elements still need emulating.
    ImagesOnly,
    /// No support at all.
    #[default]
    None,
}

impl NativeSupport {
    /// Classify an engine from whether its style declarations know
    /// `object-fit` and its user agent string.
    ///
    /// Edge from version 16 reports the property but applies it to
    /// `img` only.
    #[must_use]
    pub fn detect(has_object_fit: bool, user_agent: &str) -> Self {
        if !has_object_fit {
            return Self::None;
        }
        if edge_version(user_agent).is_some_and(|version| version >= 16) {
            Self::ImagesOnly
        } else {
            Self::Full
        }
    }

    /// Whether `element` still needs emulating.
    #[must_use]
    pub fn needs_polyfill(self, element: &ElementData) -> bool {
        match self {
            Self::Full => false,
            Self::ImagesOnly => !element.is_image(),
            Self::None => true,
        }
    }
}

/// The two-digit major version following `Edge/` in a user agent string.
fn edge_version(user_agent: &str) -> Option<u32> {
    let (_, rest) = user_agent.split_once("Edge/")?;
    let digits = rest.get(..2)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) || !rest[2..].starts_with('.') {
        return None;
    }
    digits.parse().ok()
}
