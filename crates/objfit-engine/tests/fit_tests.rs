//! Integration tests for the fit calculator against a measured document.

use objfit_common::warning::was_warned;
use objfit_css::{Document, DocumentBuilder, Property, Viewport};
use objfit_dom::{ElementData, NodeId, NodeType, ReplacedContent};
use objfit_engine::{
    Axis, FitMode, FitProfile, MARKER_CLASS, StyleHost, apply_fit, apply_fit_with,
    normalize_container, normalize_media,
};

/// Helper: `<div style="width: Wpx; height: Hpx"><img data-object-fit=...></div>`.
/// Returns `(document, container, media)`.
fn fixture(
    container: (u32, u32),
    natural: (f64, f64),
    fit: Option<&str>,
    position: Option<&str>,
) -> (Document, NodeId, NodeId) {
    let mut builder = DocumentBuilder::new(Viewport::new(800.0, 600.0));
    let body = builder.body();
    let div = builder.append_styled(
        body,
        ElementData::new("div"),
        &format!("width: {}px; height: {}px", container.0, container.1),
    );
    let mut img = ElementData::new("img").with_replaced(ReplacedContent::image(natural.0, natural.1));
    if let Some(fit) = fit {
        img.set_attribute("data-object-fit", fit);
    }
    if let Some(position) = position {
        img.set_attribute("data-object-position", position);
    }
    let media = builder.append(div, img);
    (builder.finish(), div, media)
}

fn inline(doc: &Document, node: NodeId, property: Property) -> Option<String> {
    doc.inline_value(node, property).map(str::to_string)
}

fn assert_inline(doc: &Document, node: NodeId, expected: &[(Property, &str)]) {
    for &(property, value) in expected {
        assert_eq!(
            inline(doc, node, property).as_deref(),
            Some(value),
            "{property} on {node:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Fit modes
// ---------------------------------------------------------------------------

#[test]
fn test_cover_wide_media_positions_x() {
    let (mut doc, _, media) = fixture((100, 100), (400.0, 200.0), Some("cover"), None);
    let outcome = apply_fit(&mut doc, media).expect("media has a container");

    assert_eq!(outcome.applied, FitMode::Cover);
    assert_eq!(outcome.positioned, vec![Axis::X]);
    assert_inline(
        &doc,
        media,
        &[
            (Property::Position, "absolute"),
            (Property::Width, "auto"),
            (Property::Height, "100%"),
            (Property::Top, "auto"),
            (Property::MarginTop, "0px"),
            (Property::Left, "50%"),
            (Property::MarginLeft, "-100px"),
        ],
    );
    assert_eq!(doc.client_width(media), 200.0);
}

#[test]
fn test_cover_tall_media_positions_y() {
    let (mut doc, _, media) = fixture((100, 100), (200.0, 400.0), None, None);
    let outcome = apply_fit(&mut doc, media).expect("media has a container");

    assert_eq!(outcome.requested, FitMode::Cover);
    assert_eq!(outcome.positioned, vec![Axis::Y]);
    assert_inline(
        &doc,
        media,
        &[
            (Property::Width, "100%"),
            (Property::Height, "auto"),
            (Property::Left, "auto"),
            (Property::MarginLeft, "0px"),
            (Property::Top, "50%"),
            (Property::MarginTop, "-100px"),
        ],
    );
}

#[test]
fn test_contain_narrow_media() {
    let (mut doc, container, media) = fixture((100, 100), (50.0, 150.0), Some("contain"), None);
    let outcome = apply_fit(&mut doc, media).expect("media has a container");

    assert_eq!(outcome.positioned, vec![Axis::X]);
    assert_inline(
        &doc,
        media,
        &[
            (Property::Width, "auto"),
            (Property::Height, "100%"),
            (Property::Left, "50%"),
            (Property::MarginLeft, "-16.5px"),
        ],
    );
    assert_eq!(doc.client_width(media), 33.0);
    assert!(doc.client_height(media) <= doc.client_height(container));
}

#[test]
fn test_contain_wide_media_letterboxes_vertically() {
    let (mut doc, _, media) = fixture((100, 100), (400.0, 200.0), Some("contain"), None);
    let outcome = apply_fit(&mut doc, media).expect("media has a container");

    assert_eq!(outcome.positioned, vec![Axis::Y]);
    assert_inline(
        &doc,
        media,
        &[
            (Property::Width, "100%"),
            (Property::Height, "auto"),
            (Property::Top, "50%"),
            (Property::MarginTop, "-25px"),
        ],
    );
}

#[test]
fn test_none_with_keyword_position() {
    let (mut doc, _, media) = fixture((100, 100), (300.0, 200.0), Some("none"), Some("bottom left"));
    let outcome = apply_fit(&mut doc, media).expect("media has a container");

    assert_eq!(outcome.positioned, vec![Axis::X, Axis::Y]);
    assert_inline(
        &doc,
        media,
        &[
            (Property::Width, "auto"),
            (Property::Height, "auto"),
            (Property::Left, "0px"),
            (Property::MarginLeft, "0px"),
            (Property::Bottom, "0px"),
            (Property::MarginBottom, "0px"),
        ],
    );
    assert_eq!(inline(&doc, media, Property::Top), None);
    assert_eq!(inline(&doc, media, Property::Right), None);
    assert_eq!(doc.client_width(media), 300.0);
    assert_eq!(doc.client_height(media), 200.0);
}

#[test]
fn test_percentage_position() {
    let (mut doc, _, media) = fixture((100, 100), (50.0, 50.0), Some("none"), Some("25% 75%"));
    let _ = apply_fit(&mut doc, media);

    assert_inline(
        &doc,
        media,
        &[
            (Property::Left, "25%"),
            (Property::MarginLeft, "-12.5px"),
            (Property::Bottom, "25%"),
            (Property::MarginBottom, "-12.5px"),
        ],
    );
}

#[test]
fn test_huge_percentage_anchors_to_end_edge() {
    let (mut doc, _, media) =
        fixture((100, 100), (40.0, 20.0), Some("none"), Some("3000000000% 50%"));
    let _ = apply_fit(&mut doc, media);

    assert_inline(
        &doc,
        media,
        &[
            (Property::Right, "-2999999900%"),
            (Property::MarginRight, "1199999960px"),
            (Property::Top, "50%"),
            (Property::MarginTop, "-10px"),
        ],
    );
    assert_eq!(inline(&doc, media, Property::Left), None);
}

#[test]
fn test_single_length_applies_to_both_axes() {
    let (mut doc, _, media) = fixture((100, 100), (50.0, 50.0), Some("none"), Some("50px"));
    let _ = apply_fit(&mut doc, media);

    assert_inline(
        &doc,
        media,
        &[(Property::Left, "50px"), (Property::Top, "50px")],
    );
}

#[test]
fn test_fill_stretches_both_axes() {
    let (mut doc, _, media) = fixture((120, 80), (400.0, 200.0), Some("fill"), Some("left top"));
    let outcome = apply_fit(&mut doc, media).expect("media has a container");

    assert!(outcome.positioned.is_empty());
    assert_inline(
        &doc,
        media,
        &[
            (Property::Width, "100%"),
            (Property::Height, "100%"),
        ],
    );
    assert_eq!(inline(&doc, media, Property::Left), None);
    assert_eq!(inline(&doc, media, Property::Top), None);
    assert_eq!(doc.client_width(media), 120.0);
    assert_eq!(doc.client_height(media), 80.0);
}

#[test]
fn test_scale_down_small_media_keeps_natural_size() {
    let (mut doc, _, media) = fixture((100, 100), (40.0, 20.0), Some("scale-down"), None);
    let outcome = apply_fit(&mut doc, media).expect("media has a container");

    assert_eq!(outcome.requested, FitMode::ScaleDown);
    assert_eq!(outcome.applied, FitMode::None);
    assert_inline(
        &doc,
        media,
        &[
            (Property::Width, "auto"),
            (Property::Height, "auto"),
            (Property::Left, "50%"),
            (Property::MarginLeft, "-20px"),
            (Property::Top, "50%"),
            (Property::MarginTop, "-10px"),
        ],
    );
}

#[test]
fn test_scale_down_large_media_is_contained() {
    let (mut doc, _, media) = fixture((100, 100), (400.0, 200.0), Some("scale-down"), None);
    let outcome = apply_fit(&mut doc, media).expect("media has a container");

    assert_eq!(outcome.applied, FitMode::Contain);
    assert_eq!(doc.client_width(media), 100.0);
    assert_eq!(doc.client_height(media), 50.0);
}

#[test]
fn test_unknown_fit_falls_back_to_cover() {
    let (mut doc, _, media) = fixture((100, 100), (400.0, 200.0), Some("stretch"), None);
    let outcome = apply_fit(&mut doc, media).expect("media has a container");

    assert_eq!(outcome.applied, FitMode::Cover);
    assert!(was_warned("Fit", "unknown object-fit 'stretch', using cover"));
    assert_inline(&doc, media, &[(Property::MarginLeft, "-100px")]);
}

#[test]
fn test_empty_fit_attribute_means_cover() {
    let (mut doc, _, media) = fixture((100, 100), (400.0, 200.0), Some(""), Some("  "));
    let outcome = apply_fit(&mut doc, media).expect("media has a container");

    assert_eq!(outcome.requested, FitMode::Cover);
    assert_eq!(outcome.position, "50% 50%");
}

// ---------------------------------------------------------------------------
// Basic profile
// ---------------------------------------------------------------------------

#[test]
fn test_basic_profile_ignores_attributes() {
    let (mut doc, _, media) = fixture((100, 100), (400.0, 200.0), Some("none"), Some("left top"));
    let outcome = apply_fit_with(&mut doc, media, FitProfile::Basic).expect("media has a container");

    assert_eq!(outcome.applied, FitMode::Cover);
    assert_inline(
        &doc,
        media,
        &[
            (Property::Top, "0px"),
            (Property::MarginTop, "0px"),
            (Property::Left, "50%"),
            (Property::MarginLeft, "-100px"),
        ],
    );
}

#[test]
fn test_basic_profile_tall_media() {
    let (mut doc, _, media) = fixture((100, 100), (200.0, 400.0), None, None);
    let _ = apply_fit_with(&mut doc, media, FitProfile::Basic);

    assert_inline(
        &doc,
        media,
        &[
            (Property::Width, "100%"),
            (Property::Height, "auto"),
            (Property::Left, "0px"),
            (Property::MarginLeft, "0px"),
            (Property::Top, "50%"),
            (Property::MarginTop, "-100px"),
        ],
    );
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn test_container_is_normalized() {
    let (mut doc, container, media) = fixture((100, 100), (400.0, 200.0), None, None);
    let _ = apply_fit(&mut doc, media);

    assert_inline(
        &doc,
        container,
        &[(Property::Position, "relative"), (Property::Overflow, "hidden")],
    );
    // Already block-level with a height: untouched.
    assert_eq!(inline(&doc, container, Property::Display), None);
    assert_eq!(
        doc.tree().as_element(container).and_then(|e| e.attribute("class")),
        Some(MARKER_CLASS)
    );
}

#[test]
fn test_inline_container_without_height() {
    let mut builder = DocumentBuilder::new(Viewport::new(800.0, 600.0));
    let body = builder.body();
    let picture = builder.append_styled(
        body,
        ElementData::new("picture").with_attribute("class", "test"),
        "position: absolute; width: 100px",
    );
    let media = builder.append_styled(
        picture,
        ElementData::new("img").with_replaced(ReplacedContent::image(40.0, 40.0)),
        "position: absolute",
    );
    let mut doc = builder.finish();

    normalize_container(&mut doc, picture);
    normalize_container(&mut doc, picture);

    assert_inline(
        &doc,
        picture,
        &[
            (Property::Position, "absolute"),
            (Property::Display, "block"),
            (Property::Height, "100%"),
        ],
    );
    assert_eq!(
        doc.tree().as_element(picture).and_then(|e| e.attribute("class")),
        Some("test object-fit-polyfill")
    );
    assert_eq!(doc.parent_of(media), Some(picture));
}

#[test]
fn test_media_constraints_are_reset() {
    let mut builder = DocumentBuilder::new(Viewport::new(800.0, 600.0));
    let body = builder.body();
    let media = builder.append_styled(
        body,
        ElementData::new("video").with_replaced(ReplacedContent::video(640.0, 360.0)),
        "max-width: 50px; min-height: 10px; top: 5px; margin-left: 3px; width: 20px",
    );
    let mut doc = builder.finish();

    normalize_media(&mut doc, media);

    assert_inline(
        &doc,
        media,
        &[
            (Property::MaxWidth, "none"),
            (Property::MinHeight, "0px"),
            (Property::Top, "auto"),
            (Property::MarginLeft, "0px"),
            (Property::Width, "20px"),
        ],
    );
    // Properties already at their target are not written.
    assert_eq!(inline(&doc, media, Property::MaxHeight), None);
}

#[test]
fn test_media_without_parent_element_is_not_fitted() {
    let mut doc = DocumentBuilder::new(Viewport::new(800.0, 600.0)).finish();
    let orphan = doc.tree_mut().alloc(NodeType::Element(
        ElementData::new("img").with_replaced(ReplacedContent::image(10.0, 10.0)),
    ));

    assert_eq!(apply_fit(&mut doc, orphan), None);
    assert!(doc.inline_style(orphan).is_some_and(|s| s.is_empty()));
}

#[test]
fn test_refit_is_idempotent() {
    let (mut doc, container, media) = fixture((160, 90), (300.0, 300.0), Some("cover"), Some("30% 80%"));
    let _ = apply_fit(&mut doc, media);
    let first = (
        doc.inline_style(media).map(|s| s.css_text()),
        doc.inline_style(container).map(|s| s.css_text()),
    );
    let _ = apply_fit(&mut doc, media);
    let second = (
        doc.inline_style(media).map(|s| s.css_text()),
        doc.inline_style(container).map(|s| s.css_text()),
    );
    assert_eq!(first, second);
}
