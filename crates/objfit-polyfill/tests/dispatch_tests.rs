//! Integration tests for the dispatch layer.

use objfit_css::{Document, DocumentBuilder, Property, Viewport};
use objfit_dom::{ElementData, LoadState, NodeId, ReplacedContent};
use objfit_engine::{Axis, FitMode, FitProfile, MARKER_CLASS};
use objfit_polyfill::{Dispatch, NativeSupport, Polyfill, Target};

/// The four kinds of media a page typically marks up.
struct Page {
    doc: Document,
    img: NodeId,
    picture_img: NodeId,
    video: NodeId,
    canvas: NodeId,
    caption: NodeId,
}

fn container(builder: &mut DocumentBuilder) -> NodeId {
    let body = builder.body();
    builder.append_styled(
        body,
        ElementData::new("div").with_attribute("class", "container"),
        "width: 200px; height: 100px",
    )
}

/// Helper: one container per media kind, plus a text node.
fn page() -> Page {
    let mut builder = DocumentBuilder::new(Viewport::new(800.0, 600.0));

    let first = container(&mut builder);
    let img = builder.append(
        first,
        ElementData::new("img")
            .with_attribute("data-object-fit", "")
            .with_replaced(ReplacedContent::image(400.0, 300.0)),
    );

    let second = container(&mut builder);
    let picture = builder.append(second, ElementData::new("picture"));
    let picture_img = builder.append(
        picture,
        ElementData::new("img")
            .with_attribute("data-object-fit", "")
            .with_replaced(ReplacedContent::image(640.0, 480.0)),
    );

    let third = container(&mut builder);
    let video = builder.append(
        third,
        ElementData::new("video")
            .with_attribute("data-object-fit", "")
            .with_replaced(ReplacedContent::video(1280.0, 720.0)),
    );

    let fourth = container(&mut builder);
    let canvas = builder.append(
        fourth,
        ElementData::new("canvas")
            .with_attribute("data-object-fit", "")
            .with_replaced(ReplacedContent::immediate(300.0, 150.0)),
    );
    let caption = builder.append_text(fourth, "caption");

    Page {
        doc: builder.finish(),
        img,
        picture_img,
        video,
        canvas,
        caption,
    }
}

fn marked(doc: &Document) -> usize {
    doc.tree()
        .descendants(NodeId::ROOT)
        .filter(|&id| doc.tree().as_element(id).is_some_and(|e| e.has_class(MARKER_CLASS)))
        .count()
}

fn has_marker(doc: &Document, node: NodeId) -> bool {
    doc.tree().as_element(node).is_some_and(|e| e.has_class(MARKER_CLASS))
}

fn parent(doc: &Document, node: NodeId) -> NodeId {
    doc.tree().parent(node).expect("media has a parent")
}

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

#[test]
fn test_no_target_runs_on_every_marked_element() {
    let mut page = page();
    let mut polyfill = Polyfill::new(NativeSupport::None);

    assert!(polyfill.polyfill(&mut page.doc, Target::All));
    assert_eq!(marked(&page.doc), 4);
    let picture = parent(&page.doc, page.picture_img);
    assert!(has_marker(&page.doc, picture));
    assert_eq!(page.doc.inline_value(picture, Property::Display), Some("block"));
}

#[test]
fn test_single_element() {
    let mut page = page();
    let mut polyfill = Polyfill::new(NativeSupport::None);

    assert!(polyfill.polyfill(&mut page.doc, page.img));
    assert_eq!(marked(&page.doc), 1);
    assert!(has_marker(&page.doc, parent(&page.doc, page.img)));
}

#[test]
fn test_collection_of_elements() {
    let mut page = page();
    let mut polyfill = Polyfill::new(NativeSupport::None);

    assert!(polyfill.polyfill(&mut page.doc, vec![page.img, page.picture_img]));
    assert_eq!(marked(&page.doc), 2);
}

#[test]
fn test_collection_skips_invalid_entries() {
    let mut page = page();
    let mut polyfill = Polyfill::new(NativeSupport::None);

    let report = polyfill
        .run(&mut page.doc, vec![page.video, page.canvas, page.caption])
        .expect("collection starts with an element");
    assert_eq!(report.len(), 2);
    assert_eq!(marked(&page.doc), 2);
}

#[test]
fn test_invalid_single_target_returns_false() {
    let mut page = page();
    let before = page.doc.clone();
    let mut polyfill = Polyfill::new(NativeSupport::None);

    assert!(!polyfill.polyfill(&mut page.doc, page.caption));
    assert!(!polyfill.polyfill(&mut page.doc, NodeId(10_000)));
    assert_eq!(marked(&page.doc), 0);
    assert_eq!(
        page.doc.inline_style(page.img).map(ToString::to_string),
        before.inline_style(page.img).map(ToString::to_string)
    );
}

#[test]
fn test_empty_or_malformed_collection_returns_false() {
    let mut page = page();
    let mut polyfill = Polyfill::new(NativeSupport::None);

    assert!(!polyfill.polyfill(&mut page.doc, Target::Nodes(Vec::new())));
    assert!(!polyfill.polyfill(&mut page.doc, vec![page.caption, page.img]));
    assert_eq!(marked(&page.doc), 0);
}

// ---------------------------------------------------------------------------
// Native support
// ---------------------------------------------------------------------------

#[test]
fn test_full_support_does_nothing() {
    let mut page = page();
    let mut polyfill = Polyfill::new(NativeSupport::Full);

    assert!(!polyfill.polyfill(&mut page.doc, Target::All));
    assert!(!polyfill.polyfill(&mut page.doc, page.video));
    assert!(!polyfill.on_dom_content_loaded(&mut page.doc));
    assert_eq!(marked(&page.doc), 0);
    assert_eq!(page.doc.inline_value(page.img, Property::Position), None);
}

#[test]
fn test_images_only_support_skips_img() {
    let mut page = page();
    let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
              (KHTML, like Gecko) Chrome/64.0.3282.140 Safari/537.36 Edge/18.17763";
    let mut polyfill = Polyfill::new(NativeSupport::detect(true, ua));
    assert_eq!(polyfill.support(), NativeSupport::ImagesOnly);

    let report = polyfill.run(&mut page.doc, Target::All).expect("accepted");
    let skipped: Vec<NodeId> = report
        .iter()
        .filter(|d| d.dispatch == Dispatch::Skipped)
        .map(|d| d.node)
        .collect();
    assert_eq!(skipped, vec![page.img, page.picture_img]);
    assert_eq!(page.doc.inline_value(page.img, Property::Position), None);
    assert!(has_marker(&page.doc, parent(&page.doc, page.video)));
    assert!(has_marker(&page.doc, parent(&page.doc, page.canvas)));
    assert_eq!(marked(&page.doc), 2);
}

// ---------------------------------------------------------------------------
// Readiness and events
// ---------------------------------------------------------------------------

fn loading_image() -> (Document, NodeId) {
    let mut builder = DocumentBuilder::new(Viewport::new(800.0, 600.0));
    let frame = container(&mut builder);
    let img = builder.append(
        frame,
        ElementData::new("img")
            .with_attribute("data-object-fit", "contain")
            .with_replaced(
                ReplacedContent::image(400.0, 100.0).with_load(LoadState::Image { complete: false }),
            ),
    );
    (builder.finish(), img)
}

#[test]
fn test_unloaded_image_waits_for_load() {
    let (mut doc, img) = loading_image();
    let mut polyfill = Polyfill::new(NativeSupport::None);

    let report = polyfill.run(&mut doc, Target::All).expect("accepted");
    assert_eq!(report[0].dispatch, Dispatch::Deferred);
    assert!(polyfill.is_pending(img));
    assert_eq!(marked(&doc), 0);

    // A second run does not register the image twice.
    assert!(polyfill.polyfill(&mut doc, Target::All));
    assert_eq!(polyfill.pending().count(), 1);

    let outcome = polyfill.on_media_loaded(&mut doc, img).expect("image was pending");
    assert_eq!(outcome.applied, FitMode::Contain);
    assert_eq!(outcome.positioned, vec![Axis::Y]);
    assert!(!polyfill.is_pending(img));
    assert_eq!(marked(&doc), 1);
    assert_eq!(doc.client_width(img), 200.0);
    assert_eq!(doc.client_height(img), 50.0);

    assert_eq!(polyfill.on_media_loaded(&mut doc, img), None);
}

#[test]
fn test_video_without_metadata_is_deferred() {
    let mut builder = DocumentBuilder::new(Viewport::new(800.0, 600.0));
    let frame = container(&mut builder);
    let video = builder.append(
        frame,
        ElementData::new("video")
            .with_attribute("data-object-fit", "cover")
            .with_replaced(
                ReplacedContent::video(1280.0, 720.0).with_load(LoadState::Video { ready_state: 0 }),
            ),
    );
    let mut doc = builder.finish();
    let mut polyfill = Polyfill::new(NativeSupport::None);

    assert!(polyfill.polyfill(&mut doc, video));
    assert!(polyfill.is_pending(video));
    assert!(polyfill.on_media_loaded(&mut doc, video).is_some());
    assert!(has_marker(&doc, frame));
}

#[test]
fn test_load_event_for_unregistered_media_is_ignored() {
    let mut page = page();
    let mut polyfill = Polyfill::new(NativeSupport::None);

    assert_eq!(polyfill.on_media_loaded(&mut page.doc, page.img), None);
    assert_eq!(marked(&page.doc), 0);
}

#[test]
fn test_dom_content_loaded_fits_everything() {
    let mut page = page();
    let mut polyfill = Polyfill::new(NativeSupport::None);

    assert!(polyfill.on_dom_content_loaded(&mut page.doc));
    assert_eq!(marked(&page.doc), 4);
}

#[test]
fn test_resize_refits_against_the_new_viewport() {
    let mut builder = DocumentBuilder::new(Viewport::new(800.0, 600.0));
    let body = builder.body();
    let frame = builder.append_styled(body, ElementData::new("div"), "width: 50vw; height: 200px");
    let img = builder.append(
        frame,
        ElementData::new("img")
            .with_attribute("data-object-fit", "cover")
            .with_replaced(ReplacedContent::image(400.0, 100.0)),
    );
    let mut doc = builder.finish();
    let mut polyfill = Polyfill::new(NativeSupport::None);

    // 400x200 frame: the height-bound image is 800 wide and overflows on x.
    assert!(polyfill.on_dom_content_loaded(&mut doc));
    assert_eq!(doc.inline_value(img, Property::Width), Some("auto"));
    assert_eq!(doc.inline_value(img, Property::Left), Some("50%"));
    assert_eq!(doc.client_width(img), 800.0);

    // 1000x200 frame: now it is narrower than the frame and fills its width.
    assert!(polyfill.on_resize(&mut doc, Viewport::new(2000.0, 600.0)));
    assert_eq!(doc.inline_value(img, Property::Width), Some("100%"));
    assert_eq!(doc.inline_value(img, Property::Left), Some("auto"));
    assert_eq!(doc.client_width(img), 1000.0);
    assert_eq!(doc.client_height(img), 250.0);
    assert_eq!(doc.inline_value(img, Property::Top), Some("50%"));
    assert_eq!(doc.inline_value(img, Property::MarginTop), Some("-125px"));
}

#[test]
fn test_basic_profile_ignores_requested_fit() {
    let mut page = page();
    let mut polyfill = Polyfill::new(NativeSupport::None).with_profile(FitProfile::Basic);
    assert_eq!(polyfill.profile(), FitProfile::Basic);

    let img = page
        .doc
        .tree_mut()
        .as_element_mut(page.img)
        .expect("img is an element");
    img.set_attribute("data-object-fit", "contain");
    img.set_attribute("data-object-position", "left top");

    // Contain would bind the height here; cover binds the width.
    let report = polyfill.run(&mut page.doc, page.img).expect("accepted");
    let Dispatch::Fitted(outcome) = &report[0].dispatch else {
        panic!("img should be fitted, got {:?}", report[0].dispatch);
    };
    assert_eq!(outcome.applied, FitMode::Cover);
    assert_eq!(outcome.position, "50% 50%");
    assert_eq!(outcome.positioned, vec![Axis::Y]);
    assert_eq!(page.doc.inline_value(page.img, Property::Left), Some("0px"));
    assert_eq!(page.doc.client_width(page.img), 200.0);
}
