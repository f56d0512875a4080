//! What a run did, in a form that prints as text or serializes to JSON.

use std::fmt::Write as _;

use objfit_css::{Document, Size, Viewport, format_number};
use objfit_dom::NodeId;
use objfit_engine::FitProfile;
use objfit_polyfill::{Dispatch, NativeSupport};
use owo_colors::OwoColorize;
use serde::Serialize;
use strum_macros::Display;

/// The event that triggered a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Event {
    /// An explicit polyfill call on the media.
    Polyfill,
    /// The media finished loading.
    Load,
    /// The viewport changed size.
    Resize,
}

/// One element's inline style and measured box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxReport {
    /// Lower-case tag name.
    pub tag: String,
    /// The `class` attribute, if any.
    pub class: Option<String>,
    /// Serialized inline style.
    pub style: String,
    /// Unrounded used size.
    pub used: Size,
    /// `clientWidth` / `clientHeight`.
    pub client: Size,
}

impl BoxReport {
    /// Snapshot `node`, or `None` if it is not an element.
    #[must_use]
    pub fn describe(doc: &Document, node: NodeId) -> Option<Self> {
        let element = doc.tree().as_element(node)?;
        Some(Self {
            tag: element.tag_name.to_ascii_lowercase(),
            class: element.attribute("class").map(str::to_string),
            style: element.style.css_text(),
            used: doc.used_size(node),
            client: Size::new(doc.client_width(node), doc.client_height(node)),
        })
    }
}

/// The document after one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pass {
    /// What triggered the pass.
    pub event: Event,
    /// Viewport at the end of the pass.
    pub viewport: Viewport,
    /// Whether the polyfill accepted the call.
    pub accepted: bool,
    /// What happened to the media, when the event reports it.
    pub dispatch: Option<Dispatch>,
    /// The media's parent.
    pub container: BoxReport,
    /// The media element.
    pub media: BoxReport,
}

/// Everything a run did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Simulated native support.
    pub support: NativeSupport,
    /// Fit profile used.
    pub profile: FitProfile,
    /// Passes in the order they ran.
    pub passes: Vec<Pass>,
}

fn size(size: Size) -> String {
    format!("{}x{}", format_number(size.width), format_number(size.height))
}

fn status(pass: &Pass) -> String {
    if !pass.accepted {
        return "rejected (native object-fit or invalid target)".yellow().to_string();
    }
    match &pass.dispatch {
        Some(Dispatch::Fitted(outcome)) => {
            let axes: Vec<String> = outcome.positioned.iter().map(ToString::to_string).collect();
            let axes = if axes.is_empty() {
                "none".to_string()
            } else {
                axes.join(", ")
            };
            format!(
                "{} {} -> {}, positioned {axes}, at '{}'",
                "fitted".green(),
                outcome.requested,
                outcome.applied,
                outcome.position
            )
        }
        Some(Dispatch::Deferred) => "deferred until load".cyan().to_string(),
        Some(Dispatch::Skipped) => "skipped".yellow().to_string(),
        None => "refitted".green().to_string(),
    }
}

fn describe_box(out: &mut String, role: &str, report: &BoxReport) {
    let class = report
        .class
        .as_deref()
        .map(|class| format!(" class=\"{class}\""))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "  {role} <{}{class}>  used {}  client {}",
        report.tag,
        size(report.used),
        size(report.client)
    );
    let _ = writeln!(out, "    {}", report.style.dimmed());
}

impl Report {
    /// Human-readable rendering, one block per pass.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} support={} profile={}",
            "objfit".bold(),
            self.support,
            self.profile
        );
        for pass in &self.passes {
            let _ = writeln!(
                out,
                "\n{}  viewport {}  {}",
                pass.event.bold(),
                size(Size::new(pass.viewport.width, pass.viewport.height)),
                status(pass)
            );
            describe_box(&mut out, "container", &pass.container);
            describe_box(&mut out, "media", &pass.media);
        }
        out
    }
}
