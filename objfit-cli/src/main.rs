//! objfit CLI
//!
//! Builds a one-container document, fits a single media element into it and
//! prints the inline styles written and the boxes that result.
//!
//! - `objfit --container 300x200 --media 400x200`: cover, centred
//! - `objfit --media 40x30 --fit scale-down --position "right bottom"`
//! - `objfit --json ...`: machine-readable report

mod report;
mod size;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use objfit_common::warning::clear_warnings;
use objfit_css::{Document, DocumentBuilder, Viewport, format_number};
use objfit_dom::{ElementData, LoadState, NodeId, ReplacedContent};
use objfit_engine::{FIT_ATTR, FitProfile, POSITION_ATTR};
use objfit_polyfill::{Dispatch, NativeSupport, Polyfill};

use report::{BoxReport, Event, Pass, Report};
use size::SizeArg;

/// objfit: emulate object-fit / object-position with inline styles
#[derive(Parser, Debug)]
#[command(name = "objfit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Cover a 300x200 box with a 400x200 image
    objfit --container 300x200 --media 400x200

    # Letterbox a video, anchored to the top
    objfit --tag video --media 1280x720 --fit contain --position "50% top"

    # A fluid container, refitted after the window grows
    objfit --media 400x100 --container-style "width: 50vw" --resize 2000x600

    # Simulate EdgeHTML 16-18, which only handles images natively
    objfit --support images-only --tag img --media 400x200
"#)]
struct Cli {
    /// Container size in CSS pixels
    #[arg(long, value_name = "WxH", default_value = "300x200")]
    container: SizeArg,

    /// Extra inline declarations for the container, e.g. "width: 50vw"
    #[arg(long, value_name = "CSS")]
    container_style: Option<String>,

    /// Natural size of the media in CSS pixels
    #[arg(long, value_name = "WxH")]
    media: SizeArg,

    /// Value of data-object-fit (default: cover)
    #[arg(long)]
    fit: Option<String>,

    /// Value of data-object-position (default: "50% 50%")
    #[arg(long)]
    position: Option<String>,

    /// Media element to create
    #[arg(long, value_enum, default_value = "img")]
    tag: MediaTag,

    /// Start the media unloaded and deliver its load event afterwards
    #[arg(long)]
    loading: bool,

    /// Viewport size in CSS pixels
    #[arg(long, value_name = "WxH", default_value = "800x600")]
    viewport: SizeArg,

    /// Resize the viewport after fitting and refit
    #[arg(long, value_name = "WxH")]
    resize: Option<SizeArg>,

    /// Native object-fit support of the simulated engine
    #[arg(long, value_name = "full|images-only|none", default_value = "none")]
    support: NativeSupport,

    /// Always cover and centre, ignoring --fit and --position
    #[arg(long)]
    basic: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// Media element kinds the CLI can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MediaTag {
    Img,
    Video,
    Canvas,
}

impl MediaTag {
    const fn tag_name(self) -> &'static str {
        match self {
            Self::Img => "img",
            Self::Video => "video",
            Self::Canvas => "canvas",
        }
    }

    fn content(self, natural: SizeArg, loading: bool) -> ReplacedContent {
        let (width, height) = (natural.width, natural.height);
        match self {
            Self::Img if loading => {
                ReplacedContent::image(width, height).with_load(LoadState::Image { complete: false })
            }
            Self::Img => ReplacedContent::image(width, height),
            Self::Video if loading => {
                ReplacedContent::video(width, height).with_load(LoadState::Video { ready_state: 0 })
            }
            Self::Video => ReplacedContent::video(width, height),
            Self::Canvas => ReplacedContent::immediate(width, height),
        }
    }
}

/// `<body><div style=...><media data-object-fit=...></div></body>`
fn build(cli: &Cli) -> (Document, NodeId, NodeId) {
    let mut builder = DocumentBuilder::new(cli.viewport.into());
    let body = builder.body();

    let mut style = format!(
        "width: {}px; height: {}px",
        format_number(cli.container.width),
        format_number(cli.container.height)
    );
    if let Some(extra) = &cli.container_style {
        style.push_str("; ");
        style.push_str(extra);
    }
    let container = builder.append_styled(body, ElementData::new("div"), &style);

    let mut media = ElementData::new(cli.tag.tag_name())
        .with_attribute(FIT_ATTR, cli.fit.as_deref().unwrap_or_default())
        .with_replaced(cli.tag.content(cli.media, cli.loading));
    if let Some(position) = &cli.position {
        media.set_attribute(POSITION_ATTR, position);
    }
    let media = builder.append(container, media);

    (builder.finish(), container, media)
}

fn snapshot(
    doc: &Document,
    container: NodeId,
    media: NodeId,
) -> anyhow::Result<(BoxReport, BoxReport)> {
    let container = BoxReport::describe(doc, container).context("container is not an element")?;
    let media = BoxReport::describe(doc, media).context("media is not an element")?;
    Ok((container, media))
}

fn run(cli: &Cli) -> anyhow::Result<Report> {
    clear_warnings();
    let (mut doc, container, media) = build(cli);
    let profile = if cli.basic {
        FitProfile::Basic
    } else {
        FitProfile::Full
    };
    let mut polyfill = Polyfill::new(cli.support).with_profile(profile);
    let mut passes = Vec::new();

    let dispatched = polyfill.run(&mut doc, media);
    let (container_box, media_box) = snapshot(&doc, container, media)?;
    passes.push(Pass {
        event: Event::Polyfill,
        viewport: doc.viewport(),
        accepted: dispatched.is_some(),
        dispatch: dispatched.and_then(|mut all| all.pop()).map(|d| d.dispatch),
        container: container_box,
        media: media_box,
    });

    if polyfill.is_pending(media) {
        let outcome = polyfill.on_media_loaded(&mut doc, media);
        let (container_box, media_box) = snapshot(&doc, container, media)?;
        passes.push(Pass {
            event: Event::Load,
            viewport: doc.viewport(),
            accepted: outcome.is_some(),
            dispatch: outcome.map(Dispatch::Fitted),
            container: container_box,
            media: media_box,
        });
    }

    if let Some(resize) = cli.resize {
        let accepted = polyfill.on_resize(&mut doc, Viewport::from(resize));
        let (container_box, media_box) = snapshot(&doc, container, media)?;
        passes.push(Pass {
            event: Event::Resize,
            viewport: doc.viewport(),
            accepted,
            dispatch: None,
            container: container_box,
            media: media_box,
        });
    }

    Ok(Report {
        support: polyfill.support(),
        profile: polyfill.profile(),
        passes,
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let report = run(&cli)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("serializing the report")?;
        println!("{json}");
    } else {
        print!("{}", report.render());
    }
    Ok(())
}
