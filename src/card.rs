// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Repository card composition.
//!
//! A card is a fixed-width SVG document whose height follows its content:
//!
//! - the header (repository icon plus name, optionally wave-animated),
//! - a localized `Template` or `Archived` badge pill,
//! - the wrapped description,
//! - the stat row laid out by [`flex_layout`],
//! - an optional decorative animation layer behind everything else.
//!
//! Composition never fails. Sparse records render with defaults and upstream
//! failures are drawn with [`render_error_card`] instead.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    animation::{self, AnimationStyle, RandomSource, StdRandom},
    emoji::parse_emojis,
    format::{format_age, k_formatter},
    icons,
    layout::{LayoutItem, flex_layout, icon_with_label, language_item, render_row},
    measure::measure,
    options::{CardSettings, RenderOptions},
    repository::RepositoryRecord,
    svg::{coord, escape_xml},
    theme::Background,
    wrap::{grapheme_len, wrap_text},
};

/// Card width in pixels.
pub const CARD_WIDTH: f64 = 400.0;
/// Header length, in grapheme clusters, before it is cut with `...`.
pub const HEADER_MAX_LEN: usize = 35;
/// Description budget per line, in grapheme clusters.
pub const DESCRIPTION_LINE_WIDTH: usize = 59;
/// Shown when a repository has no description.
pub const NO_DESCRIPTION: &str = "No description provided";

const FONT_FAMILY: &str = "'Segoe UI', Ubuntu, \"Helvetica Neue\", Sans-Serif";
const ICON_SIZE: f64 = 16.0;
const STAT_GAP: f64 = 25.0;
const LINE_HEIGHT: f64 = 10.0;
const BASE_HEIGHT: f64 = 110.0;
const MULTILINE_BASE_HEIGHT: f64 = 120.0;
const HIDDEN_TITLE_OFFSET: f64 = 30.0;
const COMPACT_PADDING: f64 = 24.0;
const COMPACT_ROW_BASELINE: f64 = 26.0;
const BADGE_FONT_SIZE: f64 = 11.0;
const UNKNOWN_LANGUAGE_COLOR: &str = "#858585";

const ERROR_CARD_WIDTH: f64 = 576.5;
const ERROR_CARD_HEIGHT: f64 = 120.0;
const ERROR_LINE_WIDTH: usize = 80;

/// Rendered document plus the dimensions recorded in artifact manifests.
#[derive(Debug, Clone, PartialEq,)]
pub struct RenderedCard
{
    pub svg:    String,
    pub width:  f64,
    pub height: f64,
}

/// Renders a repository card with the current time and entropy-seeded
/// randomness.
pub fn render_repo_card(repo: &RepositoryRecord, options: &RenderOptions,) -> String
{
    render_repo_card_at(repo, options, Utc::now(), &mut StdRandom::from_entropy(),)
}

/// Renders a repository card against an explicit clock and random source.
///
/// ```
/// use chrono::Utc;
/// use repocard::{RenderOptions, RepositoryRecord, animation::SequenceRandom, card::render_repo_card_at};
///
/// let repo = RepositoryRecord { name: "hello".into(), ..Default::default() };
/// let svg = render_repo_card_at(&repo, &RenderOptions::default(), Utc::now(), &mut SequenceRandom::default(),);
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("No description provided"));
/// ```
pub fn render_repo_card_at(
    repo: &RepositoryRecord,
    options: &RenderOptions,
    now: DateTime<Utc,>,
    random: &mut dyn RandomSource,
) -> String
{
    compose_card(repo, &options.resolve(), now, random,).svg
}

/// Composes a card from already resolved settings.
pub fn compose_card(
    repo: &RepositoryRecord,
    settings: &CardSettings,
    now: DateTime<Utc,>,
    random: &mut dyn RandomSource,
) -> RenderedCard
{
    let header = truncate_header(repo.display_name(settings.show_owner,),);
    tracing::debug!(
        repository = %repo.name,
        style = %settings.animation.style,
        compact = settings.compact,
        "composing repository card"
    );

    let description = if settings.hide_text {
        Vec::new()
    } else {
        description_lines(repo.description.as_deref(), settings.description_lines,)
    };
    let line_count = if settings.hide_text {
        0
    } else {
        settings.description_lines.unwrap_or(description.len(),)
    };
    let geometry = Geometry::new(settings, line_count,);

    let layer = animation::generate(
        settings.animation.style,
        &settings.colors,
        CARD_WIDTH,
        geometry.height,
        &settings.animation.tuning,
        random,
    );
    let row = render_row(&flex_layout(stat_items(repo, settings, now,), STAT_GAP,),);

    let mut svg = String::with_capacity(4096,);
    let _ = write!(
        svg,
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" fill=\"none\" \
         xmlns=\"http://www.w3.org/2000/svg\" role=\"img\" aria-label=\"{label}\">",
        w = coord(CARD_WIDTH,),
        h = coord(geometry.height,),
        label = escape_xml(&header,),
    );
    svg.push_str(&style_sheet(settings, &layer.style_sheet,),);
    push_background(&mut svg, settings, geometry.height,);
    svg.push_str(&layer.markup,);

    if settings.compact {
        let _ = write!(
            svg,
            "<g data-testid=\"main-card-body\" transform=\"translate(30, {})\">{row}</g>",
            coord(COMPACT_ROW_BASELINE,),
        );
    } else {
        if !settings.hide_title {
            svg.push_str(&title_markup(&header, settings,),);
        }
        let _ = write!(
            svg,
            "<g data-testid=\"main-card-body\" transform=\"translate(0, {})\">",
            coord(geometry.body_offset,),
        );
        svg.push_str(&badge_markup(repo, settings,),);
        if !settings.hide_text {
            svg.push_str(&description_markup(&description,),);
        }
        let _ = write!(
            svg,
            "<g transform=\"translate(30, {})\">{row}</g></g>",
            coord(geometry.stat_row_offset,),
        );
    }
    svg.push_str("</svg>",);

    RenderedCard {
        svg,
        width: CARD_WIDTH,
        height: geometry.height,
    }
}

/// Vertical placement derived from the visible sections.
#[derive(Debug, Clone, Copy, PartialEq,)]
struct Geometry
{
    height:          f64,
    body_offset:     f64,
    stat_row_offset: f64,
}

impl Geometry
{
    fn new(settings: &CardSettings, line_count: usize,) -> Self
    {
        if settings.compact {
            return Self {
                height:          COMPACT_PADDING + ICON_SIZE,
                body_offset:     0.0,
                stat_row_offset: COMPACT_ROW_BASELINE,
            };
        }

        let lines = line_count as f64;
        let base = if line_count > 1 { MULTILINE_BASE_HEIGHT } else { BASE_HEIGHT };
        let full_height = base + lines * LINE_HEIGHT;
        let (height, body_offset,) = if settings.hide_title {
            (full_height - HIDDEN_TITLE_OFFSET, 55.0 - HIDDEN_TITLE_OFFSET,)
        } else {
            (full_height, 55.0,)
        };

        Self {
            height,
            body_offset,
            stat_row_offset: full_height - 75.0,
        }
    }
}

fn truncate_header(name: &str,) -> String
{
    if grapheme_len(name,) <= HEADER_MAX_LEN {
        return name.to_owned();
    }
    let mut cut: String = name.graphemes(true,).take(HEADER_MAX_LEN,).collect();
    cut.push_str("...",);
    cut
}

fn description_lines(description: Option<&str,>, configured: Option<usize,>,) -> Vec<String,>
{
    let text = description.map(str::trim,).filter(|text| !text.is_empty(),).unwrap_or(NO_DESCRIPTION,);
    let max_lines = configured.unwrap_or(crate::options::MAX_DESCRIPTION_LINES,);
    wrap_text(&parse_emojis(text,), DESCRIPTION_LINE_WIDTH, max_lines,)
}

fn style_sheet(settings: &CardSettings, animation_css: &str,) -> String
{
    let colors = &settings.colors;
    let mut css = format!(
        "<style>\
         .header {{ font: 600 18px {FONT_FAMILY}; fill: {title}; }}\n\
         .description {{ font: 400 13px {FONT_FAMILY}; fill: {text}; }}\n\
         .gray {{ font: 400 12px {FONT_FAMILY}; fill: {text}; }}\n\
         .icon {{ fill: {icon}; }}\n\
         .badge {{ font: 600 {badge}px {FONT_FAMILY}; }}\n\
         .badge rect {{ opacity: 0.2; }}\n",
        title = colors.title,
        text = colors.text,
        icon = colors.icon,
        badge = coord(BADGE_FONT_SIZE,),
    );
    css.push_str(animation_css,);
    if settings.animation_disabled {
        css.push_str("* { animation-duration: 0s !important; animation-delay: 0s !important; }\n",);
    }
    css.push_str("</style>",);
    css
}

fn push_background(svg: &mut String, settings: &CardSettings, height: f64,)
{
    let colors = &settings.colors;
    if let Background::Gradient {
        angle,
        stops,
    } = &colors.background
    {
        let _ = write!(
            svg,
            "<defs><linearGradient id=\"gradient\" gradientTransform=\"rotate({angle})\" \
             gradientUnits=\"userSpaceOnUse\">"
        );
        let last = stops.len().saturating_sub(1,).max(1,) as f64;
        for (index, stop,) in stops.iter().enumerate() {
            let _ = write!(
                svg,
                "<stop offset=\"{}%\" stop-color=\"{stop}\"/>",
                coord(index as f64 * 100.0 / last,),
            );
        }
        svg.push_str("</linearGradient></defs>",);
    }

    let _ = write!(
        svg,
        "<rect data-testid=\"card-bg\" x=\"0.5\" y=\"0.5\" rx=\"{}\" width=\"{}\" height=\"{}\" \
         fill=\"{}\" stroke=\"{}\" stroke-opacity=\"{}\"/>",
        coord(settings.border_radius,),
        coord(CARD_WIDTH - 1.0,),
        coord(height - 1.0,),
        escape_xml(&colors.background.fill(),),
        colors.border,
        if settings.hide_border { 0 } else { 1 },
    );
}

fn title_markup(header: &str, settings: &CardSettings,) -> String
{
    let text = if settings.animation.style == AnimationStyle::Bubbles {
        animation::wave_title(header, &settings.animation.tuning,)
    } else {
        escape_xml(header,).into_owned()
    };

    format!(
        "<g data-testid=\"card-title\" class=\"card-title\" transform=\"translate(25, 35)\">\
         <svg class=\"icon\" x=\"0\" y=\"-13\" viewBox=\"0 0 16 16\" version=\"1.1\" width=\"16\" \
         height=\"16\">{}</svg><text x=\"25\" y=\"0\" class=\"header\" data-testid=\"header\">{text}</text></g>",
        icons::REPO,
    )
}

fn badge_markup(repo: &RepositoryRecord, settings: &CardSettings,) -> String
{
    let label = if repo.is_template {
        settings.translations.template
    } else if repo.is_archived {
        settings.translations.archived
    } else {
        return String::new();
    };

    let width = measure(label, BADGE_FONT_SIZE,) + 24.0;
    let text_color = &settings.colors.text;
    format!(
        "<g data-testid=\"badge\" class=\"badge\" transform=\"translate(320, -18)\">\
         <rect stroke=\"{text_color}\" stroke-width=\"1\" width=\"{w}\" height=\"20\" x=\"-12\" y=\"-14\" \
         ry=\"10\" rx=\"10\"/><text x=\"{mid}\" y=\"-5\" alignment-baseline=\"central\" \
         dominant-baseline=\"central\" text-anchor=\"middle\" fill=\"{text_color}\">{label}</text></g>",
        w = coord(width,),
        mid = coord(width / 2.0 - 12.0,),
        label = escape_xml(label,),
    )
}

fn description_markup(lines: &[String],) -> String
{
    let mut markup =
        String::from("<text class=\"description\" data-testid=\"description\" x=\"25\" y=\"-5\">",);
    for line in lines {
        let _ = write!(markup, "<tspan dy=\"1.2em\" x=\"25\">{}</tspan>", escape_xml(line,));
    }
    markup.push_str("</text>",);
    markup
}

fn stat_items(repo: &RepositoryRecord, settings: &CardSettings, now: DateTime<Utc,>,) -> Vec<LayoutItem,>
{
    let mut items = Vec::with_capacity(6,);

    match &repo.primary_language {
        Some(language,) if !language.name.trim().is_empty() => {
            let color = language
                .color
                .as_deref()
                .filter(|color| !color.trim().is_empty(),)
                .unwrap_or(UNKNOWN_LANGUAGE_COLOR,);
            items.push(language_item(&escape_xml(&language.name,), &escape_xml(color,),),);
        }
        _ => items.push(LayoutItem::hidden(),),
    }

    items.push(icon_with_label(icons::STAR, &k_formatter(repo.stargazers,), "stargazers", ICON_SIZE,),);
    items.push(icon_with_label(icons::FORK, &k_formatter(repo.forks,), "forkcount", ICON_SIZE,),);

    if settings.show_issues && repo.issues > 0 {
        items.push(icon_with_label(icons::ISSUE, &k_formatter(repo.issues,), "issues", ICON_SIZE,),);
    }
    if settings.show_prs && repo.pull_requests > 0 {
        items.push(icon_with_label(
            icons::PULL_REQUEST,
            &k_formatter(repo.pull_requests,),
            "prs",
            ICON_SIZE,
        ),);
    }
    if settings.show_age
        && let Some(since,) = repo.age_timestamp(settings.age_metric,)
    {
        items.push(icon_with_label(icons::CLOCK, &format_age(since, now,), "age", ICON_SIZE,),);
    }

    items
}

/// Renders the card shown when repository data could not be obtained.
///
/// ```
/// use repocard::card::render_error_card;
///
/// let svg = render_error_card("Could not resolve to a Repository", Some("Check the name"),);
/// assert!(svg.contains("Something went wrong!"));
/// ```
pub fn render_error_card(message: &str, secondary: Option<&str,>,) -> String
{
    let mut svg = String::with_capacity(1024,);
    let _ = write!(
        svg,
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" fill=\"none\" \
         xmlns=\"http://www.w3.org/2000/svg\" role=\"img\" aria-label=\"Something went wrong\">\
         <style>\
         .text {{ font: 600 16px {FONT_FAMILY}; fill: #2f80ed; }}\n\
         .small {{ font: 600 12px {FONT_FAMILY}; fill: #252525; }}\n\
         .gray {{ fill: #858585; }}\n\
         </style>\
         <rect data-testid=\"card-bg\" x=\"0.5\" y=\"0.5\" width=\"{rw}\" height=\"{rh}\" rx=\"4.5\" \
         fill=\"#fffefe\" stroke=\"#e4e2e2\"/>\
         <text x=\"25\" y=\"45\" class=\"text\">Something went wrong!</text>\
         <text data-testid=\"message\" x=\"25\" y=\"55\" class=\"text small\">",
        w = coord(ERROR_CARD_WIDTH,),
        h = coord(ERROR_CARD_HEIGHT,),
        rw = coord(ERROR_CARD_WIDTH - 1.0,),
        rh = coord(ERROR_CARD_HEIGHT - 1.0,),
    );
    for line in wrap_text(message, ERROR_LINE_WIDTH, 2,) {
        let _ = write!(svg, "<tspan x=\"25\" dy=\"18\">{}</tspan>", escape_xml(&line,));
    }
    if let Some(secondary,) = secondary.map(str::trim,).filter(|text| !text.is_empty(),) {
        let _ = write!(svg, "<tspan x=\"25\" dy=\"18\" class=\"gray\">{}</tspan>", escape_xml(secondary,));
    }
    svg.push_str("</text></svg>",);
    svg
}
