// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Left-to-right packing of inline stat badges.
//!
//! The stat row is a bounded set of items (language, stars, forks, issues,
//! pull requests, age), so a single row always fits the card and no wrapping
//! is performed.

use std::fmt::Write as _;

use crate::{measure::measure, svg::coord};

/// Font size of stat labels.
pub const LABEL_FONT_SIZE: f64 = 12.0;
/// Horizontal offset of the label text relative to its icon.
const LABEL_OFFSET: f64 = 20.0;
/// Horizontal offset of the language name relative to its swatch center.
const LANGUAGE_NAME_OFFSET: f64 = 15.0;

/// Pre-rendered inline element with its horizontal footprint.
#[derive(Debug, Clone, PartialEq,)]
pub struct LayoutItem
{
    /// SVG markup drawn at the item's origin.
    pub markup: String,
    /// Width reserved for the item; `0` hides it without reserving a gap.
    pub width:  f64,
}

impl LayoutItem
{
    /// An item that occupies no space and is dropped by [`flex_layout`].
    pub fn hidden() -> Self
    {
        Self {
            markup: String::new(), width: 0.0,
        }
    }
}

/// Layout item annotated with its absolute horizontal offset.
#[derive(Debug, Clone, PartialEq,)]
pub struct PositionedItem
{
    /// SVG markup drawn at `x`.
    pub markup: String,
    /// Offset from the row origin.
    pub x:      f64,
}

/// Packs items left to right separated by `gap`.
///
/// The offset of each visible item is the sum of the preceding visible widths
/// plus one gap per preceding visible item. Items reporting zero width are
/// skipped entirely.
///
/// ```
/// use repocard::layout::{LayoutItem, flex_layout};
///
/// let items = vec![
///     LayoutItem { markup: "a".into(), width: 10.0 },
///     LayoutItem::hidden(),
///     LayoutItem { markup: "b".into(), width: 5.0 },
/// ];
/// let placed = flex_layout(items, 25.0,);
/// assert_eq!(placed.len(), 2);
/// assert_eq!(placed[1].x, 35.0);
/// ```
pub fn flex_layout(items: Vec<LayoutItem,>, gap: f64,) -> Vec<PositionedItem,>
{
    let mut offset = 0.0;
    items
        .into_iter()
        .filter(|item| item.width > 0.0,)
        .map(|item| {
            let positioned = PositionedItem {
                markup: item.markup, x: offset,
            };
            offset += item.width + gap;
            positioned
        },)
        .collect()
}

/// Wraps each positioned item in a translated group.
pub fn render_row(items: &[PositionedItem],) -> String
{
    let mut buffer = String::new();
    for item in items {
        let _ = write!(
            buffer,
            "<g transform=\"translate({}, 0)\">{}</g>",
            coord(item.x,),
            item.markup
        );
    }
    buffer
}

/// Pairs an icon with a text label as one inline unit.
///
/// The reported width is `icon_size` plus the measured label width. `key` is
/// only emitted as a `data-testid` attribute. `label` must already be escaped.
pub fn icon_with_label(icon: &str, label: &str, key: &str, icon_size: f64,) -> LayoutItem
{
    if label.is_empty() {
        return LayoutItem::hidden();
    }

    let size = coord(icon_size,);
    let markup = format!(
        "<svg class=\"icon\" y=\"-12\" viewBox=\"0 0 16 16\" version=\"1.1\" width=\"{size}\" \
         height=\"{size}\">{icon}</svg><text data-testid=\"{key}\" class=\"gray\" x=\"{}\">{label}</text>",
        coord(LABEL_OFFSET,),
    );

    LayoutItem {
        markup,
        width: icon_size + measure(label, LABEL_FONT_SIZE,),
    }
}

/// Colored swatch followed by the language name.
///
/// `name` and `color` must already be escaped.
pub fn language_item(name: &str, color: &str,) -> LayoutItem
{
    let markup = format!(
        "<g data-testid=\"primary-lang\"><circle data-testid=\"lang-color\" cx=\"0\" cy=\"-5\" \
         r=\"6\" fill=\"{color}\"/><text data-testid=\"lang-name\" class=\"gray\" x=\"{}\">{name}</text></g>",
        coord(LANGUAGE_NAME_OFFSET,),
    );

    LayoutItem {
        markup,
        width: LANGUAGE_NAME_OFFSET + measure(name, LABEL_FONT_SIZE,),
    }
}
