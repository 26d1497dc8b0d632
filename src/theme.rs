// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Named color palettes and override resolution.
//!
//! A card uses five colors. Each one is taken from an explicit override when
//! it is a valid hex color, otherwise from the selected palette, otherwise
//! from the default repository-card palette.

use std::sync::LazyLock;

use regex::Regex;

/// Palette used when the requested theme is unknown.
pub const DEFAULT_THEME: &str = "default_repocard";
/// Border color for palettes that do not define one.
const DEFAULT_BORDER: &str = "e4e2e2";

static HEX_COLOR: LazyLock<Option<Regex,>,> = LazyLock::new(|| {
    Regex::new(r"^#?([A-Fa-f0-9]{8}|[A-Fa-f0-9]{6}|[A-Fa-f0-9]{3,4})$",).ok()
},);

/// Raw palette entry; colors are hex digits without the leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub struct Palette
{
    pub name:       &'static str,
    pub title:      &'static str,
    pub icon:       &'static str,
    pub text:       &'static str,
    pub background: &'static str,
    pub border:     Option<&'static str,>,
}

const fn palette(
    name: &'static str,
    title: &'static str,
    icon: &'static str,
    text: &'static str,
    background: &'static str,
) -> Palette
{
    Palette {
        name, title, icon, text, background, border: None,
    }
}

const PALETTES: &[Palette] = &[
    Palette {
        border: Some(DEFAULT_BORDER,), ..palette("default", "2f80ed", "4c71f2", "434d58", "fffefe",)
    },
    palette("default_repocard", "2f80ed", "586069", "434d58", "fffefe",),
    palette("transparent", "006aff", "0579c3", "417e87", "ffffff00",),
    palette("dark", "fff", "79ff97", "9f9f9f", "151515",),
    palette("radical", "fe428e", "f8d847", "a9fef7", "141321",),
    palette("merko", "abd200", "b7d364", "68b587", "0a0f0b",),
    palette("gruvbox", "fabd2f", "fe8019", "8ec07c", "282828",),
    palette("tokyonight", "70a5fd", "bf91f3", "38bdae", "1a1b27",),
    palette("onedark", "e4bf7a", "8eb573", "df6d74", "282c34",),
    palette("cobalt", "e683d9", "0480ef", "75eeb2", "193549",),
    palette("synthwave", "e2e9ec", "ef8539", "e5289e", "2b213a",),
    palette("highcontrast", "e7f216", "00ffff", "fff", "000",),
    palette("dracula", "ff6e96", "79dafa", "f8f8f2", "282a36",),
    palette("github_dark", "58a6ff", "1f6feb", "c3d1d9", "0d1117",),
    Palette {
        border: Some("4c566a",), ..palette("nord", "81a1c1", "88c0d0", "d8dee9", "2e3440",)
    },
];

/// Card background: a solid color or a rotated linear gradient.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum Background
{
    /// Single `#rrggbb`-style color.
    Solid(String,),
    /// Gradient rotated by `angle` degrees across evenly spaced `stops`.
    Gradient
    {
        angle: String,
        stops: Vec<String,>,
    },
}

impl Background
{
    /// Value for the background rect's `fill` attribute.
    pub fn fill(&self,) -> String
    {
        match self {
            Self::Solid(color,) => color.clone(),
            Self::Gradient {
                ..
            } => "url(#gradient)".to_owned(),
        }
    }
}

/// Resolved colors for one card.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct ThemeColors
{
    pub title:      String,
    pub icon:       String,
    pub text:       String,
    pub background: Background,
    pub border:     String,
}

/// Optional user overrides, as raw strings.
#[derive(Debug, Clone, Copy, Default,)]
pub struct ColorOverrides<'a,>
{
    pub title:      Option<&'a str,>,
    pub icon:       Option<&'a str,>,
    pub text:       Option<&'a str,>,
    pub background: Option<&'a str,>,
    pub border:     Option<&'a str,>,
}

/// Returns whether `value` is a 3, 4, 6 or 8 digit hex color, `#` optional.
pub fn is_valid_hex_color(value: &str,) -> bool
{
    HEX_COLOR.as_ref().is_some_and(|pattern| pattern.is_match(value,),)
}

/// Looks up a palette by name.
pub fn find_palette(name: &str,) -> Option<&'static Palette,>
{
    PALETTES.iter().find(|palette| palette.name == name,)
}

/// Names of all built-in palettes, in declaration order.
pub fn theme_names() -> impl Iterator<Item = &'static str,>
{
    PALETTES.iter().map(|palette| palette.name,)
}

fn default_palette() -> &'static Palette
{
    PALETTES.iter().find(|palette| palette.name == DEFAULT_THEME,).unwrap_or(&PALETTES[0],)
}

fn hex(value: &str,) -> String
{
    format!("#{}", value.trim_start_matches('#',))
}

fn pick(candidate: Option<&str,>, fallback: &str,) -> String
{
    match candidate.map(str::trim,) {
        Some(value,) if is_valid_hex_color(value,) => hex(value,),
        _ => hex(fallback,),
    }
}

fn parse_gradient(value: &str,) -> Option<Background,>
{
    let mut parts = value.split(',',).map(str::trim,);
    let angle = parts.next()?;
    let stops: Vec<&str,> = parts.collect();
    if stops.len() < 2
        || angle.parse::<f64,>().is_err()
        || !stops.iter().all(|stop| is_valid_hex_color(stop,),)
    {
        return None;
    }

    Some(Background::Gradient {
        angle: angle.to_owned(),
        stops: stops.into_iter().map(hex,).collect(),
    },)
}

/// Merges a named palette with explicit overrides.
///
/// ```
/// use repocard::theme::{ColorOverrides, resolve_colors};
///
/// let overrides = ColorOverrides { title: Some("ff0000",), ..Default::default() };
/// let colors = resolve_colors("dark", &overrides,);
/// assert_eq!(colors.title, "#ff0000");
/// assert_eq!(colors.icon, "#79ff97");
/// ```
pub fn resolve_colors(theme: &str, overrides: &ColorOverrides<'_,>,) -> ThemeColors
{
    let fallback = default_palette();
    let palette = find_palette(theme,).unwrap_or(fallback,);
    let palette_border = palette.border.or(fallback.border,).unwrap_or(DEFAULT_BORDER,);

    let background = overrides
        .background
        .map(str::trim,)
        .filter(|value| value.contains(',',),)
        .and_then(parse_gradient,)
        .unwrap_or_else(|| Background::Solid(pick(overrides.background, palette.background,),),);

    ThemeColors {
        title: pick(overrides.title, palette.title,),
        icon: pick(overrides.icon, palette.icon,),
        text: pick(overrides.text, palette.text,),
        background,
        border: pick(overrides.border, palette_border,),
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn hex_validation_accepts_common_lengths()
    {
        for value in ["fff", "#fff", "ffff", "a1b2c3", "#A1B2C3", "a1b2c3d4"] {
            assert!(is_valid_hex_color(value,), "{value} should be valid");
        }
        for value in ["", "ff", "12345", "ggg", "red", "#1234567"] {
            assert!(!is_valid_hex_color(value,), "{value} should be invalid");
        }
    }

    #[test]
    fn default_theme_is_used_for_unknown_names()
    {
        let colors = resolve_colors("does-not-exist", &ColorOverrides::default(),);
        assert_eq!(colors, resolve_colors(DEFAULT_THEME, &ColorOverrides::default()));
        assert_eq!(colors.title, "#2f80ed");
        assert_eq!(colors.icon, "#586069");
        assert_eq!(colors.text, "#434d58");
        assert_eq!(colors.background, Background::Solid("#fffefe".to_owned()));
        assert_eq!(colors.border, "#e4e2e2");
    }

    #[test]
    fn overrides_win_over_theme()
    {
        let overrides = ColorOverrides {
            title:      Some("#123456",),
            icon:       Some("abc",),
            text:       None,
            background: Some("000000",),
            border:     Some("ffffff",),
        };
        let colors = resolve_colors("radical", &overrides,);
        assert_eq!(colors.title, "#123456");
        assert_eq!(colors.icon, "#abc");
        assert_eq!(colors.text, "#a9fef7");
        assert_eq!(colors.background.fill(), "#000000");
        assert_eq!(colors.border, "#ffffff");
    }

    #[test]
    fn invalid_overrides_fall_back_to_theme()
    {
        let overrides = ColorOverrides {
            title: Some("not-a-color",), ..Default::default()
        };
        assert_eq!(resolve_colors("dracula", &overrides,).title, "#ff6e96");
    }

    #[test]
    fn palette_border_is_respected()
    {
        assert_eq!(resolve_colors("nord", &ColorOverrides::default()).border, "#4c566a");
    }

    #[test]
    fn gradient_background_is_parsed()
    {
        let overrides = ColorOverrides {
            background: Some("35, f00, 00ff00, #0000ff",), ..Default::default()
        };
        let colors = resolve_colors("default", &overrides,);
        assert_eq!(
            colors.background,
            Background::Gradient {
                angle: "35".to_owned(),
                stops: vec!["#f00".to_owned(), "#00ff00".to_owned(), "#0000ff".to_owned()],
            }
        );
        assert_eq!(colors.background.fill(), "url(#gradient)");
    }

    #[test]
    fn malformed_gradient_falls_back_to_palette_background()
    {
        let overrides = ColorOverrides {
            background: Some("abc,zzz,fff",), ..Default::default()
        };
        let colors = resolve_colors("dark", &overrides,);
        assert_eq!(colors.background, Background::Solid("#151515".to_owned()));
    }

    #[test]
    fn theme_names_include_default_repocard()
    {
        assert!(theme_names().any(|name| name == DEFAULT_THEME));
        assert_eq!(theme_names().count(), 15);
    }
}
