// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Decorative animation layers drawn behind card content.
//!
//! Each [`AnimationStyle`] maps to one generator producing a style sheet and a
//! markup fragment sized to the card. Unknown style names resolve to
//! [`AnimationStyle::None`], which produces nothing, so a bad style never
//! fails a render. `embers` and `sparks` draw coordinates from the injected
//! [`RandomSource`]; all other styles are pure functions of their inputs.

mod bubbles;
mod circuit;
mod embers;
mod radiant;
mod random;
mod sparks;

use std::fmt;

pub use bubbles::wave_title;
pub use random::{RandomSource, SequenceRandom, StdRandom};

use crate::theme::ThemeColors;

/// Used when the icon color is empty.
const FALLBACK_PRIMARY: &str = "#586069";
/// Used when the title color is empty.
const FALLBACK_ACCENT: &str = "#2f80ed";
/// Used when the text color is empty.
const FALLBACK_TEXT: &str = "#434d58";

/// Closed set of supported animation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default,)]
pub enum AnimationStyle
{
    /// No animation layer.
    #[default]
    None,
    Bubbles,
    Embers,
    Radiant,
    Circuit,
    Sparks,
}

impl AnimationStyle
{
    /// Parses a style name; anything unrecognized maps to [`Self::None`].
    ///
    /// ```
    /// use repocard::animation::AnimationStyle;
    ///
    /// assert_eq!(AnimationStyle::from_name(" Radiant "), AnimationStyle::Radiant);
    /// assert_eq!(AnimationStyle::from_name("confetti"), AnimationStyle::None);
    /// ```
    pub fn from_name(name: &str,) -> Self
    {
        match name.trim().to_ascii_lowercase().as_str() {
            "bubbles" => Self::Bubbles,
            "embers" => Self::Embers,
            "radiant" => Self::Radiant,
            "circuit" => Self::Circuit,
            "sparks" => Self::Sparks,
            _ => Self::None,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self,) -> &'static str
    {
        match self {
            Self::None => "none",
            Self::Bubbles => "bubbles",
            Self::Embers => "embers",
            Self::Radiant => "radiant",
            Self::Circuit => "circuit",
            Self::Sparks => "sparks",
        }
    }
}

impl fmt::Display for AnimationStyle
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.name(),)
    }
}

/// Tuning for the wave title shown with the `bubbles` style.
#[derive(Debug, Clone, Copy, PartialEq,)]
pub struct WaveTuning
{
    /// Seconds per wave cycle.
    pub speed:       f64,
    /// Vertical travel of each character in pixels.
    pub amplitude:   f64,
    /// Seconds between neighbouring characters.
    pub delay:       f64,
    /// Cycle the title fill through the title, icon and text colors.
    pub color_morph: bool,
}

impl WaveTuning
{
    pub const DEFAULT_SPEED: f64 = 2.0;
    pub const DEFAULT_AMPLITUDE: f64 = 3.0;
    pub const DEFAULT_DELAY: f64 = 0.1;

    /// Builds tuning from optional values, clamping each into a sane range.
    pub fn new(
        speed: Option<f64,>,
        amplitude: Option<f64,>,
        delay: Option<f64,>,
        color_morph: bool,
    ) -> Self
    {
        Self {
            speed: clamp_or(speed, Self::DEFAULT_SPEED, 0.2, 20.0,),
            amplitude: clamp_or(amplitude, Self::DEFAULT_AMPLITUDE, 0.0, 20.0,),
            delay: clamp_or(delay, Self::DEFAULT_DELAY, 0.0, 2.0,),
            color_morph,
        }
    }
}

impl Default for WaveTuning
{
    fn default() -> Self
    {
        Self::new(None, None, None, false,)
    }
}

fn clamp_or(value: Option<f64,>, default: f64, min: f64, max: f64,) -> f64
{
    match value {
        Some(v,) if v.is_finite() => v.clamp(min, max,),
        _ => default,
    }
}

/// Style plus tuning, resolved once per render.
#[derive(Debug, Clone, Copy, PartialEq, Default,)]
pub struct AnimationSpec
{
    pub style:  AnimationStyle,
    pub tuning: WaveTuning,
}

impl AnimationSpec
{
    /// Resolves the requested style; `disabled` forces [`AnimationStyle::None`].
    pub fn resolve(style_name: &str, disabled: bool, tuning: WaveTuning,) -> Self
    {
        let style = if disabled { AnimationStyle::None } else { AnimationStyle::from_name(style_name,) };
        Self {
            style, tuning,
        }
    }

    pub fn is_enabled(&self,) -> bool
    {
        self.style != AnimationStyle::None
    }
}

/// Generated style sheet and markup for one card.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct AnimationLayer
{
    /// CSS rules, including keyframes, to embed in the card's `<style>`.
    pub style_sheet: String,
    /// `animation-layer` group with the animated shapes.
    pub markup:      String,
}

impl AnimationLayer
{
    pub fn is_empty(&self,) -> bool
    {
        self.style_sheet.is_empty() && self.markup.is_empty()
    }
}

/// Colors the generators draw with, after empty-value fallbacks.
#[derive(Debug, Clone, Copy,)]
struct Inks<'a,>
{
    primary: &'a str,
    accent:  &'a str,
    text:    &'a str,
}

impl<'a,> Inks<'a,>
{
    fn from_colors(colors: &'a ThemeColors,) -> Self
    {
        fn or<'c,>(value: &'c str, fallback: &'c str,) -> &'c str
        {
            if value.trim().is_empty() { fallback } else { value }
        }

        Self {
            primary: or(&colors.icon, FALLBACK_PRIMARY,),
            accent:  or(&colors.title, FALLBACK_ACCENT,),
            text:    or(&colors.text, FALLBACK_TEXT,),
        }
    }
}

fn layer_group(shapes: &str,) -> String
{
    format!(
        "<g class=\"animation-layer\" data-testid=\"animation-layer\" aria-hidden=\"true\">{shapes}</g>"
    )
}

/// Generates the animation layer for `style` on a `width` x `height` card.
///
/// ```
/// use repocard::animation::{AnimationStyle, SequenceRandom, WaveTuning, generate};
/// use repocard::theme::{ColorOverrides, resolve_colors};
///
/// let colors = resolve_colors("dark", &ColorOverrides::default(),);
/// let mut random = SequenceRandom::default();
/// let layer = generate(AnimationStyle::None, &colors, 400.0, 120.0, &WaveTuning::default(), &mut random,);
/// assert!(layer.is_empty());
/// ```
pub fn generate(
    style: AnimationStyle,
    colors: &ThemeColors,
    width: f64,
    height: f64,
    tuning: &WaveTuning,
    random: &mut dyn RandomSource,
) -> AnimationLayer
{
    let inks = Inks::from_colors(colors,);
    let (style_sheet, shapes,) = match style {
        AnimationStyle::None => return AnimationLayer::default(),
        AnimationStyle::Bubbles => bubbles::render(&inks, width, height, tuning,),
        AnimationStyle::Embers => embers::render(&inks, width, height, random,),
        AnimationStyle::Radiant => radiant::render(&inks, width, height,),
        AnimationStyle::Circuit => circuit::render(&inks, width, height,),
        AnimationStyle::Sparks => sparks::render(&inks, width, height, random,),
    };

    AnimationLayer {
        style_sheet,
        markup: layer_group(&shapes,),
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::theme::{ColorOverrides, resolve_colors};

    const ALL: [AnimationStyle; 6] = [
        AnimationStyle::None,
        AnimationStyle::Bubbles,
        AnimationStyle::Embers,
        AnimationStyle::Radiant,
        AnimationStyle::Circuit,
        AnimationStyle::Sparks,
    ];

    fn colors() -> ThemeColors
    {
        resolve_colors("default_repocard", &ColorOverrides::default(),)
    }

    fn render(style: AnimationStyle, random: &mut dyn RandomSource,) -> AnimationLayer
    {
        generate(style, &colors(), 400.0, 120.0, &WaveTuning::default(), random,)
    }

    #[test]
    fn names_round_trip()
    {
        for style in ALL {
            assert_eq!(AnimationStyle::from_name(style.name()), style);
            assert_eq!(style.to_string(), style.name());
        }
    }

    #[test]
    fn none_and_unknown_styles_produce_nothing()
    {
        let mut random = SequenceRandom::default();
        assert!(render(AnimationStyle::from_name("glitter"), &mut random).is_empty());
        assert!(render(AnimationStyle::None, &mut random).is_empty());
    }

    #[test]
    fn disabled_spec_overrides_requested_style()
    {
        let tuning = WaveTuning::new(Some(9.0,), Some(9.0,), Some(1.0,), true,);
        let spec = AnimationSpec::resolve("bubbles", true, tuning,);
        assert_eq!(spec.style, AnimationStyle::None);
        assert!(!spec.is_enabled());
        assert!(AnimationSpec::resolve("sparks", false, tuning).is_enabled());
    }

    #[test]
    fn every_enabled_style_emits_keyframes_and_layer()
    {
        for style in ALL.into_iter().skip(1,) {
            let mut random = StdRandom::seeded(11,);
            let layer = render(style, &mut random,);
            assert!(layer.style_sheet.contains("@keyframes"), "{style} has no keyframes");
            assert!(layer.markup.starts_with("<g class=\"animation-layer\""), "{style}");
            assert!(layer.markup.ends_with("</g>"));
        }
    }

    #[test]
    fn empty_colors_use_fallbacks()
    {
        let mut blank = colors();
        blank.title = String::new();
        blank.icon = "  ".to_owned();
        let mut random = SequenceRandom::default();
        let layer =
            generate(AnimationStyle::Radiant, &blank, 400.0, 120.0, &WaveTuning::default(), &mut random,);
        assert!(layer.style_sheet.contains(FALLBACK_ACCENT));
        assert!(layer.style_sheet.contains(FALLBACK_PRIMARY));
    }

    #[test]
    fn tuning_is_clamped()
    {
        let tuning = WaveTuning::new(Some(-1.0,), Some(f64::NAN,), Some(50.0,), false,);
        assert_eq!(tuning.speed, 0.2);
        assert_eq!(tuning.amplitude, WaveTuning::DEFAULT_AMPLITUDE);
        assert_eq!(tuning.delay, 2.0);
    }
}
