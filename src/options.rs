// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Render options and their resolution into per-card settings.
//!
//! [`RenderOptions`] mirrors the YAML documents (and CLI flags) accepted by
//! the renderer. Every field defaults independently. [`RenderOptions::resolve`]
//! derives everything the composer needs in one place, so the only coupling
//! between options (`stats_only` hiding title and text, `disable_animations`
//! overriding the style) lives here.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    animation::{AnimationSpec, WaveTuning},
    error::{self, Error},
    i18n::{DEFAULT_LOCALE, Translations},
    theme::{self, ColorOverrides, DEFAULT_THEME, ThemeColors},
};

/// Corner radius used when none is configured.
pub const DEFAULT_BORDER_RADIUS: f64 = 4.5;
/// Upper bound for `description_lines_count`.
pub const MAX_DESCRIPTION_LINES: usize = 3;

/// Timestamp used for the age badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,)]
#[serde(rename_all = "lowercase")]
pub enum AgeMetric
{
    /// Repository creation time.
    Created,
    /// Last push time.
    Pushed,
    /// First commit, falling back to creation and then last push.
    #[default]
    First,
}

impl AgeMetric
{
    /// Parses a metric name, defaulting to [`AgeMetric::First`] for anything
    /// unrecognized.
    ///
    /// ```
    /// use repocard::options::AgeMetric;
    ///
    /// assert_eq!(AgeMetric::parse("Pushed"), AgeMetric::Pushed);
    /// assert_eq!(AgeMetric::parse("oldest"), AgeMetric::First);
    /// ```
    pub fn parse(value: &str,) -> Self
    {
        match value.trim().to_ascii_lowercase().as_str() {
            "created" => Self::Created,
            "pushed" => Self::Pushed,
            _ => Self::First,
        }
    }
}

/// User-facing render options.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(default)]
pub struct RenderOptions
{
    pub hide_border:             bool,
    pub hide_title:              bool,
    pub hide_text:               bool,
    /// Hides title and description, leaving only the stat row.
    pub stats_only:              bool,
    /// Shows `owner/name` instead of `name` in the header.
    pub show_owner:              bool,
    pub title_color:             Option<String,>,
    pub icon_color:              Option<String,>,
    pub text_color:              Option<String,>,
    /// Solid hex color, or `angle,color,color[,...]` for a gradient.
    #[serde(alias = "background_color")]
    pub bg_color:                Option<String,>,
    pub border_color:            Option<String,>,
    pub theme:                   String,
    pub border_radius:           Option<f64,>,
    pub locale:                  Option<String,>,
    /// Fixed number of description lines, clamped to 1..=3.
    pub description_lines_count: Option<i64,>,
    pub show_issues:             bool,
    pub show_prs:                bool,
    pub show_age:                bool,
    /// `created`, `pushed` or `first`.
    pub age_metric:              String,
    /// `none`, `bubbles`, `embers`, `radiant`, `circuit` or `sparks`.
    pub animation_style:         String,
    pub disable_animations:      bool,
    pub wave_speed:              Option<f64,>,
    pub wave_amplitude:          Option<f64,>,
    pub wave_delay:              Option<f64,>,
    pub color_morph:             bool,
}

impl Default for RenderOptions
{
    fn default() -> Self
    {
        Self {
            hide_border:             false,
            hide_title:              false,
            hide_text:               false,
            stats_only:              false,
            show_owner:              false,
            title_color:             None,
            icon_color:              None,
            text_color:              None,
            bg_color:                None,
            border_color:            None,
            theme:                   DEFAULT_THEME.to_owned(),
            border_radius:           None,
            locale:                  None,
            description_lines_count: None,
            show_issues:             false,
            show_prs:                false,
            show_age:                false,
            age_metric:              "first".to_owned(),
            animation_style:         "none".to_owned(),
            disable_animations:      false,
            wave_speed:              None,
            wave_amplitude:          None,
            wave_delay:              None,
            color_morph:             false,
        }
    }
}

/// Settings derived from [`RenderOptions`] for a single render.
#[derive(Debug, Clone, PartialEq,)]
pub struct CardSettings
{
    pub hide_border:        bool,
    pub hide_title:         bool,
    pub hide_text:          bool,
    /// Title and description both hidden; only the stat row is drawn.
    pub compact:            bool,
    pub show_owner:         bool,
    pub show_issues:        bool,
    pub show_prs:           bool,
    pub show_age:           bool,
    pub age_metric:         AgeMetric,
    pub border_radius:      f64,
    pub colors:             ThemeColors,
    pub translations:       Translations,
    /// Configured description line count, already clamped.
    pub description_lines:  Option<usize,>,
    pub animation:          AnimationSpec,
    /// Emit a rule stopping every CSS animation on the card.
    pub animation_disabled: bool,
}

impl RenderOptions
{
    /// Resolves option values into [`CardSettings`].
    ///
    /// ```
    /// use repocard::options::RenderOptions;
    ///
    /// let options = RenderOptions { stats_only: true, ..RenderOptions::default() };
    /// let settings = options.resolve();
    /// assert!(settings.hide_title && settings.hide_text && settings.compact);
    /// ```
    pub fn resolve(&self,) -> CardSettings
    {
        let hide_title = self.hide_title || self.stats_only;
        let hide_text = self.hide_text || self.stats_only;

        let overrides = ColorOverrides {
            title:      self.title_color.as_deref(),
            icon:       self.icon_color.as_deref(),
            text:       self.text_color.as_deref(),
            background: self.bg_color.as_deref(),
            border:     self.border_color.as_deref(),
        };

        let locale = self.locale.as_deref().unwrap_or(DEFAULT_LOCALE,);
        if !Translations::is_supported(locale,) {
            tracing::debug!(locale, "unsupported locale, using English labels");
        }

        let tuning =
            WaveTuning::new(self.wave_speed, self.wave_amplitude, self.wave_delay, self.color_morph,);

        CardSettings {
            hide_border: self.hide_border,
            hide_title,
            hide_text,
            compact: hide_title && hide_text,
            show_owner: self.show_owner,
            show_issues: self.show_issues,
            show_prs: self.show_prs,
            show_age: self.show_age,
            age_metric: AgeMetric::parse(&self.age_metric,),
            border_radius: self
                .border_radius
                .filter(|radius| radius.is_finite() && *radius >= 0.0,)
                .unwrap_or(DEFAULT_BORDER_RADIUS,),
            colors: theme::resolve_colors(&self.theme, &overrides,),
            translations: Translations::for_locale(locale,),
            description_lines: self
                .description_lines_count
                .map(|count| count.clamp(1, MAX_DESCRIPTION_LINES as i64,) as usize,),
            animation: AnimationSpec::resolve(&self.animation_style, self.disable_animations, tuning,),
            animation_disabled: self.disable_animations,
        }
    }

    /// Rejects values that cannot be clamped into something meaningful.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a negative or non-finite
    /// `border_radius` and for non-finite wave tuning values.
    pub fn validate(&self,) -> Result<(), Error,>
    {
        if let Some(radius,) = self.border_radius
            && (!radius.is_finite() || radius < 0.0)
        {
            return Err(Error::validation(format!(
                "border_radius must be a non-negative number, got {radius}"
            ),),);
        }

        for (field, value,) in [
            ("wave_speed", self.wave_speed,),
            ("wave_amplitude", self.wave_amplitude,),
            ("wave_delay", self.wave_delay,),
        ] {
            if value.is_some_and(|v| !v.is_finite(),) {
                return Err(Error::validation(format!("{field} must be a finite number"),),);
            }
        }

        Ok((),)
    }
}

/// Parses render options from a YAML document.
///
/// An empty document yields [`RenderOptions::default`].
///
/// # Errors
///
/// Propagates [`Error::Parse`] for malformed YAML and
/// [`Error::Validation`] from [`RenderOptions::validate`].
pub fn parse_options(contents: &str,) -> Result<RenderOptions, Error,>
{
    if contents.trim().is_empty() {
        return Ok(RenderOptions::default(),);
    }

    let options: RenderOptions = serde_yaml::from_str(contents,)?;
    options.validate()?;
    Ok(options,)
}

/// Loads render options from a YAML file.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, plus everything
/// [`parse_options`] can return.
pub fn load_options(path: &Path,) -> Result<RenderOptions, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_options(&contents,)
}

#[cfg(test)]
mod tests
{
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::animation::AnimationStyle;

    #[test]
    fn defaults_match_documented_values()
    {
        let settings = RenderOptions::default().resolve();
        assert!(!settings.compact);
        assert_eq!(settings.border_radius, DEFAULT_BORDER_RADIUS);
        assert_eq!(settings.age_metric, AgeMetric::First);
        assert_eq!(settings.animation.style, AnimationStyle::None);
        assert_eq!(settings.description_lines, None);
        assert_eq!(settings.colors.title, "#2f80ed");
        assert_eq!(settings.translations.archived, "Archived");
    }

    #[test]
    fn parses_yaml_document()
    {
        let yaml = r#"
theme: dark
hide_border: true
title_color: "ff0000"
locale: de
description_lines_count: 7
show_age: true
age_metric: pushed
animation_style: Bubbles
wave_speed: 4
color_morph: true
"#;
        let options = parse_options(yaml,).expect("valid options",);
        let settings = options.resolve();
        assert!(settings.hide_border);
        assert_eq!(settings.colors.title, "#ff0000");
        assert_eq!(settings.colors.icon, "#79ff97");
        assert_eq!(settings.translations.template, "Vorlage");
        assert_eq!(settings.description_lines, Some(3));
        assert_eq!(settings.age_metric, AgeMetric::Pushed);
        assert_eq!(settings.animation.style, AnimationStyle::Bubbles);
        assert_eq!(settings.animation.tuning.speed, 4.0);
        assert!(settings.animation.tuning.color_morph);
    }

    #[test]
    fn empty_document_gives_defaults()
    {
        assert_eq!(parse_options("  \n",).expect("defaults",), RenderOptions::default());
    }

    #[test]
    fn unknown_keys_are_ignored()
    {
        let options = parse_options("legacy_flag: true\nhide_text: true\n",).expect("valid options",);
        assert!(options.hide_text);
    }

    #[test]
    fn malformed_yaml_is_a_parse_error()
    {
        let error = parse_options("hide_border: [oops\n",).expect_err("malformed",);
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn negative_border_radius_is_rejected()
    {
        let error = parse_options("border_radius: -2\n",).expect_err("negative radius",);
        assert!(error.to_string().contains("border_radius"));
    }

    #[test]
    fn description_lines_are_clamped_from_below()
    {
        let options = RenderOptions {
            description_lines_count: Some(-4,), ..RenderOptions::default()
        };
        assert_eq!(options.resolve().description_lines, Some(1));
    }

    #[test]
    fn disable_animations_wins_over_style()
    {
        let options = RenderOptions {
            animation_style: "sparks".to_owned(),
            disable_animations: true,
            ..RenderOptions::default()
        };
        assert!(!options.resolve().animation.is_enabled());
    }

    #[test]
    fn hide_flags_alone_make_card_compact()
    {
        let options = RenderOptions {
            hide_title: true, hide_text: true, ..RenderOptions::default()
        };
        assert!(options.resolve().compact);
        let only_title = RenderOptions {
            hide_title: true, ..RenderOptions::default()
        };
        assert!(!only_title.resolve().compact);
    }

    #[test]
    fn loads_options_from_file()
    {
        let mut file = NamedTempFile::new().expect("temp file",);
        writeln!(file, "theme: nord\nshow_issues: true").expect("write options",);
        let options = load_options(file.path(),).expect("load options",);
        assert_eq!(options.theme, "nord");
        assert!(options.show_issues);
    }

    #[test]
    fn missing_file_reports_path()
    {
        let error = load_options(Path::new("/definitely/missing/options.yaml",),).expect_err("missing",);
        assert!(matches!(error, Error::Io { .. }));
    }
}
