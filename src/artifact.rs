// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Card artifact writing.
//!
//! Each rendered card is stored as `<slug>.svg` next to a `<slug>.json`
//! manifest recording how it was produced, so downstream jobs can publish the
//! SVG with the right cache headers without re-rendering.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf}
};

use serde::Serialize;
use tracing::info;

use crate::error::{self, Error};

/// Paths of the files written for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAssets {
    /// Path to the rendered SVG card.
    pub svg_path:      PathBuf,
    /// Path to the JSON manifest describing the card.
    pub manifest_path: PathBuf
}

/// Render metadata stored alongside a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardManifest {
    /// `owner/name` of the rendered repository.
    pub repository:      String,
    pub width:           f64,
    pub height:          f64,
    pub theme:           String,
    pub animation_style: String,
    /// `Cache-Control` value to serve the card with.
    pub cache_control:   String,
    /// Upstream failure drawn on an error card, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error:           Option<String>
}

#[derive(Serialize)]
struct ManifestDocument<'a> {
    #[serde(flatten)]
    manifest:     &'a CardManifest,
    svg_artifact: String
}

/// Derives a file-name slug from `owner/name`.
///
/// The slug keeps lowercase ASCII letters and digits; every other run of
/// characters collapses into a single hyphen. Returns `None` when nothing
/// usable remains.
///
/// ```
/// use repocard::artifact::card_slug;
///
/// assert_eq!(card_slug("RAprogramm/Repo.Card").as_deref(), Some("raprogramm-repo-card"));
/// assert_eq!(card_slug(" /// "), None);
/// ```
pub fn card_slug(name_with_owner: &str) -> Option<String> {
    let mut slug = String::with_capacity(name_with_owner.len());
    let mut pending_hyphen = false;

    for character in name_with_owner.trim().chars() {
        if character.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(character.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() { None } else { Some(slug) }
}

/// Writes `<slug>.svg` and `<slug>.json` inside `output_dir`.
///
/// The directory hierarchy is created when missing.
///
/// # Errors
///
/// Returns [`Error::Validation`] for an empty slug, [`Error::CardIo`] when
/// directories or files cannot be written and [`Error::Serialize`] if the
/// manifest cannot be encoded.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use repocard::artifact::{CardManifest, write_card_assets};
///
/// # fn main() -> Result<(), repocard::Error> {
/// let manifest = CardManifest {
///     repository:      "octocat/hello".to_owned(),
///     width:           400.0,
///     height:          120.0,
///     theme:           "dark".to_owned(),
///     animation_style: "none".to_owned(),
///     cache_control:   repocard::cache::cache_control(None),
///     error:           None
/// };
/// let assets = write_card_assets(Path::new("cards"), "octocat-hello", "<svg/>", &manifest)?;
/// println!("SVG: {}", assets.svg_path.display());
/// # Ok(())
/// # }
/// ```
pub fn write_card_assets(
    output_dir: &Path,
    slug: &str,
    svg: &str,
    manifest: &CardManifest
) -> Result<CardAssets, Error> {
    if slug.trim().is_empty() || slug.contains(['/', '\\']) {
        return Err(Error::validation(format!(
            "card slug must be a plain file name, got '{slug}'"
        )));
    }

    fs::create_dir_all(output_dir).map_err(|source| error::card_io_error(output_dir, source))?;

    let svg_path = output_dir.join(format!("{slug}.svg"));
    let manifest_path = output_dir.join(format!("{slug}.json"));

    write_svg(&svg_path, svg)?;
    write_manifest(&manifest_path, manifest, &svg_path)?;

    info!(
        svg = %svg_path.display(),
        manifest = %manifest_path.display(),
        "wrote card artifacts"
    );

    Ok(CardAssets {
        svg_path,
        manifest_path
    })
}

fn write_svg(path: &Path, contents: &str) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| error::card_io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|source| error::card_io_error(path, source))?;
    writer
        .write_all(b"\n")
        .map_err(|source| error::card_io_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::card_io_error(path, source))
}

fn write_manifest(path: &Path, manifest: &CardManifest, svg_path: &Path) -> Result<(), Error> {
    let document = ManifestDocument {
        manifest,
        svg_artifact: svg_path.to_string_lossy().into_owned()
    };

    let file = File::create(path).map_err(|source| error::card_io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer
        .write_all(b"\n")
        .map_err(|source| error::card_io_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::card_io_error(path, source))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::Value;
    use tempfile::tempdir;

    use super::*;

    fn manifest() -> CardManifest {
        CardManifest {
            repository:      "octocat/hello".to_owned(),
            width:           400.0,
            height:          150.0,
            theme:           "dark".to_owned(),
            animation_style: "radiant".to_owned(),
            cache_control:   "max-age=7200, s-maxage=14400, stale-while-revalidate=86400"
                .to_owned(),
            error:           None
        }
    }

    #[test]
    fn writes_svg_and_manifest() {
        let dir = tempdir().expect("temp dir");
        let output = dir.path().join("nested/cards");
        let assets = write_card_assets(&output, "octocat-hello", "<svg></svg>", &manifest())
            .expect("assets written");

        assert_eq!(assets.svg_path, output.join("octocat-hello.svg"));
        let svg = fs::read_to_string(&assets.svg_path).expect("svg readable");
        assert_eq!(svg, "<svg></svg>\n");

        let json: Value = serde_json::from_str(
            &fs::read_to_string(&assets.manifest_path).expect("manifest readable")
        )
        .expect("manifest is JSON");
        assert_eq!(json["repository"], "octocat/hello");
        assert_eq!(json["height"], 150.0);
        assert_eq!(json["animation_style"], "radiant");
        assert!(json.get("error").is_none());
        assert!(
            json["svg_artifact"]
                .as_str()
                .is_some_and(|path| path.ends_with("octocat-hello.svg"))
        );
    }

    #[test]
    fn error_is_recorded_when_present() {
        let dir = tempdir().expect("temp dir");
        let mut failed = manifest();
        failed.error = Some("Repository not found".to_owned());
        let assets =
            write_card_assets(dir.path(), "missing", "<svg/>", &failed).expect("assets written");
        let contents = fs::read_to_string(assets.manifest_path).expect("manifest readable");
        assert!(contents.contains("\"error\": \"Repository not found\""));
    }

    #[test]
    fn rejects_path_like_slugs() {
        let dir = tempdir().expect("temp dir");
        for slug in ["", "  ", "../escape", "a\\b"] {
            let error = write_card_assets(dir.path(), slug, "<svg/>", &manifest())
                .expect_err("slug must be rejected");
            assert!(matches!(error, Error::Validation { .. }));
        }
    }

    #[test]
    fn unwritable_directory_reports_card_io() {
        let dir = tempdir().expect("temp dir");
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").expect("blocker written");
        let error = write_card_assets(&blocker.join("cards"), "slug", "<svg/>", &manifest())
            .expect_err("parent is a file");
        assert!(matches!(error, Error::CardIo { .. }));
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(card_slug("Owner/My_Repo--v2").as_deref(), Some("owner-my-repo-v2"));
        assert_eq!(card_slug("-lead/trail-").as_deref(), Some("lead-trail"));
        assert_eq!(card_slug("日本/語"), None);
    }

    proptest! {
        #[test]
        fn slug_contains_only_allowed_characters(input in "[A-Za-z0-9._/ -]{1,48}") {
            if let Some(slug) = card_slug(&input) {
                prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
                prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
                prop_assert!(!slug.contains("--"));
            }
        }
    }
}
