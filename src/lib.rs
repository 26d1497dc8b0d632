// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! SVG repository cards in the style of GitHub pinned repositories.
//!
//! The composition core turns a [`RepositoryRecord`] plus [`RenderOptions`]
//! into one self-contained SVG string. It is synchronous and performs no I/O:
//! text is measured with a built-in width table ([`measure`]), wrapped by
//! grapheme cluster ([`wrap`]), stat badges are packed by [`layout`], and
//! optional decorative layers come from [`animation`]. Randomized animation
//! styles draw from an injectable [`RandomSource`], so rendering is fully
//! reproducible under test.
//!
//! Around the core sit option loading ([`options`]), GitHub fetching
//! ([`fetch`]), cache headers ([`cache`]) and artifact writing ([`artifact`]).
//!
//! ```
//! use chrono::Utc;
//! use repocard::{RenderOptions, RepositoryRecord, SequenceRandom, render_repo_card_at};
//!
//! let repo = RepositoryRecord {
//!     name: "hello-world".to_owned(),
//!     description: Some("My first repository".to_owned(),),
//!     stargazers: 2_400,
//!     ..RepositoryRecord::default()
//! };
//! let options = RenderOptions { theme: "dark".to_owned(), ..RenderOptions::default() };
//! let svg = render_repo_card_at(&repo, &options, Utc::now(), &mut SequenceRandom::default(),);
//! assert!(svg.contains(">2.4k</text>"));
//! ```

pub mod animation;
pub mod artifact;
pub mod cache;
pub mod card;
pub mod emoji;
mod error;
pub mod fetch;
pub mod format;
pub mod i18n;
pub mod icons;
pub mod layout;
pub mod measure;
pub mod options;
pub mod repository;
pub mod svg;
pub mod theme;
pub mod wrap;

pub use animation::{AnimationStyle, RandomSource, SequenceRandom, StdRandom};
pub use card::{RenderedCard, compose_card, render_error_card, render_repo_card, render_repo_card_at};
pub use error::{Error, card_io_error, io_error};
pub use options::{CardSettings, RenderOptions, load_options, parse_options};
pub use repository::RepositoryRecord;
