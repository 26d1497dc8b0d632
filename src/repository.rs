// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Repository data consumed by the card composer.
//!
//! [`RepositoryRecord`] accepts both the GitHub GraphQL repository shape
//! (`stargazers { totalCount }`, `forkCount`, ...) and a flat JSON record with
//! plain numbers. Missing counts default to zero and timestamps that are absent
//! or not ISO-8601 become `None`, so a sparse record still renders.

use std::{fs, path::Path};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::{self, Error},
    options::AgeMetric,
};

/// Primary language of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
pub struct Language
{
    pub name:  String,
    /// Display color, usually `#rrggbb`; GitHub reports `null` for some
    /// languages.
    #[serde(default)]
    pub color: Option<String,>,
}

/// Repository fields rendered on a card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord
{
    pub name:              String,
    #[serde(default)]
    pub name_with_owner:   String,
    #[serde(default)]
    pub description:       Option<String,>,
    #[serde(default)]
    pub primary_language:  Option<Language,>,
    #[serde(default)]
    pub is_archived:       bool,
    #[serde(default)]
    pub is_template:       bool,
    #[serde(default, alias = "stargazerCount", deserialize_with = "count")]
    pub stargazers:        u64,
    #[serde(default, alias = "forkCount", deserialize_with = "count")]
    pub forks:             u64,
    #[serde(default, alias = "openIssues", deserialize_with = "count")]
    pub issues:            u64,
    #[serde(default, alias = "openPrs", deserialize_with = "count")]
    pub pull_requests:     u64,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at:        Option<DateTime<Utc,>,>,
    #[serde(default, deserialize_with = "timestamp")]
    pub pushed_at:         Option<DateTime<Utc,>,>,
    #[serde(default, deserialize_with = "timestamp")]
    pub first_commit_date: Option<DateTime<Utc,>,>,
}

#[derive(Deserialize,)]
#[serde(untagged)]
enum CountField
{
    Plain(i64,),
    Connection
    {
        #[serde(rename = "totalCount")]
        total_count: i64,
    },
    Missing(Option<()>,),
}

fn count<'de, D,>(deserializer: D,) -> Result<u64, D::Error,>
where
    D: Deserializer<'de,>,
{
    let value = match CountField::deserialize(deserializer,)? {
        CountField::Plain(value,)
        | CountField::Connection {
            total_count: value,
        } => value,
        CountField::Missing(_,) => 0,
    };
    Ok(u64::try_from(value,).unwrap_or(0,),)
}

fn timestamp<'de, D,>(deserializer: D,) -> Result<Option<DateTime<Utc,>,>, D::Error,>
where
    D: Deserializer<'de,>,
{
    let raw = Option::<String,>::deserialize(deserializer,)?;
    Ok(raw
        .and_then(|value| DateTime::parse_from_rfc3339(value.trim(),).ok(),)
        .map(|parsed| parsed.with_timezone(&Utc,),),)
}

impl RepositoryRecord
{
    /// Decodes a record from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] when the document is not valid JSON or
    /// lacks a `name`, and [`Error::Validation`] when the name is blank.
    pub fn from_json(contents: &str,) -> Result<Self, Error,>
    {
        let record: Self = serde_json::from_str(contents,)?;
        if record.name.trim().is_empty() {
            return Err(Error::validation("repository record must have a name",),);
        }
        Ok(record,)
    }

    /// Reads a JSON record file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and the errors of
    /// [`RepositoryRecord::from_json`] otherwise.
    pub fn load(path: &Path,) -> Result<Self, Error,>
    {
        let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
        Self::from_json(&contents,)
    }

    /// Owner login taken from `name_with_owner`, if present.
    pub fn owner(&self,) -> Option<&str,>
    {
        self.name_with_owner.split_once('/',).map(|(owner, _,)| owner,).filter(|owner| !owner.is_empty(),)
    }

    /// Header text: `owner/name` when requested and known, else `name`.
    pub fn display_name(&self, show_owner: bool,) -> &str
    {
        if show_owner && !self.name_with_owner.is_empty() { &self.name_with_owner } else { &self.name }
    }

    /// Timestamp the age badge measures from.
    ///
    /// [`AgeMetric::First`] falls back to the creation time and then the last
    /// push when the first commit is unknown.
    pub fn age_timestamp(&self, metric: AgeMetric,) -> Option<DateTime<Utc,>,>
    {
        match metric {
            AgeMetric::Created => self.created_at,
            AgeMetric::Pushed => self.pushed_at,
            AgeMetric::First => self.first_commit_date.or(self.created_at,).or(self.pushed_at,),
        }
    }
}
