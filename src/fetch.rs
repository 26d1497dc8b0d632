// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fetches repository records through the GitHub GraphQL API.
//!
//! The owner login is looked up both as a user and as an organization in a
//! single query. Private repositories are reported as not found. When the
//! default branch has more than one commit, a second query jumps to the end of
//! its history to read the first commit date.

use chrono::{DateTime, Utc};
use masterror::AppError;
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::repository::RepositoryRecord;

const REPOSITORY_QUERY: &str = r#"
fragment RepoInfo on Repository {
  name
  nameWithOwner
  isPrivate
  isArchived
  isTemplate
  stargazers { totalCount }
  description
  primaryLanguage { color id name }
  forkCount
  issues(states: OPEN) { totalCount }
  pullRequests(states: OPEN) { totalCount }
  createdAt
  pushedAt
  defaultBranchRef {
    target {
      ... on Commit {
        oid
        committedDate
        history(first: 1) { totalCount }
      }
    }
  }
}
query getRepo($login: String!, $repo: String!) {
  user(login: $login) { repository(name: $repo) { ...RepoInfo } }
  organization(login: $login) { repository(name: $repo) { ...RepoInfo } }
}
"#;

const FIRST_COMMIT_QUERY: &str = r#"
query firstCommit($owner: String!, $name: String!, $cursor: String!) {
  repository(owner: $owner, name: $name) {
    defaultBranchRef {
      target {
        ... on Commit {
          history(first: 1, after: $cursor) { nodes { committedDate } }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Deserialize,)]
struct GraphQlResponse<T,>
{
    data:   Option<T,>,
    #[serde(default)]
    errors: Vec<GraphQlError,>,
}

#[derive(Debug, Deserialize,)]
struct GraphQlError
{
    message: String,
    #[serde(rename = "type", default)]
    kind:    Option<String,>,
}

#[derive(Debug, Deserialize,)]
struct OwnerLookup
{
    user:         Option<OwnerRepository,>,
    organization: Option<OwnerRepository,>,
}

#[derive(Debug, Deserialize,)]
struct OwnerRepository
{
    repository: Option<RepositoryNode,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode
{
    #[serde(flatten)]
    record:             RepositoryRecord,
    #[serde(default)]
    is_private:         bool,
    #[serde(default)]
    default_branch_ref: Option<BranchRef,>,
}

#[derive(Debug, Deserialize,)]
struct BranchRef
{
    target: Option<CommitTarget,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct CommitTarget
{
    oid:            Option<String,>,
    committed_date: Option<DateTime<Utc,>,>,
    history:        Option<History,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct History
{
    #[serde(default)]
    total_count: u64,
    #[serde(default)]
    nodes:       Vec<CommitNode,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct CommitNode
{
    committed_date: Option<DateTime<Utc,>,>,
}

#[derive(Debug, Deserialize,)]
struct FirstCommitLookup
{
    repository: Option<FirstCommitRepository,>,
}

#[derive(Debug, Deserialize,)]
#[serde(rename_all = "camelCase")]
struct FirstCommitRepository
{
    default_branch_ref: Option<BranchRef,>,
}

/// Builds an authenticated GitHub client.
///
/// # Errors
///
/// Returns [`AppError`] when the client cannot be constructed.
pub fn client(token: &str,) -> Result<Octocrab, AppError,>
{
    Octocrab::builder().personal_token(token.to_owned(),).build().map_err(|e| {
        AppError::unauthorized(format!("failed to initialize GitHub client: {e}"),)
    },)
}

/// Splits `owner/name` into its two parts.
///
/// # Errors
///
/// Returns a validation [`AppError`] unless the input has exactly one slash
/// separating two non-empty parts.
pub fn parse_slug(slug: &str,) -> Result<(&str, &str,), AppError,>
{
    match slug.trim().split_once('/',) {
        Some((owner, name,),)
            if !owner.is_empty() && !name.is_empty() && !name.contains('/',) =>
        {
            Ok((owner, name,),)
        }
        _ => Err(AppError::validation(format!("expected owner/name, got '{slug}'"),),),
    }
}

/// Fetches the repository `owner/name`.
///
/// # Errors
///
/// Returns [`AppError`] when the request fails, when neither a user nor an
/// organization owns a matching repository, or when the repository is
/// private.
///
/// # Example
///
/// ```no_run
/// use repocard::fetch::{client, fetch_repository};
///
/// # async fn example() -> Result<(), masterror::AppError> {
/// let token = std::env::var("GITHUB_TOKEN",).unwrap_or_default();
/// let octocrab = client(&token,)?;
/// let record = fetch_repository(&octocrab, "rust-lang", "rust",).await?;
/// println!("{} stars", record.stargazers);
/// # Ok(())
/// # }
/// ```
pub async fn fetch_repository(
    octocrab: &Octocrab,
    owner: &str,
    name: &str,
) -> Result<RepositoryRecord, AppError,>
{
    debug!(owner, name, "fetching repository");
    let payload = json!({
        "query": REPOSITORY_QUERY,
        "variables": { "login": owner, "repo": name },
    });
    let response: GraphQlResponse<OwnerLookup,> = octocrab
        .graphql(&payload,)
        .await
        .map_err(|e| AppError::service(format!("GitHub GraphQL request failed: {e}"),),)?;

    let node = select_repository(response,)?;
    let mut record = node.record;

    if let Some(target,) = node.default_branch_ref.and_then(|branch| branch.target,) {
        let total = target.history.as_ref().map_or(0, |history| history.total_count,);
        record.first_commit_date = match (target.oid.as_deref(), history_cursor(total,),) {
            (Some(oid,), Some(offset,),) => {
                fetch_first_commit_date(octocrab, owner, name, &format!("{oid} {offset}"),).await?
            }
            _ => target.committed_date,
        };
    }

    info!(repository = %record.name_with_owner, stars = record.stargazers, "fetched repository");
    Ok(record,)
}

/// Offset for a history cursor pointing just before the oldest commit.
fn history_cursor(total_commits: u64,) -> Option<u64,>
{
    (total_commits > 1).then(|| total_commits - 2,)
}

fn select_repository(response: GraphQlResponse<OwnerLookup,>,) -> Result<RepositoryNode, AppError,>
{
    let Some(data,) = response.data else {
        let message = response
            .errors
            .first()
            .map_or_else(|| "empty GraphQL response".to_owned(), |error| error.message.clone(),);
        let rate_limited =
            response.errors.iter().any(|error| error.kind.as_deref() == Some("RATE_LIMITED"),);
        return Err(if rate_limited { AppError::rate_limited(message,) } else { AppError::service(message,) },);
    };

    let user_repo = data.user.and_then(|owner| owner.repository,);
    let org_repo = data.organization.and_then(|owner| owner.repository,);

    match (user_repo, org_repo,) {
        (Some(node,), _,) | (None, Some(node,),) if !node.is_private => Ok(node,),
        (None, None,) => Err(AppError::not_found("Repository not found",),),
        _ => Err(AppError::not_found("Repository is private",),),
    }
}

async fn fetch_first_commit_date(
    octocrab: &Octocrab,
    owner: &str,
    name: &str,
    cursor: &str,
) -> Result<Option<DateTime<Utc,>,>, AppError,>
{
    debug!(owner, name, cursor, "resolving first commit");
    let payload = json!({
        "query": FIRST_COMMIT_QUERY,
        "variables": { "owner": owner, "name": name, "cursor": cursor },
    });
    let response: GraphQlResponse<FirstCommitLookup,> = octocrab
        .graphql(&payload,)
        .await
        .map_err(|e| AppError::service(format!("failed to fetch first commit: {e}"),),)?;

    Ok(first_commit_date(response,),)
}

fn first_commit_date(response: GraphQlResponse<FirstCommitLookup,>,) -> Option<DateTime<Utc,>,>
{
    response
        .data?
        .repository?
        .default_branch_ref?
        .target?
        .history?
        .nodes
        .into_iter()
        .next()?
        .committed_date
}

#[cfg(test)]
mod tests
{
    use masterror::AppErrorKind;

    use super::*;

    fn lookup(json: &str,) -> GraphQlResponse<OwnerLookup,>
    {
        serde_json::from_str(json,).expect("valid response",)
    }

    const USER_REPO: &str = r##"{
        "data": {
            "user": { "repository": {
                "name": "repocard",
                "nameWithOwner": "octocat/repocard",
                "isPrivate": false,
                "isArchived": true,
                "isTemplate": false,
                "stargazers": { "totalCount": 12 },
                "description": null,
                "primaryLanguage": { "color": "#dea584", "id": "x", "name": "Rust" },
                "forkCount": 1,
                "issues": { "totalCount": 2 },
                "pullRequests": { "totalCount": 4 },
                "createdAt": "2021-03-04T05:06:07Z",
                "pushedAt": "2024-01-01T00:00:00Z",
                "defaultBranchRef": { "target": {
                    "oid": "abc123",
                    "committedDate": "2024-01-01T00:00:00Z",
                    "history": { "totalCount": 57 }
                } }
            } },
            "organization": null
        },
        "errors": [{ "type": "NOT_FOUND", "message": "Could not resolve to an Organization" }]
    }"##;

    #[test]
    fn picks_user_repository_despite_org_error()
    {
        let node = select_repository(lookup(USER_REPO,),).expect("repository",);
        assert_eq!(node.record.name_with_owner, "octocat/repocard");
        assert_eq!(node.record.stargazers, 12);
        assert_eq!(node.record.pull_requests, 4);
        assert!(node.record.is_archived);
        let language = node.record.primary_language.as_ref().expect("language",);
        assert_eq!(language.color.as_deref(), Some("#dea584"));
        let history = node.default_branch_ref.and_then(|b| b.target,).and_then(|t| t.history,);
        assert_eq!(history.map(|h| h.total_count), Some(57));
    }

    #[test]
    fn private_repository_is_not_found()
    {
        let json = USER_REPO.replace("\"isPrivate\": false", "\"isPrivate\": true",);
        let error = select_repository(lookup(&json,),).expect_err("private",);
        assert_eq!(error.kind, AppErrorKind::NotFound);
    }

    #[test]
    fn missing_repository_is_not_found()
    {
        let json = r#"{"data": {"user": {"repository": null}, "organization": null}}"#;
        let error = select_repository(lookup(json,),).expect_err("missing",);
        assert_eq!(error.kind, AppErrorKind::NotFound);
    }

    #[test]
    fn rate_limit_is_reported()
    {
        let json = r#"{"data": null, "errors": [{"type": "RATE_LIMITED", "message": "API rate limit exceeded"}]}"#;
        let error = select_repository(lookup(json,),).expect_err("rate limited",);
        assert_eq!(error.kind, AppErrorKind::RateLimited);
    }

    #[test]
    fn cursor_skips_to_oldest_commit()
    {
        assert_eq!(history_cursor(0,), None);
        assert_eq!(history_cursor(1,), None);
        assert_eq!(history_cursor(2,), Some(0));
        assert_eq!(history_cursor(57,), Some(55));
    }

    #[test]
    fn reads_first_commit_date()
    {
        let json = r#"{"data": {"repository": {"defaultBranchRef": {"target": {
            "history": {"nodes": [{"committedDate": "2019-09-09T09:09:09Z"}]}
        }}}}}"#;
        let response: GraphQlResponse<FirstCommitLookup,> =
            serde_json::from_str(json,).expect("valid response",);
        let date = first_commit_date(response,).expect("date",);
        assert_eq!(date.to_rfc3339(), "2019-09-09T09:09:09+00:00");
    }

    #[test]
    fn slug_parsing()
    {
        assert_eq!(parse_slug("octocat/hello").ok(), Some(("octocat", "hello")));
        assert!(parse_slug("octocat").is_err());
        assert!(parse_slug("/hello").is_err());
        assert!(parse_slug("a/b/c").is_err());
    }
}
