use crate::config::{env_value, REPOSITORY_VAR};
use crate::error::{Error, Result};
use crate::RepositoryId;

/// Resolves the repository to report on.
///
/// An explicit `owner/name` wins; otherwise `GITHUB_REPOSITORY` is used.
pub fn resolve_repository(explicit: Option<&str>) -> Result<RepositoryId> {
    match explicit.filter(|repo| !repo.is_empty()) {
        Some(repo) => parse_repository(repo),
        None => {
            let repo = env_value(REPOSITORY_VAR).ok_or(Error::MissingRepository)?;
            parse_repository(&repo)
        }
    }
}

/// Parses `owner/name`. Exactly one `/` with non-empty segments is accepted.
pub fn parse_repository(repo: &str) -> Result<RepositoryId> {
    let mut parts = repo.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
            Ok(RepositoryId {
                owner: owner.to_string(),
                name: name.to_string(),
            })
        }
        _ => Err(Error::InvalidFormat(repo.to_string())),
    }
}
