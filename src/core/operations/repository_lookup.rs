//! Repository lookup by name.

use tracing::{debug, error};

use crate::api::DevOpsGateway;
use crate::error::AdoPrError;
use crate::models::Repository;

/// Returns the first repository whose name equals `name` exactly.
///
/// Matching is case-sensitive; listing order decides between duplicates.
pub fn resolve_repository(
    repositories: Vec<Repository>,
    name: &str,
) -> Result<Repository, AdoPrError> {
    repositories
        .into_iter()
        .find(|repo| repo.name == name)
        .ok_or_else(|| AdoPrError::RepositoryNotFound {
            name: name.to_string(),
            cause: None,
        })
}

/// Lists the repositories through `gateway` and resolves `name` among them.
///
/// A failed listing is reported as not found; the listing error is logged
/// and kept as the cause.
pub async fn fetch_repository(
    gateway: &dyn DevOpsGateway,
    name: &str,
) -> Result<Repository, AdoPrError> {
    let repositories = match gateway.list_repositories().await {
        Ok(repositories) => repositories,
        Err(e) => {
            error!(repository = name, error = %e, "failed to list repositories");
            return Err(AdoPrError::RepositoryNotFound {
                name: name.to_string(),
                cause: Some(e.to_string()),
            });
        }
    };

    let repository = resolve_repository(repositories, name)?;
    debug!(repository = %repository.name, id = %repository.id, "repository resolved");
    Ok(repository)
}
