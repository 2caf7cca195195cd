//! Organization API operations

use futures::stream::{Stream, TryStreamExt};
use log::debug;

use crate::config::api;
use crate::error::{GhError, Result};
use crate::github::GitHubClient;

use super::models::Organization;

impl GitHubClient {
    /// Lazily list the organizations the token owner belongs to
    pub fn organizations(&self) -> impl Stream<Item = Result<Organization>> + '_ {
        self.paginate(api::USER_ORGS, "organizations".to_string())
    }

    /// Find an organization by exact login
    ///
    /// Scans the listing in order and stops at the first match; later pages
    /// are not requested once it is found.
    pub async fn find_organization(&self, login: &str) -> Result<Organization> {
        debug!("Looking for organization '{}'", login);

        let mut orgs = std::pin::pin!(self.organizations());
        let mut scanned = 0usize;
        while let Some(org) = orgs.try_next().await? {
            scanned += 1;
            if org.matches(login) {
                debug!(
                    "Found organization '{}' (id {}) after {} entries",
                    org.login,
                    org.id.map(|id| id.to_string()).unwrap_or_default(),
                    scanned
                );
                return Ok(org);
            }
        }

        debug!("Organization '{}' not among {} visible organizations", login, scanned);
        Err(GhError::OrganizationNotFound(login.to_string()))
    }
}
