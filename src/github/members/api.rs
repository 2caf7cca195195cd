//! Organization member API operations

use futures::stream::{Stream, TryStreamExt};
use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::github::{GitHubClient, User};

use super::models::MemberSummary;

impl GitHubClient {
    /// Lazily list the members of an organization (reduced entries)
    pub fn members(&self, org: &str) -> impl Stream<Item = Result<MemberSummary>> + '_ {
        let path = format!("{}/{}/members", api::ORGS, urlencoding::encode(org));
        self.paginate(&path, format!("members of '{}'", org))
    }

    /// Lazily produce the full profile of every member of an organization
    ///
    /// Each listed member costs one extra `GET /users/{login}`. Up to
    /// `prefetch` profile requests run at once; members are still yielded in
    /// listing order. The first failed fetch ends the stream with that error.
    pub fn member_profiles(
        &self,
        org: &str,
        prefetch: usize,
    ) -> impl Stream<Item = Result<User>> + '_ {
        self.members(org)
            .map_ok(move |member| async move {
                debug!("Fetching profile for member '{}'", member.login);
                self.get_user(&member.login).await
            })
            .try_buffered(prefetch.max(1))
    }
}
