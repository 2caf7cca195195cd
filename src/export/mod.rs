//! Organization member export
//!
//! Resolves the organization, walks its members, projects the requested
//! fields and hands each record to the formatter for the chosen format.

mod projection;
mod request;

use futures::stream::TryStreamExt;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::io::Write;

use crate::config::defaults;
use crate::error::Result;
use crate::github::{GitHubClient, User};
use crate::output::MemberFormatter;
use crate::ui::{create_spinner, finish_spinner, update_spinner};

pub use projection::{project, MemberRecord};
pub use request::{Destination, ExportRequest};

/// Exports the members of one organization through an authenticated session
pub struct Exporter {
    client: GitHubClient,
    prefetch: usize,
    show_progress: bool,
}

impl Exporter {
    /// Sequential profile fetches, no spinner
    pub fn new(client: GitHubClient) -> Self {
        Self {
            client,
            prefetch: defaults::PROFILE_PREFETCH as usize,
            show_progress: false,
        }
    }

    /// Allow up to `prefetch` profile fetches in flight
    pub fn with_prefetch(mut self, prefetch: usize) -> Self {
        self.prefetch = prefetch.max(1);
        self
    }

    /// Show a spinner on stderr while members are fetched
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run one export, returning the number of members written
    ///
    /// The destination is opened only once the organization has been found,
    /// so a failed lookup leaves it untouched. Any later failure aborts the
    /// export; a file destination may then hold partial output.
    pub async fn export(&self, request: &ExportRequest) -> Result<usize> {
        let mut unknown = request
            .field_names
            .iter()
            .filter(|field| !User::is_known_field(field))
            .peekable();
        if unknown.peek().is_some() {
            for field in unknown {
                warn!(
                    "'{}' is not a known profile field, its values will be empty",
                    field
                );
            }
            debug!(
                "Known profile fields: {}",
                User::known_fields().collect::<Vec<_>>().join(", ")
            );
        }

        let org = self.client.find_organization(&request.org_name).await?;
        info!("Exporting members of '{}' as {}", org.login, request.format);

        let mut out = request.destination.open()?;
        debug!("Writing {} output to {}", request.format, request.destination);

        let written = self.write_members(&org.login, request, &mut out).await?;
        out.flush()?;
        Ok(written)
    }

    async fn write_members(
        &self,
        org: &str,
        request: &ExportRequest,
        out: &mut dyn Write,
    ) -> Result<usize> {
        let spinner = create_spinner(
            &format!("Fetching members of '{}'...", org),
            !self.show_progress,
        );

        let mut formatter = request.format.formatter();
        let result = self
            .stream_members(org, request, formatter.as_mut(), out, &spinner)
            .await;
        finish_spinner(spinner);

        let written = result?;
        formatter.finish(out)?;
        debug!("Wrote {} members of '{}'", written, org);
        Ok(written)
    }

    async fn stream_members(
        &self,
        org: &str,
        request: &ExportRequest,
        formatter: &mut dyn MemberFormatter,
        out: &mut dyn Write,
        spinner: &Option<ProgressBar>,
    ) -> Result<usize> {
        formatter.begin(&request.field_names, out)?;

        let mut profiles = std::pin::pin!(self.client.member_profiles(org, self.prefetch));
        let mut written = 0usize;
        while let Some(user) = profiles.try_next().await? {
            formatter.record(project(&user, &request.field_names), out)?;
            written += 1;
            update_spinner(spinner, format!("Fetched {} members of '{}'...", written, org));
        }
        Ok(written)
    }
}
