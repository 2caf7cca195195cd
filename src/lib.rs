//! github-users - Export the members of a GitHub organization
//!
//! Authenticates with an access token, finds an organization by its exact
//! login, fetches the full profile of every member and writes the selected
//! profile fields as CSV, JSON or pretty-printed text.
//!
//! # Features
//!
//! - Exact, case-sensitive organization lookup
//! - Any profile field by name; unknown fields export as empty strings
//! - Output to a file (overwritten) or stdout
//! - Lazy pagination over the organization and member listings
//! - Optional bounded prefetch of member profiles, order preserved
//!
//! # Example
//!
//! ```bash
//! # Quick list of names and logins
//! github-users krux
//!
//! # CSV file with locations
//! github-users krux -f csv -o users.csv -n name -n login -n location
//!
//! # JSON, token from the environment
//! GITHUB_TOKEN=ghp_xxx github-users krux -f json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod github;
pub mod output;
pub mod ui;

pub use cli::{Cli, OutputFormat};
pub use error::{GhError, Result};
pub use export::{project, Destination, ExportRequest, Exporter, MemberRecord};
pub use github::{GitHubClient, MemberSummary, Organization, User};
pub use output::{CsvFormatter, JsonFormatter, MemberFormatter, PrettyFormatter};
