//! GitHub API client module
//!
//! Authentication, lazy pagination and the organization, member and user
//! endpoints needed to export an organization's members.

mod client;
pub mod members;
pub mod organizations;
pub mod users;

pub use client::GitHubClient;
pub use members::MemberSummary;
pub use organizations::Organization;
pub use users::User;
