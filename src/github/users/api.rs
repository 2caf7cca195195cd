//! User API operations

use crate::config::api;
use crate::error::Result;
use crate::github::GitHubClient;

use super::models::User;

impl GitHubClient {
    /// Get the profile of the token owner
    pub async fn get_authenticated_user(&self) -> Result<User> {
        self.fetch_one(api::USER, "authenticated user").await
    }

    /// Get the full profile of a user by login
    pub async fn get_user(&self, login: &str) -> Result<User> {
        let path = format!("{}/{}", api::USERS, urlencoding::encode(login));
        self.fetch_one(&path, &format!("user '{}'", login)).await
    }
}
