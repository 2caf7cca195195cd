//! Organization data models

use serde::Deserialize;

/// Organization entry from `GET /user/orgs`
#[derive(Deserialize, Debug, Clone)]
pub struct Organization {
    pub login: String,
    pub id: Option<u64>,
}

impl Organization {
    /// Exact, case-sensitive login comparison
    pub fn matches(&self, login: &str) -> bool {
        self.login == login
    }
}
