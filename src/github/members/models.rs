//! Organization member data models

use serde::Deserialize;

/// Reduced user entry from `GET /orgs/{org}/members`
#[derive(Deserialize, Debug, Clone)]
pub struct MemberSummary {
    pub login: String,
}
