//! User profile data models

use serde::Deserialize;

/// Full user profile from `GET /users/{login}`
///
/// List endpoints return only a reduced projection; fields such as `name`
/// or `location` are only present here.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct User {
    pub login: String,
    pub id: Option<u64>,
    pub node_id: Option<String>,
    pub avatar_url: Option<String>,
    pub gravatar_id: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub followers_url: Option<String>,
    pub following_url: Option<String>,
    pub gists_url: Option<String>,
    pub starred_url: Option<String>,
    pub subscriptions_url: Option<String>,
    pub organizations_url: Option<String>,
    pub repos_url: Option<String>,
    pub events_url: Option<String>,
    pub received_events_url: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    pub user_view_type: Option<String>,
    pub site_admin: Option<bool>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: Option<u64>,
    pub public_gists: Option<u64>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Reads one profile attribute as text, `None` when absent or null
type FieldAccessor = fn(&User) -> Option<String>;

/// Selectable profile fields, by their API name
const FIELDS: &[(&str, FieldAccessor)] = &[
    ("login", |u| Some(u.login.clone())),
    ("id", |u| u.id.map(|v| v.to_string())),
    ("node_id", |u| u.node_id.clone()),
    ("avatar_url", |u| u.avatar_url.clone()),
    ("gravatar_id", |u| u.gravatar_id.clone()),
    ("url", |u| u.url.clone()),
    ("html_url", |u| u.html_url.clone()),
    ("followers_url", |u| u.followers_url.clone()),
    ("following_url", |u| u.following_url.clone()),
    ("gists_url", |u| u.gists_url.clone()),
    ("starred_url", |u| u.starred_url.clone()),
    ("subscriptions_url", |u| u.subscriptions_url.clone()),
    ("organizations_url", |u| u.organizations_url.clone()),
    ("repos_url", |u| u.repos_url.clone()),
    ("events_url", |u| u.events_url.clone()),
    ("received_events_url", |u| u.received_events_url.clone()),
    ("type", |u| u.user_type.clone()),
    ("user_view_type", |u| u.user_view_type.clone()),
    ("site_admin", |u| u.site_admin.map(|v| v.to_string())),
    ("name", |u| u.name.clone()),
    ("company", |u| u.company.clone()),
    ("blog", |u| u.blog.clone()),
    ("location", |u| u.location.clone()),
    ("email", |u| u.email.clone()),
    ("hireable", |u| u.hireable.map(|v| v.to_string())),
    ("bio", |u| u.bio.clone()),
    ("twitter_username", |u| u.twitter_username.clone()),
    ("public_repos", |u| u.public_repos.map(|v| v.to_string())),
    ("public_gists", |u| u.public_gists.map(|v| v.to_string())),
    ("followers", |u| u.followers.map(|v| v.to_string())),
    ("following", |u| u.following.map(|v| v.to_string())),
    ("created_at", |u| u.created_at.clone()),
    ("updated_at", |u| u.updated_at.clone()),
];

impl User {
    /// Look up a profile field by name
    ///
    /// Returns `None` both for unknown names and for null values.
    pub fn field(&self, name: &str) -> Option<String> {
        FIELDS
            .iter()
            .find(|(field, _)| *field == name)
            .and_then(|(_, accessor)| accessor(self))
    }

    /// Check whether a field name is one of the selectable profile fields
    pub fn is_known_field(name: &str) -> bool {
        FIELDS.iter().any(|(field, _)| *field == name)
    }

    /// Names of all selectable profile fields
    pub(crate) fn known_fields() -> impl Iterator<Item = &'static str> {
        FIELDS.iter().map(|(field, _)| *field)
    }
}
