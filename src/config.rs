/// Configuration constants for the GitHub REST API
pub mod api {
    /// Public GitHub API endpoint
    pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

    /// Media type requested on every call
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// REST API version pinned through the `X-GitHub-Api-Version` header
    pub const VERSION: &str = "2022-11-28";

    /// Authenticated user endpoint
    pub const USER: &str = "user";

    /// Organizations of the authenticated user
    pub const USER_ORGS: &str = "user/orgs";

    /// Organizations endpoint prefix (`orgs/{org}/members`)
    pub const ORGS: &str = "orgs";

    /// Users endpoint prefix (`users/{login}`)
    pub const USERS: &str = "users";

    /// Page size for list endpoints (GitHub maximum)
    pub const PER_PAGE: u32 = 100;

    /// Upper bound for concurrent profile fetches
    pub const MAX_PROFILE_PREFETCH: u8 = 16;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the access token
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV_VAR: &str = "GITHUB_API_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Fields exported when none are requested
    pub const FIELD_NAMES: &[&str] = &["name", "login"];

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Profile fetches in flight by default (sequential)
    pub const PROFILE_PREFETCH: u8 = 1;
}
