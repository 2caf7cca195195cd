//! GitHub HTTP client for API interactions

use futures::stream::{self, Stream, TryStreamExt};
use log::debug;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::{api, credentials};
use crate::error::{GhError, Result};

/// Error body returned by the GitHub API on failures
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Authenticated GitHub API session
///
/// Created once per process from an access token; every remote call of an
/// export goes through the same instance.
pub struct GitHubClient {
    client: Client,
    token: String,
    base_url: String,
}

impl GitHubClient {
    /// Create a client without checking the token
    pub fn new(token: String, base_url: &str) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Exchange a token for an authenticated session
    ///
    /// Fails with `GhError::Config` for an empty token, without any request,
    /// and with `GhError::Authentication` if GitHub rejects it. Nothing else
    /// is requested before the token is confirmed.
    pub async fn authenticate(token: &str, base_url: &str) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(GhError::Config(format!(
                "the access token is empty, pass --github-token or set {}",
                credentials::TOKEN_ENV_VAR
            )));
        }

        let client = Self::new(token.to_string(), base_url);
        debug!("Verifying token against: {}", client.url(api::USER));

        match client.get_authenticated_user().await {
            Ok(me) => {
                debug!("Authenticated as '{}'", me.login);
                Ok(client)
            }
            Err(GhError::Api { status: 403, message }) => Err(GhError::Authentication(message)),
            Err(e) => Err(e),
        }
    }

    /// Build an absolute URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, api::ACCEPT)
            .header("X-GitHub-Api-Version", api::VERSION)
            .header(
                USER_AGENT,
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Pull the `message` field out of an error response, if any
    async fn error_message(response: Response) -> Option<String> {
        response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
    }

    /// Return the response untouched on success, otherwise map it to an error
    ///
    /// 401 means the token stopped being accepted; everything else is a
    /// failed remote lookup.
    pub(crate) async fn check_response(response: Response, error_context: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = Self::error_message(response)
            .await
            .map(|m| format!(": {}", m))
            .unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED {
            return Err(GhError::Authentication(format!(
                "GitHub rejected the token while fetching {}{}",
                error_context, detail
            )));
        }

        Err(GhError::Api {
            status: status.as_u16(),
            message: format!("Failed to fetch {}{}", error_context, detail),
        })
    }

    /// Fetch a single JSON resource by API path
    pub(crate) async fn fetch_one<T>(&self, path: &str, resource_label: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;
        let response = Self::check_response(response, resource_label).await?;
        Ok(response.json().await?)
    }

    /// Lazily walk every page of a list endpoint
    ///
    /// Pages are requested one at a time, only when the consumer has drained
    /// the previous one. The next page comes from the `Link: rel="next"`
    /// header, so the stream ends as soon as GitHub stops sending one.
    pub fn paginate<'a, T>(
        &'a self,
        path: &str,
        error_context: String,
    ) -> impl Stream<Item = Result<T>> + 'a
    where
        T: DeserializeOwned + 'a,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let first_page_url = format!("{}{}per_page={}", self.url(path), separator, api::PER_PAGE);

        stream::try_unfold(Some(first_page_url), move |next_url| {
            let error_context = error_context.clone();
            async move {
                let Some(url) = next_url else {
                    return Ok::<_, GhError>(None);
                };
                let (items, next_url) = self.fetch_page::<T>(&url, &error_context).await?;
                let items = stream::iter(items.into_iter().map(Ok::<T, GhError>));
                Ok(Some((items, next_url)))
            }
        })
        .try_flatten()
    }

    /// Fetch one page and the URL of the page after it
    async fn fetch_page<T>(&self, url: &str, error_context: &str) -> Result<(Vec<T>, Option<String>)>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} page from: {}", error_context, url);

        let response = self.get(url).send().await?;
        let response = Self::check_response(response, error_context).await?;
        let next_url = next_page_url(response.headers());
        let items: Vec<T> = response.json().await?;

        debug!(
            "Page returned {} {} (more pages: {})",
            items.len(),
            error_context,
            next_url.is_some()
        );
        Ok((items, next_url))
    }
}

/// Extract the `rel="next"` target from a `Link` header
fn next_page_url(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;

    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        if !parts.any(|p| p.trim() == "rel=\"next\"") {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}

#[cfg(test)]
impl GitHubClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url)
    }

    /// API base URL without trailing slash
    fn base_url(&self) -> &str {
        &self.base_url
    }
}
