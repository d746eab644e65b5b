//! GitHub API repository source.
//!
//! Lists organization repositories (with inline topic tags) and maps them
//! to the shared [`Repository`] record. Pagination walks `per_page`-sized
//! pages until a short page; errors propagate as `SourceFetch` with no
//! retries at this layer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::{debug, info, instrument};
use url::Url;

use roster_core::RepositorySource;
use roster_shared::{Repository, Result, RosterError};

/// Default page size for repository listing.
const DEFAULT_PAGE_SIZE: usize = 100;

/// Default timeout in seconds for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent string for API requests.
const USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// GitHub REST API version header value.
const API_VERSION: &str = "2022-11-28";

// ---------------------------------------------------------------------------
// Wire model
// ---------------------------------------------------------------------------

/// A repository record as returned by `GET /orgs/{org}/repos`.
#[derive(Debug, Deserialize)]
struct ApiRepository {
    name: String,
    #[serde(default)]
    description: Option<String>,
    html_url: String,
    #[serde(default)]
    topics: Vec<String>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pushed_at: Option<DateTime<Utc>>,
}

impl ApiRepository {
    fn into_repository(self, organization: &str) -> Repository {
        Repository {
            name: self.name,
            description: self.description.unwrap_or_default(),
            url: self.html_url,
            topics: self.topics,
            organization: organization.to_string(),
            updated_at: self.updated_at.unwrap_or(DateTime::<Utc>::MIN_UTC),
            pushed_at: self.pushed_at.unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// GitHub API client scoped to a base URL and token.
pub struct GitHubClient {
    client: Client,
    api_base: Url,
    page_size: usize,
}

impl GitHubClient {
    /// Build a client against `api_base` (e.g. `https://api.github.com`)
    /// authenticating with `token`.
    pub fn new(api_base: &str, token: &str) -> Result<Self> {
        let api_base = Url::parse(api_base)
            .map_err(|e| RosterError::config(format!("invalid GitHub api_base: {e}")))?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| RosterError::config("GitHub token contains invalid characters"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(API_VERSION),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| RosterError::SourceFetch(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Override the listing page size (mainly useful against test servers).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// List all repositories of one organization, walking pages until a
    /// short page signals the end.
    #[instrument(skip(self))]
    pub async fn list_org_repositories(&self, organization: &str) -> Result<Vec<Repository>> {
        let mut repositories = Vec::new();
        let mut page = 1usize;

        loop {
            // Build on the full base path: Url::join would resolve against
            // the base's parent and drop a trailing segment like `/api/v3`.
            let url = format!(
                "{}/orgs/{organization}/repos",
                self.api_base.as_str().trim_end_matches('/')
            );

            let response = self
                .client
                .get(&url)
                .query(&[
                    ("per_page", self.page_size.to_string()),
                    ("page", page.to_string()),
                    ("type", "all".to_string()),
                ])
                .send()
                .await
                .map_err(|e| RosterError::SourceFetch(format!("{url}: {e}")))?;

            let status = response.status();
            if !status.is_success() {
                return Err(RosterError::SourceFetch(format!(
                    "{url}: HTTP {status}"
                )));
            }

            let batch: Vec<ApiRepository> = response
                .json()
                .await
                .map_err(|e| RosterError::SourceFetch(format!("{url}: malformed response: {e}")))?;

            let batch_len = batch.len();
            debug!(organization, page, count = batch_len, "fetched repository page");

            repositories.extend(batch.into_iter().map(|r| r.into_repository(organization)));

            if batch_len < self.page_size {
                break;
            }
            page += 1;
        }

        info!(
            organization,
            count = repositories.len(),
            "organization repositories listed"
        );
        Ok(repositories)
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn fetch_repositories(&self, organizations: &[String]) -> Result<Vec<Repository>> {
        let mut all = Vec::new();
        for organization in organizations {
            all.extend(self.list_org_repositories(organization).await?);
        }
        Ok(all)
    }
}
