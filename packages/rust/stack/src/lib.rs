//! Stack Overflow for Teams article publishing client.
//!
//! One operation: replace an article's entire body with newly rendered
//! content. Full-overwrite semantics — there is no patch or merge, and a
//! rejected write propagates as a fatal `Publish` error with no retry.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::json;
use tracing::{info, instrument};
use url::Url;

use roster_core::ArticlePublisher;
use roster_shared::{Result, RosterError};

/// Default timeout in seconds for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent string for API requests.
const USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// Teams API client scoped to one team slug.
pub struct StackTeamsClient {
    client: Client,
    api_base: Url,
    team: String,
}

impl StackTeamsClient {
    /// Build a client against `api_base` for the given `team`,
    /// authenticating with `token`.
    pub fn new(api_base: &str, team: &str, token: &str) -> Result<Self> {
        let api_base = Url::parse(api_base)
            .map_err(|e| RosterError::config(format!("invalid Stack api_base: {e}")))?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| RosterError::config("Stack token contains invalid characters"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| RosterError::Publish(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base,
            team: team.to_string(),
        })
    }

    /// Replace the entire body of `article_id` with `body`.
    #[instrument(skip(self, body), fields(team = %self.team, article_id, body_len = body.len()))]
    pub async fn edit_article(&self, article_id: &str, body: &str) -> Result<()> {
        // Build on the full base path: Url::join would resolve against the
        // base's parent and drop a trailing segment like `/2.3`.
        let url = format!(
            "{}/teams/{}/articles/{article_id}/edit",
            self.api_base.as_str().trim_end_matches('/'),
            self.team
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({ "body_markdown": body }))
            .send()
            .await
            .map_err(|e| RosterError::Publish(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(RosterError::Publish(format!(
                "{url}: HTTP {status}: {detail}"
            )));
        }

        info!(article_id, "article body replaced");
        Ok(())
    }
}

#[async_trait]
impl ArticlePublisher for StackTeamsClient {
    async fn update_article_body(&self, article_id: &str, body: &str) -> Result<()> {
        self.edit_article(article_id, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn posts_full_body_to_the_edit_endpoint() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/teams/acme/articles/192/edit"))
            .and(body_partial_json(
                serde_json::json!({ "body_markdown": "# Inventory\n\nbody" }),
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = StackTeamsClient::new(&server.uri(), "acme", "test-token").unwrap();
        client
            .edit_article("192", "# Inventory\n\nbody")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn api_base_path_segment_is_preserved() {
        let server = MockServer::start().await;

        // A versioned base like the default `.../2.3` must keep its path
        // segment in the request URL.
        Mock::given(method("POST"))
            .and(path("/2.3/teams/acme/articles/192/edit"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let base = format!("{}/2.3", server.uri());
        let client = StackTeamsClient::new(&base, "acme", "test-token").unwrap();
        client.edit_article("192", "body").await.unwrap();
    }

    #[tokio::test]
    async fn authorization_failure_propagates_as_publish_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/teams/acme/articles/192/edit"))
            .respond_with(ResponseTemplate::new(403).set_body_string("access denied"))
            .expect(1) // exactly one attempt, no retry
            .mount(&server)
            .await;

        let client = StackTeamsClient::new(&server.uri(), "acme", "test-token").unwrap();
        let err = client.edit_article("192", "body").await.unwrap_err();

        assert!(matches!(err, RosterError::Publish(_)));
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("access denied"));
    }
}
