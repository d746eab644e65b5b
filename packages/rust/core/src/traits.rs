//! Collaborator interfaces injected into the pipeline.
//!
//! Each concern the original workflow mixed into one command object is an
//! independently testable trait here: the repository source, the operator
//! confirmation surface, and the article publisher.

use async_trait::async_trait;
use roster_shared::{Repository, Result};

/// Supplies the enumerable set of repository records for a run.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetch all repositories for the given organizations.
    async fn fetch_repositories(&self, organizations: &[String]) -> Result<Vec<Repository>>;
}

/// Publishes a rendered page body, replacing the article's entire prior
/// content (full overwrite, never a patch).
#[async_trait]
pub trait ArticlePublisher: Send + Sync {
    /// Replace the body of `article_id` with `body`.
    async fn update_article_body(&self, article_id: &str, body: &str) -> Result<()>;
}

/// Operator-facing confirmation and progress narration.
///
/// `confirm_selection` blocks the pipeline until the operator responds.
/// With `auto_accept` the listing is still presented but acceptance is
/// automatic. `title`/`section` are best-effort display, no return contract.
pub trait ConfirmationIo: Send + Sync {
    /// Present the proposed selection and wait for accept/reject.
    fn confirm_selection(
        &self,
        candidates: &[Repository],
        operation_description: &str,
        auto_accept: bool,
    ) -> Result<bool>;

    /// Display a run title.
    fn title(&self, text: &str);

    /// Display a stage heading.
    fn section(&self, text: &str);
}

/// No-op IO that accepts everything, for headless/test usage.
pub struct SilentIo;

impl ConfirmationIo for SilentIo {
    fn confirm_selection(
        &self,
        _candidates: &[Repository],
        _operation_description: &str,
        _auto_accept: bool,
    ) -> Result<bool> {
        Ok(true)
    }

    fn title(&self, _text: &str) {}
    fn section(&self, _text: &str) {}
}
