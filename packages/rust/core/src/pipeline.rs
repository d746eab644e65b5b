//! End-to-end inventory pipeline: fetch → filter/confirm → group → render → publish.
//!
//! Single-threaded, synchronous stage sequencing: no stage runs unless the
//! previous one succeeded, and the publish call happens at most once per
//! run. Every run fully regenerates and replaces the target article.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument};

use roster_shared::{InventoryPage, Result, RosterError, TopicGroups};

use crate::filter::{self, FilterCriteria};
use crate::group;
use crate::traits::{ArticlePublisher, ConfirmationIo, RepositorySource};

/// Static configuration for a pipeline instance, built once per command
/// invocation. No global client registry: everything the run needs is
/// passed in at construction time.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Target article identifier (fixed per configuration).
    pub article_id: String,
    /// Page title.
    pub page_title: String,
    /// Page description/preamble.
    pub page_description: String,
    /// Selection rules.
    pub criteria: FilterCriteria,
    /// Render everything but skip the publish call.
    pub dry_run: bool,
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct PublishResult {
    /// The article that was (or would have been) updated.
    pub article_id: String,
    /// Size of the confirmed repository set.
    pub repository_count: usize,
    /// Number of topic sections in the rendered page.
    pub topic_count: usize,
    /// Whether the publish call was actually made (false on dry runs).
    pub published: bool,
    /// The assembled page.
    pub page: InventoryPage,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// The inventory page orchestrator.
///
/// Holds references to its three external collaborators; the rendering
/// step is pure and called directly.
pub struct InventoryPipeline {
    source: Arc<dyn RepositorySource>,
    io: Arc<dyn ConfirmationIo>,
    publisher: Arc<dyn ArticlePublisher>,
    config: PipelineConfig,
}

impl InventoryPipeline {
    pub fn new(
        source: Arc<dyn RepositorySource>,
        io: Arc<dyn ConfirmationIo>,
        publisher: Arc<dyn ArticlePublisher>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            source,
            io,
            publisher,
            config,
        }
    }

    /// Run the full pipeline.
    ///
    /// 1. Fetch candidate repositories for the configured organizations
    /// 2. Filter against the criteria and confirm with the operator
    /// 3. Group the confirmed set by topic
    /// 4. Render the page body
    /// 5. Publish (full overwrite), unless this is a dry run
    ///
    /// An operator decline surfaces as [`RosterError::SelectionAborted`]
    /// and no publish call is made.
    #[instrument(skip_all, fields(operation = operation_description, article_id = %self.config.article_id))]
    pub async fn run(
        &self,
        operation_description: &str,
        no_confirm: bool,
    ) -> Result<PublishResult> {
        let start = Instant::now();

        self.io.title(operation_description);

        self.io.section("Fetching repositories");
        let candidates = self
            .source
            .fetch_repositories(&self.config.criteria.organizations)
            .await?;
        info!(candidates = candidates.len(), "fetched candidate repositories");

        let selected = filter::select(&candidates, &self.config.criteria);
        info!(selected = selected.len(), "applied selection rules");

        let accepted = self
            .io
            .confirm_selection(&selected, operation_description, no_confirm)?;
        if !accepted {
            info!("operator declined the selection");
            return Err(RosterError::SelectionAborted);
        }

        self.io.section("Grouping by topic");
        let groups: TopicGroups = group::group_by_topic(&selected);

        self.io.section("Rendering inventory page");
        let page = roster_render::render_page(
            &self.config.page_title,
            &self.config.page_description,
            &groups,
        );

        let published = if self.config.dry_run {
            info!("dry run, skipping publish");
            false
        } else {
            self.io.section("Publishing article");
            self.publisher
                .update_article_body(&self.config.article_id, &page.body)
                .await?;
            info!(article_id = %self.config.article_id, "article updated");
            true
        };

        Ok(PublishResult {
            article_id: self.config.article_id.clone(),
            repository_count: selected.len(),
            topic_count: groups.len(),
            published,
            page,
            elapsed: start.elapsed(),
        })
    }
}
