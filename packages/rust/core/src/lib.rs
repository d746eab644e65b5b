//! Core selection-and-grouping pipeline for roster.
//!
//! This crate ties together repository filtering, topic grouping, page
//! rendering, and publishing into the end-to-end inventory workflow.
//! Collaborators (repository source, confirmation IO, article publisher)
//! are injected as trait objects so each can be tested independently.

pub mod filter;
pub mod group;
pub mod pipeline;
pub mod traits;

pub use filter::{FilterCriteria, RepositoryPredicate, select};
pub use group::group_by_topic;
pub use pipeline::{InventoryPipeline, PipelineConfig, PublishResult};
pub use traits::{ArticlePublisher, ConfirmationIo, RepositorySource, SilentIo};
