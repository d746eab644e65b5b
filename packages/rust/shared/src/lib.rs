//! Shared types, error model, and configuration for roster.
//!
//! This crate is the foundation depended on by all other roster crates.
//! It provides:
//! - [`RosterError`] — the unified error type
//! - Domain types ([`Repository`], [`TopicGroups`], [`InventoryPage`])
//! - Configuration ([`AppConfig`], config loading, preflight validation)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, GitHubConfig, InventoryConfig, StackConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from, resolve_token, validate_preflight,
};
pub use error::{Result, RosterError};
pub use types::{InventoryPage, Repository, TopicGroup, TopicGroups};
