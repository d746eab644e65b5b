//! Application configuration for roster.
//!
//! User config lives at `~/.roster/roster.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "roster.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".roster";

// ---------------------------------------------------------------------------
// Config structs (matching roster.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// GitHub API settings.
    #[serde(default)]
    pub github: GitHubConfig,

    /// Stack Overflow for Teams settings.
    #[serde(default)]
    pub stack: StackConfig,

    /// Inventory page settings.
    #[serde(default)]
    pub inventory: InventoryConfig,
}

/// `[github]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// API base URL (overridable for GitHub Enterprise or tests).
    #[serde(default = "default_github_api_base")]
    pub api_base: String,

    /// Name of the env var holding the API token (never store the token itself).
    #[serde(default = "default_github_token_env")]
    pub token_env: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: default_github_api_base(),
            token_env: default_github_token_env(),
        }
    }
}

fn default_github_api_base() -> String {
    "https://api.github.com".into()
}
fn default_github_token_env() -> String {
    "GITHUB_TOKEN".into()
}

/// `[stack]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackConfig {
    /// API base URL for the Teams instance.
    #[serde(default = "default_stack_api_base")]
    pub api_base: String,

    /// Team slug the articles belong to.
    #[serde(default)]
    pub team: String,

    /// Name of the env var holding the access token.
    #[serde(default = "default_stack_token_env")]
    pub token_env: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            api_base: default_stack_api_base(),
            team: String::new(),
            token_env: default_stack_token_env(),
        }
    }
}

fn default_stack_api_base() -> String {
    "https://api.stackoverflowteams.com/2.3".into()
}
fn default_stack_token_env() -> String {
    "STACK_TEAMS_TOKEN".into()
}

/// `[inventory]` section — what to select and where to publish it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Target article identifier (full-overwrite on every run).
    #[serde(default)]
    pub article_id: String,

    /// Page title.
    #[serde(default = "default_page_title")]
    pub title: String,

    /// Page description, shown ahead of the topic sections.
    #[serde(default = "default_page_description")]
    pub description: String,

    /// GitHub organizations to search for repositories.
    #[serde(default)]
    pub organizations: Vec<String>,

    /// Repository names to include (empty = no restriction from names).
    #[serde(default)]
    pub include_names: Vec<String>,

    /// Repository topics to include (empty = no restriction from topics).
    #[serde(default)]
    pub include_topics: Vec<String>,

    /// Repository names to omit unconditionally.
    #[serde(default)]
    pub omit_names: Vec<String>,

    /// Repository topics to omit unconditionally.
    #[serde(default)]
    pub omit_topics: Vec<String>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            article_id: String::new(),
            title: default_page_title(),
            description: default_page_description(),
            organizations: Vec::new(),
            include_names: Vec::new(),
            include_topics: Vec::new(),
            omit_names: Vec::new(),
            omit_topics: Vec::new(),
        }
    }
}

fn default_page_title() -> String {
    "Repository Inventory".into()
}
fn default_page_description() -> String {
    "This is a list of repositories, grouped by topic.".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.roster/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| RosterError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.roster/roster.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| RosterError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| RosterError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| RosterError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| RosterError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| RosterError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Read a token from the env var named in config. Errors if unset or empty.
pub fn resolve_token(var_name: &str, purpose: &str) -> Result<String> {
    match std::env::var(var_name) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(RosterError::config(format!(
            "{purpose} token not found. Set the {var_name} environment variable."
        ))),
    }
}

/// Check that both API tokens are resolvable and the publish target is set.
///
/// This is the preflight check: any failure here is fatal and aborts the
/// run before any fetch.
pub fn validate_preflight(config: &AppConfig) -> Result<()> {
    resolve_token(&config.github.token_env, "GitHub")?;
    resolve_token(&config.stack.token_env, "Stack Teams")?;

    if config.inventory.article_id.is_empty() {
        return Err(RosterError::config(
            "inventory.article_id is not set — nowhere to publish",
        ));
    }
    if config.stack.team.is_empty() {
        return Err(RosterError::config("stack.team is not set"));
    }
    Ok(())
}
