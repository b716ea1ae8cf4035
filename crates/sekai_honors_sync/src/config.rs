//! Settings for fetching upstream masterdata.

use derive_getters::Getters;
use sekai_honors_core::Server;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upstream fetch configuration.
///
/// # Example
///
/// ```toml
/// [sync]
/// request_timeout_secs = 30
/// url_templates = [
///     "https://raw.githubusercontent.com/Team-Haruki/{repo}/main/master/{file}",
///     "https://cdn.jsdelivr.net/gh/Team-Haruki/{repo}@main/master/{file}",
/// ]
///
/// [sync.repositories]
/// jp = "my-fork-of-sekai-master"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(default, setter(into))]
pub struct SyncConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,

    /// Mirror URL templates tried in order; `{repo}` and `{file}` are substituted.
    #[serde(default = "default_url_templates")]
    url_templates: Vec<String>,

    /// Per-server overrides of the masterdata repository name.
    #[serde(default)]
    repositories: HashMap<String, String>,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_url_templates() -> Vec<String> {
    vec![
        "https://raw.githubusercontent.com/Team-Haruki/{repo}/main/master/{file}".to_string(),
        "https://cdn.jsdelivr.net/gh/Team-Haruki/{repo}@main/master/{file}".to_string(),
    ]
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            url_templates: default_url_templates(),
            repositories: HashMap::new(),
        }
    }
}

impl SyncConfig {
    /// Creates a new sync config builder.
    pub fn builder() -> SyncConfigBuilder {
        SyncConfigBuilder::default()
    }

    /// Repository holding a server's masterdata, honoring overrides.
    pub fn repository_for(&self, server: Server) -> &str {
        self.repositories
            .get(server.tag())
            .map(String::as_str)
            .unwrap_or_else(|| server.masterdata_repository())
    }
}
