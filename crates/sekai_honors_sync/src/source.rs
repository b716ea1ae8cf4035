//! Where masterdata files come from.

use crate::{SyncConfig, SyncResult};
use async_trait::async_trait;
use sekai_honors_core::Server;
use sekai_honors_error::{SyncError, SyncErrorKind};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// A provider of raw masterdata files.
#[async_trait]
pub trait MasterdataSource: Send + Sync {
    /// Fetch one masterdata file (e.g. `honors.json`) for a server.
    ///
    /// # Errors
    /// `Fetch` if the file could not be retrieved from anywhere.
    async fn fetch(&self, server: Server, file: &str) -> SyncResult<Value>;
}

/// Substitute `{repo}` and `{file}` into a mirror URL template.
///
/// # Examples
///
/// ```
/// use sekai_honors_sync::render_url;
///
/// let url = render_url("https://example.org/{repo}/master/{file}", "sekai-master", "honors.json");
/// assert_eq!(url, "https://example.org/sekai-master/master/honors.json");
/// ```
pub fn render_url(template: &str, repo: &str, file: &str) -> String {
    template.replace("{repo}", repo).replace("{file}", file)
}

/// Fetches masterdata over HTTP, trying each mirror in order.
///
/// The first mirror that returns a successful status with a JSON body wins.
/// There is no retry: if every mirror fails, the last error is reported.
#[derive(Debug, Clone)]
pub struct HttpMasterdataSource {
    client: reqwest::Client,
    url_templates: Vec<String>,
    repositories: HashMap<Server, String>,
}

impl HttpMasterdataSource {
    /// Build a source from sync configuration.
    ///
    /// # Errors
    /// `Fetch` if the HTTP client cannot be constructed.
    pub fn new(config: &SyncConfig) -> SyncResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.request_timeout_secs()))
            .user_agent(concat!("sekai-honors/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                SyncError::new(SyncErrorKind::Fetch {
                    file: "<client>".to_string(),
                    message: e.to_string(),
                })
            })?;

        let repositories = Server::all()
            .into_iter()
            .map(|server| (server, config.repository_for(server).to_string()))
            .collect();

        Ok(Self {
            client,
            url_templates: config.url_templates().clone(),
            repositories,
        })
    }

    /// Candidate URLs for a file, in the order they are tried.
    pub fn urls_for(&self, server: Server, file: &str) -> Vec<String> {
        let repo = self
            .repositories
            .get(&server)
            .map(String::as_str)
            .unwrap_or_else(|| server.masterdata_repository());

        self.url_templates
            .iter()
            .map(|template| render_url(template, repo, file))
            .collect()
    }

    async fn fetch_from(&self, url: &str) -> Result<Value, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}

#[async_trait]
impl MasterdataSource for HttpMasterdataSource {
    #[instrument(skip(self), fields(server = %server))]
    async fn fetch(&self, server: Server, file: &str) -> SyncResult<Value> {
        let mut last_error = "no mirror URLs configured".to_string();

        for url in self.urls_for(server, file) {
            info!(%url, "Fetching {}", file);
            match self.fetch_from(&url).await {
                Ok(value) => {
                    let count = value.as_array().map_or(0, Vec::len);
                    info!(count, "Fetched {} records from {}", count, file);
                    return Ok(value);
                }
                Err(e) => {
                    warn!(%url, error = %e, "Mirror failed");
                    last_error = e.to_string();
                }
            }
        }

        Err(SyncError::new(SyncErrorKind::Fetch {
            file: file.to_string(),
            message: last_error,
        }))
    }
}
