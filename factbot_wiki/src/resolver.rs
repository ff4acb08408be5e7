use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use factbot_core::{PageResolver, QueryError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::infobox::first_infobox_text;

/// Encyclopedia client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WikiConfig {
    /// MediaWiki action API endpoint
    #[serde(default = "WikiConfig::default_api_url")]
    pub api_url: String,

    /// Request timeout (seconds)
    #[serde(default = "WikiConfig::default_timeout")]
    pub timeout: u64,

    /// User-Agent header
    #[serde(default = "WikiConfig::default_user_agent")]
    pub user_agent: String,

    /// Maximum response size (bytes)
    #[serde(default = "WikiConfig::default_max_size")]
    pub max_size: usize,
}

impl WikiConfig {
    fn default_api_url() -> String {
        "https://en.wikipedia.org/w/api.php".to_string()
    }

    const fn default_timeout() -> u64 {
        10
    }

    fn default_user_agent() -> String {
        format!("Mozilla/5.0 (compatible; factbot/{})", env!("CARGO_PKG_VERSION"))
    }

    const fn default_max_size() -> usize {
        5_000_000 // 5MB
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_url: Self::default_api_url(),
            timeout: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
            max_size: Self::default_max_size(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    #[serde(default)]
    parse: Option<ParsedPage>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    title: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

/// Resolves topics to infobox text through the MediaWiki action API.
///
/// A topic is first searched for; the best hit's rendered HTML is then
/// fetched and its first infobox returned.
pub struct WikipediaResolver {
    client: Client,
    config: WikiConfig,
}

impl WikipediaResolver {
    pub fn new(config: WikiConfig) -> Result<Self> {
        Url::parse(&config.api_url)
            .with_context(|| format!("Invalid api_url: {}", config.api_url))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub const fn config(&self) -> &WikiConfig {
        &self.config
    }

    /// Title of the best search hit for `topic`.
    pub async fn search_title(&self, topic: &str) -> Result<String, QueryError> {
        let url = search_url(&self.config.api_url, topic)?;
        let body = self.get(url).await?;
        first_title(&body, topic)
    }

    /// Rendered HTML of the page titled `title`, following redirects.
    pub async fn page_html(&self, title: &str) -> Result<String, QueryError> {
        let url = parse_url(&self.config.api_url, title)?;
        let body = self.get(url).await?;
        page_text(&body, title)
    }

    async fn get(&self, url: Url) -> Result<Vec<u8>, QueryError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.config.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| QueryError::Fetch(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Fetch(format!("HTTP status {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| QueryError::Fetch(format!("Failed to read response: {e}")))?;

        if bytes.len() > self.config.max_size {
            return Err(QueryError::Fetch(format!(
                "Response too large: {} bytes (max: {})",
                bytes.len(),
                self.config.max_size
            )));
        }

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl PageResolver for WikipediaResolver {
    async fn resolve_infobox(&self, topic: &str) -> Result<String, QueryError> {
        let title = self.search_title(topic).await?;
        info!("Resolved '{}' to page '{}'", topic, title);

        let html = self.page_html(&title).await?;
        first_infobox_text(&html)
    }
}

fn endpoint(api_url: &str, params: &[(&str, &str)]) -> Result<Url, QueryError> {
    Url::parse_with_params(api_url, params)
        .map_err(|e| QueryError::Fetch(format!("Invalid URL: {e}")))
}

fn search_url(api_url: &str, topic: &str) -> Result<Url, QueryError> {
    endpoint(
        api_url,
        &[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", topic),
            ("srlimit", "1"),
            ("format", "json"),
            ("formatversion", "2"),
        ],
    )
}

fn parse_url(api_url: &str, title: &str) -> Result<Url, QueryError> {
    endpoint(
        api_url,
        &[
            ("action", "parse"),
            ("page", title),
            ("prop", "text"),
            ("redirects", "1"),
            ("format", "json"),
            ("formatversion", "2"),
        ],
    )
}

fn decode<'a, T: Deserialize<'a>>(body: &'a [u8]) -> Result<T, QueryError> {
    serde_json::from_slice(body).map_err(|e| QueryError::Fetch(format!("Malformed response: {e}")))
}

fn first_title(body: &[u8], topic: &str) -> Result<String, QueryError> {
    let response: SearchResponse = decode(body)?;
    response
        .query
        .and_then(|q| q.search.into_iter().next())
        .map(|hit| hit.title)
        .ok_or_else(|| QueryError::NotFound(format!("No page found for '{topic}'")))
}

fn page_text(body: &[u8], title: &str) -> Result<String, QueryError> {
    let response: ParseResponse = decode(body)?;
    if let Some(error) = response.error {
        debug!("API error for '{}': {} ({})", title, error.code, error.info);
        return Err(QueryError::NotFound(format!("No page found for '{title}'")));
    }
    response
        .parse
        .map(|page| {
            debug!("Fetched page '{}' ({} bytes)", page.title, page.text.len());
            page.text
        })
        .ok_or_else(|| QueryError::NotFound(format!("No page found for '{title}'")))
}
