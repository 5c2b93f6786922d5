//! Google News RSS client
//!
//! Searches `"<company> stock"` and scores the first few item titles.

use super::{LexiconScorer, NewsSentimentGateway, PolarityScorer, SentimentObservation};
use crate::config::NewsConfig;
use crate::error::GatewayError;
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Google News RSS search endpoint
pub const GOOGLE_NEWS_RSS_URL: &str = "https://news.google.com/rss/search";

/// Configuration for the Google News client
#[derive(Debug, Clone)]
pub struct GoogleNewsConfig {
    pub base_url: String,
    /// Headlines considered per lookup
    pub max_headlines: usize,
    pub timeout: Duration,
}

impl Default for GoogleNewsConfig {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_NEWS_RSS_URL.to_string(),
            max_headlines: 5,
            timeout: Duration::from_secs(10),
        }
    }
}

impl GoogleNewsConfig {
    pub fn from_settings(settings: &NewsConfig, timeout: Duration) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            max_headlines: settings.max_headlines,
            timeout,
        }
    }
}

/// Extracts item titles from an RSS document
struct RssTitles {
    item_re: Regex,
    title_re: Regex,
}

impl RssTitles {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            item_re: Regex::new(r"(?s)<item\b[^>]*>(.*?)</item>")?,
            title_re: Regex::new(r"(?s)<title\b[^>]*>(.*?)</title>")?,
        })
    }

    /// Up to `limit` non-empty titles, in feed order
    fn extract(&self, xml: &str, limit: usize) -> Vec<String> {
        self.item_re
            .captures_iter(xml)
            .filter_map(|item| {
                let body = item.get(1)?.as_str();
                let title = self.title_re.captures(body)?.get(1)?.as_str();
                let title = unescape_xml(strip_cdata(title.trim()));
                let title = title.trim();
                (!title.is_empty()).then(|| title.to_string())
            })
            .take(limit)
            .collect()
    }
}

fn strip_cdata(text: &str) -> &str {
    text.strip_prefix("<![CDATA[")
        .and_then(|t| t.strip_suffix("]]>"))
        .unwrap_or(text)
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Client for Google News RSS search
pub struct GoogleNewsClient {
    config: GoogleNewsConfig,
    client: Client,
    parser: RssTitles,
    scorer: Arc<dyn PolarityScorer>,
}

impl GoogleNewsClient {
    /// Create a client scoring headlines with the built-in lexicon
    pub fn with_config(config: GoogleNewsConfig) -> Result<Self, GatewayError> {
        Self::with_scorer(config, Arc::new(LexiconScorer::new()))
    }

    /// Create a client with a custom polarity scorer
    pub fn with_scorer(
        config: GoogleNewsConfig,
        scorer: Arc<dyn PolarityScorer>,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let parser = RssTitles::new().map_err(|e| GatewayError::Decode(e.to_string()))?;

        Ok(Self {
            config,
            client,
            parser,
            scorer,
        })
    }

    fn search_query(company: &str) -> String {
        format!("{} stock", company)
    }

    /// Fetch up to `max_headlines` titles for `company`
    async fn fetch_headlines(&self, company: &str) -> Result<Vec<String>, GatewayError> {
        let query = Self::search_query(company);

        tracing::debug!(url = %self.config.base_url, query = %query, "Fetching news feed");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("q", query.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(self.parser.extract(&body, self.config.max_headlines))
    }
}

#[async_trait]
impl NewsSentimentGateway for GoogleNewsClient {
    async fn sentiment(&self, company: &str) -> Result<SentimentObservation, GatewayError> {
        let titles = self.fetch_headlines(company).await?;
        Ok(SentimentObservation::from_headlines(
            company,
            &titles,
            self.scorer.as_ref(),
        ))
    }
}
