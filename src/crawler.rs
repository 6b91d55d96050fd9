use reqwest::Client;

use crate::config::CONFIG;
use crate::data_models::SearchResultItem;
use crate::error::ScrapeError;
use crate::extractor::extract_results;

/// Fetches the ministry search page and turns it into result rows.
///
/// Nothing is cached: every call goes to the network.
#[derive(Debug, Clone)]
pub struct SearchCrawler {
    client: Client,
    search_url: String,
    origin: String,
}

impl SearchCrawler {
    pub fn new(search_url: impl Into<String>, origin: impl Into<String>) -> SearchCrawler {
        SearchCrawler {
            client: Client::new(),
            search_url: search_url.into(),
            origin: origin.into(),
        }
    }

    pub fn from_config() -> SearchCrawler {
        Self::new(CONFIG.search_url.clone(), CONFIG.origin.clone())
    }

    pub async fn scrape(&self) -> Result<Vec<SearchResultItem>, ScrapeError> {
        log::info!("scraping search page: {}", self.search_url);
        let html = self.fetch_page().await?;
        let items = extract_results(&html, &self.origin)?;
        log::info!("extracted {} results from {}", items.len(), self.search_url);
        Ok(items)
    }

    async fn fetch_page(&self) -> Result<String, ScrapeError> {
        let res = self
            .client
            .get(&self.search_url)
            .send()
            .await
            .map_err(ScrapeError::Connection)?;

        let status = res.status();
        let res = res.error_for_status().map_err(|source| ScrapeError::Http {
            status: source.status().unwrap_or(status),
            source,
        })?;

        res.text().await.map_err(ScrapeError::Connection)
    }
}
