//! Selector logic for the ministry search page.
//!
//! The markup is an undocumented contract with the remote site. Everything that
//! depends on it lives here so request handling never touches CSS selectors.

use scraper::{ElementRef, Html, Selector};

use crate::data_models::SearchResultItem;
use crate::error::ScrapeError;

const RESULTS_LIST: &str = "ol.search-results.node-results";
const RESULT_ITEM: &str = "li";
const TITLE_LINK: &str = "h3.title a";
const SNIPPET: &str = "div.search-snippet-info p.search-snippet";
const INFO: &str = "div.search-snippet-info p.search-info";

struct ResultSelectors {
    list: Selector,
    item: Selector,
    title: Selector,
    snippet: Selector,
    info: Selector,
}

impl ResultSelectors {
    fn parse() -> Result<ResultSelectors, ScrapeError> {
        Ok(ResultSelectors {
            list: parse_selector(RESULTS_LIST)?,
            item: parse_selector(RESULT_ITEM)?,
            title: parse_selector(TITLE_LINK)?,
            snippet: parse_selector(SNIPPET)?,
            info: parse_selector(INFO)?,
        })
    }

    fn extract_item(&self, item: ElementRef<'_>, origin: &str) -> SearchResultItem {
        let title_link = item.select(&self.title).next();

        SearchResultItem {
            title: title_link.map(element_text),
            link: title_link
                .and_then(|a| a.value().attr("href"))
                .map(|href| absolute_link(origin, href)),
            snippet: item.select(&self.snippet).next().map(element_text),
            info: item.select(&self.info).next().map(element_text),
        }
    }
}

fn parse_selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::Unexpected(format!("invalid selector {css:?}: {e:?}")))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Relative hrefs from the search page are joined to the site origin as-is.
pub fn absolute_link(origin: &str, href: &str) -> String {
    format!("{origin}{href}")
}

/// Extracts every result row from the search page.
///
/// A page without the results list is an error, a list without rows is not.
pub fn extract_results(html: &str, origin: &str) -> Result<Vec<SearchResultItem>, ScrapeError> {
    let selectors = ResultSelectors::parse()?;
    let document = Html::parse_document(html);

    let list = document
        .select(&selectors.list)
        .next()
        .ok_or(ScrapeError::StructureNotFound)?;

    Ok(list
        .select(&selectors.item)
        .map(|item| selectors.extract_item(item, origin))
        .collect())
}
