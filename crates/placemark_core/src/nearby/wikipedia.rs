//! Wikipedia geosearch client.
//!
//! # Responsibility
//! - Issue the one-shot geosearch request for a coordinate.
//! - Decode the nested page map into ordered `NearbyItem`s.
//!
//! # Invariants
//! - One request per call; no retry, no timeout beyond transport defaults.
//! - A response with no pages decodes to an empty, still-successful result.

use crate::model::location::Coordinate;
use crate::nearby::{NearbyItem, NearbySearch, SearchError};
use async_trait::async_trait;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use url::Url;

const WIKIPEDIA_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";
const GEOSEARCH_PAGE_LIMIT: &str = "50";
const GEOSEARCH_RADIUS_METERS: &str = "10000";
const THUMBNAIL_SIZE: &str = "500";

/// Shown for pages the encyclopedia has no short description for.
const NO_DESCRIPTION_FALLBACK: &str = "No further information";

#[derive(Debug, Deserialize)]
struct GeosearchResponse {
    query: Option<QueryEnvelope>,
}

#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    #[serde(default)]
    pages: HashMap<String, PageRecord>,
}

#[derive(Debug, Deserialize)]
struct PageRecord {
    pageid: u64,
    title: String,
    terms: Option<PageTerms>,
}

#[derive(Debug, Deserialize)]
struct PageTerms {
    #[serde(default)]
    description: Vec<String>,
}

impl PageRecord {
    fn into_item(self) -> NearbyItem {
        let description = self
            .terms
            .and_then(|terms| terms.description.into_iter().next())
            .unwrap_or_else(|| NO_DESCRIPTION_FALLBACK.to_string());

        NearbyItem {
            page_id: self.pageid,
            title: self.title,
            description,
        }
    }
}

/// Client for the public Wikipedia geosearch API.
pub struct WikipediaClient {
    client: reqwest::Client,
}

impl WikipediaClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for WikipediaClient {
    fn default() -> Self {
        Self::new()
    }
}

fn geosearch_url(coordinate: Coordinate) -> Result<Url, SearchError> {
    let ggscoord = format!("{}|{}", coordinate.latitude, coordinate.longitude);
    let url = Url::parse_with_params(
        WIKIPEDIA_ENDPOINT,
        &[
            ("action", "query"),
            ("ggscoord", ggscoord.as_str()),
            ("prop", "coordinates|pageimages|pageterms"),
            ("colimit", GEOSEARCH_PAGE_LIMIT),
            ("piprop", "thumbnail"),
            ("pithumbsize", THUMBNAIL_SIZE),
            ("pilimit", GEOSEARCH_PAGE_LIMIT),
            ("wbptterms", "description"),
            ("generator", "geosearch"),
            ("ggsradius", GEOSEARCH_RADIUS_METERS),
            ("ggslimit", GEOSEARCH_PAGE_LIMIT),
            ("format", "json"),
        ],
    )?;
    Ok(url)
}

/// Extracts the page-map values and pins the display order.
fn decode_items(body: serde_json::Value) -> Result<Vec<NearbyItem>, SearchError> {
    let response = serde_json::from_value::<GeosearchResponse>(body)?;
    let mut items: Vec<NearbyItem> = response
        .query
        .map(|query| {
            query
                .pages
                .into_values()
                .map(PageRecord::into_item)
                .collect()
        })
        .unwrap_or_default();
    items.sort();
    Ok(items)
}

#[async_trait]
impl NearbySearch for WikipediaClient {
    async fn search_nearby(&self, coordinate: Coordinate) -> Result<Vec<NearbyItem>, SearchError> {
        let url = geosearch_url(coordinate)?;
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let items = decode_items(body)?;
        info!(
            "event=nearby_search module=nearby status=ok count={}",
            items.len()
        );
        Ok(items)
    }
}
