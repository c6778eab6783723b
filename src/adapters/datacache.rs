use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::model::{LonLat, Observation};
use crate::domain::ports::ObservationSource;
use crate::utils::error::Result;

pub const SEARCH_PAGE_SIZE: usize = 100;

/// Client for the observation data-cache search service. The service exposes
/// an Elasticsearch-style endpoint: a polygon plus an inclusive date range
/// in, pages of `hits.hits[]._source` records out. Pagination advances
/// `from` by the page length until a page comes back shorter than the page
/// size. Failures are fatal: no retries, no partial results.
#[derive(Debug, Clone)]
pub struct DataCacheClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    date_range: [NaiveDate; 2],
    polygon: &'a [LonLat],
    from: usize,
    size: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: HitCollection,
}

#[derive(Debug, Deserialize)]
struct HitCollection {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: Observation,
}

impl DataCacheClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/api/observations/search", self.endpoint)
    }
}

impl ObservationSource for DataCacheClient {
    async fn search_observations(
        &self,
        date_range: (NaiveDate, NaiveDate),
        polygon: &[LonLat],
    ) -> Result<Vec<Observation>> {
        let url = self.search_url();
        let mut observations = Vec::new();
        let mut from = 0;

        loop {
            let request = SearchRequest {
                date_range: [date_range.0, date_range.1],
                polygon,
                from,
                size: SEARCH_PAGE_SIZE,
            };

            tracing::debug!("Requesting observation page from={} at {}", from, url);
            let response = self
                .client
                .post(&url)
                .json(&request)
                .send()
                .await?
                .error_for_status()?;
            let page: SearchResponse = response.json().await?;

            let page_len = page.hits.hits.len();
            observations.extend(page.hits.hits.into_iter().map(|hit| hit.source));

            if page_len < SEARCH_PAGE_SIZE {
                return Ok(observations);
            }
            from += page_len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SEARCH_DATE_RANGE;
    use crate::utils::error::SurveyError;
    use httpmock::prelude::*;

    const RING: [LonLat; 5] = [
        [6.0, 49.0],
        [6.1, 49.0],
        [6.1, 49.1],
        [6.0, 49.1],
        [6.0, 49.0],
    ];

    fn hit(taxon: &str, common: Option<&str>) -> serde_json::Value {
        serde_json::json!({"_source": {"Taxon_Name": taxon, "Taxon_Common_Names": common}})
    }

    fn page(hits: Vec<serde_json::Value>, total: usize) -> serde_json::Value {
        serde_json::json!({"hits": {"total": total, "hits": hits}})
    }

    #[tokio::test]
    async fn test_search_sends_window_and_polygon() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/observations/search")
                .json_body_partial(
                    r#"{"date_range":["2014-01-01","2024-12-10"],
                        "polygon":[[6.0,49.0],[6.1,49.0],[6.1,49.1],[6.0,49.1],[6.0,49.0]],
                        "from":0,"size":100}"#,
                );
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(page(vec![hit("Turdus merula", Some("Blackbird"))], 1));
        });

        let client = DataCacheClient::new(server.base_url());
        let observations = client
            .search_observations(SEARCH_DATE_RANGE, &RING)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].taxon_name, "Turdus merula");
        assert_eq!(observations[0].taxon_common_names.as_deref(), Some("Blackbird"));
    }

    #[tokio::test]
    async fn test_search_paginates_until_short_page() {
        let server = MockServer::start();
        let full_page: Vec<serde_json::Value> = (0..SEARCH_PAGE_SIZE)
            .map(|i| hit(&format!("Taxon {i}"), None))
            .collect();

        let first = server.mock(|when, then| {
            when.method(POST)
                .path("/api/observations/search")
                .json_body_partial(r#"{"from":0}"#);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(page(full_page.clone(), 102));
        });
        let second = server.mock(|when, then| {
            when.method(POST)
                .path("/api/observations/search")
                .json_body_partial(r#"{"from":100}"#);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(page(
                    vec![hit("Pica pica", Some("Magpie")), hit("Pica pica", Some("Magpie"))],
                    102,
                ));
        });

        let client = DataCacheClient::new(server.base_url());
        let observations = client
            .search_observations(SEARCH_DATE_RANGE, &RING)
            .await
            .unwrap();

        first.assert();
        second.assert();
        assert_eq!(observations.len(), 102);
        assert_eq!(observations[100].taxon_name, "Pica pica");
    }

    #[tokio::test]
    async fn test_search_empty_result() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/observations/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(page(Vec::new(), 0));
        });

        let client = DataCacheClient::new(server.base_url());
        let observations = client
            .search_observations(SEARCH_DATE_RANGE, &RING)
            .await
            .unwrap();

        mock.assert();
        assert!(observations.is_empty());
    }

    #[tokio::test]
    async fn test_search_server_error_is_fatal() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/observations/search");
            then.status(500);
        });

        let client = DataCacheClient::new(server.base_url());
        let result = client.search_observations(SEARCH_DATE_RANGE, &RING).await;

        assert!(matches!(result, Err(SurveyError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_search_missing_taxon_name_is_fatal() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/observations/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(page(
                    vec![serde_json::json!({"_source": {"Taxon_Common_Names": "Blackbird"}})],
                    1,
                ));
        });

        let client = DataCacheClient::new(server.base_url());
        let result = client.search_observations(SEARCH_DATE_RANGE, &RING).await;

        assert!(matches!(result, Err(SurveyError::ApiError(_))));
    }
}
