//! HTTP client for the external search API.
//!
//! # Example
//!
//! ```no_run
//! use studytrack_resources::ResourceClient;
//!
//! let client = ResourceClient::new(
//!     "https://api.bing.microsoft.com/v7.0/search",
//!     "subscription-key",
//!     5,
//! );
//! ```

use reqwest::Client;
use serde::Serialize;

use crate::error::ResourceError;

/// One titled link extracted from a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
}

/// Client for the external search API.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    client: Client,
    endpoint: String,
    api_key: String,
    max_results: usize,
}

impl ResourceClient {
    /// Create a new lookup client.
    ///
    /// `endpoint` is the full search URL; `max_results` caps both the
    /// requested count and the returned list.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, max_results: usize) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            max_results,
        }
    }

    /// Create with a custom reqwest [`Client`] (for proxies etc.).
    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        max_results: usize,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            max_results,
        }
    }

    /// Fetch study resources for a subject and topic.
    ///
    /// Empty subject or topic fails before any request is sent. A non-2xx
    /// answer or transport failure surfaces with the underlying error text.
    pub async fn fetch(
        &self,
        subject: &str,
        topic: &str,
    ) -> Result<Vec<ResourceLink>, ResourceError> {
        if subject.trim().is_empty() {
            return Err(ResourceError::MissingField("subject"));
        }
        if topic.trim().is_empty() {
            return Err(ResourceError::MissingField("topic"));
        }

        let query = format!("{subject} {topic} resources");
        let count = self.max_results.to_string();

        let resp = self
            .client
            .get(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .query(&[("q", query.as_str()), ("count", count.as_str())])
            .send()
            .await
            .map_err(ResourceError::transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ResourceError::Status(status.as_u16()));
        }

        let body: wire::SearchResponse = resp.json().await.map_err(ResourceError::transport)?;
        Ok(extract_links(body, self.max_results))
    }
}

fn extract_links(body: wire::SearchResponse, cap: usize) -> Vec<ResourceLink> {
    body.web_pages
        .map(|pages| pages.value)
        .unwrap_or_default()
        .into_iter()
        .take(cap)
        .map(ResourceLink::from)
        .collect()
}

// ── Wire types (must match the search API response) ───────────────

mod wire {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        #[serde(rename = "webPages")]
        pub web_pages: Option<WebPages>,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct WebPages {
        #[serde(default)]
        pub value: Vec<WebPage>,
    }

    #[derive(Debug, Deserialize)]
    pub struct WebPage {
        pub name: String,
        pub url: String,
    }
}

impl From<wire::WebPage> for ResourceLink {
    fn from(page: wire::WebPage) -> Self {
        Self {
            title: page.name,
            url: page.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> wire::SearchResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_links_maps_name_to_title() {
        let body = parse(
            r#"{"webPages": {"value": [
                {"name": "Algebra basics", "url": "https://example.com/algebra"},
                {"name": "Fractions", "url": "https://example.com/fractions"}
            ]}}"#,
        );

        let links = extract_links(body, 5);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "Algebra basics");
        assert_eq!(links[0].url, "https://example.com/algebra");
    }

    #[test]
    fn test_extract_links_caps_results() {
        let body = parse(
            r#"{"webPages": {"value": [
                {"name": "a", "url": "u"}, {"name": "b", "url": "u"},
                {"name": "c", "url": "u"}, {"name": "d", "url": "u"},
                {"name": "e", "url": "u"}, {"name": "f", "url": "u"}
            ]}}"#,
        );

        assert_eq!(extract_links(body, 5).len(), 5);
    }

    #[test]
    fn test_missing_result_list_is_empty_not_an_error() {
        assert!(extract_links(parse("{}"), 5).is_empty());
        assert!(extract_links(parse(r#"{"webPages": {}}"#), 5).is_empty());
    }

    #[tokio::test]
    async fn test_empty_fields_fail_before_any_request() {
        // Unroutable endpoint: reaching it would error differently.
        let client = ResourceClient::new("http://invalid.invalid", "key", 5);

        let err = client.fetch("math", "").await.unwrap_err();
        assert!(matches!(err, ResourceError::MissingField("topic")));

        let err = client.fetch("  ", "algebra").await.unwrap_err();
        assert!(matches!(err, ResourceError::MissingField("subject")));
    }
}
