//! Thin client for the headless content API
//!
//! A single configured instance is shared by every page. There is no
//! retry or backoff; a failed request surfaces to the caller.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{PostDetail, PostPage};

/// Document type queried by both pages
const POSTS_TYPE: &str = "posts";

/// Field projection for listing queries
const SUMMARY_FIELDS: &str = "posts.title,posts.subtitle,posts.author";

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("content API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content API returned {status} for {url}")]
    Status { status: StatusCode, url: String },
}

/// Content API client
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    api_url: String,
    access_token: Option<String>,
}

impl CmsClient {
    /// Create a client for the given API endpoint
    pub fn new(api_url: &str, access_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    /// Query the first page of post summaries with a field projection
    pub async fn query_posts(&self, page_size: usize) -> Result<PostPage, CmsError> {
        let page_size = page_size.to_string();
        let request = self.search_request().query(&[
            ("fetch", SUMMARY_FIELDS),
            ("pageSize", page_size.as_str()),
        ]);
        self.fetch(request).await
    }

    /// Follow an opaque `next_page` cursor from a previous response
    ///
    /// The cursor already carries the whole query; only the access token
    /// is re-applied.
    pub async fn fetch_page(&self, cursor: &str) -> Result<PostPage, CmsError> {
        let request = self.with_token(self.http.get(cursor));
        self.fetch(request).await
    }

    /// Enumerate the uids of known posts
    pub async fn list_uids(&self, page_size: usize) -> Result<Vec<String>, CmsError> {
        let page_size = page_size.to_string();
        let request = self
            .search_request()
            .query(&[("pageSize", page_size.as_str())]);
        let page: PostPage = self.fetch(request).await?;
        Ok(page.results.into_iter().map(|post| post.uid).collect())
    }

    /// Fetch one full document by uid
    ///
    /// Returns `Ok(None)` when the API does not know the uid.
    pub async fn get_by_uid(&self, uid: &str) -> Result<Option<PostDetail>, CmsError> {
        let url = format!("{}/documents/{}/{}", self.api_url, POSTS_TYPE, uid);
        let request = self.with_token(self.http.get(&url));
        let response = request.send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("document {}/{} not found", POSTS_TYPE, uid);
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(CmsError::Status {
                status: response.status(),
                url: response.url().to_string(),
            });
        }

        Ok(Some(response.json().await?))
    }

    /// Base request for a type-predicate search
    fn search_request(&self) -> reqwest::RequestBuilder {
        let url = format!("{}/documents/search", self.api_url);
        let predicate = format!(r#"[[at(document.type,"{}")]]"#, POSTS_TYPE);
        self.with_token(self.http.get(&url).query(&[("q", predicate.as_str())]))
    }

    fn with_token(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.access_token {
            Some(token) => request.query(&[("access_token", token.as_str())]),
            None => request,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CmsError> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(CmsError::Status {
                status: response.status(),
                url: response.url().to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = CmsClient::new("https://cms.example.com/api/v2/", None);
        assert_eq!(client.api_url, "https://cms.example.com/api/v2");

        let client = CmsClient::new("https://cms.example.com/api/v2", None);
        assert_eq!(client.api_url, "https://cms.example.com/api/v2");
    }

    #[test]
    fn test_search_request_targets_search_endpoint() {
        let client = CmsClient::new("https://cms.example.com/api/v2", None);
        let request = client.search_request().build().unwrap();
        assert_eq!(request.url().path(), "/api/v2/documents/search");
        let query = request.url().query().unwrap();
        assert!(query.contains("at%28document.type"));
        assert!(!query.contains("access_token"));
    }

    #[test]
    fn test_token_is_applied_when_configured() {
        let client = CmsClient::new(
            "https://cms.example.com/api/v2",
            Some("secret".to_string()),
        );
        let request = client.search_request().build().unwrap();
        assert!(request.url().query().unwrap().contains("access_token=secret"));
    }
}
