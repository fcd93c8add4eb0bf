use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::Deserialize;

use favhub_types::{SearchPage, User};

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const DEFAULT_PER_PAGE: u8 = 30;

/// Raw shape of `GET /search/users` responses. Unknown fields are ignored
/// so wire additions never break decoding.
#[derive(Debug, Deserialize)]
struct SearchUsersResponse {
    total_count: u64,
    items: Vec<User>,
}

/// Thin client over the GitHub user search endpoint.
///
/// Issues exactly one GET per `search_users` call; no retry, no backoff,
/// no caching. The base URL is injectable so tests can point it at a local
/// server.
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    per_page: u8,
}

impl SearchClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("favhub"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            per_page: DEFAULT_PER_PAGE,
        })
    }

    /// Attach a bearer token to every request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Results per page, clamped to the API limit of 1..=100.
    pub fn per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Fetch one page of user search results.
    ///
    /// The query is passed as a URL parameter (reqwest percent-encodes it);
    /// success requires an HTTP status in [200, 400).
    pub async fn search_users(&self, query: &str, page: u32) -> Result<SearchPage> {
        let url = format!("{}/search/users", self.base_url);
        reqwest::Url::parse(&url).map_err(|_| Error::InvalidUrl(url.clone()))?;

        let mut request = self.http.get(&url).query(&[
            ("q", query),
            ("page", &page.to_string()),
            ("per_page", &self.per_page.to_string()),
        ]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::InvalidResponse(e.to_string()))?;

        if !(200..400).contains(&status) {
            return Err(Error::Server(status));
        }
        if body.is_empty() {
            return Err(Error::EmptyBody);
        }

        let decoded: SearchUsersResponse =
            serde_json::from_slice(&body).map_err(|e| Error::Decode(e.to_string()))?;

        log::debug!(
            "search '{}' page {} -> {} of {} users",
            query,
            page,
            decoded.items.len(),
            decoded.total_count
        );

        Ok(SearchPage {
            items: decoded.items,
            total_count: decoded.total_count,
            page,
        })
    }
}
