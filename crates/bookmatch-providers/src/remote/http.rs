//! HTTP remote recommender
//!
//! Client of the separately deployed collaborative-filtering service:
//!
//! - `GET {base}/user/{userId}/top?n={n}`
//! - `GET {base}/book/{itemId}/similar?n={n}`
//!
//! Both return a JSON array of `{ itemId, score, reason? }`. The client applies
//! no timeout of its own; the gateway bounds every call.
//!
//! ## Example
//!
//! ```ignore
//! use bookmatch_providers::remote::HttpRemoteRecommender;
//!
//! let remote = HttpRemoteRecommender::new("http://recs:8000")?.with_api_key("secret");
//! ```

use crate::constants::{REMOTE_API_KEY_HEADER, REMOTE_HTTP_PROVIDER_NAME};
use crate::utils::HttpResponseUtils;
use async_trait::async_trait;
use bookmatch_domain::error::{Error, Result};
use bookmatch_domain::ports::RemoteRecommender;
use bookmatch_domain::value_objects::{Fetched, ItemId, RecommendationItem, UserId};
use reqwest::{Client, Url};

/// HTTP client of the remote recommendation service
#[derive(Clone)]
pub struct HttpRemoteRecommender {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpRemoteRecommender {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build().map_err(|e| {
            Error::network_with_source(format!("Failed to build HTTP client: {e}"), e)
        })?;
        Self::with_client(client, base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            Error::config(format!("Invalid remote recommender URL '{base_url}': {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Remote recommender URL '{base_url}' cannot be used as a base"
            )));
        }
        Ok(Self {
            client,
            base_url,
            api_key: None,
        })
    }

    /// Send `key` in the `X-API-KEY` header
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Base URL of the service
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str], n: usize) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config("remote recommender URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("n", &n.to_string());
        Ok(url)
    }

    async fn fetch(&self, segments: &[&str], n: usize) -> Fetched<Vec<RecommendationItem>> {
        let url = match self.endpoint(segments, n) {
            Ok(url) => url,
            Err(e) => return Fetched::failure(e),
        };

        let mut request = self.client.get(url.clone());
        if let Some(key) = &self.api_key {
            request = request.header(REMOTE_API_KEY_HEADER, key);
        }

        match request.send().await {
            Ok(response) => {
                HttpResponseUtils::parse_recommendations(response, REMOTE_HTTP_PROVIDER_NAME).await
            }
            Err(e) => Fetched::failure(format!("request to {} failed: {e}", url.path())),
        }
    }
}

#[async_trait]
impl RemoteRecommender for HttpRemoteRecommender {
    async fn user_top(&self, user_id: &UserId, n: usize) -> Fetched<Vec<RecommendationItem>> {
        self.fetch(&["user", user_id.as_str(), "top"], n).await
    }

    async fn similar(&self, item_id: &ItemId, n: usize) -> Fetched<Vec<RecommendationItem>> {
        self.fetch(&["book", item_id.as_str(), "similar"], n).await
    }

    fn provider_name(&self) -> &str {
        REMOTE_HTTP_PROVIDER_NAME
    }
}

impl std::fmt::Debug for HttpRemoteRecommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRemoteRecommender")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}
