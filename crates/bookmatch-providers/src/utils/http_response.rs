//! HTTP Response Utilities
//!
//! Helpers for turning responses of the remote recommendation service into
//! explicit lookup outcomes.

use crate::constants::ERROR_BODY_PREVIEW_LEN;
use bookmatch_domain::value_objects::{Fetched, RecommendationItem};
use reqwest::{Response, StatusCode};

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check the status and parse a strict recommendation list
    ///
    /// * 2xx with a body matching `[{ itemId, score, reason? }]` → `Found`
    /// * 404 → `NotFound`
    /// * any other status, unreadable body or schema deviation → `UpstreamFailure`
    pub async fn parse_recommendations(
        response: Response,
        provider_name: &str,
    ) -> Fetched<Vec<RecommendationItem>> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Fetched::NotFound;
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();
            let context = match code {
                401 | 403 => "authentication failed".to_string(),
                429 => "rate limit exceeded".to_string(),
                500..=599 => format!("server error ({code})"),
                _ => format!("request failed ({code})"),
            };
            return Fetched::failure(format!(
                "{provider_name} {context}: {}",
                Self::preview(&body)
            ));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Fetched::failure(format!("{provider_name} response read failed: {e}"));
            }
        };

        match serde_json::from_str::<Vec<RecommendationItem>>(&body) {
            Ok(items) => Fetched::Found(items),
            Err(e) => Fetched::failure(format!("{provider_name} response parse failed: {e}")),
        }
    }

    /// First characters of an error body, for log messages
    fn preview(body: &str) -> &str {
        match body.char_indices().nth(ERROR_BODY_PREVIEW_LEN) {
            Some((idx, _)) => &body[..idx],
            None => body,
        }
    }
}
