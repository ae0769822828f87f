//! Mock HTTP client for testing.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded GET request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
    /// Answer with `response` after sleeping; lets tests overlap fetches.
    Delayed(Duration, Response),
}

impl MockResponse {
    /// 200 with a JSON body.
    pub fn json(body: impl Into<Bytes>) -> Self {
        MockResponse::Success(Response::json_body(body))
    }

    pub fn status(status: u16, body: impl Into<Bytes>) -> Self {
        MockResponse::Success(Response::new(status, body.into()))
    }
}

/// Mock HTTP client for testing.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(USERS_URL, MockResponse::json("[]"));
///
/// let response = client.get(USERS_URL, &Headers::new()).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL (exact match first, then prefix).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Delayed(delay, response)) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exact_match_wins_over_prefix() {
        let client = MockHttpClient::new();
        client.set_response("https://example.com/", MockResponse::status(404, ""));
        client.set_response("https://example.com/users", MockResponse::json("[]"));

        let response = client
            .get("https://example.com/users", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let response = client
            .get("https://example.com/other", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_default_and_missing() {
        let client = MockHttpClient::new();
        assert!(matches!(
            client.get("https://a", &Headers::new()).await,
            Err(HttpError::Other(_))
        ));

        client.set_default_response(MockResponse::Error(HttpError::Timeout("slow".into())));
        assert!(matches!(
            client.get("https://a", &Headers::new()).await,
            Err(HttpError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_records_requests() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::json("[]"));

        let mut headers = Headers::new();
        headers.insert("accept".to_string(), "application/json".to_string());
        client.get("https://a/users", &headers).await.unwrap();

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://a/users");
        assert_eq!(requests[0].headers.get("accept").unwrap(), "application/json");

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }
}
