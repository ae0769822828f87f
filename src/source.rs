//! Record source: fetches the user list over HTTP.

use crate::error::NetworkError;
use crate::models::{RecordSet, UserRecord};
use crate::traits::{Headers, HttpClient};

/// Public endpoint serving the demo user list.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Fetches the record set from a JSON endpoint.
///
/// Generic over [`HttpClient`] so tests can run against
/// [`crate::adapters::MockHttpClient`] or a wiremock server.
#[derive(Debug, Clone)]
pub struct UserSource<C: HttpClient> {
    client: C,
    endpoint: String,
}

impl<C: HttpClient> UserSource<C> {
    pub fn new(client: C, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the endpoint and decode the first [`crate::models::RECORD_LIMIT`]
    /// users. Never retries.
    pub async fn fetch(&self) -> Result<RecordSet, NetworkError> {
        let mut headers = Headers::new();
        headers.insert("accept".to_string(), "application/json".to_string());

        let response = self
            .client
            .get(&self.endpoint, &headers)
            .await
            .map_err(|e| NetworkError::from_http(e, &self.endpoint))?;

        if !response.is_success() {
            let body = response.text_lossy();
            tracing::warn!("User fetch returned HTTP {}", response.status);
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message: truncate(body.trim(), 200),
            });
        }

        let users: Vec<UserRecord> =
            response
                .json()
                .map_err(|e| NetworkError::InvalidResponse {
                    message: e.to_string(),
                })?;

        let received = users.len();
        let records = RecordSet::from_response(users);
        tracing::info!("Fetched {} users, keeping {}", received, records.len());
        Ok(records)
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;

    const URL: &str = "https://users.test/users";

    fn users_json(count: u64) -> String {
        let users: Vec<String> = (1..=count)
            .map(|id| format!(r#"{{"id":{id},"name":"User {id}","email":"u{id}@x.io"}}"#))
            .collect();
        format!("[{}]", users.join(","))
    }

    #[tokio::test]
    async fn test_fetch_keeps_first_ten() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::json(users_json(12)));
        let source = UserSource::new(client.clone(), URL);

        let records = source.fetch().await.unwrap();

        assert_eq!(records.len(), 10);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[9].id, 10);
        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].headers.get("accept").unwrap(), "application/json");
    }

    #[tokio::test]
    async fn test_fetch_fewer_than_limit() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::json(users_json(3)));

        let records = UserSource::new(client, URL).fetch().await.unwrap();

        assert_eq!(records.len(), 3);
    }

    #[tokio::test]
    async fn test_non_2xx_is_http_status() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::status(503, "maintenance"));

        let err = UserSource::new(client, URL).fetch().await.unwrap_err();

        assert_eq!(
            err,
            NetworkError::HttpStatus {
                status: 503,
                message: "maintenance".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_body() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::json(r#"{"users":[]}"#));

        let err = UserSource::new(client, URL).fetch().await.unwrap_err();

        assert!(matches!(err, NetworkError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_transport_error_mapped() {
        let client = MockHttpClient::new();
        client.set_response(
            URL,
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let err = UserSource::new(client, URL).fetch().await.unwrap_err();

        assert_eq!(
            err,
            NetworkError::ConnectionFailed {
                url: URL.to_string(),
                message: "refused".to_string()
            }
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
