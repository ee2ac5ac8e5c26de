//! Generic HTTP fetching with retry logic and error classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::retry;
use crate::error::AppError;

/// How transient failures are retried.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    /// Longest single wait between attempts
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Fail on the first error.
    pub fn none() -> Self {
        RetryPolicy {
            max_retries: 0,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_retries: retry::MAX_RETRIES,
            base_delay: Duration::from_millis(retry::BASE_DELAY_MS),
            max_delay: Duration::from_millis(retry::MAX_DELAY_MS),
        }
    }
}

/// Fetches `url` and parses the body as JSON.
///
/// Timeouts, connection failures, 429 and 5xx responses are retried with
/// exponential backoff, honouring `Retry-After` when the provider sends one.
/// No single wait exceeds `policy.max_delay`.
/// Final failures are mapped onto `AppError` by status code so callers can
/// tell "not on record" (404) apart from "provider unavailable".
#[instrument(skip(client, policy))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    policy: RetryPolicy,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let mut attempt = 0u32;
    let mut backoff = policy.base_delay;
    let response = loop {
        match client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if (status.as_u16() == 429 || status.is_server_error())
                    && attempt < policy.max_retries
                {
                    let retry_after = resp
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|h| h.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .map(Duration::from_secs);
                    let wait = retry_after.unwrap_or(backoff).min(policy.max_delay);
                    warn!(
                        "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                        status,
                        url,
                        wait,
                        attempt + 1,
                        policy.max_retries
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                break resp;
            }
            Err(e) => {
                if (e.is_timeout() || e.is_connect()) && attempt < policy.max_retries {
                    warn!(
                        "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                        e,
                        url,
                        backoff,
                        attempt + 1,
                        policy.max_retries
                    );
                    tokio::time::sleep(backoff.min(policy.max_delay)).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                error!("Request failed for URL {}: {}", url, e);
                return if e.is_timeout() {
                    Err(AppError::network_timeout(url))
                } else if e.is_connect() {
                    Err(AppError::network_connection(url, e.to_string()))
                } else {
                    Err(AppError::ApiFetch(e))
                };
            }
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        if status_code == 404 {
            // Expected for off days and seasons outside the career span
            debug!("HTTP 404 (URL: {})", url);
        } else {
            error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        }

        return Err(classify_status(status_code, reason, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    parse_body(&response_text, url)
}

fn classify_status(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 | 504 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

fn parse_body<T: DeserializeOwned>(response_text: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);

            let trimmed = response_text.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                // Valid JSON but unexpected structure
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde::Deserialize;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: u32,
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 7}"#))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/probe", mock_server.uri());
        let probe: Probe = fetch(&client, &url, RetryPolicy::none()).await.unwrap();
        assert_eq!(probe.value, 7);
    }

    #[tokio::test]
    async fn test_fetch_retries_transient_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 3}"#))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/probe", mock_server.uri());
        let policy = RetryPolicy {
            max_retries: 2,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(10),
        };
        let probe: Probe = fetch(&client, &url, policy).await.unwrap();
        assert_eq!(probe.value, 3);
    }

    #[tokio::test]
    async fn test_fetch_caps_retry_after_wait() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "86400"))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 5}"#))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/probe", mock_server.uri());
        let policy = RetryPolicy {
            max_retries: 1,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(20),
        };
        let probe: Probe =
            tokio::time::timeout(Duration::from_secs(5), fetch(&client, &url, policy))
                .await
                .expect("Retry-After wait was not capped")
                .unwrap();
        assert_eq!(probe.value, 5);
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/probe", mock_server.uri());
        let policy = RetryPolicy {
            max_retries: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(10),
        };
        let result: Result<Probe, _> = fetch(&client, &url, policy).await;
        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_service_unavailable_after_retries() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/probe", mock_server.uri());
        let result: Result<Probe, _> = fetch(&client, &url, RetryPolicy::none()).await;
        let error = result.unwrap_err();
        assert!(matches!(error, AppError::ApiServiceUnavailable { status: 503, .. }));
        assert!(error.is_unavailable());
    }

    #[test]
    fn test_classify_status() {
        assert!(matches!(
            classify_status(404, "Not Found", "u"),
            AppError::ApiNotFound { .. }
        ));
        assert!(matches!(
            classify_status(429, "Too Many Requests", "u"),
            AppError::ApiRateLimit { .. }
        ));
        assert!(matches!(
            classify_status(400, "Bad Request", "u"),
            AppError::ApiClientError { status: 400, .. }
        ));
        assert!(matches!(
            classify_status(502, "Bad Gateway", "u"),
            AppError::ApiServiceUnavailable { status: 502, .. }
        ));
        assert!(matches!(
            classify_status(500, "Internal Server Error", "u"),
            AppError::ApiServerError { status: 500, .. }
        ));
    }

    #[test]
    fn test_parse_body_classification() {
        assert!(matches!(parse_body::<Probe>("", "u"), Err(AppError::ApiNoData { .. })));
        assert!(matches!(
            parse_body::<Probe>("<html>oops</html>", "u"),
            Err(AppError::ApiMalformedJson { .. })
        ));
        assert!(matches!(
            parse_body::<Probe>(r#"{"other": 1}"#, "u"),
            Err(AppError::ApiUnexpectedStructure { .. })
        ));
    }
}
