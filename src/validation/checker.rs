use async_trait::async_trait;
use reqwest::redirect::Policy;

use std::time::Duration;

use crate::config::Config;
use crate::core::constants::{checking, http_status};
use crate::core::error::Result;
use crate::core::types::CheckResult;

/// Determines reachability of a single URL.
///
/// Implementations must capture every failure into the returned value;
/// nothing escapes this boundary.
#[async_trait]
pub trait CheckLiveness {
    async fn check(&self, url: &str) -> CheckResult;
}

/// HTTP liveness checker with HEAD-first probing and GET fallback.
///
/// One primary HEAD attempt bounded by the per-attempt timeout; a timeout
/// short-circuits to failure, any other failure (and a method-rejection
/// response) gets one GET attempt with a fresh timeout. Redirects are
/// followed on both attempts.
#[derive(Debug)]
pub struct HttpChecker {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpChecker {
    /// Build a checker from the run configuration.
    ///
    /// The client is constructed once per run and shared by every check;
    /// the per-attempt timeout is applied per request, not on the client.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::limited(checking::MAX_REDIRECTS))
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self {
            client,
            timeout: config.timeout_duration(),
        })
    }

    /// Whether a HEAD response means the server rejected the method rather
    /// than answered for the resource.
    fn is_method_rejection(status: u16) -> bool {
        status == http_status::METHOD_NOT_ALLOWED || status == http_status::NOT_IMPLEMENTED
    }

    async fn fallback_get(&self, url: &str) -> CheckResult {
        match self.client.get(url).timeout(self.timeout).send().await {
            Ok(res) => CheckResult::from_status(res.status().as_u16(), res.status().is_success()),
            Err(err) => CheckResult::failure(describe_error(&err)),
        }
    }
}

#[async_trait]
impl CheckLiveness for HttpChecker {
    async fn check(&self, url: &str) -> CheckResult {
        match self.client.head(url).timeout(self.timeout).send().await {
            Ok(res) => {
                let status = res.status();
                if Self::is_method_rejection(status.as_u16()) {
                    self.fallback_get(url).await
                } else {
                    CheckResult::from_status(status.as_u16(), status.is_success())
                }
            }
            // Timeout is terminal for the whole check, no fallback
            Err(err) if err.is_timeout() => CheckResult::timeout(),
            Err(_) => self.fallback_get(url).await,
        }
    }
}

/// Prefer the underlying cause's message, like the source error chain the
/// HTTP client wraps around connect and DNS failures.
fn describe_error(err: &reqwest::Error) -> String {
    std::error::Error::source(err)
        .map(|e| e.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use mockito::Server;

    fn checker_with_timeout_ms(timeout_ms: u64) -> HttpChecker {
        let config = Config {
            timeout_ms: Some(timeout_ms),
            ..Default::default()
        };
        HttpChecker::new(&config).expect("client should build")
    }

    #[tokio::test]
    async fn test_check__head_success() {
        let mut server = Server::new_async().await;
        let _m = server.mock("HEAD", "/200").with_status(200).create();
        let endpoint = server.url() + "/200";

        let result = checker_with_timeout_ms(5000).check(&endpoint).await;

        assert_eq!(result.status, 200);
        assert!(result.is_ok());
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn test_check__head_rejected_falls_back_to_get() {
        let mut server = Server::new_async().await;
        let _head = server.mock("HEAD", "/page").with_status(405).create();
        let _get = server.mock("GET", "/page").with_status(200).create();
        let endpoint = server.url() + "/page";

        let result = checker_with_timeout_ms(5000).check(&endpoint).await;

        assert_eq!(result.status, 200);
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_check__server_error_is_reported_without_fallback() {
        let mut server = Server::new_async().await;
        let _head = server
            .mock("HEAD", "/500")
            .with_status(500)
            .expect(1)
            .create();
        // If the checker wrongly fell back, the GET would flip the result to 200
        let _get = server.mock("GET", "/500").with_status(200).expect(0).create();
        let endpoint = server.url() + "/500";

        let result = checker_with_timeout_ms(5000).check(&endpoint).await;

        assert_eq!(result.status, 500);
        assert!(result.is_not_ok());
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn test_check__not_found_is_not_ok() {
        let mut server = Server::new_async().await;
        let _m = server.mock("HEAD", "/404").with_status(404).create();
        let endpoint = server.url() + "/404";

        let result = checker_with_timeout_ms(5000).check(&endpoint).await;

        assert_eq!(result.status, 404);
        assert!(result.is_not_ok());
    }

    #[tokio::test]
    async fn test_check__timeout_short_circuits_with_timeout_error() {
        // A bound listener that never answers: the connection is accepted
        // into the backlog but no response ever arrives
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/never", listener.local_addr().unwrap());

        let result = checker_with_timeout_ms(150).check(&endpoint).await;

        assert_eq!(result.status, 0);
        assert!(result.is_not_ok());
        assert_eq!(result.error.as_deref(), Some("timeout"));
    }

    #[tokio::test]
    async fn test_check__connection_failure_captures_description() {
        // Unroutable port on localhost fails fast with a connect error
        let endpoint = "http://127.0.0.1:1/unreachable".to_string();

        let result = checker_with_timeout_ms(5000).check(&endpoint).await;

        assert_eq!(result.status, 0);
        assert!(result.is_not_ok());
        assert!(result.error.is_some());
    }

    #[tokio::test]
    async fn test_check__malformed_url_is_captured_as_failure() {
        let result = checker_with_timeout_ms(1000).check("http://").await;

        assert_eq!(result.status, 0);
        assert!(result.error.is_some());
    }

    #[test]
    fn test_is_method_rejection() {
        assert!(HttpChecker::is_method_rejection(405));
        assert!(HttpChecker::is_method_rejection(501));
        assert!(!HttpChecker::is_method_rejection(200));
        assert!(!HttpChecker::is_method_rejection(500));
    }
}
