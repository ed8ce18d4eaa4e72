//! HTTP range source backed by `reqwest`.

use reqwest::StatusCode;

use super::{BreachError, RangeSource};
use crate::config::BreachConfig;

/// Queries a Pwned Passwords compatible `GET {api_url}/{prefix}` endpoint.
///
/// No timeout is set: a stalled service holds the lookup until the
/// transport itself gives up.
#[derive(Debug, Clone)]
pub struct HttpRangeSource {
    client: reqwest::Client,
    config: BreachConfig,
}

impl HttpRangeSource {
    pub fn new(config: BreachConfig) -> Result<Self, BreachError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BreachConfig {
        &self.config
    }
}

impl RangeSource for HttpRangeSource {
    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        let mut request = self.client.get(self.config.range_url(prefix));
        if self.config.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send().await?;
        if response.status() != StatusCode::OK {
            return Err(BreachError::UnexpectedStatus(response.status().as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::testing::body_containing;
    use crate::breach::BreachChecker;
    use crate::types::BreachStatus;
    use secrecy::SecretString;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves a single HTTP response and hands back the raw request.
    async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).await.expect("read");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.expect("write");
            let _ = stream.shutdown().await;

            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{}/range", addr), handle)
    }

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    fn source_for(api_url: &str, padding: bool) -> HttpRangeSource {
        let config = BreachConfig::default()
            .with_api_url(api_url)
            .with_user_agent("pwd-security-tests")
            .with_padding(padding);
        HttpRangeSource::new(config).expect("client should build")
    }

    #[tokio::test]
    async fn test_fetch_range_requests_prefix_path() {
        let (url, server) = serve_once("200 OK", "ABC:1\r\n".to_string()).await;
        let source = source_for(&url, false);

        let body = source.fetch_range("5BAA6").await.expect("lookup should succeed");
        assert_eq!(body, "ABC:1\r\n");

        let request = server.await.expect("server task");
        assert!(request.starts_with("GET /range/5BAA6 HTTP/1.1\r\n"));
        assert!(request.to_ascii_lowercase().contains("user-agent: pwd-security-tests"));
        assert!(!request.to_ascii_lowercase().contains("add-padding"));
    }

    #[tokio::test]
    async fn test_fetch_range_sends_padding_header() {
        let (url, server) = serve_once("200 OK", String::new()).await;
        let source = source_for(&url, true);

        source.fetch_range("5BAA6").await.expect("lookup should succeed");

        let request = server.await.expect("server task");
        assert!(request.to_ascii_lowercase().contains("add-padding: true"));
    }

    #[tokio::test]
    async fn test_fetch_range_non_ok_status() {
        let (url, server) = serve_once("429 Too Many Requests", String::new()).await;
        let source = source_for(&url, false);

        let result = source.fetch_range("5BAA6").await;
        assert!(matches!(result, Err(BreachError::UnexpectedStatus(429))));
        server.await.expect("server task");
    }

    #[tokio::test]
    async fn test_checker_over_http_never_leaks_password() {
        let (url, server) = serve_once("200 OK", body_containing("password", 9545824)).await;
        let checker = BreachChecker::with_source(source_for(&url, false));

        let status = checker.check(&secret("password")).await;
        assert_eq!(status, BreachStatus::Compromised { count: 9545824 });

        let request = server.await.expect("server task");
        assert!(request.contains("/range/5BAA6 "));
        assert!(!request.contains("1E4C9B93F3F0682250B6CF8331B7EE68FD8"));
        assert!(!request.contains("password"));
    }

    #[tokio::test]
    async fn test_checker_transport_error_fails_open() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let checker = BreachChecker::with_source(source_for(&format!("http://{}/range", addr), false));

        assert_eq!(checker.check(&secret("password")).await, BreachStatus::Unknown);
        assert!(!checker.is_compromised(&secret("password")).await);
    }

    #[tokio::test]
    async fn test_checker_server_error_fails_open() {
        let (url, server) = serve_once("500 Internal Server Error", String::new()).await;
        let checker = BreachChecker::with_source(source_for(&url, false));

        assert!(!checker.is_compromised(&secret("password")).await);
        server.await.expect("server task");
    }
}
