//! The reqwest-backed `CommandTransport` implementation.

use std::time::Duration;

use tvbridge_app::ports::CommandTransport;
use tvbridge_domain::command::CommandRequest;
use tvbridge_domain::error::HttpError;

use crate::config::TransportConfig;

/// Executes device commands over HTTP with a shared connection pool.
///
/// Cloning is cheap; every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying builder error when the TLS backend cannot be
    /// initialised.
    pub fn new(config: &TransportConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

impl CommandTransport for ReqwestTransport {
    async fn execute(&self, request: &CommandRequest) -> Result<(), HttpError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes()).map_err(|_| {
            HttpError::Transport {
                message: format!("invalid HTTP method {:?}", request.method),
            }
        })?;

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        tracing::debug!(method = %request.method, url = %request.url, "dispatching device command");
        let response = builder.send().await.map_err(|err| HttpError::Transport {
            message: err.to_string(),
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%status, "device accepted command");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(HttpError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> ReqwestTransport {
        ReqwestTransport::new(&TransportConfig::default()).unwrap()
    }

    fn request(method: &str, url: String) -> CommandRequest {
        CommandRequest {
            method: method.to_string(),
            url,
            headers: std::collections::HashMap::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn should_succeed_on_2xx_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/tv/power/on")
            .with_status(204)
            .create_async()
            .await;

        let result = transport()
            .execute(&request("GET", format!("{}/tv/power/on", server.url())))
            .await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn should_classify_non_2xx_with_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/tv/power/on")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let err = transport()
            .execute(&request("GET", format!("{}/tv/power/on", server.url())))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            HttpError::Status {
                status: 500,
                body: "boom".to_string()
            }
        );
    }

    #[tokio::test]
    async fn should_forward_method_headers_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/tv/channel/hdmi1")
            .match_header("Auth", "some basic auth")
            .match_body("some body in here instead")
            .with_status(200)
            .create_async()
            .await;

        let mut command = request("PATCH", format!("{}/tv/channel/hdmi1", server.url()));
        command
            .headers
            .insert("Auth".to_string(), "some basic auth".to_string());
        command.body = Some("some body in here instead".to_string());

        transport().execute(&command).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn should_report_transport_error_without_status_when_unreachable() {
        // Port 1 is reserved; nothing answers there.
        let err = transport()
            .execute(&request("GET", "http://127.0.0.1:1/on".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, HttpError::Transport { .. }));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn should_reject_an_invalid_method_before_sending() {
        let err = transport()
            .execute(&request("NOT A VERB", "http://127.0.0.1:1/on".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, HttpError::Transport { .. }));
    }
}
