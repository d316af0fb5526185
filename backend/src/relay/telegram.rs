use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::config::TelegramConfig;
use crate::error::{RelayError, RelayResult};

const PARSE_MODE: &str = "HTML";

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

/// Forwards lead messages to a Telegram chat through the Bot API.
#[derive(Debug, Clone)]
pub struct TelegramRelay {
    client: Client,
    config: TelegramConfig,
}

impl TelegramRelay {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &TelegramConfig {
        &self.config
    }

    /// Sends `text` to the configured chat. One request, no retries.
    pub async fn send(&self, text: &str) -> RelayResult {
        let token = self
            .config
            .bot_token
            .as_ref()
            .ok_or(RelayError::MissingConfig("TELEGRAM_BOT_TOKEN"))?;
        let chat_id = self
            .config
            .chat_id
            .as_deref()
            .ok_or(RelayError::MissingConfig("TELEGRAM_CHAT_ID"))?;

        let url = format!(
            "{}/bot{}/sendMessage",
            self.config.api_url,
            token.expose_secret()
        );

        // The url carries the token, so it is stripped from any transport error.
        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest {
                chat_id,
                text,
                parse_mode: PARSE_MODE,
            })
            .send()
            .await
            .map_err(|e| RelayError::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Upstream { status, body });
        }

        tracing::debug!("Lead relayed to chat {}", chat_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn relay_for(server: &MockServer) -> TelegramRelay {
        TelegramRelay::new(
            TelegramConfig::new(Some("test-token".into()), Some("-1001".into()))
                .with_api_url(server.uri()),
        )
    }

    #[tokio::test]
    async fn missing_token_fails_without_a_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let relay = TelegramRelay::new(
            TelegramConfig::new(None, Some("-1001".into())).with_api_url(server.uri()),
        );
        let err = relay.send("hello").await.unwrap_err();
        assert!(matches!(err, RelayError::MissingConfig("TELEGRAM_BOT_TOKEN")));
    }

    #[tokio::test]
    async fn missing_chat_id_fails_without_a_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let relay = TelegramRelay::new(
            TelegramConfig::new(Some("test-token".into()), None).with_api_url(server.uri()),
        );
        let err = relay.send("hello").await.unwrap_err();
        assert!(matches!(err, RelayError::MissingConfig("TELEGRAM_CHAT_ID")));
        assert_eq!(err.public_message(), "Telegram configuration missing");
    }

    #[tokio::test]
    async fn posts_html_message_to_the_bot_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "chat_id": "-1001",
                "text": "Новая заявка",
                "parse_mode": "HTML",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        relay_for(&server).send("Новая заявка").await.unwrap();
    }

    #[tokio::test]
    async fn client_error_status_is_an_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_string(r#"{"ok":false,"description":"Bad Request: chat not found"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = relay_for(&server).send("hello").await.unwrap_err();
        match err {
            RelayError::Upstream { status, ref body } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert!(body.contains("chat not found"));
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
        assert_eq!(err.public_message(), "Failed to send message");
    }

    #[tokio::test]
    async fn server_error_status_is_an_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let err = relay_for(&server).send("hello").await.unwrap_err();
        assert!(matches!(
            err,
            RelayError::Upstream { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn network_error_does_not_leak_the_token() {
        // Nothing listens on port 9 locally.
        let relay = TelegramRelay::new(
            TelegramConfig::new(Some("leaky-token".into()), Some("-1001".into()))
                .with_api_url("http://127.0.0.1:9"),
        );
        let err = relay.send("hello").await.unwrap_err();
        assert!(matches!(err, RelayError::Network(_)));
        assert!(!err.to_string().contains("leaky-token"));
    }
}
