//! HTTP Message Relay Implementation
//!
//! Hands outbound messages to the WhatsApp sender service using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use lectio::{DomainError, MessageRelay, OutboundMessage};

/// HTTP implementation of MessageRelay
pub struct HttpMessageRelay {
    client: Client,
    endpoint: String,
}

impl HttpMessageRelay {
    /// `endpoint` is the full URL of the sender's dispatch route.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

/// Wire format expected by the sender service
#[derive(Serialize)]
struct SendPayload<'a> {
    phone: &'a str,
    message: &'a str,
    audio: Option<String>,
}

#[async_trait]
impl MessageRelay for HttpMessageRelay {
    async fn send(&self, message: &OutboundMessage) -> Result<(), DomainError> {
        let payload = SendPayload {
            phone: &message.phone,
            message: &message.body,
            audio: message
                .audio
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
        };

        self.client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("sender unreachable: {e}")))?
            .error_for_status()
            .map_err(|e| DomainError::ExternalService(format!("sender rejected message: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_posts_expected_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(body_json(serde_json::json!({
                "phone": "+5511999999999",
                "message": "Olá Maria, seu versículo de hoje é:\ncorpo",
                "audio": "audios/audio_x_y.mp3",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let relay = HttpMessageRelay::new(format!("{}/send", server.uri()));
        let message = OutboundMessage {
            phone: "+5511999999999".to_string(),
            body: "Olá Maria, seu versículo de hoje é:\ncorpo".to_string(),
            audio: Some(PathBuf::from("audios/audio_x_y.mp3")),
        };

        relay.send(&message).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_surfaces_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let relay = HttpMessageRelay::new(format!("{}/send", server.uri()));
        let message = OutboundMessage {
            phone: "+5511999999999".to_string(),
            body: "hello".to_string(),
            audio: None,
        };

        let err = relay.send(&message).await.unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(_)));
    }
}
