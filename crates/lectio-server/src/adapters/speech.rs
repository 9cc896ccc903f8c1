//! HTTP Speech Synthesizer Implementation
//!
//! Calls the TTS service and stores the returned audio as an mp3 artifact.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lectio::{DomainError, SpeechSynthesizer};

/// HTTP implementation of SpeechSynthesizer
pub struct HttpSpeechSynthesizer {
    client: Client,
    endpoint: String,
    language: String,
    audio_dir: PathBuf,
}

impl HttpSpeechSynthesizer {
    pub fn new(endpoint: impl Into<String>, language: impl Into<String>, audio_dir: impl Into<PathBuf>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
            language: language.into(),
            audio_dir: audio_dir.into(),
        }
    }
}

/// Wire format expected by the TTS service
#[derive(Serialize)]
struct SynthesisPayload<'a> {
    text: &'a str,
    language: &'a str,
}

#[async_trait]
impl SpeechSynthesizer for HttpSpeechSynthesizer {
    async fn synthesize(&self, text: &str, file_stem: &str) -> Result<PathBuf, DomainError> {
        let payload = SynthesisPayload {
            text,
            language: &self.language,
        };

        let audio = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("TTS unreachable: {e}")))?
            .error_for_status()
            .map_err(|e| DomainError::ExternalService(format!("TTS rejected request: {e}")))?
            .bytes()
            .await
            .map_err(|e| DomainError::ExternalService(format!("TTS response truncated: {e}")))?;

        tokio::fs::create_dir_all(&self.audio_dir)
            .await
            .map_err(|e| store_error(&self.audio_dir, e))?;

        let path = self.audio_dir.join(format!("{file_stem}.mp3"));
        tokio::fs::write(&path, &audio)
            .await
            .map_err(|e| store_error(&path, e))?;

        Ok(path)
    }
}

fn store_error(path: &Path, e: std::io::Error) -> DomainError {
    DomainError::ExternalService(format!("failed to store audio at {}: {e}", path.display()))
}
