//! Speech Synthesis Port
//!
//! Abstract interface for turning a reading body into an audio artifact.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Service interface for text-to-speech synthesis.
///
/// `file_stem` is the artifact name without extension; implementations
/// write (and overwrite) the artifact deterministically so repeated
/// sends never accumulate files.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` and return the artifact path
    async fn synthesize(&self, text: &str, file_stem: &str) -> Result<PathBuf, DomainError>;
}
