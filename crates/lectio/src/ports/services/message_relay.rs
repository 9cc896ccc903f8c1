//! Message Relay Port
//!
//! Abstract interface for handing messages to the external channel
//! relay. The relay owns the messaging-channel session and protocol;
//! this port only delivers the payload to it.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// One outbound message for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Delivery address on the messaging channel
    pub phone: String,
    /// Full message text, greeting included
    pub body: String,
    /// Audio artifact to attach, when synthesis succeeded
    pub audio: Option<PathBuf>,
}

/// Service interface for outbound message dispatch
#[async_trait]
pub trait MessageRelay: Send + Sync {
    /// Hand one message to the relay (fire-and-forget from the
    /// caller's perspective; failures surface as `ExternalService`)
    async fn send(&self, message: &OutboundMessage) -> Result<(), DomainError>;
}
