//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod postgres;
pub mod relay;
pub mod speech;

// Re-exports
pub use postgres::{PgReadingRepository, PgUserRepository};
pub use relay::HttpMessageRelay;
pub use speech::HttpSpeechSynthesizer;
