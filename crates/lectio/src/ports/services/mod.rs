//! Service Ports
//!
//! Abstract interfaces for external services.

mod message_relay;
mod speech;

pub use message_relay::*;
pub use speech::*;
