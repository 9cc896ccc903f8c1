//! Lectio Domain Library
//!
//! Core domain types and interfaces for the Lectio daily scripture
//! delivery service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (User, Reading)
//!   - `value_objects/`: Immutable value types (BibleVersion, ReadingPlan,
//!     ReadingOrder, DeliveryTime, Passage)
//!   - `services/`: Pure domain services (ReadingCatalog)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces (speech, message relay)
//!
//! # Usage
//!
//! ```rust,ignore
//! use lectio::domain::{User, Reading, ReadingCatalog};
//! use lectio::ports::{UserRepository, ReadingRepository, MessageRelay};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    BibleVersion, DailyReading, DeliveryTime, DomainError, Passage, PlanInfo, Reading,
    ReadingCatalog, ReadingOrder, ReadingPlan, User, VersionInfo,
};
pub use ports::{
    // Repositories
    ReadingRepository,
    ResolvedReading,
    UserRepository,
    // External services
    MessageRelay,
    OutboundMessage,
    SpeechSynthesizer,
};
