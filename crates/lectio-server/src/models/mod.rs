//! API Models
//!
//! Request and response types for the HTTP API.

pub mod auth;
pub mod catalog;
pub mod reading;
pub mod user;

pub use auth::*;
pub use catalog::*;
pub use reading::*;
pub use user::*;
