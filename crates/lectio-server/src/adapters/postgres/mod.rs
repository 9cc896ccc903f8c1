//! PostgreSQL Repository Implementations

mod reading_repository;
mod user_repository;

pub use reading_repository::PgReadingRepository;
pub use user_repository::PgUserRepository;
