//! Persistence layer: PostgreSQL participant pool and winner log.
//!
//! The concrete implementation uses `sqlx::PgPool` for async PostgreSQL
//! access. The winner commit protocol lives here — a single transaction
//! that converts a participant into a winner.

pub mod models;
pub mod postgres;

pub use postgres::PostgresStore;
