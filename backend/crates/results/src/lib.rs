//! Results (Game Result Store) Backend Module
//!
//! Stores per-user minesweeper results and serves the recent-results list.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Records are immutable: there is no update or delete operation. Rows are
//! removed only by the database cascade when the owning user is deleted.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ResultError, ResultResult};
pub use infra::postgres::PgResultRepository;
pub use presentation::router::results_router;
