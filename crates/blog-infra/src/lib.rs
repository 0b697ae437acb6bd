//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - SeaORM repository and connection bootstrap
//!
//! Without `postgres` only the in-memory repository is built (`--no-default-features`).

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::SeaOrmPostRepository;
