//! Database connection management and the SeaORM repository.

mod connections;

#[cfg(feature = "postgres")]
mod base;
#[cfg(feature = "postgres")]
mod post_repository;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::{connect, ensure_schema};
#[cfg(feature = "postgres")]
pub use post_repository::SeaOrmPostRepository;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
