//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Build the application state with the repository the configuration asks for.
    pub async fn new(config: &AppConfig) -> io::Result<Self> {
        let posts: Arc<dyn PostRepository> = match &config.database {
            #[cfg(feature = "postgres")]
            Some(db_config) => {
                let conn = blog_infra::database::connect(db_config)
                    .await
                    .map_err(io::Error::other)?;

                if config.run_migrations {
                    use migration::MigratorTrait;

                    tracing::info!("Applying pending migrations...");
                    migration::Migrator::up(&conn, None)
                        .await
                        .map_err(io::Error::other)?;
                }

                Arc::new(blog_infra::SeaOrmPostRepository::new(conn))
            }
            #[cfg(not(feature = "postgres"))]
            Some(_) => {
                tracing::warn!(
                    "DATABASE_URL is set but the postgres feature is disabled. Using in-memory repository."
                );
                Arc::new(InMemoryPostRepository::new())
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_repository(posts))
    }
}
