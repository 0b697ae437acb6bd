#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbBackend, DbConn, DbErr};

/// Configuration for the post store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// PostgreSQL schema holding the tables; also used as the search path.
    pub schema: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub log_sql: bool,
}

/// Open the connection pool and make sure the configured schema exists.
#[cfg(feature = "postgres")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let mut opts = ConnectOptions::new(config.url.clone());
    opts.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(config.log_sql);
    if let Some(schema) = &config.schema {
        opts.set_schema_search_path(schema.clone());
    }

    let conn = Database::connect(opts).await?;
    if let Some(schema) = &config.schema {
        ensure_schema(&conn, schema).await?;
    }

    tracing::info!(
        backend = ?conn.get_database_backend(),
        pool = config.max_connections,
        "Database connected"
    );
    Ok(conn)
}

/// Create `schema` if missing. Only PostgreSQL has schemas; other backends are left alone.
#[cfg(feature = "postgres")]
pub async fn ensure_schema<C: ConnectionTrait>(conn: &C, schema: &str) -> Result<(), DbErr> {
    if conn.get_database_backend() != DbBackend::Postgres {
        return Ok(());
    }
    if !is_identifier(schema) {
        return Err(DbErr::Custom(format!("invalid schema name: {schema:?}")));
    }

    conn.execute_unprepared(&format!("CREATE SCHEMA IF NOT EXISTS \"{schema}\""))
        .await?;
    tracing::debug!(schema, "Schema ensured");
    Ok(())
}

#[cfg_attr(not(feature = "postgres"), allow(dead_code))]
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
