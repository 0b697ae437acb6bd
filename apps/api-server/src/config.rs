//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use blog_infra::database::DatabaseConfig;

const DEFAULT_SCHEMA: &str = "blogs";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` when `DATABASE_URL` is unset: posts then live in memory.
    pub database: Option<DatabaseConfig>,
    /// Apply pending migrations at startup.
    pub run_migrations: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`; unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL").map(|url| {
            // Schemas are a PostgreSQL concept; other URLs get no search path.
            let schema = if url.starts_with("postgres") {
                lookup("DATABASE_SCHEMA")
                    .or_else(|| Some(DEFAULT_SCHEMA.to_string()))
                    .filter(|s| !s.is_empty())
            } else {
                None
            };

            DatabaseConfig {
                url,
                schema,
                max_connections: parsed(lookup("DB_MAX_CONNECTIONS")).unwrap_or(10),
                min_connections: parsed(lookup("DB_MIN_CONNECTIONS")).unwrap_or(1),
                log_sql: flag(lookup("DB_LOG_SQL"), false),
            }
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parsed(lookup("PORT")).unwrap_or(8000),
            database,
            run_migrations: flag(lookup("RUN_MIGRATIONS"), true),
        }
    }
}

fn parsed<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

fn flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(str::trim) {
        Some("1") => true,
        Some(v) if v.eq_ignore_ascii_case("true") => true,
        Some("0") => false,
        Some(v) if v.eq_ignore_ascii_case("false") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_database() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert!(config.database.is_none());
        assert!(config.run_migrations);
    }

    #[test]
    fn postgres_url_gets_default_schema() {
        let config = config_from(&[
            ("DATABASE_URL", "postgresql://user:password@db:5432/blogdb"),
            ("DB_MAX_CONNECTIONS", "25"),
            ("DB_LOG_SQL", "true"),
        ]);
        let db = config.database.unwrap();
        assert_eq!(db.schema.as_deref(), Some("blogs"));
        assert_eq!(db.max_connections, 25);
        assert_eq!(db.min_connections, 1);
        assert!(db.log_sql);
    }

    #[test]
    fn empty_schema_disables_search_path() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/blogdb"),
            ("DATABASE_SCHEMA", ""),
        ]);
        assert_eq!(config.database.unwrap().schema, None);
    }

    #[test]
    fn sqlite_url_has_no_schema() {
        let config = config_from(&[("DATABASE_URL", "sqlite://blog.db?mode=rwc")]);
        assert_eq!(config.database.unwrap().schema, None);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "eighty"), ("RUN_MIGRATIONS", "maybe")]);
        assert_eq!(config.port, 8000);
        assert!(config.run_migrations);

        let config = config_from(&[("RUN_MIGRATIONS", "0")]);
        assert!(!config.run_migrations);
    }
}
