#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        match std::env::var("APP_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    PostgreSQL { url: String },
    SQLite { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    S3 {
        bucket: String,
        endpoint: String,
        region: String,
        access_key: String,
        secret_key: String,
        public_base_url: Option<String>,
    },
    Filesystem {
        base_path: String,
        serve_url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Resolve the full configuration for the current mode.
    ///
    /// Local mode runs without external services: SQLite plus an uploads
    /// directory on disk. Production requires Postgres and an
    /// S3-compatible bucket.
    pub fn from_env() -> Result<Self, String> {
        let mode = AppMode::from_env();
        match mode {
            AppMode::Local => Ok(Self {
                mode,
                database: DatabaseConfig::SQLite {
                    path: env_or("SQLITE_PATH", ".dev/local.db"),
                },
                storage: StorageConfig::Filesystem {
                    base_path: env_or("UPLOADS_PATH", ".dev/uploads"),
                    serve_url: env_or("UPLOADS_SERVE_URL", "http://localhost:8080/dev/uploads"),
                },
            }),
            AppMode::Production => Ok(Self {
                mode,
                database: DatabaseConfig::PostgreSQL {
                    url: require("DATABASE_URL")?,
                },
                storage: StorageConfig::S3 {
                    bucket: require("STORAGE_BUCKET")?,
                    endpoint: require("STORAGE_ENDPOINT")?,
                    region: env_or("STORAGE_REGION", "auto"),
                    access_key: require("STORAGE_ACCESS_KEY")?,
                    secret_key: require("STORAGE_SECRET_KEY")?,
                    public_base_url: std::env::var("MEDIA_BASE_URL")
                        .ok()
                        .filter(|v| !v.trim().is_empty()),
                },
            }),
        }
    }
}

/// Load `.env` for local development before reading the environment.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn require(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("{key} not set"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // These tests mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_app_mode_defaults_to_production() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var("APP_MODE");
        assert_eq!(AppMode::from_env(), AppMode::Production);
    }

    #[test]
    fn test_app_mode_local() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("APP_MODE", "local");
        assert_eq!(AppMode::from_env(), AppMode::Local);
        std::env::remove_var("APP_MODE");
    }

    #[test]
    fn test_app_mode_case_insensitive() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("APP_MODE", "LOCAL");
        assert_eq!(AppMode::from_env(), AppMode::Local);
        std::env::remove_var("APP_MODE");
    }

    #[test]
    fn test_local_config_uses_dev_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("APP_MODE", "local");
        std::env::remove_var("SQLITE_PATH");
        std::env::remove_var("UPLOADS_PATH");
        std::env::remove_var("UPLOADS_SERVE_URL");

        let config = AppConfig::from_env().expect("local config needs no env");
        assert_eq!(
            config.database,
            DatabaseConfig::SQLite {
                path: ".dev/local.db".to_string()
            }
        );
        assert_eq!(
            config.storage,
            StorageConfig::Filesystem {
                base_path: ".dev/uploads".to_string(),
                serve_url: "http://localhost:8080/dev/uploads".to_string(),
            }
        );
        std::env::remove_var("APP_MODE");
    }

    #[test]
    fn test_production_config_requires_database_url() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var("APP_MODE");
        std::env::remove_var("DATABASE_URL");

        let err = AppConfig::from_env().expect_err("production needs DATABASE_URL");
        assert!(err.contains("DATABASE_URL"));
    }
}
