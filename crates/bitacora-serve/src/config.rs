//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Path to the content store SQLite database.
    pub database_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `BITACORA_DB_PATH`: Path to the content store database
    ///
    /// Optional environment variables:
    /// - `BITACORA_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("BITACORA_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let database_path = std::env::var("BITACORA_DB_PATH")
            .map(PathBuf::from)
            .map_err(|_| anyhow::anyhow!("BITACORA_DB_PATH environment variable is required"))?;

        tracing::info!(
            bind_addr = %bind_addr,
            database_path = %database_path.display(),
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &["BITACORA_BIND_ADDR", "BITACORA_DB_PATH"];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_requires_database_path() {
        with_env_vars(&[], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[("BITACORA_DB_PATH", "/var/lib/bitacora/blog.db")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert_eq!(
                config.database_path,
                PathBuf::from("/var/lib/bitacora/blog.db")
            );
        });
    }

    #[test]
    fn config_custom_bind_addr() {
        with_env_vars(
            &[
                ("BITACORA_BIND_ADDR", "127.0.0.1:9090"),
                ("BITACORA_DB_PATH", "blog.db"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
            },
        );
    }
}
