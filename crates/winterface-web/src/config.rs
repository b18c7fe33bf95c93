//! Application configuration loaded from environment variables.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hosts to bind a listener on (e.g. `["127.0.0.1"]`).
    pub bind_hosts: Vec<String>,

    /// TCP port shared by all listeners.
    pub port: u16,

    /// Connector idle timeout, applied as the per-request timeout.
    pub idle_timeout: Duration,

    /// Client hosts admitted by the access filter. `*` admits everything.
    pub allowed_hosts: Arc<HashSet<String>>,

    /// Filesystem root for `/static/*` assets.
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `WINTERFACE_BIND_HOSTS`: comma-separated bind hosts (default: "127.0.0.1")
    /// - `WINTERFACE_PORT`: listener port (default: 8080)
    /// - `WINTERFACE_IDLE_TIMEOUT_SECS`: idle timeout in seconds (default: 90)
    /// - `WINTERFACE_ALLOWED_HOSTS`: comma-separated allowed client hosts,
    ///   `*` for no restriction (default: "127.0.0.1,::1")
    /// - `WINTERFACE_STATIC_DIR`: static asset root (default: "static")
    ///
    /// Malformed numeric values are hard errors: the server must not come up
    /// on a port or timeout other than the one the operator asked for.
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_hosts: Vec<String> = std::env::var("WINTERFACE_BIND_HOSTS")
            .unwrap_or_else(|_| "127.0.0.1".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        anyhow::ensure!(
            !bind_hosts.is_empty(),
            "WINTERFACE_BIND_HOSTS must name at least one host"
        );

        let port: u16 = match std::env::var("WINTERFACE_PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid WINTERFACE_PORT {raw:?}: {e}"))?,
            Err(_) => 8080,
        };

        let idle_timeout_secs: u64 = match std::env::var("WINTERFACE_IDLE_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|e| {
                anyhow::anyhow!("invalid WINTERFACE_IDLE_TIMEOUT_SECS {raw:?}: {e}")
            })?,
            Err(_) => 90,
        };

        let allowed_hosts: HashSet<String> = std::env::var("WINTERFACE_ALLOWED_HOSTS")
            .unwrap_or_else(|_| "127.0.0.1,::1".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let static_dir =
            std::env::var("WINTERFACE_STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        tracing::info!(
            bind_hosts = ?bind_hosts,
            port,
            idle_timeout_secs,
            allowed_hosts = allowed_hosts.len(),
            static_dir = %static_dir,
            "configuration loaded"
        );

        Ok(Self {
            bind_hosts,
            port,
            idle_timeout: Duration::from_secs(idle_timeout_secs),
            allowed_hosts: Arc::new(allowed_hosts),
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "WINTERFACE_BIND_HOSTS",
        "WINTERFACE_PORT",
        "WINTERFACE_IDLE_TIMEOUT_SECS",
        "WINTERFACE_ALLOWED_HOSTS",
        "WINTERFACE_STATIC_DIR",
    ];

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
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_hosts, vec!["127.0.0.1"]);
            assert_eq!(config.port, 8080);
            assert_eq!(config.idle_timeout, Duration::from_secs(90));
            assert!(config.allowed_hosts.contains("127.0.0.1"));
            assert!(config.allowed_hosts.contains("::1"));
            assert_eq!(config.static_dir, "static");
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("WINTERFACE_BIND_HOSTS", "0.0.0.0, 192.168.1.5"),
                ("WINTERFACE_PORT", "9090"),
                ("WINTERFACE_IDLE_TIMEOUT_SECS", "30"),
                ("WINTERFACE_ALLOWED_HOSTS", "10.0.0.1,10.0.0.2"),
                ("WINTERFACE_STATIC_DIR", "/srv/winterface/static"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_hosts, vec!["0.0.0.0", "192.168.1.5"]);
                assert_eq!(config.port, 9090);
                assert_eq!(config.idle_timeout, Duration::from_secs(30));
                assert_eq!(config.allowed_hosts.len(), 2);
                assert!(config.allowed_hosts.contains("10.0.0.2"));
                assert_eq!(config.static_dir, "/srv/winterface/static");
            },
        );
    }

    #[test]
    fn config_invalid_port_is_an_error() {
        with_env_vars(&[("WINTERFACE_PORT", "not-a-port")], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn config_invalid_idle_timeout_is_an_error() {
        with_env_vars(&[("WINTERFACE_IDLE_TIMEOUT_SECS", "soon")], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn config_empty_bind_hosts_is_an_error() {
        with_env_vars(&[("WINTERFACE_BIND_HOSTS", " , ,")], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn config_wildcard_allowed_hosts() {
        with_env_vars(&[("WINTERFACE_ALLOWED_HOSTS", "*")], || {
            let config = Config::from_env().unwrap();
            assert!(config.allowed_hosts.contains("*"));
        });
    }
}
