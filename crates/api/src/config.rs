use std::sync::Arc;

use reel_core::gate::{validate_code_format, DEFAULT_GATE_TTL_MINUTES};
use reel_core::storage::DEFAULT_MAX_UPLOAD_BYTES;
use reel_storage::hosted::HostedStorageConfig;
use reel_storage::{HostedStorage, LocalStorage, MemoryStorage, ObjectStorage};

/// Server configuration loaded from environment variables.
///
/// Optional values have defaults suitable for local development. Required
/// values (`SESSION_SECRET`, `ADMIN_GATE_CODE`, hosted storage credentials)
/// panic at startup when missing.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Login session settings.
    pub session: SessionConfig,
    /// Admin gate code settings.
    pub gate: GateConfig,
    /// Maximum accepted image upload size in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Object storage backend selection.
    pub storage: StorageConfig,
}

/// Session cookie configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Server-side secret; keys the gate cookie HMAC.
    pub secret: String,
    /// Lifetime of a login session in hours (default: `168`).
    pub expiry_hours: i64,
    /// Whether cookies carry the `Secure` attribute (default: `true`).
    pub cookie_secure: bool,
}

/// Admin gate configuration.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// The numeric code that unlocks the login page.
    pub code: String,
    /// Gate cookie lifetime in minutes (default: `15`).
    pub ttl_minutes: i64,
}

/// Which object storage backend to use.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Hosted storage REST API, authenticated with the service-role key.
    Hosted { url: String, service_key: String },
    /// Files under a local directory.
    Local { dir: String, public_base: String },
    /// In-process map. Nothing survives a restart.
    Memory,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SESSION_SECRET`       | required                   |
    /// | `SESSION_EXPIRY_HOURS` | `168`                      |
    /// | `COOKIE_SECURE`        | `true`                     |
    /// | `ADMIN_GATE_CODE`      | required, digits only      |
    /// | `GATE_TTL_MINUTES`     | `15`                       |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                 |
    /// | `STORAGE_BACKEND`      | `hosted`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .map(|v| v.parse().expect("MAX_UPLOAD_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session: SessionConfig::from_env(),
            gate: GateConfig::from_env(),
            max_upload_bytes,
            storage: StorageConfig::from_env(),
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let secret = std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let expiry_hours: i64 = std::env::var("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| "168".into())
            .parse()
            .expect("SESSION_EXPIRY_HOURS must be a valid i64");

        let cookie_secure: bool = std::env::var("COOKIE_SECURE")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("COOKIE_SECURE must be `true` or `false`");

        Self {
            secret,
            expiry_hours,
            cookie_secure,
        }
    }
}

impl GateConfig {
    pub fn from_env() -> Self {
        let code = std::env::var("ADMIN_GATE_CODE").expect("ADMIN_GATE_CODE must be set");
        if let Err(e) = validate_code_format(&code) {
            panic!("ADMIN_GATE_CODE is invalid: {e}");
        }

        let ttl_minutes: i64 = std::env::var("GATE_TTL_MINUTES")
            .map(|v| v.parse().expect("GATE_TTL_MINUTES must be a valid i64"))
            .unwrap_or(DEFAULT_GATE_TTL_MINUTES);

        Self { code, ttl_minutes }
    }
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "hosted".into());
        match backend.as_str() {
            "hosted" => StorageConfig::Hosted {
                url: std::env::var("STORAGE_URL")
                    .expect("STORAGE_URL must be set for the hosted storage backend"),
                service_key: std::env::var("STORAGE_SERVICE_KEY")
                    .expect("STORAGE_SERVICE_KEY must be set for the hosted storage backend"),
            },
            "local" => StorageConfig::Local {
                dir: std::env::var("STORAGE_LOCAL_DIR").unwrap_or_else(|_| "storage".into()),
                public_base: std::env::var("STORAGE_PUBLIC_BASE")
                    .unwrap_or_else(|_| "/storage".into()),
            },
            "memory" => StorageConfig::Memory,
            other => panic!("Unknown STORAGE_BACKEND '{other}'. Use hosted, local or memory"),
        }
    }

    /// Instantiate the configured backend.
    pub fn build(&self) -> Arc<dyn ObjectStorage> {
        match self {
            StorageConfig::Hosted { url, service_key } => {
                Arc::new(HostedStorage::new(HostedStorageConfig {
                    base_url: url.clone(),
                    service_key: service_key.clone(),
                }))
            }
            StorageConfig::Local { dir, public_base } => {
                Arc::new(LocalStorage::new(dir, public_base))
            }
            StorageConfig::Memory => Arc::new(MemoryStorage::new()),
        }
    }
}
