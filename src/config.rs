//! Configuration management for Collate Server

use std::env;

/// Default per-file upload cap: 16 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub share: ShareConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Bounds for the magic-link cache.
#[derive(Debug, Clone)]
pub struct ShareConfig {
    /// Maximum number of live entries.
    pub capacity: usize,
    /// Seconds an entry stays retrievable after insertion.
    pub ttl_secs: u64,
    /// Seconds between background sweeps of expired entries.
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Per-file cap; longer uploads are truncated, not rejected.
    pub max_file_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            share: ShareConfig {
                capacity: 5,
                ttl_secs: 300,
                sweep_interval_secs: 60,
            },
            upload: UploadConfig {
                max_file_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            share: ShareConfig {
                capacity: env::var("SHARE_CACHE_CAPACITY")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.share.capacity),
                ttl_secs: env::var("SHARE_CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.share.ttl_secs),
                sweep_interval_secs: env::var("SHARE_SWEEP_INTERVAL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.share.sweep_interval_secs),
            },
            upload: UploadConfig {
                max_file_bytes: env::var("MAX_UPLOAD_BYTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.upload.max_file_bytes),
            },
        }
    }
}
