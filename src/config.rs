//! MemoMemo configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main MemoMemo configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Classification pipeline configuration
    #[serde(default)]
    pub classify: ClassifyConfig,

    /// Chat responder configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed CORS origins (empty = allow any)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 18420,
            cors_origins: Vec::new(),
        }
    }
}

/// Classification pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Simulated processing delay in milliseconds
    pub latency_ms: u64,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self { latency_ms: 800 }
    }
}

/// Chat responder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base simulated typing delay in milliseconds
    pub base_latency_ms: u64,

    /// Upper bound of random jitter added to the base delay, in milliseconds
    pub jitter_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_latency_ms: 1500,
            jitter_ms: 1000,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory for durable settings (defaults to ~/.memomemo)
    pub data_dir: Option<PathBuf>,

    /// Seed the demo captures on first run
    pub seed_samples: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed_samples: true,
        }
    }
}
