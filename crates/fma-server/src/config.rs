use std::net::SocketAddr;
use std::path::Path;

use fma_engine::{Catalog, ProgressionEngine, ProgressionRules};
use fma_ledger::ServiceConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Allow any origin; the browser front end is served from elsewhere.
    pub permissive_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            permissive_cors: true,
        }
    }
}

/// Everything `fma serve` reads from its TOML file. Every table is
/// optional.
///
/// ```toml
/// [server]
/// bind_addr = "0.0.0.0:3001"
///
/// [rules]
/// xp_per_level = 200
///
/// [service]
/// enforce_unlocks = false
///
/// [[catalog.units]]
/// key = "pizza"
/// # ...
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub rules: ProgressionRules,
    pub service: ServiceConfig,
    /// Replaces the built-in catalog when present.
    pub catalog: Option<Catalog>,
}

impl AppConfig {
    pub fn load(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))?;
        if config.rules.xp_per_level == 0 {
            return Err(ServerError::Config("rules.xp_per_level must be positive".into()));
        }
        if let Some(catalog) = &config.catalog {
            catalog
                .validate()
                .map_err(|e| ServerError::Config(format!("catalog: {e}")))?;
        }
        Ok(config)
    }

    pub fn engine(&self) -> ProgressionEngine {
        let catalog = self.catalog.clone().unwrap_or_default();
        ProgressionEngine::new(self.rules.clone(), catalog)
    }
}
