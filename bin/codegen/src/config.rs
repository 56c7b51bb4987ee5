//! Generator configuration.
//!
//! One TOML file with two tables: `[project]` (what to generate) and
//! `[connection]` (where the metadata lives).
//!
//! ```text
//! [project]
//! namespace = "MyProject"
//! entity_prefixes = ["sys", "sec"]
//! enum_prefix = "com.haulmont.cuba"
//! output_dir = "Model"
//!
//! [connection]
//! endpoint = "http://localhost:8080/app/rest"
//! client_id = "client"
//! client_secret = "secret"
//! username = "admin"
//! password = "admin"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// What to generate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Root namespace of the emitted modules.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Metaclass prefixes, one entity batch each.
    pub entity_prefixes: Vec<String>,

    /// Enum name prefix. Empty generates every enumeration.
    #[serde(default)]
    pub enum_prefix: String,

    /// Output directory for the generated `.cs` files.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// Metadata service endpoint and credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// REST API base URL, without the `/v2` suffix.
    pub endpoint: String,

    /// OAuth REST client credentials.
    pub client_id: String,
    pub client_secret: String,

    /// Platform user credentials.
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub project: ProjectConfig,
    pub connection: ConnectionConfig,
}

fn default_namespace() -> String {
    "MyProject".to_string()
}

fn default_output_dir() -> String {
    "Model".to_string()
}

impl GeneratorConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
        let config: GeneratorConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
