//! Gateway configuration loaded from TOML.

use anyhow::{Context, Result, bail};
use chat::MAX_CONTEXT_LENGTH;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level gateway configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Server bind configuration.
    pub server: ServerConfig,
    /// Completion provider configuration.
    pub llm: LlmConfig,
    /// Prompt assembly configuration.
    pub context: ContextConfig,
    /// Session lifecycle configuration.
    pub session: SessionConfig,
}

/// Server configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

/// Completion provider configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model identifier.
    pub model: CompactString,
    /// API key (supports `${ENV_VAR}` expansion).
    pub api_key: String,
    /// Optional base URL override for the provider endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".into(),
            api_key: "${API_KEY}".to_owned(),
            base_url: None,
        }
    }
}

/// Prompt assembly configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Path to the system preamble file.
    pub preamble_path: String,
    /// Length budget for the preamble plus history portion of a prompt.
    pub max_length: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            preamble_path: "system_prompt.txt".to_owned(),
            max_length: MAX_CONTEXT_LENGTH,
        }
    }
}

/// Session lifecycle configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Idle age in seconds after which a session and its history are
    /// evicted.
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { ttl_secs: 3600 }
    }
}

impl GatewayConfig {
    /// Parse a TOML string into a `GatewayConfig`, expanding environment
    /// variables in supported fields.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// The `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Load the system preamble named by `context.preamble_path`.
    ///
    /// A missing or empty preamble is fatal; the gateway refuses to come
    /// up without one.
    pub fn load_preamble(&self) -> Result<String> {
        let path = Path::new(&self.context.preamble_path);
        let preamble = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read system preamble {}", path.display()))?;
        if preamble.is_empty() {
            bail!("system preamble {} is empty", path.display());
        }
        Ok(preamble)
    }
}

/// Expand `${VAR}` references with environment values.
///
/// Unset variables expand to the empty string; an unterminated reference
/// is kept as written.
fn expand_env_vars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                if let Ok(value) = std::env::var(&after[..end]) {
                    out.push_str(&value);
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
