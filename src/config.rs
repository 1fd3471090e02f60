// In: src/config.rs

//! The single source of truth for feather bridge configuration.
//!
//! `BridgeConfig` is created once at the process boundary (from the
//! `FEATHER_BRIDGE_CONFIG` environment variable, or `Default`) and then shared
//! read-only as an `Arc<BridgeConfig>`. Every bridged operation also accepts an
//! explicit config so tests and embedders can route diagnostics elsewhere.

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::error::FeatherError;

/// Name of the environment variable holding a JSON `BridgeConfig`.
pub const CONFIG_ENV_VAR: &str = "FEATHER_BRIDGE_CONFIG";

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// Where failure diagnostics and flat-entry echoes are written.
///
/// Diagnostics are emitted in addition to the Status a caller receives; they
/// exist for interactive visibility and are never a substitute for checking
/// the Status.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticSink {
    /// **Default:** print to the process's standard output, one line per message.
    #[default]
    Stdout,
    Stderr,
    /// Route through the `log` facade at `warn` level.
    Log,
    /// Drop diagnostics. Statuses are still returned to callers.
    Silent,
}

/// The unified configuration for the bridge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct BridgeConfig {
    #[serde(default)]
    pub diagnostics: DiagnosticSink,

    /// Schema metadata key holding the table description.
    #[serde(default = "default_description_key")]
    pub description_key: String,

    /// If true, the flat entry point echoes the requested path and the
    /// resulting counts to the diagnostic sink.
    #[serde(default = "default_true")]
    pub echo_flat_record: bool,

    /// Colourise failure diagnostics written to a terminal sink.
    #[serde(default)]
    pub color: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            diagnostics: DiagnosticSink::default(),
            description_key: default_description_key(),
            echo_flat_record: true,
            color: false,
        }
    }
}

impl BridgeConfig {
    /// A config that swallows every diagnostic. Used by tests and benches.
    pub fn silent() -> Self {
        Self {
            diagnostics: DiagnosticSink::Silent,
            ..Default::default()
        }
    }

    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, FeatherError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads `FEATHER_BRIDGE_CONFIG`, falling back to `Default` when unset.
    pub fn from_env() -> Result<Self, FeatherError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }
}

//==================================================================================
// II. Process-wide Instance
//==================================================================================

static GLOBAL_CONFIG: OnceLock<Arc<BridgeConfig>> = OnceLock::new();

/// Returns the process-wide config, loading it from the environment on first use.
///
/// A malformed environment document is logged and replaced by the default so
/// that a typo can never take down the host.
pub fn global() -> Arc<BridgeConfig> {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = BridgeConfig::from_env().unwrap_or_else(|e| {
                log::warn!("ignoring {}: {}", CONFIG_ENV_VAR, e);
                BridgeConfig::default()
            });
            Arc::new(config)
        })
        .clone()
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

/// Helper for `serde` to provide the conventional Feather description key.
fn default_description_key() -> String {
    "description".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BridgeConfig::from_json(r#"{"diagnostics": "log"}"#).unwrap();
        assert_eq!(config.diagnostics, DiagnosticSink::Log);
        assert_eq!(config.description_key, "description");
        assert!(config.echo_flat_record);
        assert!(!config.color);
    }

    #[test]
    fn test_unknown_sink_is_rejected() {
        let err = BridgeConfig::from_json(r#"{"diagnostics": "pager"}"#).unwrap_err();
        assert!(matches!(err, FeatherError::Config(_)));
    }
}
