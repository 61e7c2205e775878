//! Engine configuration
//!
//! The only tunable rule is what happens after a push in which an
//! opposite-sign pair cancelled out. It defaults to doing nothing.
//!
//! Environment variables:
//!
//! - `TWENTY48_REDUCTION_RULE`: `off` / `disabled` (default) or
//!   `halve` / `halve-max-edge`

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`EngineConfig::from_env`]
pub const REDUCTION_RULE_ENV: &str = "TWENTY48_REDUCTION_RULE";

/// Follow-up applied when a push cancelled an opposite-sign pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReductionRule {
    /// Plain push result
    #[default]
    Disabled,
    /// Halve the edge-biased maximum tile of the pushed grid
    HalveMaxEdge,
}

impl ReductionRule {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "off" | "disabled" | "none" => Some(ReductionRule::Disabled),
            "halve" | "halve-max-edge" => Some(ReductionRule::HalveMaxEdge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReductionRule::Disabled => "disabled",
            ReductionRule::HalveMaxEdge => "halve-max-edge",
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub reduction: ReductionRule,
}

impl EngineConfig {
    pub fn new(reduction: ReductionRule) -> Self {
        Self { reduction }
    }

    /// Load from environment variables, falling back to defaults
    ///
    /// Unrecognised values are ignored with a warning.
    pub fn from_env() -> Self {
        let reduction = match std::env::var(REDUCTION_RULE_ENV) {
            Ok(raw) => ReductionRule::from_str(&raw).unwrap_or_else(|| {
                log::warn!("ignoring unknown {REDUCTION_RULE_ENV}={raw:?}");
                ReductionRule::default()
            }),
            Err(_) => ReductionRule::default(),
        };

        Self { reduction }
    }
}
