use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const DEFAULT_LEFT_AGENT: &str = "left";
const DEFAULT_RIGHT_AGENT: &str = "right";
const DEFAULT_VERIFY_ROUND_TRIP: bool = true;

/// Settings of a `Reconciler`.
///
/// The agent names decide the order of text that both editors inserted at
/// the same spot: the greater name goes first. Keeping them fixed keeps the
/// merge result stable across runs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_left_agent"))]
    pub left_agent: String,

    #[cfg_attr(feature = "serde", serde(default = "default_right_agent"))]
    pub right_agent: String,

    /// Check that replaying each side's operations reproduces its text
    /// before merging.
    #[cfg_attr(feature = "serde", serde(default = "default_verify_round_trip"))]
    pub verify_round_trip: bool,
}

fn default_left_agent() -> String {
    debug!("Using default left agent: {DEFAULT_LEFT_AGENT}");
    DEFAULT_LEFT_AGENT.to_owned()
}

fn default_right_agent() -> String {
    debug!("Using default right agent: {DEFAULT_RIGHT_AGENT}");
    DEFAULT_RIGHT_AGENT.to_owned()
}

fn default_verify_round_trip() -> bool {
    debug!("Using default round trip verification: {DEFAULT_VERIFY_ROUND_TRIP}");
    DEFAULT_VERIFY_ROUND_TRIP
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            left_agent: default_left_agent(),
            right_agent: default_right_agent(),
            verify_round_trip: default_verify_round_trip(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_values() {
        let config = ReconcileConfig::default();

        assert_eq!(config.left_agent, "left");
        assert_eq!(config.right_agent, "right");
        assert!(config.verify_round_trip);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ReconcileConfig = serde_yaml::from_str("right_agent: bob").unwrap();

        assert_eq!(
            config,
            ReconcileConfig {
                left_agent: "left".to_owned(),
                right_agent: "bob".to_owned(),
                verify_round_trip: true,
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_empty_document_is_default() {
        let config: ReconcileConfig = serde_yaml::from_str("{}").unwrap();

        assert_eq!(config, ReconcileConfig::default());
    }
}
