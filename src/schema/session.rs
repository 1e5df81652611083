//! CLI session configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::EvolutionConfig;

fn default_motif_length() -> usize {
    12
}

/// Where population and target sequences come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSource {
    /// Directory holding one sub-directory per dataset.
    pub root: PathBuf,
    /// Dataset (sub-directory) name.
    pub name: String,
    /// Length motifs are cut to; also the target length.
    #[serde(default = "default_motif_length")]
    pub motif_length: usize,
}

/// Everything the `motif-evo` binary needs to drive a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Run parameters.
    #[serde(default)]
    pub evolution: EvolutionConfig,
    /// Dataset to sample from; uniform random sequences when absent.
    #[serde(default)]
    pub dataset: Option<DatasetSource>,
    /// Delay between steps in milliseconds.
    #[serde(default)]
    pub step_delay_ms: u64,
    /// Safety cap on the number of steps driven.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

impl SessionConfig {
    /// Example session using the bundled E. coli layout.
    pub fn example() -> Self {
        Self {
            evolution: EvolutionConfig {
                random_seed: Some(42),
                ..Default::default()
            },
            dataset: Some(DatasetSource {
                root: PathBuf::from("data"),
                name: "ecoli".to_string(),
                motif_length: default_motif_length(),
            }),
            step_delay_ms: 10,
            max_steps: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_roundtrip() {
        let json = serde_json::to_string_pretty(&SessionConfig::example()).unwrap();
        let parsed: SessionConfig = serde_json::from_str(&json).unwrap();
        let dataset = parsed.dataset.unwrap();
        assert_eq!(dataset.name, "ecoli");
        assert_eq!(dataset.motif_length, 12);
        assert_eq!(parsed.step_delay_ms, 10);
    }

    #[test]
    fn test_minimal_session() {
        let parsed: SessionConfig =
            serde_json::from_str(r#"{"evolution": {"target": "ACGTACGT"}}"#).unwrap();
        assert!(parsed.dataset.is_none());
        assert_eq!(parsed.step_delay_ms, 0);
        assert!(parsed.evolution.validate().is_ok());
    }
}
