//! Tunable analysis thresholds

use serde::{Deserialize, Serialize};

/// Thresholds applied when ranking associations.
///
/// Every field is optional in JSON input; omitted fields keep their defaults.
///
/// ```json
/// { "main_min_sample_size": 30, "top_ranked": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Minimum pair count for a main-sample association to be ranked.
    pub main_min_sample_size: usize,
    /// Minimum pair count for a graduate-only association to be ranked.
    pub graduate_min_sample_size: usize,
    /// Number of main-sample associations shown in the overall table.
    pub top_ranked: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            main_min_sample_size: 20,
            graduate_min_sample_size: 8,
            top_ranked: 15,
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("top_ranked must be at least 1")]
    ZeroTopRanked,
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_ranked == 0 {
            return Err(ConfigError::ZeroTopRanked);
        }
        Ok(())
    }
}
