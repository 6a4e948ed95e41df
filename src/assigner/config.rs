//! Assigner configuration.

use serde::{Deserialize, Serialize};

use crate::conflict::ConflictPolicy;
use crate::validation::DEFAULT_MAX_PERIOD_ID;

/// Configuration for the greedy assigner.
///
/// # Examples
///
/// ```
/// use u_enroll::assigner::AssignerConfig;
/// use u_enroll::conflict::ConflictPolicy;
///
/// let config = AssignerConfig::default()
///     .with_conflict_policy(ConflictPolicy::PeriodAndDay)
///     .with_seed(42)
///     .with_strict(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignerConfig {
    /// Which period fields form the conflict key.
    pub conflict_policy: ConflictPolicy,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    /// Run full input validation before assigning and abort on any error.
    pub strict: bool,

    /// Highest period id accepted by strict validation.
    pub max_period_id: u32,
}

impl Default for AssignerConfig {
    fn default() -> Self {
        Self {
            conflict_policy: ConflictPolicy::PeriodOnly,
            seed: None,
            strict: false,
            max_period_id: DEFAULT_MAX_PERIOD_ID,
        }
    }
}

impl AssignerConfig {
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_max_period_id(mut self, max_period_id: u32) -> Self {
        self.max_period_id = max_period_id;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_period_id == 0 {
            return Err("max_period_id must be at least 1".into());
        }
        Ok(())
    }
}
