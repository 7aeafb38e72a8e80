//! Feature flags which influence the metadata of generated resources.
//!
//! Loading and watching the feature flag data is left to the caller; this
//! module only defines its shape and defaults.
use serde::{Deserialize, Serialize};

use crate::kvp::{FilterError, LabelExclusion};

/// The subset of the controller feature flags this crate acts on.
///
/// Deserializes from the kebab-cased feature flag data, for example the
/// `data` of the `feature-flags-triggers` ConfigMap. Missing keys fall back
/// to their defaults.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct FeatureFlags {
    /// A regular expression matched against the keys of labels copied from
    /// the `EventListener`. Matching labels are not propagated onto generated
    /// resources. Empty means nothing is excluded.
    pub labels_exclusion_pattern: String,
}

impl FeatureFlags {
    /// Compiles [`Self::labels_exclusion_pattern`], which is how an invalid
    /// pattern should be detected while the flags are loaded, rather than at
    /// the first reconciliation.
    pub fn label_exclusion(&self) -> Result<LabelExclusion, FilterError> {
        LabelExclusion::new(&self.labels_exclusion_pattern)
    }
}
