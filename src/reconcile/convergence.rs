use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of merging two replicas in both directions.
///
/// Divergence is a legitimate outcome rather than an error: both texts are
/// kept so they can be inspected side by side.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvergenceOutcome {
    converged: bool,
    unified_text: Option<String>,
    result_a_to_b: String,
    result_b_to_a: String,
}

impl ConvergenceOutcome {
    #[must_use]
    pub fn is_converged(&self) -> bool { self.converged }

    /// The merged text, present only if both merge orders agree.
    #[must_use]
    pub fn unified_text(&self) -> Option<&str> { self.unified_text.as_deref() }

    /// Text of the left replica with the right one merged into it.
    #[must_use]
    pub fn result_a_to_b(&self) -> &str { &self.result_a_to_b }

    /// Text of the right replica with the left one merged into it.
    #[must_use]
    pub fn result_b_to_a(&self) -> &str { &self.result_b_to_a }
}

/// Compares the texts produced by the two merge orders.
#[must_use]
pub fn check(merged_ab: String, merged_ba: String) -> ConvergenceOutcome {
    let converged = merged_ab == merged_ba;
    debug!(
        "Merge orders {}",
        if converged { "converged" } else { "diverged" }
    );

    ConvergenceOutcome {
        converged,
        unified_text: converged.then(|| merged_ab.clone()),
        result_a_to_b: merged_ab,
        result_b_to_a: merged_ba,
    }
}
