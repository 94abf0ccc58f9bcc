use thiserror::Error;

use crate::{replica::OpId, utils::side::Side};

/// Errors raised while driving a replica through a reconciliation.
///
/// None of these are expected under well-formed input: they signal a
/// contract violation by a collaborator (a malformed diff or replicas that
/// don't share history) and abort the single call that hit them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// An operation addresses characters past the end of the replica
    #[error(
        "Operation at position {position} spanning {length} characters is out of bounds for a \
         replica of {available} characters"
    )]
    PositionOutOfBounds {
        /// The visible position the operation starts at
        position: usize,
        /// The number of characters the operation touches
        length: usize,
        /// The number of visible characters in the replica
        available: usize,
    },

    /// Both editors were configured with the same agent, so their operations
    /// would collide
    #[error("Both editors use the agent `{0}`, the two sides need distinct agents")]
    IdenticalAgents(String),

    /// The replicas were not forked from a common ancestor
    #[error("Cannot merge replicas that do not share a common ancestor")]
    UnrelatedReplicas,

    /// A remote operation references an element the replica has never seen
    #[error("Operation references unknown element {0}")]
    MissingDependency(OpId),

    /// Replaying the translated operations didn't reproduce the editor's text
    #[error("Replaying the {side} edits produced `{actual}` instead of `{expected}`")]
    RoundTripMismatch {
        side: Side,
        expected: String,
        actual: String,
    },
}
