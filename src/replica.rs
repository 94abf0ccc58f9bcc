mod op_id;
mod rga_text;

pub use op_id::{AgentId, OpId};
pub use rga_text::RgaText;

use crate::errors::MergeError;

/// A causally-mergeable sequence of characters.
///
/// Replicas are created with `from_text` and then `fork`-ed; every replica in
/// one lineage can be merged with every other. Positions and lengths are
/// counted in visible characters.
pub trait ReplicatedSequence: Clone {
    /// Creates a fresh lineage holding `text`, edited as `agent`.
    fn from_text(agent: AgentId, text: &str) -> Self;

    /// Creates a causally related copy that edits as `agent`.
    ///
    /// Two editors must not share an agent: `Clone::clone` keeps the agent
    /// and is only meant for read-only snapshots such as merge inputs.
    #[must_use]
    fn fork(&self, agent: AgentId) -> Self;

    /// Inserts `text` so that its first character ends up at `position`.
    ///
    /// # Errors
    ///
    /// Returns `MergeError::PositionOutOfBounds` if `position` is past the end.
    fn insert_at(&mut self, position: usize, text: &str) -> Result<(), MergeError>;

    /// Deletes `length` characters starting at `position`.
    ///
    /// # Errors
    ///
    /// Returns `MergeError::PositionOutOfBounds` if the range doesn't fit.
    fn delete_at(&mut self, position: usize, length: usize) -> Result<(), MergeError>;

    /// Incorporates every change of `other` that this replica hasn't seen.
    ///
    /// # Errors
    ///
    /// Fails if the replicas don't share a lineage or if `other` carries an
    /// operation whose causal dependencies are unknown.
    fn merge(&mut self, other: &Self) -> Result<(), MergeError>;

    fn text(&self) -> String;

    /// Number of visible characters.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool { self.len() == 0 }
}
