use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{errors::MergeError, replica::ReplicatedSequence};

/// A position-addressed change that can be applied to a `ReplicatedSequence`.
///
/// Positions and lengths are counted in characters. They are only valid in
/// the order `translate_segments` emits them: a single operation moved out of
/// its sequence addresses the wrong characters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Insert { position: usize, text: String },
    Delete { position: usize, length: usize },
}

impl Operation {
    /// Creates an insert operation with the given position and text.
    /// If the text is empty (meaning that the operation would be a no-op),
    /// returns None.
    #[must_use]
    pub fn create_insert(position: usize, text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }

        Some(Operation::Insert { position, text })
    }

    /// Creates a delete operation removing `length` characters. Returns None
    /// if nothing would be deleted.
    #[must_use]
    pub fn create_delete(position: usize, length: usize) -> Option<Self> {
        if length == 0 {
            return None;
        }

        Some(Operation::Delete { position, length })
    }

    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Operation::Insert { position, .. } | Operation::Delete { position, .. } => *position,
        }
    }

    /// Returns the number of affected characters. It is always greater than 0
    /// because empty operations cannot be created through the constructors.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Operation::Insert { text, .. } => text.chars().count(),
            Operation::Delete { length, .. } => *length,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Applies the operation to `replica`.
    ///
    /// # Errors
    ///
    /// Propagates the replica's error when the operation is out of bounds.
    pub fn apply<S>(&self, replica: &mut S) -> Result<(), MergeError>
    where
        S: ReplicatedSequence,
    {
        match self {
            Operation::Insert { position, text } => replica.insert_at(*position, text),
            Operation::Delete { position, length } => replica.delete_at(*position, *length),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Insert { position, text } => write!(f, "insert {text:?} at {position}"),
            Operation::Delete { position, length } => write!(f, "delete {length} at {position}"),
        }
    }
}
