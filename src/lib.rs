//! Reconcile two concurrent edits of a shared base text.
//!
//! Each editor's text is diffed against the base, the diff is translated into
//! position-addressed inserts and deletes, and those are replayed on a
//! replica of a sequence CRDT. The two replicas are then merged in both
//! directions and the results are compared.
//!
//! ```
//! use replica_merge::reconcile;
//!
//! let outcome = reconcile("", "foo", "bar").unwrap();
//!
//! assert!(outcome.is_converged());
//! assert_eq!(outcome.unified_text(), Some("barfoo"));
//! ```

mod diffs;
mod errors;
mod operations;
mod reconcile;
mod replica;
mod utils;

pub use diffs::{DiffProvider, DiffSegment, MyersDiff, SegmentKind, base_text, target_text};
pub use errors::MergeError;
pub use operations::{Operation, apply_operations, translate, translate_segments};
pub use reconcile::{
    ConvergenceOutcome, ReconcileConfig, Reconciliation, Reconciler, check, reconcile,
};
pub use replica::{AgentId, OpId, ReplicatedSequence, RgaText};
pub use utils::side::Side;

#[cfg(feature = "wasm")]
pub mod wasm;
