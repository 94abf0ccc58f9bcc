use log::{debug, trace};

use super::Operation;
use crate::{
    diffs::{DiffProvider, DiffSegment, SegmentKind},
    errors::MergeError,
    replica::ReplicatedSequence,
};

/// Diffs `base` against `target` and turns the diff into operations which,
/// replayed in order on a replica holding `base`, leave it holding `target`.
///
/// A provider whose segments don't add up to `base` yields operations that
/// either fail to apply or produce some other text.
pub fn translate<D>(provider: &D, base: &str, target: &str) -> Vec<Operation>
where
    D: DiffProvider + ?Sized,
{
    translate_segments(&provider.diff(base, target))
}

/// Converts diff segments into a replay-safe list of operations.
///
/// All inserts come first, in left-to-right order, addressed in the base
/// text's coordinates: removed characters are still present when the inserts
/// run, so they count towards the insert positions. All deletes follow, in
/// right-to-left order, addressed in the coordinates of the text with every
/// insert applied. Deleting from the end backwards keeps the positions of
/// the remaining deletes intact.
#[must_use]
pub fn translate_segments(segments: &[DiffSegment]) -> Vec<Operation> {
    let mut operations = Vec::new();

    let mut position = 0;
    for segment in segments {
        if segment.kind() == SegmentKind::Inserted {
            operations.extend(Operation::create_insert(position, segment.text()));
        }
        position += segment.len();
    }

    let insert_count = operations.len();

    // `position` is now the length of the base plus every inserted character.
    for segment in segments.iter().rev() {
        position -= segment.len();
        if segment.kind() == SegmentKind::Removed {
            operations.extend(Operation::create_delete(position, segment.len()));
        }
    }

    trace!(
        "Translated {} segments into {insert_count} inserts and {} deletes",
        segments.len(),
        operations.len() - insert_count
    );

    operations
}

/// Applies `operations` to `replica` in order.
///
/// # Errors
///
/// Stops at the first operation the replica rejects.
pub fn apply_operations<S>(replica: &mut S, operations: &[Operation]) -> Result<(), MergeError>
where
    S: ReplicatedSequence,
{
    debug!("Applying {} operations", operations.len());

    for operation in operations {
        trace!("Applying {operation}");
        operation.apply(replica)?;
    }

    Ok(())
}
