mod diff_segment;
mod myers;

pub use diff_segment::{DiffSegment, SegmentKind, base_text, target_text};
pub use myers::MyersDiff;

/// Produces a minimal edit script between two texts.
///
/// Implementations must return segments such that concatenating the
/// `Unchanged` and `Inserted` ones in order reconstructs `target`, and
/// concatenating the `Unchanged` and `Removed` ones reconstructs `base`.
/// Nothing else about the ordering is assumed.
pub trait DiffProvider {
    fn diff(&self, base: &str, target: &str) -> Vec<DiffSegment>;
}

impl<D> DiffProvider for &D
where
    D: DiffProvider + ?Sized,
{
    fn diff(&self, base: &str, target: &str) -> Vec<DiffSegment> { (**self).diff(base, target) }
}
