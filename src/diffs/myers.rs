//! Character-level diff on top of the Myers implementation in `similar`.
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`

use log::trace;
use similar::{Algorithm, ChangeTag, TextDiff};

use super::{DiffProvider, DiffSegment, SegmentKind};

/// Character-level Myers diff.
///
/// Adjacent characters of the same kind are coalesced, so the output never
/// contains two neighbouring segments of the same `SegmentKind`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MyersDiff;

impl DiffProvider for MyersDiff {
    fn diff(&self, base: &str, target: &str) -> Vec<DiffSegment> {
        let diff = TextDiff::configure()
            .algorithm(Algorithm::Myers)
            .diff_chars(base, target);

        let mut sink = SegmentSink::default();
        for change in diff.iter_all_changes() {
            sink.push(change.tag().into(), change.value());
        }

        trace!(
            "Diffed {} base characters against {} target characters into {} segments",
            base.chars().count(),
            target.chars().count(),
            sink.segments.len()
        );

        sink.segments
    }
}

impl From<ChangeTag> for SegmentKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => SegmentKind::Unchanged,
            ChangeTag::Insert => SegmentKind::Inserted,
            ChangeTag::Delete => SegmentKind::Removed,
        }
    }
}

/// Collects changes into coalesced `DiffSegment`-s.
#[derive(Debug, Default)]
struct SegmentSink {
    segments: Vec<DiffSegment>,
}

impl SegmentSink {
    fn push(&mut self, kind: SegmentKind, text: &str) {
        if text.is_empty() {
            return;
        }

        let rest = match self.segments.last_mut() {
            Some(last) => last.try_extend(kind, text),
            None => Some(text),
        };

        if let Some(text) = rest {
            self.segments.push(DiffSegment::new(kind, text));
        }
    }
}
