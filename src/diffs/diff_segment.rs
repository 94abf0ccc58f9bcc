use std::fmt::{Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Unchanged,
    Inserted,
    Removed,
}

/// A run of characters that is either kept, inserted or removed when going
/// from the base text to the target text.
///
/// Lengths are measured in `char`-s so that positions derived from them can
/// address a replica holding one element per character.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq)]
pub struct DiffSegment {
    kind: SegmentKind,
    text: String,
}

impl DiffSegment {
    #[must_use]
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn unchanged(text: impl Into<String>) -> Self { Self::new(SegmentKind::Unchanged, text) }

    #[must_use]
    pub fn inserted(text: impl Into<String>) -> Self { Self::new(SegmentKind::Inserted, text) }

    #[must_use]
    pub fn removed(text: impl Into<String>) -> Self { Self::new(SegmentKind::Removed, text) }

    #[must_use]
    pub fn kind(&self) -> SegmentKind { self.kind }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Number of characters in the segment.
    #[must_use]
    pub fn len(&self) -> usize { self.text.chars().count() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Whether the segment's characters are part of the base text.
    #[must_use]
    pub fn is_in_base(&self) -> bool {
        matches!(self.kind, SegmentKind::Unchanged | SegmentKind::Removed)
    }

    /// Whether the segment's characters are part of the target text.
    #[must_use]
    pub fn is_in_target(&self) -> bool {
        matches!(self.kind, SegmentKind::Unchanged | SegmentKind::Inserted)
    }

    /// Appends `text` if `kind` matches, otherwise hands `text` back.
    pub(crate) fn try_extend<'a>(&mut self, kind: SegmentKind, text: &'a str) -> Option<&'a str> {
        if self.kind == kind {
            self.text.push_str(text);
            None
        } else {
            Some(text)
        }
    }
}

/// Concatenates the segments that exist in the base text.
#[must_use]
pub fn base_text(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|segment| segment.is_in_base())
        .map(DiffSegment::text)
        .collect()
}

/// Concatenates the segments that exist in the target text.
#[must_use]
pub fn target_text(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|segment| segment.is_in_target())
        .map(DiffSegment::text)
        .collect()
}

impl Debug for DiffSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl Display for DiffSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = match self.kind {
            SegmentKind::Unchanged => '=',
            SegmentKind::Inserted => '+',
            SegmentKind::Removed => '-',
        };

        write!(f, "{sign}{:?}", self.text)
    }
}
