use std::collections::HashSet;

use log::trace;
use uuid::Uuid;

use super::{AgentId, OpId, ReplicatedSequence};
use crate::errors::MergeError;

/// A Replicated Growable Array of characters.
///
/// Every character ever inserted is kept as an element with a unique `OpId`;
/// deleting only marks it as a tombstone so that concurrent inserts can
/// still reference it. An insert names the element it follows, and siblings
/// competing for the same spot are ordered by descending `OpId`, which makes
/// the final order independent of the order in which operations arrive.
///
/// Merging replays the other replica's operation log, skipping operations
/// that were already applied. Logs are kept in causal order, so replaying
/// them in order never references an element before it exists.
#[derive(Debug, Clone)]
pub struct RgaText {
    lineage: Uuid,
    agent: AgentId,
    clock: u64,
    elements: Vec<Element>,
    log: Vec<SequenceOp>,
    seen: HashSet<OpId>,
}

#[derive(Debug, Clone)]
struct Element {
    id: OpId,
    value: char,
    deleted: bool,
}

#[derive(Debug, Clone)]
enum SequenceOp {
    Insert {
        id: OpId,
        origin: Option<OpId>,
        value: char,
    },
    Delete {
        id: OpId,
        target: OpId,
    },
}

impl SequenceOp {
    fn id(&self) -> &OpId {
        match self {
            SequenceOp::Insert { id, .. } | SequenceOp::Delete { id, .. } => id,
        }
    }
}

impl RgaText {
    #[must_use]
    pub fn agent(&self) -> &AgentId { &self.agent }

    /// Number of operations this replica has applied, its own and merged ones.
    #[must_use]
    pub fn operation_count(&self) -> usize { self.log.len() }

    /// Number of deleted characters still kept around for merging.
    #[must_use]
    pub fn tombstone_count(&self) -> usize {
        self.elements.iter().filter(|element| element.deleted).count()
    }

    fn next_id(&mut self) -> OpId {
        self.clock += 1;
        OpId::new(self.clock, self.agent.clone())
    }

    fn record(&mut self, op: SequenceOp) {
        self.clock = self.clock.max(op.id().counter);
        self.seen.insert(op.id().clone());
        self.log.push(op);
    }

    /// Index into `elements` of the `position`-th visible character.
    fn slot_of_visible(&self, position: usize) -> Option<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| !element.deleted)
            .nth(position)
            .map(|(slot, _)| slot)
    }

    fn slot_of_id(&self, id: &OpId) -> Result<usize, MergeError> {
        self.elements
            .iter()
            .position(|element| element.id == *id)
            .ok_or_else(|| MergeError::MissingDependency(id.clone()))
    }

    /// Places an element after its origin, skipping over the siblings (and
    /// their descendants) that carry a greater id.
    fn integrate_insert(
        &mut self,
        id: OpId,
        origin: Option<&OpId>,
        value: char,
    ) -> Result<(), MergeError> {
        let mut slot = match origin {
            Some(origin) => self.slot_of_id(origin)? + 1,
            None => 0,
        };

        while self
            .elements
            .get(slot)
            .is_some_and(|element| element.id > id)
        {
            slot += 1;
        }

        self.elements.insert(
            slot,
            Element {
                id,
                value,
                deleted: false,
            },
        );

        Ok(())
    }

    fn apply_remote(&mut self, op: &SequenceOp) -> Result<(), MergeError> {
        match op {
            SequenceOp::Insert { id, origin, value } => {
                self.integrate_insert(id.clone(), origin.as_ref(), *value)
            }
            SequenceOp::Delete { target, .. } => {
                let slot = self.slot_of_id(target)?;
                self.elements[slot].deleted = true;
                Ok(())
            }
        }
    }

    /// Inserts `text` after the element at `slot` (or at the very start).
    /// Local ids are greater than every id seen so far, so each character
    /// lands directly after its origin.
    fn insert_after_slot(&mut self, slot: Option<usize>, text: &str) {
        let mut origin = slot.map(|slot| self.elements[slot].id.clone());
        let mut next_slot = slot.map_or(0, |slot| slot + 1);

        for value in text.chars() {
            let id = self.next_id();
            self.elements.insert(
                next_slot,
                Element {
                    id: id.clone(),
                    value,
                    deleted: false,
                },
            );
            self.record(SequenceOp::Insert {
                id: id.clone(),
                origin: origin.replace(id),
                value,
            });
            next_slot += 1;
        }
    }
}

impl ReplicatedSequence for RgaText {
    fn from_text(agent: AgentId, text: &str) -> Self {
        let mut replica = Self {
            lineage: Uuid::new_v4(),
            agent,
            clock: 0,
            elements: Vec::with_capacity(text.len()),
            log: Vec::with_capacity(text.len()),
            seen: HashSet::with_capacity(text.len()),
        };
        replica.insert_after_slot(None, text);
        replica
    }

    fn fork(&self, agent: AgentId) -> Self {
        Self {
            agent,
            ..self.clone()
        }
    }

    fn insert_at(&mut self, position: usize, text: &str) -> Result<(), MergeError> {
        let slot = match position {
            0 => None,
            _ => Some(self.slot_of_visible(position - 1).ok_or_else(|| {
                MergeError::PositionOutOfBounds {
                    position,
                    length: 0,
                    available: self.len(),
                }
            })?),
        };

        trace!(
            "{} inserts {} characters at {position}",
            self.agent,
            text.chars().count()
        );
        self.insert_after_slot(slot, text);

        Ok(())
    }

    fn delete_at(&mut self, position: usize, length: usize) -> Result<(), MergeError> {
        let slots = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| !element.deleted)
            .skip(position)
            .take(length)
            .map(|(slot, _)| slot)
            .collect::<Vec<_>>();

        if slots.len() != length {
            return Err(MergeError::PositionOutOfBounds {
                position,
                length,
                available: self.len(),
            });
        }

        trace!("{} deletes {length} characters at {position}", self.agent);
        for slot in slots {
            self.elements[slot].deleted = true;
            let target = self.elements[slot].id.clone();
            let id = self.next_id();
            self.record(SequenceOp::Delete { id, target });
        }

        Ok(())
    }

    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        if self.lineage != other.lineage {
            return Err(MergeError::UnrelatedReplicas);
        }

        let before = self.log.len();
        for op in &other.log {
            if self.seen.contains(op.id()) {
                continue;
            }

            self.apply_remote(op)?;
            self.record(op.clone());
        }

        trace!(
            "{} merged {} new operations from {}",
            self.agent,
            self.log.len() - before,
            other.agent
        );

        Ok(())
    }

    fn text(&self) -> String {
        self.elements
            .iter()
            .filter(|element| !element.deleted)
            .map(|element| element.value)
            .collect()
    }

    fn len(&self) -> usize { self.elements.iter().filter(|element| !element.deleted).count() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pair(base: &str) -> (RgaText, RgaText) {
        let left = RgaText::from_text("left".into(), base);
        let right = left.fork("right".into());
        (left, right)
    }

    fn merged(into: &RgaText, from: &RgaText) -> String {
        let mut result = into.clone();
        result.merge(from).unwrap();
        result.text()
    }

    #[test]
    fn test_local_edits() {
        let mut text = RgaText::from_text("left".into(), "hello");

        text.insert_at(5, " world").unwrap();
        assert_eq!(text.text(), "hello world");

        text.delete_at(0, 6).unwrap();
        assert_eq!(text.text(), "world");
        assert_eq!(text.len(), 5);
        assert_eq!(text.tombstone_count(), 6);

        text.insert_at(0, "new ").unwrap();
        assert_eq!(text.text(), "new world");
    }

    #[test]
    fn test_insert_between_tombstones() {
        let mut text = RgaText::from_text("left".into(), "abc");

        text.delete_at(1, 1).unwrap();
        text.insert_at(1, "X").unwrap();

        assert_eq!(text.text(), "aXc");
    }

    #[test]
    fn test_unicode() {
        let mut text = RgaText::from_text("left".into(), "こんにちは");

        text.insert_at(3, "世界").unwrap();
        text.delete_at(0, 1).unwrap();

        assert_eq!(text.text(), "んに世界ちは");
    }

    #[test]
    fn test_out_of_bounds() {
        let mut text = RgaText::from_text("left".into(), "abc");

        assert_eq!(
            text.insert_at(4, "x"),
            Err(MergeError::PositionOutOfBounds {
                position: 4,
                length: 0,
                available: 3
            })
        );
        assert_eq!(
            text.delete_at(2, 2),
            Err(MergeError::PositionOutOfBounds {
                position: 2,
                length: 2,
                available: 3
            })
        );
        assert_eq!(text.text(), "abc");
    }

    #[test]
    fn test_empty_operations_are_noops() {
        let mut text = RgaText::from_text("left".into(), "abc");

        text.insert_at(3, "").unwrap();
        text.delete_at(3, 0).unwrap();

        assert_eq!(text.text(), "abc");
        assert_eq!(text.operation_count(), 3);
    }

    #[test]
    fn test_concurrent_inserts_at_same_spot() {
        let (mut left, mut right) = pair("");

        left.insert_at(0, "foo").unwrap();
        right.insert_at(0, "bar").unwrap();

        assert_eq!(merged(&left, &right), "barfoo");
        assert_eq!(merged(&right, &left), "barfoo");
    }

    #[test]
    fn test_concurrent_runs_do_not_interleave() {
        let (mut left, mut right) = pair("[]");

        left.insert_at(1, "abc").unwrap();
        right.insert_at(1, "xyz").unwrap();

        let result = merged(&left, &right);
        assert_eq!(result, merged(&right, &left));
        assert_eq!(result, "[xyzabc]");
    }

    #[test]
    fn test_insert_into_concurrently_deleted_range() {
        let (mut left, mut right) = pair("abcdef");

        left.delete_at(1, 4).unwrap();
        right.insert_at(3, "XYZ").unwrap();

        assert_eq!(merged(&left, &right), "aXYZf");
        assert_eq!(merged(&right, &left), "aXYZf");
    }

    #[test]
    fn test_both_delete_same_characters() {
        let (mut left, mut right) = pair("abcdef");

        left.delete_at(1, 3).unwrap();
        right.delete_at(2, 3).unwrap();

        assert_eq!(merged(&left, &right), "af");
        assert_eq!(merged(&right, &left), "af");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let (mut left, mut right) = pair("abc");

        left.insert_at(3, "d").unwrap();
        right.delete_at(0, 1).unwrap();

        let mut result = left.clone();
        result.merge(&right).unwrap();
        let operation_count = result.operation_count();
        result.merge(&right).unwrap();
        result.merge(&left).unwrap();

        assert_eq!(result.text(), "bcd");
        assert_eq!(result.operation_count(), operation_count);
    }

    #[test]
    fn test_merge_is_associative() {
        let left = RgaText::from_text("a".into(), "base");
        let mut middle = left.fork("b".into());
        let mut right = left.fork("c".into());
        let mut left = left;

        left.insert_at(0, "1").unwrap();
        middle.insert_at(0, "2").unwrap();
        right.insert_at(4, "3").unwrap();

        let mut left_first = left.clone();
        left_first.merge(&middle).unwrap();
        left_first.merge(&right).unwrap();

        let mut right_first = middle.clone();
        right_first.merge(&right).unwrap();
        let mut nested = left.clone();
        nested.merge(&right_first).unwrap();

        assert_eq!(left_first.text(), nested.text());
        assert_eq!(left_first.text(), "21base3");
    }

    #[test]
    fn test_edits_after_merge() {
        let (mut left, mut right) = pair("ab");

        left.insert_at(1, "x").unwrap();
        right.merge(&left).unwrap();
        right.insert_at(2, "y").unwrap();

        left.merge(&right).unwrap();
        assert_eq!(left.text(), "axyb");
        assert_eq!(right.text(), "axyb");
    }

    #[test]
    fn test_merging_unrelated_replicas_fails() {
        let mut left = RgaText::from_text("left".into(), "same");
        let right = RgaText::from_text("right".into(), "same");

        assert_eq!(left.merge(&right), Err(MergeError::UnrelatedReplicas));
    }

    #[test]
    fn test_fork_keeps_content_and_changes_agent() {
        let left = RgaText::from_text("left".into(), "abc");
        let right = left.fork("right".into());

        assert_eq!(right.text(), "abc");
        assert_eq!(right.agent().as_str(), "right");
        assert_eq!(left.clone().agent().as_str(), "left");
    }
}
