mod config;
mod convergence;

pub use config::ReconcileConfig;
pub use convergence::{ConvergenceOutcome, check};
use log::debug;

use crate::{
    diffs::{DiffProvider, MyersDiff},
    errors::MergeError,
    operations::{Operation, apply_operations, translate},
    replica::{AgentId, ReplicatedSequence, RgaText},
    utils::side::Side,
};

/// Given a `base` text and two concurrent edits of it, merge `left` and
/// `right` through a sequence CRDT in both directions and report whether the
/// two merge orders agree.
///
/// Uses the character-level Myers diff, an `RgaText` replica and the default
/// `ReconcileConfig`.
///
/// ```
/// use replica_merge::reconcile;
///
/// let outcome = reconcile("Hello!", "Hello World!", "Hello! :-)").unwrap();
/// assert_eq!(outcome.unified_text(), Some("Hello World! :-)"));
/// ```
///
/// # Errors
///
/// See `Reconciler::reconcile`.
pub fn reconcile(base: &str, left: &str, right: &str) -> Result<ConvergenceOutcome, MergeError> {
    Reconciler::new(ReconcileConfig::default()).reconcile(base, left, right)
}

/// Drives two replicas of one base text through their editors' changes and
/// merges them pairwise.
///
/// Holds no state between calls, so a single instance can be reused for
/// every keystroke.
#[derive(Debug, Clone)]
pub struct Reconciler<D = MyersDiff> {
    config: ReconcileConfig,
    diff: D,
}

/// A `ConvergenceOutcome` together with the operations each side's edit was
/// translated into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub left_operations: Vec<Operation>,
    pub right_operations: Vec<Operation>,
    pub outcome: ConvergenceOutcome,
}

impl Reconciler {
    #[must_use]
    pub fn new(config: ReconcileConfig) -> Self {
        Self {
            config,
            diff: MyersDiff,
        }
    }
}

impl Default for Reconciler {
    fn default() -> Self { Self::new(ReconcileConfig::default()) }
}

impl<D> Reconciler<D>
where
    D: DiffProvider,
{
    /// Replaces the diff algorithm used to derive each editor's operations.
    #[must_use]
    pub fn with_diff_provider<P>(self, diff: P) -> Reconciler<P>
    where
        P: DiffProvider,
    {
        Reconciler {
            config: self.config,
            diff,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ReconcileConfig { &self.config }

    /// The operations that turn `base` into `target`, in replay order.
    #[must_use]
    pub fn translate(&self, base: &str, target: &str) -> Vec<Operation> {
        translate(&self.diff, base, target)
    }

    /// Reconciles using `RgaText` replicas.
    ///
    /// # Errors
    ///
    /// See `Reconciler::reconcile_with`.
    pub fn reconcile(
        &self,
        base: &str,
        left: &str,
        right: &str,
    ) -> Result<ConvergenceOutcome, MergeError> {
        self.reconcile_with::<RgaText>(base, left, right)
    }

    /// Creates a replica of `base`, forks it, applies the left edits to the
    /// original and the right edits to the fork, then merges each into a
    /// copy of the other.
    ///
    /// # Errors
    ///
    /// - `MergeError::IdenticalAgents` if both sides are configured with the
    ///   same agent.
    /// - `MergeError::RoundTripMismatch` if verification is enabled and a
    ///   replica doesn't end up with its editor's text.
    /// - Any error the replica raises while applying operations or merging.
    pub fn reconcile_with<S>(
        &self,
        base: &str,
        left: &str,
        right: &str,
    ) -> Result<ConvergenceOutcome, MergeError>
    where
        S: ReplicatedSequence,
    {
        Ok(self
            .reconcile_with_operations::<S>(base, left, right)?
            .outcome)
    }

    /// Like `reconcile_with` but also hands back the operations derived for
    /// each side, so callers don't have to diff the texts a second time.
    ///
    /// # Errors
    ///
    /// See `Reconciler::reconcile_with`.
    pub fn reconcile_with_operations<S>(
        &self,
        base: &str,
        left: &str,
        right: &str,
    ) -> Result<Reconciliation, MergeError>
    where
        S: ReplicatedSequence,
    {
        if self.config.left_agent == self.config.right_agent {
            return Err(MergeError::IdenticalAgents(self.config.left_agent.clone()));
        }

        let mut left_replica = S::from_text(AgentId::from(self.config.left_agent.as_str()), base);
        let mut right_replica = left_replica.fork(AgentId::from(self.config.right_agent.as_str()));

        let left_operations = self.edit(&mut left_replica, Side::Left, base, left)?;
        let right_operations = self.edit(&mut right_replica, Side::Right, base, right)?;

        let mut merged_ab = left_replica.clone();
        merged_ab.merge(&right_replica)?;

        let mut merged_ba = right_replica.clone();
        merged_ba.merge(&left_replica)?;

        Ok(Reconciliation {
            left_operations,
            right_operations,
            outcome: check(merged_ab.text(), merged_ba.text()),
        })
    }

    fn edit<S>(
        &self,
        replica: &mut S,
        side: Side,
        base: &str,
        target: &str,
    ) -> Result<Vec<Operation>, MergeError>
    where
        S: ReplicatedSequence,
    {
        let operations = self.translate(base, target);
        debug!("The {side} side changes the base with {} operations", operations.len());

        apply_operations(replica, &operations)?;

        let actual = replica.text();
        debug!("The {side} replica now holds {actual:?}");

        if self.config.verify_round_trip && actual != target {
            return Err(MergeError::RoundTripMismatch {
                side,
                expected: target.to_owned(),
                actual,
            });
        }

        Ok(operations)
    }
}
