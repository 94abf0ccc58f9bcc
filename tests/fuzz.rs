use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use replica_merge::{
    MyersDiff, ReconcileConfig, Reconciler, ReplicatedSequence, RgaText, apply_operations,
    reconcile, translate,
};

const ITERATIONS: u64 = 500;

const CHARS: [char; 16] = [
    'a', 'b', 'c', '1', '2', ' ', '\n', // ASCII
    'é', 'ü', 'ß', // Latin-1
    'Δ', 'δ', // Greek
    '↯', '世', // BMP
    '🙂', '🎉', // astral plane
];

fn random_str(len: usize, rng: &mut SmallRng) -> String {
    (0..len)
        .map(|_| CHARS[rng.gen_range(0..CHARS.len())])
        .collect()
}

/// Applies a handful of random inserts and deletes to `text`.
fn mutate(text: &str, rng: &mut SmallRng) -> String {
    let mut chars = text.chars().collect::<Vec<_>>();

    for _ in 0..rng.gen_range(0..5) {
        if chars.is_empty() || rng.gen_bool(0.5) {
            let position = rng.gen_range(0..=chars.len());
            let len = rng.gen_range(1..4);
            let inserted = random_str(len, rng);
            chars.splice(position..position, inserted.chars());
        } else {
            let position = rng.gen_range(0..chars.len());
            let span = rng.gen_range(1..=usize::min(5, chars.len() - position));
            chars.drain(position..position + span);
        }
    }

    chars.into_iter().collect()
}

#[test]
fn fuzz_round_trip() {
    for seed in 0..ITERATIONS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let base = random_str(rng.gen_range(0..30), &mut rng);
        let target = if rng.gen_bool(0.5) {
            mutate(&base, &mut rng)
        } else {
            random_str(rng.gen_range(0..30), &mut rng)
        };

        let mut replica = RgaText::from_text("left".into(), &base);
        apply_operations(&mut replica, &translate(&MyersDiff, &base, &target)).unwrap();

        assert_eq!(replica.text(), target, "seed {seed}: {base:?} -> {target:?}");
    }
}

#[test]
fn fuzz_concurrent_edits_converge() {
    let swapped = Reconciler::new(ReconcileConfig {
        left_agent: "right".to_owned(),
        right_agent: "left".to_owned(),
        ..ReconcileConfig::default()
    });

    for seed in 0..ITERATIONS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let base = random_str(rng.gen_range(0..30), &mut rng);
        let left = mutate(&base, &mut rng);
        let right = mutate(&base, &mut rng);

        let outcome = reconcile(&base, &left, &right).unwrap();

        assert!(
            outcome.is_converged(),
            "seed {seed}: {base:?} + {left:?} + {right:?}"
        );
        assert_eq!(outcome.result_a_to_b(), outcome.result_b_to_a());
        assert_eq!(
            swapped.reconcile(&base, &right, &left).unwrap(),
            outcome,
            "seed {seed}"
        );
    }
}

#[test]
fn fuzz_one_sided_edit_wins() {
    for seed in 0..ITERATIONS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let base = random_str(rng.gen_range(0..30), &mut rng);
        let edited = mutate(&base, &mut rng);

        assert_eq!(
            reconcile(&base, &edited, &base).unwrap().unified_text(),
            Some(edited.as_str()),
            "seed {seed}"
        );
        assert_eq!(
            reconcile(&base, &base, &edited).unwrap().unified_text(),
            Some(edited.as_str()),
            "seed {seed}"
        );
    }
}
