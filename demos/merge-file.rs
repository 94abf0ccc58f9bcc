use std::{env, fs};

use anyhow::{Context as _, Result, bail};
use replica_merge::reconcile;

/// Merges three versions of a file: mine, base, and theirs.
/// A trivial take on git merge-file (https://git-scm.com/docs/git-merge-file)
/// that merges through a sequence CRDT instead of a 3-way text merge.
///
/// Run it with:
/// `cargo run --example merge-file my.txt base.txt their.txt [output_file.txt]`
fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 || args.len() > 5 {
        bail!("Usage: merge-file <mine> <base> <theirs> [output]");
    }

    let mine = read(&args[1])?;
    let base = read(&args[2])?;
    let theirs = read(&args[3])?;

    let outcome = reconcile(&base, &mine, &theirs).context("Failed to merge the files")?;

    let Some(merged) = outcome.unified_text() else {
        bail!(
            "Merging in the two directions gave different results:\n{}\n---\n{}",
            outcome.result_a_to_b(),
            outcome.result_b_to_a()
        );
    };

    if let Some(output_path) = args.get(4) {
        fs::write(output_path, merged).with_context(|| format!("Error writing to {output_path}"))?;
    } else {
        print!("{merged}");
    }

    Ok(())
}

fn read(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Error reading {path}"))
}
