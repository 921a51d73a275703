//! Prime implicant generation by Quine-McCluskey tabulation
//!
//! Every round is a pure function from one bucketed cube table to the next
//! table plus the cubes of the round that could not be merged. Nothing is
//! flagged in place: a cube is prime exactly when no merge in its round used it.

use super::cubes::Cube;
use crate::truth_table::Position;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Cubes bucketed by their number of `1` inputs (index `0..=num_vars`)
type Buckets = Vec<Vec<Cube>>;

/// Result of one combination pass
struct Round {
    /// Merged cubes for the next pass, deduplicated per bucket
    next: Buckets,
    /// Cubes of this pass that took part in no merge
    primes: Vec<Cube>,
}

/// Generate the prime implicants covering `positions`
///
/// `positions` must be ascending (true and don't-care positions together).
/// Primes are returned in generation order: by round, then bucket, then the
/// order in which the cube entered its bucket. Patterns are unique.
pub(crate) fn prime_implicants(num_vars: usize, positions: &[Position]) -> Vec<Cube> {
    let mut buckets: Buckets = vec![Vec::new(); num_vars + 1];
    for &position in positions {
        let cube = Cube::minterm(num_vars, position);
        buckets[cube.ones()].push(cube);
    }

    let mut primes = Vec::new();
    let mut round_number = 0;
    loop {
        let round = combine_round(&buckets);
        debug!(
            "round {}: {} cubes in, {} merged, {} prime",
            round_number,
            buckets.iter().map(Vec::len).sum::<usize>(),
            round.next.iter().map(Vec::len).sum::<usize>(),
            round.primes.len()
        );
        primes.extend(round.primes);

        if round.next.iter().all(Vec::is_empty) {
            break;
        }
        buckets = round.next;
        round_number += 1;
    }

    dedup_by_pattern(primes)
}

/// Merge every adjacent-bucket pair that differs in a single input
fn combine_round(buckets: &[Vec<Cube>]) -> Round {
    let mut next: Buckets = vec![Vec::new(); buckets.len()];
    let mut seen: Vec<HashSet<String>> = vec![HashSet::new(); buckets.len()];
    let mut merged: HashSet<(usize, usize)> = HashSet::new();

    for (i, pair) in buckets.windows(2).enumerate() {
        for (a_index, a) in pair[0].iter().enumerate() {
            for (b_index, b) in pair[1].iter().enumerate() {
                if let Some(cube) = a.combine(b) {
                    trace!("{} + {} -> {}", a, b, cube);
                    merged.insert((i, a_index));
                    merged.insert((i + 1, b_index));
                    if seen[i].insert(cube.pattern()) {
                        next[i].push(cube);
                    }
                }
            }
        }
    }

    let merged = &merged;
    let primes = buckets
        .iter()
        .enumerate()
        .flat_map(move |(i, bucket)| {
            bucket
                .iter()
                .enumerate()
                .filter(move |(j, _)| !merged.contains(&(i, *j)))
                .map(|(_, cube)| cube.clone())
        })
        .collect();

    Round { next, primes }
}

/// Keep the first cube for every pattern
fn dedup_by_pattern(cubes: Vec<Cube>) -> Vec<Cube> {
    let mut seen = HashSet::new();
    cubes
        .into_iter()
        .filter(|cube| seen.insert(cube.pattern()))
        .collect()
}
