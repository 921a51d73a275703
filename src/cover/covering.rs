//! Cover selection: essential prime implicants, then greedy fill
//!
//! Only the required (true) positions drive the selection; don't-care
//! positions may sit inside a chosen prime but never need covering.
//!
//! The greedy phase is a heuristic. It always yields a valid cover but not
//! necessarily one with the fewest terms; results are reproducible because
//! every choice depends only on prime order and the tie-break rule.

use super::cubes::Cube;
use crate::truth_table::Position;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// How to choose between primes covering equally many uncovered positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieBreak {
    /// The earliest prime in generation order wins
    #[default]
    GenerationOrder,
    /// The smallest pattern wins, comparing inputs with `0 < 1 < -`
    Lexicographic,
}

/// Indices into the prime list, in the order they were added to the cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selection {
    /// Chosen primes: the first `essential_count` entries are essential
    pub chosen: Vec<usize>,
    /// Number of essential primes at the front of `chosen`
    pub essential_count: usize,
}

/// Select primes until every required position is covered
pub(crate) fn select_cover(
    primes: &[Cube],
    required: &BTreeSet<Position>,
    tie_break: TieBreak,
) -> Selection {
    let mut remaining = required.clone();
    let mut chosen: Vec<usize> = Vec::new();

    while !remaining.is_empty() {
        let chart = coverage_chart(primes, &remaining, &chosen);
        let Some(essential) = find_essential(&chart) else {
            break;
        };
        debug!("essential prime {}", primes[essential]);
        remaining = uncovered_by(&remaining, &primes[essential]);
        chosen.push(essential);
    }
    let essential_count = chosen.len();

    while !remaining.is_empty() {
        let Some(best) = best_candidate(primes, &remaining, &chosen, tie_break) else {
            break;
        };
        debug!(
            "greedy prime {} covers {} of {} remaining",
            primes[best],
            count_covered(&primes[best], &remaining),
            remaining.len()
        );
        remaining = uncovered_by(&remaining, &primes[best]);
        chosen.push(best);
    }

    Selection {
        chosen,
        essential_count,
    }
}

/// For each remaining position, the unchosen primes covering it
fn coverage_chart(
    primes: &[Cube],
    remaining: &BTreeSet<Position>,
    chosen: &[usize],
) -> BTreeMap<Position, Vec<usize>> {
    remaining
        .iter()
        .map(|&position| {
            let covering = primes
                .iter()
                .enumerate()
                .filter(|(i, prime)| !chosen.contains(i) && prime.covers(position))
                .map(|(i, _)| i)
                .collect();
            (position, covering)
        })
        .collect()
}

/// The sole covering prime of the lowest position that has exactly one
fn find_essential(chart: &BTreeMap<Position, Vec<usize>>) -> Option<usize> {
    chart
        .values()
        .find(|covering| covering.len() == 1)
        .map(|covering| covering[0])
}

fn uncovered_by(remaining: &BTreeSet<Position>, prime: &Cube) -> BTreeSet<Position> {
    remaining
        .iter()
        .copied()
        .filter(|&position| !prime.covers(position))
        .collect()
}

fn count_covered(prime: &Cube, remaining: &BTreeSet<Position>) -> usize {
    remaining.iter().filter(|&&p| prime.covers(p)).count()
}

/// The unchosen prime covering the most remaining positions, if any covers one
fn best_candidate(
    primes: &[Cube],
    remaining: &BTreeSet<Position>,
    chosen: &[usize],
    tie_break: TieBreak,
) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (i, prime) in primes.iter().enumerate() {
        if chosen.contains(&i) {
            continue;
        }
        let count = count_covered(prime, remaining);
        if count == 0 {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_index, best_count)) => match count.cmp(&best_count) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => {
                    tie_break == TieBreak::Lexicographic
                        && pattern_key(prime) < pattern_key(&primes[best_index])
                }
            },
        };
        if better {
            best = Some((i, count));
        }
    }
    best.map(|(i, _)| i)
}

/// Sort key ordering inputs as `0 < 1 < -`
fn pattern_key(cube: &Cube) -> Vec<u8> {
    cube.inputs()
        .iter()
        .map(|input| match input {
            Some(false) => 0,
            Some(true) => 1,
            None => 2,
        })
        .collect()
}
