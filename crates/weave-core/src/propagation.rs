use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::seeds::SeedSet;
use crate::{Belief, F};

/// Run `rounds` synchronous message-passing rounds and return the final
/// belief mapping.
///
/// Update rule, applied to every non-seed node from the previous round's
/// snapshot:
///
/// `next[v] = w * curr[v] + (1 - w) * mean(curr[u] for u in N(v))`
///
/// Seed nodes keep their pinned value every round. A non-seed node with no
/// neighbors carries its value over unchanged. `rounds = 0` returns the
/// initial mapping as-is. Always recomputes from round 0; given identical
/// inputs the output is bit-for-bit identical.
pub fn propagate(
    graph: &Graph,
    initial: &[Belief],
    seeds: &SeedSet,
    self_weight: F,
    rounds: usize,
) -> Result<Vec<Belief>> {
    validate(graph, initial, seeds, self_weight)?;

    let n = graph.num_nodes();
    let mut curr = initial.to_vec();
    let mut next = vec![0.0; n];

    for _round in 0..rounds {
        for v in 0..n {
            next[v] = update_node(graph, &curr, seeds, self_weight, v);
        }
        std::mem::swap(&mut curr, &mut next);
    }

    Ok(curr)
}

/// Like [`propagate`], but returns every intermediate mapping: entry 0 is
/// the initial mapping, entry `r` the state after round `r`, length
/// `rounds + 1`. Hosts animating round by round should call this once and
/// index into it rather than re-running `propagate` per round.
pub fn propagate_trace(
    graph: &Graph,
    initial: &[Belief],
    seeds: &SeedSet,
    self_weight: F,
    rounds: usize,
) -> Result<Vec<Vec<Belief>>> {
    validate(graph, initial, seeds, self_weight)?;

    let n = graph.num_nodes();
    let mut trace = Vec::with_capacity(rounds + 1);
    trace.push(initial.to_vec());

    let mut curr = initial.to_vec();
    let mut next = vec![0.0; n];
    for _round in 0..rounds {
        for v in 0..n {
            next[v] = update_node(graph, &curr, seeds, self_weight, v);
        }
        std::mem::swap(&mut curr, &mut next);
        trace.push(curr.clone());
    }

    Ok(trace)
}

fn validate(graph: &Graph, initial: &[Belief], seeds: &SeedSet, self_weight: F) -> Result<()> {
    assert_eq!(
        initial.len(),
        graph.num_nodes(),
        "belief mapping does not match graph size"
    );
    if !(0.0..=1.0).contains(&self_weight) {
        return Err(Error::invalid(format!(
            "self weight {} outside [0, 1]",
            self_weight
        )));
    }
    seeds.validate(graph.num_nodes())
}

/// Single-node update against the previous round's snapshot
fn update_node(graph: &Graph, curr: &[Belief], seeds: &SeedSet, self_weight: F, v: usize) -> Belief {
    if seeds.contains(v) {
        return curr[v];
    }

    let neighbors = graph.neighbors(v);
    if neighbors.is_empty() {
        return curr[v]; // isolated node, nothing to average
    }

    let sum: F = neighbors.iter().map(|&u| curr[u]).sum();
    let avg = sum / neighbors.len() as F;

    (self_weight * curr[v] + (1.0 - self_weight) * avg).clamp(0.0, 1.0)
}

/// Largest per-node change between two consecutive mappings (sup norm).
/// The natural convergence measure for the round loop.
pub fn max_delta(prev: &[Belief], next: &[Belief]) -> F {
    prev.iter()
        .zip(next.iter())
        .map(|(old, new)| (old - new).abs())
        .fold(0.0, F::max)
}

/// Variance of the non-seed beliefs. Smoothing pulls free nodes toward a
/// consensus, so this trends down as rounds accumulate.
pub fn spread(values: &[Belief], seeds: &SeedSet) -> F {
    let free: Vec<F> = values
        .iter()
        .enumerate()
        .filter(|(v, _)| !seeds.contains(*v))
        .map(|(_, &b)| b)
        .collect();

    if free.len() < 2 {
        return 0.0;
    }

    let mean = free.iter().sum::<F>() / free.len() as F;
    free.iter().map(|b| (b - mean).powi(2)).sum::<F>() / free.len() as F
}
