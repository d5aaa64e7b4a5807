use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::seeds::SeedSet;
use crate::{Belief, F};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Configuration for network generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub nodes: usize,        // n, small (tens of nodes)
    pub ring_degree: usize,  // k nearest neighbors in the starting lattice
    pub rewire_prob: F,      // per-edge rewiring probability
    pub seeds_per_class: usize,
    pub seed: Option<u64>,   // None = fresh draw every call
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            nodes: 30,
            ring_degree: 4,
            rewire_prob: 0.15,
            seeds_per_class: 1,
            seed: None,
        }
    }
}

/// Watts-Strogatz small-world graph
///
/// Starts from a ring lattice of `n` nodes joined to their `k` nearest
/// neighbors (`k/2` per side), then rewires each lattice edge `(u, u+j)`
/// with probability `p` to a uniformly random target that is neither `u`
/// nor already adjacent to `u`. A saturated source keeps its edge, so the
/// edge count is always `n * k/2`.
///
/// With `seed` fixed the construction is fully reproducible; edges are
/// emitted in sorted order so neighbor iteration is deterministic too.
pub fn watts_strogatz(n: usize, k: usize, p: F, seed: Option<u64>) -> Result<Graph> {
    if k < 2 {
        return Err(Error::invalid(format!("ring degree {} too small, need k >= 2", k)));
    }
    if n < k + 1 {
        return Err(Error::invalid(format!(
            "{} nodes too few for ring degree {}, need n >= k + 1",
            n, k
        )));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid(format!("rewire probability {} outside [0, 1]", p)));
    }

    let mut rng = match seed {
        Some(s) => ChaCha20Rng::seed_from_u64(s),
        None => ChaCha20Rng::from_entropy(),
    };

    // Ring lattice
    let mut adj: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
    for j in 1..=k / 2 {
        for u in 0..n {
            let v = (u + j) % n;
            adj[u].insert(v);
            adj[v].insert(u);
        }
    }

    // Rewire pass, one sweep per lattice ring
    for j in 1..=k / 2 {
        for u in 0..n {
            let v = (u + j) % n;
            if !rng.gen_bool(p) {
                continue;
            }
            if adj[u].len() >= n - 1 {
                continue; // saturated, keep the lattice edge
            }
            let mut w = rng.gen_range(0..n);
            while w == u || adj[u].contains(&w) {
                w = rng.gen_range(0..n);
            }
            adj[u].remove(&v);
            adj[v].remove(&u);
            adj[u].insert(w);
            adj[w].insert(u);
        }
    }

    let mut edges = Vec::with_capacity(n * (k / 2));
    for (u, targets) in adj.iter().enumerate() {
        for &v in targets {
            if v > u {
                edges.push(Edge::new(u, v));
            }
        }
    }

    Ok(Graph::new(n, edges))
}

/// Build a seeded network: graph topology, initial belief mapping, and the
/// pinned ground-truth nodes, created together as one immutable snapshot.
///
/// Low-index nodes are pinned positive (1.0), high-index nodes negative
/// (0.0), everyone else starts undetermined at 0.5.
pub fn generate(cfg: &NetworkConfig) -> Result<(Graph, Vec<Belief>, SeedSet)> {
    let graph = watts_strogatz(cfg.nodes, cfg.ring_degree, cfg.rewire_prob, cfg.seed)?;
    let seeds = SeedSet::endpoints(cfg.nodes, cfg.seeds_per_class)?;

    let mut beliefs = vec![0.5; cfg.nodes];
    seeds.apply(&mut beliefs);

    Ok((graph, beliefs, seeds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducible_with_seed() {
        let a = watts_strogatz(20, 4, 0.5, Some(42)).unwrap();
        let b = watts_strogatz(20, 4, 0.5, Some(42)).unwrap();
        assert_eq!(a, b);

        let c = watts_strogatz(20, 4, 0.5, Some(43)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_edge_count_invariant() {
        // Rewiring moves edges, never adds or removes them
        for p in [0.0, 0.2, 1.0] {
            let g = watts_strogatz(24, 4, p, Some(7)).unwrap();
            assert_eq!(g.num_edges(), 48);
        }
    }

    #[test]
    fn test_no_rewiring_is_pure_lattice() {
        let g = watts_strogatz(12, 4, 0.0, Some(1)).unwrap();
        let lattice = Graph::ring_lattice(12, 4);
        for u in 0..12 {
            let mut a = g.neighbors(u).to_vec();
            let mut b = lattice.neighbors(u).to_vec();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "node {} differs from the lattice", u);
        }
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(watts_strogatz(4, 4, 0.2, None).is_err()); // n < k + 1
        assert!(watts_strogatz(20, 1, 0.2, None).is_err()); // k too small
        assert!(watts_strogatz(20, 4, 1.5, None).is_err()); // p out of range
        assert!(watts_strogatz(20, 4, -0.1, None).is_err());
    }

    #[test]
    fn test_generate_snapshot() {
        let cfg = NetworkConfig { seed: Some(42), ..Default::default() };
        let (graph, beliefs, seeds) = generate(&cfg).unwrap();

        assert_eq!(graph.num_nodes(), 30);
        assert_eq!(beliefs.len(), 30);
        assert_eq!(beliefs[0], 1.0);
        assert_eq!(beliefs[29], 0.0);
        assert!(beliefs[1..29].iter().all(|&b| b == 0.5));
        assert!(seeds.validate(30).is_ok());
    }

    #[test]
    fn test_generate_rejects_overfull_seeds() {
        let cfg = NetworkConfig {
            nodes: 6,
            seeds_per_class: 4,
            seed: Some(1),
            ..Default::default()
        };
        assert!(generate(&cfg).is_err());
    }
}
