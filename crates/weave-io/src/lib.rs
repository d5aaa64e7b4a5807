pub mod cli;

use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use weave_core::{generate, Belief, Graph, NetworkConfig, Report, Result, SeedSet, Thresholds, F};

/// One generated network snapshot: topology, initial beliefs, pinned nodes.
/// Immutable once built; propagation only ever reads it.
#[derive(Clone, Debug)]
pub struct Network {
    pub graph: Graph,
    pub beliefs: Vec<Belief>,
    pub seeds: SeedSet,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct NetworkKey {
    nodes: usize,
    ring_degree: usize,
    rewire_bits: u64, // f64 probability keyed by bit pattern
    seeds_per_class: usize,
    seed: Option<u64>,
}

impl NetworkKey {
    fn from_config(cfg: &NetworkConfig) -> Self {
        Self {
            nodes: cfg.nodes,
            ring_degree: cfg.ring_degree,
            rewire_bits: cfg.rewire_prob.to_bits(),
            seeds_per_class: cfg.seeds_per_class,
            seed: cfg.seed,
        }
    }
}

/// Host-side cache of generated networks, keyed by the full generation
/// configuration. Re-running propagation with new round counts or
/// self-weights must reuse the cached snapshot, not regenerate the graph;
/// `reset` is the explicit regenerate request.
#[derive(Default)]
pub struct Session {
    cache: HashMap<NetworkKey, Network>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn network(&mut self, cfg: &NetworkConfig) -> Result<&Network> {
        let key = NetworkKey::from_config(cfg);
        if !self.cache.contains_key(&key) {
            let (graph, beliefs, seeds) = generate(cfg)?;
            self.cache.insert(key.clone(), Network { graph, beliefs, seeds });
        }
        Ok(&self.cache[&key])
    }

    pub fn reset(&mut self) {
        self.cache.clear();
    }

    pub fn cached_networks(&self) -> usize {
        self.cache.len()
    }
}

/// Serializable record of one complete run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub config: NetworkConfig,
    pub self_weight: F,
    pub rounds: usize,
    pub thresholds: Thresholds,
    pub flagged: usize,
    pub cleared: usize,
    pub undetermined: usize,
    pub beliefs: Vec<Belief>,
    pub categories: Vec<weave_core::Category>,
}

impl RunSummary {
    pub fn new(
        config: &NetworkConfig,
        self_weight: F,
        rounds: usize,
        thresholds: Thresholds,
        beliefs: Vec<Belief>,
        report: Report,
    ) -> Self {
        Self {
            config: config.clone(),
            self_weight,
            rounds,
            thresholds,
            flagged: report.positive,
            cleared: report.negative,
            undetermined: report.undetermined,
            beliefs,
            categories: report.categories,
        }
    }
}

pub fn write_summary(path: &Path, summary: &RunSummary) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    write!(file, "{}", serde_json::to_string_pretty(summary)?)?;
    Ok(())
}
