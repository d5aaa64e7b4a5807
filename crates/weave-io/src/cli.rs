use crate::{write_summary, RunSummary, Session};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use weave_core::{
    classify, ensure_connected, max_delta, propagate, propagate_trace, rank, NetworkConfig,
    Thresholds,
};

#[derive(Parser)]
#[command(name = "weave")]
#[command(about = "Weave - label propagation over small-world social networks")]
#[command(
    long_about = "Seed a random social graph with known spies and civilians, spread belief \
                  through neighbor averaging, and report who ends up flagged"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a network, run propagation, print the report
    Run {
        /// Number of people in the network
        #[arg(long, default_value = "30")]
        nodes: usize,

        /// Ring degree of the starting lattice
        #[arg(long, default_value = "4")]
        degree: usize,

        /// Edge rewiring probability
        #[arg(long, default_value = "0.15")]
        rewire: f64,

        /// Fraction of a node's own belief kept each round
        #[arg(long, default_value = "0.2")]
        self_weight: f64,

        /// Message passing rounds
        #[arg(long, default_value = "1")]
        rounds: usize,

        /// Beliefs above this are flagged
        #[arg(long, default_value = "0.8")]
        high: f64,

        /// Beliefs below this are cleared
        #[arg(long, default_value = "0.2")]
        low: f64,

        /// Ground-truth nodes pinned per class
        #[arg(long, default_value = "1")]
        seeds_per_class: usize,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Fail instead of warn when the network comes out disconnected
        #[arg(long)]
        require_connected: bool,

        /// Write a JSON run summary to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Reuse one network across several self-weights, reporting every round
    Sweep {
        /// Number of people in the network
        #[arg(long, default_value = "30")]
        nodes: usize,

        /// Ring degree of the starting lattice
        #[arg(long, default_value = "4")]
        degree: usize,

        /// Edge rewiring probability
        #[arg(long, default_value = "0.15")]
        rewire: f64,

        /// Self-weights to sweep, comma separated
        #[arg(long, value_delimiter = ',', default_value = "0.0,0.2,0.5,0.8")]
        self_weights: Vec<f64>,

        /// Rounds per run
        #[arg(long, default_value = "10")]
        rounds: usize,

        /// Beliefs above this are flagged
        #[arg(long, default_value = "0.8")]
        high: f64,

        /// Beliefs below this are cleared
        #[arg(long, default_value = "0.2")]
        low: f64,

        /// Ground-truth nodes pinned per class
        #[arg(long, default_value = "1")]
        seeds_per_class: usize,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[allow(clippy::too_many_arguments)]
pub fn run_case(
    nodes: usize,
    degree: usize,
    rewire: f64,
    self_weight: f64,
    rounds: usize,
    high: f64,
    low: f64,
    seeds_per_class: usize,
    seed: Option<u64>,
    require_connected: bool,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    println!("Weave Network Analysis");
    println!("======================");
    println!("Nodes: {}", nodes);
    println!("Ring degree: {}", degree);
    println!("Rewire probability: {:.3}", rewire);
    println!("Self-weight: {:.2}", self_weight);
    println!("Rounds: {}", rounds);
    println!("Thresholds: flag > {:.2}, clear < {:.2}", high, low);
    match seed {
        Some(s) => println!("Seed: {}", s),
        None => println!("Seed: fresh draw"),
    }

    let cfg = NetworkConfig {
        nodes,
        ring_degree: degree,
        rewire_prob: rewire,
        seeds_per_class,
        seed,
    };
    let thresholds = Thresholds::new(high, low)?;

    let mut session = Session::new();
    let net = session.network(&cfg)?;
    println!(
        "\nGenerated network: {} nodes, {} edges",
        net.graph.num_nodes(),
        net.graph.num_edges()
    );
    println!(
        "Pinned ground truth: {:?} spies, {:?} civilians",
        net.seeds.positive(),
        net.seeds.negative()
    );

    if require_connected {
        ensure_connected(&net.graph)?;
    } else if !net.graph.is_connected() {
        println!(
            "warning: network came out disconnected ({} components); isolated groups will not converge toward the seeds",
            net.graph.component_count()
        );
    }

    let beliefs = propagate(&net.graph, &net.beliefs, &net.seeds, self_weight, rounds)?;
    let report = classify(&beliefs, thresholds);

    println!("\nReport after {} rounds:", rounds);
    println!("  Flagged:      {}", report.positive);
    println!("  Cleared:      {}", report.negative);
    println!("  Undetermined: {}", report.undetermined);

    println!("\nMost suspicious:");
    for (v, b) in rank(&beliefs).into_iter().take(5) {
        let tag = if net.seeds.contains(v) { " (pinned)" } else { "" };
        println!("  node {:>3}: {:.3}{}", v, b, tag);
    }

    if let Some(path) = out {
        let summary = RunSummary::new(&cfg, self_weight, rounds, thresholds, beliefs, report);
        write_summary(&path, &summary)?;
        println!("\nSummary written to {:?}", path);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn run_sweep(
    nodes: usize,
    degree: usize,
    rewire: f64,
    self_weights: Vec<f64>,
    rounds: usize,
    high: f64,
    low: f64,
    seeds_per_class: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    println!("Weave Self-Weight Sweep");
    println!("=======================");
    println!("Nodes: {}", nodes);
    println!("Ring degree: {}", degree);
    println!("Rewire probability: {:.3}", rewire);
    println!("Rounds: {}", rounds);

    let cfg = NetworkConfig {
        nodes,
        ring_degree: degree,
        rewire_prob: rewire,
        seeds_per_class,
        seed,
    };
    let thresholds = Thresholds::new(high, low)?;

    // One generated snapshot serves every sweep entry; only the
    // propagation is re-run per self-weight.
    let mut session = Session::new();

    for w in self_weights {
        let net = session.network(&cfg)?;
        let trace = propagate_trace(&net.graph, &net.beliefs, &net.seeds, w, rounds)?;

        println!("\nself-weight {:.2}", w);
        println!(
            "{:>6} {:>9} {:>9} {:>13} {:>11}",
            "round", "flagged", "cleared", "undetermined", "max change"
        );
        for (round, mapping) in trace.iter().enumerate() {
            let report = classify(mapping, thresholds);
            let delta = if round > 0 {
                max_delta(&trace[round - 1], mapping)
            } else {
                0.0
            };
            println!(
                "{:>6} {:>9} {:>9} {:>13} {:>11.4}",
                round, report.positive, report.negative, report.undetermined, delta
            );
        }
    }

    Ok(())
}
