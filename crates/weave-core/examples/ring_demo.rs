use weave_core::{classify, max_delta, propagate_trace, Graph, SeedSet, Thresholds};

fn main() -> anyhow::Result<()> {
    println!("Weave Demo: Belief Propagation on a Ring");

    // Five informants in a ring, each talking to their two neighbors.
    // Node 0 is a known spy, node 4 a known civilian.
    let graph = Graph::ring_lattice(5, 2);
    println!("Built ring: {} nodes, {} edges", graph.num_nodes(), graph.num_edges());

    let mut seeds = SeedSet::new();
    seeds.pin_positive(0);
    seeds.pin_negative(4);

    let mut beliefs = vec![0.5; graph.num_nodes()];
    seeds.apply(&mut beliefs);
    println!("Pinned: node 0 = 1.0 (spy), node 4 = 0.0 (civilian)");

    let self_weight = 0.2;
    let rounds = 8;
    let trace = propagate_trace(&graph, &beliefs, &seeds, self_weight, rounds)?;

    println!("\nRound-by-round beliefs (self-weight {:.1}):", self_weight);
    for (round, mapping) in trace.iter().enumerate() {
        let delta = if round > 0 {
            max_delta(&trace[round - 1], mapping)
        } else {
            0.0
        };
        let cells: Vec<String> = mapping.iter().map(|b| format!("{:.3}", b)).collect();
        println!("  round {:>2}: [{}]  max change {:.4}", round, cells.join(", "), delta);
    }

    let report = classify(trace.last().unwrap(), Thresholds::default());
    println!("\nAfter {} rounds:", rounds);
    println!("  Flagged:      {}", report.positive);
    println!("  Cleared:      {}", report.negative);
    println!("  Undetermined: {}", report.undetermined);

    Ok(())
}
