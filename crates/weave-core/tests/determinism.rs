use weave_core::{classify, generate, propagate, watts_strogatz, NetworkConfig, Thresholds};

#[test]
fn propagation_is_bit_for_bit_repeatable() {
    let cfg = NetworkConfig { nodes: 40, rewire_prob: 0.2, seed: Some(42), ..Default::default() };
    let (graph, initial, seeds) = generate(&cfg).unwrap();

    let a = propagate(&graph, &initial, &seeds, 0.2, 25).unwrap();
    let b = propagate(&graph, &initial, &seeds, 0.2, 25).unwrap();

    assert_eq!(a.len(), b.len());
    for (v, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert_eq!(
            x.to_bits(),
            y.to_bits(),
            "node {} diverged between identical runs: {} vs {}",
            v, x, y
        );
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let cfg = NetworkConfig { nodes: 30, rewire_prob: 0.3, seed: Some(7), ..Default::default() };

    let (g1, v1, s1) = generate(&cfg).unwrap();
    let (g2, v2, s2) = generate(&cfg).unwrap();

    assert_eq!(g1, g2);
    assert_eq!(v1, v2);
    assert_eq!(s1, s2);
}

#[test]
fn different_seeds_give_different_topologies() {
    let a = watts_strogatz(30, 4, 0.3, Some(1)).unwrap();
    let b = watts_strogatz(30, 4, 0.3, Some(2)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn full_pipeline_is_repeatable() {
    let cfg = NetworkConfig { seed: Some(42), ..Default::default() };
    let thresholds = Thresholds::default();

    let run = || {
        let (graph, initial, seeds) = generate(&cfg).unwrap();
        let beliefs = propagate(&graph, &initial, &seeds, 0.2, 10).unwrap();
        classify(&beliefs, thresholds)
    };

    let r1 = run();
    let r2 = run();

    assert_eq!(r1.positive, r2.positive);
    assert_eq!(r1.negative, r2.negative);
    assert_eq!(r1.undetermined, r2.undetermined);
    assert_eq!(r1.categories, r2.categories);
}

#[test]
fn propagation_does_not_mutate_inputs() {
    let cfg = NetworkConfig { seed: Some(9), ..Default::default() };
    let (graph, initial, seeds) = generate(&cfg).unwrap();
    let snapshot = initial.clone();

    let _ = propagate(&graph, &initial, &seeds, 0.2, 8).unwrap();

    assert_eq!(initial, snapshot);
}
