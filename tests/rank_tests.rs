use minimax_rank::{
    iterate_pagerank, sample_pagerank, transition_model, LinkGraph, RankConfig, RankError,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn two_pages() -> LinkGraph {
    LinkGraph::from_links([("A", vec!["B"]), ("B", vec!["A"])])
}

fn corpus() -> LinkGraph {
    LinkGraph::from_links([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["1.html", "3.html"]),
        ("3.html", vec!["2.html", "4.html"]),
        ("4.html", vec!["2.html"]),
    ])
}

fn total(ranks: &minimax_rank::Ranks) -> f64 {
    ranks.values().sum()
}

#[test]
fn test_graph_drops_self_and_unknown_links() {
    let graph = LinkGraph::from_links([
        ("a", vec!["a", "b", "elsewhere"]),
        ("b", vec![]),
    ]);
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.pages().collect::<Vec<_>>(), vec!["a", "b"]);
    let a: Vec<&str> = graph.links("a").unwrap().iter().map(String::as_str).collect();
    assert_eq!(a, vec!["b"]);
    assert!(graph.links("b").unwrap().is_empty());
    assert!(graph.links("elsewhere").is_none());
}

#[test]
fn test_transition_model_with_links() {
    let graph = corpus();
    let model = transition_model(&graph, "1.html", 0.85).unwrap();
    assert!((model["1.html"] - 0.0375).abs() < 1e-12);
    assert!((model["2.html"] - 0.8875).abs() < 1e-12);
    assert!((model["3.html"] - 0.0375).abs() < 1e-12);
    assert!((model["4.html"] - 0.0375).abs() < 1e-12);
    assert!((total(&model) - 1.0).abs() < 1e-12);
}

#[test]
fn test_transition_model_without_links_is_uniform() {
    let graph = LinkGraph::from_links([("a", vec!["b"]), ("b", vec![]), ("c", vec!["a"])]);
    let model = transition_model(&graph, "b", 0.85).unwrap();
    for p in model.values() {
        assert!((p - 1.0 / 3.0).abs() < 1e-12);
    }
    assert!(transition_model(&graph, "missing", 0.85).is_none());
}

#[test]
fn test_sampling_two_pages() {
    let mut rng = SmallRng::seed_from_u64(7);
    let ranks = sample_pagerank(&two_pages(), &RankConfig::default(), &mut rng).unwrap();
    assert!((ranks["A"] - 0.5).abs() <= 0.05, "A = {}", ranks["A"]);
    assert!((ranks["B"] - 0.5).abs() <= 0.05, "B = {}", ranks["B"]);
    assert!((total(&ranks) - 1.0).abs() < 1e-9);
}

#[test]
fn test_iteration_two_pages() {
    let ranks = iterate_pagerank(&two_pages(), &RankConfig::default()).unwrap();
    assert!((ranks["A"] - 0.5).abs() <= 0.001);
    assert!((ranks["B"] - 0.5).abs() <= 0.001);
}

#[test]
fn test_estimators_agree_on_corpus() {
    let graph = corpus();
    let config = RankConfig {
        samples: 50_000,
        ..RankConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(2024);
    let sampled = sample_pagerank(&graph, &config, &mut rng).unwrap();
    let iterated = iterate_pagerank(&graph, &config).unwrap();
    assert!((total(&sampled) - 1.0).abs() < 1e-9);
    assert!((total(&iterated) - 1.0).abs() < 1e-9);
    for page in graph.pages() {
        assert!(
            (sampled[page] - iterated[page]).abs() < 0.03,
            "{}: sampled {} iterated {}",
            page,
            sampled[page],
            iterated[page]
        );
    }
    // 2.html is linked from every other page.
    assert!(iterated["2.html"] > iterated["1.html"]);
    assert!(iterated["2.html"] > iterated["3.html"]);
    assert!(iterated["2.html"] > iterated["4.html"]);
}

#[test]
fn test_dangling_page_links_everywhere() {
    // "b" has no out-links, so it spreads its rank over a, b and c alike.
    let graph = LinkGraph::from_links([("a", vec!["b"]), ("b", vec![]), ("c", vec!["b"])]);
    let ranks = iterate_pagerank(&graph, &RankConfig::default()).unwrap();
    assert!((total(&ranks) - 1.0).abs() < 1e-9);
    assert!((ranks["a"] - ranks["c"]).abs() < 1e-9);
    assert!(ranks["b"] > ranks["a"]);
}

#[test]
fn test_empty_graph_gives_empty_ranks() {
    let graph = LinkGraph::default();
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(sample_pagerank(&graph, &RankConfig::default(), &mut rng)
        .unwrap()
        .is_empty());
    assert!(iterate_pagerank(&graph, &RankConfig::default())
        .unwrap()
        .is_empty());
}

#[test]
fn test_single_sample_counts_start_page() {
    let config = RankConfig {
        samples: 1,
        ..RankConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(3);
    let ranks = sample_pagerank(&two_pages(), &config, &mut rng).unwrap();
    let mut values: Vec<f64> = ranks.values().copied().collect();
    values.sort_by(f64::total_cmp);
    assert_eq!(values, vec![0.0, 1.0]);
}

#[test]
fn test_invalid_config_rejected() {
    let graph = two_pages();
    let mut rng = SmallRng::seed_from_u64(1);

    let bad_damping = RankConfig {
        damping: 1.0,
        ..RankConfig::default()
    };
    assert_eq!(
        iterate_pagerank(&graph, &bad_damping).unwrap_err(),
        RankError::InvalidDamping(1.0)
    );

    let no_samples = RankConfig {
        samples: 0,
        ..RankConfig::default()
    };
    assert_eq!(
        sample_pagerank(&graph, &no_samples, &mut rng).unwrap_err(),
        RankError::InvalidSamples
    );

    let bad_threshold = RankConfig {
        threshold: 0.0,
        ..RankConfig::default()
    };
    assert_eq!(
        iterate_pagerank(&graph, &bad_threshold).unwrap_err(),
        RankError::InvalidThreshold(0.0)
    );
}

#[test]
fn test_round_limit_reports_non_convergence() {
    let config = RankConfig {
        threshold: 1e-15,
        max_iterations: 1,
        ..RankConfig::default()
    };
    assert_eq!(
        iterate_pagerank(&corpus(), &config).unwrap_err(),
        RankError::DidNotConverge { iterations: 1 }
    );
}
