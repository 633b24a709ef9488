//! PageRank over a directed link graph, estimated two ways: by sampling a
//! damped random walk and by iterating the rank equation to a fixed point.
//!
//! The graph is supplied by the caller as `(page, links)` pairs; this module
//! never touches the file system. Ranks are keyed by page name in a
//! `BTreeMap` so output order is stable.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::common::RankError;
use crate::config::RankConfig;

/// Estimated rank of every page.
pub type Ranks = BTreeMap<String, f64>;

/// Directed link graph between named pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    links: BTreeMap<String, BTreeSet<String>>,
}

impl LinkGraph {
    /// Build a graph from `(page, links)` pairs. Self-links and links to
    /// pages that are not themselves keys are dropped; repeated keys merge.
    pub fn from_links<I, L, P, Q>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        L: IntoIterator<Item = Q>,
        P: Into<String>,
        Q: Into<String>,
    {
        let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, targets) in pages {
            raw.entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::<String>::into));
        }
        let keys: BTreeSet<String> = raw.keys().cloned().collect();
        let links: BTreeMap<String, BTreeSet<String>> = raw
            .into_iter()
            .map(|(page, targets)| {
                let kept: BTreeSet<String> = targets
                    .into_iter()
                    .filter(|t| *t != page && keys.contains(t))
                    .collect();
                (page, kept)
            })
            .collect();
        LinkGraph { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Page names in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    /// Pages linked from `page`, or `None` if it is not in the graph.
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.links.get(page)
    }

    /// Index form: page names and, for each, the indices it links to.
    fn indexed(&self) -> (Vec<&str>, Vec<Vec<usize>>) {
        let names: Vec<&str> = self.pages().collect();
        let out: Vec<Vec<usize>> = self
            .links
            .values()
            .map(|targets| {
                targets
                    .iter()
                    .filter_map(|t| names.binary_search(&t.as_str()).ok())
                    .collect()
            })
            .collect();
        (names, out)
    }
}

/// Probability of each page being visited next after `page`.
///
/// With out-links, every page gets `(1 - d) / N` and each linked page a
/// further `d / links`. A page without out-links jumps uniformly.
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> Option<Ranks> {
    let (names, out) = graph.indexed();
    let idx = names.binary_search(&page).ok()?;
    let row = transition_row(names.len(), &out[idx], damping);
    Some(named(&names, row))
}

fn transition_row(n: usize, targets: &[usize], damping: f64) -> Vec<f64> {
    if targets.is_empty() {
        return vec![1.0 / n as f64; n];
    }
    let mut row = vec![(1.0 - damping) / n as f64; n];
    let share = damping / targets.len() as f64;
    for &t in targets {
        row[t] += share;
    }
    row
}

/// Draw an index from an unnormalised weight row.
fn sample_row<R: Rng + ?Sized>(row: &[f64], rng: &mut R) -> usize {
    let total: f64 = row.iter().sum();
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in row.iter().enumerate() {
        cumulative += w;
        if threshold < cumulative {
            return i;
        }
    }
    row.len() - 1
}

fn named(names: &[&str], values: Vec<f64>) -> Ranks {
    names
        .iter()
        .map(|name| String::from(*name))
        .zip(values)
        .collect()
}

/// Estimate PageRank by a random walk of `config.samples` pages.
///
/// The walk starts at a uniformly random page, which counts as the first
/// sample, and each following page is drawn from [`transition_model`].
/// Ranks are visit counts divided by the sample count.
pub fn sample_pagerank<R: Rng + ?Sized>(
    graph: &LinkGraph,
    config: &RankConfig,
    rng: &mut R,
) -> Result<Ranks, RankError> {
    config.validate()?;
    if graph.is_empty() {
        return Ok(Ranks::new());
    }
    let (names, out) = graph.indexed();
    let n = names.len();

    let mut visits = vec![0usize; n];
    let mut current = rng.random_range(0..n);
    visits[current] += 1;
    for _ in 1..config.samples {
        let row = transition_row(n, &out[current], config.damping);
        current = sample_row(&row, rng);
        visits[current] += 1;
    }

    let total = config.samples as f64;
    debug!("sampled {} pages over {} steps", n, config.samples);
    Ok(named(
        &names,
        visits.into_iter().map(|v| v as f64 / total).collect(),
    ))
}

/// Compute PageRank by repeated relaxation of
/// `PR(p) = (1 - d) / N + d * sum(PR(i) / out(i))` over the pages `i`
/// linking to `p`, starting from `1 / N`.
///
/// A page with no out-links counts as linking to every page, itself
/// included. Each round reads only the previous round's ranks, and the
/// loop stops once no page moved by more than `config.threshold`.
pub fn iterate_pagerank(graph: &LinkGraph, config: &RankConfig) -> Result<Ranks, RankError> {
    config.validate()?;
    if graph.is_empty() {
        return Ok(Ranks::new());
    }
    let (names, out) = graph.indexed();
    let n = names.len();
    let base = (1.0 - config.damping) / n as f64;

    let mut inbound: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, targets) in out.iter().enumerate() {
        for &t in targets {
            inbound[t].push(i);
        }
    }
    let dangling: Vec<usize> = (0..n).filter(|&i| out[i].is_empty()).collect();

    let mut ranks = vec![1.0 / n as f64; n];
    for round in 1..=config.max_iterations {
        let spread: f64 = dangling.iter().map(|&i| ranks[i]).sum::<f64>() / n as f64;
        let next: Vec<f64> = (0..n)
            .map(|p| {
                let linked: f64 = inbound[p]
                    .iter()
                    .map(|&i| ranks[i] / out[i].len() as f64)
                    .sum();
                base + config.damping * (linked + spread)
            })
            .collect();
        let converged = next
            .iter()
            .zip(&ranks)
            .all(|(new, old)| libm::fabs(new - old) <= config.threshold);
        ranks = next;
        if converged {
            debug!("pagerank converged after {} rounds", round);
            return Ok(named(&names, ranks));
        }
    }

    warn!(
        "pagerank still moving after {} rounds",
        config.max_iterations
    );
    Err(RankError::DidNotConverge {
        iterations: config.max_iterations,
    })
}
