//! Random graphs for experiments and tests.

use crate::graph::DyUGraph;
use fxhash::FxHashSet;
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Returns a uniform random graph with `n` nodes and `m` edges (the G(n, m) model).
/// `m` is clamped to the number of possible edges.
pub fn random_gnm<R: Rng>(rng: &mut R, n: usize, m: usize) -> DyUGraph {
    let max_edges = n * n.saturating_sub(1) / 2;
    let m = m.min(max_edges);
    let mut graph = DyUGraph::new(n);
    // Dense graphs take a prefix of the shuffled edge list, sparse ones use rejection sampling.
    if m * 2 > max_edges {
        let mut edges: Vec<(usize, usize)> = (0..n)
            .flat_map(|src| ((src + 1)..n).map(move |trg| (src, trg)))
            .collect();
        edges.shuffle(rng);
        for (src, trg) in edges.into_iter().take(m) {
            graph.add_edge(src, trg).expect("`src` and `trg` are distinct nodes");
        }
        return graph
    }
    let mut added = 0;
    while added < m {
        let src = rng.gen_range(0..n);
        let trg = rng.gen_range(0..n);
        if src != trg && graph.add_edge(src, trg).expect("`src` and `trg` are distinct nodes") {
            added += 1;
        }
    }
    graph
}

/// Returns a random graph on `n` nodes that has a vertex cover of size at most `k`, together
/// with that cover.
///
/// The cover consists of `min(k, n)` random nodes. Every possible edge with at least one endpoint
/// in the cover is added with probability `edge_prob`. If `guaranteed` is set, every node outside
/// the cover is additionally connected to a random cover node, so no node is left isolated.
pub fn planted_cover<R: Rng>(rng: &mut R, n: usize, k: usize, edge_prob: f64, guaranteed: bool)
    -> (DyUGraph, FxHashSet<usize>) {
    let edge_prob = edge_prob.clamp(0.0, 1.0);
    let cover_list: Vec<usize> = index::sample(rng, n, k.min(n)).into_vec();
    let cover: FxHashSet<usize> = cover_list.iter().copied().collect();
    let mut graph = DyUGraph::new(n);
    for src in 0..n {
        for trg in (src + 1)..n {
            if (cover.contains(&src) || cover.contains(&trg)) && rng.gen_bool(edge_prob) {
                graph.add_edge(src, trg).expect("`src` and `trg` are distinct nodes");
            }
        }
    }
    if guaranteed {
        for node in (0..n).filter(|node| !cover.contains(node)) {
            if let Some(center) = cover_list.choose(rng) {
                graph.add_edge(node, *center).expect("`node` is not in the cover");
            }
        }
    }
    (graph, cover)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn gnm_test() {
        let mut rng = Pcg64::seed_from_u64(3);
        for (n, m) in [(0, 0), (1, 5), (10, 0), (10, 20), (10, 40), (10, 45), (10, 100), (50, 200)] {
            let graph = random_gnm(&mut rng, n, m);
            assert_eq!(graph.num_nodes(), n);
            assert_eq!(graph.num_edges(), m.min(n * n.saturating_sub(1) / 2));
            assert!(graph.check_consistency().is_ok());
        }
    }

    #[test]
    fn planted_cover_test() {
        let mut rng = Pcg64::seed_from_u64(7);
        for (n, k, prob) in [(20, 5, 0.7), (30, 8, 0.5), (10, 1, 0.1), (5, 5, 0.1), (3, 10, 1.0)] {
            let (graph, cover) = planted_cover(&mut rng, n, k, prob, false);
            assert_eq!(graph.num_nodes(), n);
            assert_eq!(cover.len(), k.min(n));
            assert!(graph.is_vertex_cover(&cover));
        }
    }

    #[test]
    fn guaranteed_test() {
        let mut rng = Pcg64::seed_from_u64(11);
        for (n, k) in [(20, 5), (30, 8), (40, 10)] {
            let (graph, cover) = planted_cover(&mut rng, n, k, 0.5, true);
            assert!(graph.is_vertex_cover(&cover));
            for node in graph.nodes().filter(|node| !cover.contains(node)) {
                assert!(graph.degree(node).unwrap() >= 1);
            }
        }
    }

    #[test]
    fn edge_probability_test() {
        let mut rng = Pcg64::seed_from_u64(13);
        let (graph, _) = planted_cover(&mut rng, 30, 5, 0.0, false);
        assert_eq!(graph.num_edges(), 0);
        let (graph, cover) = planted_cover(&mut rng, 30, 5, 1.0, false);
        // All pairs with an endpoint in the cover: 5 * 25 + 10.
        assert_eq!(graph.num_edges(), 135);
        assert!(graph.is_vertex_cover(&cover));
        let (graph, _) = planted_cover(&mut rng, 10, 3, 2.5, false);
        assert_eq!(graph.num_edges(), 3 * 7 + 3);
    }
}
