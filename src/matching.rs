//! Matchings and the greedy maximal matching.
//!
//! A maximal matching `M` is cheap to compute and gives a lower bound for the vertex cover
//! problem: every edge of `M` needs its own cover node. So `|M| > k` already proves that no
//! vertex cover of size at most `k` exists.

use crate::graph::DyUGraph;
use fxhash::{FxHashMap, FxHashSet};

/// A set of node disjoint edges, stored as a map from each matched node to its partner.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Matching {
    mate: FxHashMap<usize, usize>,
}

impl Matching {

    /// Matches `src` with `trg`.
    ///
    /// Both nodes have to be unmatched.
    pub fn insert(&mut self, src: usize, trg: usize) {
        debug_assert!(src != trg);
        debug_assert!(!self.is_matched(src) && !self.is_matched(trg));
        self.mate.insert(src, trg);
        self.mate.insert(trg, src);
    }

    /// Returns the partner of `node`, or `None` if `node` is unmatched.
    pub fn mate(&self, node: usize) -> Option<usize> {
        self.mate.get(&node).copied()
    }

    pub fn is_matched(&self, node: usize) -> bool {
        self.mate.contains_key(&node)
    }

    /// Returns the number of edges in the matching.
    pub fn len(&self) -> usize {
        self.mate.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.mate.is_empty()
    }

    /// Returns an iterator over the matched edges `(src, trg)` with `src < trg`.
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.mate
            .iter()
            .filter(|(src, trg)| src < trg)
            .map(|(src, trg)| (*src, *trg))
    }

    /// Returns the set of all matched nodes.
    pub fn matched_nodes(&self) -> FxHashSet<usize> {
        self.mate.keys().copied().collect()
    }
}

/// Computes a maximal matching greedily: the nodes are scanned in ascending order and each
/// unmatched node is matched to its smallest unmatched neighbor, if there is one.
///
/// The result is at least half as large as a maximum matching.
pub fn greedy_maximal_matching(graph: &DyUGraph) -> Matching {
    let mut matching = Matching::default();
    for node in graph.nodes() {
        if matching.is_matched(node) {
            continue
        }
        let partner = graph.neighbors(node)
            .expect("`node` exists")
            .iter()
            .filter(|neigh| !matching.is_matched(**neigh))
            .min()
            .copied();
        if let Some(partner) = partner {
            matching.insert(node, partner);
        }
    }
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_graph_test() {
        let graph = DyUGraph::new(0);
        assert!(greedy_maximal_matching(&graph).is_empty());
        let graph = DyUGraph::new(4);
        assert_eq!(greedy_maximal_matching(&graph).len(), 0);
    }

    #[test]
    fn path_test() {
        let graph = DyUGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let matching = greedy_maximal_matching(&graph);
        assert_eq!(matching.len(), 2);
        assert_eq!(matching.edges().collect::<FxHashSet<_>>(), vec![(0, 1), (2, 3)].into_iter().collect());
        assert_eq!(matching.mate(3), Some(2));
    }

    #[test]
    fn complete_graph_test() {
        let edges: Vec<(usize, usize)> = (0..6)
            .flat_map(|src| ((src + 1)..6).map(move |trg| (src, trg)))
            .collect();
        let graph = DyUGraph::from_edges(6, &edges).unwrap();
        assert_eq!(greedy_maximal_matching(&graph).len(), 3);
    }

    #[test]
    fn maximality_test() {
        let gr = Cursor::new("p td 10 14\n1 2\n1 3\n2 4\n2 5\n3 4\n3 5\n\
                             4 6\n4 7\n5 6\n5 7\n6 8\n6 9\n7 9\n7 10\n");
        let graph = DyUGraph::read_gr(gr).unwrap();
        let matching = greedy_maximal_matching(&graph);
        let matched = matching.matched_nodes();
        assert_eq!(matched.len(), 2 * matching.len());
        for (src, trg) in matching.edges() {
            assert!(graph.edge_exists((src, trg)));
        }
        // No edge can be added to a maximal matching.
        assert!(graph.edges().all(|(src, trg)| matched.contains(&src) || matched.contains(&trg)));
    }

    #[test]
    fn skips_deleted_nodes_test() {
        let mut graph = DyUGraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        graph.delete_node(0);
        let matching = greedy_maximal_matching(&graph);
        assert_eq!(matching.edges().collect::<Vec<_>>(), vec![(1, 2)]);
        assert!(!matching.is_matched(0));
    }
}
