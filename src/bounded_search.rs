//! Implementation of a bounded search tree algorithm.
//!
//! Every edge needs one of its endpoints in the cover. So we pick an edge `{u, v}` and branch on
//! `u` and on `v` being in the cover, each time with a budget of `k - 1`. The search tree has
//! depth at most `k` and thus at most `2^k` leaves.

use crate::graph::DyUGraph;
use fxhash::FxHashSet;
use log::debug;

/// State of one bounded search.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BoundedSearch {
    /// Number of search tree nodes visited so far.
    pub visited: usize,
}

impl BoundedSearch {

    /// Returns a vertex cover of `graph` with at most `k` nodes, if there is one.
    ///
    /// Each branch works on its own copy of the graph, so `graph` is left untouched.
    pub fn find_cover(&mut self, graph: &DyUGraph, k: usize) -> Option<FxHashSet<usize>> {
        self.visited += 1;
        let Some((src, trg)) = graph.first_edge() else {
            return Some(FxHashSet::default())
        };
        if k == 0 {
            return None
        }
        for node in [src, trg] {
            let mut branch = graph.clone();
            branch.delete_node(node);
            if let Some(mut cover) = self.find_cover(&branch, k - 1) {
                cover.insert(node);
                return Some(cover)
            }
        }
        None
    }

}

/// Returns a vertex cover of `graph` with at most `k` nodes, if there is one.
pub fn find_cover(graph: &DyUGraph, k: usize) -> Option<FxHashSet<usize>> {
    let mut search = BoundedSearch::default();
    let cover = search.find_cover(graph, k);
    debug!("Bounded search: visited {} search tree nodes for k = {}, found: {}",
           search.visited, k, cover.is_some());
    cover
}

/// Decides if `graph` has a vertex cover of size at most `k`.
pub fn has_cover(graph: &DyUGraph, k: usize) -> bool {
    find_cover(graph, k).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn bounded_search_test() {
        let gr = Cursor::new("p td 16 33\n1 2\n1 3\n1 4\n1 5\n1 6\n2 3\n2 4\n2 5\n2 10\n\
                              3 4\n3 5\n3 9\n4 5\n4 8\n5 7\n6 11\n6 12\n7 13\n8 14\n\
                              9 15\n10 16\n11 12\n11 13\n11 15\n11 16\n12 13\n12 14\n\
                              12 16\n13 14\n13 15\n14 15\n14 16\n15 16\n");
        let graph = DyUGraph::read_gr(gr).unwrap();
        let cover = find_cover(&graph, 10);
        assert!(cover.is_some());
        let cover = cover.unwrap();
        assert!(cover.len() <= 10);
        assert!(graph.is_vertex_cover(&cover));
        assert!(!has_cover(&graph, 9));
    }

    #[test]
    fn intervined_cliques_test() {
        let gr = Cursor::new("p td 12 30\n1 2\n1 3\n1 4\n1 5\n1 9\n2 3\n2 4\n2 6\n2 10\n\
                              3 4\n3 7\n3 11\n4 8\n4 12\n5 6\n5 7\n5 8\n5 9\n6 7\n\
                              6 8\n6 10\n7 8\n7 11\n8 12\n9 10\n9 11\n9 12\n\
                              10 11\n10 12\n11 12\n");
        let graph = DyUGraph::read_gr(gr).unwrap();
        assert!(has_cover(&graph, 9));
        assert!(!has_cover(&graph, 8));
    }

    #[test]
    fn small_graphs_test() {
        let triangle = DyUGraph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        assert!(!has_cover(&triangle, 1));
        assert_eq!(find_cover(&triangle, 2).map(|cover| cover.len()), Some(2));

        let path = DyUGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        assert!(!has_cover(&path, 1));
        let cover = find_cover(&path, 2).unwrap();
        assert_eq!(cover, vec![1, 3].into_iter().collect());
    }

    #[test]
    fn edgeless_test() {
        assert_eq!(find_cover(&DyUGraph::new(0), 0), Some(FxHashSet::default()));
        assert!(has_cover(&DyUGraph::new(5), 0));
        let edge = DyUGraph::from_edges(2, &[(0, 1)]).unwrap();
        assert!(!has_cover(&edge, 0));
        assert!(has_cover(&edge, 1));
    }

    #[test]
    fn input_untouched_test() {
        let graph = DyUGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let copy = graph.clone();
        let mut search = BoundedSearch::default();
        assert!(search.find_cover(&graph, 2).is_some());
        assert!(search.visited > 1);
        assert_eq!(graph, copy);
    }
}
