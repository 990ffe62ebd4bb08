//! Maximum matchings in bipartite graphs.
//!
//! The bipartite graph is given as a node set of a `DyUGraph` together with a predicate that
//! decides which nodes form the top side. Only edges between the two sides are considered.
//!
//! The maximum matching is computed with the Hopcroft-Karp algorithm: a BFS from all free top
//! nodes layers the graph along alternating paths, then a DFS augments along node disjoint
//! shortest paths in that layering. This repeats until no augmenting path is left.
//!
//! From a maximum matching `M` we get (Kőnig): let `Z` be the nodes reachable from the free top
//! nodes over alternating paths. Then `(Top \ Z) ∪ (Bottom ∩ Z)` is a minimum vertex cover of
//! the bipartite graph.

use crate::graph::DyUGraph;
use crate::matching::Matching;
use fxhash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Layer value of top nodes the current BFS did not reach.
const UNREACHED: usize = usize::MAX;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BipartiteMatcher {
    /// The ids of the top nodes in the origin graph. Top node `i` is `tops[i]`.
    tops: Vec<usize>,
    /// The ids of the bottom nodes in the origin graph.
    bottoms: Vec<usize>,
    /// `adj[i]` holds the (sorted) bottom indices adjacent to top node `i`.
    adj: Vec<Vec<usize>>,
    mate_top: Vec<Option<usize>>,
    mate_bottom: Vec<Option<usize>>,
    /// BFS layer of each top node, helper for the augmentation phase.
    steps: Vec<usize>,
}

impl BipartiteMatcher {

    /// Builds the bipartite graph on `nodes` (deleted nodes are skipped). Nodes for which
    /// `is_top` holds form the top side, all others the bottom side. Edges of `graph` inside one
    /// side are ignored.
    pub fn new(graph: &DyUGraph, nodes: &[usize], is_top: impl Fn(usize) -> bool) -> Self {
        let (tops, bottoms): (Vec<usize>, Vec<usize>) = nodes
            .iter()
            .copied()
            .filter(|node| graph.contains(*node))
            .partition(|node| is_top(*node));
        let bottom_ids: FxHashMap<usize, usize> = bottoms
            .iter()
            .enumerate()
            .map(|(id, node)| (*node, id))
            .collect();
        let adj = tops.iter()
            .map(|top| {
                let mut row: Vec<usize> = graph.neighbors(*top)
                    .expect("`top` exists")
                    .iter()
                    .filter_map(|neigh| bottom_ids.get(neigh).copied())
                    .collect();
                row.sort_unstable();
                row
            })
            .collect();
        BipartiteMatcher {
            mate_top: vec![None; tops.len()],
            mate_bottom: vec![None; bottoms.len()],
            steps: vec![UNREACHED; tops.len()],
            tops,
            bottoms,
            adj,
        }
    }

    /// Layers the top nodes by their alternating distance from the free top nodes.
    /// Returns `true` if an augmenting path exists.
    fn bfs(&mut self) -> bool {
        let mut queue = VecDeque::new();
        for (top, mate) in self.mate_top.iter().enumerate() {
            if mate.is_none() {
                self.steps[top] = 0;
                queue.push_back(top);
            } else {
                self.steps[top] = UNREACHED;
            }
        }
        let mut found = false;
        while let Some(top) = queue.pop_front() {
            for &bottom in &self.adj[top] {
                match self.mate_bottom[bottom] {
                    None => found = true,
                    Some(next) if self.steps[next] == UNREACHED => {
                        self.steps[next] = self.steps[top] + 1;
                        queue.push_back(next);
                    },
                    Some(_) => {},
                }
            }
        }
        found
    }

    /// Tries to augment along the layering, starting at `top`.
    fn dfs(&mut self, top: usize) -> bool {
        for i in 0..self.adj[top].len() {
            let bottom = self.adj[top][i];
            let augments = match self.mate_bottom[bottom] {
                None => true,
                Some(next) => self.steps[next] == self.steps[top] + 1 && self.dfs(next),
            };
            if augments {
                self.mate_top[top] = Some(bottom);
                self.mate_bottom[bottom] = Some(top);
                return true
            }
        }
        // Dead end for the rest of this phase.
        self.steps[top] = UNREACHED;
        false
    }

    /// Computes a maximum matching with the Hopcroft-Karp algorithm.
    /// Returns its size.
    pub fn maximum_matching(&mut self) -> usize {
        while self.bfs() {
            for top in 0..self.tops.len() {
                if self.mate_top[top].is_none() {
                    self.dfs(top);
                }
            }
        }
        self.size()
    }

    /// Returns the size of the current matching.
    pub fn size(&self) -> usize {
        self.mate_top.iter().flatten().count()
    }

    /// Returns the current matching in terms of the origin graph.
    pub fn matching(&self) -> Matching {
        let mut matching = Matching::default();
        for (top, mate) in self.mate_top.iter().enumerate() {
            if let Some(bottom) = mate {
                matching.insert(self.tops[top], self.bottoms[*bottom]);
            }
        }
        matching
    }

    /// Given the current matching, returns the top and the bottom nodes that are reachable from
    /// the free top nodes over alternating paths. The free top nodes are included.
    pub fn alternating_reach(&self) -> (FxHashSet<usize>, FxHashSet<usize>) {
        let mut top_seen = vec![false; self.tops.len()];
        let mut bottom_seen = vec![false; self.bottoms.len()];
        let mut queue: VecDeque<usize> = self.mate_top
            .iter()
            .enumerate()
            .filter(|(_, mate)| mate.is_none())
            .map(|(top, _)| top)
            .collect();
        for top in &queue {
            top_seen[*top] = true;
        }
        while let Some(top) = queue.pop_front() {
            for &bottom in &self.adj[top] {
                if bottom_seen[bottom] {
                    continue
                }
                bottom_seen[bottom] = true;
                // Only true alternating paths: leave a bottom node over its matching edge.
                if let Some(next) = self.mate_bottom[bottom] {
                    if !top_seen[next] {
                        top_seen[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }
        let reached_tops = top_seen.iter()
            .enumerate()
            .filter(|(_, seen)| **seen)
            .map(|(top, _)| self.tops[top])
            .collect();
        let reached_bottoms = bottom_seen.iter()
            .enumerate()
            .filter(|(_, seen)| **seen)
            .map(|(bottom, _)| self.bottoms[bottom])
            .collect();
        (reached_tops, reached_bottoms)
    }

    /// Computes a minimum vertex cover of the bipartite graph from a maximum matching.
    /// `maximum_matching()` has to be called first.
    pub fn min_vertex_cover(&self) -> FxHashSet<usize> {
        let (reached_tops, mut cover) = self.alternating_reach();
        cover.extend(self.tops.iter().filter(|top| !reached_tops.contains(*top)));
        cover
    }

}
