//! Module for the crown rule.
//!
//! A crown decomposition of a graph `G` is a partition `(C, H, R)` of its nodes such that `C` is
//! a non-empty independent set, `N(C) ⊆ H` and there is a matching between `H` and `C` that
//! saturates `H`. The crown lemma (see Cygan et al., "Parameterized Algorithms", Lemma 2.14)
//! states that `G` has a vertex cover of size at most `k` iff `G - (C ∪ H)` has one of size at
//! most `k - |H|`.
//!
//! To find crowns we compute a maximal matching `M` and look at the bipartite graph `B` between
//! the matched nodes `V(M)` and the unmatched nodes `I`. As `M` is maximal, `I` is independent
//! and all neighbors of `I` are in `V(M)`.

use crate::bipartite::BipartiteMatcher;
use crate::graph::DyUGraph;
use crate::matching::greedy_maximal_matching;
use fxhash::FxHashSet;
use log::{debug, trace};

/// Selects which crowns the finder looks for.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum CrownRule {
    /// Only degenerate crowns: an unmatched node without neighbors in `B`, with an empty head.
    Trivial,
    /// Also crowns with a non-empty head, computed from a maximum matching of `B` and the
    /// alternating paths from its free unmatched nodes.
    #[default]
    Full,
}

/// A crown `crown` with its head `head`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Crown {
    pub crown: FxHashSet<usize>,
    pub head: FxHashSet<usize>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CrownSearch {
    /// A matching larger than `k` exists, so there is no vertex cover of size at most `k`.
    NoInstance,
    NotFound,
    Found(Crown),
}

impl Crown {

    /// Checks the crown invariants: `crown` is non-empty and independent, `crown` and `head` are
    /// disjoint, `N(crown) ⊆ head` and a matching between `head` and `crown` saturates `head`.
    pub fn is_valid(&self, graph: &DyUGraph) -> bool {
        if self.crown.is_empty() || !self.crown.is_disjoint(&self.head) {
            return false
        }
        if !self.crown.iter().chain(self.head.iter()).all(|node| graph.contains(*node)) {
            return false
        }
        if !graph.is_independent(&self.crown) {
            return false
        }
        if !graph.open_neighborhood_of_set(&self.crown).is_subset(&self.head) {
            return false
        }
        let nodes: Vec<usize> = self.crown.iter().chain(self.head.iter()).copied().collect();
        let mut matcher = BipartiteMatcher::new(graph, &nodes, |node| self.head.contains(&node));
        matcher.maximum_matching() == self.head.len()
    }
}

/// Looks for a crown in `graph` with respect to the budget `k`.
pub fn find_crown(graph: &DyUGraph, k: usize, rule: CrownRule) -> CrownSearch {
    let matching = greedy_maximal_matching(graph);
    if matching.len() > k {
        debug!("Crown: maximal matching of size {} exceeds k = {}", matching.len(), k);
        return CrownSearch::NoInstance
    }
    let matched = matching.matched_nodes();
    let unmatched: FxHashSet<usize> = graph.nodes().filter(|node| !matched.contains(node)).collect();
    let bipartite = graph.edges_between(&matched, &unmatched);

    // An unmatched node without neighbors in `bipartite` is isolated in `graph`.
    let mut isolated: Vec<usize> = unmatched.iter()
        .copied()
        .filter(|node| bipartite.degree(*node) == Some(0))
        .collect();
    isolated.sort_unstable();
    if let Some(node) = isolated.first() {
        trace!("Crown: trivial crown {{{}}}", node);
        return CrownSearch::Found(Crown {
            crown: vec![*node].into_iter().collect(),
            head: FxHashSet::default(),
        })
    }
    if rule == CrownRule::Trivial {
        return CrownSearch::NotFound
    }

    // The components of `bipartite` can be matched independently.
    let mut matching_size = 0;
    let mut crown = FxHashSet::default();
    let mut head = FxHashSet::default();
    for component in bipartite.connected_components() {
        if component.len() < 2 {
            continue
        }
        let mut matcher = BipartiteMatcher::new(&bipartite, &component, |node| unmatched.contains(&node));
        matching_size += matcher.maximum_matching();
        if matching_size > k {
            debug!("Crown: maximum matching of size at least {} exceeds k = {}", matching_size, k);
            return CrownSearch::NoInstance
        }
        let (reached_unmatched, reached_matched) = matcher.alternating_reach();
        crown.extend(reached_unmatched);
        head.extend(reached_matched);
    }
    if crown.is_empty() {
        return CrownSearch::NotFound
    }
    trace!("Crown: |C| = {}, |H| = {}", crown.len(), head.len());
    CrownSearch::Found(Crown {
        crown,
        head,
    })
}
