use crate::cust_error::ProcessingError;
use crate::graph::DyUGraph;
use fxhash::FxHashSet;
use std::io::{self, Write};

/// An instance of the parameterized vertex cover problem: does `graph` have a vertex cover of
/// size at most `k`?
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct VCInstance {
    pub graph: DyUGraph,
    /// The remaining budget.
    pub k: usize,
    /// Nodes that were put into the cover (and removed from `graph`) by the reduction rules.
    pub forced: FxHashSet<usize>,
}

/// Validates user input: `k` has to be non-negative and `graph` has to be consistent.
/// Returns `k` as budget.
pub fn checked_parameter(graph: &DyUGraph, k: isize) -> Result<usize, ProcessingError> {
    let budget = usize::try_from(k).map_err(|_| ProcessingError::NegativeParameter(k))?;
    graph.check_consistency()?;
    Ok(budget)
}

impl VCInstance {

    pub fn new(graph: DyUGraph, k: isize) -> Result<Self, ProcessingError> {
        let k = checked_parameter(&graph, k)?;
        Ok(VCInstance {
            graph,
            k,
            forced: FxHashSet::default(),
        })
    }

    /// Puts `node` into the cover: removes it from `self.graph` and decrements `self.k`.
    /// Returns `false` and changes nothing if the budget is already exhausted. Nodes that do not
    /// exist (anymore) are ignored.
    pub fn add_to_cover(&mut self, node: usize) -> bool {
        if !self.graph.contains(node) {
            return true
        }
        if self.k == 0 {
            return false
        }
        self.graph.delete_node(node);
        self.forced.insert(node);
        self.k -= 1;
        true
    }

    /// Puts all nodes of `node_set` into the cover.
    /// Returns `false` and changes nothing if they do not fit into the budget.
    pub fn add_all_to_cover(&mut self, node_set: &FxHashSet<usize>) -> bool {
        let present = node_set.iter().filter(|node| self.graph.contains(**node)).count();
        if present > self.k {
            return false
        }
        for node in node_set {
            self.add_to_cover(*node);
        }
        true
    }

    /// Removes `node` from `self.graph` without putting it into the cover.
    /// Returns `true` if a node was removed.
    pub fn delete_node(&mut self, node: usize) -> bool {
        self.graph.delete_node(node).is_some()
    }

    /// Checks if `sol` solves the remaining instance, i.e. covers `self.graph` within the budget.
    pub fn validate_solution(&self, sol: &FxHashSet<usize>) -> bool {
        sol.len() <= self.k && self.graph.is_vertex_cover(sol)
    }

}

impl VCInstance {

    /// Writes a solution to a `Write` type, one 1-based node id per line.
    pub fn write_solution<W: Write>(solution: &FxHashSet<usize>, mut out: W) -> Result<(), io::Error> {
        let mut nodes: Vec<usize> = solution.iter().copied().collect();
        nodes.sort_unstable();
        for elem in nodes {
            writeln!(out, "{}",elem + 1)?;
        }
        Ok(())
    }

}
