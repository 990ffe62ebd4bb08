//! This module includes the reduction rules for the parameterized vertex cover problem and the
//! kernelization that applies them exhaustively.
//! These rules include:
//! * Isolated nodes never need to be in a cover and are removed.
//! * The high degree rule: a node with more than `k` neighbors is in every cover of size at most
//! `k`, so it is put into the cover.
//! * The crown rule: see `crate::crown`.
//!
//! If none of the rules applies anymore and the instance was not proven infeasible, the crown
//! lemma guarantees that at most `3k` nodes are left (with `CrownRule::Full`).

use crate::crown::{find_crown, Crown, CrownRule, CrownSearch};
use crate::graph::DyUGraph;
use crate::vc_instance::VCInstance;
use fxhash::FxHashSet;
use log::{debug, info};

/// Configuration of the kernelization.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct KernelConfig {
    pub crown_rule: CrownRule,
}

/// Outcome of one application of a reduction rule.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RuleOutcome {
    Unchanged,
    Reduced,
    /// The rule proved that the instance has no vertex cover within the budget.
    Infeasible,
}

/// A reduced instance equivalent to the one it was computed from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Kernel {
    pub graph: DyUGraph,
    pub k: usize,
    /// Nodes the reduction rules put into the cover.
    pub forced: FxHashSet<usize>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum KernelResult {
    Kernel(Kernel),
    /// There is no vertex cover of size at most `k`.
    Infeasible,
}

impl Kernel {

    /// Extends a vertex cover of the kernel graph to a vertex cover of the input graph.
    pub fn lift_cover(&self, mut cover: FxHashSet<usize>) -> FxHashSet<usize> {
        cover.extend(self.forced.iter().copied());
        cover
    }
}

impl KernelResult {

    pub fn is_infeasible(&self) -> bool {
        matches!(self, KernelResult::Infeasible)
    }

    pub fn kernel(&self) -> Option<&Kernel> {
        match self {
            KernelResult::Kernel(kernel) => Some(kernel),
            KernelResult::Infeasible => None,
        }
    }

    /// Returns `(kernel graph, new k, infeasible)`. An infeasible result is `(None, 0, true)`.
    pub fn into_parts(self) -> (Option<DyUGraph>, usize, bool) {
        match self {
            KernelResult::Kernel(kernel) => (Some(kernel.graph), kernel.k, false),
            KernelResult::Infeasible => (None, 0, true),
        }
    }
}

impl VCInstance {

    /// Removes all isolated nodes.
    /// Returns the number of removed nodes.
    pub fn remove_isolated(&mut self) -> usize {
        let isolated: Vec<usize> = self.graph.isolated_nodes().collect();
        for node in &isolated {
            self.delete_node(*node);
        }
        isolated.len()
    }

    /// Puts nodes with a degree larger than the remaining budget into the cover until no such
    /// node remains.
    pub fn high_degree_rule(&mut self) -> RuleOutcome {
        let mut outcome = RuleOutcome::Unchanged;
        loop {
            let k = self.k;
            let high = self.graph
                .nodes()
                .find(|node| self.graph.degree(*node).expect("`node` exists") > k);
            let Some(node) = high else {
                break
            };
            if !self.add_to_cover(node) {
                return RuleOutcome::Infeasible
            }
            outcome = RuleOutcome::Reduced;
        }
        outcome
    }

    /// Alternates between removing isolated nodes and the high degree rule until neither changes
    /// the instance.
    pub fn exhaustive_simple_rules(&mut self) -> RuleOutcome {
        let mut outcome = RuleOutcome::Unchanged;
        loop {
            if self.remove_isolated() > 0 {
                outcome = RuleOutcome::Reduced;
            }
            match self.high_degree_rule() {
                RuleOutcome::Infeasible => return RuleOutcome::Infeasible,
                RuleOutcome::Reduced => outcome = RuleOutcome::Reduced,
                RuleOutcome::Unchanged => return outcome,
            }
        }
    }

    /// Puts the head of `crown` into the cover and removes the crown itself.
    pub fn apply_crown(&mut self, crown: &Crown) -> RuleOutcome {
        if !self.add_all_to_cover(&crown.head) {
            return RuleOutcome::Infeasible
        }
        self.graph.delete_nodes(&crown.crown);
        RuleOutcome::Reduced
    }

    /// Applies the reduction rules until at most `3k` nodes remain, no rule applies anymore, or
    /// the instance is proven infeasible.
    pub fn kernelize(mut self, config: &KernelConfig) -> KernelResult {
        let (org_nodes, org_edges, org_k) = (self.graph.num_nodes(), self.graph.num_edges(), self.k);
        let mut rounds = 0;
        loop {
            rounds += 1;
            if self.exhaustive_simple_rules() == RuleOutcome::Infeasible {
                info!("Kernelization: high degree rule exceeded k = {} in round {}", org_k, rounds);
                return KernelResult::Infeasible
            }
            if self.graph.num_nodes() <= self.k.saturating_mul(3) {
                break
            }
            match find_crown(&self.graph, self.k, config.crown_rule) {
                CrownSearch::NoInstance => {
                    info!("Kernelization: matching exceeded k = {} in round {}", self.k, rounds);
                    return KernelResult::Infeasible
                },
                CrownSearch::NotFound => {
                    debug!("Kernelization: no crown in round {}, {} nodes > 3k = {}",
                           rounds, self.graph.num_nodes(), 3 * self.k);
                    break
                },
                CrownSearch::Found(crown) => {
                    debug_assert!(crown.is_valid(&self.graph));
                    debug!("Kernelization: crown with |C| = {}, |H| = {} in round {}",
                           crown.crown.len(), crown.head.len(), rounds);
                    if self.apply_crown(&crown) == RuleOutcome::Infeasible {
                        info!("Kernelization: crown head exceeded k = {} in round {}", self.k, rounds);
                        return KernelResult::Infeasible
                    }
                },
            }
        }
        info!("Kernelization: n {} -> {}, m {} -> {}, k {} -> {} in {} rounds",
              org_nodes, self.graph.num_nodes(), org_edges, self.graph.num_edges(), org_k, self.k, rounds);
        KernelResult::Kernel(Kernel {
            graph: self.graph,
            k: self.k,
            forced: self.forced,
        })
    }

}
