//! Kernelization and a bounded search tree for the parameterized vertex cover problem: given a
//! graph `G` and a budget `k`, is there a set of at most `k` nodes that touches every edge?
//!
//! The kernelization applies the isolated node rule, the high degree rule and the crown rule
//! until the instance has at most `3k` nodes or is proven infeasible. The remaining kernel can be
//! decided by the bounded search tree in `bounded_search`.

pub mod graph;
pub mod cust_error;
pub mod matching;
pub mod bipartite;
pub mod crown;
pub mod vc_instance;
pub mod kernelization;
pub mod bounded_search;
pub mod generators;

use crate::cust_error::ProcessingError;
use crate::graph::DyUGraph;
use crate::kernelization::{KernelConfig, KernelResult};
use crate::vc_instance::{checked_parameter, VCInstance};
use fxhash::FxHashSet;

/// Kernelizes the instance `(graph, k)` with the default configuration.
/// `graph` itself is not changed.
pub fn kernelize(graph: &DyUGraph, k: isize) -> Result<KernelResult, ProcessingError> {
    kernelize_with(graph, k, &KernelConfig::default())
}

/// Kernelizes the instance `(graph, k)` with the reduction rules selected by `config`.
pub fn kernelize_with(graph: &DyUGraph, k: isize, config: &KernelConfig)
    -> Result<KernelResult, ProcessingError> {
    let instance = VCInstance::new(graph.clone(), k)?;
    Ok(instance.kernelize(config))
}

/// Decides with the bounded search tree if `graph` has a vertex cover of size at most `k`.
pub fn decide(graph: &DyUGraph, k: isize) -> Result<bool, ProcessingError> {
    let k = checked_parameter(graph, k)?;
    Ok(bounded_search::has_cover(graph, k))
}

/// Kernelizes `(graph, k)`, searches a cover of the kernel and lifts it to a vertex cover of
/// `graph` with at most `k` nodes. Returns `None` if there is no such cover.
pub fn solve(graph: &DyUGraph, k: isize) -> Result<Option<FxHashSet<usize>>, ProcessingError> {
    let kernel = match kernelize(graph, k)? {
        KernelResult::Kernel(kernel) => kernel,
        KernelResult::Infeasible => return Ok(None),
    };
    Ok(bounded_search::find_cover(&kernel.graph, kernel.k).map(|cover| kernel.lift_cover(cover)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crown::CrownRule;
    use crate::generators::{planted_cover, random_gnm};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    const CONFIGS: [KernelConfig; 2] = [
        KernelConfig { crown_rule: CrownRule::Trivial },
        KernelConfig { crown_rule: CrownRule::Full },
    ];

    fn complete_graph(n: usize) -> DyUGraph {
        let edges: Vec<(usize, usize)> = (0..n)
            .flat_map(|src| ((src + 1)..n).map(move |trg| (src, trg)))
            .collect();
        DyUGraph::from_edges(n, &edges).unwrap()
    }

    /// Small random instances, each with a random budget.
    fn random_instances(seed: u64, count: usize) -> Vec<(DyUGraph, isize)> {
        let mut rng = Pcg64::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let n = rng.gen_range(0..13);
                let m = rng.gen_range(0..=24);
                let k = rng.gen_range(0..=7);
                (random_gnm(&mut rng, n, m), k)
            })
            .collect()
    }

    #[test]
    fn scenario_test() {
        let empty = DyUGraph::new(0);
        let (graph, k, infeasible) = kernelize(&empty, 2).unwrap().into_parts();
        assert_eq!((graph.map(|graph| graph.is_empty()), k, infeasible), (Some(true), 2, false));
        assert_eq!(decide(&empty, 2), Ok(true));

        let triangle = DyUGraph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        assert_eq!(decide(&triangle, 1), Ok(false));
        assert_eq!(decide(&triangle, 2), Ok(true));

        let k4 = complete_graph(4);
        assert_eq!(kernelize(&k4, 2).unwrap().into_parts(), (None, 0, true));
        let (graph, k, infeasible) = kernelize(&k4, 3).unwrap().into_parts();
        assert!(!infeasible);
        assert_eq!(decide(&graph.unwrap(), k as isize), Ok(true));

        let path = DyUGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        assert_eq!(decide(&path, 2), Ok(true));
        assert_eq!(decide(&path, 1), Ok(false));

        let star = DyUGraph::from_edges(8, &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7)]).unwrap();
        let result = kernelize(&star, 2).unwrap();
        let kernel = result.kernel().unwrap();
        assert!(!kernel.graph.contains(0));
        assert_eq!(kernel.graph.num_edges(), 0);
        assert_eq!(kernel.k, 1);
    }

    #[test]
    fn negative_parameter_test() {
        let graph = DyUGraph::from_edges(2, &[(0, 1)]).unwrap();
        assert_eq!(kernelize(&graph, -1), Err(ProcessingError::NegativeParameter(-1)));
        assert_eq!(decide(&graph, -2), Err(ProcessingError::NegativeParameter(-2)));
        assert_eq!(solve(&graph, -3), Err(ProcessingError::NegativeParameter(-3)));
    }

    #[test]
    fn input_untouched_test() {
        let graph = DyUGraph::from_edges(6, &[(0, 1), (0, 2), (0, 3), (3, 4), (4, 5)]).unwrap();
        let copy = graph.clone();
        assert!(kernelize(&graph, 1).is_ok());
        assert!(solve(&graph, 2).is_ok());
        assert!(decide(&graph, 2).is_ok());
        assert_eq!(graph, copy);
    }

    #[test]
    fn kernel_size_test() {
        for (graph, k) in random_instances(1, 200) {
            let (kernel, new_k, infeasible) = kernelize(&graph, k).unwrap().into_parts();
            if !infeasible {
                assert!(new_k <= k as usize);
                assert!(kernel.unwrap().num_nodes() <= 3 * new_k);
            }
        }
        let mut rng = Pcg64::seed_from_u64(2);
        for _ in 0..20 {
            let (graph, _) = planted_cover(&mut rng, 20, 5, 0.7, false);
            let (kernel, new_k, infeasible) = kernelize(&graph, 5).unwrap().into_parts();
            assert!(!infeasible);
            assert!(kernel.unwrap().num_nodes() <= 3 * new_k);
        }
    }

    #[test]
    fn equivalence_test() {
        for (graph, k) in random_instances(3, 200) {
            let expected = decide(&graph, k).unwrap();
            for config in &CONFIGS {
                let (kernel, new_k, infeasible) = kernelize_with(&graph, k, config).unwrap().into_parts();
                let answer = !infeasible && decide(&kernel.unwrap(), new_k as isize).unwrap();
                assert_eq!(answer, expected, "k = {}, rule = {:?}, graph = {:?}", k, config.crown_rule, graph);
            }
        }
    }

    #[test]
    fn idempotence_test() {
        for (graph, k) in random_instances(5, 200) {
            for config in &CONFIGS {
                if let KernelResult::Kernel(kernel) = kernelize_with(&graph, k, config).unwrap() {
                    let again = kernelize_with(&kernel.graph, kernel.k as isize, config).unwrap();
                    let again = again.kernel().unwrap();
                    assert_eq!(again.graph, kernel.graph);
                    assert_eq!(again.k, kernel.k);
                    assert!(again.forced.is_empty());
                }
            }
        }
    }

    #[test]
    fn monotonicity_test() {
        for (graph, k) in random_instances(7, 100) {
            if decide(&graph, k).unwrap() {
                assert!(decide(&graph, k + 1).unwrap());
            }
        }
    }

    #[test]
    fn solve_test() {
        for (graph, k) in random_instances(9, 200) {
            let cover = solve(&graph, k).unwrap();
            assert_eq!(cover.is_some(), decide(&graph, k).unwrap());
            if let Some(cover) = cover {
                assert!(cover.len() <= k as usize);
                assert!(graph.is_vertex_cover(&cover));
            }
        }
    }

    #[test]
    fn planted_cover_test() {
        let mut rng = Pcg64::seed_from_u64(11);
        for (n, k) in [(12, 3), (16, 4), (20, 5), (24, 6)] {
            for guaranteed in [false, true] {
                let (graph, planted) = planted_cover(&mut rng, n, k, 0.5, guaranteed);
                assert!(graph.is_vertex_cover(&planted));
                let cover = solve(&graph, k as isize).unwrap();
                assert!(cover.is_some());
                assert!(graph.is_vertex_cover(&cover.unwrap()));
            }
        }
    }
}
