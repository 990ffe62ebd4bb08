//! Implementation of a simple, undirected graph data structure with basic static and dynamic
//! functions.
//!
//! Nodes are `usize` ids that index into an adjacency list. A deleted node leaves an empty slot
//! behind, so ids stay stable while reduction rules and the search tree remove nodes.

use crate::cust_error::{ImportError, ProcessingError};
use fxhash::FxHashSet;
use std::io::BufRead;

/// A simple undirected graph datastructure that supports dynamic behaviour.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct DyUGraph {
    adj_list: Vec<Option<FxHashSet<usize>>>,
}

// Construction
impl DyUGraph {

    /// Creates a graph with the nodes `0..n` and no edges.
    pub fn new(n: usize) -> Self {
        DyUGraph {
            adj_list: vec![Some(FxHashSet::default()); n],
        }
    }

    /// Creates a graph with the nodes `0..n` and the given edges.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, ProcessingError> {
        let mut graph = Self::new(n);
        for &(src, trg) in edges {
            graph.add_edge(src, trg)?;
        }
        Ok(graph)
    }

    /// Appends a fresh isolated node and returns its id.
    pub fn add_node(&mut self) -> usize {
        self.adj_list.push(Some(FxHashSet::default()));
        self.adj_list.len() - 1
    }

    /// Inserts the edge `{src, trg}`.
    /// Returns `false` if the edge already existed.
    pub fn add_edge(&mut self, src: usize, trg: usize) -> Result<bool, ProcessingError> {
        if src == trg {
            return Err(ProcessingError::SelfLoop(src))
        }
        for node in [src, trg] {
            if !self.contains(node) {
                return Err(ProcessingError::MissingNode(node))
            }
        }
        let new = self.adj_list[src].as_mut().expect("`src` exists").insert(trg);
        self.adj_list[trg].as_mut().expect("`trg` exists").insert(src);
        Ok(new)
    }

    /// Checks that every edge is stored at both endpoints, that both endpoints exist and that
    /// there are no self-loops.
    pub fn check_consistency(&self) -> Result<(), ProcessingError> {
        for node in self.nodes() {
            for &neigh in self.neighbors(node).expect("`node` exists") {
                if neigh == node {
                    return Err(ProcessingError::SelfLoop(node))
                }
                match self.neighbors(neigh) {
                    Some(nn) if nn.contains(&node) => {},
                    Some(_) => return Err(ProcessingError::InconsistentAdjacency(node, neigh)),
                    None => return Err(ProcessingError::MissingNode(neigh)),
                }
            }
        }
        Ok(())
    }
}

// Static functions
impl DyUGraph {

    /// Returns an `Iterator` over all nodes that have not yet been deleted, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item=usize> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .filter_map(|(i,adj)| {
                if adj.is_some() {
                    Some(i)
                } else {
                    None
                }
            })
    }

    /// Checks if `node` exists and was not deleted.
    pub fn contains(&self, node: usize) -> bool {
        matches!(self.adj_list.get(node), Some(Some(_)))
    }

    /// Returns the number of nodes of `self`.
    pub fn num_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the number of edges of `self`.
    pub fn num_edges(&self) -> usize {
        self.adj_list
            .iter()
            .flatten()
            .map(|neighbors| neighbors.len())
            .sum::<usize>() / 2
    }

    /// Returns the neighborhood of `node`, or `None` if `node` was deleted.
    pub fn neighbors(&self, node: usize) -> Option<&FxHashSet<usize>> {
        self.adj_list.get(node).and_then(Option::as_ref)
    }

    /// Returns the degree of `node`, or `None` if `node` was deleted.
    pub fn degree(&self, node: usize) -> Option<usize> {
        self.neighbors(node).map(|neighbors| neighbors.len())
    }

    /// Returns an iterator over all nodes without neighbors.
    pub fn isolated_nodes(&self) -> impl Iterator<Item=usize> + '_ {
        self.nodes().filter(|node| self.degree(*node) == Some(0))
    }

    /// Returns the open neighborhood of `set`.
    pub fn open_neighborhood_of_set(&self, set: &FxHashSet<usize>) -> FxHashSet<usize> {
        set.iter()
            .filter_map(|node| self.neighbors(*node))
            .flat_map(|neighs| neighs.difference(set).copied())
            .collect()
    }

    /// Returns an iterator over all edges. Each edge `(src, trg)` is reported once with
    /// `src < trg`.
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .filter_map(|(i, adj)| adj.as_ref().map(|adj| (i, adj)))
            .flat_map(|(i, adj)| {
                adj.iter()
                    .filter(move |neigh| i < **neigh)
                    .map(move |neigh| (i, *neigh))
            })
    }

    /// Returns the edge between the smallest node with a neighbor and its smallest neighbor.
    pub fn first_edge(&self) -> Option<(usize, usize)> {
        self.nodes().find_map(|node| {
            self.neighbors(node)
                .and_then(|neighbors| neighbors.iter().min())
                .map(|neigh| (node, *neigh))
        })
    }

    /// Checks if `edge` exists.
    pub fn edge_exists(&self, edge: (usize, usize)) -> bool {
        if let Some(neighs) = self.neighbors(edge.0) {
            return neighs.contains(&edge.1)
        }
        false
    }

    /// Checks if no edge runs between two nodes of `set`.
    pub fn is_independent(&self, set: &FxHashSet<usize>) -> bool {
        set.iter()
            .filter_map(|node| self.neighbors(*node))
            .all(|neighbors| neighbors.is_disjoint(set))
    }

    /// Checks if every edge of `self` has at least one endpoint in `cover`.
    pub fn is_vertex_cover(&self, cover: &FxHashSet<usize>) -> bool {
        self.edges().all(|(src, trg)| cover.contains(&src) || cover.contains(&trg))
    }

    /// Checks if `self` is empty (holds no undeleted nodes).
    pub fn is_empty(&self) -> bool {
        self.nodes().next().is_none()
    }

    /// Returns a set of all nodes reachable by `node`, including `node`.
    pub fn reachable(&self, node: usize) -> FxHashSet<usize> {
        let mut reached = FxHashSet::default();
        let mut queue = vec![node];
        while let Some(next) = queue.pop() {
            if !reached.insert(next) {
                continue
            }
            if let Some(neighbors) = self.neighbors(next) {
                queue.extend(neighbors.iter().filter(|neigh| !reached.contains(*neigh)));
            }
        }
        reached
    }

    /// Returns the connected components of `self`. Each component is sorted, and the components
    /// are ordered by their smallest node.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let mut components = Vec::new();
        let mut marked = FxHashSet::default();
        for node in self.nodes() {
            if marked.contains(&node) {
                continue
            }
            let mut component: Vec<usize> = self.reachable(node).into_iter().collect();
            component.sort_unstable();
            marked.extend(component.iter().copied());
            components.push(component);
        }
        components
    }

    /// Returns a copy of the subgraph induced by `set`. Node ids are kept, nodes outside of `set`
    /// are deleted in the copy.
    pub fn induced_subgraph(&self, set: &FxHashSet<usize>) -> Self {
        let adj_list = self.adj_list
            .iter()
            .enumerate()
            .map(|(node, adj)| {
                if !set.contains(&node) {
                    return None
                }
                adj.as_ref().map(|neighbors| neighbors.intersection(set).copied().collect())
            })
            .collect();
        DyUGraph {
            adj_list,
        }
    }

    /// Returns the subgraph on `left ∪ right` that only keeps the edges with one endpoint in
    /// `left` and the other in `right`. `left` and `right` should be disjoint.
    pub fn edges_between(&self, left: &FxHashSet<usize>, right: &FxHashSet<usize>) -> Self {
        let adj_list = self.adj_list
            .iter()
            .enumerate()
            .map(|(node, adj)| {
                let other_side = if left.contains(&node) {
                    right
                } else if right.contains(&node) {
                    left
                } else {
                    return None
                };
                adj.as_ref().map(|neighbors| neighbors.intersection(other_side).copied().collect())
            })
            .collect();
        DyUGraph {
            adj_list,
        }
    }
}

// Dynamic functions
impl DyUGraph {

    /// Tries to delete `node`. Deleting a node that does not exist is a no-op.
    /// Returns the old neighborhood of `node` or `None` if nothing was deleted.
    pub fn delete_node(&mut self, node: usize) -> Option<FxHashSet<usize>> {
        let neighborhood = self.adj_list.get_mut(node)?.take()?;
        for neighbor in neighborhood.iter() {
            if let Some(Some(nn)) = self.adj_list.get_mut(*neighbor) {
                nn.remove(&node);
            }
        }
        Some(neighborhood)
    }

    /// Removes all nodes in `node_set` from the graph.
    /// Returns the number of nodes that were actually deleted.
    pub fn delete_nodes(&mut self, node_set: &FxHashSet<usize>) -> usize {
        let mut deleted = 0;
        for node in node_set {
            let Some(Some(neighborhood)) = self.adj_list.get_mut(*node).map(Option::take) else {
                continue
            };
            deleted += 1;
            for neighbor in neighborhood.difference(node_set) {
                if let Some(Some(nn)) = self.adj_list.get_mut(*neighbor) {
                    nn.remove(node);
                }
            }
        }
        deleted
    }

}

impl DyUGraph {

    /// Reads a `.gr` input and creates a `DyUGraph`.
    ///
    /// The first non-comment line is `p <descriptor> <n> <m>`, followed by `m` lines `<src> <trg>`
    /// with 1-based node ids. Lines starting with `c` are comments.
    pub fn read_gr<R: BufRead>(gr: R) -> Result<Self, ImportError> {
        let mut lines = gr.lines().filter(|l| {
            if let Ok(line) = l {
                // ignore empty lines and comment lines
                !line.starts_with('c') && !line.trim().is_empty()
            } else {
                true
            }
        });
        // p <descriptor> <n> <m>
        let (n, m) = {
            let line = lines.next().ok_or(ImportError::InputMalformedError)??;
            let mut s = line.split_whitespace();
            if let Some("p") = s.next() {} else { return Err(ImportError::InputMalformedError); }
            s.next().ok_or(ImportError::InputMalformedError)?;
            let n: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            let m: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            (n, m)
        };
        let mut graph = DyUGraph::new(n);
        let mut num_edges = 0;
        for line in lines {
            // <src> <trg>
            let line = line?;
            let mut s = line.split_whitespace();
            let src = s.next().ok_or(ImportError::InputMalformedError)?.parse::<usize>()?;
            let trg = s.next().ok_or(ImportError::InputMalformedError)?.parse::<usize>()?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            let src = src.checked_sub(1).ok_or(ImportError::InputMalformedError)?;
            let trg = trg.checked_sub(1).ok_or(ImportError::InputMalformedError)?;
            graph.add_edge(src, trg)?;
            num_edges += 1;
        }
        if num_edges != m { return Err(ImportError::InputMalformedError); }
        Ok(graph)
    }

}
