use crate::error::{Error, Result};
use crate::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Undirected edge between two nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
}

impl Edge {
    pub fn new(u: NodeId, v: NodeId) -> Self {
        Self { u, v }
    }
}

/// Social graph for belief propagation
///
/// Topology only: node identity is the index `0..n`, nothing else is
/// attached. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    n: usize,
    pub edges: Vec<Edge>,
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Build a graph from an edge list. Self-loops and out-of-range
    /// endpoints are ignored.
    pub fn new(n: usize, edges: Vec<Edge>) -> Self {
        let mut g = Self { n, edges, adjacency: Vec::new() };
        g.build_adjacency();
        g
    }

    pub fn num_nodes(&self) -> usize {
        self.n
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Build adjacency list representation for fast neighbor queries
    fn build_adjacency(&mut self) {
        let n = self.n;
        let mut adj = vec![Vec::new(); n];

        self.edges.retain(|e| e.u < n && e.v < n && e.u != e.v);
        for edge in &self.edges {
            adj[edge.u].push(edge.v);
            adj[edge.v].push(edge.u);
        }

        self.adjacency = adj;
    }

    /// Get neighbors of node u
    pub fn neighbors(&self, u: NodeId) -> &[NodeId] {
        self.adjacency.get(u).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn degree(&self, u: NodeId) -> usize {
        self.neighbors(u).len()
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// Create a ring lattice: n nodes, each joined to its k nearest
    /// neighbors (k/2 on each side). Requires k < n.
    pub fn ring_lattice(n: usize, k: usize) -> Self {
        assert!(k < n, "ring lattice requires k < n (got k={}, n={})", k, n);

        let mut edges = Vec::with_capacity(n * (k / 2));
        for j in 1..=k / 2 {
            for u in 0..n {
                edges.push(Edge::new(u, (u + j) % n));
            }
        }
        Self::new(n, edges)
    }

    /// Number of connected components (BFS sweep)
    pub fn component_count(&self) -> usize {
        let mut visited = vec![false; self.n];
        let mut components = 0;

        for start in 0..self.n {
            if visited[start] {
                continue;
            }
            components += 1;
            visited[start] = true;

            let mut queue = VecDeque::new();
            queue.push_back(start);
            while let Some(u) = queue.pop_front() {
                for &v in self.neighbors(u) {
                    if !visited[v] {
                        visited[v] = true;
                        queue.push_back(v);
                    }
                }
            }
        }

        components
    }

    pub fn is_connected(&self) -> bool {
        self.component_count() <= 1
    }
}

/// Random rewiring can occasionally disconnect small graphs; callers whose
/// reporting assumes one component opt into this check.
pub fn ensure_connected(graph: &Graph) -> Result<()> {
    let components = graph.component_count();
    if components > 1 {
        return Err(Error::DegenerateGraph { components });
    }
    Ok(())
}
