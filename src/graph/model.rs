// src/graph/model.rs
//! The link graph structure and query interface.

use std::collections::HashMap;

/// An immutable directed graph of page links.
///
/// Node identifiers are interned once, in first-appearance order, into a
/// stable index. Adjacency lists hold node indices and preserve input
/// order, so iteration (and therefore the floating-point bit-pattern of
/// the distribution estimator) is reproducible across runs. Duplicate
/// edges are kept: multiplicity biases the random walk.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    out: Vec<Vec<usize>>,
}

impl Graph {
    /// Builds a graph from (source, target) identifier pairs.
    ///
    /// Both endpoints are registered as nodes, so a target that never
    /// appears as a source exists with an empty out-list (a dangling
    /// node) rather than being an unknown key.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::default();
        for (source, target) in pairs {
            let s = graph.intern(source.as_ref());
            let t = graph.intern(target.as_ref());
            graph.out[s].push(t);
        }
        graph
    }

    fn intern(&mut self, label: &str) -> usize {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.out.push(Vec::new());
        id
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Total number of directed edges (sum of out-list lengths).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.out.iter().map(Vec::len).sum()
    }

    /// Node identifiers in first-appearance order.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn label(&self, id: usize) -> &str {
        &self.labels[id]
    }

    #[must_use]
    pub fn node_id(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Outbound targets of a node, in input order. Empty for dangling nodes.
    #[must_use]
    pub fn out_edges(&self, id: usize) -> &[usize] {
        &self.out[id]
    }

    #[must_use]
    pub fn is_dangling(&self, id: usize) -> bool {
        self.out[id].is_empty()
    }
}
