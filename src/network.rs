/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! A capacitated network with named nodes.
//!
//! The network stores its arcs in declaration order together with their
//! capacities. For each node the outgoing and incoming arcs are kept in
//! successive positions of one adjacency list.
//!
//! A network is always constructed by a [`NetworkBuilder`] (or from a
//! [`GraphConfig`]), which validates the data: all arcs must reference
//! declared nodes, capacities must be non-negative and the source and sink
//! must be two distinct declared nodes.
//!
//! # Example
//!
//! ```
//! use rs_flowcut::{Network, ValidationError};
//!
//! let net = Network::new_with("s", "t", |b| {
//!     for u in &["s", "a", "t"] {
//!         b.add_node(u)?;
//!     }
//!     b.add_arc("s", "a", 3)?;
//!     b.add_arc("a", "t", 2)?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(net.num_nodes(), 3);
//! assert_eq!(net.num_arcs(), 2);
//! let a = net.node("a").unwrap();
//! assert_eq!(net.outarcs(a).map(|(e, _)| net.capacity(e)).sum::<i32>(), 2);
//!
//! let err = Network::new_with("s", "t", |b| {
//!     b.add_node("s")?;
//!     b.add_node("t")?;
//!     b.add_arc("s", "x", 1)?;
//!     Ok(())
//! });
//! assert!(matches!(err, Err(ValidationError::UnknownNode { .. })));
//! ```

use crate::config::GraphConfig;

use num_traits::Zero;
use thiserror::Error;

use std::collections::HashMap;
use std::fmt;

/// Error raised when a network is not well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("node '{0}' is declared twice")]
    DuplicateNode(String),
    #[error("arc {tail} -> {head} references unknown node '{node}'")]
    UnknownNode { tail: String, head: String, node: String },
    #[error("arc {tail} -> {head} has a negative capacity")]
    NegativeCapacity { tail: String, head: String },
    #[error("arc {tail} -> {head} is declared twice")]
    DuplicateArc { tail: String, head: String },
    #[error("terminal node '{0}' is not declared")]
    MissingTerminal(String),
    #[error("source and sink are the same node '{0}'")]
    SameTerminals(String),
}

/// A node of a network.
///
/// This is basically a newtype of the node index.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Node(usize);

impl Node {
    /// Return the index of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// An arc of a network.
///
/// The index of an arc is its position in declaration order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Arc(usize);

impl Arc {
    /// Return the index of this arc.
    pub fn index(self) -> usize {
        self.0
    }

    pub(crate) fn from_index(i: usize) -> Self {
        Arc(i)
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
struct NodeData {
    name: String,
    firstout: usize,
    firstin: usize,
}

#[derive(Clone, Debug)]
struct ArcData<F> {
    nodes: [usize; 2],
    capacity: F,
}

/// A directed network with named nodes and capacitated arcs.
#[derive(Clone, Debug)]
pub struct Network<F> {
    nodes: Vec<NodeData>,
    arcs: Vec<ArcData<F>>,
    // The list of adjacencies. Each entry is `arc << 1` for an outgoing arc
    // or `(arc << 1) | 1` for an incoming arc, for each node the outgoing
    // arcs come first.
    adj: Vec<usize>,
    ids: HashMap<String, usize>,
    src: usize,
    snk: usize,
}

/// Iterator over the arcs leaving or entering a node.
///
/// The iterator returns the arc and the node at its other end.
#[derive(Clone)]
pub struct AdjIter<'a, F> {
    net: &'a Network<F>,
    it: std::slice::Iter<'a, usize>,
}

impl<'a, F> Iterator for AdjIter<'a, F> {
    type Item = (Arc, Node);

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|&i| {
            let e = i >> 1;
            (Arc(e), Node(self.net.arcs[e].nodes[1 - (i & 1)]))
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<F> Network<F>
where
    F: Copy,
{
    /// Create a new network by passing a builder to the callback `f`.
    ///
    /// After the callback returns the network is validated with `source` and
    /// `sink` as terminal nodes.
    pub fn new_with<C>(source: &str, sink: &str, f: C) -> Result<Self, ValidationError>
    where
        F: Zero + PartialOrd,
        C: FnOnce(&mut NetworkBuilder<F>) -> Result<(), ValidationError>,
    {
        let mut b = NetworkBuilder::new();
        f(&mut b)?;
        b.into_network(source, sink)
    }

    /// Build and validate a network from a configuration.
    pub fn from_config(config: &GraphConfig<F>) -> Result<Self, ValidationError>
    where
        F: Zero + PartialOrd,
    {
        let mut b = NetworkBuilder::with_capacities(config.nodes.len(), config.arcs.len());
        for u in &config.nodes {
            b.add_node(u)?;
        }
        for arc in &config.arcs {
            b.add_arc(&arc.tail, &arc.head, arc.capacity)?;
        }
        b.into_network(&config.source, &config.sink)
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of arcs.
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// Return an iterator over all nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + Clone {
        (0..self.nodes.len()).map(Node)
    }

    /// Return an iterator over all arcs in declaration order.
    pub fn arcs(&self) -> impl Iterator<Item = Arc> + Clone {
        (0..self.arcs.len()).map(Arc)
    }

    /// Return the arc with the given id.
    ///
    /// The method panics if the id is invalid.
    pub fn id2arc(&self, id: usize) -> Arc {
        assert!(id < self.arcs.len(), "Invalid arc id: {}", id);
        Arc(id)
    }

    /// Return the node with the given name.
    pub fn node(&self, name: &str) -> Option<Node> {
        self.ids.get(name).map(|&u| Node(u))
    }

    /// Return the arc from `tail` to `head` (by name).
    pub fn arc(&self, tail: &str, head: &str) -> Option<Arc> {
        let u = self.node(tail)?;
        let v = self.node(head)?;
        self.outarcs(u).find(|&(_, w)| w == v).map(|(e, _)| e)
    }

    /// Return the name of a node.
    pub fn name(&self, u: Node) -> &str {
        &self.nodes[u.0].name
    }

    /// Return the source node.
    pub fn source(&self) -> Node {
        Node(self.src)
    }

    /// Return the sink node.
    pub fn sink(&self) -> Node {
        Node(self.snk)
    }

    /// Return `true` if `u` is the source or the sink.
    pub fn is_terminal(&self, u: Node) -> bool {
        u.0 == self.src || u.0 == self.snk
    }

    /// Return the tail node of an arc.
    pub fn tail(&self, e: Arc) -> Node {
        Node(self.arcs[e.0].nodes[0])
    }

    /// Return the head node of an arc.
    pub fn head(&self, e: Arc) -> Node {
        Node(self.arcs[e.0].nodes[1])
    }

    /// Return the capacity of an arc.
    pub fn capacity(&self, e: Arc) -> F {
        self.arcs[e.0].capacity
    }

    /// Return an iterator over the arcs leaving `u`.
    pub fn outarcs(&self, u: Node) -> AdjIter<F> {
        let beg = self.nodes[u.0].firstout;
        let end = self.nodes[u.0].firstin;
        AdjIter {
            net: self,
            it: self.adj[beg..end].iter(),
        }
    }

    /// Return an iterator over the arcs entering `u`.
    pub fn inarcs(&self, u: Node) -> AdjIter<F> {
        let beg = self.nodes[u.0].firstin;
        let end = self
            .nodes
            .get(u.0 + 1)
            .map(|n| n.firstout)
            .unwrap_or_else(|| self.adj.len());
        AdjIter {
            net: self,
            it: self.adj[beg..end].iter(),
        }
    }

    /// Return the residual adjacency lists used by the max-flow algorithms.
    ///
    /// For each node the list contains pairs `(e, v)` where `e` is `arc << 1`
    /// for a forward arc and `(arc << 1) | 1` for a backward arc, and `v` is
    /// the node at the other end.
    pub(crate) fn residual_neighs(&self) -> Vec<Vec<(usize, usize)>> {
        let mut neighs = Vec::with_capacity(self.nodes.len());
        for (u, node) in self.nodes.iter().enumerate() {
            let end = self.nodes.get(u + 1).map(|n| n.firstout).unwrap_or_else(|| self.adj.len());
            neighs.push(
                self.adj[node.firstout..end]
                    .iter()
                    .map(|&i| (i, self.arcs[i >> 1].nodes[1 - (i & 1)]))
                    .collect(),
            );
        }
        neighs
    }
}

/// A builder for a network.
///
/// The builder collects named nodes and arcs, checks them as they are added
/// and finally arranges the adjacency lists (first outgoing, then incoming
/// arcs for each node).
pub struct NetworkBuilder<F> {
    /// The name, outgoing and incoming arcs of each node.
    nodes: Vec<(String, [Vec<usize>; 2])>,
    arcs: Vec<ArcData<F>>,
    ids: HashMap<String, usize>,
}

impl<F> Default for NetworkBuilder<F> {
    fn default() -> Self {
        NetworkBuilder::with_capacities(0, 0)
    }
}

impl<F> NetworkBuilder<F> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty builder with reserved memory.
    pub fn with_capacities(nnodes: usize, narcs: usize) -> Self {
        NetworkBuilder {
            nodes: Vec::with_capacity(nnodes),
            arcs: Vec::with_capacity(narcs),
            ids: HashMap::with_capacity(nnodes),
        }
    }

    /// Return the current number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Return the current number of arcs.
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// Add a new node with a unique name.
    pub fn add_node(&mut self, name: &str) -> Result<Node, ValidationError> {
        if self.ids.contains_key(name) {
            return Err(ValidationError::DuplicateNode(name.to_string()));
        }
        let id = self.nodes.len();
        self.ids.insert(name.to_string(), id);
        self.nodes.push((name.to_string(), [vec![], vec![]]));
        Ok(Node(id))
    }

    /// Add a new arc between two declared nodes.
    pub fn add_arc(&mut self, tail: &str, head: &str, capacity: F) -> Result<Arc, ValidationError>
    where
        F: Zero + PartialOrd,
    {
        let lookup = |node: &str| {
            self.ids.get(node).cloned().ok_or_else(|| ValidationError::UnknownNode {
                tail: tail.to_string(),
                head: head.to_string(),
                node: node.to_string(),
            })
        };
        let u = lookup(tail)?;
        let v = lookup(head)?;

        if capacity < F::zero() {
            return Err(ValidationError::NegativeCapacity {
                tail: tail.to_string(),
                head: head.to_string(),
            });
        }

        if self.nodes[u].1[0].iter().any(|&e| self.arcs[e >> 1].nodes[1] == v) {
            return Err(ValidationError::DuplicateArc {
                tail: tail.to_string(),
                head: head.to_string(),
            });
        }

        let eid = self.arcs.len() << 1;
        self.arcs.push(ArcData {
            nodes: [u, v],
            capacity,
        });
        self.nodes[u].1[0].push(eid);
        self.nodes[v].1[1].push(eid | 1);
        Ok(Arc(eid >> 1))
    }

    /// Turn the builder into a network with the given terminals.
    pub fn into_network(self, source: &str, sink: &str) -> Result<Network<F>, ValidationError> {
        let src = *self
            .ids
            .get(source)
            .ok_or_else(|| ValidationError::MissingTerminal(source.to_string()))?;
        let snk = *self
            .ids
            .get(sink)
            .ok_or_else(|| ValidationError::MissingTerminal(sink.to_string()))?;
        if src == snk {
            return Err(ValidationError::SameTerminals(source.to_string()));
        }

        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut adj = Vec::with_capacity(self.arcs.len() * 2);

        for (name, [outs, ins]) in self.nodes.into_iter() {
            nodes.push(NodeData {
                name,
                firstout: adj.len(),
                firstin: adj.len() + outs.len(),
            });
            adj.extend(outs);
            adj.extend(ins);
        }

        Ok(Network {
            nodes,
            arcs: self.arcs,
            adj,
            ids: self.ids,
            src,
            snk,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Network, ValidationError};
    use crate::config::GraphConfig;

    #[test]
    fn test_adjacencies() {
        let net = Network::from_config(&GraphConfig::example()).unwrap();
        assert_eq!(net.num_nodes(), 6);
        assert_eq!(net.num_arcs(), 8);
        assert_eq!(net.name(net.source()), "s");
        assert_eq!(net.name(net.sink()), "t");

        let a = net.node("A").unwrap();
        let outs: Vec<_> = net.outarcs(a).map(|(_, v)| net.name(v)).collect();
        let ins: Vec<_> = net.inarcs(a).map(|(_, v)| net.name(v)).collect();
        assert_eq!(outs, vec!["B", "C"]);
        assert_eq!(ins, vec!["s"]);

        let d = net.node("D").unwrap();
        let ins: Vec<_> = net.inarcs(d).map(|(e, _)| net.capacity(e)).collect();
        assert_eq!(ins, vec![110, 120]);

        let e = net.arc("C", "t").unwrap();
        assert_eq!(e.index(), 6);
        assert_eq!(net.tail(e), net.node("C").unwrap());
        assert_eq!(net.head(e), net.sink());
        assert!(net.arc("t", "C").is_none());
    }

    #[test]
    fn test_residual_neighs() {
        let net = Network::new_with("s", "t", |b| {
            b.add_node("s")?;
            b.add_node("t")?;
            b.add_arc("s", "t", 4)?;
            b.add_arc("t", "s", 1)?;
            Ok(())
        })
        .unwrap();
        let neighs = net.residual_neighs();
        assert_eq!(neighs[0], vec![(0, 1), (3, 1)]);
        assert_eq!(neighs[1], vec![(2, 0), (1, 0)]);
    }

    #[test]
    fn test_validation() {
        let mut config = GraphConfig::example();
        config.arcs[2].capacity = -1;
        assert_eq!(
            Network::from_config(&config).unwrap_err(),
            ValidationError::NegativeCapacity {
                tail: "A".to_string(),
                head: "B".to_string()
            }
        );

        let mut config = GraphConfig::example();
        config.nodes.push("A".to_string());
        assert_eq!(
            Network::from_config(&config).unwrap_err(),
            ValidationError::DuplicateNode("A".to_string())
        );

        let mut config = GraphConfig::example();
        config.arcs.push(config.arcs[0].clone());
        assert!(matches!(
            Network::from_config(&config),
            Err(ValidationError::DuplicateArc { .. })
        ));

        let mut config = GraphConfig::example();
        config.sink = "z".to_string();
        assert_eq!(
            Network::from_config(&config).unwrap_err(),
            ValidationError::MissingTerminal("z".to_string())
        );

        let mut config = GraphConfig::example();
        config.sink = "s".to_string();
        assert_eq!(
            Network::from_config(&config).unwrap_err(),
            ValidationError::SameTerminals("s".to_string())
        );

        let err = Network::<i32>::new_with("s", "t", |b| {
            b.add_node("s")?;
            b.add_node("t")?;
            b.add_arc("q", "t", 1)?;
            Ok(())
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "arc q -> t references unknown node 'q'");
    }
}
