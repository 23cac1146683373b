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

//! Minimum cuts derived from maximum flows.
//!
//! A cut is represented as in the binary cut program: a `remove` decision
//! for every arc and a `side` indicator for every node, `true` meaning the
//! node is still reachable from the source after the removed arcs have been
//! deleted.
//!
//! The cut computed from a maximum flow consists of the arcs leaving the
//! source side of the residual network. Arcs of capacity zero that are not
//! needed to separate the sink from the source are dropped again, so the
//! resulting arc set is minimal with respect to inclusion.
//!
//! # Example
//!
//! ```
//! use rs_flowcut::maxflow::edmondskarp;
//! use rs_flowcut::mincut::{disconnects, is_minimal, CutAssignment};
//! use rs_flowcut::{GraphConfig, Network};
//!
//! let net = Network::from_config(&GraphConfig::example()).unwrap();
//! let (value, _, source_side) = edmondskarp(&net);
//! let cut = CutAssignment::from_source_side(&net, &source_side);
//!
//! assert_eq!(cut.capacity(), value);
//! assert!(disconnects(&net, cut.remove()));
//! assert!(is_minimal(&net, cut.remove()));
//!
//! let arcs: Vec<_> = cut
//!     .removed_arcs()
//!     .map(|e| (net.name(net.tail(e)), net.name(net.head(e))))
//!     .collect();
//! assert_eq!(arcs, vec![("A", "C"), ("D", "t")]);
//! ```

use crate::network::{Arc, Network, Node};

use log::debug;
use num_traits::Zero;

use std::collections::VecDeque;
use std::ops::AddAssign;

/// A cut given by removed arcs and node sides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutAssignment<F> {
    capacity: F,
    remove: Vec<bool>,
    side: Vec<bool>,
}

impl<F> CutAssignment<F>
where
    F: Zero + AddAssign + Copy,
{
    /// Create a cut assignment from explicit decisions.
    ///
    /// The capacity is computed from the removed arcs. The assignment is not
    /// checked, see [`check_cut`](crate::certificate::check_cut).
    pub fn new(net: &Network<F>, remove: Vec<bool>, side: Vec<bool>) -> Self {
        let mut capacity = F::zero();
        for e in net.arcs() {
            if remove.get(e.index()).cloned().unwrap_or(false) {
                capacity += net.capacity(e);
            }
        }
        CutAssignment { capacity, remove, side }
    }

    /// Create the cut associated with the source side of a maximum flow.
    ///
    /// `source_side` are the nodes reachable from the source in the residual
    /// network, as returned by the max-flow algorithms.
    pub fn from_source_side(net: &Network<F>, source_side: &[Node]) -> Self {
        let mut in_source_side = vec![false; net.num_nodes()];
        for &u in source_side {
            in_source_side[u.index()] = true;
        }

        let mut remove: Vec<bool> = net
            .arcs()
            .map(|e| in_source_side[net.tail(e).index()] && !in_source_side[net.head(e).index()])
            .collect();

        // Only arcs without capacity can be superfluous in a minimum cut.
        let mut dropped = 0;
        for e in net.arcs() {
            if remove[e.index()] && net.capacity(e).is_zero() {
                remove[e.index()] = false;
                if !disconnects(net, &remove) {
                    remove[e.index()] = true;
                } else {
                    dropped += 1;
                }
            }
        }
        if dropped > 0 {
            debug!("dropped {} superfluous arcs of capacity zero from the cut", dropped);
        }

        let side = reachable(net, &remove);
        CutAssignment::new(net, remove, side)
    }
}

impl<F> CutAssignment<F>
where
    F: Copy,
{
    /// Return the total capacity of the removed arcs.
    pub fn capacity(&self) -> F {
        self.capacity
    }

    /// Return the remove decision of each arc.
    pub fn remove(&self) -> &[bool] {
        &self.remove
    }

    /// Return the side indicator of each node.
    pub fn side(&self) -> &[bool] {
        &self.side
    }

    /// Return `true` if arc `e` is removed.
    pub fn is_removed(&self, e: Arc) -> bool {
        self.remove[e.index()]
    }

    /// Return `true` if node `u` is on the source side.
    pub fn is_source_side(&self, u: Node) -> bool {
        self.side[u.index()]
    }

    /// Return an iterator over the removed arcs in declaration order.
    pub fn removed_arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        self.remove
            .iter()
            .enumerate()
            .filter(|&(_, &r)| r)
            .map(|(i, _)| Arc::from_index(i))
    }
}

/// Return the nodes reachable from the source if the removed arcs are deleted.
///
/// `removed[e]` tells whether arc `e` is deleted, missing entries count as
/// not deleted.
pub fn reachable<F>(net: &Network<F>, removed: &[bool]) -> Vec<bool>
where
    F: Copy,
{
    let mut seen = vec![false; net.num_nodes()];
    let mut queue = VecDeque::with_capacity(net.num_nodes());
    let src = net.source();
    seen[src.index()] = true;
    queue.push_back(src);
    while let Some(u) = queue.pop_front() {
        for (e, v) in net.outarcs(u) {
            if !seen[v.index()] && !removed.get(e.index()).cloned().unwrap_or(false) {
                seen[v.index()] = true;
                queue.push_back(v);
            }
        }
    }
    seen
}

/// Return `true` if deleting the removed arcs separates the sink from the source.
pub fn disconnects<F>(net: &Network<F>, removed: &[bool]) -> bool
where
    F: Copy,
{
    !reachable(net, removed)[net.sink().index()]
}

/// Return `true` if the removed arcs form a minimal separating arc set.
///
/// The removed arcs must separate the sink from the source and putting back
/// any single one of them must reconnect the sink.
pub fn is_minimal<F>(net: &Network<F>, removed: &[bool]) -> bool
where
    F: Copy,
{
    if !disconnects(net, removed) {
        return false;
    }
    let mut removed = removed.to_vec();
    for i in 0..removed.len() {
        if removed[i] {
            removed[i] = false;
            let still_disconnected = disconnects(net, &removed);
            removed[i] = true;
            if still_disconnected {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{disconnects, is_minimal, CutAssignment};
    use crate::maxflow::{dinic, edmondskarp};
    use crate::Network;

    fn zero_arc_network() -> Network<u32> {
        Network::new_with("s", "t", |b| {
            for u in &["s", "a", "b", "t"] {
                b.add_node(u)?;
            }
            b.add_arc("s", "a", 3)?;
            b.add_arc("a", "t", 2)?;
            // a dead end, needs not be cut
            b.add_arc("s", "b", 0)?;
            Ok(())
        })
        .unwrap()
    }

    #[test]
    fn test_zero_capacity_dead_end() {
        let net = zero_arc_network();
        let (value, flow, source_side) = edmondskarp(&net);
        assert_eq!(value, 2);
        assert_eq!(flow[2].1, 0);

        let cut = CutAssignment::from_source_side(&net, &source_side);
        assert_eq!(cut.capacity(), 2);
        assert_eq!(cut.remove(), &[false, true, false]);
        assert!(is_minimal(&net, cut.remove()));
        // b is still reachable after the cut
        assert_eq!(cut.side(), &[true, true, true, false]);
    }

    #[test]
    fn test_zero_capacity_required() {
        let net = Network::new_with("s", "t", |b| {
            for u in &["s", "a", "t"] {
                b.add_node(u)?;
            }
            b.add_arc("s", "a", 0)?;
            b.add_arc("a", "t", 4)?;
            Ok(())
        })
        .unwrap();
        let (value, _, source_side) = dinic(&net);
        assert_eq!(value, 0);
        let cut = CutAssignment::from_source_side(&net, &source_side);
        assert_eq!(cut.capacity(), 0);
        assert_eq!(cut.remove(), &[true, false]);
        assert!(is_minimal(&net, cut.remove()));
    }

    #[test]
    fn test_not_minimal() {
        let net = zero_arc_network();
        assert!(!disconnects(&net, &[false, false, false]));
        assert!(disconnects(&net, &[true, true, false]));
        assert!(!is_minimal(&net, &[true, true, false]));
        assert!(is_minimal(&net, &[true, false, false]));
    }
}
