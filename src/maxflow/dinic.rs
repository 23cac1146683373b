// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! This module implements Dinic' max flow algorithm
//!
//! # Example
//!
//! ```
//! use rs_flowcut::maxflow::dinic;
//! use rs_flowcut::{GraphConfig, Network};
//!
//! let net = Network::from_config(&GraphConfig::example()).unwrap();
//! let (value, flow, mincut) = dinic(&net);
//!
//! assert_eq!(value, 180);
//! assert!(flow.iter().all(|&(e, f)| f >= 0 && f <= net.capacity(e)));
//!
//! let cut_capacity = net
//!     .arcs()
//!     .filter(|&e| mincut.contains(&net.tail(e)) && !mincut.contains(&net.head(e)))
//!     .map(|e| net.capacity(e))
//!     .sum::<i64>();
//! assert_eq!(value, cut_capacity);
//! ```

use crate::network::{Arc, Network, Node};

use log::{debug, trace};
use std::cmp::min;
use std::collections::VecDeque;

use num_traits::NumAssign;

const NONE: (usize, usize) = (usize::MAX, usize::MAX);

/// The dinic max-flow algorithm.
pub struct Dinic<'a, F> {
    net: &'a Network<F>,
    nodes: Vec<NodeInfo>,
    neighs: Vec<Vec<(usize, usize)>>,
    edges: Vec<EdgeInfo<F>>,
    queue: VecDeque<usize>,
    value: F,
    /// The number of phases (level graphs) of the last run.
    pub cnt_phases: usize,
}

#[derive(Clone)]
struct NodeInfo {
    dist: usize,
    first_lvl: (usize, usize),
}

#[derive(Clone)]
struct EdgeInfo<F> {
    flow: F,
    next_lvl: (usize, usize),
}

impl<'a, F> Dinic<'a, F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create a new Dinic algorithm instance for a network.
    pub fn new(net: &'a Network<F>) -> Self {
        Dinic {
            net,
            nodes: vec![
                NodeInfo {
                    dist: 0,
                    first_lvl: NONE,
                };
                net.num_nodes()
            ],
            neighs: net.residual_neighs(),
            edges: vec![
                EdgeInfo {
                    flow: F::zero(),
                    next_lvl: NONE,
                };
                net.num_arcs() * 2
            ],
            queue: VecDeque::with_capacity(net.num_nodes()),
            value: F::zero(),
            cnt_phases: 0,
        }
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the flow value on arc `e`
    pub fn flow(&self, e: Arc) -> F {
        self.edges[e.index() << 1].flow
    }

    /// Solve the maxflow problem.
    ///
    /// The method solves the max flow problem from the source node to the
    /// sink node of the network with the arc capacities as upper bounds.
    pub fn solve(&mut self) {
        let src = self.net.source().index();
        let snk = self.net.sink().index();

        // initialize network flow of reverse edges
        for (e, einfo) in self.edges.iter_mut().enumerate() {
            einfo.flow = if (e & 1) == 0 {
                F::zero()
            } else {
                self.net.capacity(self.net.id2arc(e >> 1))
            };
        }

        self.value = F::zero();
        self.cnt_phases = 0;
        while self.search(src, snk) {
            let v = self.augment(src, snk, None);
            trace!("phase {} with level of sink {}", self.cnt_phases, self.nodes[snk].dist);
            self.value += v;
            self.cnt_phases += 1;
        }

        debug!(
            "Dinic finished after {} phases on {} nodes and {} arcs",
            self.cnt_phases,
            self.net.num_nodes(),
            self.net.num_arcs()
        );
    }

    /// Return the minimal cut associated with the last maximum flow.
    pub fn mincut(&self) -> Vec<Node> {
        let n = self.net.num_nodes();
        self.net.nodes().filter(|&u| self.nodes[u.index()].dist < n).collect()
    }

    // Build the level graph.
    //
    // Returns `true` if the sink is reachable in the residual network.
    fn search(&mut self, src: usize, snk: usize) -> bool {
        let n = self.net.num_nodes();

        for node in &mut self.nodes {
            node.dist = n;
            node.first_lvl = NONE;
        }
        self.nodes[src].dist = 0;

        self.queue.clear();
        self.queue.push_back(src);

        let mut snk_d = n;
        while let Some(u) = self.queue.pop_front() {
            let d = self.nodes[u].dist;

            if d >= snk_d {
                return true;
            }

            for &(e, v) in &self.neighs[u] {
                if self.edges[e ^ 1].flow > F::zero() {
                    if self.nodes[v].dist == n {
                        self.nodes[v].dist = d + 1;
                        self.queue.push_back(v);
                        if v == snk {
                            snk_d = d + 1
                        }
                    } else if self.nodes[v].dist != d + 1 {
                        continue;
                    }
                    self.edges[e].next_lvl = self.nodes[u].first_lvl;
                    self.nodes[u].first_lvl = (e, v);
                }
            }
        }

        snk_d < n
    }

    // Send a blocking flow from `src` to `snk` along the level graph.
    //
    // `target_flow` is the amount that may arrive at `src`, `None` means
    // unbounded (only for the source node itself).
    fn augment(&mut self, src: usize, snk: usize, target_flow: Option<F>) -> F {
        if src == snk {
            // the sink is never the source, so some amount arrived here
            return target_flow.unwrap_or_else(F::zero);
        }

        let mut df = F::zero();

        loop {
            let (e, v) = self.nodes[src].first_lvl;
            if e == usize::MAX {
                break;
            }
            let f = e ^ 1;
            let rem_cap = match target_flow {
                Some(target_flow) => min(self.edges[f].flow, target_flow - df),
                None => self.edges[f].flow,
            };
            if rem_cap > F::zero() {
                let cf = self.augment(v, snk, Some(rem_cap));
                self.edges[e].flow += cf;
                self.edges[f].flow -= cf;
                df += cf;
                if target_flow.map(|t| df == t).unwrap_or(false) {
                    break;
                }
            }

            // edge is saturated or blocked
            self.nodes[src].first_lvl = self.edges[e].next_lvl;
        }

        if df.is_zero() {
            // nothing can be sent from this node, delete the node and
            // all adjacent edges (we just remove the outgoing edges
            // so that they won't be seen)
            self.nodes[src].first_lvl = NONE;
        }

        df
    }
}

/// Solve the maxflow problem using the algorithm of Dinic.
///
/// The function returns the flow value, the flow on each arc and the
/// nodes in a minimal cut.
pub fn dinic<F>(net: &Network<F>) -> (F, Vec<(Arc, F)>, Vec<Node>)
where
    F: NumAssign + Ord + Copy,
{
    let mut maxflow = Dinic::new(net);
    maxflow.solve();
    (
        maxflow.value(),
        net.arcs().map(|e| (e, maxflow.flow(e))).collect(),
        maxflow.mincut(),
    )
}
