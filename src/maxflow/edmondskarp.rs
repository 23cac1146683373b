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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! # Example
//!
//! ```
//! use rs_flowcut::maxflow::edmondskarp;
//! use rs_flowcut::Network;
//!
//! let net = Network::new_with("s", "t", |b| {
//!     for u in &["s", "a", "b", "c", "d", "t"] {
//!         b.add_node(u)?;
//!     }
//!     b.add_arc("s", "a", 5)?;
//!     b.add_arc("s", "c", 5)?;
//!     b.add_arc("a", "b", 2)?;
//!     b.add_arc("a", "c", 1)?;
//!     b.add_arc("a", "d", 1)?;
//!     b.add_arc("c", "d", 2)?;
//!     b.add_arc("d", "b", 2)?;
//!     b.add_arc("b", "t", 4)?;
//!     b.add_arc("d", "t", 5)?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! let (value, flow, mut mincut) = edmondskarp(&net);
//!
//! assert_eq!(value, 5);
//! assert!(flow.iter().all(|&(e, f)| f >= 0 && f <= net.capacity(e)));
//! assert!(net.nodes().filter(|&u| !net.is_terminal(u)).all(|u| {
//!     net.outarcs(u).map(|(e, _)| flow[e.index()].1).sum::<i32>() ==
//!     net.inarcs(u).map(|(e, _)| flow[e.index()].1).sum::<i32>()
//! }));
//!
//! mincut.sort();
//! let names: Vec<_> = mincut.into_iter().map(|u| net.name(u)).collect();
//! assert_eq!(names, vec!["s", "a", "c"]);
//! ```

use crate::network::{Arc, Network, Node};

use log::{debug, trace};
use std::cmp::min;
use std::collections::VecDeque;

use num_traits::NumAssign;

const UNREACHED: (usize, usize) = (usize::MAX, usize::MAX);

/// Max-flow algorithm of Edmonds and Karp.
pub struct EdmondsKarp<'a, F> {
    net: &'a Network<F>,
    neighs: Vec<Vec<(usize, usize)>>,
    pred: Vec<(usize, usize)>,
    flow: Vec<F>,
    queue: VecDeque<usize>,
    value: F,
    /// The number of augmenting paths of the last run.
    pub cnt_augment: usize,
}

impl<'a, F> EdmondsKarp<'a, F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create a new Edmonds-Karp algorithm instance for a network.
    pub fn new(net: &'a Network<F>) -> Self {
        EdmondsKarp {
            net,
            neighs: net.residual_neighs(),
            pred: vec![UNREACHED; net.num_nodes()],
            flow: vec![F::zero(); net.num_arcs() * 2],
            queue: VecDeque::with_capacity(net.num_nodes()),
            value: F::zero(),
            cnt_augment: 0,
        }
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the flow value on arc `e`
    pub fn flow(&self, e: Arc) -> F {
        self.flow[e.index() << 1]
    }

    /// Solve the maxflow problem from the network's source to its sink.
    pub fn solve(&mut self) {
        let src = self.net.source().index();
        let snk = self.net.sink().index();

        // initialize network flow
        for (e, flw) in self.flow.iter_mut().enumerate() {
            *flw = if (e & 1) == 0 {
                F::zero()
            } else {
                self.net.capacity(self.net.id2arc(e >> 1))
            };
        }
        self.value = F::zero();
        self.cnt_augment = 0;

        loop {
            // do bfs from source to sink
            self.pred.fill(UNREACHED);

            // just some dummy edge
            self.pred[src] = (0, 0);
            self.queue.clear();
            self.queue.push_back(src);
            'bfs: while let Some(u) = self.queue.pop_front() {
                for &(e, v) in &self.neighs[u] {
                    if self.pred[v] == UNREACHED && !self.flow[e ^ 1].is_zero() {
                        self.pred[v] = (e, u);
                        self.queue.push_back(v);
                        if v == snk {
                            break 'bfs;
                        }
                    }
                }
            }

            // sink cannot be reached -> stop
            if self.pred[snk] == UNREACHED {
                break;
            }

            // compute augmentation value
            let mut v = snk;
            let mut df = self.flow[self.pred[v].0 ^ 1];
            let mut len = 0;
            while v != src {
                let (e, u) = self.pred[v];
                df = min(df, self.flow[e ^ 1]);
                v = u;
                len += 1;
            }

            debug_assert!(!df.is_zero());

            // now augment the flow
            let mut v = snk;
            while v != src {
                let (e, u) = self.pred[v];
                self.flow[e] += df;
                self.flow[e ^ 1] -= df;
                v = u;
            }

            trace!("augmenting path of length {}", len);
            self.value += df;
            self.cnt_augment += 1;
        }

        debug!(
            "Edmonds-Karp finished after {} augmentations on {} nodes and {} arcs",
            self.cnt_augment,
            self.net.num_nodes(),
            self.net.num_arcs()
        );
    }

    /// Return the minimal cut associated with the last maximum flow.
    ///
    /// These are the nodes reachable from the source in the residual network,
    /// i.e. the source side of the cut.
    pub fn mincut(&self) -> Vec<Node> {
        self.net.nodes().filter(|&u| self.pred[u.index()] != UNREACHED).collect()
    }
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// The function solves the max flow problem from the source node to the
/// sink node of the network with the arc capacities as upper bounds.
///
/// The function returns the flow value, the flow on each arc and the
/// nodes in a minimal cut.
pub fn edmondskarp<F>(net: &Network<F>) -> (F, Vec<(Arc, F)>, Vec<Node>)
where
    F: NumAssign + Ord + Copy,
{
    let mut maxflow = EdmondsKarp::new(net);
    maxflow.solve();
    (
        maxflow.value(),
        net.arcs().map(|e| (e, maxflow.flow(e))).collect(),
        maxflow.mincut(),
    )
}

#[cfg(test)]
mod tests {
    use super::{edmondskarp, EdmondsKarp};
    use crate::{GraphConfig, Network};

    #[test]
    fn test_example() {
        let net = Network::from_config(&GraphConfig::example()).unwrap();
        let (value, flow, mut mincut) = edmondskarp(&net);
        assert_eq!(value, 180);
        assert!(flow.iter().all(|&(e, f)| 0 <= f && f <= net.capacity(e)));
        mincut.sort();
        let names: Vec<_> = mincut.into_iter().map(|u| net.name(u)).collect();
        assert_eq!(names, vec!["s", "A", "B", "D"]);
    }

    #[test]
    fn test_resolve() {
        let net = Network::from_config(&GraphConfig::example()).unwrap();
        let mut ek = EdmondsKarp::new(&net);
        ek.solve();
        let first: Vec<_> = net.arcs().map(|e| ek.flow(e)).collect();
        ek.solve();
        let second: Vec<_> = net.arcs().map(|e| ek.flow(e)).collect();
        assert_eq!(ek.value(), 180);
        assert_eq!(first, second);
        assert!(ek.cnt_augment > 0);
    }

    #[test]
    fn test_no_arcs() {
        let net = Network::<u32>::new_with("s", "t", |b| {
            b.add_node("s")?;
            b.add_node("t")?;
            Ok(())
        })
        .unwrap();
        let (value, flow, mincut) = edmondskarp(&net);
        assert_eq!(value, 0);
        assert!(flow.is_empty());
        assert_eq!(mincut, vec![net.source()]);
    }
}
