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

//! Solving max-flow and min-cut problems with explicit status.
//!
//! The functions in this module run a max-flow algorithm, turn its result
//! into a [`FlowAssignment`] and a [`CutAssignment`] and check both against
//! the constraints of their formulations (see [`certificate`]). Finally the
//! flow value is compared with the cut capacity. Only if all checks pass
//! the status is [`Status::Optimal`].
//!
//! # Example
//!
//! ```
//! use rs_flowcut::maxflow::Algorithm;
//! use rs_flowcut::{max_flow, min_cut, GraphConfig, Network, Status};
//!
//! let net = Network::from_config(&GraphConfig::example()).unwrap();
//!
//! let flow = max_flow(&net, Algorithm::EdmondsKarp);
//! assert_eq!(flow.status, Status::Optimal);
//! assert_eq!(flow.solution.unwrap().value(), 180);
//!
//! let cut = min_cut(&net, Algorithm::Dinic);
//! assert_eq!(cut.status, Status::Optimal);
//! assert_eq!(cut.solution.unwrap().capacity(), 180);
//! ```
//!
//! [`certificate`]: crate::certificate

use crate::certificate::{check_cut, check_flow};
use crate::maxflow::{dinic, edmondskarp, Algorithm};
use crate::mincut::CutAssignment;
use crate::network::{Arc, Network, Node};

use log::{info, warn};
use num_traits::{CheckedAdd, NumAssign};

use std::fmt;

/// The terminal status of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// An optimal solution has been found and verified.
    Optimal,
    /// The computed solution violates a constraint.
    Infeasible,
    /// The flow value cannot be represented by the capacity type.
    Unbounded,
    /// Flow value and cut capacity differ.
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Status::Optimal => "optimal",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
            Status::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// The result of a solve.
///
/// `solution` is `Some` if and only if `status` is [`Status::Optimal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<T> {
    pub status: Status,
    pub solution: Option<T>,
}

impl<T> Solution<T> {
    fn optimal(solution: T) -> Self {
        Solution {
            status: Status::Optimal,
            solution: Some(solution),
        }
    }

    fn failed(status: Status) -> Self {
        debug_assert_ne!(status, Status::Optimal);
        Solution { status, solution: None }
    }

    /// Return `true` if the solve was successful.
    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }
}

/// A flow value on each arc together with the total flow value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowAssignment<F> {
    value: F,
    flows: Vec<F>,
}

impl<F> FlowAssignment<F>
where
    F: Copy,
{
    /// Create a flow assignment.
    ///
    /// `flows[i]` is the flow on the `i`-th arc. The assignment is not
    /// checked, see [`check_flow`](crate::certificate::check_flow).
    pub fn new(value: F, flows: Vec<F>) -> Self {
        FlowAssignment { value, flows }
    }

    /// Return the total flow value.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the flow on each arc in declaration order.
    pub fn flows(&self) -> &[F] {
        &self.flows
    }

    /// Return the flow on arc `e`.
    pub fn flow(&self, e: Arc) -> F {
        self.flows[e.index()]
    }
}

/// Maximum flow and minimum cut of a network.
pub struct Report<'a, F> {
    pub network: &'a Network<F>,
    pub flow: Solution<FlowAssignment<F>>,
    pub cut: Solution<CutAssignment<F>>,
}

// Sum of capacities along some adjacency, `None` on overflow.
fn total_capacity<F, I>(net: &Network<F>, arcs: I) -> Option<F>
where
    F: NumAssign + CheckedAdd + Copy,
    I: Iterator<Item = (Arc, Node)>,
{
    arcs.fold(Some(F::zero()), |sum, (e, _)| sum?.checked_add(&net.capacity(e)))
}

// The flow value is bounded by both the capacity leaving the source and the
// capacity entering the sink. If one of them is representable, so is every
// flow value and every intermediate sum of the algorithms.
fn is_representable<F>(net: &Network<F>) -> bool
where
    F: NumAssign + CheckedAdd + Copy,
{
    total_capacity(net, net.outarcs(net.source())).is_some()
        || total_capacity(net, net.inarcs(net.sink())).is_some()
}

/// Solve the max-flow and the min-cut problem of a network.
///
/// Both problems are solved by one run of the given max-flow algorithm.
pub fn solve<F>(net: &Network<F>, algorithm: Algorithm) -> Report<F>
where
    F: NumAssign + CheckedAdd + Ord + Copy + fmt::Display,
{
    if !is_representable(net) {
        warn!("capacities at source and sink overflow, flow value not representable");
        return Report {
            network: net,
            flow: Solution::failed(Status::Unbounded),
            cut: Solution::failed(Status::Unbounded),
        };
    }

    let (value, flows, source_side) = match algorithm {
        Algorithm::EdmondsKarp => edmondskarp(net),
        Algorithm::Dinic => dinic(net),
    };

    let flow = FlowAssignment::new(value, flows.into_iter().map(|(_, f)| f).collect());
    let cut = CutAssignment::from_source_side(net, &source_side);

    let flow = match check_flow(net, &flow) {
        Ok(()) => Solution::optimal(flow),
        Err(err) => {
            warn!("infeasible flow: {}", err);
            Solution::failed(Status::Infeasible)
        }
    };
    let cut = match check_cut(net, &cut) {
        Ok(()) => Solution::optimal(cut),
        Err(err) => {
            warn!("infeasible cut: {}", err);
            Solution::failed(Status::Infeasible)
        }
    };

    let (flow, cut) = match (flow.solution, cut.solution) {
        (Some(flow), Some(cut)) if flow.value() != cut.capacity() => {
            warn!(
                "flow value {} differs from cut capacity {}",
                flow.value(),
                cut.capacity()
            );
            (Solution::failed(Status::Error), Solution::failed(Status::Error))
        }
        (flow_solution, cut_solution) => (
            Solution {
                status: flow.status,
                solution: flow_solution,
            },
            Solution {
                status: cut.status,
                solution: cut_solution,
            },
        ),
    };

    info!(
        "{} on {} nodes and {} arcs: flow {}, cut {}",
        algorithm,
        net.num_nodes(),
        net.num_arcs(),
        flow.status,
        cut.status
    );

    Report {
        network: net,
        flow,
        cut,
    }
}

/// Compute a maximum flow.
pub fn max_flow<F>(net: &Network<F>, algorithm: Algorithm) -> Solution<FlowAssignment<F>>
where
    F: NumAssign + CheckedAdd + Ord + Copy + fmt::Display,
{
    solve(net, algorithm).flow
}

/// Compute a minimum cut.
pub fn min_cut<F>(net: &Network<F>, algorithm: Algorithm) -> Solution<CutAssignment<F>>
where
    F: NumAssign + CheckedAdd + Ord + Copy + fmt::Display,
{
    solve(net, algorithm).cut
}

#[cfg(test)]
mod tests {
    use super::{max_flow, min_cut, solve, Status};
    use crate::maxflow::Algorithm;
    use crate::{GraphConfig, Network};

    const ALGORITHMS: &[Algorithm] = &[Algorithm::EdmondsKarp, Algorithm::Dinic];

    #[test]
    fn test_example() {
        let net = Network::from_config(&GraphConfig::example()).unwrap();
        for &alg in ALGORITHMS {
            let report = solve(&net, alg);
            assert_eq!(report.flow.status, Status::Optimal);
            assert_eq!(report.cut.status, Status::Optimal);
            let flow = report.flow.solution.unwrap();
            let cut = report.cut.solution.unwrap();
            assert_eq!(flow.value(), 180);
            assert_eq!(cut.capacity(), 180);
            // only two arcs can carry flow into the sink
            assert_eq!(flow.flow(net.arc("C", "t").unwrap()), 90);
            assert_eq!(flow.flow(net.arc("D", "t").unwrap()), 90);
        }
    }

    #[test]
    fn test_unbounded() {
        let net = Network::new_with("s", "t", |b| {
            for u in &["s", "a", "b", "t"] {
                b.add_node(u)?;
            }
            b.add_arc("s", "a", 200u8)?;
            b.add_arc("s", "b", 200)?;
            b.add_arc("a", "t", 200)?;
            b.add_arc("b", "t", 200)?;
            Ok(())
        })
        .unwrap();
        let flow = max_flow(&net, Algorithm::EdmondsKarp);
        assert_eq!(flow.status, Status::Unbounded);
        assert!(flow.solution.is_none());
        assert_eq!(min_cut(&net, Algorithm::Dinic).status, Status::Unbounded);
    }

    #[test]
    fn test_source_capacity_overflow() {
        let net = Network::new_with("s", "t", |b| {
            for u in &["s", "a", "t"] {
                b.add_node(u)?;
            }
            b.add_arc("s", "a", u8::MAX)?;
            b.add_arc("s", "t", 1)?;
            b.add_arc("a", "t", 1)?;
            Ok(())
        })
        .unwrap();
        for &alg in ALGORITHMS {
            let report = solve(&net, alg);
            assert_eq!(report.flow.status, Status::Optimal);
            assert_eq!(report.cut.status, Status::Optimal);
            assert_eq!(report.flow.solution.unwrap().value(), 2);
            assert_eq!(report.cut.solution.unwrap().capacity(), 2);
        }
    }

    #[test]
    fn test_sink_capacity_overflow() {
        let net = Network::new_with("s", "t", |b| {
            for u in &["s", "a", "b", "t"] {
                b.add_node(u)?;
            }
            b.add_arc("s", "a", 3u8)?;
            b.add_arc("a", "b", 250)?;
            b.add_arc("a", "t", 250)?;
            b.add_arc("b", "t", 250)?;
            Ok(())
        })
        .unwrap();
        let flow = max_flow(&net, Algorithm::Dinic);
        assert!(flow.is_optimal());
        assert_eq!(flow.solution.unwrap().value(), 3);
    }

    #[test]
    fn test_disconnected() {
        let mut config = GraphConfig::example();
        config.nodes.push("X".to_string());
        let net = Network::from_config(&config).unwrap();
        for &alg in ALGORITHMS {
            let flow = max_flow(&net, alg);
            assert!(flow.is_optimal());
            assert_eq!(flow.solution.unwrap().value(), 180);
            let cut = min_cut(&net, alg).solution.unwrap();
            assert!(!cut.is_source_side(net.node("X").unwrap()));
        }
    }

    #[test]
    fn test_no_path() {
        let net = Network::new_with("s", "t", |b| {
            for u in &["s", "a", "t"] {
                b.add_node(u)?;
            }
            b.add_arc("s", "a", 7)?;
            b.add_arc("t", "a", 7)?;
            Ok(())
        })
        .unwrap();
        let report = solve(&net, Algorithm::Dinic);
        assert_eq!(report.flow.solution.unwrap().value(), 0);
        let cut = report.cut.solution.unwrap();
        assert_eq!(cut.capacity(), 0);
        assert_eq!(cut.removed_arcs().count(), 0);
    }
}
