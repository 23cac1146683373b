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

//! Feasibility checks of flow and cut assignments.
//!
//! A flow assignment is checked against the constraints of the max-flow
//! linear program:
//!
//! - `0 <= flow(e) <= capacity(e)` for each arc `e`,
//! - inflow equals outflow at each node except source and sink,
//! - the flow value is the net outflow of the source.
//!
//! A cut assignment is checked against the covering inequalities of the
//! binary cut program. With the sides of the terminals fixed to
//! `side(source) = 1` and `side(sink) = 0` a single inequality
//!
//! ```text
//!     remove(i, j) + side(j) - side(i) >= 0
//! ```
//!
//! per arc `(i, j)` covers all cases: it reads `remove(s, j) + side(j) >= 1`
//! for arcs leaving the source, `remove(i, t) - side(i) >= 0` for arcs
//! entering the sink and requires a direct arc `(s, t)` to be removed.

use crate::mincut::CutAssignment;
use crate::network::{Arc, Network, Node};
use crate::solve::FlowAssignment;

use num_traits::Zero;
use thiserror::Error;

use std::ops::{AddAssign, Sub};

/// A violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("expected {expected} values, got {got}")]
    Length { expected: usize, got: usize },
    #[error("negative flow on arc {tail} -> {head}")]
    NegativeFlow { tail: String, head: String },
    #[error("flow exceeds the capacity of arc {tail} -> {head}")]
    Capacity { tail: String, head: String },
    #[error("flow is not conserved at node {0}")]
    Conservation(String),
    #[error("the flow value differs from the net outflow of the source")]
    FlowValue,
    #[error("terminal node {0} is on the wrong side of the cut")]
    Terminal(String),
    #[error("arc {tail} -> {head} connects both sides of the cut but is not removed")]
    Cover { tail: String, head: String },
    #[error("the cut capacity differs from the capacity of the removed arcs")]
    CutCapacity,
}

fn arc_names<F: Copy>(net: &Network<F>, e: Arc) -> (String, String) {
    (net.name(net.tail(e)).to_string(), net.name(net.head(e)).to_string())
}

fn net_outflow<F>(net: &Network<F>, flows: &[F], u: Node) -> (F, F)
where
    F: Zero + AddAssign + Copy,
{
    let mut out = F::zero();
    for (e, _) in net.outarcs(u) {
        out += flows[e.index()];
    }
    let mut inflow = F::zero();
    for (e, _) in net.inarcs(u) {
        inflow += flows[e.index()];
    }
    (out, inflow)
}

/// Check a flow assignment for feasibility.
pub fn check_flow<F>(net: &Network<F>, flow: &FlowAssignment<F>) -> Result<(), Violation>
where
    F: Zero + AddAssign + Sub<Output = F> + PartialOrd + Copy,
{
    let flows = flow.flows();
    if flows.len() != net.num_arcs() {
        return Err(Violation::Length {
            expected: net.num_arcs(),
            got: flows.len(),
        });
    }

    for e in net.arcs() {
        let f = flows[e.index()];
        if f < F::zero() {
            let (tail, head) = arc_names(net, e);
            return Err(Violation::NegativeFlow { tail, head });
        }
        if f > net.capacity(e) {
            let (tail, head) = arc_names(net, e);
            return Err(Violation::Capacity { tail, head });
        }
    }

    for u in net.nodes().filter(|&u| !net.is_terminal(u)) {
        let (out, inflow) = net_outflow(net, flows, u);
        if out != inflow {
            return Err(Violation::Conservation(net.name(u).to_string()));
        }
    }

    let (out, inflow) = net_outflow(net, flows, net.source());
    if out - inflow != flow.value() {
        return Err(Violation::FlowValue);
    }

    Ok(())
}

/// Check a cut assignment for feasibility.
pub fn check_cut<F>(net: &Network<F>, cut: &CutAssignment<F>) -> Result<(), Violation>
where
    F: Zero + AddAssign + PartialEq + Copy,
{
    if cut.remove().len() != net.num_arcs() {
        return Err(Violation::Length {
            expected: net.num_arcs(),
            got: cut.remove().len(),
        });
    }
    if cut.side().len() != net.num_nodes() {
        return Err(Violation::Length {
            expected: net.num_nodes(),
            got: cut.side().len(),
        });
    }

    // the terminals have fixed sides
    if !cut.is_source_side(net.source()) {
        return Err(Violation::Terminal(net.name(net.source()).to_string()));
    }
    if cut.is_source_side(net.sink()) {
        return Err(Violation::Terminal(net.name(net.sink()).to_string()));
    }

    let mut capacity = F::zero();
    for e in net.arcs() {
        let remove = cut.is_removed(e) as i32;
        let side_tail = cut.is_source_side(net.tail(e)) as i32;
        let side_head = cut.is_source_side(net.head(e)) as i32;
        if remove + side_head - side_tail < 0 {
            let (tail, head) = arc_names(net, e);
            return Err(Violation::Cover { tail, head });
        }
        if cut.is_removed(e) {
            capacity += net.capacity(e);
        }
    }

    if capacity != cut.capacity() {
        return Err(Violation::CutCapacity);
    }

    Ok(())
}
