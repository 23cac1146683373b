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

#![forbid(unsafe_code)]

//! Maximum flows and minimum cuts in capacitated networks.
//!
//! A flow problem is given as a [`GraphConfig`] (named nodes and
//! `(tail, head, capacity)` triples), validated into a [`Network`] and
//! solved by a combinatorial max-flow algorithm. The resulting flow and the
//! associated minimum cut are checked against the constraints of the
//! max-flow linear program and the binary min-cut program before they are
//! reported.
//!
//! # Example
//!
//! ```
//! use rs_flowcut::maxflow::Algorithm;
//! use rs_flowcut::{solve, GraphConfig, Network, Status};
//!
//! let net = Network::from_config(&GraphConfig::example()).unwrap();
//! let report = solve(&net, Algorithm::default());
//!
//! assert_eq!(report.flow.status, Status::Optimal);
//! assert_eq!(report.flow.solution.as_ref().unwrap().value(), 180);
//! assert_eq!(report.cut.solution.as_ref().unwrap().capacity(), 180);
//! println!("{}", report);
//! ```

// # Data structures

pub mod config;
pub use self::config::{ArcConfig, GraphConfig};

pub mod network;
pub use self::network::{Arc, Network, NetworkBuilder, Node, ValidationError};

// # Algorithms

pub mod maxflow;
pub mod mincut;

pub mod certificate;

pub mod solve;
pub use self::solve::{max_flow, min_cut, solve, FlowAssignment, Report, Solution, Status};

// # Output

pub mod report;

#[cfg(any(feature = "dimacs"))]
pub mod dimacs;
