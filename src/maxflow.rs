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

//! Maximum flow algorithms.
//!
//! All algorithms work on the residual network: each arc `e` is
//! represented by two residual arcs `e << 1` (forward) and `(e << 1) | 1`
//! (backward). The value stored for a residual arc is the flow on it, the
//! residual capacity of a residual arc is the value stored for its reverse
//! arc.
//!
//! Each algorithm provides a reusable solver struct and a free function
//! returning the flow value, the flow on each arc and the nodes on the
//! source side of a minimum cut.

pub mod dinic;
pub use self::dinic::{dinic, Dinic};

pub mod edmondskarp;
pub use self::edmondskarp::{edmondskarp, EdmondsKarp};

use std::fmt;
use std::str::FromStr;

/// The available max-flow algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Shortest augmenting paths.
    EdmondsKarp,
    /// Blocking flows on level graphs.
    Dinic,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::EdmondsKarp
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::EdmondsKarp => write!(f, "edmondskarp"),
            Algorithm::Dinic => write!(f, "dinic"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "edmondskarp" | "edmonds-karp" | "ek" => Ok(Algorithm::EdmondsKarp),
            "dinic" => Ok(Algorithm::Dinic),
            _ => Err(format!("unknown max-flow algorithm '{}'", s)),
        }
    }
}
