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

//! Text output of flows and cuts.
//!
//! # Example
//!
//! ```
//! use rs_flowcut::maxflow::Algorithm;
//! use rs_flowcut::{solve, GraphConfig, Network};
//!
//! let net = Network::from_config(&GraphConfig::example()).unwrap();
//! let report = solve(&net, Algorithm::EdmondsKarp);
//! let text = report.to_string();
//!
//! assert!(text.starts_with("Optimal flows\n"));
//! assert!(text.ends_with("Optimal cuts\nA -> C: 90\nD -> t: 90\n"));
//! ```

use crate::mincut::CutAssignment;
use crate::network::{Arc, Network};
use crate::solve::{FlowAssignment, Report, Solution};

use num_traits::Zero;

use std::fmt;
use std::io::{self, Write};

fn write_arc<F: Copy>(f: &mut fmt::Formatter, net: &Network<F>, e: Arc, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "{} -> {}: {}", net.name(net.tail(e)), net.name(net.head(e)), value)
}

fn fmt_flow<F>(f: &mut fmt::Formatter, net: &Network<F>, flow: &Solution<FlowAssignment<F>>) -> fmt::Result
where
    F: Zero + PartialOrd + Copy + fmt::Display,
{
    match &flow.solution {
        Some(flow) => {
            writeln!(f, "Optimal flows")?;
            for e in net.arcs().filter(|&e| flow.flow(e) > F::zero()) {
                write_arc(f, net, e, flow.flow(e))?;
            }
            Ok(())
        }
        None => writeln!(f, "No optimal flow: {}", flow.status),
    }
}

fn fmt_cut<F>(f: &mut fmt::Formatter, net: &Network<F>, cut: &Solution<CutAssignment<F>>) -> fmt::Result
where
    F: Copy + fmt::Display,
{
    match &cut.solution {
        Some(cut) => {
            writeln!(f, "Optimal cuts")?;
            for e in cut.removed_arcs() {
                write_arc(f, net, e, net.capacity(e))?;
            }
            Ok(())
        }
        None => writeln!(f, "No optimal cut: {}", cut.status),
    }
}

impl<'a, F> fmt::Display for Report<'a, F>
where
    F: Zero + PartialOrd + Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_flow(f, self.network, &self.flow)?;
        writeln!(f)?;
        fmt_cut(f, self.network, &self.cut)
    }
}

/// Write a report.
pub fn write<W, F>(mut w: W, report: &Report<F>) -> io::Result<()>
where
    W: Write,
    F: Zero + PartialOrd + Copy + fmt::Display,
{
    write!(w, "{}", report)
}

#[cfg(test)]
mod tests {
    use crate::maxflow::Algorithm;
    use crate::solve::{Solution, Status};
    use crate::{solve, GraphConfig, Network};
    use std::io::Cursor;

    #[test]
    fn test_write() {
        let net = Network::from_config(&GraphConfig::example()).unwrap();
        let report = solve(&net, Algorithm::Dinic);

        let mut buf = Cursor::new(Vec::new());
        super::write(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf.into_inner()).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Optimal flows");
        assert!(lines.contains(&"C -> t: 90"));
        assert!(lines.contains(&"D -> t: 90"));
        assert!(lines.contains(&"A -> C: 90"));
        assert!(lines.iter().all(|l| !l.ends_with(": 0")));
        assert_eq!(&lines[lines.len() - 4..], &["", "Optimal cuts", "A -> C: 90", "D -> t: 90"]);
    }

    #[test]
    fn test_not_optimal() {
        let net = Network::from_config(&GraphConfig::example()).unwrap();
        let mut report = solve(&net, Algorithm::EdmondsKarp);
        report.flow = Solution {
            status: Status::Infeasible,
            solution: None,
        };
        report.cut = Solution {
            status: Status::Unbounded,
            solution: None,
        };
        assert_eq!(
            report.to_string(),
            "No optimal flow: infeasible\n\nNo optimal cut: unbounded\n"
        );
    }
}
