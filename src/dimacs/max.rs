/*
 * Copyright (c) 2021 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! This module implements a read function for the famous DIMACS max
//! flow format. A DIMACS file must look as follows.
//!
//! 1. empty lines are allowed and ignored
//! 2. a line starting with `c` is a comment line and is ignored
//! 3. the first non-comment line must have the form `p max <n> <m>`,
//!    where `<n>` is an integer > 0 denoting the number of nodes and
//!    `<m>` an integer > 0 denoting the number of arcs.
//! 4. after the problem line there must follow exactly two node lines
//!    of the form `n <node> <type>` where `<node>` is the node number
//!    between `1..n` and `<type>` is either `s` (if this is the source
//!    node) or `t` (if this is the sink node).
//! 5. after the node lines there must be exactly `m` arc lines `a <u>
//!    <v> <c>` denoting the source and sink nodes of an arc as well as
//!    the arcs capacity `<c>` (an integer >= 0).
//!
//! Loops are not allowed. The nodes of the resulting configuration are
//! named by their numbers `"1"` to `"<n>"`.

use super::{Error, LineReader, Result};
use crate::config::{ArcConfig, GraphConfig};
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

/// Read a max-flow instance.
pub fn read<R, F>(r: R) -> Result<GraphConfig<F>>
where
    R: Read,
    F: FromStr,
    F::Err: fmt::Display,
{
    let mut reader = LineReader::new(r);

    // Read the problem line.
    let mut pline = reader.expect_line("p")?;
    let problem = pline.str()?;
    if problem != "max" {
        return Err(Error::Format {
            line: pline.line,
            msg: format!("unsupported problem type '{}', expected 'max'", problem),
        });
    }
    let nnodes: usize = pline.number()?;
    let nedges: usize = pline.number()?;
    pline.end()?;

    let mut src = None;
    let mut snk = None;

    for _ in 0..2 {
        let mut nline = reader.expect_line("n")?;
        let u: usize = nline.number()?;
        if u < 1 || u > nnodes {
            return Err(Error::Data {
                line: nline.line,
                msg: format!("invalid node id {} (must be in 1..{})", u, nnodes),
            });
        }
        let what = nline.str()?;
        match what.as_str() {
            "s" => {
                if src.is_some() {
                    return Err(Error::Format {
                        line: nline.line,
                        msg: "duplicate source node".to_string(),
                    });
                }
                src = Some(u);
            }
            "t" => {
                if snk.is_some() {
                    return Err(Error::Format {
                        line: nline.line,
                        msg: "duplicate sink node".to_string(),
                    });
                }
                snk = Some(u);
            }
            _ => {
                return Err(Error::Format {
                    line: nline.line,
                    msg: format!("invalid node type, must be 's' or 't', got: {}", what),
                });
            }
        }
    }

    let mut arcs = Vec::with_capacity(nedges);
    for _ in 0..nedges {
        let mut aline = reader.expect_line("a")?;
        let u: usize = aline.number()?;
        let v: usize = aline.number()?;
        let c: F = aline.number()?;

        if u < 1 || u > nnodes {
            return Err(Error::Data {
                line: aline.line,
                msg: format!("invalid source node id {} (must be in 1..{})", u, nnodes),
            });
        }

        if v < 1 || v > nnodes {
            return Err(Error::Data {
                line: aline.line,
                msg: format!("invalid sink node id {} (must be in 1..{})", v, nnodes),
            });
        }

        if u == v {
            return Err(Error::Data {
                line: aline.line,
                msg: format!("invalid loop ({},{}) in edge", u, u),
            });
        }

        arcs.push(ArcConfig {
            tail: u.to_string(),
            head: v.to_string(),
            capacity: c,
        });
    }

    if let Some(fields) = reader.next_line()? {
        return Err(Error::Format {
            line: fields.line,
            msg: format!(
                "unexpected line at the end of file (expected exactly {} 'a' lines)",
                nedges,
            ),
        });
    }

    let (src, snk) = src.zip(snk).ok_or_else(|| Error::Format {
        line: 0,
        msg: "missing source or sink node".to_string(),
    })?;

    Ok(GraphConfig {
        nodes: (1..=nnodes).map(|u| u.to_string()).collect(),
        arcs,
        source: src.to_string(),
        sink: snk.to_string(),
    })
}

pub fn read_from_file<F>(filename: &str) -> Result<GraphConfig<F>>
where
    F: FromStr,
    F::Err: fmt::Display,
{
    read(std::fs::File::open(filename)?)
}

/// Write a max-flow instance.
///
/// Nodes are numbered by their position in the configuration.
pub fn write<W, F>(mut w: W, config: &GraphConfig<F>) -> Result<()>
where
    W: Write,
    F: fmt::Display,
{
    let id = |name: &str| {
        config
            .nodes
            .iter()
            .position(|u| u == name)
            .map(|i| i + 1)
            .ok_or_else(|| Error::Data {
                line: 0,
                msg: format!("unknown node '{}'", name),
            })
    };

    writeln!(w, "p max {} {}", config.nodes.len(), config.arcs.len())?;
    writeln!(w, "n {} s", id(&config.source)?)?;
    writeln!(w, "n {} t", id(&config.sink)?)?;
    for arc in &config.arcs {
        writeln!(w, "a {} {} {}", id(&arc.tail)?, id(&arc.head)?, arc.capacity)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {

    use crate::config::GraphConfig;
    use crate::dimacs::{self, Error};
    use std::io::{self, Cursor};

    #[test]
    fn parse_file_test() {
        let file = "c this is a test file

p max 6 9
n 5 s
n 6 t

c there might be empty lines

a 5 1 10
a 5 2 10
a 1 2 2
a 1 3 4
a 1 4 8
a 2 4 9
a 3 6 10
a 4 3 6
a 4 6 10

c end of the file
";
        let config: GraphConfig<u32> = dimacs::max::read(io::Cursor::new(file)).unwrap();

        assert_eq!(config.nodes, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(config.arcs.len(), 9);
        assert_eq!(config.source, "5");
        assert_eq!(config.sink, "6");

        let mut arcs: Vec<_> = config
            .arcs
            .iter()
            .map(|a| (a.tail.parse::<usize>().unwrap(), a.head.parse::<usize>().unwrap(), a.capacity))
            .collect();

        arcs.sort();

        assert_eq!(
            arcs,
            vec![
                (1, 2, 2),
                (1, 3, 4),
                (1, 4, 8),
                (2, 4, 9),
                (3, 6, 10),
                (4, 3, 6),
                (4, 6, 10),
                (5, 1, 10),
                (5, 2, 10),
            ]
        );
    }

    #[test]
    fn parse_errors() {
        let loop_file = "p max 2 1\nn 1 s\nn 2 t\na 1 1 3\n";
        match dimacs::max::read::<_, u32>(Cursor::new(loop_file)) {
            Err(Error::Data { line: 4, .. }) => (),
            _ => panic!("expected data error"),
        }

        let short_file = "p max 2 2\nn 1 s\nn 2 t\na 1 2 3\n";
        match dimacs::max::read::<_, u32>(Cursor::new(short_file)) {
            Err(Error::Format { .. }) => (),
            _ => panic!("expected format error"),
        }

        let dup_file = "p max 2 1\nn 1 s\nn 2 s\na 1 2 3\n";
        match dimacs::max::read::<_, u32>(Cursor::new(dup_file)) {
            Err(Error::Format { line: 3, .. }) => (),
            _ => panic!("expected format error"),
        }

        let min_file = "c min cost flow\np min 2 1\nn 1 s\nn 2 t\na 1 2 3\n";
        match dimacs::max::read::<_, u32>(Cursor::new(min_file)) {
            Err(Error::Format { line: 2, msg }) => assert!(msg.contains("'min'")),
            _ => panic!("expected format error"),
        }

        let long_pline = "p max 2 1 7\nn 1 s\nn 2 t\na 1 2 3\n";
        match dimacs::max::read::<_, u32>(Cursor::new(long_pline)) {
            Err(Error::Format { line: 1, .. }) => (),
            _ => panic!("expected format error"),
        }
    }

    #[test]
    fn write_test_file() {
        let config = GraphConfig::new(
            vec!["a", "b", "c", "d"],
            vec![("a", "b", 4), ("a", "c", 2), ("b", "c", 2), ("b", "d", 3), ("c", "d", 5)],
        )
        .with_terminals("a", "d");

        let mut buf = Cursor::new(Vec::new());
        dimacs::max::write(&mut buf, &config).unwrap();

        assert_eq!(
            String::from_utf8(buf.into_inner()).unwrap(),
            "p max 4 5
n 1 s
n 4 t
a 1 2 4
a 1 3 2
a 2 3 2
a 2 4 3
a 3 4 5
"
        );
    }
}
