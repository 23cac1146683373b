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

//! Plain graph data describing a flow problem.
//!
//! A configuration is an ordered list of node names, a list of
//! `(tail, head, capacity)` triples and the names of the source and sink
//! node. It is not checked in any way, use
//! [`Network::from_config`](crate::Network::from_config) to obtain a
//! validated network.
//!
//! With the `serialize` feature a configuration can be read from JSON:
//!
//! ```json
//! {
//!   "nodes": ["s", "a", "t"],
//!   "arcs": [
//!     { "tail": "s", "head": "a", "capacity": 3 },
//!     { "tail": "a", "head": "t", "capacity": 2 }
//!   ]
//! }
//! ```
//!
//! The `source` and `sink` fields are optional and default to `"s"` and
//! `"t"`.

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Default name of the source node.
pub const DEFAULT_SOURCE: &str = "s";

/// Default name of the sink node.
pub const DEFAULT_SINK: &str = "t";

/// An arc given by the names of its end nodes and its capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ArcConfig<F> {
    pub tail: String,
    pub head: String,
    pub capacity: F,
}

/// The data of a flow problem.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct GraphConfig<F> {
    /// The node names in declaration order.
    pub nodes: Vec<String>,
    /// The arcs in declaration order.
    pub arcs: Vec<ArcConfig<F>>,
    /// The name of the source node.
    #[cfg_attr(feature = "serialize", serde(default = "default_source"))]
    pub source: String,
    /// The name of the sink node.
    #[cfg_attr(feature = "serialize", serde(default = "default_sink"))]
    pub sink: String,
}

#[cfg(feature = "serialize")]
fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

#[cfg(feature = "serialize")]
fn default_sink() -> String {
    DEFAULT_SINK.to_string()
}

impl<F> GraphConfig<F> {
    /// Create a configuration with the default terminal names.
    pub fn new<I, S>(nodes: I, arcs: Vec<(&str, &str, F)>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GraphConfig {
            nodes: nodes.into_iter().map(Into::into).collect(),
            arcs: arcs
                .into_iter()
                .map(|(tail, head, capacity)| ArcConfig {
                    tail: tail.to_string(),
                    head: head.to_string(),
                    capacity,
                })
                .collect(),
            source: DEFAULT_SOURCE.to_string(),
            sink: DEFAULT_SINK.to_string(),
        }
    }

    /// Change the terminal nodes.
    pub fn with_terminals(mut self, source: &str, sink: &str) -> Self {
        self.source = source.to_string();
        self.sink = sink.to_string();
        self
    }
}

impl GraphConfig<i64> {
    /// The six node example network.
    ///
    /// Its maximum flow value is 180, the minimum cut consists of the arcs
    /// `A -> C` and `D -> t`.
    pub fn example() -> Self {
        GraphConfig::new(
            vec!["s", "A", "B", "C", "D", "t"],
            vec![
                ("s", "A", 100),
                ("s", "B", 150),
                ("A", "B", 120),
                ("A", "C", 90),
                ("B", "D", 110),
                ("C", "D", 120),
                ("C", "t", 140),
                ("D", "t", 90),
            ],
        )
    }
}

#[cfg(feature = "serialize")]
mod json {
    use super::GraphConfig;
    use serde::de::DeserializeOwned;
    use std::io::Read;
    use thiserror::Error;

    /// Error when reading a configuration.
    #[derive(Debug, Error)]
    pub enum Error {
        #[error(transparent)]
        Io(#[from] std::io::Error),
        #[error("invalid graph configuration: {0}")]
        Json(#[from] serde_json::Error),
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str<F>(s: &str) -> Result<GraphConfig<F>, Error>
    where
        F: DeserializeOwned,
    {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a configuration in JSON format.
    pub fn read_json<R, F>(r: R) -> Result<GraphConfig<F>, Error>
    where
        R: Read,
        F: DeserializeOwned,
    {
        Ok(serde_json::from_reader(r)?)
    }

    /// Read a configuration from a JSON file.
    pub fn read_json_file<F>(filename: &str) -> Result<GraphConfig<F>, Error>
    where
        F: DeserializeOwned,
    {
        read_json(std::io::BufReader::new(std::fs::File::open(filename)?))
    }
}

#[cfg(feature = "serialize")]
pub use self::json::{from_json_str, read_json, read_json_file, Error};
