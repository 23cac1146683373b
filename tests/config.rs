/*
 * Copyright (c) 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_flowcut::config::{from_json_str, read_json_file};
use rs_flowcut::maxflow::Algorithm;
use rs_flowcut::{max_flow, min_cut, GraphConfig, Network, ValidationError};

use std::error::Error;

#[test]
fn test_read_example() -> Result<(), Box<dyn Error>> {
    let config: GraphConfig<i64> = read_json_file("tests/data/example.json")?;
    assert_eq!(config, GraphConfig::example());

    let net = Network::from_config(&config)?;
    let flow = max_flow(&net, Algorithm::Dinic).solution.unwrap();
    let cut = min_cut(&net, Algorithm::EdmondsKarp).solution.unwrap();
    assert_eq!(flow.value(), cut.capacity());

    Ok(())
}

#[test]
fn test_unknown_node() -> Result<(), Box<dyn Error>> {
    let config: GraphConfig<u32> = from_json_str(
        r#"{
            "nodes": ["s", "a", "t"],
            "arcs": [
                { "tail": "s", "head": "a", "capacity": 1 },
                { "tail": "a", "head": "b", "capacity": 1 }
            ]
        }"#,
    )?;

    assert_eq!(
        Network::from_config(&config).unwrap_err(),
        ValidationError::UnknownNode {
            tail: "a".to_string(),
            head: "b".to_string(),
            node: "b".to_string(),
        }
    );

    Ok(())
}

#[test]
fn test_terminals() -> Result<(), Box<dyn Error>> {
    let config: GraphConfig<u32> = from_json_str(
        r#"{
            "nodes": ["in", "mid", "out"],
            "arcs": [
                { "tail": "in", "head": "mid", "capacity": 4 },
                { "tail": "mid", "head": "out", "capacity": 3 }
            ],
            "source": "in",
            "sink": "out"
        }"#,
    )?;
    let net = Network::from_config(&config)?;
    assert_eq!(max_flow(&net, Algorithm::EdmondsKarp).solution.unwrap().value(), 3);

    Ok(())
}
