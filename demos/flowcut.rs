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

use rustop::opts;

use rs_flowcut::dimacs;
use rs_flowcut::maxflow::Algorithm;
use rs_flowcut::{report, solve, GraphConfig, Network};

use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Solve the max-flow and min-cut problem of a network.";
        opt algorithm:String=String::from("edmondskarp"), desc:"Max-flow algorithm (edmondskarp or dinic).";
        param file:Option<String>, desc:"DIMACS max-flow instance (default: built-in example)";
    }
    .parse_or_exit();

    let algorithm: Algorithm = args.algorithm.parse()?;
    let config: GraphConfig<i64> = match &args.file {
        Some(file) => dimacs::max::read_from_file(file)?,
        None => GraphConfig::example(),
    };

    let net = Network::from_config(&config)?;
    let result = solve(&net, algorithm);
    let stdout = io::stdout();
    report::write(stdout.lock(), &result)?;

    Ok(())
}
