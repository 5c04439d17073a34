// ABOUTME: Entry point for the query cost calculator
// Example: query-cost --time 12 --queries 30 --data 100 --cost 0.005

use anyhow::Result;
use cloud_cost::app::{logging, output, parse_query_args};
use cloud_cost::{CostError, QueryDefaults};
use std::io;

fn main() -> Result<()> {
    let invocation = match parse_query_args(std::env::args_os(), &QueryDefaults::default()) {
        Ok(invocation) => invocation,
        Err(CostError::Usage(err)) => err.exit(),
        Err(err) => return Err(err.into()),
    };

    if invocation.debug {
        logging::init_debug_logging();
    }

    let stdout = io::stdout();
    output::write_estimate(&mut stdout.lock(), &invocation.scenario, invocation.format)?;

    Ok(())
}
