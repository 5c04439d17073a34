// ABOUTME: Entry point for the storage cost calculator
// Example: storage-cost --time 12 --data 100 --cost 0.02 --alternative-cost 0.01 --cost-switch-period 3

use anyhow::Result;
use cloud_cost::app::{logging, output, parse_storage_args};
use cloud_cost::{CostError, StorageDefaults};
use std::io;

fn main() -> Result<()> {
    let invocation = match parse_storage_args(std::env::args_os(), &StorageDefaults::default()) {
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
