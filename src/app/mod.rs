pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::{parse_query_args, parse_storage_args, Invocation};
pub use config::{QueryDefaults, StorageDefaults};
pub use output::{format_total, write_estimate, OutputFormat};
