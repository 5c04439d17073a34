pub mod coerce;
pub mod error;

pub use coerce::{coerce_float, coerce_int};
pub use error::{CostError, Result};
