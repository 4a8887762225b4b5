//! Library side of the `sumstats-qc` command-line tool.

pub mod logging;
pub mod pipeline;
pub mod types;
