//! Library components of the `twc` command-line tool.

pub mod interactive;
pub mod logging;
