//! Command-line argument parsing for the `fieldcopy` binary.

pub mod parse;

pub use parse::{parse_args, usage};
