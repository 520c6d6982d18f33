//! Dot-path addressing over generic records.
//!
//! Paths like `location.state` name a leaf inside nested mappings. The
//! resolver splits a path into its first segment and remainder; the reader
//! and writer walk a record one segment at a time and never create keys.

pub mod dot_path;
pub mod read;
pub mod split;
pub mod write;

pub use dot_path::DotPath;
pub use read::read_path;
pub use split::split_dot_path;
pub use write::write_path;
