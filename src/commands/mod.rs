//! CLI command implementations.
//!
//! Each submodule handles one subcommand: configuration resolution,
//! snapshot loading, and output. The pure engine work happens in the
//! library modules these call into.

pub mod init;
pub mod rank;
pub mod roster;
