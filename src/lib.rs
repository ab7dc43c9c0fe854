//! myapp: a demonstration CLI with nested subcommands.
//!
//! The command tree lives in [`cli::args`], dispatch in [`cli::commands`],
//! and every leaf action renders into a `std::io::Write` sink so it can be
//! exercised without spawning the binary.

pub mod actions;
pub mod cli;
pub mod config;
pub mod exitcode;
pub mod util;
