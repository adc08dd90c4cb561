//! Core shell logic.
//!
//! This module provides:
//! - [`Session`] driving one input line at a time
//! - [`parser`] splitting lines into pipeline stages and tokens
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`VirtualFs`] in-memory filesystem and [`path`] arithmetic

mod commands;
pub mod error;
mod filesystem;
pub mod parser;
pub mod path;
mod session;

pub use commands::{execute_command, Command, CommandResult, PathArg};
pub use filesystem::VirtualFs;
pub use session::{Session, ShellState};
