//! A toy Unix shell over an in-memory filesystem.
//!
//! Feed lines into a [`Session`] and display what comes back. Nothing runs
//! outside the process: `ls`, `cat`, `mkdir` and friends operate on a
//! [`VirtualFs`] seeded from a [`ShellConfig`].
//!
//! ```
//! use fakeshell::Session;
//!
//! let mut shell = Session::default();
//! shell.drain_output(); // login banner
//! shell.handle_input(r#"echo "abc" > f.txt"#);
//! assert_eq!(shell.handle_input("cat f.txt"), vec!["abc"]);
//! ```

pub mod config;
pub mod core;
pub mod models;

pub use crate::config::ShellConfig;
pub use crate::core::{Session, ShellState, VirtualFs};
