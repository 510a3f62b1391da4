//! Interactive shell that collects expenses and prints the summary.

pub mod core;
pub mod io;
pub mod output;
mod shell;

pub use self::core::{run_session, CliError, CliMode, LoopControl, SessionContext};
pub use shell::run_cli;
