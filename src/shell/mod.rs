//! External command execution.

pub mod command;

pub use command::{execute_checked, execute_with_timeout, CommandResult, CommandSpec};
