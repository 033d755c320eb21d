//! Command terminal subsystem.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The dispatcher parses input
//! lines, resolves the command name, runs `execute()`, and turns the returned
//! intent into log lines or host effects. `Terminal` ties the pieces to one
//! instance's session state.

pub mod autocomplete;
mod commands;
mod dispatcher;
pub mod input;
mod interpreter;
pub mod markup;
mod nav_commands;
mod portfolio_commands;
pub mod renderer;
mod terminal;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Parses a raw line and routes it through the registry.
pub use dispatcher::Dispatcher;
/// A single executable command trait.
pub use interpreter::Command;
/// Intent produced by a command (text, navigation, external open, clear).
pub use interpreter::CommandOutput;
/// Registry of available commands.
pub use interpreter::CommandRegistry;
/// Read-only context passed to every command.
pub use interpreter::Environment;
/// Split a raw line into whitespace-separated tokens.
pub use interpreter::tokenize;
/// One terminal instance: registry, log, input state, and host.
pub use terminal::Terminal;
