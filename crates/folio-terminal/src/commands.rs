//! Built-in commands for the folio terminal.

use folio_types::config::TerminalConfig;
use folio_types::error::Result;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::markup::{escape_html, styled};

/// Register all built-in commands into a registry.
///
/// Core commands live here; portfolio content and navigation commands come
/// from their own modules.
pub fn register_builtins(reg: &mut CommandRegistry, config: &TerminalConfig) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(HistoryCmd));
    crate::portfolio_commands::register_portfolio_commands(reg);
    crate::nav_commands::register_nav_commands(reg, &config.nav_command);
}

/// `Usage: <usage>`, escaped for rendering.
pub(crate) fn usage_line(cmd: &dyn Command) -> String {
    escape_html(&format!("Usage: {}", cmd.usage()))
}

/// Reply for a command invoked without a required argument.
pub(crate) fn usage_text(cmd: &dyn Command) -> CommandOutput {
    CommandOutput::Text(usage_line(cmd))
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        if let Some(&name) = args.first() {
            return Ok(match env.registry.lookup(name) {
                Some(cmd) => CommandOutput::Text(format!(
                    "{} - {}\n{}",
                    styled("command", cmd.name()),
                    escape_html(cmd.description()),
                    usage_line(cmd),
                )),
                None => CommandOutput::Text(format!(
                    "help: no such command: {}",
                    escape_html(name)
                )),
            });
        }

        let cmds = env.registry.list_commands();
        let width = cmds.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let mut out = String::from("Available commands:\n");
        for (name, desc) in &cmds {
            out.push_str(&format!(
                "  {}{}  {}\n",
                styled("command", name),
                " ".repeat(width - name.len()),
                escape_html(desc)
            ));
        }
        out.push_str("\nTab completes commands. Up/Down browse history. Ctrl+L clears the screen.");
        Ok(CommandOutput::Text(out))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear terminal output"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(escape_html(&args.join(" "))))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show the current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        match env.time {
            Some(time) => Ok(CommandOutput::Text(time.now()?.to_string())),
            None => Ok(CommandOutput::Text("date: no clock available".to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show commands entered this session"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        if env.history.is_empty() {
            return Ok(CommandOutput::Text("(no history)".to_string()));
        }
        let lines: Vec<String> = env
            .history
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("  {:4}  {}", i + 1, escape_html(entry)))
            .collect();
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}
