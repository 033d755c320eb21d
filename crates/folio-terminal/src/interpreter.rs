//! Command trait, intents, and the registry.

use std::collections::HashMap;

use folio_platform::{OpenTarget, TimeService};
use folio_types::config::Profile;
use folio_types::error::Result;

/// Intent produced by a command.
///
/// Commands never touch the page. They describe what should happen and the
/// dispatcher carries it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Markup to render as an `output` line.
    Text(String),
    /// Scroll a page section into view.
    Navigate { section: String },
    /// Open an external resource.
    OpenExternal { url: String, target: OpenTarget },
    /// Empty the output log.
    Clear,
    /// Command produced no visible output.
    None,
}

/// Read-only context passed to every command.
pub struct Environment<'a> {
    /// The registry the command was resolved from (for `help`).
    pub registry: &'a CommandRegistry,
    /// Portfolio content.
    pub profile: &'a Profile,
    /// Section ids reachable through navigation.
    pub sections: &'a [String],
    /// Session history, oldest first.
    pub history: &'a [String],
    /// Clock for timestamp queries.
    pub time: Option<&'a dyn TimeService>,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types). Lowercase.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "goto <section>").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands.
///
/// Filled once at startup; lookups are case-insensitive.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_ascii_lowercase();
        if self.commands.insert(name.clone(), cmd).is_some() {
            log::debug!("Replaced command '{name}'");
        }
    }

    /// Resolve a command by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .get(name.to_ascii_lowercase().as_str())
            .map(|c| c.as_ref())
    }

    /// Sorted command names.
    pub fn list_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Return a sorted list of (name, description) pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .iter()
            .map(|(name, c)| (name.as_str(), c.description()))
            .collect();
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }

    /// Return the sorted names starting with `partial`, ignoring case.
    pub fn completions(&self, partial: &str) -> Vec<&str> {
        let lower = partial.to_ascii_lowercase();
        self.list_names()
            .into_iter()
            .filter(|name| name.starts_with(&lower))
            .collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a line into tokens on runs of whitespace. No quoting: this is not a
/// shell.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoCmd;
    impl Command for EchoCmd {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Print arguments"
        }
        fn usage(&self) -> &str {
            "echo [text...]"
        }
        fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Text(args.join(" ")))
        }
    }

    struct NamedCmd(&'static str);
    impl Command for NamedCmd {
        fn name(&self) -> &str {
            self.0
        }
        fn description(&self) -> &str {
            "named"
        }
        fn usage(&self) -> &str {
            self.0
        }
        fn execute(&self, _: &[&str], _: &Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Text(self.0.to_string()))
        }
    }

    fn with_env<T>(reg: &CommandRegistry, f: impl FnOnce(&Environment<'_>) -> T) -> T {
        let profile = Profile::default();
        let env = Environment {
            registry: reg,
            profile: &profile,
            sections: &[],
            history: &[],
            time: None,
        };
        f(&env)
    }

    #[test]
    fn register_and_lookup() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        let cmd = reg.lookup("echo").expect("registered");
        let out = with_env(&reg, |env| cmd.execute(&["hello", "world"], env)).unwrap();
        assert_eq!(out, CommandOutput::Text("hello world".into()));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        assert!(reg.lookup("ECHO").is_some());
        assert!(reg.lookup("Echo").is_some());
    }

    #[test]
    fn lookup_unknown_is_none() {
        let reg = CommandRegistry::new();
        assert!(reg.lookup("nonexistent").is_none());
    }

    #[test]
    fn register_replaces_existing_command() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(NamedCmd("dup")));
        reg.register(Box::new(NamedCmd("dup")));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn list_names_sorted() {
        let mut reg = CommandRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            reg.register(Box::new(NamedCmd(name)));
        }
        assert_eq!(reg.list_names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn list_commands_pairs_descriptions() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        assert_eq!(reg.list_commands(), vec![("echo", "Print arguments")]);
    }

    #[test]
    fn completions_prefix() {
        let mut reg = CommandRegistry::new();
        for name in ["projects", "profile", "about"] {
            reg.register(Box::new(NamedCmd(name)));
        }
        assert_eq!(reg.completions("pro"), vec!["profile", "projects"]);
        assert_eq!(reg.completions("PROJ"), vec!["projects"]);
        assert!(reg.completions("x").is_empty());
    }

    #[test]
    fn default_creates_empty_registry() {
        let reg = CommandRegistry::default();
        assert!(reg.is_empty());
    }

    #[test]
    fn tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  goto   projects \t now "), vec!["goto", "projects", "now"]);
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }
}
