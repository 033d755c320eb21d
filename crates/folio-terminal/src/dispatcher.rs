//! Dispatcher: raw line -> registry lookup -> intent -> log lines and host
//! effects.

use folio_platform::{OpenTarget, PageHost, TimeService};
use folio_types::config::TerminalConfig;

use crate::interpreter::{CommandOutput, CommandRegistry, Environment, tokenize};
use crate::markup::escape_html;
use crate::nav_commands::section_not_found;
use crate::renderer::{LineKind, OutputLog};

/// Routes one submitted line through the registry.
///
/// Borrowed for a single `execute` call; the terminal owns everything it
/// points at.
pub struct Dispatcher<'a, H: PageHost + ?Sized> {
    pub registry: &'a CommandRegistry,
    pub config: &'a TerminalConfig,
    pub history: &'a [String],
    pub time: Option<&'a dyn TimeService>,
    pub host: &'a mut H,
}

impl<H: PageHost + ?Sized> Dispatcher<'_, H> {
    /// Echo, parse, run, and render one line. Never fails: every error ends
    /// up as a rendered line.
    pub fn execute(&mut self, raw: &str, log: &mut OutputLog) {
        log.append(
            format!("{} {}", escape_html(&self.config.prompt), escape_html(raw)),
            LineKind::InputEcho,
        );

        let tokens = tokenize(raw);
        let Some((&name, args)) = tokens.split_first() else {
            return;
        };
        let name = name.to_lowercase();

        let Some(cmd) = self.registry.lookup(&name) else {
            log::debug!("Unknown command: {name}");
            log.append(
                format!(
                    "command not found: {}. Type 'help' for commands.",
                    escape_html(&name)
                ),
                LineKind::Error,
            );
            log.blank();
            return;
        };

        let env = Environment {
            registry: self.registry,
            profile: &self.config.profile,
            sections: &self.config.sections,
            history: self.history,
            time: self.time,
        };
        log::debug!("Dispatching '{name}' with {} arg(s)", args.len());
        let result = cmd.execute(args, &env);

        match result {
            Ok(CommandOutput::Clear) => {
                log.clear();
                return;
            },
            Ok(CommandOutput::Text(text)) => {
                if !text.is_empty() {
                    log.append(text, LineKind::Output);
                }
            },
            Ok(CommandOutput::Navigate { section }) => self.navigate(&section, log),
            Ok(CommandOutput::OpenExternal { url, target }) => self.open(&url, target, log),
            Ok(CommandOutput::None) => {},
            Err(e) => {
                log::warn!("Command '{name}' failed: {e}");
                log.append(format!("{name}: {}", escape_html(&e.to_string())), LineKind::Error);
            },
        }
        log.blank();
    }

    fn navigate(&mut self, section: &str, log: &mut OutputLog) {
        match self.host.scroll_into_view(section, self.config.header_offset) {
            Ok(true) => {
                log::info!("Navigated to section '{section}'");
                log.append(
                    format!("Navigating to {}...", escape_html(section)),
                    LineKind::Output,
                );
            },
            Ok(false) => log.append(
                section_not_found(section, &self.config.sections),
                LineKind::Output,
            ),
            Err(e) => {
                log::warn!("Navigation to '{section}' failed: {e}");
                log.append(escape_html(&e.to_string()), LineKind::Error);
            },
        }
    }

    fn open(&mut self, url: &str, target: OpenTarget, log: &mut OutputLog) {
        match self.host.open_url(url, target) {
            Ok(()) => {
                log::info!("Opened {url} ({target:?})");
                log.append(format!("Opening {}...", escape_html(url)), LineKind::Output);
            },
            Err(e) => {
                log::warn!("Opening {url} failed: {e}");
                log.append(escape_html(&e.to_string()), LineKind::Error);
            },
        }
    }
}
