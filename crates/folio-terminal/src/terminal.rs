//! One terminal instance and its session state.

use folio_platform::{OpenTarget, PageHost, TimeService};
use folio_types::config::TerminalConfig;
use folio_types::input::{ClickTarget, InputEvent, KeyEvent};

use crate::autocomplete;
use crate::commands::register_builtins;
use crate::dispatcher::Dispatcher;
use crate::input::{ControllerAction, InputController, KeyResponse};
use crate::interpreter::CommandRegistry;
use crate::markup::escape_html;
use crate::renderer::{LineKind, OutputLog};

/// A terminal embedded in a host page.
///
/// Owns the registry, the output log, and the input controller (line plus
/// session history). Independent instances share nothing.
pub struct Terminal<H: PageHost> {
    config: TerminalConfig,
    registry: CommandRegistry,
    log: OutputLog,
    input: InputController,
    time: Option<Box<dyn TimeService>>,
    host: H,
}

impl<H: PageHost> Terminal<H> {
    /// Create a terminal with the built-in commands, print the welcome
    /// banner, and focus the input.
    pub fn new(config: TerminalConfig, host: H) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry, &config);
        Self::with_registry(config, registry, host)
    }

    fn with_registry(config: TerminalConfig, registry: CommandRegistry, host: H) -> Self {
        let mut log = OutputLog::new(config.max_lines);
        for line in &config.welcome {
            log.append(escape_html(line), LineKind::System);
        }
        if !config.welcome.is_empty() {
            log.blank();
        }
        let mut input = InputController::new();
        input.focus();
        log::debug!("Terminal ready with {} commands", registry.len());
        Self {
            config,
            registry,
            log,
            input,
            time: None,
            host,
        }
    }

    /// Attach a clock for `date`.
    pub fn with_clock(mut self, clock: impl TimeService + 'static) -> Self {
        self.time = Some(Box::new(clock));
        self
    }

    /// Route any host event. Returns `true` when the host must suppress its
    /// default handling.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(*key).prevent_default,
            InputEvent::Click(target) => {
                self.click(target);
                false
            },
        }
    }

    /// Handle a key press on the input element.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let response = self.input.handle_key(event);
        match &response.action {
            Some(ControllerAction::Submit(line)) => self.execute(line),
            Some(ControllerAction::Complete) => self.complete(),
            Some(ControllerAction::ClearScreen) => self.log.clear(),
            None => {},
        }
        response
    }

    /// Handle a click inside the terminal surface.
    ///
    /// External links open their target and do not focus the input; any
    /// other click focuses it.
    pub fn click(&mut self, target: &ClickTarget) {
        match target {
            ClickTarget::ExternalLink { url } => {
                if let Err(e) = self.host.open_url(url, OpenTarget::NewContext) {
                    log::warn!("Opening {url} failed: {e}");
                    self.log.append(escape_html(&e.to_string()), LineKind::Error);
                }
            },
            ClickTarget::Surface => self.input.focus(),
        }
    }

    /// Dispatch a line as if it had been submitted (history is not touched).
    pub fn execute(&mut self, line: &str) {
        let mut dispatcher = Dispatcher {
            registry: &self.registry,
            config: &self.config,
            history: self.input.session().history(),
            time: self.time.as_deref(),
            host: &mut self.host,
        };
        dispatcher.execute(line, &mut self.log);
    }

    fn complete(&mut self) {
        let current = self.input.line().text();
        if let Some(rewritten) = autocomplete::complete(
            current,
            self.registry.list_names(),
            &self.config.nav_command,
            &self.config.sections,
        ) {
            self.input.line_mut().set(rewritten);
        }
    }

    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    pub fn input_text(&self) -> &str {
        self.input.line().text()
    }

    pub fn caret(&self) -> usize {
        self.input.line().caret()
    }

    pub fn history(&self) -> &[String] {
        self.input.session().history()
    }

    pub fn history_index(&self) -> usize {
        self.input.session().index()
    }

    pub fn is_focused(&self) -> bool {
        self.input.is_focused()
    }

    /// The input lost focus (host blur event).
    pub fn blur(&mut self) {
        self.input.blur();
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_platform::MemoryHost;
    use folio_types::input::Key;

    fn terminal() -> Terminal<MemoryHost> {
        let config = TerminalConfig {
            welcome: vec![],
            ..TerminalConfig::default()
        };
        Terminal::new(config, MemoryHost::with_elements(["projects", "skills", "contact"]))
    }

    fn type_and_submit(t: &mut Terminal<MemoryHost>, text: &str) {
        for ch in text.chars() {
            t.handle_key(KeyEvent::plain(Key::Char(ch)));
        }
        t.handle_key(KeyEvent::plain(Key::Enter));
    }

    #[test]
    fn starts_focused_with_welcome_banner() {
        let t = Terminal::new(TerminalConfig::default(), MemoryHost::default());
        assert!(t.is_focused());
        let kinds: Vec<LineKind> = t.log().lines().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LineKind::System, LineKind::System, LineKind::Blank]);
    }

    #[test]
    fn submit_dispatches_and_records_history() {
        let mut t = terminal();
        type_and_submit(&mut t, "whoami");
        assert_eq!(t.history(), &["whoami".to_string()]);
        assert_eq!(t.input_text(), "");
        assert_eq!(t.log().len(), 3);
    }

    #[test]
    fn tab_completes_command() {
        let mut t = terminal();
        for ch in "pro".chars() {
            t.handle_key(KeyEvent::plain(Key::Char(ch)));
        }
        let resp = t.handle_key(KeyEvent::plain(Key::Tab));
        assert!(resp.prevent_default);
        assert_eq!(t.input_text(), "projects ");
        assert_eq!(t.caret(), "projects ".len());
    }

    #[test]
    fn tab_completes_section() {
        let mut t = terminal();
        for ch in "goto sk".chars() {
            t.handle_key(KeyEvent::plain(Key::Char(ch)));
        }
        t.handle_key(KeyEvent::plain(Key::Tab));
        assert_eq!(t.input_text(), "goto skills");
    }

    #[test]
    fn ctrl_l_clears_without_echo() {
        let mut t = terminal();
        type_and_submit(&mut t, "whoami");
        t.handle_key(KeyEvent::ctrl(Key::Char('l')));
        assert!(t.log().is_empty());
    }

    #[test]
    fn history_command_sees_current_submission() {
        let mut t = terminal();
        type_and_submit(&mut t, "about");
        type_and_submit(&mut t, "history");
        let out = &t.log().lines().nth(4).expect("history output").content;
        assert_eq!(out, "     1  about\n     2  history");
    }

    #[test]
    fn surface_click_focuses_input() {
        let mut t = terminal();
        t.blur();
        assert!(!t.is_focused());
        let prevented = t.handle_event(&InputEvent::Click(ClickTarget::Surface));
        assert!(!prevented);
        assert!(t.is_focused());
    }

    #[test]
    fn link_click_opens_without_focusing() {
        let mut t = terminal();
        t.blur();
        t.click(&ClickTarget::ExternalLink {
            url: "https://github.com/samcarter".into(),
        });
        assert!(!t.is_focused());
        assert_eq!(
            t.host().opened,
            vec![("https://github.com/samcarter".to_string(), OpenTarget::NewContext)]
        );
    }

    #[test]
    fn blocked_link_click_renders_error() {
        let mut t = terminal();
        t.host_mut().block_opens = true;
        t.click(&ClickTarget::ExternalLink {
            url: "https://example.com".into(),
        });
        assert_eq!(t.log().last().map(|l| l.kind), Some(LineKind::Error));
    }

    #[test]
    fn key_event_through_handle_event() {
        let mut t = terminal();
        let prevented = t.handle_event(&InputEvent::Key(KeyEvent::plain(Key::ArrowUp)));
        assert!(prevented);
        let prevented = t.handle_event(&InputEvent::Key(KeyEvent::plain(Key::Char('x'))));
        assert!(!prevented);
        assert_eq!(t.input_text(), "x");
    }

    #[test]
    fn instances_are_independent() {
        let mut a = terminal();
        let b = terminal();
        type_and_submit(&mut a, "about");
        assert_eq!(a.history().len(), 1);
        assert!(b.history().is_empty());
        assert!(b.log().is_empty());
    }
}
