//! Navigation and external-resource commands: goto, open, email.

use folio_platform::OpenTarget;
use folio_types::error::Result;

use crate::commands::{usage_line, usage_text};
use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::markup::escape_html;

/// Register navigation commands. `nav_command` names the section command.
pub fn register_nav_commands(reg: &mut CommandRegistry, nav_command: &str) {
    reg.register(Box::new(GotoCmd::new(nav_command)));
    reg.register(Box::new(OpenCmd));
    reg.register(Box::new(EmailCmd));
}

/// Message rendered when a section cannot be reached.
pub(crate) fn section_not_found(section: &str, sections: &[String]) -> String {
    format!(
        "Section not found: {}. Try: {}",
        escape_html(section),
        escape_html(&sections.join(", "))
    )
}

// ---------------------------------------------------------------------------
// goto
// ---------------------------------------------------------------------------

struct GotoCmd {
    name: String,
    usage: String,
}

impl GotoCmd {
    fn new(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        Self {
            usage: format!("{name} <section>"),
            name,
        }
    }
}

impl Command for GotoCmd {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        "Scroll to a page section"
    }
    fn usage(&self) -> &str {
        &self.usage
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let Some(&section) = args.first() else {
            return Ok(usage_text(self));
        };
        match env.sections.iter().find(|s| s.eq_ignore_ascii_case(section)) {
            Some(id) => Ok(CommandOutput::Navigate {
                section: id.clone(),
            }),
            None => Ok(CommandOutput::Text(section_not_found(section, env.sections))),
        }
    }
}

// ---------------------------------------------------------------------------
// open
// ---------------------------------------------------------------------------

struct OpenCmd;
impl Command for OpenCmd {
    fn name(&self) -> &str {
        "open"
    }
    fn description(&self) -> &str {
        "Open a profile link in a new tab"
    }
    fn usage(&self) -> &str {
        "open <target>"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let targets: Vec<&str> = env.profile.links.iter().map(|l| l.name.as_str()).collect();
        let Some(&target) = args.first() else {
            return Ok(CommandOutput::Text(format!(
                "{}\nTargets: {}",
                usage_line(self),
                escape_html(&targets.join(", "))
            )));
        };
        match env.profile.link(target) {
            Some(link) => Ok(CommandOutput::OpenExternal {
                url: link.url.clone(),
                target: OpenTarget::NewContext,
            }),
            None => Ok(CommandOutput::Text(format!(
                "open: unknown target: {}. Try: {}",
                escape_html(target),
                escape_html(&targets.join(", "))
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// email
// ---------------------------------------------------------------------------

struct EmailCmd;
impl Command for EmailCmd {
    fn name(&self) -> &str {
        "email"
    }
    fn description(&self) -> &str {
        "Compose an email to me"
    }
    fn usage(&self) -> &str {
        "email"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::OpenExternal {
            url: env.profile.mailto(),
            target: OpenTarget::CurrentContext,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::config::Profile;

    fn sections() -> Vec<String> {
        vec!["projects".into(), "skills".into(), "contact".into()]
    }

    fn run(cmd: &dyn Command, args: &[&str]) -> CommandOutput {
        let reg = CommandRegistry::new();
        let profile = Profile::default();
        let sections = sections();
        let env = Environment {
            registry: &reg,
            profile: &profile,
            sections: &sections,
            history: &[],
            time: None,
        };
        cmd.execute(args, &env).unwrap()
    }

    #[test]
    fn goto_known_section_navigates() {
        assert_eq!(
            run(&GotoCmd::new("goto"), &["projects"]),
            CommandOutput::Navigate {
                section: "projects".into()
            }
        );
    }

    #[test]
    fn goto_lowercases_section() {
        assert_eq!(
            run(&GotoCmd::new("goto"), &["Skills"]),
            CommandOutput::Navigate {
                section: "skills".into()
            }
        );
    }

    #[test]
    fn goto_navigates_to_configured_id_casing() {
        let reg = CommandRegistry::new();
        let profile = Profile::default();
        let sections = vec!["Projects".to_string(), "About".to_string()];
        let env = Environment {
            registry: &reg,
            profile: &profile,
            sections: &sections,
            history: &[],
            time: None,
        };
        let out = GotoCmd::new("goto").execute(&["projects"], &env).unwrap();
        assert_eq!(
            out,
            CommandOutput::Navigate {
                section: "Projects".into()
            }
        );
    }

    #[test]
    fn goto_unknown_section() {
        assert_eq!(
            run(&GotoCmd::new("goto"), &["nowhere"]),
            CommandOutput::Text("Section not found: nowhere. Try: projects, skills, contact".into())
        );
    }

    #[test]
    fn goto_without_argument_is_usage() {
        assert_eq!(
            run(&GotoCmd::new("goto"), &[]),
            CommandOutput::Text("Usage: goto &lt;section&gt;".into())
        );
    }

    #[test]
    fn custom_nav_command_name() {
        let cmd = GotoCmd::new("CD");
        assert_eq!(cmd.name(), "cd");
        assert_eq!(cmd.usage(), "cd <section>");
    }

    #[test]
    fn open_known_target_in_new_context() {
        assert_eq!(
            run(&OpenCmd, &["GitHub"]),
            CommandOutput::OpenExternal {
                url: "https://github.com/samcarter".into(),
                target: OpenTarget::NewContext,
            }
        );
    }

    #[test]
    fn open_without_argument_lists_targets() {
        assert_eq!(
            run(&OpenCmd, &[]),
            CommandOutput::Text(
                "Usage: open &lt;target&gt;\nTargets: github, linkedin, resume".into()
            )
        );
    }

    #[test]
    fn open_unknown_target() {
        let CommandOutput::Text(s) = run(&OpenCmd, &["myspace"]) else {
            panic!("expected text");
        };
        assert!(s.starts_with("open: unknown target: myspace."));
    }

    #[test]
    fn email_navigates_current_context() {
        assert_eq!(
            run(&EmailCmd, &[]),
            CommandOutput::OpenExternal {
                url: "mailto:hello@samcarter.dev".into(),
                target: OpenTarget::CurrentContext,
            }
        );
    }
}
