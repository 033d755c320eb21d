//! Portfolio content commands: about, whoami, skills, projects, experience,
//! contact, ls, cat.

use folio_types::config::Profile;
use folio_types::error::Result;

use crate::commands::usage_text;
use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::markup::{escape_html, external_link, styled};

/// Register the portfolio content commands.
pub fn register_portfolio_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(ExperienceCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CatCmd));
}

// ---------------------------------------------------------------------------
// Renderers shared by the commands and the virtual files.
// ---------------------------------------------------------------------------

fn render_about(p: &Profile) -> String {
    format!(
        "{}\n{}\n\n{}",
        styled("heading", &p.name),
        styled("muted", &p.role),
        escape_html(&p.bio)
    )
}

fn render_skills(p: &Profile) -> String {
    if p.skills.is_empty() {
        return "(no skills listed)".to_string();
    }
    p.skills
        .iter()
        .map(|g| format!("{} {}", styled("label", &format!("{}:", g.label)), escape_html(&g.items.join(", "))))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_projects(p: &Profile) -> String {
    if p.projects.is_empty() {
        return "(no projects yet)".to_string();
    }
    let mut lines = Vec::new();
    for project in &p.projects {
        let name = match &project.url {
            Some(url) => external_link(&project.name, url),
            None => styled("accent", &project.name),
        };
        lines.push(format!("{name} - {}", escape_html(&project.summary)));
        if !project.tech.is_empty() {
            lines.push(format!("  {}", styled("muted", &project.tech.join(" / "))));
        }
    }
    lines.join("\n")
}

fn render_experience(p: &Profile) -> String {
    if p.experience.is_empty() {
        return "(no experience listed)".to_string();
    }
    p.experience
        .iter()
        .map(|e| {
            format!(
                "{} @ {}  {}",
                styled("accent", &e.role),
                escape_html(&e.company),
                styled("muted", &e.period)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_contact(p: &Profile) -> String {
    let mut lines = vec![format!(
        "{} {}",
        styled("label", "email:"),
        external_link(&p.email, &p.mailto())
    )];
    for link in &p.links {
        lines.push(format!(
            "{} {}",
            styled("label", &format!("{}:", link.name)),
            external_link(&link.url, &link.url)
        ));
    }
    lines.join("\n")
}

/// Virtual files served by `ls` and `cat`, in listing order.
const FILES: &[(&str, fn(&Profile) -> String)] = &[
    ("about.txt", render_about),
    ("skills.txt", render_skills),
    ("projects.txt", render_projects),
    ("experience.txt", render_experience),
    ("contact.txt", render_contact),
];

// ---------------------------------------------------------------------------
// about / whoami
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Who I am"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(render_about(env.profile)))
    }
}

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Name and role"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(format!(
            "{} - {}",
            escape_html(&env.profile.name),
            escape_html(&env.profile.role)
        )))
    }
}

// ---------------------------------------------------------------------------
// skills / projects / experience / contact
// ---------------------------------------------------------------------------

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Languages and tools I work with"
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(render_skills(env.profile)))
    }
}

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "Things I have built"
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(render_projects(env.profile)))
    }
}

struct ExperienceCmd;
impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn description(&self) -> &str {
        "Work history"
    }
    fn usage(&self) -> &str {
        "experience"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(render_experience(env.profile)))
    }
}

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "How to reach me"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(render_contact(env.profile)))
    }
}

// ---------------------------------------------------------------------------
// ls / cat
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List files"
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let names: Vec<&str> = FILES.iter().map(|(name, _)| *name).collect();
        Ok(CommandOutput::Text(names.join("  ")))
    }
}

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Print a file"
    }
    fn usage(&self) -> &str {
        "cat <file>"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let Some(&file) = args.first() else {
            return Ok(usage_text(self));
        };
        let wanted = file.to_ascii_lowercase();
        match FILES.iter().find(|(name, _)| *name == wanted) {
            Some((_, render)) => Ok(CommandOutput::Text(render(env.profile))),
            None => Ok(CommandOutput::Text(format!(
                "cat: {}: No such file",
                escape_html(file)
            ))),
        }
    }
}
