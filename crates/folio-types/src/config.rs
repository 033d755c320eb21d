//! Terminal configuration and portfolio profile.
//!
//! Everything the built-in commands print comes from [`Profile`], so a page
//! can swap in its own content with a TOML file instead of code changes.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Terminal-wide configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt prefixed to every echoed input line.
    pub prompt: String,
    /// Lines rendered as `system` lines when the terminal initializes.
    pub welcome: Vec<String>,
    /// Fixed header height subtracted when scrolling a section into view.
    pub header_offset: u32,
    /// Name of the section-navigation command (autocompletes section ids).
    pub nav_command: String,
    /// Page section ids reachable through the navigation command.
    pub sections: Vec<String>,
    /// Oldest lines are dropped once the log grows past this many lines.
    /// `None` keeps everything.
    pub max_lines: Option<usize>,
    /// Content rendered by the built-in commands.
    pub profile: Profile,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "visitor@portfolio:~$".to_string(),
            welcome: vec![
                "Welcome to my portfolio terminal.".to_string(),
                "Type 'help' to see available commands.".to_string(),
            ],
            header_offset: 80,
            nav_command: "goto".to_string(),
            sections: vec![
                "projects".to_string(),
                "skills".to_string(),
                "contact".to_string(),
            ],
            max_lines: Some(500),
            profile: Profile::default(),
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&text)?;
        log::info!("Loaded terminal config from {}", path.display());
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.nav_command.trim().is_empty() {
            return Err(FolioError::Config("nav_command must not be empty".into()));
        }
        if self.nav_command.chars().any(char::is_whitespace) {
            return Err(FolioError::Config(format!(
                "nav_command must be a single word: {:?}",
                self.nav_command
            )));
        }
        if self.max_lines == Some(0) {
            return Err(FolioError::Config("max_lines must be at least 1".into()));
        }
        Ok(())
    }
}

/// A named external link (`github`, `resume`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// A project entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

/// A work history entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
}

/// A labelled group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub label: String,
    pub items: Vec<String>,
}

/// The portfolio owner and their content.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub email: String,
    pub links: Vec<Link>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
}

impl Profile {
    /// Find a link by case-insensitive name.
    pub fn link(&self, name: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.name.eq_ignore_ascii_case(name))
    }

    /// The `mailto:` URL for the profile email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Sam Carter".to_string(),
            role: "Systems Engineer".to_string(),
            bio: "I build fast, reliable software close to the metal: \
                  storage engines, network services, and developer tooling."
                .to_string(),
            email: "hello@samcarter.dev".to_string(),
            links: vec![
                Link {
                    name: "github".to_string(),
                    url: "https://github.com/samcarter".to_string(),
                },
                Link {
                    name: "linkedin".to_string(),
                    url: "https://www.linkedin.com/in/samcarter".to_string(),
                },
                Link {
                    name: "resume".to_string(),
                    url: "https://samcarter.dev/resume.pdf".to_string(),
                },
            ],
            skills: vec![
                SkillGroup {
                    label: "Languages".to_string(),
                    items: vec!["Rust".into(), "Go".into(), "TypeScript".into(), "SQL".into()],
                },
                SkillGroup {
                    label: "Systems".to_string(),
                    items: vec!["Linux".into(), "Networking".into(), "Storage".into()],
                },
                SkillGroup {
                    label: "Tooling".to_string(),
                    items: vec!["Git".into(), "Docker".into(), "CI/CD".into()],
                },
            ],
            projects: vec![
                Project {
                    name: "kvlog".to_string(),
                    summary: "Log-structured key-value store with crash recovery".to_string(),
                    url: Some("https://github.com/samcarter/kvlog".to_string()),
                    tech: vec!["Rust".into()],
                },
                Project {
                    name: "tracehop".to_string(),
                    summary: "Parallel traceroute with a terminal UI".to_string(),
                    url: Some("https://github.com/samcarter/tracehop".to_string()),
                    tech: vec!["Rust".into(), "tokio".into()],
                },
                Project {
                    name: "portfolio".to_string(),
                    summary: "This site, including the terminal you are using".to_string(),
                    url: None,
                    tech: vec!["Rust".into(), "HTML".into(), "CSS".into()],
                },
            ],
            experience: vec![
                Experience {
                    role: "Senior Software Engineer".to_string(),
                    company: "Northwind Systems".to_string(),
                    period: "2022 - present".to_string(),
                },
                Experience {
                    role: "Software Engineer".to_string(),
                    company: "Blue Ridge Networks".to_string(),
                    period: "2019 - 2022".to_string(),
                },
            ],
        }
    }
}
