//! Unique-prefix completion for command names and navigation sections.

/// Complete `text` against the known names.
///
/// Returns the rewritten input when exactly one candidate matches, `None`
/// otherwise (no cycling, no listing).
pub fn complete<'a>(
    text: &str,
    commands: impl IntoIterator<Item = &'a str>,
    nav_command: &str,
    sections: &[String],
) -> Option<String> {
    let lowered = text.trim().to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    match tokens.as_slice() {
        [partial] => unique_prefix(partial, commands).map(|name| format!("{name} ")),
        [cmd, partial] if cmd.eq_ignore_ascii_case(nav_command) => {
            unique_prefix(partial, sections.iter().map(String::as_str))
                .map(|section| format!("{} {section}", nav_command.to_ascii_lowercase()))
        },
        _ => None,
    }
}

fn unique_prefix<'a>(partial: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut matches = candidates
        .into_iter()
        .filter(|c| c.to_lowercase().starts_with(partial));
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMANDS: &[&str] = &[
        "about", "cat", "clear", "contact", "date", "goto", "help", "projects", "skills",
    ];

    fn sections() -> Vec<String> {
        vec!["projects".into(), "skills".into(), "contact".into()]
    }

    fn run(text: &str) -> Option<String> {
        complete(text, COMMANDS.iter().copied(), "goto", &sections())
    }

    #[test]
    fn unique_command_prefix_completes_with_space() {
        assert_eq!(run("pro"), Some("projects ".to_string()));
    }

    #[test]
    fn matching_ignores_case_but_uses_canonical_name() {
        assert_eq!(run("PrO"), Some("projects ".to_string()));
    }

    #[test]
    fn ambiguous_prefix_is_noop() {
        // cat, clear, contact
        assert_eq!(run("c"), None);
    }

    #[test]
    fn no_match_is_noop() {
        assert_eq!(run("zzz"), None);
    }

    #[test]
    fn empty_text_is_noop() {
        assert_eq!(run(""), None);
        assert_eq!(run("   "), None);
    }

    #[test]
    fn full_name_completes_to_itself() {
        assert_eq!(run("help"), Some("help ".to_string()));
    }

    #[test]
    fn section_after_nav_command() {
        assert_eq!(run("goto sk"), Some("goto skills".to_string()));
        assert_eq!(run("GOTO Con"), Some("goto contact".to_string()));
    }

    #[test]
    fn section_keeps_configured_casing() {
        let secs = vec!["Projects".to_string(), "About".to_string()];
        assert_eq!(
            complete("goto pro", COMMANDS.iter().copied(), "goto", &secs),
            Some("goto Projects".to_string())
        );
    }

    #[test]
    fn nav_command_is_written_lowercase() {
        assert_eq!(
            complete("cd sk", COMMANDS.iter().copied(), "CD", &sections()),
            Some("cd skills".to_string())
        );
    }

    #[test]
    fn section_without_match_is_noop() {
        assert_eq!(run("goto x"), None);
    }

    #[test]
    fn second_token_after_other_command_is_noop() {
        assert_eq!(run("cat sk"), None);
    }

    #[test]
    fn three_tokens_is_noop() {
        assert_eq!(run("goto projects now"), None);
    }

    #[test]
    fn ambiguous_section_is_noop() {
        let secs = vec!["work".to_string(), "writing".to_string()];
        assert_eq!(complete("goto w", COMMANDS.iter().copied(), "goto", &secs), None);
    }
}
