//! Markup helpers for rendered lines.
//!
//! Built-in commands emit a small, trusted subset of HTML (`<span class>` and
//! external-link anchors). Anything that originates from the user goes through
//! [`escape_html`] first.

/// Class carried by anchors that open an external resource.
pub const EXTERNAL_LINK_CLASS: &str = "ext-link";

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap `text` (escaped) in a span with the given class.
pub fn styled(class: &str, text: &str) -> String {
    format!("<span class=\"{class}\">{}</span>", escape_html(text))
}

/// An anchor marked as an external link.
pub fn external_link(label: &str, url: &str) -> String {
    format!(
        "<a class=\"{EXTERNAL_LINK_CLASS}\" href=\"{}\" target=\"_blank\">{}</a>",
        escape_html(url),
        escape_html(label)
    )
}

/// Targets of every external-link anchor in `markup`, in order.
pub fn external_links(markup: &str) -> Vec<String> {
    let marker = format!("<a class=\"{EXTERNAL_LINK_CLASS}\" href=\"");
    let mut links = Vec::new();
    let mut rest = markup;
    while let Some(start) = rest.find(&marker) {
        rest = &rest[start + marker.len()..];
        let Some(end) = rest.find('"') else { break };
        links.push(unescape_html(&rest[..end]));
        rest = &rest[end..];
    }
    links
}

/// Strip tags and decode the entities [`escape_html`] produces, for hosts that
/// render plain text.
pub fn to_plain(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {},
        }
    }
    unescape_html(&text)
}

fn unescape_html(input: &str) -> String {
    // `&amp;` last so `&amp;lt;` decodes to `&lt;`, not `<`.
    input
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
