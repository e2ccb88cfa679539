use crate::types::{FormattedLine, NormalizedEntry};
use std::fmt;

/// Source shown when the headline carries no "- Publisher" suffix.
pub const DEFAULT_SOURCE: &str = "뉴스";

/// Split "Headline - Publisher" at the last hyphen.
pub fn format_entry(entry: &NormalizedEntry) -> FormattedLine {
    let (title, source) = match entry.title.rsplit_once('-') {
        Some((title, source)) => (title.trim().to_string(), source.trim().to_string()),
        None => (entry.title.clone(), DEFAULT_SOURCE.to_string()),
    };

    FormattedLine {
        source,
        title,
        link: entry.link.clone(),
    }
}

/// Renders as `• [source] [title](link)`, which the chat side reads as Markdown.
impl fmt::Display for FormattedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "• [{}] [{}]({})", self.source, self.title, self.link)
    }
}
