mod common;

use common::seoul_now;
use news_briefing::digest::{DIGEST_FOOTER, DIGEST_TITLE};
use news_briefing::formatter::DEFAULT_SOURCE;
use news_briefing::{format_entry, DigestAssembler, FormattedLine, NormalizedEntry};
use std::collections::HashMap;

fn normalized(title: &str, link: &str) -> NormalizedEntry {
    NormalizedEntry {
        published_at: seoul_now(),
        title: title.to_string(),
        link: link.to_string(),
    }
}

fn line(source: &str, title: &str, link: &str) -> FormattedLine {
    FormattedLine {
        source: source.to_string(),
        title: title.to_string(),
        link: link.to_string(),
    }
}

#[test]
fn test_source_is_taken_after_last_hyphen() {
    let formatted = format_entry(&normalized("Fed cuts rates - Reuters", "https://example.com/fed"));
    assert_eq!(formatted.source, "Reuters");
    assert_eq!(formatted.title, "Fed cuts rates");

    let formatted = format_entry(&normalized("K-배터리 수출 급증 - 연합뉴스", "https://example.com/k"));
    assert_eq!(formatted.source, "연합뉴스");
    assert_eq!(formatted.title, "K-배터리 수출 급증");
}

#[test]
fn test_title_without_hyphen_gets_placeholder_source() {
    let formatted = format_entry(&normalized("No separator here", "https://example.com/x"));
    assert_eq!(formatted.source, DEFAULT_SOURCE);
    assert_eq!(formatted.title, "No separator here");
}

#[test]
fn test_rendered_line_shape() {
    let formatted = format_entry(&normalized("Fed cuts rates - Reuters", "https://example.com/fed"));
    assert_eq!(
        formatted.to_string(),
        "• [Reuters] [Fed cuts rates](https://example.com/fed)"
    );
}

#[test]
fn test_only_topics_with_lines_get_sections() {
    let topics = vec!["A".to_string(), "B".to_string()];
    let mut lines = HashMap::new();
    lines.insert("A".to_string(), vec![line("Src", "Headline", "https://example.com/a")]);
    lines.insert("B".to_string(), Vec::new());

    let digest = DigestAssembler::assemble(&topics, &lines, seoul_now(), 24);

    assert!(digest.has_news);
    assert_eq!(digest.sections.len(), 1);
    assert_eq!(digest.text.matches("📌 #").count(), 1);
    assert!(digest.text.contains("📌 #A\n• [Src] [Headline](https://example.com/a)\n\n"));
    assert!(!digest.text.contains("#B"));
}

#[test]
fn test_empty_digest_is_header_and_footer() {
    let topics = vec!["A".to_string(), "B".to_string()];
    let digest = DigestAssembler::assemble(&topics, &HashMap::new(), seoul_now(), 24);

    assert!(!digest.has_news);
    assert!(digest.sections.is_empty());
    assert_eq!(
        digest.text,
        format!(
            "{}\n📅 2026-10-18 09:00\n(최근 24시간 내 기사)\n\n{}",
            DIGEST_TITLE, DIGEST_FOOTER
        )
    );
}

#[test]
fn test_sections_follow_configured_order() {
    let topics = vec!["Z".to_string(), "A".to_string(), "M".to_string()];
    let mut lines = HashMap::new();
    for topic in &topics {
        lines.insert(
            topic.clone(),
            vec![
                line("S", &format!("{} first", topic), "https://example.com/1"),
                line("S", &format!("{} second", topic), "https://example.com/2"),
            ],
        );
    }

    let digest = DigestAssembler::assemble(&topics, &lines, seoul_now(), 12);

    let order: Vec<_> = digest.sections.iter().map(|s| s.topic.as_str()).collect();
    assert_eq!(order, vec!["Z", "A", "M"]);
    let z = digest.text.find("📌 #Z").unwrap();
    let a = digest.text.find("📌 #A").unwrap();
    let m = digest.text.find("📌 #M").unwrap();
    assert!(z < a && a < m);
    assert!(digest.text.find("Z first").unwrap() < digest.text.find("Z second").unwrap());
    assert!(digest.text.contains("(최근 12시간 내 기사)"));
    assert!(digest.text.ends_with(DIGEST_FOOTER));
}

#[test]
fn test_repeated_topic_gets_one_section() {
    let topics = vec!["A".to_string(), "A".to_string()];
    let mut lines = HashMap::new();
    lines.insert("A".to_string(), vec![line("S", "Only once", "https://example.com/once")]);

    let digest = DigestAssembler::assemble(&topics, &lines, seoul_now(), 24);

    assert_eq!(digest.sections.len(), 1);
    assert_eq!(digest.text.matches("📌 #A\n").count(), 1);
    assert_eq!(digest.text.matches("Only once").count(), 1);
}
