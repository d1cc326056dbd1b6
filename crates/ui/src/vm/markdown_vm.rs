//! Lesson text to HTML fragments.
//!
//! Only the markup the study service actually emits is recognised: labelled
//! `###` sections, generic `###` headings, `**bold**` and newlines. Input is
//! trusted and never escaped.

use std::sync::LazyLock;

use regex::Regex;

const SECTION_MARK: &str = "###";
const SECTION_OPEN: &str = "### ";
const BLOCK_CLOSE: &str = "</p></div>";

/// Section labels and the block each one opens, in matching priority.
const LABELLED_BLOCKS: [(&str, &str); 4] = [
    (
        "问题引导",
        r#"<div class="question-guide"><h3>🤔 问题引入</h3><p>"#,
    ),
    (
        "核心概念讲解",
        r#"<div class="key-concept"><h3>📚 核心讲解</h3><p>"#,
    ),
    (
        "简短短示例",
        r#"<div class="example-box"><h4>💡 示例</h4><p>"#,
    ),
    (
        "练习题",
        r#"<div class="exercise-box"><h4>✏️ 练习题</h4><p>"#,
    ),
];

static BOLD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").ok());

/// Format lesson text as an HTML fragment. `None` and `""` give `""`.
#[must_use]
pub fn format_markdown(text: Option<&str>) -> String {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return String::new();
    };
    let sections = render_sections(text);
    let bold = render_bold(&sections);
    bold.replace('\n', "<br>")
}

fn render_sections(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 64);
    let mut rest = text;

    while let Some(start) = rest.find(SECTION_OPEN) {
        out.push_str(&rest[..start]);
        let body = &rest[start + SECTION_OPEN.len()..];
        let end = body.find(SECTION_MARK).unwrap_or(body.len());
        render_section(&body[..end], &mut out);
        rest = &body[end..];
    }
    out.push_str(rest);
    out
}

/// `body` is everything after one `### ` up to the next `###`.
fn render_section(body: &str, out: &mut String) {
    for (label, open) in LABELLED_BLOCKS {
        if let Some(content) = body.strip_prefix(label) {
            out.push_str(open);
            out.push_str(content);
            out.push_str(BLOCK_CLOSE);
            return;
        }
    }

    out.push_str("<h3>");
    out.push_str(body);
    out.push_str("</h3>");
}

fn render_bold(text: &str) -> String {
    match BOLD.as_ref() {
        Some(bold) => bold.replace_all(text, "<strong>$1</strong>").into_owned(),
        None => text.to_owned(),
    }
}
