//! Embedded code samples
//!
//! Bodies may carry illustrative code, either as Markdown fences
//! (```` ```scala ````) or as Liquid highlight tags
//! (`{% highlight scala %}`). The samples are opaque text: they are
//! located and labelled, never compiled or run.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static HIGHLIGHT_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{%-?\s*highlight\s+([A-Za-z0-9_+#.-]+)[^%]*-?%\}\s*$")
        .expect("highlight pattern is valid")
});

static HIGHLIGHT_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{%-?\s*endhighlight\s*-?%\}\s*$").expect("endhighlight pattern is valid")
});

/// A code sample found in a document body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Language tag, if the block declared one
    pub language: Option<String>,

    /// The code text, without the opening and closing markers
    pub content: String,
}

/// An open Markdown fence: marker character and run length
struct Fence {
    marker: char,
    len: usize,
}

enum Open {
    Fence(Fence),
    Highlight,
}

/// Extract every code sample from a body, in order of appearance
///
/// An unterminated block runs to the end of the body.
#[must_use]
pub fn extract_code_blocks(body: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut open: Option<(Open, Option<String>, Vec<&str>)> = None;

    for line in body.lines() {
        if let Some((kind, language, lines)) = open.as_mut() {
            let closed = match kind {
                Open::Fence(fence) => closes_fence(line, fence),
                Open::Highlight => HIGHLIGHT_CLOSE.is_match(line.trim()),
            };
            if closed {
                blocks.push(CodeBlock {
                    language: language.take(),
                    content: join_lines(lines),
                });
                open = None;
            } else {
                lines.push(line);
            }
            continue;
        }

        if let Some((fence, info)) = opens_fence(line) {
            open = Some((Open::Fence(fence), info, Vec::new()));
        } else if let Some(caps) = HIGHLIGHT_OPEN.captures(line.trim()) {
            let language = caps.get(1).map(|m| m.as_str().to_string());
            open = Some((Open::Highlight, language, Vec::new()));
        }
    }

    if let Some((_, language, lines)) = open {
        blocks.push(CodeBlock {
            language,
            content: join_lines(&lines),
        });
    }

    blocks
}

fn opens_fence(line: &str) -> Option<(Fence, Option<String>)> {
    let trimmed = line.trim_start();
    // Fences may be indented by at most three spaces
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == marker).count();
    if len < 3 {
        return None;
    }
    let info = trimmed[len..].trim();
    if marker == '`' && info.contains('`') {
        return None;
    }
    let language = info.split_whitespace().next().map(String::from);
    Some((Fence { marker, len }, language))
}

fn closes_fence(line: &str, fence: &Fence) -> bool {
    let trimmed = line.trim();
    let run = trimmed.chars().take_while(|c| *c == fence.marker).count();
    run >= fence.len && run == trimmed.chars().count()
}

fn join_lines(lines: &[&str]) -> String {
    let mut content = lines.join("\n");
    if !lines.is_empty() {
        content.push('\n');
    }
    content
}
