//! @ai:module:intent Split a docstring into its free text and raw directive groups
//! @ai:module:layer application
//! @ai:module:public_api scan, cleandoc, ScannedDocstring, DirectiveGroup
//! @ai:module:stateless true

use regex::Regex;
use std::sync::LazyLock;

static RE_DIRECTIVE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:[A-Za-z_]").expect("Invalid regex"));

/// @ai:intent A directive line plus its joined continuation lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveGroup {
    /// 1-based line number in the original docstring
    pub line_number: usize,
    /// The trimmed first line of the group
    pub line: String,
    /// Continuation lines, each trimmed, joined with single spaces
    pub continuation: String,
}

/// @ai:intent Result of scanning a docstring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedDocstring {
    pub free_text: String,
    pub groups: Vec<DirectiveGroup>,
}

/// @ai:intent Scan a raw docstring into free text and directive groups
/// @ai:post free_text holds every line before the first directive group, dedented and blank-trimmed
/// @ai:post every line after the first directive belongs to exactly one group
/// @ai:effects pure
pub fn scan(text: &str) -> ScannedDocstring {
    let mut free_lines: Vec<String> = Vec::new();
    let mut groups: Vec<DirectiveGroup> = Vec::new();

    for (line_number, line) in dedented_lines(text) {
        let trimmed = line.trim();

        if is_directive_start(trimmed) {
            groups.push(DirectiveGroup {
                line_number,
                line: trimmed.to_string(),
                continuation: String::new(),
            });
            continue;
        }

        match groups.last_mut() {
            Some(group) => {
                if !trimmed.is_empty() {
                    if !group.continuation.is_empty() {
                        group.continuation.push(' ');
                    }
                    group.continuation.push_str(trimmed);
                }
            }
            None => free_lines.push(line),
        }
    }

    ScannedDocstring {
        free_text: trim_blank_lines(&free_lines).join("\n"),
        groups,
    }
}

/// @ai:intent Check whether a trimmed line opens a new directive group
/// @ai:effects pure
pub fn is_directive_start(trimmed: &str) -> bool {
    RE_DIRECTIVE_START.is_match(trimmed)
}

/// @ai:intent Dedent a docstring the way documentation tools clean them
/// @ai:post leading and trailing blank lines are removed, trailing whitespace is stripped
/// @ai:effects pure
pub fn cleandoc(text: &str) -> String {
    dedented_lines(text)
        .into_iter()
        .map(|(_, line)| line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Dedents every line after the first by their common indentation, strips the first line on
/// its own, and drops leading/trailing blank lines. Keeps 1-based original line numbers.
fn dedented_lines(text: &str) -> Vec<(usize, String)> {
    let raw: Vec<&str> = text.lines().collect();
    if raw.is_empty() {
        return Vec::new();
    }

    let margin = raw
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);

    let mut lines: Vec<(usize, String)> = raw
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let stripped = if idx == 0 {
                line.trim_start()
            } else {
                strip_indent(line, margin)
            };
            (idx + 1, stripped.trim_end().to_string())
        })
        .collect();

    while lines.first().is_some_and(|(_, l)| l.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|(_, l)| l.is_empty()) {
        lines.pop();
    }

    lines
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Removes up to `margin` leading whitespace characters.
fn strip_indent(line: &str, margin: usize) -> &str {
    let cut = line
        .char_indices()
        .take(margin)
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(0);
    &line[cut..]
}

fn trim_blank_lines(lines: &[String]) -> &[String] {
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => &lines[start..=end],
        _ => &[],
    }
}
