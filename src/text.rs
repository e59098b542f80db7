//! Markup stripping shared by the extractors.
//!
//! HTML goes through `html2md` first so block structure (paragraphs, headings,
//! list items) survives as line breaks, then the markdown syntax is removed to
//! leave plain text.

pub fn html_to_markdown(html: &str) -> String {
    html2md::parse_html(html, false)
}

pub fn markdown_to_plain_text(md: &str) -> String {
    let lines: Vec<String> = md.lines().filter_map(strip_block).collect();
    clean_text(&lines.join("\n"))
}

/// First `# ` heading in a markdown chunk, if any
pub fn extract_title(md: &str) -> Option<String> {
    for line in md.lines() {
        let trimmed = line.trim();
        if let Some(title) = trimmed.strip_prefix("# ") {
            let title = strip_inline(title.trim());
            let title = title.trim();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }
    None
}

/// Collapse blank-line runs to a single blank line and trim whitespace
pub fn clean_text(text: &str) -> String {
    let mut result = text
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");

    while result.contains("\n\n\n") {
        result = result.replace("\n\n\n", "\n\n");
    }

    result.trim().to_string()
}

fn strip_block(line: &str) -> Option<String> {
    let trimmed = line.trim_start();

    if is_rule(trimmed) {
        return None;
    }

    let content = if trimmed.starts_with('#') {
        trimmed.trim_start_matches('#').trim_start()
    } else if let Some(rest) = trimmed.strip_prefix('>') {
        rest.trim_start()
    } else {
        trimmed
    };

    // keep bullets readable as plain text
    for marker in ["* ", "+ ", "- "] {
        if let Some(rest) = content.strip_prefix(marker) {
            return Some(format!("- {}", strip_inline(rest)));
        }
    }

    Some(strip_inline(content))
}

fn is_rule(line: &str) -> bool {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3
        && (compact.chars().all(|c| c == '-')
            || compact.chars().all(|c| c == '*')
            || compact.chars().all(|c| c == '_'))
}

fn strip_inline(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' if chars.get(i + 1).is_some_and(|c| c.is_ascii_punctuation()) => {
                out.push(chars[i + 1]);
                i += 2;
            }
            '!' if chars.get(i + 1) == Some(&'[') => match parse_link(&chars, i + 1) {
                // images carry no readable text
                Some((_, next)) => i = next,
                None => {
                    out.push('!');
                    i += 1;
                }
            },
            '[' => match parse_link(&chars, i) {
                Some((text, next)) => {
                    out.push_str(&strip_inline(&text));
                    i = next;
                }
                None => {
                    out.push('[');
                    i += 1;
                }
            },
            '*' | '`' => i += 1,
            '_' if chars.get(i + 1) == Some(&'_') => i += 2,
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Parses `[text](target)` starting at `open`; returns the text and the index past `)`
fn parse_link(chars: &[char], open: usize) -> Option<(String, usize)> {
    let close = open + chars[open..].iter().position(|&c| c == ']')?;
    if chars.get(close + 1) != Some(&'(') {
        return None;
    }
    let end = close + 1 + chars[close + 1..].iter().position(|&c| c == ')')?;
    let text: String = chars[open + 1..close].iter().collect();
    Some((text, end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_headings_emphasis_and_links() {
        let md = "# The *First* Chapter\n\nSome **bold** and [linked](http://x.org/a) text.\n\n![fig](images/fig.png)\n";
        assert_eq!(
            markdown_to_plain_text(md),
            "The First Chapter\n\nSome bold and linked text."
        );
    }

    #[test]
    fn collapses_blank_runs_and_trailing_space() {
        let text = "\n\none  \n\n\n\n\ntwo\t\n\n";
        assert_eq!(clean_text(text), "one\n\ntwo");
    }

    #[test]
    fn drops_rules_and_unescapes() {
        let md = "a\\_b\n\n---\n\n* item\n> quoted";
        assert_eq!(markdown_to_plain_text(md), "a_b\n\n- item\nquoted");
    }

    #[test]
    fn title_comes_from_first_top_level_heading() {
        let md = "intro\n## Sub\n# **Real** Title\n# Later";
        assert_eq!(extract_title(md).as_deref(), Some("Real Title"));
        assert_eq!(extract_title("no headings here"), None);
    }

    #[test]
    fn unmatched_brackets_are_kept() {
        assert_eq!(strip_inline("see [note] here"), "see [note] here");
        assert_eq!(strip_inline("wow!"), "wow!");
    }
}
