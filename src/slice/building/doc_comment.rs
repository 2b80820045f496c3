//! Documentation-comment lookup
//!
//! A declaration's doc comment is the block comment that ends right before it,
//! with nothing but whitespace in between. Both the opener (`/**` or `/*`) and
//! the closer (`*/` or `**/`) must sit on their own lines, so the comment body
//! always spans whole lines.
//!
//! The body is normalized by removing the prefix all its lines share: leading
//! spaces plus at most one column of `*`. Indentation past that prefix is kept.

/// Find the doc comment for a node starting at byte `node_start`
pub fn find_doc(source: &str, node_start: usize) -> Option<String> {
    let preceding = source.get(..node_start)?;
    let before_closer = preceding.trim_end().strip_suffix("*/")?;
    let before_closer = before_closer.strip_suffix('*').unwrap_or(before_closer);

    // Only whitespace may precede the closer on its line
    let text_end = before_closer.trim_end().len();
    let body_end = text_end + before_closer[text_end..].find('\n')?;

    let body_start = opener_line_end(&source[..body_end])? + 1;
    Some(normalize(&source[body_start..body_end]))
}

/// Offset of the newline ending the comment's opener line
///
/// The opener is the last `/*` before the body; nothing may follow it on its line.
fn opener_line_end(text: &str) -> Option<usize> {
    let opener = text.rfind("/*")?;
    let line_end = opener + text[opener..].find('\n')?;
    match text[opener..line_end].trim_end() {
        "/*" | "/**" => Some(line_end),
        _ => None,
    }
}

fn normalize(body: &str) -> String {
    let lines: Vec<Vec<char>> = body
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
        .collect();

    let prefix = common_prefix(&lines);

    lines
        .iter()
        .map(|line| line.iter().skip(prefix).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Number of leading columns made of spaces and at most one `*` column
fn common_prefix(lines: &[Vec<char>]) -> usize {
    let mut column = 0;
    let mut seen_asterisk = false;

    loop {
        let symbols: Vec<Option<char>> = lines.iter().map(|l| l.get(column).copied()).collect();

        if symbols.iter().all(Option::is_none) {
            return column;
        }
        if symbols.iter().all(|s| matches!(s, None | Some(' '))) {
            column += 1;
            continue;
        }
        if !seen_asterisk && symbols.iter().all(|s| *s == Some('*')) {
            seen_asterisk = true;
            column += 1;
            continue;
        }
        return column;
    }
}
