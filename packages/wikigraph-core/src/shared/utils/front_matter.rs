//! Leading metadata block handling

/// Split a leading `---` front-matter block off `input`.
///
/// Returns `(front_matter, body)`. The opening line must be exactly `---`
/// (a BOM is tolerated); the block closes at the next `---` or `...` line.
/// Blank lines directly after the closing delimiter belong to neither part.
/// Without a closing delimiter nothing is stripped.
pub fn split_front_matter(input: &str) -> (Option<&str>, &str) {
    let text = input.strip_prefix('\u{feff}').unwrap_or(input);

    let Some((first, mut rest)) = split_line(text) else {
        return (None, input);
    };
    if first.trim_end() != "---" {
        return (None, input);
    }

    let block_start = text.len() - rest.len();
    loop {
        let Some((line, after)) = split_line(rest) else {
            return (None, input);
        };
        let line_start = text.len() - rest.len();
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            let body = after.trim_start_matches(['\n', '\r', ' ', '\t']);
            return (Some(&text[block_start..line_start]), body);
        }
        rest = after;
    }
}

/// Body of `input` with any leading front matter removed
pub fn strip_front_matter(input: &str) -> &str {
    split_front_matter(input).1
}

/// Next line (without terminator) and the remainder; `None` on empty input
fn split_line(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }
    match text.find('\n') {
        Some(pos) => Some((&text[..pos], &text[pos + 1..])),
        None => Some((text, "")),
    }
}
