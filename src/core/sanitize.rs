// src/core/sanitize.rs

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    collapse_ws(s).trim().to_string()
}

/// Collapse whitespace runs to one space, keeping a single leading/trailing space if present.
pub fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out
}

/// Join the non-blank lines of `s` with single spaces (code blocks rendered on one line).
pub fn collapse_lines(s: &str) -> String {
    s.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape text so it can sit inside the pane markup (text or quoted attribute).
pub fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn collapse_keeps_edge_space() {
        assert_eq!(collapse_ws("  a \n\t b  "), " a b ");
        assert_eq!(collapse_ws("\n"), " ");
    }

    #[test]
    fn lines_join_on_single_space() {
        assert_eq!(collapse_lines("curl -I\n\n   https://x  \r\n| grep Server"), "curl -I https://x | grep Server");
    }

    #[test]
    fn escapes_markup_chars() {
        assert_eq!(escape_markup(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
        assert_eq!(escape_markup("plain"), "plain");
    }
}
