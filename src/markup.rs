// src/markup.rs
//
// Pane markup → styled spans.
//
// The markup is a small HTML subset: <b>/<strong>, <br>, <a href>, <pre>/<code>,
// plus plain text with emoji labels. Rendering follows HTML rules: whitespace
// (newlines included) collapses to one space, only <br> and block ends break lines.

use scraper::{ElementRef, Html, Node};

use crate::core::sanitize::{collapse_ws, normalize_ws};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Code(String),
    Link { text: String, href: String },
    Break,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style { Plain, Bold }

struct Builder {
    spans: Vec<Span>,
    // true at the start of a line or right after a space
    skip_space: bool,
}

impl Builder {
    fn text(&mut self, raw: &str, style: Style) {
        let mut t = collapse_ws(raw);
        if self.skip_space {
            t = t.trim_start().to_string();
        }
        if t.is_empty() { return; }
        self.skip_space = t.ends_with(' ');
        self.spans.push(match style {
            Style::Plain => Span::Text(t),
            Style::Bold => Span::Bold(t),
        });
    }

    fn push(&mut self, span: Span) {
        self.skip_space = matches!(span, Span::Break);
        self.spans.push(span);
    }

    fn walk(&mut self, el: ElementRef<'_>, style: Style) {
        for child in el.children() {
            match child.value() {
                Node::Text(t) => self.text(t, style),
                Node::Element(_) => {
                    if let Some(child_el) = ElementRef::wrap(child) {
                        self.element(child_el, style);
                    }
                }
                _ => {}
            }
        }
    }

    fn element(&mut self, el: ElementRef<'_>, style: Style) {
        match el.value().name() {
            "br" => self.push(Span::Break),
            "b" | "strong" => self.walk(el, Style::Bold),
            "pre" => {
                let code: String = el.text().collect();
                self.push(Span::Code(code));
                self.push(Span::Break);
            }
            "code" => {
                let code: String = el.text().collect();
                self.push(Span::Code(code));
                self.skip_space = false;
            }
            "a" => {
                let text = normalize_ws(&el.text().collect::<String>());
                let href = el.value().attr("href").unwrap_or("").trim().to_string();
                if !text.is_empty() || !href.is_empty() {
                    let text = if text.is_empty() { href.clone() } else { text };
                    self.push(Span::Link { text, href });
                    self.skip_space = false;
                }
            }
            "p" | "div" | "li" => {
                self.walk(el, style);
                self.push(Span::Break);
            }
            _ => self.walk(el, style),
        }
    }
}

pub fn parse(markup: &str) -> Vec<Span> {
    let fragment = Html::parse_fragment(markup);
    let mut b = Builder { spans: Vec::new(), skip_space: true };
    b.walk(fragment.root_element(), Style::Plain);
    b.spans
}

/// Spans grouped into display lines (split on `Break`).
pub fn lines(spans: &[Span]) -> impl Iterator<Item = &[Span]> {
    spans.split(|s| matches!(s, Span::Break))
}

/// Plain-text rendering for terminals.
pub fn to_plain_text(spans: &[Span]) -> String {
    let mut out = s!();
    for line in lines(spans) {
        let mut l = s!();
        for span in line {
            match span {
                Span::Text(t) | Span::Bold(t) | Span::Code(t) => l.push_str(t),
                Span::Link { text, href } if text == href || href.is_empty() => l.push_str(text),
                Span::Link { text, href } => l.push_str(&format!("{text} ({href})")),
                Span::Break => {}
            }
        }
        out.push_str(l.trim_end());
        out.push('\n');
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_and_breaks() {
        let spans = parse("\n\n📌 <b>Summary</b><br>\nSome   text.<br>\n\n");
        assert_eq!(spans, vec![
            Span::Text(s!("📌 ")),
            Span::Bold(s!("Summary")),
            Span::Break,
            Span::Text(s!("Some text.")),
            Span::Break,
        ]);
    }

    #[test]
    fn code_and_link() {
        let spans = parse(r#"<pre><code>curl -I https://x</code></pre>see <a href="https://y">docs</a>"#);
        assert_eq!(spans, vec![
            Span::Code(s!("curl -I https://x")),
            Span::Break,
            Span::Text(s!("see ")),
            Span::Link { text: s!("docs"), href: s!("https://y") },
        ]);
    }

    #[test]
    fn entities_decode() {
        assert_eq!(parse("a &lt;b&gt; &amp; c"), vec![Span::Text(s!("a <b> & c"))]);
    }

    #[test]
    fn plain_text_rendering() {
        let spans = parse(r#"🎯 <b>Test Objectives:</b><br>- one<br>- two<br><br>🔗 <b>Reference:</b> <a href="https://x">https://x</a>"#);
        assert_eq!(
            to_plain_text(&spans),
            "🎯 Test Objectives:\n- one\n- two\n\n🔗 Reference: https://x"
        );
    }

    #[test]
    fn empty_markup_has_no_spans() {
        assert!(parse("").is_empty());
        assert!(parse("  \n ").is_empty());
    }
}
