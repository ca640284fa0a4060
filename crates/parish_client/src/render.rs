use parish_core::{Article, IndexEntry};
use std::fmt::Write;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps the text between each pair of `delim` occurrences in `tag`.
/// Delimiters pair left to right; a trailing unpaired delimiter is kept
/// literally.
fn wrap_pairs(input: &str, delim: &str, tag: &str) -> String {
    let parts: Vec<&str> = input.split(delim).collect();
    let n = parts.len();
    if n < 3 {
        return input.to_string();
    }
    let mut out = String::with_capacity(input.len());
    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 1 {
            if i == n - 1 {
                out.push_str(delim);
                out.push_str(part);
            } else {
                let _ = write!(out, "<{tag}>{part}</{tag}>");
            }
        } else {
            out.push_str(part);
        }
    }
    out
}

/// Inline emphasis: `**strong**` then `*light*`, applied after HTML
/// escaping. The double delimiter binds first so `**x**` never reads as
/// two empty single-star spans.
pub fn format_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let strong = wrap_pairs(&escaped, "**", "strong");
    wrap_pairs(&strong, "*", "em")
}

/// Renders the article body from its structured section model.
pub fn render_article(article: &Article) -> String {
    let mut html = String::new();
    let _ = write!(html, "<article>");
    let _ = write!(html, "<h1>{}</h1>", escape_html(&article.title));
    if !article.subtitle.is_empty() {
        let _ = write!(html, "<p class=\"subtitle\">{}</p>", escape_html(&article.subtitle));
    }
    let _ = write!(
        html,
        "<p class=\"byline\">{} · {} · {}</p>",
        escape_html(&article.author),
        escape_html(&article.date),
        escape_html(&article.read_time)
    );

    if let Some(series) = &article.series {
        let _ = write!(
            html,
            "<p class=\"series\">{} · part {} of {}</p>",
            escape_html(&series.title),
            series.part,
            series.total_parts
        );
    }

    for section in &article.sections {
        let _ = write!(html, "<section>");
        if let Some(title) = &section.title {
            let _ = write!(html, "<h2>{}</h2>", escape_html(title));
        }
        if let Some(paragraphs) = &section.content {
            for paragraph in paragraphs {
                let _ = write!(html, "<p>{}</p>", format_inline(paragraph));
            }
        }
        if let Some(quote) = &section.quote {
            let _ = write!(html, "<blockquote>{}</blockquote>", escape_html(quote));
        }
        if let Some(image) = &section.image {
            let _ = write!(html, "<img src=\"{}\" alt=\"\">", escape_html(image));
        }
        let _ = write!(html, "</section>");
    }

    if let Some(references) = &article.references {
        let _ = write!(html, "<ol class=\"references\">");
        for reference in references {
            let _ = write!(
                html,
                "<li value=\"{}\">{}</li>",
                reference.number,
                escape_html(&reference.citation)
            );
        }
        let _ = write!(html, "</ol>");
    }

    let _ = write!(html, "</article>");
    html
}

/// Renders the listing view from index entries, in the order the API
/// returned them (date descending).
pub fn render_listing(entries: &[IndexEntry]) -> String {
    let mut html = String::new();
    let _ = write!(html, "<ul class=\"article-list\">");
    for entry in entries {
        let _ = write!(
            html,
            "<li><a href=\"{}\"><h3>{}</h3><p>{}</p><span>{} · {} · {}</span></a></li>",
            escape_html(&entry.url),
            escape_html(&entry.title),
            escape_html(&entry.subtitle),
            escape_html(&entry.author),
            escape_html(&entry.date),
            escape_html(&entry.read_time)
        );
    }
    let _ = write!(html, "</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_delimiter_binds_first() {
        assert_eq!(
            format_inline("the word *tewahdo* means **unified**"),
            "the word <em>tewahdo</em> means <strong>unified</strong>"
        );
    }

    #[test]
    fn unpaired_delimiter_stays_literal() {
        assert_eq!(format_inline("a*b"), "a*b");
        assert_eq!(format_inline("a *b* c*d"), "a <em>b</em> c*d");
    }

    #[test]
    fn text_is_escaped_before_emphasis() {
        assert_eq!(
            format_inline("<b>&*x*"),
            "&lt;b&gt;&amp;<em>x</em>"
        );
    }

    #[test]
    fn sections_render_in_order() {
        let article: Article = serde_json::from_str(
            r#"{
                "id": "a", "title": "Title & More", "subtitle": "Sub",
                "author": "A", "date": "2024-01-01", "readTime": "1 min",
                "sections": [
                    {"title": "First", "content": ["plain", "with **bold**"]},
                    {"quote": "a quote"},
                    {"image": "/images/icon.png"}
                ]
            }"#,
        )
        .unwrap();
        let html = render_article(&article);
        assert!(html.contains("<h1>Title &amp; More</h1>"));
        let first = html.find("<h2>First</h2>").unwrap();
        let bold = html.find("<p>with <strong>bold</strong></p>").unwrap();
        let quote = html.find("<blockquote>a quote</blockquote>").unwrap();
        let image = html.find("<img src=\"/images/icon.png\"").unwrap();
        assert!(first < bold && bold < quote && quote < image);
    }

    #[test]
    fn listing_preserves_entry_order() {
        let entries: Vec<IndexEntry> = serde_json::from_str(
            r#"[
                {"id":"b","title":"B","subtitle":"","author":"","date":"2024-03-01","category":"liturgy","readTime":"","slug":"b","url":"/articles/liturgy/b"},
                {"id":"a","title":"A","subtitle":"","author":"","date":"2024-01-10","category":"qa","readTime":"","slug":"a","url":"/articles/qa/a"}
            ]"#,
        )
        .unwrap();
        let html = render_listing(&entries);
        assert!(html.find("/articles/liturgy/b").unwrap() < html.find("/articles/qa/a").unwrap());
    }
}
