//! Assembles the fragments returned by the generation service into a single
//! standalone HTML document, ready to be written to disk or shown in a preview.

/// Combine body markup, stylesheet text and script text into one complete
/// HTML document string.
///
/// Missing fragments are treated as empty. The fragments are inserted
/// verbatim: the generation service is the trusted author of all three, and
/// the document is only ever rendered in a surface with no privileges over
/// this client.
pub fn build_document(html: Option<&str>, css: Option<&str>, js: Option<&str>) -> String {
    let html = html.unwrap_or("");
    let css = css.unwrap_or("");
    let js = js.unwrap_or("");
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"/>\
         <style>{css}</style></head><body>{html}<script>{js}</script></body></html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_all_three_fragments_verbatim() {
        let doc = build_document(
            Some("<h1>Hi</h1>"),
            Some("h1{color:red}"),
            Some("console.log(1)"),
        );
        assert!(doc.contains("<style>h1{color:red}</style>"));
        assert!(doc.contains("<body><h1>Hi</h1><script>console.log(1)</script></body>"));
        assert!(doc.starts_with("<!doctype html>"));
        assert!(doc.ends_with("</html>"));
    }

    #[test]
    fn missing_fragments_become_empty_strings() {
        let doc = build_document(None, None, None);
        assert!(doc.contains("<style></style>"));
        assert!(doc.contains("<body><script></script></body>"));
    }

    #[test]
    fn contains_exactly_one_style_and_one_script_block() {
        let doc = build_document(Some("<p>x</p>"), Some("p{}"), Some("1+1"));
        assert_eq!(doc.matches("<style>").count(), 1);
        assert_eq!(doc.matches("<script>").count(), 1);
    }

    #[test]
    fn declares_charset_and_viewport() {
        let doc = build_document(Some(""), Some(""), Some(""));
        assert!(doc.contains("charset=\"utf-8\""));
        assert!(doc.contains("name=\"viewport\""));
        assert!(doc.contains("width=device-width,initial-scale=1"));
    }

    #[test]
    fn output_is_deterministic() {
        let a = build_document(Some("<div/>"), Some("div{}"), Some("void 0"));
        let b = build_document(Some("<div/>"), Some("div{}"), Some("void 0"));
        assert_eq!(a, b);
    }
}
