use std::collections::HashSet;

/// Clue text from the API sometimes carries inline markup (`<i>`, `<br />`).
/// Keep the harmless inline tags and drop everything else.
#[must_use]
pub fn sanitize_clue_html(html: &str) -> String {
    let tags: HashSet<&str> = ["i", "b", "em", "strong", "u", "br", "sub", "sup"]
        .into_iter()
        .collect();

    ammonia::Builder::new()
        .tags(tags)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_inline_formatting() {
        assert_eq!(sanitize_clue_html("<i>Moby-Dick</i>"), "<i>Moby-Dick</i>");
    }

    #[test]
    fn strips_links_and_scripts() {
        let cleaned = sanitize_clue_html(r#"<a href="x">see</a><script>alert(1)</script>"#);
        assert_eq!(cleaned, "see");
    }
}
