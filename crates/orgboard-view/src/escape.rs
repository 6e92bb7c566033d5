//! Minimal HTML escaping for untrusted text.

/// Escapes the five HTML-significant characters.
///
/// Card titles, group labels and any path/URL interpolated into card markup
/// come from record metadata and must pass through here before rendering.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup_significant_characters() {
        assert_eq!(
            escape_html(r#"<img src="x" onerror='alert(1)'> & more"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;alert(1)&#39;&gt; &amp; more"
        );
        assert_eq!(escape_html("plain title"), "plain title");
    }
}
