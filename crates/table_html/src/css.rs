//! Inline style helpers shared by the reader and writer

/// Serialize declarations as `property: value;` pairs joined by a single
/// space. Order is the caller's; the writer relies on this being stable.
pub fn serialize_style(decls: &[(String, String)]) -> String {
    decls
        .iter()
        .map(|(prop, value)| format!("{}: {};", prop, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split an inline style attribute into (property, value) pairs. Entries
/// without a colon are dropped.
pub fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim();
            let value = value.trim();
            if prop.is_empty() || value.is_empty() {
                None
            } else {
                Some((prop.to_ascii_lowercase(), value.to_string()))
            }
        })
        .collect()
}

/// Escape text for element content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style() {
        let decls = parse_style("background-color: #ff0000; color:#fff ; broken; : bad;");
        assert_eq!(
            decls,
            vec![
                ("background-color".to_string(), "#ff0000".to_string()),
                ("color".to_string(), "#fff".to_string()),
            ]
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let decls = vec![
            ("background-color".to_string(), "#ff0000".to_string()),
            ("vertical-align".to_string(), "top".to_string()),
        ];
        let style = serialize_style(&decls);
        assert_eq!(style, "background-color: #ff0000; vertical-align: top;");
        assert_eq!(parse_style(&style), decls);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
