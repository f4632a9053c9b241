/// `0.82` -> `"82.0%"`. Out-of-range inputs are shown as they are.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn count_or_na(value: Option<u32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(0.82), "82.0%");
        assert_eq!(format_percent(0.91), "91.0%");
        assert_eq!(format_percent(0.755), "75.5%");
    }

    #[test]
    fn malformed_confidence_passes_through() {
        assert_eq!(format_percent(1.5), "150.0%");
        assert_eq!(format_percent(-0.1), "-10.0%");
    }

    #[test]
    fn missing_counts_show_na() {
        assert_eq!(count_or_na(None), "N/A");
        assert_eq!(count_or_na(Some(0)), "0");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>St. Mary's & "Co"</b>"#),
            "&lt;b&gt;St. Mary&#39;s &amp; &quot;Co&quot;&lt;/b&gt;"
        );
    }
}
