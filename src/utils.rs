use unicode_width::UnicodeWidthStr;

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Lays `left` and `right` out as one row of `width` cells, with `right`
/// pushed to the far edge. Widths are display widths, not byte lengths.
pub fn aligned_row(left: &str, right: &str, width: usize) -> String {
    let used = left.width() + right.width();
    if used >= width {
        return format!("{} {}", left, right);
    }
    let padding = width - used;
    format!("{}{}{}", left, " ".repeat(padding), right)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        let s = "Short string";
        let result = truncate_string(s, 20);
        assert_eq!(result, "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let s = "This is a very long string that should be truncated";
        let result = truncate_string(s, 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.len() <= 20);
    }

    #[test]
    fn test_truncate_string_exact_length() {
        let s = "Exactly twenty!!";
        let result = truncate_string(s, 20);
        assert_eq!(result, "Exactly twenty!!");
    }

    #[test]
    fn test_truncate_string_empty() {
        let s = "";
        let result = truncate_string(s, 20);
        assert_eq!(result, "");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        let s = "ética é responsabilidade";
        let result = truncate_string(s, 10);
        assert_eq!(result, "ética é...");
        assert_eq!(result.chars().count(), 10);
    }

    #[test]
    fn test_aligned_row_pads_between_columns() {
        let row = aligned_row("Ethics", "50.0%", 20);
        assert_eq!(row, "Ethics         50.0%");
        assert_eq!(row.len(), 20);
    }

    #[test]
    fn test_aligned_row_too_narrow_falls_back() {
        let row = aligned_row("A rather long title", "100.0%", 10);
        assert_eq!(row, "A rather long title 100.0%");
    }

    #[test]
    fn test_aligned_row_counts_display_width() {
        // é is two bytes but one cell
        let row = aligned_row("ética", "0.0%", 12);
        assert_eq!(row.width(), 12);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(62.5), "62.5%");
        assert_eq!(format_percent(100.0), "100.0%");
    }
}
