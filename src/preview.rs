/// Renders at most `limit` leading values joined by `", "`, noting the total when truncated.
pub fn preview(values: &[i64], limit: usize) -> String {
    let shown = values.len().min(limit);
    let mut out = values[..shown]
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if values.len() > shown {
        out.push_str(&format!("\n... (total {} items)", values.len()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_empty_text() {
        assert_eq!(preview(&[], 200), "");
    }

    #[test]
    fn short_list_is_shown_whole() {
        let values: Vec<i64> = (1..=50).collect();
        let text = preview(&values, 200);
        assert_eq!(text.split(", ").count(), 50);
        assert!(text.starts_with("1, 2, 3"));
        assert!(text.ends_with("50"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn long_list_is_truncated_with_total() {
        let values: Vec<i64> = (1..=500).collect();
        let text = preview(&values, 200);
        let (head, note) = text.split_once('\n').unwrap();
        assert_eq!(head.split(", ").count(), 200);
        assert!(head.ends_with("200"));
        assert_eq!(note, "... (total 500 items)");
    }

    #[test]
    fn exactly_at_limit_has_no_note() {
        let values = vec![7; 200];
        assert!(!preview(&values, 200).contains("total"));
    }
}
