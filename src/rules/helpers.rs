/// Return capture group `idx`, or `None` when the group did not participate.
pub fn group(groups: &[String], idx: usize) -> Option<&str> {
    groups.get(idx).map(String::as_str).filter(|g| !g.is_empty())
}

/// Parse a strictly positive integer. Overflowing or zero values count as
/// unparseable.
pub fn parse_positive(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

/// True when the optional "flashgard" suffix group (group 1) was captured.
pub fn followed_by_flashgard(groups: &[String]) -> bool {
    group(groups, 1).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positive_rejects_zero_and_overflow() {
        assert_eq!(parse_positive("44"), Some(44));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("99999999999"), None);
    }

    #[test]
    fn empty_groups_are_missing() {
        let groups = vec!["freedom plus".to_string(), String::new()];
        assert_eq!(group(&groups, 1), None);
        assert_eq!(group(&groups, 0), Some("freedom plus"));
        assert!(!followed_by_flashgard(&groups));
    }
}
