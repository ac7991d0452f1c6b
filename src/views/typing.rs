//! Typing indicator view

use serde::Serialize;

#[derive(Serialize, Debug, PartialEq)]
pub struct TypingIndicatorView {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Render the indicator for the set of currently typing usernames.
pub fn render_typing_indicator(typists: &[String]) -> TypingIndicatorView {
    let label = match typists {
        [] => None,
        [one] => Some(format!("{} is typing...", one)),
        [one, two] => Some(format!("{} and {} are typing...", one, two)),
        _ => Some("Several people are typing...".to_string()),
    };
    TypingIndicatorView {
        active: label.is_some(),
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_nobody_typing() {
        let view = render_typing_indicator(&[]);
        assert!(!view.active);
        assert_eq!(view.label, None);
    }

    #[test]
    fn test_single_typist() {
        let view = render_typing_indicator(&names(&["alice"]));
        assert!(view.active);
        assert_eq!(view.label.as_deref(), Some("alice is typing..."));
    }

    #[test]
    fn test_two_typists() {
        let view = render_typing_indicator(&names(&["alice", "bob"]));
        assert_eq!(view.label.as_deref(), Some("alice and bob are typing..."));
    }

    #[test]
    fn test_many_typists() {
        let view = render_typing_indicator(&names(&["alice", "bob", "carol"]));
        assert_eq!(view.label.as_deref(), Some("Several people are typing..."));
    }
}
