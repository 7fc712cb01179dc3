/// Truncate a string to a maximum display width, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Word-wrap text to the given width, breaking on spaces.
///
/// Words longer than the width are split hard so a single long token
/// (a URL, usually) cannot push a line past the edge.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();

            if current.is_empty() {
                if word_len <= width {
                    current.push_str(word);
                } else {
                    // Hard-split an oversized token
                    let mut rest: Vec<char> = word.chars().collect();
                    while rest.len() > width {
                        lines.push(rest.drain(..width).collect());
                    }
                    current = rest.into_iter().collect();
                }
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                if word_len <= width {
                    current.push_str(word);
                } else {
                    let mut rest: Vec<char> = word.chars().collect();
                    while rest.len() > width {
                        lines.push(rest.drain(..width).collect());
                    }
                    current = rest.into_iter().collect();
                }
            }
        }
        lines.push(current);
    }

    // A trailing blank from an empty paragraph is meaningful; a trailing
    // blank from the final flush is not.
    if lines.last().is_some_and(|l| l.is_empty()) && !text.ends_with('\n') && !text.is_empty() {
        lines.pop();
    }
    if text.is_empty() {
        lines.clear();
    }
    lines
}

/// Current calendar year, for the footer copyright line
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
    }

    #[test]
    fn test_wrap_text_basic() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_text_exact_fit() {
        let lines = wrap_text("abcde fghij", 5);
        assert_eq!(lines, vec!["abcde", "fghij"]);
    }

    #[test]
    fn test_wrap_text_long_token() {
        let lines = wrap_text("see https://example.com/a/very/long/path ok", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert!(lines.concat().contains("example.com"));
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("anything", 0).is_empty());
    }
}
