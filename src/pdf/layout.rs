//! Text layout helpers for the sheet renderer. The built-in PDF fonts carry
//! no metrics we can query, so wrapping works on a character budget sized
//! for Helvetica at body size.

/// Greedy word-wrap to a fixed character budget. Paragraph breaks are
/// preserved; a word longer than the budget is hard-split so a pathological
/// token cannot overflow the printable width.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word;
            while word.chars().count() > max_chars {
                let head: String = word.chars().take(max_chars).collect();
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                word = &word[head.len()..];
                lines.push(head);
            }
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Underscore rule standing in for an empty field, as on the paper form.
pub fn blank_rule(width: usize) -> String {
    "_".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_budget() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        assert_eq!(wrap_text("", 40), vec![String::new()]);
    }

    #[test]
    fn preserves_paragraph_breaks() {
        let lines = wrap_text("first\n\nsecond", 40);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn hard_splits_oversized_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }
}
