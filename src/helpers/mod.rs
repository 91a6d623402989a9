//! Text helpers for excerpts and reading time

/// Strip markdown syntax down to plain text, roughly.
///
/// Good enough for excerpt fallbacks and word counts; not a markdown parser.
pub fn strip_markdown(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for line in s.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("```") {
            continue;
        }
        let line = line
            .trim_start_matches('#')
            .trim_start_matches('>')
            .trim_start_matches(['-', '*', '+'])
            .trim();

        if !result.is_empty() {
            result.push(' ');
        }
        for c in line.chars() {
            match c {
                '*' | '_' | '`' | '[' | ']' | '!' => {}
                '(' | ')' => result.push(' '),
                _ => result.push(c),
            }
        }
    }

    result
}

/// Truncate a string to a character length, appending an omission marker
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.len()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

/// Derive a listing excerpt from a markdown body
pub fn excerpt_from_body(body: &str, max_len: usize) -> String {
    truncate(&strip_markdown(body), max_len, None)
}

/// Estimate reading time in minutes from a markdown body, at least one
/// minute for non-empty content
pub fn estimate_read_time(body: &str, words_per_minute: u32) -> u32 {
    let words = body.split_whitespace().count() as u32;
    if words == 0 {
        return 0;
    }
    let wpm = words_per_minute.max(1);
    words.div_ceil(wpm).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markdown() {
        let body = "# Kimchi Stew\n\nA **warming** classic with `gochujang`.";
        let text = strip_markdown(body);
        assert_eq!(text, "Kimchi Stew A warming classic with gochujang.");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 8, None), "Hello...");
        assert_eq!(truncate("Hi", 10, None), "Hi");
    }

    #[test]
    fn test_excerpt_from_body() {
        let body = "## Intro\n\nThis stew takes thirty minutes from pantry to table.";
        let excerpt = excerpt_from_body(body, 30);
        assert!(excerpt.len() <= 30);
        assert!(excerpt.starts_with("Intro"));
    }

    #[test]
    fn test_estimate_read_time() {
        assert_eq!(estimate_read_time("", 200), 0);
        assert_eq!(estimate_read_time("one two three", 200), 1);
        let long = "word ".repeat(450);
        assert_eq!(estimate_read_time(&long, 200), 3);
    }
}
