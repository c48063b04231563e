// Report line printed after a successful fill.

/// Length of the payload in Unicode scalar values, not bytes.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

pub fn report_line(count: usize) -> String {
    format!("Created JSON with text length: {count} chars")
}

#[cfg(test)]
mod tests {
    use super::{char_count, report_line};

    #[test]
    fn report_line_is_exact() {
        assert_eq!(
            report_line(char_count("hello")),
            "Created JSON with text length: 5 chars"
        );
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(char_count("café"), 4);
        assert_eq!("café".len(), 5);
        assert_eq!(char_count(""), 0);
    }
}
