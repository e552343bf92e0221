//! Text-processing utilities.

/// Reverse a string by character.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Count whitespace-separated words. Blank input counts zero.
pub fn word_count(input: &str) -> usize {
    input.split_whitespace().count()
}

/// Whether the string reads the same forwards and backwards, ignoring
/// case and anything that is not alphanumeric.
pub fn is_palindrome(input: &str) -> bool {
    let cleaned: Vec<char> = input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// The text operations the demo dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOp {
    Reverse,
    Uppercase,
    Count,
    Palindrome,
}

impl TextOp {
    /// Apply the operation, rendering the result as display text.
    pub fn apply(self, input: &str) -> String {
        match self {
            TextOp::Reverse => reverse(input),
            TextOp::Uppercase => input.to_uppercase(),
            TextOp::Count => word_count(input).to_string(),
            TextOp::Palindrome => {
                if is_palindrome(input) {
                    "yes".to_string()
                } else {
                    "no".to_string()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count("  spaced   out  "), 2);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_palindrome("12321"));
        assert!(!is_palindrome("hello"));
    }

    #[test]
    fn test_text_op_apply() {
        assert_eq!(TextOp::Reverse.apply("abc"), "cba");
        assert_eq!(TextOp::Uppercase.apply("abc"), "ABC");
        assert_eq!(TextOp::Count.apply("a b"), "2");
        assert_eq!(TextOp::Palindrome.apply("abba"), "yes");
        assert_eq!(TextOp::Palindrome.apply("abc"), "no");
    }
}
