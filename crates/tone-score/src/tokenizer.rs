/// Punctuation trimmed from both ends of a token before lexicon lookup.
const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\''];

/// Lowercase, collapse every whitespace run to a single space, and trim.
///
/// Punctuation is kept so emphasis can still be counted afterwards.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize, then split on whitespace. Empty input gives no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim edge punctuation from a token. Interior punctuation survives,
/// so `"don't!"` becomes `"don't"`.
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(EDGE_PUNCTUATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic() {
        assert_eq!(normalize("  Hello   World  "), "hello world");
        assert_eq!(normalize("UPPERCASE"), "uppercase");
        assert_eq!(normalize("Multiple\n\nlines"), "multiple lines");
        assert_eq!(normalize("Tab\tseparated"), "tab separated");
    }

    #[test]
    fn normalize_keeps_punctuation() {
        assert_eq!(normalize("Great!!  Really?"), "great!! really?");
    }

    #[test]
    fn normalize_case_insensitive() {
        assert_eq!(normalize("HELLO"), normalize("hello"));
    }

    #[test]
    fn normalize_idempotent() {
        let once = normalize(" \t Mixed  CASE\r\ntext ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn tokenize_basic() {
        assert_eq!(tokenize("hello world"), vec!["hello", "world"]);
        assert_eq!(tokenize("  extra   spaces  "), vec!["extra", "spaces"]);
        assert_eq!(tokenize("  a   b  "), vec!["a", "b"]);
        assert_eq!(tokenize("one"), vec!["one"]);
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn tokenize_lowercases_and_keeps_order() {
        assert_eq!(tokenize("C B\nA"), vec!["c", "b", "a"]);
    }

    #[test]
    fn strip_edges_only() {
        assert_eq!(strip_punctuation("good!"), "good");
        assert_eq!(strip_punctuation("\"great,\""), "great");
        assert_eq!(strip_punctuation("'don't!'"), "don't");
        assert_eq!(strip_punctuation("?!"), "");
        assert_eq!(strip_punctuation("a.b"), "a.b");
    }

    #[test]
    fn strip_leaves_other_symbols() {
        assert_eq!(strip_punctuation("(good)"), "(good)");
        assert_eq!(strip_punctuation("😊!"), "😊");
    }
}
