//! Static word lists for the lexicon scorer.
//!
//! The five word sets are disjoint. Words that could belong to two sets
//! ("never") live only in the set that is checked first.

pub const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "awesome",
    "beautiful",
    "best",
    "brilliant",
    "enjoyed",
    "excellent",
    "fantastic",
    "fine",
    "good",
    "great",
    "happy",
    "love",
    "nice",
    "outstanding",
    "perfect",
    "recommend",
    "super",
    "wonderful",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "awful",
    "bad",
    "broken",
    "disappointed",
    "disgusting",
    "frustrated",
    "garbage",
    "hate",
    "horrible",
    "pathetic",
    "poor",
    "terrible",
    "upset",
    "useless",
    "waste",
    "worst",
];

/// Flip the polarity of the next scored word.
pub const NEGATORS: &[&str] = &[
    "can't", "cannot", "didn't", "doesn't", "don't", "neither", "never", "no", "nor", "not",
    "won't",
];

/// Amplify the next scored word.
pub const BOOSTERS: &[&str] = &[
    "absolutely",
    "completely",
    "extremely",
    "highly",
    "really",
    "so",
    "totally",
    "utterly",
    "very",
];

/// Soften the next scored word.
pub const DAMPENERS: &[&str] = &["barely", "hardly", "maybe", "perhaps", "slightly", "somewhat"];

pub const POSITIVE_EMOJI: &[&str] = &["😊", "😀", "😃", "❤️", "👍", "🎉", "✨"];

pub const NEGATIVE_EMOJI: &[&str] = &["😡", "😢", "😞", "👎", "💔", "😠"];

/// What a stripped token means to the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Negator,
    Booster,
    Dampener,
    Positive,
    Negative,
    Unknown,
}

/// Classify a stripped, lowercased word. Modifiers are checked before polarity.
pub fn classify(word: &str) -> WordClass {
    if is_in(NEGATORS, word) {
        WordClass::Negator
    } else if is_in(BOOSTERS, word) {
        WordClass::Booster
    } else if is_in(DAMPENERS, word) {
        WordClass::Dampener
    } else if is_in(POSITIVE_WORDS, word) {
        WordClass::Positive
    } else if is_in(NEGATIVE_WORDS, word) {
        WordClass::Negative
    } else {
        WordClass::Unknown
    }
}

fn is_in(list: &[&str], word: &str) -> bool {
    list.binary_search(&word).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_lists_sorted_for_binary_search() {
        for list in [POSITIVE_WORDS, NEGATIVE_WORDS, NEGATORS, BOOSTERS, DAMPENERS] {
            assert!(list.windows(2).all(|w| w[0] < w[1]), "unsorted: {list:?}");
        }
    }

    #[test]
    fn word_lists_disjoint() {
        let lists = [POSITIVE_WORDS, NEGATIVE_WORDS, NEGATORS, BOOSTERS, DAMPENERS];
        for (i, a) in lists.iter().enumerate() {
            for b in &lists[i + 1..] {
                for word in *a {
                    assert!(!b.contains(word), "{word} appears in two lists");
                }
            }
        }
    }

    #[test]
    fn classify_each_kind() {
        assert_eq!(classify("not"), WordClass::Negator);
        assert_eq!(classify("never"), WordClass::Negator);
        assert_eq!(classify("don't"), WordClass::Negator);
        assert_eq!(classify("very"), WordClass::Booster);
        assert_eq!(classify("somewhat"), WordClass::Dampener);
        assert_eq!(classify("love"), WordClass::Positive);
        assert_eq!(classify("hate"), WordClass::Negative);
        assert_eq!(classify("table"), WordClass::Unknown);
        assert_eq!(classify(""), WordClass::Unknown);
    }
}
