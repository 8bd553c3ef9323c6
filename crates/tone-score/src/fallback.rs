use crate::lexicon::{self, NEGATIVE_EMOJI, POSITIVE_EMOJI, WordClass};
use crate::tokenizer::{normalize, strip_punctuation, tokenize};
use tone_core::{SentimentScorer, clamp_unit};

const WORD_WEIGHT: f64 = 0.7;
const NEGATION_FACTOR: f64 = -1.0;
const BOOSTER_FACTOR: f64 = 1.8;
const DAMPENER_FACTOR: f64 = 0.5;
const EXCLAMATION_BONUS: f64 = 0.1;
const EMOJI_WEIGHT: f64 = 0.3;

/// Rule-based scorer used when no trained model is available.
///
/// Single left-to-right pass over the tokens:
/// - Negators, boosters and dampeners set a pending flag and score nothing
/// - Every other token consumes all pending flags, even when it scores zero
/// - Exclamation marks and emoji are added before length normalization
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconScorer {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn score(&self, text: &str) -> f64 {
        lexicon_score(text)
    }
}

/// Pending modifiers. Each is cleared by the next scored token.
#[derive(Debug, Default)]
struct Modifiers {
    negation: bool,
    booster: bool,
    dampener: bool,
}

impl Modifiers {
    fn apply(&mut self, mut value: f64) -> f64 {
        if std::mem::take(&mut self.negation) {
            value *= NEGATION_FACTOR;
        }
        if std::mem::take(&mut self.booster) {
            value *= BOOSTER_FACTOR;
        }
        if std::mem::take(&mut self.dampener) {
            value *= DAMPENER_FACTOR;
        }
        value
    }
}

/// Score raw text in `[-1.0, 1.0]` using the built-in lexicon.
pub fn lexicon_score(text: &str) -> f64 {
    let normalized = normalize(text);
    let tokens = tokenize(&normalized);

    let mut total = 0.0;
    let mut modifiers = Modifiers::default();

    for token in &tokens {
        let base = match lexicon::classify(strip_punctuation(token)) {
            WordClass::Negator => {
                modifiers.negation = true;
                continue;
            }
            WordClass::Booster => {
                modifiers.booster = true;
                continue;
            }
            WordClass::Dampener => {
                modifiers.dampener = true;
                continue;
            }
            WordClass::Positive => WORD_WEIGHT,
            WordClass::Negative => -WORD_WEIGHT,
            WordClass::Unknown => 0.0,
        };
        total += modifiers.apply(base);
    }

    total += EXCLAMATION_BONUS * normalized.matches('!').count() as f64;
    total += emoji_score(text);

    clamp_unit(total / length_divisor(tokens.len()))
}

/// +0.3 per distinct positive glyph and -0.3 per distinct negative glyph
/// found anywhere in the untouched input.
fn emoji_score(raw: &str) -> f64 {
    let pos = POSITIVE_EMOJI.iter().filter(|e| raw.contains(*e)).count();
    let neg = NEGATIVE_EMOJI.iter().filter(|e| raw.contains(*e)).count();
    EMOJI_WEIGHT * (pos as f64 - neg as f64)
}

/// Gentler damping for short texts, square root for longer ones.
fn length_divisor(n: usize) -> f64 {
    match n {
        0 => 1.0,
        1..=3 => (n as f64 * 0.6).max(1.0),
        _ => (n as f64).sqrt(),
    }
}
