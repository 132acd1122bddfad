//! Text analyzers for the lexical models.
//!
//! Two analyzers feed the TF-IDF vectorizer:
//! - the word analyzer lowercases, extracts word tokens of at least two
//!   word characters, and emits unigrams plus bigrams;
//! - the character analyzer emits n-grams bounded at word edges, each word
//!   padded with a single space on both sides, so n-grams never straddle
//!   two words. This catches morphological variation and near-duplicate
//!   phrasing that word-level matching misses.

/// Lowercased word tokens: maximal runs of alphanumeric/underscore
/// characters with at least two characters.
pub fn word_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            current.extend(ch.to_lowercase());
        } else if !current.is_empty() {
            if current.chars().count() >= 2 {
                tokens.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if current.chars().count() >= 2 {
        tokens.push(current);
    }
    tokens
}

/// Word unigrams and bigrams (bigrams joined by a single space).
pub fn word_ngrams(text: &str) -> Vec<String> {
    let tokens = word_tokens(text);
    let mut grams = Vec::with_capacity(tokens.len() * 2);
    grams.extend(tokens.iter().cloned());
    for pair in tokens.windows(2) {
        grams.push(format!("{} {}", pair[0], pair[1]));
    }
    grams
}

/// Character n-grams of length `min_n..=max_n`, respecting word boundaries.
///
/// Each whitespace-separated word is lowercased and padded with one space on
/// either side before sliding the n-gram window. A word shorter than the
/// window (padding included) contributes its whole padded form exactly once.
pub fn char_wb_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let mut grams = Vec::new();
    for word in text.split_whitespace() {
        let mut padded: Vec<char> = Vec::with_capacity(word.len() + 2);
        padded.push(' ');
        padded.extend(word.chars().flat_map(|c| c.to_lowercase()));
        padded.push(' ');

        for n in min_n..=max_n {
            grams.push(padded[..n.min(padded.len())].iter().collect());
            if padded.len() <= n {
                // Short word: counted once, longer windows add nothing new
                break;
            }
            for offset in 1..=(padded.len() - n) {
                grams.push(padded[offset..offset + n].iter().collect());
            }
        }
    }
    grams
}
