//! Words dropped from the gloss because they carry no sign of their own.
//!
//! Mostly auxiliaries, articles and contraction fragments. Plain negations
//! ("not", "no", "never") are kept.

const STOP_WORDS: &[&str] = &[
    "mightn't", "re", "wasn", "wouldn", "be", "has", "that", "does", "shouldn", "do",
    "you've", "off", "for", "didn't", "m", "ain", "haven", "weren't", "are", "she's",
    "wasn't", "its", "haven't", "wouldn't", "don", "weren", "s", "you'd", "don't", "doesn",
    "hadn't", "is", "was", "that'll", "should've", "a", "then", "the", "mustn", "i",
    "nor", "as", "it's", "needn't", "d", "am", "have", "hasn", "o", "aren't",
    "you'll", "couldn't", "you're", "mustn't", "didn", "doesn't", "ll", "an", "hadn", "whom",
    "y", "hasn't", "itself", "couldn", "needn", "shan't", "isn", "been", "such", "shan",
    "shouldn't", "aren", "being", "were", "did", "ma", "t", "having", "mightn", "ve",
    "isn't", "won't",
];

/// Whether `word` (already lowercased) is dropped from the gloss.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
