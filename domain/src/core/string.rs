//! String utilities for the domain layer.

/// Title-case every whitespace-delimited word.
///
/// The first character of each word is upper-cased and the rest are
/// lower-cased. Whitespace is preserved as-is.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
