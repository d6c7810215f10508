//! Token normalizers.
//!
//! A normalizer maps a token to the form it is compared in. The trie stores
//! keys already normalized and applies the same function to every input
//! token, so both sides always agree.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub type Normalizer = fn(&str) -> String;

/// Default normalizer: compatibility decomposition, accents dropped,
/// lowercased, only alphanumeric characters kept.
///
/// ```rust
/// use fuzzy_phrase_replacer::normalize::fold;
///
/// assert_eq!(fold("Générale"), "generale");
/// assert_eq!(fold("s'il"), "sil");
/// ```
pub fn fold(token: &str) -> String {
    token
        .nfkd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Case-insensitive comparison, accents kept.
pub fn lowercase(token: &str) -> String {
    token.to_lowercase()
}

/// Compare tokens as written.
pub fn identity(token: &str) -> String {
    token.to_owned()
}
