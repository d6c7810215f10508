use std::ops::Deref;
use unicode_segmentation::UnicodeSegmentation;

/// A word of the input together with the separator text that precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Whitespace and punctuation between the previous token and this one.
    pub separator: &'a str,
    /// The word itself.
    pub text: &'a str,
    /// Start byte of the separator.
    pub start: usize,
    /// Exclusive end byte of the word.
    pub end: usize,
}

impl Token<'_> {
    /// Start byte of the word, past its separator.
    #[inline]
    pub fn word_start(&self) -> usize {
        self.end - self.text.len()
    }
}

/// Tokenized text. Dereferences to the token slice for random access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    tail: &'a str,
}

impl<'a> Tokens<'a> {
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Text after the last token (the whole source when there are no tokens).
    #[inline]
    pub fn tail(&self) -> &'a str {
        self.tail
    }
}

impl<'a> Deref for Tokens<'a> {
    type Target = [Token<'a>];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

/// Splits `text` on Unicode word boundaries.
///
/// Word segments holding at least one alphanumeric character become tokens;
/// everything else is attached to the following token as its separator, or
/// to the tail. Concatenating every `separator + text` and the tail gives
/// back `text` exactly.
///
/// ```rust
/// use fuzzy_phrase_replacer::tokenize;
///
/// let tokens = tokenize("Hello, world!");
/// let words: Vec<&str> = tokens.iter().map(|t| t.text).collect();
/// assert_eq!(words, ["Hello", "world"]);
/// assert_eq!(tokens[1].separator, ", ");
/// assert_eq!(tokens.tail(), "!");
/// ```
pub fn tokenize(text: &str) -> Tokens<'_> {
    let mut tokens = Vec::new();
    let mut separator_start = 0;
    for (offset, word) in text.split_word_bound_indices() {
        if !word.chars().any(char::is_alphanumeric) {
            continue;
        }
        let end = offset + word.len();
        tokens.push(Token {
            separator: &text[separator_start..offset],
            text: word,
            start: separator_start,
            end,
        });
        separator_start = end;
    }
    Tokens {
        source: text,
        tokens,
        tail: &text[separator_start..],
    }
}
