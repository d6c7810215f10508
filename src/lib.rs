//! Fuzzy multi-word phrase replacement.
//!
//! Phrase keys are tokenized into a [`PhraseTrie`]. Input text is tokenized
//! the same way and, position by position, the trie is walked comparing
//! tokens by [`similarity`] instead of equality. The longest phrase found at
//! each position is replaced; everything else is copied through unchanged.
//!
//! ```rust
//! use fuzzy_phrase_replacer::FuzzyReplacerBuilder;
//!
//! let replacer = FuzzyReplacerBuilder::new()
//!     .build_replacer([("A", "0"), ("A B", "1")])
//!     .unwrap();
//!
//! assert_eq!(replacer.replace("A B"), "1");
//! assert_eq!(replacer.replace("A C"), "0 C");
//! ```

mod builder;
mod error;
mod matches;
pub mod normalize;
mod replacer;
mod segment;
mod similarity;
mod structs;
mod tokenizer;
mod walker;

pub use builder::FuzzyReplacerBuilder;
pub use error::ConfigError;
pub use replacer::{FuzzyReplacer, replace};
pub use similarity::similarity;
pub use structs::*;
pub use tokenizer::{Token, Tokens, tokenize};
pub use walker::MatchWalker;

/// Builds a trie with the default normalizer.
///
/// `mapping` is consumed in order; a later phrase that reduces to the same
/// tokens as an earlier one replaces its value.
pub fn build_trie<K, V>(
    mapping: impl IntoIterator<Item = (K, V)>,
) -> Result<PhraseTrie, ConfigError>
where
    K: AsRef<str>,
    V: Into<String>,
{
    FuzzyReplacerBuilder::new().build(mapping)
}
