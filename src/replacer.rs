use crate::segment::render;
use crate::{Config, ConfigError, PhraseMatch, PhraseTrie, Segment, tokenize};

/// A [`PhraseTrie`] bundled with a validated [`Config`].
///
/// Immutable once built; share it (e.g. behind an `Arc`) between threads
/// freely.
#[derive(Debug)]
pub struct FuzzyReplacer {
    pub(crate) trie: PhraseTrie,
    pub(crate) config: Config,
}

impl FuzzyReplacer {
    /// Performs a **fuzzy** find-and-replace: the longest match wins at each
    /// position, matches never overlap and text outside them is kept byte for
    /// byte.
    #[must_use]
    pub fn replace(&self, text: &str) -> String {
        render(self.trie.segments_validated(&tokenize(text), &self.config))
    }

    #[must_use]
    pub fn find_matches<'a>(&self, text: &'a str) -> Vec<PhraseMatch<'a, '_>> {
        self.trie.find_matches_validated(&tokenize(text), &self.config)
    }

    pub fn segment_iter<'a, 's>(&'s self, text: &'a str) -> impl Iterator<Item = Segment<'a, 's>> {
        self.trie
            .segments_validated(&tokenize(text), &self.config)
            .into_iter()
    }

    #[must_use]
    pub fn trie(&self) -> &PhraseTrie {
        &self.trie
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Replaces every fuzzy occurrence of a phrase in `trie` within `text`.
///
/// ```rust
/// use fuzzy_phrase_replacer::{build_trie, replace, Config};
///
/// let trie = build_trie([("hello world", "HI")]).unwrap();
/// assert_eq!(replace(&trie, "helo wrld!", &Config::default()).unwrap(), "HI!");
/// ```
pub fn replace(trie: &PhraseTrie, text: &str, config: &Config) -> Result<String, ConfigError> {
    config.validate()?;
    Ok(render(trie.segments_validated(&tokenize(text), config)))
}
