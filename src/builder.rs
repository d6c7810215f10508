use crate::normalize::{self, Normalizer};
use crate::structs::{Node, NodeId, ROOT};
use crate::{Config, ConfigError, FuzzyReplacer, PhraseTrie, TieBreak, tokenize};
use itertools::Itertools;
use tracing::debug;

/// Builder for [`PhraseTrie`] and [`FuzzyReplacer`].
///
/// ```rust
/// use fuzzy_phrase_replacer::FuzzyReplacerBuilder;
///
/// let replacer = FuzzyReplacerBuilder::new()
///     .threshold(0.8)
///     .build_replacer([("GNU General Public License", "GPL")])
///     .unwrap();
///
/// assert_eq!(
///     replacer.replace("use the GNU Generel Public Licence, too"),
///     "use the GPL, too"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FuzzyReplacerBuilder {
    config: Config,
    normalizer: Normalizer,
}

impl Default for FuzzyReplacerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyReplacerBuilder {
    /// Threshold 0.6, longest match wins, accent-folding normalizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            normalizer: normalize::fold,
        }
    }

    /// Minimum per-token similarity in `[0, 1]`, checked by
    /// [`build_replacer`](Self::build_replacer).
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    #[must_use]
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Replace threshold and tie-break at once.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Function applied to phrase tokens and text tokens before comparing
    /// them. See [`normalize`](crate::normalize).
    #[must_use]
    pub fn normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Builds the trie alone. The threshold is not consulted here.
    ///
    /// Pairs are inserted in iteration order; when two phrases reduce to
    /// the same token path, the later replacement overwrites the earlier
    /// one. Pass an ordered collection if that matters.
    pub fn build<K, V>(
        self,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Result<PhraseTrie, ConfigError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut trie = PhraseTrie {
            nodes: vec![Node::default()],
            normalizer: self.normalizer,
            phrases: 0,
        };
        for (phrase, replacement) in pairs {
            trie.insert(phrase.as_ref(), replacement.into())?;
        }
        debug!(
            phrases = trie.phrases,
            nodes = trie.nodes.len(),
            "built phrase trie"
        );
        Ok(trie)
    }

    pub fn build_replacer<K, V>(
        self,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Result<FuzzyReplacer, ConfigError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        self.config.validate()?;
        Ok(FuzzyReplacer {
            trie: self.build(pairs)?,
            config: self.config,
        })
    }
}

impl PhraseTrie {
    /// Tokenizes and normalizes `phrase` the same way input text is
    /// processed. Tokens that normalize to nothing are dropped.
    pub(crate) fn key_path(&self, phrase: &str) -> Vec<String> {
        tokenize(phrase)
            .iter()
            .map(|token| (self.normalizer)(token.text))
            .filter(|key| !key.is_empty())
            .collect()
    }

    fn insert(&mut self, phrase: &str, replacement: String) -> Result<(), ConfigError> {
        let path = self.key_path(phrase);
        if path.is_empty() {
            return Err(ConfigError::EmptyPhrase(phrase.to_owned()));
        }

        let mut current = ROOT;
        for key in path {
            let next = self.nodes.len();
            current = *self.nodes[current].children.entry(key).or_insert(next);
            if current == next {
                self.nodes.push(Node::default());
            }
        }

        let node = &mut self.nodes[current];
        if let Some(previous) = node.replacement.replace(replacement) {
            debug!(
                phrase,
                previous = previous.as_str(),
                "phrase key overwrites an earlier replacement"
            );
        } else {
            self.phrases += 1;
        }
        Ok(())
    }

    /// Number of distinct phrase paths carrying a replacement.
    #[inline]
    pub fn len(&self) -> usize {
        self.phrases
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.phrases == 0
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Exact lookup: the replacement stored for `phrase` once tokenized and
    /// normalized, without any fuzziness.
    pub fn get(&self, phrase: &str) -> Option<&str> {
        let path = self.key_path(phrase);
        if path.is_empty() {
            return None;
        }
        path.iter()
            .try_fold(ROOT, |node, key| self.nodes[node].children.get(key).copied())
            .and_then(|node| self.nodes[node].replacement.as_deref())
    }

    /// Every stored phrase as its normalized tokens joined by a space,
    /// paired with its replacement, in lexicographic path order.
    pub fn phrases(&self) -> Vec<(String, &str)> {
        let mut out = Vec::with_capacity(self.phrases);
        let mut stack: Vec<(NodeId, Vec<&str>)> = vec![(ROOT, Vec::new())];
        while let Some((node, path)) = stack.pop() {
            if let Some(replacement) = &self.nodes[node].replacement {
                out.push((path.iter().join(" "), replacement.as_str()));
            }
            for (key, &child) in self.nodes[node].children.iter().rev() {
                let mut child_path = path.clone();
                child_path.push(key.as_str());
                stack.push((child, child_path));
            }
        }
        out
    }
}
