use crate::similarity::{similarity, upper_bound};
use crate::structs::{NodeId, ROOT};
use crate::{Config, ConfigError, MatchCandidate, PhraseTrie, Token};
use tracing::trace;

/// Walks a [`PhraseTrie`] against one token stream.
///
/// Tokens are normalized once on construction; each
/// [`find_best_match`](Self::find_best_match) call then costs at most one
/// child scan per matched phrase token.
pub struct MatchWalker<'t> {
    trie: &'t PhraseTrie,
    keys: Vec<String>,
    config: Config,
}

impl<'t> MatchWalker<'t> {
    /// Fails if `config` does not pass [`Config::validate`].
    pub fn new(
        trie: &'t PhraseTrie,
        tokens: &[Token<'_>],
        config: Config,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(trie, tokens, config))
    }

    /// `config` must already be validated.
    pub(crate) fn with_valid_config(
        trie: &'t PhraseTrie,
        tokens: &[Token<'_>],
        config: Config,
    ) -> Self {
        Self {
            trie,
            keys: tokens
                .iter()
                .map(|token| (trie.normalizer)(token.text))
                .collect(),
            config,
        }
    }

    /// Longest-match-with-fallback from `start`.
    ///
    /// At each level only the single most similar child is followed; ties go
    /// to the lexicographically smallest key. The walk stops on a leaf, at
    /// the end of the tokens, or when the best child scores below the
    /// threshold. Every node on the way that carries a replacement is a
    /// commit point, and the [`TieBreak`](crate::TieBreak) policy decides
    /// whether it supersedes the previous one.
    ///
    /// Returns `None` if no commit point was reached, even if the walk
    /// descended.
    pub fn find_best_match(&self, start: usize) -> Option<MatchCandidate<'t>> {
        let mut node = ROOT;
        let mut position = start;
        let mut total = 0.0;
        let mut best: Option<MatchCandidate<'t>> = None;

        while position < self.keys.len() {
            let key = self.keys[position].as_str();
            let Some((child, score)) = self.best_child(node, key) else {
                trace!(position, key, "no child reaches the threshold");
                break;
            };
            trace!(position, key, child, score, "descend");

            node = child;
            position += 1;
            total += score;

            if let Some(replacement) = self.trie.nodes[node].replacement.as_deref() {
                let candidate = MatchCandidate {
                    start,
                    end: position,
                    score: total / (position - start) as f64,
                    replacement,
                };
                if self.config.tie_break.prefers(&candidate, best.as_ref()) {
                    trace!(start, end = position, score = candidate.score, replacement, "commit");
                    best = Some(candidate);
                }
            }
        }

        best
    }

    /// Most similar child of `node` whose similarity to `key` reaches the
    /// threshold.
    fn best_child(&self, node: NodeId, key: &str) -> Option<(NodeId, f64)> {
        let key_len = key.chars().count();
        let mut best: Option<(NodeId, f64)> = None;
        // BTreeMap iterates in key order, so a strict `>` keeps the smallest
        // key among equal scores.
        for (edge, &child) in &self.trie.nodes[node].children {
            let floor = best.map_or(self.config.threshold, |(_, score)| score);
            if upper_bound(edge.chars().count(), key_len) < floor {
                continue;
            }
            let score = similarity(edge, key);
            if score < self.config.threshold {
                continue;
            }
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((child, score));
            }
        }
        best
    }
}

impl PhraseTrie {
    /// Single-position convenience over [`MatchWalker`]. Prefer building one
    /// walker when probing many positions of the same tokens.
    pub fn find_best_match(
        &self,
        tokens: &[Token<'_>],
        start: usize,
        config: &Config,
    ) -> Result<Option<MatchCandidate<'_>>, ConfigError> {
        Ok(MatchWalker::new(self, tokens, *config)?.find_best_match(start))
    }
}
