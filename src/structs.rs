use crate::ConfigError;
use crate::normalize::Normalizer;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub type NodeId = usize;

/// Index of the root node in the trie arena.
pub(crate) const ROOT: NodeId = 0;

/// A single node inside the phrase trie arena.
#[derive(Debug, Default)]
pub(crate) struct Node {
    /// Outgoing edges keyed by the normalized token.
    pub(crate) children: BTreeMap<String, NodeId>,
    /// Set iff some phrase key ends here. Never set on the root.
    pub(crate) replacement: Option<String>,
}

/// Prefix tree over tokenized phrase keys.
///
/// Built once by [`FuzzyReplacerBuilder::build`](crate::FuzzyReplacerBuilder::build)
/// or [`build_trie`](crate::build_trie) and read-only afterwards, so one
/// instance can serve any number of concurrent `replace` calls.
pub struct PhraseTrie {
    pub(crate) nodes: Vec<Node>,
    pub(crate) normalizer: Normalizer,
    /// Number of nodes carrying a replacement.
    pub(crate) phrases: usize,
}

impl fmt::Debug for PhraseTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhraseTrie")
            .field("phrases", &self.phrases)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

/// How the walker settles between a committed match and a deeper one found
/// further along the same path.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", try_from = "String"))]
pub enum TieBreak {
    /// The deeper commit point always wins.
    #[default]
    Longest,
    /// The deeper commit point wins only if its score is not lower.
    HighestScore,
}

impl TieBreak {
    #[inline]
    pub(crate) fn prefers(
        self,
        deeper: &MatchCandidate<'_>,
        committed: Option<&MatchCandidate<'_>>,
    ) -> bool {
        match (self, committed) {
            (_, None) | (TieBreak::Longest, Some(_)) => true,
            (TieBreak::HighestScore, Some(committed)) => deeper.score >= committed.score,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TieBreak::Longest => "longest",
            TieBreak::HighestScore => "highest_score",
        }
    }
}

impl FromStr for TieBreak {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "longest" => Ok(TieBreak::Longest),
            "highest_score" => Ok(TieBreak::HighestScore),
            other => Err(ConfigError::UnknownTieBreak(other.to_owned())),
        }
    }
}

impl TryFrom<String> for TieBreak {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matching options passed to every `replace` call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Minimum per-token similarity needed to follow a trie edge. Inclusive.
    pub threshold: f64,
    pub tie_break: TieBreak,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            tie_break: TieBreak::Longest,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Rejects thresholds outside `[0, 1]`, NaN included.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(ConfigError::ThresholdOutOfRange(self.threshold))
        }
    }
}

/// Best match found by the walker at one start position.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate<'t> {
    /// Index of the first matched token.
    pub start: usize,
    /// Index one past the last matched token.
    pub end: usize,
    /// Mean similarity over the matched path, in `[0, 1]`.
    pub score: f64,
    pub replacement: &'t str,
}

impl MatchCandidate<'_> {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// A selected match located in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseMatch<'a, 't> {
    pub candidate: MatchCandidate<'t>,
    /// Inclusive start byte index of the first matched word.
    pub start: usize,
    /// Exclusive end byte index of the last matched word.
    pub end: usize,
    /// Slice of the original text that produced the match.
    pub text: &'a str,
}

impl<'t> PhraseMatch<'_, 't> {
    #[inline]
    pub fn replacement(&self) -> &'t str {
        self.candidate.replacement
    }
}

/// Result of [`FuzzyReplacer::segment_iter`](crate::FuzzyReplacer::segment_iter):
/// either a match or the untouched text between matches.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a, 't> {
    Matched(PhraseMatch<'a, 't>),
    Unmatched(&'a str),
}
