use thiserror::Error;

/// Invalid mapping or configuration, reported before any text is scanned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("phrase key {0:?} contains no tokens")]
    EmptyPhrase(String),

    #[error("similarity threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),

    #[error("unrecognized tie-break option {0:?} (expected \"longest\" or \"highest_score\")")]
    UnknownTieBreak(String),
}
