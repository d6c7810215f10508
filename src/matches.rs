use crate::{
    Config, ConfigError, MatchCandidate, MatchWalker, PhraseMatch, PhraseTrie, Token, Tokens,
};
use tracing::trace;

impl PhraseTrie {
    /// Scans `tokens` left to right and returns the non-overlapping matches
    /// in order.
    ///
    /// At every position the walker's best match is taken and the scan jumps
    /// past it; positions with no match advance by one token. Replacement
    /// text is never scanned.
    pub fn scan<'t>(
        &'t self,
        tokens: &[Token<'_>],
        config: &Config,
    ) -> Result<Vec<MatchCandidate<'t>>, ConfigError> {
        config.validate()?;
        Ok(self.scan_validated(tokens, config))
    }

    /// Like [`scan`](Self::scan), with each match located in the source text.
    pub fn find_matches<'a, 't>(
        &'t self,
        tokens: &Tokens<'a>,
        config: &Config,
    ) -> Result<Vec<PhraseMatch<'a, 't>>, ConfigError> {
        config.validate()?;
        Ok(self.find_matches_validated(tokens, config))
    }

    pub(crate) fn scan_validated<'t>(
        &'t self,
        tokens: &[Token<'_>],
        config: &Config,
    ) -> Vec<MatchCandidate<'t>> {
        let walker = MatchWalker::with_valid_config(self, tokens, *config);
        let mut matches = Vec::new();
        let mut position = 0;
        while position < tokens.len() {
            match walker.find_best_match(position) {
                Some(candidate) => {
                    position = candidate.end;
                    matches.push(candidate);
                }
                None => position += 1,
            }
        }
        trace!(tokens = tokens.len(), matches = matches.len(), "scan finished");
        matches
    }

    pub(crate) fn find_matches_validated<'a, 't>(
        &'t self,
        tokens: &Tokens<'a>,
        config: &Config,
    ) -> Vec<PhraseMatch<'a, 't>> {
        self.scan_validated(tokens, config)
            .into_iter()
            .map(|candidate| {
                let start = tokens[candidate.start].word_start();
                let end = tokens[candidate.end - 1].end;
                PhraseMatch {
                    candidate,
                    start,
                    end,
                    text: &tokens.source()[start..end],
                }
            })
            .collect()
    }
}
