use crate::{Config, ConfigError, PhraseTrie, Segment, Tokens};

impl PhraseTrie {
    /// Interleaved [`Segment::Unmatched`] and [`Segment::Matched`] pieces of
    /// the tokenized text, left to right.
    ///
    /// Unmatched pieces carry the separators verbatim, including the one in
    /// front of each match; the separators inside a match belong to the
    /// match.
    pub fn segment_iter<'a, 't>(
        &'t self,
        tokens: &Tokens<'a>,
        config: &Config,
    ) -> Result<impl Iterator<Item = Segment<'a, 't>> + use<'a, 't>, ConfigError> {
        config.validate()?;
        Ok(self.segments_validated(tokens, config).into_iter())
    }

    pub(crate) fn segments_validated<'a, 't>(
        &'t self,
        tokens: &Tokens<'a>,
        config: &Config,
    ) -> Vec<Segment<'a, 't>> {
        let haystack = tokens.source();
        let mut segments = Vec::new();
        let mut last = 0;
        for m in self.find_matches_validated(tokens, config) {
            if m.start > last {
                segments.push(Segment::Unmatched(&haystack[last..m.start]));
            }
            last = m.end;
            segments.push(Segment::Matched(m));
        }
        if last < haystack.len() {
            segments.push(Segment::Unmatched(&haystack[last..]));
        }
        segments
    }
}

/// Concatenates segments, substituting each match with its replacement.
pub(crate) fn render<'a, 't>(segments: impl IntoIterator<Item = Segment<'a, 't>>) -> String {
    let mut result = String::new();
    for segment in segments {
        match segment {
            Segment::Matched(m) => result.push_str(m.replacement()),
            Segment::Unmatched(text) => result.push_str(text),
        }
    }
    result
}
