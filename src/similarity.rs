/// Longest-common-subsequence ratio of two tokens: `2 * lcs / (|a| + |b|)`,
/// counted in Unicode scalar values.
///
/// Symmetric, `1.0` for equal inputs (two empty strings included) and `0.0`
/// when the tokens share no character.
///
/// ```rust
/// use fuzzy_phrase_replacer::similarity;
///
/// assert_eq!(similarity("world", "world"), 1.0);
/// assert_eq!(similarity("ab", "ac"), 0.5);
/// assert_eq!(similarity("abc", "xyz"), 0.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * lcs_len(&a, &b) as f64 / total as f64
}

/// Upper bound of [`similarity`] from the lengths alone.
#[inline]
pub(crate) fn upper_bound(a_len: usize, b_len: usize) -> f64 {
    let total = a_len + b_len;
    if total == 0 {
        1.0
    } else {
        2.0 * a_len.min(b_len) as f64 / total as f64
    }
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    // Keep the shorter sequence on the inner axis.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut prev = vec![0usize; inner.len() + 1];
    let mut row = vec![0usize; inner.len() + 1];
    for &x in outer {
        for (j, &y) in inner.iter().enumerate() {
            row[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(row[j])
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[inner.len()]
}
