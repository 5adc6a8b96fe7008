//! Sign of a complete contraction from its crossing number.

use super::pairing::Contraction;

/// Number of crossing pairs of contractions.
///
/// With each contraction taken as a chord `(i, j)`, `i < j`, two chords cross
/// iff exactly one endpoint of the second lies strictly between `i` and `j`.
pub fn count_crossings(pairing: &[Contraction]) -> usize {
    let spans: Vec<(usize, usize)> = pairing.iter().map(Contraction::span).collect();
    spans
        .iter()
        .enumerate()
        .map(|(a, &(i, j))| {
            spans[a + 1..]
                .iter()
                .filter(|&&(k, l)| (i < k && k < j && j < l) || (k < i && i < l && l < j))
                .count()
        })
        .sum()
}

/// `-1.0` for an odd number of crossings, `1.0` otherwise.
pub fn sign(pairing: &[Contraction]) -> f64 {
    if count_crossings(pairing) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}
