//! Gestalt (Ratcliff/Obershelp) string similarity.
//!
//! The similarity of two strings is `2 * M / T`, where `T` is the total number
//! of characters in both strings and `M` is the number of characters in
//! matching blocks. Matching blocks are found by taking the longest common
//! substring, then recursing into the unmatched text on either side of it.

use std::collections::{HashMap, HashSet};

/// Sequences at least this long use the "popular element" heuristic.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity of `a` and `b` on a 0-100 scale, where 100 means identical.
///
/// The score is rounded to the nearest integer, with ties going to the even
/// neighbour. If either string is empty the score is 0.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let total = a.len() + b.len();
    let matches = Matcher::new(&a, &b).matching_characters();

    // 2M <= T, so the score is always in 0..=100
    (200.0 * matches as f64 / total as f64).round_ties_even() as u8
}

struct Matcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each character in `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> Matcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        // characters making up more than 1% of a long `b` never seed a match
        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            let popular: HashSet<char> = b2j
                .iter()
                .filter(|(_, positions)| positions.len() > limit)
                .map(|(&c, _)| c)
                .collect();
            b2j.retain(|c, _| !popular.contains(c));
        }

        Self { a, b, b2j }
    }

    fn matching_characters(&self) -> usize {
        self.count_matches(0, self.a.len(), 0, self.b.len())
    }

    fn count_matches(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> usize {
        let (i, j, k) = self.longest_match(alo, ahi, blo, bhi);
        if k == 0 {
            return 0;
        }

        let mut total = k;
        if alo < i && blo < j {
            total += self.count_matches(alo, i, blo, j);
        }
        if i + k < ahi && j + k < bhi {
            total += self.count_matches(i + k, ahi, j + k, bhi);
        }
        total
    }

    /// Finds the longest block `a[i..i+k] == b[j..j+k]` inside the given
    /// ranges.
    ///
    /// Of all maximal blocks, returns the one starting earliest in `a`, and of
    /// those the one starting earliest in `b`.
    fn longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the longest match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // extend over characters dropped from the index as "popular"
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }
}
