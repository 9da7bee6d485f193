// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Levenshtein edit distance.
//!
//! Minimum number of single-character insertions, deletions or substitutions
//! needed to turn one string into another. Characters are compared as raw
//! `char` values; no case folding or normalisation is applied.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// Uses the full `(m + 1) x (n + 1)` dynamic-programming table with unit
/// costs. Transpositions count as two edits.
///
/// # Examples
///
/// ```
/// use trie_dictionary_lib::data_structures::trie::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(s: &str, t: &str) -> usize {
    let s: Vec<char> = s.chars().collect();
    let t: Vec<char> = t.chars().collect();
    let (m, n) = (s.len(), t.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(s[i - 1] != t[j - 1]);
            table[i][j] = min(
                min(
                    table[i - 1][j] + 1, // deletion
                    table[i][j - 1] + 1, // insertion
                ),
                table[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    table[m][n]
}
