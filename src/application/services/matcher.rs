//! Case-insensitive literal search over character offsets using a
//! polynomial rolling hash.
//!
//! The modulus is deliberately tiny, so unrelated windows collide often.
//! Every hash hit is confirmed by comparing the window literally, which keeps
//! results exact at the price of an O(n·m) worst case.

use crate::domain::MatchResult;

pub const HASH_BASE: i64 = 256;
pub const HASH_MODULUS: i64 = 101;

/// Hash of a fixed-width window that can slide one character at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    value: i64,
    leading_weight: i64,
}

impl RollingHash {
    /// Hashes `window` from scratch with Horner's rule.
    pub fn new(window: &[char]) -> Self {
        let leading_weight =
            (1..window.len()).fold(1, |weight, _| (weight * HASH_BASE) % HASH_MODULUS);
        let value = window
            .iter()
            .fold(0, |acc, &c| (HASH_BASE * acc + code(c)) % HASH_MODULUS);

        Self {
            value,
            leading_weight,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Drops `leading` from the front of the window and appends `trailing`.
    pub fn roll(&mut self, leading: char, trailing: char) {
        let mut next =
            (HASH_BASE * (self.value - code(leading) * self.leading_weight) + code(trailing))
                % HASH_MODULUS;
        if next < 0 {
            next += HASH_MODULUS;
        }
        self.value = next;
    }
}

fn code(c: char) -> i64 {
    i64::from(u32::from(c))
}

/// Lowercases character by character, keeping characters whose lowercase
/// form expands to several characters as they are so offsets stay stable.
pub fn fold_case(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

pub fn search(text: &str, pattern: &str) -> MatchResult {
    if text.is_empty() || pattern.is_empty() {
        return MatchResult::empty(pattern);
    }

    let haystack = fold_case(text);
    let needle = fold_case(pattern);
    let (n, m) = (haystack.len(), needle.len());

    if m > n {
        return MatchResult::empty(pattern);
    }

    let target = RollingHash::new(&needle).value();
    let mut window = RollingHash::new(&haystack[..m]);
    let mut positions = Vec::new();

    for i in 0..=n - m {
        if window.value() == target && haystack[i..i + m] == needle[..] {
            positions.push(i);
        }

        if i < n - m {
            window.roll(haystack[i], haystack[i + m]);
        }
    }

    MatchResult::new(pattern, positions)
}

pub fn count_matches(text: &str, pattern: &str) -> usize {
    search(text, pattern).count()
}
