/// Positions of every case-insensitive occurrence of a pattern in a text.
///
/// Positions are character offsets, ascending. The value is built once by the
/// matcher and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pattern: String,
    positions: Vec<usize>,
}

impl MatchResult {
    pub fn new(pattern: impl Into<String>, positions: Vec<usize>) -> Self {
        debug_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        Self {
            pattern: pattern.into(),
            positions,
        }
    }

    pub fn empty(pattern: impl Into<String>) -> Self {
        Self::new(pattern, Vec::new())
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_found(&self) -> bool {
        !self.positions.is_empty()
    }

    pub fn into_positions(self) -> Vec<usize> {
        self.positions
    }
}
