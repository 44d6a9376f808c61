use crate::solver::constants::DEFAULT_MAX_LEN;

/// Configuration for the digit search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Longest sequence the search will build before it stops extending a branch
    pub max_len: usize,
}

impl SearchConfig {
    pub fn with_max_len(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}
