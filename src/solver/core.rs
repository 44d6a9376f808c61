use log::{debug, info};

use crate::digits::{Digit, MAX_SEQUENCE_LEN, Sequence};
use crate::predicate::{middle_digit_valid, prefix_valid};
use crate::solver::config::SearchConfig;
use crate::solver::errors::SolverError;

/// Counters collected while walking the search tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates formed by appending a digit
    pub examined: u64,
    /// Candidates whose newest prefix failed the divisibility rule
    pub prefix_pruned: u64,
    /// Candidates that passed the divisibility rule but not the middle-digit rule
    pub middle_pruned: u64,
    /// Candidates that passed both and were explored further
    pub accepted: u64,
}

/// Result of a completed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Longest valid sequence found; empty if nothing passed
    pub best: Sequence,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// The best sequence, or `None` if the search found nothing
    pub fn solution(&self) -> Option<&Sequence> {
        (!self.best.is_empty()).then_some(&self.best)
    }

    pub fn into_solution(self) -> Option<Sequence> {
        (!self.best.is_empty()).then_some(self.best)
    }
}

/// Depth-first search for the longest valid hexadecimal sequence
pub struct HexSolver {
    config: SearchConfig,
}

impl HexSolver {
    /// # Errors
    ///
    /// Returns an error if `max_len` is zero or wider than [`MAX_SEQUENCE_LEN`].
    pub fn new(config: SearchConfig) -> Result<Self, SolverError> {
        if config.max_len == 0 || config.max_len > MAX_SEQUENCE_LEN {
            return Err(SolverError::InvalidMaxLength {
                requested: config.max_len,
                max: MAX_SEQUENCE_LEN,
            });
        }
        Ok(Self { config })
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the full search and return the longest valid sequence
    pub fn find_longest(&self) -> SearchOutcome {
        self.find_longest_with(|_| {})
    }

    /// Run the full search, calling `on_discovery` each time a strictly
    /// longer valid sequence is found
    pub fn find_longest_with<F>(&self, mut on_discovery: F) -> SearchOutcome
    where
        F: FnMut(&Sequence),
    {
        info!(
            "Starting depth-first search up to {} digits",
            self.config.max_len
        );

        let mut stats = SearchStats::default();
        let best = self.extend(&Sequence::new(), Sequence::new(), &mut stats, &mut on_discovery);

        info!(
            "Search finished: best length {}, {} candidates examined ({} accepted)",
            best.len(),
            stats.examined,
            stats.accepted
        );
        SearchOutcome { best, stats }
    }

    /// Try every digit after `current`, returning the best sequence seen so
    /// far across the whole search. `current` is valid on entry.
    fn extend<F>(
        &self,
        current: &Sequence,
        mut best: Sequence,
        stats: &mut SearchStats,
        on_discovery: &mut F,
    ) -> Sequence
    where
        F: FnMut(&Sequence),
    {
        let len = current.len() + 1;

        for digit in Digit::ALL {
            let candidate = current.extended(digit);
            stats.examined += 1;

            if !prefix_valid(&candidate, len) {
                stats.prefix_pruned += 1;
                continue;
            }

            // Earlier prefixes were checked on the way down; only the new
            // length's middle needs a fresh look.
            if !middle_digit_valid(&candidate) {
                debug!("Rejecting '{}': middle digit rule", candidate);
                stats.middle_pruned += 1;
                continue;
            }

            stats.accepted += 1;

            if candidate.len() > best.len() {
                info!("Found valid number of length {}: {}", len, candidate);
                best = candidate.clone();
                on_discovery(&best);
            }

            if len < self.config.max_len {
                best = self.extend(&candidate, best, stats, on_discovery);
            }
        }

        best
    }
}

impl Default for HexSolver {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }
}
