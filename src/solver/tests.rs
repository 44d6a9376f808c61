use crate::digits::{MAX_SEQUENCE_LEN, Sequence};
use crate::predicate::{is_valid_sequence, middle_digit_valid, prefix_valid};
use crate::solver::constants::DEFAULT_MAX_LEN;
use crate::solver::{HexSolver, SearchConfig, SearchStats, SolverError};

fn solver_with_cap(max_len: usize) -> Option<HexSolver> {
    HexSolver::new(SearchConfig::with_max_len(max_len)).ok()
}

#[test]
fn test_default_search_finds_3323() {
    let outcome = HexSolver::default().find_longest();
    assert_eq!(outcome.best.to_string(), "3323");
    assert_eq!(outcome.best.value(), Some(13091));
    assert_eq!(
        outcome.solution().map(|s| s.to_string()),
        Some("3323".to_string())
    );
}

#[test]
fn test_default_search_statistics() {
    let outcome = HexSolver::default().find_longest();
    assert_eq!(
        outcome.stats,
        SearchStats {
            examined: 560,
            prefix_pruned: 410,
            middle_pruned: 116,
            accepted: 34,
        }
    );
}

#[test]
fn test_best_is_fully_valid() {
    let outcome = HexSolver::default().find_longest();
    let best = &outcome.best;
    assert!(is_valid_sequence(best));
    assert!(middle_digit_valid(best));
    for k in 1..=best.len() {
        assert!(prefix_valid(best, k), "prefix {} of {} failed", k, best);
    }
}

#[test]
fn test_discoveries_strictly_grow() {
    let mut found: Vec<Sequence> = Vec::new();
    let outcome = HexSolver::default().find_longest_with(|s| found.push(s.clone()));

    let texts: Vec<String> = found.iter().map(|s| s.to_string()).collect();
    assert_eq!(texts, vec!["3", "31", "332", "3323"]);

    for pair in found.windows(2) {
        if let [shorter, longer] = pair {
            assert!(longer.len() > shorter.len());
        }
    }
    assert!(found.iter().all(is_valid_sequence));
    assert_eq!(found.last(), Some(&outcome.best));
}

#[test]
fn test_cap_limits_length() {
    let expected = [(1, "3"), (2, "31"), (3, "332"), (4, "3323"), (5, "3323")];
    for (cap, answer) in expected {
        let solver = solver_with_cap(cap);
        assert!(solver.is_some());
        if let Some(solver) = solver {
            let outcome = solver.find_longest();
            assert!(outcome.best.len() <= cap);
            assert_eq!(outcome.best.to_string(), answer, "cap {}", cap);
        }
    }
}

#[test]
fn test_cap_of_one_examines_each_digit_once() {
    let outcome = solver_with_cap(1).map(|s| s.find_longest());
    assert_eq!(
        outcome.map(|o| o.stats),
        Some(SearchStats {
            examined: 16,
            prefix_pruned: 0,
            middle_pruned: 15,
            accepted: 1,
        })
    );
}

#[test]
fn test_search_is_deterministic() {
    let first = HexSolver::default().find_longest();
    let second = HexSolver::default().find_longest();
    assert_eq!(first, second);
}

#[test]
fn test_widest_cap_terminates() {
    let outcome = solver_with_cap(MAX_SEQUENCE_LEN).map(|s| s.find_longest());
    assert_eq!(
        outcome.map(|o| o.best.to_string()),
        Some("3323".to_string())
    );
}

#[test]
fn test_invalid_caps_rejected() {
    assert_eq!(
        HexSolver::new(SearchConfig::with_max_len(0)).err(),
        Some(SolverError::InvalidMaxLength {
            requested: 0,
            max: MAX_SEQUENCE_LEN,
        })
    );
    assert!(HexSolver::new(SearchConfig::with_max_len(MAX_SEQUENCE_LEN + 1)).is_err());
}

#[test]
fn test_default_config() {
    assert_eq!(SearchConfig::default().max_len, DEFAULT_MAX_LEN);
    assert_eq!(HexSolver::default().config().max_len, 20);
}
