// Integration tests for the searching engines

use algoscope::algorithms::searching::{
    binary_search, interpolation_search, jump_search, linear_search,
};
use algoscope::{Algorithm, Outcome, VisualizerError};

#[test]
fn test_linear_search_scenario() {
    let ledger = linear_search(&[2, 7, 4, 1, 9], 4);

    assert_eq!(ledger.len(), 4);
    assert_eq!(ledger.outcome(), &Outcome::Found(2));

    let last = ledger.last().unwrap();
    assert_eq!(last.highlight_a, Some(2));
    assert_eq!(last.highlight_b, None);
    assert!(last.narrative().contains("Found target!"));

    // Linear search keeps the input order
    assert_eq!(last.snapshot, vec![2, 7, 4, 1, 9]);
    for step in &ledger.steps()[1..3] {
        assert!(!step.action.contains("Found"));
    }
}

#[test]
fn test_linear_search_miss_checks_every_index() {
    let ledger = linear_search(&[2, 7, 4], 5);
    assert_eq!(ledger.len(), 4);
    assert_eq!(ledger.outcome(), &Outcome::NotFound);
    let probed: Vec<_> = ledger.steps()[1..].iter().map(|s| s.highlight_a).collect();
    assert_eq!(probed, vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn test_binary_search_scenario() {
    let ledger = binary_search(&[10, 20, 30, 40, 50], 25);

    assert_eq!(ledger.outcome(), &Outcome::NotFound);
    let probed: Vec<_> = ledger.steps()[1..].iter().map(|s| s.highlight_a).collect();
    assert_eq!(probed, vec![Some(2), Some(0), Some(1)]);
    assert!(ledger.steps().iter().all(|s| !s.action.contains("Found")));
}

#[test]
fn test_binary_search_sorts_before_baseline() {
    let ledger = binary_search(&[50, 10, 40, 20, 30], 40);

    assert_eq!(ledger.steps()[0].snapshot, vec![10, 20, 30, 40, 50]);
    assert_eq!(ledger.outcome(), &Outcome::Found(3));
    let last = ledger.last().unwrap();
    assert_eq!(last.highlight_a, Some(3));
    assert!(last.action.contains("Found target!"));
}

#[test]
fn test_jump_search_found_in_block() {
    let input = [17, 1, 15, 3, 13, 5, 11, 7, 9];
    let ledger = jump_search(&input, 13);

    assert_eq!(ledger.steps()[0].snapshot, vec![1, 3, 5, 7, 9, 11, 13, 15, 17]);
    let probed: Vec<_> = ledger.steps()[1..].iter().map(|s| s.highlight_a).collect();
    // Two block boundaries, then the scan hits 13 straight away
    assert_eq!(probed, vec![Some(2), Some(5), Some(6)]);
    assert!(ledger.steps()[1].action.starts_with("Jumping to index 2"));
    assert_eq!(ledger.outcome(), &Outcome::Found(6));
}

#[test]
fn test_jump_search_past_the_end() {
    let ledger = jump_search(&[1, 3, 5, 7, 9, 11, 13, 15, 17], 100);
    let probed: Vec<_> = ledger.steps()[1..].iter().map(|s| s.highlight_a).collect();
    assert_eq!(probed, vec![Some(2), Some(5), Some(8)]);
    assert_eq!(ledger.outcome(), &Outcome::NotFound);
}

#[test]
fn test_jump_search_small_array() {
    let ledger = jump_search(&[4, 2], 4);
    // Block size 1: jump past index 0, then scan index 1
    let probed: Vec<_> = ledger.steps()[1..].iter().map(|s| s.highlight_a).collect();
    assert_eq!(probed, vec![Some(0), Some(1)]);
    assert_eq!(ledger.outcome(), &Outcome::Found(1));
}

#[test]
fn test_interpolation_search_direct_hit() {
    let ledger = interpolation_search(&[10, 20, 30, 40, 50], 40);
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.last().unwrap().highlight_a, Some(3));
    assert_eq!(ledger.outcome(), &Outcome::Found(3));
}

#[test]
fn test_interpolation_search_out_of_range_target() {
    let ledger = interpolation_search(&[10, 20, 30], 5);
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.outcome(), &Outcome::NotFound);
}

#[test]
fn test_interpolation_search_degenerate_bounds() {
    let ledger = interpolation_search(&[5, 5, 5], 5);

    // Halts before any probe instead of dividing by zero
    assert_eq!(ledger.len(), 1);
    assert_eq!(
        ledger.outcome(),
        &Outcome::Halted(VisualizerError::DegenerateInterpolationBounds { low: 0, high: 2 })
    );
}

#[test]
fn test_interpolation_search_single_element() {
    let ledger = interpolation_search(&[5], 5);
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.outcome(), &Outcome::Found(0));
}

#[test]
fn test_interpolation_search_extreme_values() {
    let ledger = interpolation_search(&[i32::MIN, 0, i32::MAX], i32::MAX);
    assert_eq!(ledger.outcome(), &Outcome::Found(2));
}

#[test]
fn test_search_without_target_records_baseline() {
    let ledger = Algorithm::BinarySearch.run(&[3, 1, 2], None);
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.outcome(), &Outcome::NotFound);
}
