//! Searching engines
//!
//! Linear search scans the input in its given order. Binary, jump and
//! interpolation search sort their private copy before the baseline step, so
//! every snapshot they record is non-decreasing. All four stop recording at the
//! first match.

use crate::algorithms::Algorithm;
use crate::errors::VisualizerError;
use crate::step::{Ledger, Outcome};

fn probe_action(index: usize, found: bool) -> String {
    if found {
        format!("Checking index {}: Found target!", index)
    } else {
        format!("Checking index {}", index)
    }
}

pub fn linear_search(input: &[i32], target: i32) -> Ledger {
    let a = input.to_vec();
    let mut ledger = Ledger::new(Algorithm::LinearSearch);
    ledger.record_start(&a);

    for (i, &value) in a.iter().enumerate() {
        let found = value == target;
        ledger.record(&a, Some(i), None, probe_action(i, found));
        if found {
            ledger.set_outcome(Outcome::Found(i));
            break;
        }
    }

    ledger
}

pub fn binary_search(input: &[i32], target: i32) -> Ledger {
    let mut a = input.to_vec();
    a.sort_unstable();
    let mut ledger = Ledger::new(Algorithm::BinarySearch);
    ledger.record_start(&a);

    // `high` is exclusive so the bounds never go negative
    let (mut low, mut high) = (0, a.len());
    while low < high {
        let mid = low + (high - 1 - low) / 2;
        let found = a[mid] == target;
        ledger.record(
            &a,
            Some(mid),
            None,
            if found {
                format!("Checking mid index {}: Found target!", mid)
            } else {
                format!("Checking mid index {}", mid)
            },
        );
        if found {
            ledger.set_outcome(Outcome::Found(mid));
            break;
        } else if a[mid] < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    ledger
}

pub fn jump_search(input: &[i32], target: i32) -> Ledger {
    let mut a = input.to_vec();
    a.sort_unstable();
    let mut ledger = Ledger::new(Algorithm::JumpSearch);
    ledger.record_start(&a);

    let n = a.len();
    let block = (n as f64).sqrt() as usize;
    let mut step = block;
    let mut prev = 0;

    while prev < n && a[step.min(n) - 1] < target {
        let boundary = step.min(n) - 1;
        ledger.record(
            &a,
            Some(boundary),
            None,
            format!("Jumping to index {}", boundary),
        );
        prev = step;
        step += block;
    }

    for i in prev..step.min(n) {
        let found = a[i] == target;
        ledger.record(&a, Some(i), None, probe_action(i, found));
        if found {
            ledger.set_outcome(Outcome::Found(i));
            break;
        }
    }

    ledger
}

/// Interpolation search.
///
/// When `a[low] == a[high]` with `low < high` the probe formula divides by
/// zero; the search stops there and the ledger's outcome is
/// [`Outcome::Halted`]. A single remaining slot is probed directly.
pub fn interpolation_search(input: &[i32], target: i32) -> Ledger {
    let mut a = input.to_vec();
    a.sort_unstable();
    let mut ledger = Ledger::new(Algorithm::InterpolationSearch);
    ledger.record_start(&a);

    if a.is_empty() {
        return ledger;
    }

    let (mut low, mut high) = (0usize, a.len() - 1);
    while low <= high && target >= a[low] && target <= a[high] {
        let pos = if low == high {
            low
        } else if a[high] == a[low] {
            ledger.set_outcome(Outcome::Halted(
                VisualizerError::DegenerateInterpolationBounds { low, high },
            ));
            break;
        } else {
            // Widen before multiplying; the quotient stays inside [low, high]
            let span = (high - low) as i64;
            let offset =
                (target as i64 - a[low] as i64) * span / (a[high] as i64 - a[low] as i64);
            low + offset as usize
        };

        let found = a[pos] == target;
        ledger.record(&a, Some(pos), None, probe_action(pos, found));
        if found {
            ledger.set_outcome(Outcome::Found(pos));
            break;
        }
        if a[pos] < target {
            low = pos + 1;
        } else if pos == 0 {
            break;
        } else {
            high = pos - 1;
        }
    }

    ledger
}
