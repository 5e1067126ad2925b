//! Sorting engines
//!
//! Every engine clones the input, records a baseline step and then one step
//! per comparison, swap, shift or merge write. Snapshots are taken after the
//! event has been applied to the working array.

use crate::algorithms::Algorithm;
use crate::step::{Ledger, Outcome};

/// Bubble sort: one step per adjacent comparison, highlighting `(j, j + 1)`
pub fn bubble_sort(input: &[i32]) -> Ledger {
    let mut a = input.to_vec();
    let mut ledger = Ledger::new(Algorithm::BubbleSort);
    ledger.record_start(&a);

    let n = a.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                ledger.record(
                    &a,
                    Some(j),
                    Some(j + 1),
                    format!("Swapped elements at indices {} and {}", j, j + 1),
                );
            } else {
                ledger.record(
                    &a,
                    Some(j),
                    Some(j + 1),
                    format!("Compared elements at indices {} and {}", j, j + 1),
                );
            }
        }
    }

    ledger.set_outcome(Outcome::Sorted);
    ledger
}

/// Selection sort: one step per inner scan highlighting `(min, j)`, then one
/// step for the swap highlighting `(i, min)`
pub fn selection_sort(input: &[i32]) -> Ledger {
    let mut a = input.to_vec();
    let mut ledger = Ledger::new(Algorithm::SelectionSort);
    ledger.record_start(&a);

    let n = a.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if a[j] < a[min] {
                min = j;
            }
            ledger.record(
                &a,
                Some(min),
                Some(j),
                format!("Selecting new minimum at index {}", min),
            );
        }
        a.swap(i, min);
        ledger.record(
            &a,
            Some(i),
            Some(min),
            format!("Swapped elements at indices {} and {}", i, min),
        );
    }

    ledger.set_outcome(Outcome::Sorted);
    ledger
}

/// Insertion sort.
///
/// Each shift records highlight `(i, j)` where `j` is the scan index after it
/// was decremented; when that index runs off the front of the array the second
/// highlight is absent and the action reports index -1. The placement of the
/// key records `(i, j + 1)`.
pub fn insertion_sort(input: &[i32]) -> Ledger {
    let mut a = input.to_vec();
    let mut ledger = Ledger::new(Algorithm::InsertionSort);
    ledger.record_start(&a);

    for i in 1..a.len() {
        let key = a[i];
        // `hole` is always j + 1
        let mut hole = i;
        while hole > 0 && a[hole - 1] > key {
            a[hole] = a[hole - 1];
            hole -= 1;
            ledger.record(
                &a,
                Some(i),
                hole.checked_sub(1),
                format!("Shifting element at index {}", hole as isize - 1),
            );
        }
        a[hole] = key;
        ledger.record(
            &a,
            Some(i),
            Some(hole),
            format!("Inserted key {} at position {}", key, hole),
        );
    }

    ledger.set_outcome(Outcome::Sorted);
    ledger
}

/// Top-down merge sort with a closing step once the array is fully merged.
///
/// Merge writes that involve a comparison record one step each; tail copies
/// record nothing, so the closing step is what shows the final order.
pub fn merge_sort(input: &[i32]) -> Ledger {
    let mut a = input.to_vec();
    let mut ledger = Ledger::new(Algorithm::MergeSort);
    ledger.record_start(&a);

    if !a.is_empty() {
        let last = a.len() - 1;
        sort_range(&mut a, 0, last, &mut ledger);
    }

    ledger.record(&a, None, None, "Merge Sort complete");
    ledger.set_outcome(Outcome::Sorted);
    ledger
}

fn sort_range(a: &mut [i32], l: usize, r: usize, ledger: &mut Ledger) {
    if l < r {
        let m = l + (r - l) / 2;
        sort_range(a, l, m, ledger);
        sort_range(a, m + 1, r, ledger);
        merge(a, l, m, r, ledger);
    }
}

fn merge(a: &mut [i32], l: usize, m: usize, r: usize, ledger: &mut Ledger) {
    let left = a[l..=m].to_vec();
    let right = a[m + 1..=r].to_vec();
    let (mut i, mut j, mut k) = (0, 0, l);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            a[k] = left[i];
            i += 1;
        } else {
            a[k] = right[j];
            j += 1;
        }
        k += 1;
        // Last consumed positions: l + i - 1 on the left, m + 1 + j - 1 on the right
        ledger.record(
            a,
            (l + i).checked_sub(1),
            Some(m + j),
            format!("Merging subarrays [{}..{}] and [{}..{}]", l, m, m + 1, r),
        );
    }

    while i < left.len() {
        a[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        a[k] = right[j];
        j += 1;
        k += 1;
    }
}
