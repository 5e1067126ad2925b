// Property tests over every engine's ledger

use algoscope::{Algorithm, Mode, RunController};
use proptest::prelude::*;

fn arrays() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-500i32..500, 1..32)
}

fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

proptest! {
    #[test]
    fn sort_final_snapshot_is_sorted(input in arrays()) {
        let mut expected = input.clone();
        expected.sort();
        for algo in Mode::Sorting.algorithms() {
            let ledger = algo.run(&input, None);
            prop_assert_eq!(&ledger.last().unwrap().snapshot, &expected);
        }
    }

    #[test]
    fn snapshots_keep_length_and_highlights_in_range(input in arrays(), target in -500i32..500) {
        for algo in Algorithm::ALL {
            let ledger = algo.run(&input, Some(target));
            prop_assert!(!ledger.is_empty());
            for step in ledger.steps() {
                prop_assert_eq!(step.snapshot.len(), input.len());
                for index in [step.highlight_a, step.highlight_b].into_iter().flatten() {
                    prop_assert!(index < input.len());
                }
            }
        }
    }

    #[test]
    fn ordered_searches_start_sorted(input in arrays(), target in -500i32..500) {
        for algo in [Algorithm::BinarySearch, Algorithm::JumpSearch, Algorithm::InterpolationSearch] {
            let ledger = algo.run(&input, Some(target));
            prop_assert!(is_sorted(&ledger.steps()[0].snapshot));
        }
    }

    #[test]
    fn found_means_last_step_matches(input in arrays(), pick in any::<prop::sample::Index>()) {
        let target = input[pick.index(input.len())];
        for algo in [Algorithm::LinearSearch, Algorithm::BinarySearch, Algorithm::JumpSearch] {
            let ledger = algo.run(&input, Some(target));
            let last = ledger.last().unwrap();
            let index = last.highlight_a.unwrap();
            prop_assert_eq!(last.snapshot[index], target);
            prop_assert!(last.action.contains("Found target!"));
        }
    }

    #[test]
    fn seek_out_of_range_never_moves_cursor(input in arrays(), jump in 0usize..64, offset in 0usize..1000) {
        let mut controller = RunController::new();
        controller.set_values(input).unwrap();
        controller.run_algorithm(Algorithm::InsertionSort, None).unwrap();

        let total = controller.total_steps();
        controller.seek(jump % total);
        let before = controller.cursor();

        prop_assert!(controller.seek(total + offset).is_none());
        prop_assert_eq!(controller.cursor(), before);
    }
}
