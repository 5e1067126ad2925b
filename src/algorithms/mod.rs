//! Step-recording algorithm engines
//!
//! Each engine simulates a textbook algorithm on a private copy of the input
//! and records one [`Step`](crate::step::Step) per meaningful event:
//!
//! - [`sorting`]: bubble, selection, insertion and merge sort
//! - [`searching`]: linear, binary, jump and interpolation search
//! - [`listings`]: the code listings shown as each step's narrative header
//!
//! Engines never see an empty array; the run controller rejects that case
//! before dispatching.

pub mod listings;
pub mod searching;
pub mod sorting;

use crate::step::Ledger;
use std::fmt;
use std::str::FromStr;

/// Which family of algorithms the front end is offering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sorting,
    Searching,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Sorting => Mode::Searching,
            Mode::Searching => Mode::Sorting,
        }
    }

    /// The four algorithms offered in this mode, in menu order
    pub fn algorithms(self) -> [Algorithm; 4] {
        match self {
            Mode::Sorting => [
                Algorithm::BubbleSort,
                Algorithm::SelectionSort,
                Algorithm::InsertionSort,
                Algorithm::MergeSort,
            ],
            Mode::Searching => [
                Algorithm::LinearSearch,
                Algorithm::BinarySearch,
                Algorithm::JumpSearch,
                Algorithm::InterpolationSearch,
            ],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Sorting => "Sorting",
            Mode::Searching => "Searching",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    LinearSearch,
    BinarySearch,
    JumpSearch,
    InterpolationSearch,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::JumpSearch,
        Algorithm::InterpolationSearch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::JumpSearch => "Jump Search",
            Algorithm::InterpolationSearch => "Interpolation Search",
        }
    }

    pub fn mode(self) -> Mode {
        match self {
            Algorithm::BubbleSort
            | Algorithm::SelectionSort
            | Algorithm::InsertionSort
            | Algorithm::MergeSort => Mode::Sorting,
            Algorithm::LinearSearch
            | Algorithm::BinarySearch
            | Algorithm::JumpSearch
            | Algorithm::InterpolationSearch => Mode::Searching,
        }
    }

    /// Search variants need a target before they can run
    pub fn requires_target(self) -> bool {
        self.mode() == Mode::Searching
    }

    pub fn listing(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => listings::BUBBLE_SORT,
            Algorithm::SelectionSort => listings::SELECTION_SORT,
            Algorithm::InsertionSort => listings::INSERTION_SORT,
            Algorithm::MergeSort => listings::MERGE_SORT,
            Algorithm::LinearSearch => listings::LINEAR_SEARCH,
            Algorithm::BinarySearch => listings::BINARY_SEARCH,
            Algorithm::JumpSearch => listings::JUMP_SEARCH,
            Algorithm::InterpolationSearch => listings::INTERPOLATION_SEARCH,
        }
    }

    /// Run the engine to completion and return its ledger.
    ///
    /// `target` is ignored by the sort variants. Search variants called
    /// without a target record only the baseline step.
    pub fn run(self, input: &[i32], target: Option<i32>) -> Ledger {
        match (self, target) {
            (Algorithm::BubbleSort, _) => sorting::bubble_sort(input),
            (Algorithm::SelectionSort, _) => sorting::selection_sort(input),
            (Algorithm::InsertionSort, _) => sorting::insertion_sort(input),
            (Algorithm::MergeSort, _) => sorting::merge_sort(input),
            (Algorithm::LinearSearch, Some(t)) => searching::linear_search(input, t),
            (Algorithm::BinarySearch, Some(t)) => searching::binary_search(input, t),
            (Algorithm::JumpSearch, Some(t)) => searching::jump_search(input, t),
            (Algorithm::InterpolationSearch, Some(t)) => {
                searching::interpolation_search(input, t)
            }
            (search, None) => {
                let mut ledger = Ledger::new(search);
                ledger.record_start(input);
                ledger
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    /// Accepts display names in any case, with spaces, `-` or `_` between words
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name().replace(' ', "").to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown algorithm '{}'", s))
    }
}
