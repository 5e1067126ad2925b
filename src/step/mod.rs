// Step recording for replayable algorithm runs

use crate::algorithms::Algorithm;
use crate::errors::VisualizerError;

/// One recorded moment of an algorithm run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Independent copy of the array at this point of execution
    pub snapshot: Vec<i32>,
    pub highlight_a: Option<usize>,
    pub highlight_b: Option<usize>,
    /// Static code listing of the algorithm that produced this step
    pub listing: &'static str,
    /// What happened at this step ("Swapped elements at indices 0 and 1")
    pub action: String,
    /// Set only on the step recorded before the algorithm starts
    pub is_baseline: bool,
}

impl Step {
    /// Full narrative text: listing header followed by the action line.
    ///
    /// The baseline step leaves a blank line before its starting marker.
    pub fn narrative(&self) -> String {
        let gap = if self.is_baseline { "\n\n" } else { "\n" };
        format!("{}{}{}", self.listing, gap, self.action)
    }

    /// Whether index `i` is one of the highlighted positions
    pub fn is_highlighted(&self, i: usize) -> bool {
        self.highlight_a == Some(i) || self.highlight_b == Some(i)
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sorted,
    /// Index of the match within the searched snapshot
    Found(usize),
    NotFound,
    /// Search stopped early on an undefined probe
    Halted(VisualizerError),
}

/// Append-only sequence of steps produced by one algorithm run
#[derive(Debug, Clone)]
pub struct Ledger {
    algorithm: Algorithm,
    steps: Vec<Step>,
    outcome: Outcome,
}

impl Ledger {
    pub fn new(algorithm: Algorithm) -> Self {
        let outcome = if algorithm.requires_target() {
            Outcome::NotFound
        } else {
            Outcome::Sorted
        };
        Ledger {
            algorithm,
            steps: Vec::new(),
            outcome,
        }
    }

    /// Record a step, copying `values` so later writes never reach it
    pub fn record(
        &mut self,
        values: &[i32],
        highlight_a: Option<usize>,
        highlight_b: Option<usize>,
        action: impl Into<String>,
    ) {
        debug_assert!(highlight_a.map_or(true, |i| i < values.len()));
        debug_assert!(highlight_b.map_or(true, |i| i < values.len()));

        self.steps.push(Step {
            snapshot: values.to_vec(),
            highlight_a,
            highlight_b,
            listing: self.algorithm.listing(),
            action: action.into(),
            is_baseline: false,
        });
    }

    /// Record the baseline step every run starts with
    pub fn record_start(&mut self, values: &[i32]) {
        let action = format!("Starting {}...", self.algorithm.name());
        self.record(values, None, None, action);
        if let Some(step) = self.steps.last_mut() {
            step.is_baseline = true;
        }
    }

    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_copies_values() {
        let mut ledger = Ledger::new(Algorithm::BubbleSort);
        let mut values = vec![3, 1, 2];
        ledger.record_start(&values);
        values.swap(0, 1);
        ledger.record(&values, Some(0), Some(1), "Swapped elements at indices 0 and 1");

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.steps()[0].snapshot, vec![3, 1, 2]);
        assert_eq!(ledger.steps()[1].snapshot, vec![1, 3, 2]);
    }

    #[test]
    fn test_start_step_has_no_highlights() {
        let mut ledger = Ledger::new(Algorithm::LinearSearch);
        ledger.record_start(&[4, 5]);

        let step = &ledger.steps()[0];
        assert_eq!(step.highlight_a, None);
        assert_eq!(step.highlight_b, None);
        assert!(step.narrative().contains("Starting Linear Search..."));
        assert!(step.narrative().starts_with("// Linear Search"));
        assert_eq!(ledger.outcome(), &Outcome::NotFound);
    }

    #[test]
    fn test_blank_line_only_before_starting_marker() {
        let mut ledger = Ledger::new(Algorithm::BubbleSort);
        ledger.record_start(&[2, 1]);
        ledger.record(&[1, 2], Some(0), Some(1), "Swapped elements at indices 0 and 1");

        let listing = Algorithm::BubbleSort.listing();
        let steps = ledger.steps();
        assert!(steps[0].is_baseline);
        assert_eq!(
            steps[0].narrative(),
            format!("{}\n\nStarting Bubble Sort...", listing)
        );
        assert!(!steps[1].is_baseline);
        assert_eq!(
            steps[1].narrative(),
            format!("{}\nSwapped elements at indices 0 and 1", listing)
        );
    }
}
