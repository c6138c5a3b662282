//! Quick sort, Lomuto partition with the last element as pivot

use crate::catalog::QUICK_SORT;
use crate::trace::{all_indices, SortRun, SortStep, StepRecorder};

pub fn quick_sort(input: &[i64]) -> SortRun {
    let mut array = input.to_vec();
    let mut steps = StepRecorder::new();

    steps.push(SortStep::new(
        &array,
        "Starting Quick Sort - Divide and conquer algorithm using pivot",
    ));

    if !array.is_empty() {
        let high = array.len() - 1;
        sort_range(&mut array, 0, high, &mut steps);
    }

    steps.push(
        SortStep::new(&array, "Quick Sort completed! All elements are sorted.")
            .sorted(all_indices(array.len())),
    );

    QUICK_SORT.run_result(steps.finish())
}

/// Sort `array[low..=high]`; ranges of length <= 1 record nothing
fn sort_range(array: &mut [i64], low: usize, high: usize, steps: &mut StepRecorder<SortStep>) {
    if low >= high {
        return;
    }

    let pi = partition(array, low, high, steps);

    steps.push(
        SortStep::new(array, format!("Pivot {} is in its final position", array[pi])).sorted([pi]),
    );

    if pi > low {
        sort_range(array, low, pi - 1, steps);
    }
    sort_range(array, pi + 1, high, steps);
}

/// Partition around `array[high]` and return the pivot's resting index
fn partition(array: &mut [i64], low: usize, high: usize, steps: &mut StepRecorder<SortStep>) -> usize {
    let pivot = array[high];
    // Next slot for an element smaller than the pivot
    let mut store = low;

    steps.push(
        SortStep::new(array, format!("Selected pivot: {} at position {}", pivot, high)).pivot(high),
    );

    for j in low..high {
        steps.push(
            SortStep::new(array, format!("Comparing {} with pivot {}", array[j], pivot))
                .comparing([j])
                .pivot(high),
        );

        if array[j] < pivot {
            array.swap(store, j);
            steps.push(
                SortStep::new(array, format!("Swapping {} and {}", array[j], array[store]))
                    .swapping([store, j])
                    .pivot(high),
            );
            store += 1;
        }
    }

    array.swap(store, high);
    steps.push(
        SortStep::new(array, format!("Placing pivot {} in correct position", pivot))
            .swapping([store, high]),
    );

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_selection_precedes_partition() {
        let run = quick_sort(&[3, 1, 2]);
        assert_eq!(run.steps[1].pivot, Some(2));
        assert!(run.steps[1].comparing.is_none());
        assert_eq!(run.steps[2].comparing, Some(vec![0]));
    }

    #[test]
    fn test_single_element_records_no_partition() {
        let run = quick_sort(&[1]);
        assert_eq!(run.len(), 2);
        assert_eq!(run.steps[1].sorted, Some(vec![0]));
    }

    #[test]
    fn test_pivot_placement_step_has_no_pivot_marker() {
        let run = quick_sort(&[2, 1]);
        let placement = run
            .steps
            .iter()
            .find(|s| s.description.starts_with("Placing pivot"))
            .expect("placement step");
        assert!(placement.pivot.is_none());
        assert_eq!(placement.swapping, Some(vec![0, 1]));
        assert_eq!(placement.array, vec![1, 2]);
    }
}
