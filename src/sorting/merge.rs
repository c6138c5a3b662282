//! Top-down merge sort

use crate::catalog::MERGE_SORT;
use crate::trace::{all_indices, SortRun, SortStep, StepRecorder};

pub fn merge_sort(input: &[i64]) -> SortRun {
    let mut array = input.to_vec();
    let mut steps = StepRecorder::new();

    steps.push(SortStep::new(
        &array,
        "Starting Merge Sort - Divide and conquer algorithm",
    ));

    if !array.is_empty() {
        let right = array.len() - 1;
        sort_range(&mut array, 0, right, &mut steps);
    }

    steps.push(
        SortStep::new(&array, "Merge Sort completed! All elements are sorted.")
            .sorted(all_indices(array.len())),
    );

    MERGE_SORT.run_result(steps.finish())
}

fn sort_range(array: &mut [i64], left: usize, right: usize, steps: &mut StepRecorder<SortStep>) {
    if left >= right {
        return;
    }

    let mid = (left + right) / 2;

    steps.push(SortStep::new(
        array,
        format!("Dividing array from position {} to {}", left, right),
    ));

    sort_range(array, left, mid, steps);
    sort_range(array, mid + 1, right, steps);
    merge(array, left, mid, right, steps);
}

/// Merge the sorted runs `array[left..=mid]` and `array[mid + 1..=right]`
///
/// Placements while both runs are live get a "Merged element" step after their
/// comparison; placements after one run drains get a "remaining element" step.
fn merge(
    array: &mut [i64],
    left: usize,
    mid: usize,
    right: usize,
    steps: &mut StepRecorder<SortStep>,
) {
    let left_run = array[left..=mid].to_vec();
    let right_run = array[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        steps.push(
            SortStep::new(
                array,
                format!("Comparing {} and {}", left_run[i], right_run[j]),
            )
            .comparing([left + i, mid + 1 + j]),
        );

        if left_run[i] <= right_run[j] {
            array[k] = left_run[i];
            i += 1;
        } else {
            array[k] = right_run[j];
            j += 1;
        }

        steps.push(SortStep::new(
            array,
            format!("Merged element {} into position {}", array[k], k),
        ));
        k += 1;
    }

    for &value in &left_run[i..] {
        array[k] = value;
        steps.push(SortStep::new(
            array,
            format!("Adding remaining element {} from left subarray", value),
        ));
        k += 1;
    }

    for &value in &right_run[j..] {
        array[k] = value;
        steps.push(SortStep::new(
            array,
            format!("Adding remaining element {} from right subarray", value),
        ));
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_elements_trace() {
        let run = merge_sort(&[2, 1]);
        let descriptions: Vec<&str> = run.steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Starting Merge Sort - Divide and conquer algorithm",
                "Dividing array from position 0 to 1",
                "Comparing 2 and 1",
                "Merged element 1 into position 0",
                "Adding remaining element 2 from left subarray",
                "Merge Sort completed! All elements are sorted.",
            ]
        );
        assert_eq!(run.steps[2].comparing, Some(vec![0, 1]));
        assert_eq!(run.final_array(), &[1, 2]);
    }

    #[test]
    fn test_division_step_does_not_mutate() {
        let run = merge_sort(&[4, 3, 2, 1]);
        assert_eq!(run.steps[1].array, vec![4, 3, 2, 1]);
        assert!(run.steps[1].description.starts_with("Dividing"));
    }
}
