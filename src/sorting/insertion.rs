//! Insertion sort

use crate::catalog::INSERTION_SORT;
use crate::trace::{all_indices, SortRun, SortStep, StepRecorder};

pub fn insertion_sort(input: &[i64]) -> SortRun {
    let mut array = input.to_vec();
    let mut steps = StepRecorder::new();
    let n = array.len();

    steps.push(
        SortStep::new(
            &array,
            "Starting Insertion Sort - First element is considered sorted",
        )
        .sorted(all_indices(n.min(1))),
    );

    for i in 1..n {
        let key = array[i];
        // Slot the key will land in; everything in `slot..i` shifts right
        let mut slot = i;

        steps.push(
            SortStep::new(&array, format!("Inserting {} into the sorted portion", key))
                .comparing([i])
                .sorted(all_indices(i)),
        );

        while slot > 0 && array[slot - 1] > key {
            steps.push(
                SortStep::new(&array, format!("Comparing {} with {}", array[slot - 1], key))
                    .comparing([slot - 1, slot])
                    .sorted(all_indices(i)),
            );

            array[slot] = array[slot - 1];
            slot -= 1;

            steps.push(
                SortStep::new(&array, format!("Shifting {} to the right", array[slot + 1]))
                    .swapping([slot, slot + 1])
                    .sorted(all_indices(i)),
            );
        }

        array[slot] = key;

        steps.push(
            SortStep::new(&array, format!("Placed {} in its correct position", key))
                .sorted(all_indices(i + 1)),
        );
    }

    steps.push(
        SortStep::new(&array, "Insertion Sort completed! All elements are sorted.")
            .sorted(all_indices(n)),
    );

    INSERTION_SORT.run_result(steps.finish())
}
