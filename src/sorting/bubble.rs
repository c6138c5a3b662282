//! Bubble sort with early exit

use crate::catalog::BUBBLE_SORT;
use crate::trace::{all_indices, SortRun, SortStep, StepRecorder};

pub fn bubble_sort(input: &[i64]) -> SortRun {
    let mut array = input.to_vec();
    let mut steps = StepRecorder::new();
    let n = array.len();

    steps.push(SortStep::new(
        &array,
        "Starting Bubble Sort - Compare adjacent elements and swap if needed",
    ));

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;

        for j in 0..n - i - 1 {
            steps.push(
                SortStep::new(
                    &array,
                    format!("Comparing elements at positions {} and {}", j, j + 1),
                )
                .comparing([j, j + 1]),
            );

            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                swapped = true;

                steps.push(
                    SortStep::new(
                        &array,
                        format!("Swapping {} and {}", array[j + 1], array[j]),
                    )
                    .swapping([j, j + 1]),
                );
            }
        }

        steps.push(
            SortStep::new(
                &array,
                format!("Element at position {} is now in its final position", n - 1 - i),
            )
            .sorted([n - 1 - i]),
        );

        if !swapped {
            break;
        }
    }

    steps.push(
        SortStep::new(&array, "Bubble Sort completed! All elements are sorted.")
            .sorted(all_indices(n)),
    );

    BUBBLE_SORT.run_result(steps.finish())
}
