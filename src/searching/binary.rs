//! Binary search over a sorted copy

use crate::catalog::BINARY_SEARCH;
use crate::trace::{SearchRun, SearchStep, StepRecorder};
use std::cmp::Ordering;

pub fn binary_search(input: &[i64], target: i64) -> SearchRun {
    let array = super::sorted_copy(input);
    let mut steps = StepRecorder::new();

    let mut left: isize = 0;
    let mut right: isize = array.len() as isize - 1;

    steps.push(
        SearchStep::new(
            &array,
            target,
            format!("Starting Binary Search for target: {} (array sorted first)", target),
        )
        .bounds(left, right),
    );

    while left <= right {
        // left <= right keeps both ends inside 0..len
        let mid = ((left + right) / 2) as usize;
        let value = array[mid];

        steps.push(
            SearchStep::new(
                &array,
                target,
                format!("Checking middle element at position {}: {}", mid, value),
            )
            .bounds(left, right)
            .mid(mid)
            .searching([mid]),
        );

        match value.cmp(&target) {
            Ordering::Equal => {
                steps.push(
                    SearchStep::new(
                        &array,
                        target,
                        format!("Found target {} at position {}!", target, mid),
                    )
                    .found(mid),
                );
                return BINARY_SEARCH.run_result(steps.finish());
            }
            Ordering::Less => {
                left = mid as isize + 1;
                steps.push(
                    SearchStep::new(
                        &array,
                        target,
                        format!("{} < {}, searching right half", value, target),
                    )
                    .bounds(left, right),
                );
            }
            Ordering::Greater => {
                right = mid as isize - 1;
                steps.push(
                    SearchStep::new(
                        &array,
                        target,
                        format!("{} > {}, searching left half", value, target),
                    )
                    .bounds(left, right),
                );
            }
        }
    }

    steps.push(super::not_found(&array, target));
    BINARY_SEARCH.run_result(steps.finish())
}
