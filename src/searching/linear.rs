//! Sequential scan

use crate::catalog::LINEAR_SEARCH;
use crate::trace::{SearchRun, SearchStep, StepRecorder};

pub fn linear_search(input: &[i64], target: i64) -> SearchRun {
    let array = input.to_vec();
    let mut steps = StepRecorder::new();

    steps.push(SearchStep::new(
        &array,
        target,
        format!("Starting Linear Search for target: {}", target),
    ));

    for (i, &value) in array.iter().enumerate() {
        steps.push(
            SearchStep::new(
                &array,
                target,
                format!("Checking element at position {}: {}", i, value),
            )
            .searching([i]),
        );

        if value == target {
            steps.push(
                SearchStep::new(
                    &array,
                    target,
                    format!("Found target {} at position {}!", target, i),
                )
                .found(i),
            );
            return LINEAR_SEARCH.run_result(steps.finish());
        }
    }

    steps.push(super::not_found(&array, target));
    LINEAR_SEARCH.run_result(steps.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_at_first_match() {
        let run = linear_search(&[7, 7, 7], 7);
        // start, probe 0, found
        assert_eq!(run.len(), 3);
        assert_eq!(run.found_index(), Some(0));
    }

    #[test]
    fn test_array_is_not_reordered() {
        let run = linear_search(&[4, 2, 7, 1], 9);
        assert_eq!(run.searched_array(), &[4, 2, 7, 1]);
        assert_eq!(run.found_index(), None);
        assert_eq!(run.len(), 6);
    }
}
