//! Jump search: probe block boundaries, then scan one block

use crate::catalog::JUMP_SEARCH;
use crate::trace::{SearchRun, SearchStep, StepRecorder};

pub fn jump_search(input: &[i64], target: i64) -> SearchRun {
    let array = super::sorted_copy(input);
    let mut steps = StepRecorder::new();
    let n = array.len();
    let block = block_size(n);

    steps.push(SearchStep::new(
        &array,
        target,
        format!(
            "Starting Jump Search for target: {} with step size: {}",
            target, block
        ),
    ));

    if n == 0 {
        steps.push(super::not_found(&array, target));
        return JUMP_SEARCH.run_result(steps.finish());
    }

    let mut prev = 0;
    let mut step = block;

    loop {
        let boundary = step.min(n) - 1;
        if array[boundary] >= target {
            break;
        }

        steps.push(
            SearchStep::new(
                &array,
                target,
                format!(
                    "Checking position {}: {} < {}, jumping forward",
                    boundary, array[boundary], target
                ),
            )
            .searching([boundary]),
        );

        prev = step;
        step += block;

        if prev >= n {
            steps.push(super::not_found(&array, target));
            return JUMP_SEARCH.run_result(steps.finish());
        }
    }

    steps.push(SearchStep::new(
        &array,
        target,
        format!(
            "Found potential block, performing linear search from position {}",
            prev
        ),
    ));

    for i in prev..step.min(n) {
        steps.push(
            SearchStep::new(
                &array,
                target,
                format!("Linear search: checking position {}: {}", i, array[i]),
            )
            .searching([i]),
        );

        if array[i] == target {
            steps.push(
                SearchStep::new(
                    &array,
                    target,
                    format!("Found target {} at position {}!", target, i),
                )
                .found(i),
            );
            return JUMP_SEARCH.run_result(steps.finish());
        }
    }

    steps.push(super::not_found(&array, target));
    JUMP_SEARCH.run_result(steps.finish())
}

/// `floor(sqrt(n))`, zero only for an empty array
fn block_size(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    // Correct any floating point drift at perfect squares
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size() {
        assert_eq!(block_size(0), 0);
        assert_eq!(block_size(1), 1);
        assert_eq!(block_size(5), 2);
        assert_eq!(block_size(9), 3);
        assert_eq!(block_size(200), 14);
    }

    #[test]
    fn test_empty_array_is_start_then_not_found() {
        let run = jump_search(&[], 4);
        assert_eq!(run.len(), 2);
        assert!(run.steps[0].description.ends_with("step size: 0"));
        assert_eq!(run.found_index(), None);
    }

    #[test]
    fn test_target_beyond_last_block() {
        let run = jump_search(&[1, 2, 3, 4], 10);
        // start, probe 1, probe 3, not found
        assert_eq!(run.len(), 4);
        assert_eq!(run.steps[1].searching, Some(vec![1]));
        assert_eq!(run.steps[2].searching, Some(vec![3]));
        assert_eq!(run.last_step().map(|s| s.description.as_str()), Some("Target 10 not found in the array."));
    }

    #[test]
    fn test_found_in_second_block() {
        let run = jump_search(&[1, 2, 3, 4], 3);
        assert_eq!(run.steps[2].description, "Found potential block, performing linear search from position 2");
        assert_eq!(run.found_index(), Some(2));
    }
}
