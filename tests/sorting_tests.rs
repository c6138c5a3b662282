// Integration tests for the sort trace engine

use algotrace::sorting::{bubble_sort, insertion_sort, merge_sort, quick_sort, SortAlgorithm};
use algotrace::trace::SortRun;

fn full_range(n: usize) -> Option<Vec<usize>> {
    Some((0..n).collect())
}

fn assert_well_formed(run: &SortRun, input: &[i64]) {
    assert!(run.len() >= 2, "{} produced {} steps", run.name, run.len());
    for step in &run.steps {
        assert_eq!(step.array.len(), input.len(), "{}: {}", run.name, step.description);
    }
    let last = run.last_step().expect("non-empty trace");
    assert_eq!(last.sorted, full_range(input.len()));

    let mut expected = input.to_vec();
    expected.sort();
    assert_eq!(run.final_array(), expected.as_slice());
}

#[test]
fn test_bubble_example() {
    let run = bubble_sort(&[5, 3, 8, 1]);
    assert_eq!(run.final_array(), &[1, 3, 5, 8]);
    assert_eq!(run.last_step().and_then(|s| s.sorted.clone()), Some(vec![0, 1, 2, 3]));
    assert_eq!(run.name, "Bubble Sort");
}

#[test]
fn test_quick_single_element() {
    let run = quick_sort(&[1]);
    assert!(run.len() >= 2);
    assert_eq!(run.last_step().and_then(|s| s.sorted.clone()), Some(vec![0]));
}

#[test]
fn test_merge_empty() {
    let run = merge_sort(&[]);
    assert!(run.len() >= 2);
    assert!(run.final_array().is_empty());
    assert_eq!(run.last_step().and_then(|s| s.sorted.clone()), Some(vec![]));
}

#[test]
fn test_degenerate_inputs_are_start_and_finish_only() {
    for alg in SortAlgorithm::ALL {
        for input in [vec![], vec![42]] {
            let run = alg.run(&input);
            assert_eq!(run.len(), 2, "{} on {:?}", run.name, input);
            assert!(run.steps[0].description.starts_with("Starting"));
            assert!(run.steps[1].description.ends_with("All elements are sorted."));
        }
    }
}

#[test]
fn test_all_sorts_on_duplicates_and_negatives() {
    let input = [3, -1, 3, 0, -1, 7, 3];
    for alg in SortAlgorithm::ALL {
        assert_well_formed(&alg.run(&input), &input);
    }
}

#[test]
fn test_input_is_not_mutated() {
    let input = vec![9, 4, 7, 1];
    let snapshot = input.clone();
    for alg in SortAlgorithm::ALL {
        let _ = alg.run(&input);
    }
    assert_eq!(input, snapshot);
}

#[test]
fn test_bubble_early_exit_on_sorted_input() {
    let input = [1, 2, 3, 4, 5, 6];
    let run = bubble_sort(&input);
    let comparisons = run.steps.iter().filter(|s| s.comparing.is_some()).count();
    assert_eq!(comparisons, input.len() - 1);
    assert_eq!(run.final_array(), &input);
}

#[test]
fn test_bubble_never_swaps_equal_neighbours() {
    let run = bubble_sort(&[2, 2, 2]);
    assert!(run.steps.iter().all(|s| s.swapping.is_none()));
}

#[test]
fn test_bubble_marks_one_position_per_pass() {
    let run = bubble_sort(&[4, 3, 2, 1]);
    let pass_markers: Vec<Vec<usize>> = run
        .steps
        .iter()
        .filter(|s| s.description.contains("final position"))
        .filter_map(|s| s.sorted.clone())
        .collect();
    assert_eq!(pass_markers, vec![vec![3], vec![2], vec![1]]);
}

#[test]
fn test_quick_sort_pivot_markers() {
    let run = quick_sort(&[3, 6, 1, 5, 2, 4]);
    for step in &run.steps {
        if let Some(pivot) = step.pivot {
            assert!(pivot < 6);
        }
        if let Some(cmp) = &step.comparing {
            assert_eq!(cmp.len(), 1, "quick sort compares one element with the pivot");
            assert!(step.pivot.is_some());
        }
    }
    let finals: Vec<&str> = run
        .steps
        .iter()
        .filter(|s| s.description.ends_with("is in its final position"))
        .map(|s| s.description.as_str())
        .collect();
    assert!(!finals.is_empty());
}

#[test]
fn test_quick_sort_already_sorted_recurses_on_right() {
    let run = quick_sort(&[1, 2, 3]);
    let pivots: Vec<usize> = run
        .steps
        .iter()
        .filter(|s| s.description.starts_with("Selected pivot"))
        .filter_map(|s| s.pivot)
        .collect();
    assert_eq!(pivots, vec![2, 1]);
    assert_eq!(run.final_array(), &[1, 2, 3]);
}

#[test]
fn test_merge_sort_step_count_is_stable() {
    // [3, 1, 2]: divide 0..2, divide 0..1, merge(0,0,1): cmp + merged + 1 leftover,
    // merge(0,1,2): 2 x (cmp + merged) + 1 leftover
    let run = merge_sort(&[3, 1, 2]);
    let descriptions: Vec<&str> = run.steps.iter().map(|s| s.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec![
            "Starting Merge Sort - Divide and conquer algorithm",
            "Dividing array from position 0 to 2",
            "Dividing array from position 0 to 1",
            "Comparing 3 and 1",
            "Merged element 1 into position 0",
            "Adding remaining element 3 from left subarray",
            "Comparing 1 and 2",
            "Merged element 1 into position 0",
            "Comparing 3 and 2",
            "Merged element 2 into position 1",
            "Adding remaining element 3 from left subarray",
            "Merge Sort completed! All elements are sorted.",
        ]
    );
    assert_eq!(run.steps[8].comparing, Some(vec![1, 2]));
}

#[test]
fn test_insertion_sorted_prefix_grows() {
    let run = insertion_sort(&[3, 2, 1]);
    let placed: Vec<Vec<usize>> = run
        .steps
        .iter()
        .filter(|s| s.description.starts_with("Placed"))
        .filter_map(|s| s.sorted.clone())
        .collect();
    assert_eq!(placed, vec![vec![0, 1], vec![0, 1, 2]]);
    assert_eq!(run.steps[0].sorted, Some(vec![0]));
}
