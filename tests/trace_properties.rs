// Property tests over arbitrary small arrays

use algotrace::searching::SearchAlgorithm;
use algotrace::sorting::SortAlgorithm;
use proptest::prelude::*;

fn small_array() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..40)
}

fn sort_algorithm() -> impl Strategy<Value = SortAlgorithm> {
    prop::sample::select(SortAlgorithm::ALL.to_vec())
}

fn search_algorithm() -> impl Strategy<Value = SearchAlgorithm> {
    prop::sample::select(SearchAlgorithm::ALL.to_vec())
}

proptest! {
    #[test]
    fn sort_result_is_sorted_permutation(alg in sort_algorithm(), input in small_array()) {
        let run = alg.run(&input);

        let mut expected = input.clone();
        expected.sort();
        prop_assert_eq!(run.final_array(), expected.as_slice());

        let last = run.last_step().expect("non-empty trace");
        prop_assert_eq!(last.sorted.clone(), Some((0..input.len()).collect::<Vec<_>>()));
    }

    #[test]
    fn sort_trace_shape(alg in sort_algorithm(), input in small_array()) {
        let run = alg.run(&input);
        prop_assert!(run.len() >= 2);
        for step in &run.steps {
            prop_assert_eq!(step.array.len(), input.len());
            for set in [&step.comparing, &step.swapping, &step.sorted].into_iter().flatten() {
                prop_assert!(set.len() <= input.len().max(1));
                prop_assert!(set.iter().all(|&i| i < input.len()));
            }
            if let Some(cmp) = &step.comparing {
                prop_assert!(cmp.len() <= 2);
            }
            if let Some(swap) = &step.swapping {
                prop_assert!(swap.len() <= 2);
            }
        }
    }

    #[test]
    fn sorting_sorted_input_is_identity(alg in sort_algorithm(), mut input in small_array()) {
        input.sort();
        let run = alg.run(&input);
        prop_assert_eq!(run.final_array(), input.as_slice());
        if alg == SortAlgorithm::Bubble {
            let comparisons = run.steps.iter().filter(|s| s.comparing.is_some()).count();
            prop_assert_eq!(comparisons, input.len().saturating_sub(1));
        }
    }

    #[test]
    fn sort_does_not_mutate_input(alg in sort_algorithm(), input in small_array()) {
        let before = input.clone();
        let _ = alg.run(&input);
        prop_assert_eq!(input, before);
    }

    #[test]
    fn search_found_is_unique_terminal_and_correct(
        alg in search_algorithm(),
        input in small_array(),
        target in -60i64..60,
    ) {
        let run = alg.run(&input, target);
        prop_assert!(run.len() >= 2);

        let found_steps: Vec<usize> = run
            .steps
            .iter()
            .enumerate()
            .filter(|(_, s)| s.found.is_some())
            .map(|(i, _)| i)
            .collect();
        prop_assert!(found_steps.len() <= 1);

        let searched = run.searched_array().to_vec();
        prop_assert_eq!(searched.len(), input.len());
        for step in &run.steps {
            prop_assert_eq!(&step.array, &searched);
            prop_assert_eq!(step.target, target);
        }

        match found_steps.first() {
            Some(&i) => {
                prop_assert_eq!(i, run.len() - 1);
                let step = &run.steps[i];
                let idx = step.found.expect("found step");
                prop_assert_eq!(step.array[idx], target);
            }
            None => prop_assert!(!searched.contains(&target)),
        }
    }

    #[test]
    fn bound_based_searches_work_on_sorted_copy(
        alg in search_algorithm(),
        input in small_array(),
        target in -60i64..60,
    ) {
        let before = input.clone();
        let run = alg.run(&input, target);
        prop_assert_eq!(&input, &before);

        if alg.requires_sorted() {
            let mut sorted = input.clone();
            sorted.sort();
            prop_assert_eq!(run.searched_array(), sorted.as_slice());
        } else {
            prop_assert_eq!(run.searched_array(), input.as_slice());
        }
    }

    #[test]
    fn present_target_is_always_found(
        alg in search_algorithm(),
        input in prop::collection::vec(-50i64..50, 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = input[pick.index(input.len())];
        let run = alg.run(&input, target);
        prop_assert!(run.found_index().is_some());
    }
}
