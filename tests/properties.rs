// Property tests: every generated trace passes verification for any input

use proptest::prelude::*;
use sortty::algorithms::Algorithm;
use sortty::model::{is_sorted, Element};

fn values() -> impl Strategy<Value = Vec<i64>> {
    // A narrow value range makes duplicates common
    prop::collection::vec(-20i64..20, 0..24)
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn trace_verifies(algorithm in algorithm(), values in values()) {
        let trace = algorithm.generate(&Element::from_values(&values)).unwrap();
        prop_assert!(trace.verify().is_ok(), "{:?}", trace.verify());
    }

    #[test]
    fn final_step_is_sorted_permutation(algorithm in algorithm(), values in values()) {
        let trace = algorithm.generate(&Element::from_values(&values)).unwrap();
        let last = trace.last().unwrap();

        prop_assert!(is_sorted(&last.data));
        let mut expected = values.clone();
        expected.sort_unstable();
        let actual: Vec<i64> = last.data.iter().map(|e| e.value).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn stable_algorithms_keep_equal_values_in_input_order(values in values()) {
        for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_stable()) {
            let trace = algorithm.generate(&Element::from_values(&values)).unwrap();
            let last = trace.last().unwrap();
            for pair in last.data.windows(2) {
                if pair[0].value == pair[1].value {
                    // ids are assigned in input order
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }

    #[test]
    fn steps_never_lose_or_duplicate_ids(algorithm in algorithm(), values in values()) {
        let input = Element::from_values(&values);
        let trace = algorithm.generate(&input).unwrap();
        for step in trace.steps() {
            let mut ids: Vec<usize> = step.data.iter().map(|e| e.id).collect();
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..input.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn custom_ids_survive(values in values(), offset in 100usize..1000) {
        let input: Vec<Element> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Element::new(offset + i * 7, v))
            .collect();
        for algorithm in Algorithm::ALL {
            let trace = algorithm.generate(&input).unwrap();
            prop_assert!(trace.verify().is_ok());
        }
    }
}
