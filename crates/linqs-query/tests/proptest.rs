//! Property tests: query results against hand-written iterator equivalents.

use linqs_query::{Number, Op, Query, Value};
use proptest::collection::vec;
use proptest::prelude::*;

fn num<'a>(n: &'a i64, _field: &str) -> Value<'a> {
    Value::Number(Number::I64(*n))
}

fn float<'a>(f: &'a f64, _field: &str) -> Value<'a> {
    Value::Number(Number::F64(*f))
}

#[derive(Debug, Clone, PartialEq)]
struct Pupil {
    age: i64,
    surname: String,
}

fn pupil<'a>(p: &'a Pupil, field: &str) -> Value<'a> {
    match field {
        "age" => Value::Number(Number::I64(p.age)),
        "surname" => Value::String(&p.surname),
        _ => Value::None,
    }
}

fn pupils(max: usize) -> impl Strategy<Value = Vec<Pupil>> {
    vec(
        (15i64..30, "[a-c]{1,4}").prop_map(|(age, surname)| Pupil { age, surname }),
        0..max,
    )
}

/// Index of each result in `items`, compared by address.
fn source_indices<T>(items: &[T], results: &[&T]) -> Vec<usize> {
    results
        .iter()
        .map(|r| {
            items
                .iter()
                .position(|x| std::ptr::eq(x, *r))
                .expect("result borrowed from input")
        })
        .collect()
}

proptest! {
    #[test]
    fn unordered_filter_matches_iterator_filter(
        items in vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
    ) {
        let results = Query::new().and("n", Op::Gt, threshold).filter(&items, num);
        let by_hand: Vec<&i64> = items.iter().filter(|n| **n > threshold).collect();
        prop_assert_eq!(&results, &by_hand);

        let indices = source_indices(&items, &results);
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn refiltering_changes_nothing(items in pupils(60), divisor in 1i64..10) {
        let query = Query::new()
            .and_divisible_by("age", divisor)
            .and_contains("surname", "a")
            .build();

        let once = query.filter_cloned(&items, pupil);
        prop_assert_eq!(query.filter_cloned(&once, pupil), once);
    }

    #[test]
    fn sort_keeps_ties_in_input_order(items in pupils(60), descending in any::<bool>()) {
        let base = Query::new();
        let query = if descending { base.order_desc("age") } else { base.order_asc("age") }.build();

        let sorted = query.filter(&items, pupil);
        prop_assert_eq!(sorted.len(), items.len());

        let indices = source_indices(&items, &sorted);
        for (pair, idx) in sorted.windows(2).zip(indices.windows(2)) {
            let (a, b) = (pair[0].age, pair[1].age);
            if a == b {
                prop_assert!(idx[0] < idx[1], "tie on {} reordered", a);
            } else {
                prop_assert_eq!(a > b, descending);
            }
        }
    }

    #[test]
    fn floats_with_nan_sort_totally(
        items in vec(prop_oneof![4 => -1.0e6f64..1.0e6, 1 => Just(f64::NAN)], 0..80),
    ) {
        let sorted = Query::new().order_asc("f").filter(&items, float);
        let nans = items.iter().filter(|f| f.is_nan()).count();

        prop_assert_eq!(sorted.len(), items.len());
        let (finite, tail) = sorted.split_at(items.len() - nans);
        prop_assert!(finite.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(tail.iter().all(|f| f.is_nan()));
    }

    #[test]
    fn secondary_key_breaks_ties(items in pupils(40)) {
        let sorted = Query::new()
            .order_asc("age")
            .order_desc("surname")
            .filter(&items, pupil);

        let mut by_hand: Vec<&Pupil> = items.iter().collect();
        by_hand.sort_by(|a, b| a.age.cmp(&b.age).then_with(|| b.surname.cmp(&a.surname)));
        prop_assert_eq!(sorted, by_hand);
    }

    #[test]
    fn impossible_prefix_finds_nothing(items in pupils(60)) {
        let query = Query::new().and_startswith("surname", "z").build();
        prop_assert!(query.filter(&items, pupil).is_empty());
        prop_assert_eq!(query.count(&items, pupil), 0);
        prop_assert!(!query.any(&items, pupil));
    }

    #[test]
    fn shortcut_methods_follow_filter(
        items in vec(-2000i64..2000, 0..60),
        low in -1000i64..1000,
        width in 0i64..500,
    ) {
        let high = low + width;
        let query = Query::new().and_between("n", low..=high).build();
        let kept = query.filter(&items, num);

        prop_assert!(kept.iter().all(|n| (low..=high).contains(*n)));
        prop_assert_eq!(query.count(&items, num), kept.len());
        prop_assert_eq!(query.any(&items, num), !kept.is_empty());
        prop_assert_eq!(query.all(&items, num), kept.len() == items.len());
        prop_assert_eq!(query.find(&items, num), kept.first().copied());
        prop_assert_eq!(
            query.position(&items, num),
            items.iter().position(|n| (low..=high).contains(n))
        );
    }

    #[test]
    fn even_and_odd_split_everything(items in vec(-10_000i64..10_000, 0..80)) {
        let evens = Query::new().and_divisible_by("n", 2i64).filter(&items, num);
        let odds = Query::new().not_divisible_by("n", 2i64).filter(&items, num);

        prop_assert_eq!(evens.len() + odds.len(), items.len());
        prop_assert!(evens.iter().all(|n| *n % 2 == 0));
        prop_assert!(odds.iter().all(|n| *n % 2 != 0));
    }

    #[test]
    fn paging_is_skip_then_take(
        items in vec(any::<i64>(), 0..100),
        offset in 0usize..50,
        limit in 0usize..50,
    ) {
        let page = Query::new().offset(offset).limit(limit).filter(&items, num);
        let by_hand: Vec<&i64> = items.iter().skip(offset).take(limit).collect();
        prop_assert_eq!(page, by_hand);
    }
}

#[test]
fn nothing_in_nothing_out() {
    let none: [i64; 0] = [];
    let query = Query::new().and("n", Op::Eq, 42i64).build();

    assert!(query.filter(&none, num).is_empty());
    assert_eq!(query.count(&none, num), 0);
    assert!(!query.any(&none, num));
    assert!(query.all(&none, num));
    assert_eq!(query.find(&none, num), None);
    assert_eq!(query.position(&none, num), None);
}

#[test]
fn zero_limit_is_empty() {
    assert!(Query::new().limit(0).filter(&[1i64, 2, 3], num).is_empty());
}
