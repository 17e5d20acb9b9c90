//! Integration tests for the comprehend! macro.
//!
//! Covers projection over independent sources, dependent sources, and the
//! left-to-right short-circuit contract.

use lambdakit::comprehend;
use lambdakit::control::{Fallible, Maybe, Outcome};
use rstest::rstest;
use std::cell::RefCell;

/// Records the order in which sources are produced.
struct SourceLog {
    produced: RefCell<Vec<&'static str>>,
}

impl SourceLog {
    fn new() -> Self {
        Self {
            produced: RefCell::new(Vec::new()),
        }
    }

    fn outcome(&self, name: &'static str, value: Outcome<i32>) -> Outcome<i32> {
        self.produced.borrow_mut().push(name);
        value
    }

    fn produced(&self) -> Vec<&'static str> {
        self.produced.borrow().clone()
    }
}

#[rstest]
fn failure_in_middle_stops_later_sources() {
    let log = &SourceLog::new();

    let result = comprehend! {
        a <= log.outcome("A", Outcome::success(1));
        b <= log.outcome("B", Outcome::failure("X").unwrap());
        c <= log.outcome("C", Outcome::success(3));
        yield a + b + c
    };

    assert_eq!(result, Outcome::failure("X").unwrap());
    assert_eq!(log.produced(), vec!["A", "B"]);
}

#[rstest]
fn all_successes_evaluate_in_order() {
    let log = &SourceLog::new();

    let result = comprehend! {
        a <= log.outcome("A", Outcome::success(1));
        b <= log.outcome("B", Outcome::success(2));
        c <= log.outcome("C", Outcome::success(3));
        yield a + b + c
    };

    assert_eq!(result, Outcome::success(6));
    assert_eq!(log.produced(), vec!["A", "B", "C"]);
}

#[rstest]
fn first_failure_wins_over_later_failures() {
    let result: Fallible<i32, &str> = comprehend! {
        a <= Fallible::<i32, &str>::failure("first");
        b <= Fallible::<i32, &str>::failure("second");
        yield a + b
    };
    assert_eq!(result, Fallible::failure("first"));
}

#[rstest]
#[case(Maybe::some(2), Maybe::some(3), Maybe::some(5))]
#[case(Maybe::none(), Maybe::some(3), Maybe::none())]
#[case(Maybe::some(2), Maybe::none(), Maybe::none())]
fn two_sources_with_projection(
    #[case] first: Maybe<i32>,
    #[case] second: Maybe<i32>,
    #[case] expected: Maybe<i32>,
) {
    let result = comprehend! {
        a <= first;
        b <= second;
        yield a + b
    };
    assert_eq!(result, expected);
}

#[rstest]
fn dependent_source_uses_earlier_binding() {
    let divide = |numerator: i32, denominator: i32| {
        if denominator == 0 {
            Outcome::failure("division by zero").unwrap()
        } else {
            Outcome::success(numerator / denominator)
        }
    };

    let result = comprehend! {
        n <= Outcome::success(100);
        d <= Outcome::success(5);
        q <= divide(n, d);
        yield q + 1
    };
    assert_eq!(result, Outcome::success(21));

    let result = comprehend! {
        n <= Outcome::success(100);
        d <= Outcome::success(0);
        q <= divide(n, d);
        yield q + 1
    };
    assert_eq!(result.to_string(), "Failure: division by zero");
}

#[rstest]
fn tuple_and_wildcard_patterns() {
    let result = comprehend! {
        (name, age) <= Maybe::some(("ada", 36));
        _ <= Maybe::some(());
        let label = format!("{name} ({age})");
        yield label
    };
    assert_eq!(result, Maybe::some("ada (36)".to_string()));
}

#[rstest]
fn comprehension_matches_select_many() {
    let first = Outcome::success(4);
    let via_macro = comprehend! {
        a <= first.clone();
        b <= Outcome::success(a * 10);
        yield (a, b)
    };
    let via_method = first.select_many(|a| Outcome::success(a * 10), |a, b| (a, b));
    assert_eq!(via_macro, via_method);
}
