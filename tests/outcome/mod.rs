use std::cell::Cell;

use throwless::Outcome;

pub mod iter;

#[derive(Debug, Clone, PartialEq)]
struct ValidationError {
    message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[test]
fn variant_predicates_are_exclusive() {
    let ok = Outcome::<i32, &str>::success(1);
    assert!(ok.is_success());
    assert!(!ok.is_failure());

    let err = Outcome::<i32, &str>::failure("e");
    assert!(!err.is_success());
    assert!(err.is_failure());
}

#[test]
fn absent_payloads_keep_their_variant() {
    let ok: Outcome<Option<i32>, Option<&str>> = Outcome::success(None);
    assert!(ok.is_success());

    let err: Outcome<Option<i32>, Option<&str>> = Outcome::failure(None);
    assert!(err.is_failure());
    assert_eq!(err.unwrap_err(), None);
}

#[test]
fn unwrap_or_picks_value_or_default() {
    assert_eq!(Outcome::<i32, &str>::success(5).unwrap_or(9), 5);
    assert_eq!(Outcome::<i32, &str>::failure("e").unwrap_or(9), 9);
}

#[test]
fn identity_maps_preserve_payloads() {
    assert_eq!(Outcome::<i32, &str>::success(7).map(|x| x).unwrap(), 7);
    assert_eq!(
        Outcome::<i32, &str>::failure("e").map_err(|e| e).unwrap_err(),
        "e"
    );
}

#[test]
fn returning_an_outcome_from_a_transform_does_not_double_wrap() {
    let f = |x: i32| x + 1;

    let plain = Outcome::<i32, &str>::success(10).map(f);
    let chained = Outcome::<i32, &str>::success(10).and_then(|x| Outcome::success(f(x)));
    let flattened = Outcome::<i32, &str>::success(10)
        .map(|x| Outcome::success(f(x)))
        .flatten();

    assert_eq!(plain.unwrap(), 11);
    assert_eq!(chained.unwrap(), 11);
    assert_eq!(flattened.unwrap(), 11);
}

#[test]
fn flatten_surfaces_inner_failure() {
    let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::failure("inner"));
    assert_eq!(nested.flatten(), Outcome::Failure("inner"));

    let outer: Outcome<Outcome<i32, &str>, &str> = Outcome::failure("outer");
    assert_eq!(outer.flatten(), Outcome::Failure("outer"));
}

#[test]
fn failure_short_circuits_success_side_combinators() {
    let calls = Cell::new(0);
    let bump = |x: i32| {
        calls.set(calls.get() + 1);
        x
    };

    let mapped = Outcome::<i32, &str>::failure("kept").map(bump);
    let chained = Outcome::<i32, &str>::failure("kept").and_then(|x| Outcome::success(bump(x)));

    assert_eq!(mapped, Outcome::Failure("kept"));
    assert_eq!(chained, Outcome::Failure("kept"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn success_short_circuits_failure_side_combinators() {
    let calls = Cell::new(0);

    let mapped = Outcome::<i32, &str>::success(3).map_err(|e| {
        calls.set(calls.get() + 1);
        e.len()
    });
    let recovered = Outcome::<i32, &str>::success(3).or_else(|_| {
        calls.set(calls.get() + 1);
        Outcome::<i32, &str>::success(0)
    });

    assert_eq!(mapped, Outcome::Success(3));
    assert_eq!(recovered, Outcome::Success(3));
    assert_eq!(calls.get(), 0);
}

#[test]
fn or_else_can_recover_or_replace_the_error() {
    let recovered = Outcome::<&str, &str>::failure("e")
        .or_else(|_| Outcome::<_, &str>::success("recovered"));
    assert_eq!(recovered.unwrap(), "recovered");

    let replaced = Outcome::<&str, &str>::failure("e")
        .or_else(|_| Outcome::<&str, _>::failure("handled error"));
    assert_eq!(replaced.unwrap_err(), "handled error");
}

#[test]
fn map_err_wraps_domain_errors() {
    let outcome = Outcome::<i32, ValidationError>::failure(ValidationError::new("bad input"))
        .map_err(|e| ValidationError::new(format!("wrapped: {}", e.message())));

    assert_eq!(outcome.unwrap_err().message(), "wrapped: bad input");
}

#[test]
fn and_then_chains_success_values() {
    let outcome = Outcome::<i32, &str>::success(21).and_then(|x| Outcome::success(x * 2));
    assert_eq!(outcome.unwrap(), 42);
}

#[test]
fn unwrap_or_else_returns_plain_value() {
    assert_eq!(Outcome::<i32, &str>::failure("boom").unwrap_or_else(|_| 42), 42);
    assert_eq!(Outcome::<i32, &str>::success(1).unwrap_or_else(|_| 42), 1);
}

#[test]
fn match_with_invokes_only_the_selected_branch() {
    let ok_calls = Cell::new(0);
    let err_calls = Cell::new(0);

    let ok = Outcome::<i32, &str>::success(42).match_with(
        |v| {
            ok_calls.set(ok_calls.get() + 1);
            v * 2
        },
        |_| {
            err_calls.set(err_calls.get() + 1);
            0
        },
    );
    assert_eq!(ok, 84);
    assert_eq!((ok_calls.get(), err_calls.get()), (1, 0));

    let err = Outcome::<i32, &str>::failure("e").match_with(
        |v| {
            ok_calls.set(ok_calls.get() + 1);
            v
        },
        |e| {
            err_calls.set(err_calls.get() + 1);
            e.len() as i32
        },
    );
    assert_eq!(err, 1);
    assert_eq!((ok_calls.get(), err_calls.get()), (1, 1));
}

#[test]
fn non_swallowing_combinators_propagate_callback_panics() {
    let caught = std::panic::catch_unwind(|| {
        Outcome::<i32, &str>::success(1).map(|_| -> i32 { panic!("map callback") })
    });
    assert!(caught.is_err());

    let caught = std::panic::catch_unwind(|| {
        Outcome::<i32, &str>::failure("e").unwrap_or_else(|_| -> i32 { panic!("fallback") })
    });
    assert!(caught.is_err());
}

#[test]
fn std_result_round_trips_through_from() {
    let outcome: Outcome<i32, &str> = Ok(3).into();
    assert_eq!(outcome, Outcome::Success(3));

    let result: Result<i32, &str> = Outcome::failure("e").into();
    assert_eq!(result, Err("e"));
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_externally_tagged_variants() {
    let ok = Outcome::<i32, String>::success(1);
    let json = serde_json::to_string(&ok).unwrap();
    assert_eq!(json, r#"{"Success":1}"#);

    let back: Outcome<i32, String> = serde_json::from_str(r#"{"Failure":"bad"}"#).unwrap();
    assert_eq!(back, Outcome::Failure("bad".to_string()));
}
