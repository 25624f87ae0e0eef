use throwless::{partition, Outcome};

#[test]
fn iterators_yield_only_success_values() {
    let mut ok = Outcome::<i32, &str>::success(3);
    if let Some(value) = ok.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(ok.iter().collect::<Vec<_>>(), vec![&4]);
    assert_eq!(ok.into_iter().collect::<Vec<_>>(), vec![4]);

    let err = Outcome::<i32, &str>::failure("e");
    assert_eq!(err.iter().count(), 0);
    assert_eq!((&err).into_iter().count(), 0);
}

#[test]
fn collecting_stops_at_first_failure() {
    let mut pulled = 0;
    let collected: Outcome<Vec<i32>, &str> = vec![
        Outcome::success(1),
        Outcome::failure("first"),
        Outcome::failure("second"),
    ]
    .into_iter()
    .inspect(|_| pulled += 1)
    .collect();

    assert_eq!(collected, Outcome::Failure("first"));
    assert_eq!(pulled, 2);
}

#[test]
fn collecting_all_successes_builds_collection() {
    let collected: Outcome<String, ()> = ["a", "b", "c"]
        .into_iter()
        .map(Outcome::success)
        .collect();
    assert_eq!(collected.unwrap(), "abc");
}

#[test]
fn partition_keeps_every_error() {
    let (values, errors) = partition(vec![
        Outcome::success(1),
        Outcome::failure("err1"),
        Outcome::success(2),
        Outcome::failure("err2"),
    ]);

    assert_eq!(values, vec![1, 2]);
    assert_eq!(errors.into_vec(), vec!["err1", "err2"]);
}

#[test]
fn into_success_and_into_failure_extract_one_side() {
    assert_eq!(Outcome::<i32, &str>::success(1).into_success(), Some(1));
    assert_eq!(Outcome::<i32, &str>::success(1).into_failure(), None);
    assert_eq!(Outcome::<i32, &str>::failure("e").into_failure(), Some("e"));
    assert_eq!(Outcome::<i32, &str>::failure("e").as_ref(), Outcome::Failure(&"e"));
}

#[cfg(feature = "serde")]
#[test]
fn partitioned_errors_serialize_as_a_json_array() {
    let (_, errors) = partition(vec![
        Outcome::<i32, String>::failure("first".to_string()),
        Outcome::success(1),
        Outcome::failure("second".to_string()),
    ]);

    let json = serde_json::to_string(&errors).unwrap();
    assert_eq!(json, r#"["first","second"]"#);

    let back: throwless::ErrorVec<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, errors);
}
