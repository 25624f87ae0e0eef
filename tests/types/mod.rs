use throwless::UnwrapError;

#[test]
fn factories_use_fixed_context_phrases() {
    assert_eq!(
        UnwrapError::unwrap_on_failure::<Option<String>>().message(),
        "Called unwrap on a Failure value: core::option::Option<alloc::string::String>"
    );
    assert_eq!(
        UnwrapError::unwrap_err_on_success::<Vec<u8>>().message(),
        "Called unwrap_err on a Success value: alloc::vec::Vec<u8>"
    );
}

#[test]
fn expect_factories_use_caller_message() {
    assert_eq!(UnwrapError::expect::<bool>("flag").message(), "flag: bool");
    assert_eq!(UnwrapError::expect_err::<str>("text").message(), "text: str");
}

#[test]
fn display_matches_message() {
    let err = UnwrapError::new("custom");
    assert_eq!(format!("{}", err), "custom");
    assert_eq!(err.clone(), err);
}
