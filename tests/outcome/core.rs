use batch_rail::{Outcome, Verdict};

#[test]
fn test_outcome_success() {
    let o: Outcome<i32, &str> = Outcome::success(42);
    assert!(o.is_success());
    assert!(!o.is_failure());
    assert!(!o.has_error());
    assert_eq!(o.into_value(), Some(42));
}

#[test]
fn test_outcome_failure() {
    let o: Outcome<i32, &str> = Outcome::failure("error");
    assert!(!o.is_success());
    assert!(o.is_failure());
    assert!(o.has_error());
    assert_eq!(o.into_error(), Some("error"));
}

#[test]
fn test_outcome_success_with_is_both() {
    let o: Outcome<i32, &str> = Outcome::success_with(42, "diagnostic");
    assert!(o.is_success());
    assert!(!o.is_failure());
    assert!(o.has_error());
    assert_eq!(o.value(), Some(&42));
    assert_eq!(o.error(), Some(&"diagnostic"));
}

#[test]
fn test_outcome_from_parts_success() {
    let o: Outcome<i32, String> = Outcome::from_parts(true, 7, None);
    assert_eq!(o, Outcome::Success(7));
}

#[test]
fn test_outcome_from_parts_success_with_error() {
    let o: Outcome<i32, String> = Outcome::from_parts(true, 7, Some("odd".to_string()));
    assert_eq!(o, Outcome::Flagged(7, "odd".to_string()));
}

#[test]
fn test_outcome_from_parts_failure() {
    let o: Outcome<i32, String> = Outcome::from_parts(false, 0, Some("bad".to_string()));
    assert_eq!(o, Outcome::Failure("bad".to_string()));
}

#[test]
fn test_outcome_from_parts_failure_default_error() {
    let o: Outcome<i32, String> = Outcome::from_parts(false, 0, None);
    assert_eq!(o, Outcome::Failure(String::new()));
}

#[test]
fn test_outcome_map_success() {
    let o: Outcome<i32, &str> = Outcome::success(21);
    assert_eq!(o.map(|n| n * 2).into_value(), Some(42));
}

#[test]
fn test_outcome_map_preserves_diagnostic() {
    let o: Outcome<i32, &str> = Outcome::success_with(21, "note");
    let mapped = o.map(|n| n * 2);
    assert_eq!(mapped, Outcome::Flagged(42, "note"));
}

#[test]
fn test_outcome_map_failure() {
    let o: Outcome<i32, &str> = Outcome::failure("error");
    assert!(o.map(|n| n * 2).is_failure());
}

#[test]
fn test_outcome_map_err_on_failure() {
    let o: Outcome<i32, &str> = Outcome::failure("error");
    assert_eq!(o.map_err(|e| e.len()).into_error(), Some(5));
}

#[test]
fn test_outcome_map_err_on_flagged() {
    let o: Outcome<i32, &str> = Outcome::success_with(1, "abc");
    let mapped = o.map_err(|e| e.len());
    assert_eq!(mapped, Outcome::Flagged(1, 3));
}

#[test]
fn test_outcome_and_then_success() {
    let o: Outcome<i32, &str> = Outcome::success(4);
    let chained = o.and_then(|n| Outcome::success(n + 1));
    assert_eq!(chained.into_value(), Some(5));
}

#[test]
fn test_outcome_and_then_failure_short_circuits() {
    let o: Outcome<i32, &str> = Outcome::failure("error");
    let chained = o.and_then(|n| Outcome::success(n + 1));
    assert_eq!(chained, Outcome::Failure("error"));
}

#[test]
fn test_outcome_and_then_keeps_diagnostic() {
    let o: Outcome<i32, &str> = Outcome::success_with(4, "note");
    let chained = o.and_then(|n| Outcome::success(n + 1));
    assert_eq!(chained, Outcome::Flagged(5, "note"));
}

#[test]
fn test_outcome_and_then_replaces_diagnostic() {
    let o: Outcome<i32, &str> = Outcome::success_with(4, "first");
    let chained = o.and_then(|n| Outcome::success_with(n + 1, "second"));
    assert_eq!(chained, Outcome::Flagged(5, "second"));
}

#[test]
fn test_outcome_or_else_success_untouched() {
    let o: Outcome<i32, &str> = Outcome::success(42);
    let recovered = o.or_else(|_| Outcome::success(0));
    assert_eq!(recovered.into_value(), Some(42));
}

#[test]
fn test_outcome_or_else_recovers_failure() {
    let o: Outcome<i32, &str> = Outcome::failure("error");
    let recovered = o.or_else(|_| Outcome::success(0));
    assert_eq!(recovered.into_value(), Some(0));
}

#[test]
fn test_outcome_result_conversions() {
    assert_eq!(
        Outcome::from_result(Ok::<_, &str>(1)),
        Outcome::Success(1)
    );
    assert_eq!(
        Outcome::from_result(Err::<i32, _>("e")),
        Outcome::Failure("e")
    );
    assert_eq!(Outcome::<_, &str>::success(1).into_result(), Ok(1));
    assert_eq!(Outcome::<i32, _>::failure("e").into_result(), Err("e"));
}

#[test]
fn test_outcome_into_result_drops_diagnostic() {
    let o: Outcome<i32, &str> = Outcome::success_with(1, "note");
    assert_eq!(o.into_result(), Ok(1));
}

#[test]
fn test_outcome_from_option() {
    assert_eq!(
        Outcome::from_option(Some(1), "absent"),
        Outcome::Success(1)
    );
    assert_eq!(
        Outcome::from_option(None::<i32>, "absent"),
        Outcome::Failure("absent")
    );
}

#[test]
fn test_outcome_verdict_round_trip_is_exact() {
    let outcomes: Vec<Outcome<i32, String>> = vec![
        Outcome::success(1),
        Outcome::success_with(2, "note".to_string()),
        Outcome::failure("bad".to_string()),
    ];

    for original in outcomes {
        let round_tripped = original.clone().into_verdict().into_outcome();
        assert_eq!(round_tripped, original);
    }
}

#[test]
fn test_outcome_into_verdict_mapping() {
    assert_eq!(
        Outcome::<_, &str>::success(1).into_verdict(),
        Verdict::Pass(1)
    );
    assert_eq!(
        Outcome::success_with(1, "e").into_verdict(),
        Verdict::Flagged(1, "e")
    );
    assert_eq!(
        Outcome::<i32, _>::failure("e").into_verdict(),
        Verdict::Fail("e")
    );
}

#[test]
fn test_outcome_value_mut() {
    let mut o: Outcome<i32, &str> = Outcome::success(1);
    if let Some(value) = o.value_mut() {
        *value = 2;
    }
    assert_eq!(o.into_value(), Some(2));
}

#[test]
#[cfg(feature = "serde")]
fn test_outcome_serde_round_trip() {
    let outcomes: Vec<Outcome<i32, String>> = vec![
        Outcome::success(1),
        Outcome::success_with(2, "note".to_string()),
        Outcome::failure("bad".to_string()),
    ];

    for original in outcomes {
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: Outcome<i32, String> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, original);
    }
}
