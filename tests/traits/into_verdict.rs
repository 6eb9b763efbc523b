use batch_rail::{IntoVerdict, Outcome, Verdict};

#[test]
fn test_option_into_verdict() {
    let v: Verdict<i32, ()> = Some(1).into_verdict();
    assert_eq!(v, Verdict::Pass(1));

    let v: Verdict<i32, ()> = None.into_verdict();
    assert_eq!(v, Verdict::Discard);
}

#[test]
fn test_result_into_verdict() {
    let v: Verdict<i32, &str> = Ok(1).into_verdict();
    assert_eq!(v, Verdict::Pass(1));

    let v: Verdict<i32, &str> = Err("error").into_verdict();
    assert_eq!(v, Verdict::Fail("error"));
}

#[test]
fn test_outcome_into_verdict_via_trait() {
    let outcome: Outcome<i32, &str> = Outcome::success_with(1, "note");
    let v: Verdict<i32, &str> = IntoVerdict::into_verdict(outcome);
    assert_eq!(v, Verdict::Flagged(1, "note"));
}

#[test]
fn test_into_verdict_inside_a_classifier() {
    let outcome = batch_rail::all_or_failed_with(["2", "z"], |raw| {
        raw.parse::<i32>().into_verdict()
    });
    assert!(outcome.is_failure());
    let failed = outcome.into_error().unwrap();
    assert_eq!(failed.indices().collect::<Vec<_>>(), [1]);
}
