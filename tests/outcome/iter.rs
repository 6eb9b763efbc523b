use batch_rail::Outcome;

#[test]
fn test_iter_success_yields_one() {
    let o: Outcome<i32, &str> = Outcome::success(42);
    let values: Vec<&i32> = o.iter().collect();
    assert_eq!(values, vec![&42]);
}

#[test]
fn test_iter_flagged_yields_value() {
    let o: Outcome<i32, &str> = Outcome::success_with(42, "note");
    assert_eq!(o.iter().count(), 1);
}

#[test]
fn test_iter_failure_yields_none() {
    let o: Outcome<i32, &str> = Outcome::failure("error");
    assert_eq!(o.iter().count(), 0);
}

#[test]
fn test_iter_mut_allows_mutation() {
    let mut o: Outcome<i32, &str> = Outcome::success(1);
    for value in o.iter_mut() {
        *value += 10;
    }
    assert_eq!(o.into_value(), Some(11));
}

#[test]
fn test_into_iter_owned() {
    let o: Outcome<String, &str> = Outcome::success("hello".to_string());
    let values: Vec<String> = o.into_iter().collect();
    assert_eq!(values, vec!["hello".to_string()]);
}

#[test]
fn test_into_iter_by_ref() {
    let o: Outcome<i32, &str> = Outcome::success(7);
    let mut seen = 0;
    for value in &o {
        seen += *value;
    }
    assert_eq!(seen, 7);
}

#[test]
fn test_iter_errors_failure() {
    let o: Outcome<i32, &str> = Outcome::failure("error");
    let errors: Vec<&&str> = o.iter_errors().collect();
    assert_eq!(errors, vec![&"error"]);
}

#[test]
fn test_iter_errors_flagged() {
    let o: Outcome<i32, &str> = Outcome::success_with(1, "note");
    assert_eq!(o.iter_errors().count(), 1);
}

#[test]
fn test_iter_errors_success_empty() {
    let o: Outcome<i32, &str> = Outcome::success(1);
    assert_eq!(o.iter_errors().count(), 0);
}
