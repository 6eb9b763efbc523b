use batch_rail::Cardinality;

#[test]
fn test_cardinality_from_empty_vec() {
    let c = Cardinality::<i32>::from_vec(vec![]);
    assert_eq!(c, Cardinality::Empty);
    assert!(c.is_empty());
    assert_eq!(c.len(), 0);
}

#[test]
fn test_cardinality_from_single_vec() {
    let c = Cardinality::from_vec(vec![7]);
    assert_eq!(c, Cardinality::Single(7));
    assert_eq!(c.len(), 1);
}

#[test]
fn test_cardinality_from_multiple_vec() {
    let c = Cardinality::from_vec(vec![1, 2, 3]);
    assert_eq!(c, Cardinality::Multiple(vec![1, 2, 3]));
    assert_eq!(c.len(), 3);
}

#[test]
fn test_cardinality_from_iterator() {
    let c: Cardinality<i32> = (0..2).collect();
    assert_eq!(c, Cardinality::Multiple(vec![0, 1]));
}

#[test]
fn test_cardinality_from_vec_impl() {
    let c: Cardinality<&str> = vec!["only"].into();
    assert_eq!(c, Cardinality::Single("only"));
}

#[test]
fn test_cardinality_into_vec_round_trips() {
    assert_eq!(Cardinality::<i32>::Empty.into_vec(), Vec::<i32>::new());
    assert_eq!(Cardinality::Single(7).into_vec(), vec![7]);
    assert_eq!(Cardinality::from_vec(vec![1, 2]).into_vec(), vec![1, 2]);
}

#[test]
fn test_cardinality_pattern_dispatch() {
    let description = match Cardinality::from_vec(vec![1, 2]) {
        Cardinality::Empty => "empty",
        Cardinality::Single(_) => "single",
        Cardinality::Multiple(_) => "multiple",
    };
    assert_eq!(description, "multiple");
}
