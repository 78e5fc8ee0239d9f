use super::*;

#[test]
fn union_collapses_both_tags() {
    assert_eq!(Either::<i32, i32>::Left(3).union(), 3);
    assert_eq!(Either::<i32, i32>::Right(4).union(), 4);
}

#[test]
fn projections_follow_the_tag() {
    let l: Either<&str, u8> = Either::Left("a");
    assert!(l.is_left());
    assert!(!l.is_right());
    assert_eq!(l.left(), Some("a"));
    assert_eq!(l.right(), None);

    let r: Either<&str, u8> = Either::Right(9);
    assert_eq!(r.left(), None);
    assert_eq!(r.right(), Some(9));
}

#[test]
fn maps_only_touch_their_side() {
    let l: Either<i32, i32> = Either::Left(2);
    assert_eq!(l.map_left(|v| v * 10), Either::Left(20));
    assert_eq!(l.map_right(|v| v * 10), Either::Left(2));
    assert_eq!(l.flip(), Either::Right(2));
    assert_eq!(l.either(|v| v + 1, |v| v - 1), 3);
}

#[test]
fn serializes_with_snake_case_tags() {
    let v: Either<&str, u8> = Either::Left("a");
    assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"left":"a"}"#);
    let back: Either<String, u8> = serde_json::from_str(r#"{"right":7}"#).unwrap();
    assert_eq!(back, Either::Right(7));
}
