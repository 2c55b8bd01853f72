use std::cmp::Ordering;

use super::*;

#[test]
fn digit_runs_sort_numerically() {
    assert_eq!(natural_sort(["a10", "a2", "a1"]), ["a1", "a2", "a10"]);
    assert_eq!(natural_sort(["2", "10", "1"]), ["1", "2", "10"]);
    assert_eq!(
        natural_sort(["layer10", "layer2", "background"]),
        ["background", "layer2", "layer10"]
    );
}

#[test]
fn already_sorted_input_is_unchanged() {
    let sorted = vec!["0", "1", "2", "10", "a", "a1", "a2", "b"];
    assert_eq!(natural_sort(sorted.clone()), sorted);
    assert_eq!(natural_sort(natural_sort(sorted.clone())), sorted);
}

#[test]
fn numerically_equal_keys_keep_input_order() {
    assert_eq!(natural_sort(["x01", "x1", "x001"]), ["x01", "x1", "x001"]);
    assert_eq!(natural_sort(["x1", "x001", "x01"]), ["x1", "x001", "x01"]);
}

#[test]
fn tokenization_alternates_text_and_numbers() {
    let key = NaturalKey::new("a10b");
    assert_eq!(
        key.tokens(),
        &[
            Token::Text("a".into()),
            Token::Num(DigitRun::new("10")),
            Token::Text("b".into()),
        ]
    );

    // Leading and trailing digit runs are framed by empty text.
    let key = NaturalKey::new("7");
    assert_eq!(
        key.tokens(),
        &[
            Token::Text(String::new()),
            Token::Num(DigitRun::new("7")),
            Token::Text(String::new()),
        ]
    );

    assert_eq!(NaturalKey::new("").tokens(), &[Token::Text(String::new())]);
}

#[test]
fn digit_and_letter_prefixes_compare_through_leading_text() {
    // "1" tokenizes as ["", 1, ""], "a" as ["a"]: the empty text wins.
    assert_eq!(natural_cmp("1", "a"), Ordering::Less);
    assert_eq!(natural_sort(["b", "1", "a", "0"]), ["0", "1", "a", "b"]);
}

#[test]
fn cross_kind_tokens_order_numbers_first() {
    let num = Token::Num(DigitRun::new("999"));
    let text = Token::Text(String::new());
    assert!(num < text);
}

#[test]
fn prefix_key_sorts_first() {
    assert_eq!(natural_cmp("a", "a1"), Ordering::Less);
    assert_eq!(natural_cmp("a1", "a1b"), Ordering::Less);
}

#[test]
fn huge_digit_runs_do_not_overflow() {
    let big = "9".repeat(40);
    let bigger = format!("1{}", "0".repeat(40));
    assert_eq!(natural_cmp(&big, &bigger), Ordering::Less);
    assert_eq!(natural_cmp("0000", "0"), Ordering::Equal);
}

#[test]
fn text_compares_by_code_point() {
    assert_eq!(natural_sort(["b", "B", "a"]), ["B", "a", "b"]);
    assert_eq!(natural_cmp("é1", "z1"), Ordering::Greater);
}
