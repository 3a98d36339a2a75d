use dollarwords::{DollarAmount, spell_dollars_and_cents, to_english};
use rand::Rng;

const SAMPLES: usize = 2_000;

fn units_group_text(n: i128) -> String {
    to_english(n % 1000).unwrap()
}

#[test]
fn test_negation_prefixes_negative() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let n = i128::from(rng.gen_range(1..=i64::MAX));
        let positive = to_english(n).unwrap();
        assert!(!positive.starts_with("negative"), "{n} -> {positive}");
        assert_eq!(to_english(-n).unwrap(), format!("negative {positive}"));
    }
}

#[test]
fn test_ones_and_teens_match_word_list() {
    let expected = [
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
        "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
        "nineteen",
    ];
    for (n, word) in (1..=19).zip(expected) {
        assert_eq!(to_english(n).unwrap(), word, "spelling {n}");
    }
}

#[test]
fn test_hyphen_only_between_tens_and_ones() {
    for n in 20..=99 {
        let words = to_english(n).unwrap();
        assert_eq!(words.contains('-'), n % 10 != 0, "{n} -> {words}");
    }
}

#[test]
fn test_small_units_group_joined_with_and() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let higher = i128::from(rng.gen_range(1..1_000_000_000_000_i64));
        let units = i128::from(rng.gen_range(1..100_i64));
        let n = higher * 1000 + units;
        let words = to_english(n).unwrap();
        let expected_tail = format!(" and {}", units_group_text(n));
        assert!(words.ends_with(&expected_tail), "{n} -> {words}");
    }
}

#[test]
fn test_large_units_group_joined_with_comma() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let higher = i128::from(rng.gen_range(1..1_000_000_000_000_i64));
        let units = i128::from(rng.gen_range(100..1000_i64));
        let n = higher * 1000 + units;
        let words = to_english(n).unwrap();
        let expected_tail = format!(", {}", units_group_text(n));
        assert!(words.ends_with(&expected_tail), "{n} -> {words}");
    }
}

#[test]
fn test_whole_dollars_never_mention_cents() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let n = rng.gen_range(i64::MIN + 1..=i64::MAX);
        let words = spell_dollars_and_cents(DollarAmount::from(n)).unwrap();
        assert!(!words.contains("cent"), "{n} -> {words}");
        assert!(words.ends_with("dollars") || words.ends_with("dollar"));
    }
}
