// Host-side tests for tagline selection and CSS quoting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod tagline {
    include!("../src/core/tagline.rs");
}
mod taglines {
    include!("../src/taglines.rs");
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tagline::*;
use taglines::TAGLINES;

#[test]
fn picks_are_roughly_uniform() {
    let list = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
    let mut rng = StdRng::seed_from_u64(7);
    let mut counts = [0usize; 10];
    let trials = 100_000;
    for _ in 0..trials {
        let (i, s) = pick(&list, &mut rng).unwrap();
        assert_eq!(s, list[i]);
        counts[i] += 1;
    }
    let expected = trials / list.len();
    for (i, c) in counts.iter().enumerate() {
        // ~95 standard deviation per bucket; allow 10%
        assert!(
            c.abs_diff(expected) < expected / 10,
            "index {i} drawn {c} times, expected ~{expected}"
        );
    }
}

#[test]
fn pick_returns_exact_list_entries() {
    let mut rng = StdRng::seed_from_u64(42);
    let all: HashSet<&str> = TAGLINES.iter().copied().collect();
    for _ in 0..1000 {
        let (i, s) = pick(TAGLINES, &mut rng).unwrap();
        assert!(i < TAGLINES.len());
        assert!(std::ptr::eq(s, TAGLINES[i]));
        assert!(all.contains(s));
    }
}

#[test]
fn same_seed_same_tagline() {
    let a: Vec<_> = {
        let mut rng = StdRng::seed_from_u64(2024);
        (0..20).map(|_| pick(TAGLINES, &mut rng).unwrap().0).collect()
    };
    let b: Vec<_> = {
        let mut rng = StdRng::seed_from_u64(2024);
        (0..20).map(|_| pick(TAGLINES, &mut rng).unwrap().0).collect()
    };
    assert_eq!(a, b);
}

#[test]
fn empty_list_yields_none() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(pick(&[], &mut rng), None);
}

#[test]
fn taglines_are_unique_and_nonempty() {
    assert!(!TAGLINES.is_empty());
    let unique: HashSet<&str> = TAGLINES.iter().copied().collect();
    assert_eq!(unique.len(), TAGLINES.len());
    assert!(TAGLINES.iter().all(|t| !t.trim().is_empty()));
}

#[test]
fn css_string_quotes_and_escapes() {
    assert_eq!(css_string("Mostly harmless."), "\"Mostly harmless.\"");
    assert_eq!(css_string(r#"say "hi""#), r#""say \"hi\"""#);
    assert_eq!(css_string(r"back\slash"), r#""back\\slash""#);
    assert_eq!(css_string("two\nlines"), "\"two\\a lines\"");
    assert_eq!(css_string(""), "\"\"");
}

#[test]
fn seed_attribute_parsing() {
    assert_eq!(parse_seed(Some("42")), Some(42));
    assert_eq!(parse_seed(Some(" 7 ")), Some(7));
    assert_eq!(parse_seed(Some("seven")), None);
    assert_eq!(parse_seed(Some("-1")), None);
    assert_eq!(parse_seed(None), None);
}
