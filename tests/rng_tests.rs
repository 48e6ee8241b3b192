//! RNG tests для blackjack-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие порядка башмака
//! - сохранение состава при shuffle()
//! - отсутствие повторяющихся карт после перетасовки

use std::collections::HashSet;

use blackjack_engine::domain::{Rank, Shoe, Suit};
use blackjack_engine::engine::RandomSource;
use blackjack_engine::infra::{DeterministicRng, SystemRng};

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "одинаковый seed обязан давать одинаковую перетасовку");
}

//
// TEST 2 — different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seed_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(1);
    let mut r2 = DeterministicRng::from_seed(2);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    // Теоретически могут совпасть, практически — нет (52! перестановок).
    assert_ne!(a, b, "разные seed дали одинаковую перетасовку");
}

//
// TEST 3 — shuffle keeps the multiset of elements
//
#[test]
fn shuffle_preserves_elements() {
    let mut rng = DeterministicRng::from_seed(7);
    let mut v: Vec<u32> = (0..52).collect();
    rng.shuffle(&mut v);

    let mut sorted = v.clone();
    sorted.sort_unstable();
    let expected: Vec<u32> = (0..52).collect();
    assert_eq!(sorted, expected, "shuffle потерял или продублировал элементы");
}

//
// TEST 4 — empty slice does not panic
//
#[test]
fn shuffle_empty_slice_is_fine() {
    let mut rng = DeterministicRng::from_seed(0);
    let mut empty: Vec<u32> = Vec::new();
    rng.shuffle(&mut empty);
    assert!(empty.is_empty());

    let mut sys = SystemRng::default();
    sys.shuffle(&mut empty);
    assert!(empty.is_empty());
}

//
// TEST 5 — shoe + DeterministicRng: воспроизводимая раздача
//
#[test]
fn shoe_shuffle_is_reproducible() {
    let mut r1 = DeterministicRng::from_seed(42);
    let mut r2 = DeterministicRng::from_seed(42);

    let mut s1 = Shoe::standard_52();
    let mut s2 = Shoe::standard_52();
    r1.shuffle(&mut s1.cards);
    r2.shuffle(&mut s2.cards);

    assert_eq!(s1, s2, "один seed — один порядок башмака");
}

//
// TEST 6 — перетасованный башмак остаётся набором из 52 уникальных карт
//
#[test]
fn shuffled_shoe_still_has_52_distinct_cards() {
    let mut shoe = Shoe::standard_52();

    let mut sys = SystemRng::default();
    sys.shuffle(&mut shoe.cards);

    assert_eq!(shoe.len(), 52);
    let identities: HashSet<(Rank, Suit)> = shoe.cards.iter().map(|c| (c.rank, c.suit)).collect();
    assert_eq!(identities.len(), 52);
}
