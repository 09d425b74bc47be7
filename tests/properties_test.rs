//! Property tests for stream and comparator laws.

use quickcheck::{quickcheck, TestResult};

use streamable::prelude::*;

fn is_even() -> Predicate<i32> {
    Predicate::new(|v: &i32| v % 2 == 0)
}

fn is_positive() -> Predicate<i32> {
    Predicate::new(|v: &i32| *v > 0)
}

// =============================================================================
// Comparator Properties
// =============================================================================

#[test]
fn prop_reversed_negates_compare() {
    fn prop(a: i32, b: i32) -> bool {
        let c = &*I32_COMPARATOR;
        let r = c.reversed();
        r.compare(&a, &b) == c.compare(&a, &b).reverse()
            && r.reversed().compare(&a, &b) == c.compare(&a, &b)
    }
    quickcheck(prop as fn(i32, i32) -> bool);
}

#[test]
fn prop_reversed_inverts_equality() {
    fn prop(a: i32, b: i32) -> bool {
        let c = &*I32_COMPARATOR;
        let r = c.reversed();
        r.equal(&a, &b) == !c.equal(&a, &b)
            && r.not_equal(&a, &b) == !r.equal(&a, &b)
            && c.not_equal(&a, &b) == (a != b)
    }
    quickcheck(prop as fn(i32, i32) -> bool);
}

#[test]
fn prop_then_only_breaks_ties() {
    fn prop(a: (u8, i32), b: (u8, i32)) -> bool {
        let primary = Comparator::by_key(|p: &(u8, i32)| p.0);
        let tie = Comparator::by_key(|p: &(u8, i32)| p.1);
        let both = primary.then(&tie);
        match primary.compare(&a, &b) {
            std::cmp::Ordering::Equal => both.compare(&a, &b) == tie.compare(&a, &b),
            ordering => both.compare(&a, &b) == ordering,
        }
    }
    quickcheck(prop as fn((u8, i32), (u8, i32)) -> bool);
}

fn by_first() -> Comparator<(u8, u8)> {
    Comparator::by_key(|p: &(u8, u8)| p.0)
}

fn by_second() -> Comparator<(u8, u8)> {
    Comparator::by_key(|p: &(u8, u8)| p.1)
}

#[test]
fn prop_fully_reversed_sort_is_exact_reverse() {
    fn prop(values: Vec<(u8, u8)>) -> bool {
        let s = of(values);
        let ascending = by_first().then(&by_second());
        let descending = by_first().reversed().then(&by_second().reversed());

        let mut forwards = s.sorted(Some(&ascending)).into_vec();
        forwards.reverse();
        let backwards = s.sorted(Some(&ascending)).sorted(Some(&descending)).into_vec();
        backwards == forwards
    }
    quickcheck(prop as fn(Vec<(u8, u8)>) -> bool);
}

#[test]
fn prop_reversed_then_keeps_tie_breaker_ascending() {
    fn prop(values: Vec<(u8, u8)>) -> bool {
        let s = of(values.clone());
        let reversed = by_first().then(&by_second()).reversed();

        let mut expected = values;
        expected.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        s.sorted(Some(&by_first().then(&by_second())))
            .sorted(Some(&reversed))
            .into_vec()
            == expected
    }
    quickcheck(prop as fn(Vec<(u8, u8)>) -> bool);
}

#[test]
fn prop_then_over_reversed_primary_keeps_equality() {
    fn prop(a: (u8, u8), b: (u8, u8)) -> bool {
        let c = by_first().reversed().then(&by_second());
        c.equal(&a, &b) == (a == b)
            && c.reversed().not_equal(&a, &b) == c.equal(&a, &b)
    }
    quickcheck(prop as fn((u8, u8), (u8, u8)) -> bool);
}

// =============================================================================
// Predicate Properties
// =============================================================================

#[test]
fn prop_negated_and_is_or_of_negations() {
    fn prop(v: i32) -> bool {
        let (p, q) = (is_even(), is_positive());
        p.and(&q).negate().test(&v) == p.negate().or(&q.negate()).test(&v)
    }
    quickcheck(prop as fn(i32) -> bool);
}

// =============================================================================
// Stream Properties
// =============================================================================

#[test]
fn prop_distinct_is_idempotent() {
    fn prop(values: Vec<i32>) -> bool {
        let once = of(values).distinct();
        once.distinct() == once
    }
    quickcheck(prop as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_filter_partitions_stream() {
    fn prop(values: Vec<i32>) -> bool {
        let s = of(values);
        let p = is_even();
        s.filter(Some(&p)).len() + s.filter(Some(&p.negate())).len() == s.len()
            && s.count(Some(&p)) == s.filter(Some(&p)).len()
    }
    quickcheck(prop as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_sorted_is_ordered_permutation() {
    fn prop(values: Vec<i32>) -> bool {
        let c = Some(&*I32_COMPARATOR);
        let sorted = of(values.clone()).sorted(c).into_vec();
        let mut expected = values;
        expected.sort();
        sorted == expected
    }
    quickcheck(prop as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_skip_and_limit_split_stream() {
    fn prop(values: Vec<i32>, n: i8) -> bool {
        let s = of(values);
        let n = isize::from(n);
        let head = s.limit(n);
        let tail = s.skip(n);
        let expected_tail = s.len() - usize::try_from(n).unwrap_or(0).min(s.len());
        tail.len() == expected_tail && head.concat(&tail) == s
    }
    quickcheck(prop as fn(Vec<i32>, i8) -> bool);
}

#[test]
fn prop_nth_match_beyond_length_is_none() {
    fn prop(values: Vec<i32>) -> bool {
        let s = of(values);
        let past = isize::try_from(s.len() + 1).unwrap_or(isize::MAX);
        s.nth_match(None, past).is_none()
            && s.nth_match(None, -past).is_none()
            && s.nth_match(None, 0).is_none()
    }
    quickcheck(prop as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_nth_match_agrees_with_first_and_last() {
    fn prop(values: Vec<i32>) -> bool {
        let s = of(values);
        let p = is_even();
        s.nth_match(Some(&p), 1) == s.first_match(Some(&p))
            && s.nth_match(Some(&p), -1) == s.last_match(Some(&p))
    }
    quickcheck(prop as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_set_operations_without_comparator_are_empty() {
    fn prop(left: Vec<i32>, right: Vec<i32>) -> bool {
        let (l, r) = (of(left), of(right));
        l.union(&r, None).is_empty()
            && l.intersection(&r, None).is_empty()
            && l.difference(&r, None).is_empty()
            && l.symmetric_difference(&r, None).is_empty()
    }
    quickcheck(prop as fn(Vec<i32>, Vec<i32>) -> bool);
}

#[test]
fn prop_union_splits_into_intersection_and_differences() {
    fn prop(left: Vec<u8>, right: Vec<u8>) -> TestResult {
        if left.len() > 64 || right.len() > 64 {
            return TestResult::discard();
        }
        let (l, r) = (of(left), of(right));
        let c = Some(&*U8_COMPARATOR);
        let union = l.union(&r, c).len();
        let parts = l.difference(&r, c).len()
            + l.intersection(&r, c).len()
            + r.difference(&l, c).len();
        TestResult::from_bool(union == parts)
    }
    quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> TestResult);
}

#[test]
fn prop_negative_slice_selects_backwards() {
    fn prop(values: Vec<i32>, start: u8, count: u8) -> bool {
        let s = of(values);
        let (start, count) = (isize::from(start), isize::from(count));
        let backwards = s.slice(start, -count);
        let forwards = s.slice(start - count, count);
        start < count || backwards == forwards
    }
    quickcheck(prop as fn(Vec<i32>, u8, u8) -> bool);
}
