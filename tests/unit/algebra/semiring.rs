use std::{cell::RefCell, rc::Rc};

use super::*;

type Log = Rc<RefCell<Vec<(&'static str, i64)>>>;

fn effect(log: &Log, name: &'static str, duration: f64, from: i64, to: i64) -> Effect {
    let sink = Rc::clone(log);
    Animation::linear(duration, from, to)
        .unwrap()
        .bind(move |v| sink.borrow_mut().push((name, v)))
}

#[test]
fn units_are_the_degenerate_variants() {
    assert!(Effect::zero().is_cancelled());
    assert!(Effect::one().is_trivial());
}

#[test]
fn zero_absorbs_under_mul() {
    let log = Log::default();
    let a = effect(&log, "a", 1.0, 0, 10);
    assert!(Effect::mul(Effect::zero(), a.clone()).is_cancelled());
    assert!(Effect::mul(a, Effect::zero()).is_cancelled());
    assert!(Effect::mul(Effect::zero(), Effect::one()).is_cancelled());
}

#[test]
fn one_is_identity_under_mul() {
    let log = Log::default();
    let a = Effect::mul(Effect::one(), effect(&log, "a", 2.0, 0, 10));
    assert_eq!(a.duration(), Some(2.0));
    a.render(0.5);
    let b = Effect::mul(effect(&log, "b", 2.0, 0, 10), Effect::one());
    b.render(0.5);
    assert_eq!(*log.borrow(), vec![("a", 5), ("b", 5)]);
}

#[test]
fn mul_sequences_effects() {
    let log = Log::default();
    let s = Effect::mul(effect(&log, "a", 1.0, 0, 10), effect(&log, "b", 1.0, 0, 10));
    assert_eq!(s.duration(), Some(2.0));
    s.render(0.25);
    s.render(0.75);
    assert_eq!(*log.borrow(), vec![("a", 5), ("b", 5)]);
}

#[test]
fn add_runs_effects_together() {
    let log = Log::default();
    let s = Effect::add(effect(&log, "a", 1.0, 0, 10), effect(&log, "b", 2.0, 0, 10));
    assert_eq!(s.duration(), Some(2.0));
    s.render(0.5);
    assert_eq!(*log.borrow(), vec![("a", 10), ("b", 5)]);
}

#[test]
fn add_units() {
    assert!(Effect::add(Effect::one(), Effect::one()).is_trivial());
    assert!(Effect::add(Effect::zero(), Effect::one()).is_trivial());
    assert!(Effect::add(Effect::one(), Effect::zero()).is_trivial());
    assert!(Effect::add(Effect::zero(), Effect::zero()).is_cancelled());

    let log = Log::default();
    let a = Effect::add(Effect::zero(), effect(&log, "a", 3.0, 0, 10));
    assert_eq!(a.duration(), Some(3.0));
    a.render(1.0);
    assert_eq!(*log.borrow(), vec![("a", 10)]);
}

#[test]
fn product_and_sum_fold_from_units() {
    assert!(Effect::product(Vec::new()).is_trivial());
    assert!(Effect::sum(Vec::new()).is_cancelled());

    let log = Log::default();
    let p = Effect::product([
        effect(&log, "a", 1.0, 0, 10),
        effect(&log, "b", 1.0, 0, 10),
        effect(&log, "c", 2.0, 0, 10),
    ]);
    assert_eq!(p.duration(), Some(4.0));
    p.render(0.75);
    assert_eq!(*log.borrow(), vec![("c", 5)]);

    log.borrow_mut().clear();
    let s = Effect::sum([effect(&log, "a", 1.0, 0, 10), effect(&log, "b", 4.0, 0, 10)]);
    assert_eq!(s.duration(), Some(4.0));
    s.render(0.5);
    assert_eq!(*log.borrow(), vec![("a", 10), ("b", 5)]);
}

// Max-plus over durations: a second instance keeps the trait honest about being generic.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Span(f64);

impl Semiring for Span {
    fn zero() -> Self {
        Span(f64::NEG_INFINITY)
    }
    fn one() -> Self {
        Span(0.0)
    }
    fn mul(x: Self, y: Self) -> Self {
        Span(x.0 + y.0)
    }
    fn add(x: Self, y: Self) -> Self {
        Span(x.0.max(y.0))
    }
}

#[test]
fn durations_follow_max_plus() {
    let log = Log::default();
    let (a, b, c) = (
        effect(&log, "a", 1.0, 0, 1),
        effect(&log, "b", 2.0, 0, 1),
        effect(&log, "c", 5.0, 0, 1),
    );
    let anim = Effect::mul(a.clone(), Effect::add(b.clone(), c.clone()));
    let span = Span::mul(
        Span(a.duration().unwrap()),
        Span::add(Span(b.duration().unwrap()), Span(c.duration().unwrap())),
    );
    assert_eq!(anim.duration(), Some(span.0));
    assert_eq!(Span::sum([Span(1.0), Span(3.0)]), Span(3.0));
    assert_eq!(Span::product([Span(1.0), Span(3.0)]), Span(4.0));
}
