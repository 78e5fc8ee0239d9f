use std::rc::Rc;

use crate::{
    animation::anim::Animation,
    foundation::either::Either,
    foundation::error::{MotionError, MotionResult, check_duration},
    foundation::pair::Pair,
};

/// Play `x` to completion, then `y`.
///
/// Rows are matched in order: a `Cancelled` operand cancels the whole sequence, a `Trivial`
/// operand contributes nothing, and two `Show`s split the combined timeline in proportion to
/// their durations. The switch to `Right` happens at exactly `d1 / (d1 + d2)`.
///
/// A combined duration past `f64::MAX` saturates there; the split point is still taken from
/// the operand durations, so the halves keep their proportions.
pub fn seq<S: 'static, T: 'static>(x: Animation<S>, y: Animation<T>) -> Animation<Either<S, T>> {
    match (x, y) {
        (Animation::Cancelled, _) | (_, Animation::Cancelled) => Animation::Cancelled,
        (Animation::Trivial, y) => y.map(Either::Right),
        (x, Animation::Trivial) => x.map(Either::Left),
        (
            Animation::Show {
                duration: d1,
                value: v1,
            },
            Animation::Show {
                duration: d2,
                value: v2,
            },
        ) => {
            let (duration, ratio) = combine(d1, d2);
            Animation::show_unchecked(duration, move |p| match split_at(p, ratio) {
                Either::Left(local) => Either::Left(v1(local)),
                Either::Right(local) => Either::Right(v2(local)),
            })
        }
    }
}

/// Play `x` and `y` against the same progress, lasting as long as the longer one.
///
/// The shorter side reaches its final value at its own duration and holds it. When only one
/// side is a `Show`, the result follows that side and the other slot is `None`.
pub fn par<S: 'static, T: 'static>(
    x: Animation<S>,
    y: Animation<T>,
) -> Animation<Pair<Option<S>, Option<T>>> {
    match (x, y) {
        (Animation::Cancelled, Animation::Trivial)
        | (Animation::Trivial, Animation::Cancelled)
        | (Animation::Trivial, Animation::Trivial) => Animation::Trivial,
        (Animation::Cancelled, Animation::Cancelled) => Animation::Cancelled,
        (
            Animation::Show {
                duration: d1,
                value: v1,
            },
            Animation::Show {
                duration: d2,
                value: v2,
            },
        ) => {
            let duration = d1.max(d2);
            // Exactly 1.0 for the longer side, so it is never rescaled.
            let (s1, s2) = (duration / d1, duration / d2);
            Animation::show_unchecked(duration, move |p| {
                Pair(Some(v1(stretch(p, s1))), Some(v2(stretch(p, s2))))
            })
        }
        (_, Animation::Show { duration, value }) => {
            Animation::show_unchecked(duration, move |p| Pair(None, Some(value(p))))
        }
        (Animation::Show { duration, value }, _) => {
            Animation::show_unchecked(duration, move |p| Pair(Some(value(p)), None))
        }
    }
}

// Local progress of a side running `scale` times faster, held at its end.
fn stretch(p: f64, scale: f64) -> f64 {
    if p <= 0.0 { 0.0 } else { (p * scale).min(1.0) }
}

// Total duration and split point of `d1` followed by `d2`, both finite for finite inputs.
fn combine(d1: f64, d2: f64) -> (f64, f64) {
    let sum = d1 + d2;
    if sum.is_finite() {
        (sum, d1 / sum)
    } else {
        (f64::MAX, 1.0 / (1.0 + d2 / d1))
    }
}

// Map combined progress onto the local progress of the first or second half.
fn split_at(p: f64, ratio: f64) -> Either<f64, f64> {
    if p < ratio {
        return Either::Left(p / ratio);
    }
    let rest = 1.0 - ratio;
    if rest <= 0.0 {
        return Either::Right(1.0);
    }
    Either::Right((p - ratio) / rest)
}

impl<T: 'static> Animation<T> {
    /// Play forward, then backward, over twice the duration.
    ///
    /// The end value appears once, at the midpoint.
    pub fn loop_(self) -> Self {
        if !self.is_show() {
            return self;
        }
        let back = self.clone().reverse();
        seq(self, back).map(Either::union)
    }

    /// Hold the starting value for `amount` time units, then play.
    ///
    /// The held value is evaluated lazily, so bound consumers only fire on render.
    pub fn delay(self, amount: f64) -> MotionResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            tracing::debug!(amount, "rejected delay");
            return Err(MotionError::configuration(format!(
                "delay must be finite and >= 0 (got {amount})"
            )));
        }
        if amount == 0.0 {
            return Ok(self);
        }
        match self {
            Self::Show { duration, value } => {
                check_duration("delayed", amount + duration)?;
                let start = Rc::clone(&value);
                let hold = Self::show_unchecked(amount, move |_| start(0.0));
                Ok(seq(hold, Self::Show { duration, value }).map(Either::union))
            }
            other => Ok(other),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
