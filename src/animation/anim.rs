use std::{fmt, rc::Rc};

use crate::foundation::error::{MotionError, MotionResult, check_duration};

/// Shared, pure mapping from normalized progress to a value.
pub type ValueFn<T> = Rc<dyn Fn(f64) -> T>;

/// A time-varying value described as data.
///
/// `Show` pairs a nominal duration with a pure function of progress in `[0, 1]`. The two
/// degenerate variants are the algebraic units: `Cancelled` never produces anything and
/// absorbs under [`seq`](crate::seq); `Trivial` completes instantly and is the identity under
/// [`seq`](crate::seq).
///
/// Every combinator consumes its inputs and returns a new animation. Cloning only bumps the
/// reference count of the value function.
pub enum Animation<T> {
    /// Never produces a value.
    Cancelled,
    /// Completes immediately without producing a value.
    Trivial,
    /// Finite animation of `duration` caller-defined time units.
    Show {
        /// Nominal length, always finite and > 0.
        duration: f64,
        /// Value at a given progress.
        value: ValueFn<T>,
    },
}

impl<T> Clone for Animation<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Cancelled => Self::Cancelled,
            Self::Trivial => Self::Trivial,
            Self::Show { duration, value } => Self::Show {
                duration: *duration,
                value: Rc::clone(value),
            },
        }
    }
}

impl<T> fmt::Debug for Animation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("Cancelled"),
            Self::Trivial => f.write_str("Trivial"),
            Self::Show { duration, .. } => f
                .debug_struct("Show")
                .field("duration", duration)
                .finish_non_exhaustive(),
        }
    }
}

impl<T> Animation<T> {
    /// The absorbing animation.
    pub fn cancelled() -> Self {
        Self::Cancelled
    }

    /// The instantaneous, value-less animation.
    pub fn trivial() -> Self {
        Self::Trivial
    }

    /// Nominal duration of a `Show`; `None` for the degenerate variants.
    pub fn duration(&self) -> Option<f64> {
        match self {
            Self::Show { duration, .. } => Some(*duration),
            Self::Cancelled | Self::Trivial => None,
        }
    }

    /// `true` for [`Animation::Cancelled`].
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// `true` for [`Animation::Trivial`].
    pub fn is_trivial(&self) -> bool {
        matches!(self, Self::Trivial)
    }

    /// `true` for [`Animation::Show`].
    pub fn is_show(&self) -> bool {
        matches!(self, Self::Show { .. })
    }

    /// Evaluate the animation at `progress`.
    ///
    /// Runs any consumer attached with [`Animation::bind`]. The degenerate variants yield
    /// `None` and run nothing.
    pub fn sample(&self, progress: f64) -> Option<T> {
        match self {
            Self::Show { value, .. } => Some(value(progress)),
            Self::Cancelled | Self::Trivial => None,
        }
    }

    /// Evaluate the animation at `progress` for its side effects only.
    pub fn render(&self, progress: f64) {
        let _ = self.sample(progress);
    }
}

impl<T: 'static> Animation<T> {
    /// Build a `Show`, rejecting zero, negative, or non-finite durations.
    pub fn show(duration: f64, value: impl Fn(f64) -> T + 'static) -> MotionResult<Self> {
        let duration = check_duration("show", duration)?;
        Ok(Self::show_unchecked(duration, value))
    }

    // Callers guarantee `duration` was derived from already validated durations.
    pub(crate) fn show_unchecked(duration: f64, value: impl Fn(f64) -> T + 'static) -> Self {
        Self::Show {
            duration,
            value: Rc::new(value),
        }
    }

    /// Hold `value` for `duration`, independent of progress.
    pub fn constant(duration: f64, value: T) -> MotionResult<Self>
    where
        T: Clone,
    {
        Self::show(duration, move |_| value.clone())
    }

    /// Transform produced values, preserving structure and duration.
    pub fn map<R: 'static>(self, f: impl Fn(T) -> R + 'static) -> Animation<R> {
        match self {
            Self::Cancelled => Animation::Cancelled,
            Self::Trivial => Animation::Trivial,
            Self::Show { duration, value } => {
                Animation::show_unchecked(duration, move |p| f(value(p)))
            }
        }
    }

    /// Attach a consumer that receives every value produced by [`Animation::render`].
    pub fn bind(self, renderer: impl Fn(T) + 'static) -> Animation<()> {
        match self {
            Self::Cancelled => Animation::Cancelled,
            Self::Trivial => Animation::Trivial,
            Self::Show { duration, value } => {
                Animation::show_unchecked(duration, move |p| renderer(value(p)))
            }
        }
    }

    /// Play backwards: progress `p` evaluates `self` at `1 - p`.
    pub fn reverse(self) -> Self {
        match self {
            Self::Show { duration, value } => {
                Self::show_unchecked(duration, move |p| value(1.0 - p))
            }
            other => other,
        }
    }

    /// Play `count` back-to-back cycles over `count` times the duration.
    ///
    /// Interior cycle boundaries restart at local progress `0`; the final progress `1` stays
    /// at the end of the last cycle. A total duration that overflows `f64` is rejected.
    pub fn repeat(self, count: u32) -> MotionResult<Self> {
        if count == 0 {
            tracing::debug!(count, "rejected repeat count");
            return Err(MotionError::configuration("repeat count must be >= 1"));
        }
        Ok(match self {
            Self::Show { duration, value } => {
                let n = f64::from(count);
                let total = check_duration("repeated", n * duration)?;
                Self::show_unchecked(total, move |p| {
                    let local = if p >= 1.0 { 1.0 } else { (n * p) % 1.0 };
                    value(local)
                })
            }
            other => other,
        })
    }

    /// Warp time through `easing` before evaluating; the duration is unchanged.
    ///
    /// Eased progress is clamped to `[0, 1]` so overshooting curves stay in domain.
    pub fn ease(self, easing: impl Fn(f64) -> f64 + 'static) -> Self {
        match self {
            Self::Show { duration, value } => Self::show_unchecked(duration, move |p| {
                value(easing(p).clamp(0.0, 1.0))
            }),
            other => other,
        }
    }
}

impl Animation<i64> {
    /// Interpolate between two integers, rounding half up.
    pub fn linear(duration: f64, from: i64, to: i64) -> MotionResult<Self> {
        let (a, b) = (from as f64, to as f64);
        Self::show(duration, move |p| ((1.0 - p) * a + p * b + 0.5).floor() as i64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
