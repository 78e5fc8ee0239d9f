/// Progress warping curves for [`Animation::ease`](crate::Animation::ease).
///
/// The parameter `c` is a shape factor and should be > 0. `In`/`Out` are power curves,
/// `InOut` is an exponential blend that is symmetric around `0.5`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "c", rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    Linear,
    /// `1 - (1 - t)^(1/c)`.
    In(f64),
    /// `In(1/c)`.
    Out(f64),
    /// `e(t) / (e(t) + e(1 - t))` with `e(t) = exp(-c / t)`.
    InOut(f64),
}

impl Ease {
    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::In(c) => 1.0 - (1.0 - t).powf(1.0 / c),
            Self::Out(c) => Self::In(1.0 / c).apply(t),
            Self::InOut(c) => {
                if t <= 0.0 {
                    return 0.0;
                }
                if t >= 1.0 {
                    return 1.0;
                }
                // Logistic form of the ratio; cannot produce 0/0 when both terms underflow.
                1.0 / (1.0 + (c / t - c / (1.0 - t)).exp())
            }
        }
    }

    /// The curve as a closure, ready for [`Animation::ease`](crate::Animation::ease).
    pub fn curve(self) -> impl Fn(f64) -> f64 + Copy + 'static {
        move |t| self.apply(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
