//! Semiring contract and its instance for effect animations.
//!
//! | Operation | Animation instance |
//! |-----------|--------------------|
//! | `zero`    | `Cancelled`, absorbing under `mul` |
//! | `one`     | `Trivial`, identity under `mul` |
//! | `mul`     | [`seq`], tags collapsed with [`Either::union`] |
//! | `add`     | [`par`], pair discarded |
//!
//! Laws that hold exactly for effect animations: `mul(zero, a) = mul(a, zero) = zero`,
//! `mul(one, a) ≃ a ≃ mul(a, one)`, and `add(one, one) = add(zero, one) = one`. `mul` is
//! associative up to floating point rounding of the time split. For effects `add(zero, a) ≃ a`
//! because the absent slot carries no value. Distributivity does not hold in general:
//! `add` pads the shorter side instead of splitting time the way `mul` does.

use crate::{
    animation::anim::Animation,
    animation::ops::{par, seq},
    foundation::either::Either,
};

/// Two combining operations with their units.
pub trait Semiring: Sized {
    /// Additive unit, absorbing under [`Semiring::mul`].
    fn zero() -> Self;

    /// Multiplicative unit.
    fn one() -> Self;

    /// Multiplicative combine.
    fn mul(x: Self, y: Self) -> Self;

    /// Additive combine.
    fn add(x: Self, y: Self) -> Self;

    /// Fold with [`Semiring::mul`], starting from [`Semiring::one`].
    fn product<I: IntoIterator<Item = Self>>(items: I) -> Self {
        items.into_iter().fold(Self::one(), Self::mul)
    }

    /// Fold with [`Semiring::add`], starting from [`Semiring::zero`].
    fn sum<I: IntoIterator<Item = Self>>(items: I) -> Self {
        items.into_iter().fold(Self::zero(), Self::add)
    }
}

/// Animation whose only output is the side effect attached by [`Animation::bind`].
pub type Effect = Animation<()>;

impl Semiring for Effect {
    fn zero() -> Self {
        Animation::Cancelled
    }

    fn one() -> Self {
        Animation::Trivial
    }

    fn mul(x: Self, y: Self) -> Self {
        seq(x, y).map(Either::union)
    }

    fn add(x: Self, y: Self) -> Self {
        par(x, y).map(|_| ())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algebra/semiring.rs"]
mod tests;
