/// Value tagged as coming from the left or right operand of a composition.
///
/// [`seq`](crate::seq) produces `Either<S, T>`: `Left` while the first animation plays,
/// `Right` once the second one has taken over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Either<L, R> {
    /// Value from the left side.
    Left(L),
    /// Value from the right side.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// `true` for [`Either::Left`].
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// `true` for [`Either::Right`].
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left value, if any.
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// The right value, if any.
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Transform the left value, keeping the tag.
    pub fn map_left<L2>(self, f: impl FnOnce(L) -> L2) -> Either<L2, R> {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Transform the right value, keeping the tag.
    pub fn map_right<R2>(self, f: impl FnOnce(R) -> R2) -> Either<L, R2> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    /// Eliminate both sides into a single type.
    pub fn either<U>(self, on_left: impl FnOnce(L) -> U, on_right: impl FnOnce(R) -> U) -> U {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    /// Swap sides.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }
}

impl<T> Either<T, T> {
    /// Collapse the tag when both sides carry the same type.
    pub fn union(self) -> T {
        match self {
            Self::Left(v) | Self::Right(v) => v,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/either.rs"]
mod tests;
