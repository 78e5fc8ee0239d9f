/// Ordered, immutable two-element value produced by [`par`](crate::par).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Pair<A, B>(pub A, pub B);

impl<A, B> Pair<A, B> {
    /// Build a pair.
    pub fn new(first: A, second: B) -> Self {
        Self(first, second)
    }

    /// Borrow the first element.
    pub fn first(&self) -> &A {
        &self.0
    }

    /// Borrow the second element.
    pub fn second(&self) -> &B {
        &self.1
    }

    /// Destructure into a plain tuple.
    pub fn into_tuple(self) -> (A, B) {
        (self.0, self.1)
    }

    /// Exchange the elements.
    pub fn swap(self) -> Pair<B, A> {
        Pair(self.1, self.0)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((a, b): (A, B)) -> Self {
        Self(a, b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/pair.rs"]
mod tests;
