pub(crate) mod semiring;
