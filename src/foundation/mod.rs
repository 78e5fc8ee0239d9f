pub(crate) mod core;
pub(crate) mod either;
pub(crate) mod error;
pub(crate) mod pair;
