//! Animations as pure, composable data.
//!
//! An [`Animation`] is a function from normalized progress (`0.0..=1.0`) to a value, paired
//! with a nominal duration. Combinators build new animations out of existing ones without
//! mutation:
//!
//! - **Transform**: [`Animation::map`], [`Animation::ease`], [`Animation::reverse`],
//!   [`Animation::repeat`], [`Animation::loop_`], [`Animation::delay`]
//! - **Compose**: [`seq`] (one after the other) and [`par`] (side by side)
//! - **Effect**: [`Animation::bind`] attaches a consumer; [`Animation::render`] runs it
//!
//! `seq` and `par` are the multiplication and addition of a [`Semiring`] whose units are
//! `Cancelled` and `Trivial`.
//!
//! The crate owns no clock. A driver such as [`Playback`] maps frames to progress and calls
//! `render` once per frame.
//!
//! ```
//! use motion_algebra::{Animation, Ease, Either, seq};
//!
//! let x = Animation::linear(1000.0, 0, 100)?;
//! assert_eq!(x.sample(0.5), Some(50));
//!
//! let ab = seq(Animation::constant(1.0, "a")?, Animation::constant(1.0, "b")?);
//! assert_eq!(ab.sample(0.25), Some(Either::Left("a")));
//! assert_eq!(ab.sample(0.75), Some(Either::Right("b")));
//!
//! let eased = x.ease(Ease::InOut(1.5).curve()).loop_();
//! assert_eq!(eased.sample(0.5), Some(100));
//! # Ok::<(), motion_algebra::MotionError>(())
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod algebra;
mod animation;
mod foundation;
mod playback;

pub use algebra::semiring::{Effect, Semiring};
pub use animation::anim::{Animation, ValueFn};
pub use animation::ease::Ease;
pub use animation::ops::{par, seq};
pub use foundation::core::{Fps, FrameIndex};
pub use foundation::either::Either;
pub use foundation::error::{MotionError, MotionResult};
pub use foundation::pair::Pair;
pub use playback::driver::Playback;
