//! Astro-decimal is a library of arbitrary precision decimal numbers and elementary functions implemented purely in Rust.
//!
//! Numbers are stored as a big integer mantissa and a decimal scale, so decimal fractions like `0.1` are exact.
//! Addition, subtraction, and multiplication are always exact. Division and the transcendental
//! functions are computed with the precision of a [`Context`], which is a number of significant decimal digits.
//!
//! ## Examples
//!
//! ```
//! use astro_decimal::Context;
//!
//! // Context with the precision of 20 significant digits.
//! let ctx = Context::new(20)?;
//!
//! // Exact arithmetic.
//! assert_eq!(ctx.add("1.1", "2.2")?.to_string(), "3.3");
//! assert_eq!(ctx.multiply("0.1", "0.2")?.to_string(), "0.02");
//!
//! // Division produces 11 guard digits on top of the precision.
//! assert_eq!(ctx.divide(1, 3)?.to_string(), "0.3333333333333333333333333333333");
//!
//! // Results of iterative algorithms are rounded to the precision.
//! assert_eq!(ctx.sqrt(2)?.to_string(), "1.4142135623730950488");
//! assert_eq!(ctx.factorial(10)?.to_string(), "3628800");
//!
//! // Arguments outside of the domain of a function produce an error.
//! assert!(ctx.ln(-1).unwrap_err().is_domain());
//! # Ok::<(), astro_decimal::Error>(())
//! ```
//!
//! Arguments are accepted as anything implementing [`IntoDecimal`]: integers, floats, strings, and numbers.
//! The default precision of [`Context::default`] is taken from the process-wide setting, see [`set_precision`].

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]

mod common;
mod conv;
mod ctx;
mod defs;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::conv::normalize;
pub use crate::conv::IntoDecimal;
pub use crate::ctx::precision;
pub use crate::ctx::set_precision;
pub use crate::ctx::Context;
pub use crate::defs::DomainError;
pub use crate::defs::Error;
pub use crate::defs::Scale;
pub use crate::defs::Sign;
pub use crate::num::Decimal;

pub use crate::defs::DEFAULT_P;
pub use crate::defs::GUARD_DIGITS;
pub use crate::defs::PURE_GUARD_DIGITS;
pub use crate::defs::WORK_GUARD_DIGITS;
