//! Operations on the numbers.

mod add;
mod agm;
mod cbrt;
pub(crate) mod consts;
mod div;
mod exp;
mod factorial;
mod gamma;
mod lambert;
mod log;
mod mul;
mod pow;
mod sin;
mod sqrt;
mod util;

#[cfg(test)]
mod tests;
