//! Exponentiation.

use num_traits::ToPrimitive;

use crate::common::consts::ONE;
use crate::common::util::digit_len_u64;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;

impl Decimal {
    /// Computes `self` to the power of `b`.
    /// Integer powers are exact, except for negative exponents which require a division.
    ///
    /// ## Errors
    ///
    ///  - Domain: both numbers are zero, or `self` is zero and `b` is negative,
    ///    or `self` is negative and `b` is not an integer.
    ///  - ExponentOverflow: the integer exponent does not fit in `u32`, or the result is too large.
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn pow(&self, b: &Self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() && b.is_zero() {
            return Err(Error::domain("0 ^ 0", "real numbers, both can't be 0 at the same time"));
        }

        if self.is_one() || b.is_zero() {
            return Ok(Decimal::one());
        }

        if b.is_int() {
            // u32::MAX has 10 digits
            if b.order() >= 10 {
                return Err(Error::ExponentOverflow);
            }

            let n = b.int_part().to_u32().ok_or(Error::ExponentOverflow)?;
            let ret = self.powi(n)?;

            return if b.is_negative() {
                ONE.div(&ret, ctx.precision())
            } else {
                Ok(ret)
            };
        }

        if self.is_negative() {
            return Err(Error::domain(
                format!("{} ^ {}", self, b),
                "real numbers, not negative ^ non-integer",
            ));
        }

        if self.is_zero() {
            return if b.is_positive() {
                Ok(Decimal::zero())
            } else {
                Err(Error::domain(format!("0 ^ {}", b), "numbers other than 0"))
            };
        }

        // integer digits of b * ln(self) are lost in exp
        let extra = b.order().max(-1) + 1 + digit_len_u64(self.order().unsigned_abs()) as i64 + 1;
        let wctx = ctx.working().extended(extra as usize);

        let y = wctx.mul_num(b, &self.ln(&wctx)?);
        let ret = y.exp(&wctx)?;

        ctx.finalize(ret, 0)
    }
}
