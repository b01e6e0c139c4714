//! Division.

use crate::common::util::digit_len;
use crate::common::util::pow10;
use crate::defs::Error;
use crate::defs::Scale;
use crate::num::Decimal;

impl Decimal {
    /// Divides `self` by `d2` and returns the quotient rounded to `n` significant digits.
    /// If the division is exact, the quotient is not rounded unless it is longer than `n` digits.
    ///
    /// ## Errors
    ///
    ///  - Domain: `d2` is zero.
    ///  - ExponentOverflow: the scale of the result does not fit in `Scale`.
    pub(crate) fn div(&self, d2: &Self, n: usize) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::domain(format!("{} / 0", self), "numbers other than 0"));
        }

        if self.is_zero() {
            return Ok(Decimal::zero());
        }

        // quotient of the shifted mantissas has at least n + 1 digits
        let k = (n + 1 + digit_len(&d2.m)).saturating_sub(digit_len(&self.m));
        let q = (&self.m * pow10(k)) / &d2.m;

        let e = self
            .e
            .checked_sub(d2.e)
            .and_then(|e| e.checked_sub(k as Scale))
            .ok_or(Error::ExponentOverflow)?;

        let s = self.s.product(d2.s);
        // rounding the truncated quotient gives the same result as rounding the exact one
        Ok(Decimal::from_raw_parts(s, q, e).round_to_digits(n))
    }
}
