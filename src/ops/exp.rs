//! Exponentiation.

use num_bigint::BigUint;

use crate::common::consts::ONE;
use crate::common::util::digit_len;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;
use crate::ops::util::Iteration;

/// Maximum number of halvings of the argument. Larger arguments overflow the scale of the result.
const MAX_HALVINGS: u64 = 62;

impl Decimal {
    /// Computes `e` to the power of `self`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large or too small to be represented.
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn exp(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Decimal::one());
        }

        if self.order() > 19 {
            return Err(Error::ExponentOverflow);
        }

        // reduce the argument to |x| < 1 by dividing it by 2^k
        let k = self.int_part().bits();
        if k > MAX_HALVINGS {
            return Err(Error::ExponentOverflow);
        }

        let n = BigUint::from(1u32) << k;
        let wctx = ctx.working().extended(digit_len(&n));

        let x = if k > 0 {
            wctx.div_num(self, &Decimal::from_biguint(n))?
        } else {
            self.clone()
        };

        let mut ret = x.exp_series(&wctx)?;

        for _ in 0..k {
            ret = wctx.round(ret.powi(2)?);
        }

        ctx.finalize(ret, 0)
    }

    // e^x = 1 + x + x^2/2! + ..., two terms per iteration:
    // x^(k-1)/(k-1)! + x^k/k! = x^k/k! * (k/x + 1)
    fn exp_series(&self, ctx: &Context) -> Result<Self, Error> {
        let inv = ctx.div_num(&ONE, self)?;
        let x2 = ctx.mul_num(self, self);

        let mut term = x2.clone();
        let mut sum = Decimal::one();
        let mut k = 2u64;

        let mut iter = Iteration::new(ctx, "exp");
        loop {
            term = ctx.div_num(&term, &Decimal::from_u64(k * (k - 1)))?;

            let pair = ctx.mul_num(&term, &(&ctx.mul_num(&Decimal::from_u64(k), &inv) + &*ONE));
            let next = &sum + &pair;

            iter.step(&pair)?;

            if ctx.converged(&sum, &next) {
                sum = next;
                break;
            }

            term = ctx.mul_num(&term, &x2);
            sum = ctx.round(next);
            k += 2;
        }
        iter.done();

        Ok(sum)
    }

    /// Computes `e` to the power of `self` minus 1.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large to be represented.
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn expm1(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Decimal::zero());
        }

        // digits cancelled in the subtraction
        let extra = (-self.order()).max(0) as usize;
        let ret = self.exp(&ctx.working().extended(extra))? - &*ONE;

        ctx.finalize(ret, 0)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_exp() {
        let ctx = Context::new(30).unwrap();

        assert_eq!(ctx.exp(0).unwrap(), Decimal::one());
        assert_eq!(ctx.exp(1).unwrap().to_string(), "2.71828182845904523536028747135");
        assert_eq!(ctx.exp("-1").unwrap().to_string(), "0.367879441171442321595523770161");
        assert_eq!(ctx.exp("0.5").unwrap().to_string(), "1.64872127070012814684865078781");
        assert_eq!(ctx.exp("10").unwrap().to_string(), "22026.4657948067165169579006453");
        assert_eq!(ctx.exp("-123.456").unwrap().to_string(), "0.00000000000000000000000000000000000000000000000000000241958254126460076613475174695");
        assert_eq!(
            ctx.exp("1000").unwrap().to_string(),
            format!("197007111401704699388887935224{}", "0".repeat(405))
        );
        assert_eq!(ctx.exp("1e-40").unwrap().to_string(), "1");
        assert_eq!(ctx.exp("-50.5").unwrap().to_string(), "0.000000000000000000000116984591770619646858516251845");

        assert_eq!(ctx.exp("1e19").unwrap_err(), Error::ExponentOverflow);

        let ctx = ctx.with_max_iter(Some(3));
        assert_eq!(ctx.exp("0.9").unwrap_err(), Error::NonConvergence("exp"));
    }

    #[test]
    fn test_expm1() {
        let ctx = Context::new(30).unwrap();

        assert_eq!(ctx.expm1(0).unwrap(), Decimal::zero());
        assert_eq!(ctx.expm1("1e-20").unwrap().to_string(), "0.00000000000000000001000000000000000000005");
        assert_eq!(ctx.expm1("-0.001").unwrap().to_string(), "-0.000999500166625008331944642832344");
        assert_eq!(ctx.expm1(d("2")).unwrap().to_string(), "6.38905609893065022723042746058");
    }
}
