//! Gamma function.

use crate::common::consts::HALF;
use crate::common::consts::LANCZOS_C0;
use crate::common::consts::LANCZOS_COEFFS;
use crate::common::consts::LANCZOS_G_HALF;
use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;
use crate::ops::consts;
use crate::ops::factorial::factorial;

impl Decimal {
    /// Computes the gamma function of a number.
    /// The result for non-integer numbers is computed using the Lanczos approximation,
    /// and has about 15 correct significant digits regardless of the precision.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is zero or a negative integer.
    ///  - ExponentOverflow: the number is an integer which does not fit in `u64`.
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn gamma(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_int() {
            if !self.is_positive() {
                return Err(Error::domain(
                    self.to_string(),
                    "real numbers other than 0 and negative integers",
                ));
            }

            let n = self.to_u64().ok_or(Error::ExponentOverflow)?;
            return Ok(Decimal::from_biguint(factorial(n - 1)));
        }

        let wctx = ctx.working();
        let ret = self.gamma_num(&wctx)?;

        ctx.finalize(ret, 0)
    }

    fn gamma_num(&self, ctx: &Context) -> Result<Self, Error> {
        if *self < *HALF {
            // reflection: gamma(a) = pi / (sin(pi * a) * gamma(1 - a))
            let pi = consts::pi(ctx)?;
            let s = ctx.mul_num(&pi, self).sin(ctx)?;
            let g = (&*ONE - self).gamma_num(ctx)?;

            return ctx.div_num(&pi, &ctx.mul_num(&s, &g));
        }

        let z = self - &*ONE;

        let mut x = LANCZOS_C0.clone();
        for (i, c) in LANCZOS_COEFFS.iter().enumerate() {
            let d = &z + &Decimal::from_u64(i as u64 + 1);
            x = &x + &ctx.div_num(c, &d)?;
        }

        let t = &z + &*LANCZOS_G_HALF;

        // sqrt(2 pi) * t^(z + 0.5) * e^-t * x
        let sqrt_2pi = (&consts::pi(ctx)? * &*TWO).sqrt(ctx)?;
        let tp = t.pow(&(&z + &*HALF), ctx)?;
        let et = (-&t).exp(ctx)?;

        let ret = ctx.mul_num(&ctx.mul_num(&sqrt_2pi, &tp), &ctx.mul_num(&et, &x));

        Ok(ret)
    }
}
