//! Lambert W function and the infinite power tower.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::consts::OMEGA;
use crate::common::consts::THREE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;
use crate::ops::consts;
use crate::ops::util::Iteration;

impl Decimal {
    /// Computes the principal branch of the Lambert W function, i.e. `w` such that `w * e^w = self`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is less than -ln(2)/2.
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn lambert_w(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Decimal::zero());
        }

        if self.is_negative() && *self < lambert_w_min(&ctx.working())? {
            return Err(Error::domain(self.to_string(), "numbers greater or equal -ln(2)/2"));
        }

        let w = self.lambert_w_halley(ctx)?;

        ctx.finalize(w, 0)
    }

    // Halley's iteration for w e^w = self, self >= -ln(2)/2
    fn lambert_w_halley(&self, ctx: &Context) -> Result<Self, Error> {
        let wctx = ctx.working();
        let nctx = wctx.nested();

        let mut w = if *self <= *THREE {
            OMEGA.clone()
        } else {
            let la = self.ln(&nctx)?;
            &la - &la.ln(&nctx)?
        };

        let mut iter = Iteration::new(&wctx, "lambert_w");
        loop {
            // Halley's step for f(w) = w e^w - a
            let ew = w.exp(&nctx)?;
            let f = &wctx.mul_num(&w, &ew) - self;
            let corr = wctx.div_num(&wctx.mul_num(&(&w + &*TWO), &f), &(&(&w * &*TWO) + &*TWO))?;
            let den = &wctx.mul_num(&ew, &(&w + &*ONE)) - &corr;
            let next = wctx.round(&w - &wctx.div_num(&f, &den)?);
            iter.step(&(&next - &w))?;

            if ctx.converged(&w, &next) {
                w = next;
                break;
            }
            w = next;
        }
        iter.done();

        Ok(w)
    }

    /// Computes `y` such that `y = self^y`, the limit of the power tower `a^a^a^...`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is not positive or is greater than sqrt(2).
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn xy(&self, ctx: &Context) -> Result<Self, Error> {
        if !self.is_positive() || self * self > *TWO {
            return Err(Error::domain(self.to_string(), "numbers greater than 0 and less or equal sqrt(2)"));
        }

        if self.is_one() {
            return Ok(Decimal::one());
        }

        let wctx = ctx.working();

        // y = -W(-ln a) / ln a, where -ln a may round below -ln(2)/2 for a close to sqrt(2)
        let la = self.ln(&wctx.nested())?;
        let x = (-&la).max(lambert_w_min(&wctx)?);
        let w = x.lambert_w_halley(&wctx)?;
        let ret = wctx.div_num(&-&w, &la)?;

        ctx.finalize(ret, 0)
    }
}

// -ln(2)/2, the lower bound of the argument of W
fn lambert_w_min(ctx: &Context) -> Result<Decimal, Error> {
    Ok(-ctx.round(&consts::ln2(ctx)? * &*HALF))
}
