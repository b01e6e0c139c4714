//! Sine.

use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;
use crate::ops::consts;
use crate::ops::util::Iteration;

impl Decimal {
    /// Computes the sine of a number.
    ///
    /// ## Errors
    ///
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn sin(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Decimal::zero());
        }

        // the integer digits of the argument are lost in the reduction
        let extra = self.order().max(0) as usize + 1;
        let wctx = ctx.working().extended(extra);

        let arg = self.reduce_trig_arg(&wctx)?;
        let ret = arg.sin_series(&wctx)?;

        ctx.finalize(ret, 0)
    }

    // Returns the argument reduced to the range [-pi, pi].
    fn reduce_trig_arg(&self, ctx: &Context) -> Result<Self, Error> {
        let pi = consts::pi(ctx)?;
        let two_pi = &pi * &*TWO;

        if self.abs() <= pi {
            return Ok(self.clone());
        }

        let k = ctx.div_num(self, &two_pi)?.round_int();

        Ok(ctx.round(self - &k * &two_pi))
    }

    // sin:  x - x^3/3! + x^5/5! - x^7/7! + ...
    fn sin_series(self, ctx: &Context) -> Result<Self, Error> {
        let x2 = ctx.mul_num(&self, &self);
        let mut term = self.clone();
        let mut ret = self;
        let mut n = 1u64;

        let mut iter = Iteration::new(ctx, "sin");
        loop {
            term = ctx.div_num(&ctx.mul_num(&term, &x2), &Decimal::from_u64((n + 1) * (n + 2)))?;
            term = -term;
            n += 2;

            iter.step(&term)?;

            let next = &ret + &term;
            if ctx.converged(&ret, &next) || term.is_zero() {
                ret = next;
                break;
            }
            ret = ctx.round(next);
        }
        iter.done();

        Ok(ret)
    }
}
