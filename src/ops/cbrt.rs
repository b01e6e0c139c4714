//! Cube root.

use crate::common::consts::THREE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Scale;
use crate::defs::Sign;
use crate::num::Decimal;
use crate::ops::util::Iteration;

impl Decimal {
    /// Computes the cube root of a number.
    ///
    /// ## Errors
    ///
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn cbrt(&self, ctx: &Context) -> Result<Self, Error> {
        self.cbrt_iter(ctx).map(|(ret, _)| ret)
    }

    /// Computes the cube root of a number, and returns it together with the number of Newton iterations.
    pub(crate) fn cbrt_iter(&self, ctx: &Context) -> Result<(Self, usize), Error> {
        if self.is_zero() {
            return Ok((Decimal::zero(), 0));
        }

        if self.is_negative() {
            let (ret, n) = self.abs().cbrt_iter(ctx)?;
            return Ok((-ret, n));
        }

        let mut x = None;

        if self.e % 3 == 0 {
            let r = self.m.cbrt();
            let exact = &r * &r * &r == self.m;
            let root = Decimal::from_raw_parts(Sign::Pos, r, self.e / 3).trim();

            if exact {
                return Ok((root, 0));
            }

            x = Some(root);
        }

        let mut x = match x {
            Some(x) => x,
            None => {
                let n = (self.order() + 1).div_euclid(3);
                Decimal::from_raw_parts(Sign::Pos, 1u32.into(), n as Scale)
            }
        };

        let wctx = ctx.working();
        let mut iter = Iteration::new(&wctx, "cbrt");
        loop {
            // x' = (a / x^2 + 2x) / 3
            let q = wctx.div_num(self, &wctx.mul_num(&x, &x))?;
            let next = wctx.div_num(&(&q + &(&x * &*TWO)), &THREE)?;
            iter.step(&(&next - &x))?;

            if ctx.converged(&x, &next) {
                x = next;
                break;
            }
            x = next;
        }
        iter.done();

        Ok((ctx.finalize(x, 0)?, iter.count()))
    }
}
