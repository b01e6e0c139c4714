//! Square root.

use num_traits::ToPrimitive;

use crate::common::consts::HALF;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Scale;
use crate::defs::Sign;
use crate::num::Decimal;
use crate::ops::util::Iteration;

impl Decimal {
    /// Computes the square root of a number.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is negative.
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn sqrt(&self, ctx: &Context) -> Result<Self, Error> {
        self.sqrt_iter(ctx).map(|(ret, _)| ret)
    }

    /// Computes the square root of a number, and returns it together with the number of Newton iterations.
    pub(crate) fn sqrt_iter(&self, ctx: &Context) -> Result<(Self, usize), Error> {
        if self.is_negative() {
            return Err(Error::domain(self.to_string(), "numbers greater or equal 0"));
        }

        if self.is_zero() {
            return Ok((Decimal::zero(), 0));
        }

        let mut x = None;

        // perfect squares end with 0, 1, 4, 5, 6, or 9
        let last = (&self.m % 10u32).to_u32().unwrap_or(0);
        if self.e % 2 == 0 && !matches!(last, 2 | 3 | 7 | 8) {
            let r = self.m.sqrt();
            let exact = &r * &r == self.m;
            let root = Decimal::from_raw_parts(Sign::Pos, r, self.e / 2).trim();

            if exact {
                return Ok((root, 0));
            }

            x = Some(root);
        }

        let mut x = match x {
            Some(x) => x,
            None => {
                let n = (self.order() + 1).div_euclid(2);
                Decimal::from_raw_parts(Sign::Pos, 1u32.into(), n as Scale)
            }
        };

        let wctx = ctx.working();
        let mut iter = Iteration::new(&wctx, "sqrt");
        loop {
            // x' = (a / x + x) / 2
            let next = wctx.round(&(&wctx.div_num(self, &x)? + &x) * &*HALF);
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
