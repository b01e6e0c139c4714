//! Logarithms.

use crate::common::consts::FOUR;
use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::consts::THREE;
use crate::common::consts::TWO;
use crate::common::util::digit_len;
use crate::common::util::digit_len_u64;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Scale;
use crate::num::Decimal;
use crate::ops::consts;
use crate::ops::util::Iteration;

impl Decimal {
    /// Computes the natural logarithm of a number.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is not positive.
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn ln(&self, ctx: &Context) -> Result<Self, Error> {
        if !self.is_positive() {
            return Err(Error::domain(self.to_string(), "numbers greater than 0"));
        }

        if self.is_one() {
            return Ok(Decimal::zero());
        }

        if *self >= *HALF && *self < *TWO {
            let wctx = ctx.working();
            let ret = self.ln_series(&wctx)?;
            return ctx.finalize(ret, 0);
        }

        // self = x * 10^n, 0.1 <= x < 1
        let n = digit_len(&self.m) as Scale + self.e;
        let wctx = ctx.working().extended(digit_len_u64(n.unsigned_abs()));

        let mut x = Decimal::from_raw_parts(self.s, self.m.clone(), self.e - n);
        let mut total = &Decimal::from_i64(n) * &consts::ln10(&wctx)?;

        // bring x close to 1
        let (factor, correction) = match leading_digits(&x) {
            40..=59 => (2, consts::ln2(&wctx)?),
            30..=39 => (3, consts::ln3(&wctx)?),
            20..=29 => (4, &consts::ln2(&wctx)? * &*TWO),
            16..=19 => (6, &consts::ln2(&wctx)? + &consts::ln3(&wctx)?),
            10..=15 => (8, &consts::ln2(&wctx)? * &*THREE),
            _ => (1, Decimal::zero()),
        };

        if factor > 1 {
            x = &x * &Decimal::from_u64(factor);
            total = total - correction;
        }

        let ret = total + x.ln_series(&wctx)?;

        ctx.finalize(ret, 0)
    }

    // ln(x) = 2 * (t + t^3/3 + t^5/5 + ...), t = (x - 1) / (x + 1), two terms per iteration:
    // t^i/i + t^(i+2)/(i+2) = t^i * (i + 2 + i*t^2) / (i * (i + 2))
    fn ln_series(&self, ctx: &Context) -> Result<Self, Error> {
        let t = ctx.div_num(&(self - &*ONE), &(self + &*ONE))?;
        if t.is_zero() {
            return Ok(Decimal::zero());
        }

        let t2 = ctx.mul_num(&t, &t);
        let t4 = ctx.mul_num(&t2, &t2);

        // i + 2 + i*t^2 for i = 1
        let mut coef = &*THREE + &t2;
        let step = ctx.round(&*FOUR + &(&t2 * &*FOUR));

        let mut p = t;
        let mut sum = ctx.mul_num(&ctx.div_num(&p, &THREE)?, &coef);
        let mut i = 5u64;

        let mut iter = Iteration::new(ctx, "ln");
        loop {
            p = ctx.mul_num(&p, &t4);
            coef = &coef + &step;

            let pair = ctx.mul_num(&ctx.div_num(&p, &Decimal::from_u64(i * (i + 2)))?, &coef);
            let next = &sum + &pair;

            iter.step(&pair)?;

            if ctx.converged(&sum, &next) {
                sum = next;
                break;
            }

            sum = ctx.round(next);
            i += 4;
        }
        iter.done();

        Ok(&sum + &sum)
    }

    /// Computes the natural logarithm of 1 plus a number.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is not greater than -1.
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn ln1p(&self, ctx: &Context) -> Result<Self, Error> {
        let x = self + &*ONE;
        if !x.is_positive() {
            return Err(Error::domain(self.to_string(), "numbers greater than -1"));
        }

        x.ln(ctx)
    }

    /// Computes the logarithm base 2 of a number.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is not positive.
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn log2(&self, ctx: &Context) -> Result<Self, Error> {
        let wctx = ctx.working();
        let ret = wctx.div_num(&self.ln(&wctx)?, &consts::ln2(&wctx)?)?;
        ctx.finalize(ret, 0)
    }

    /// Computes the logarithm base 10 of a number.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is not positive.
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn log10(&self, ctx: &Context) -> Result<Self, Error> {
        let wctx = ctx.working();
        let ret = wctx.div_num(&self.ln(&wctx)?, &consts::ln10(&wctx)?)?;
        ctx.finalize(ret, 0)
    }
}

// Returns the first two digits of the mantissa.
fn leading_digits(x: &Decimal) -> u64 {
    let s = x.m.to_str_radix(10);
    let b = s.as_bytes();
    let d0 = (b[0] - b'0') as u64;
    let d1 = b.get(1).map(|c| (c - b'0') as u64).unwrap_or(0);
    d0 * 10 + d1
}
