//! Arithmetic-geometric mean and the complete elliptic integral of the first kind.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;
use crate::ops::consts;
use crate::ops::util::Iteration;

impl Decimal {
    /// Computes the arithmetic-geometric mean of `self` and `b`.
    ///
    /// ## Errors
    ///
    ///  - Domain: any of the numbers is negative.
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn agm(&self, b: &Self, ctx: &Context) -> Result<Self, Error> {
        if self.is_negative() || b.is_negative() {
            return Err(Error::domain(format!("agm({}, {})", self, b), "numbers greater or equal 0"));
        }

        if self.is_zero() || b.is_zero() {
            return Ok(Decimal::zero());
        }

        let wctx = ctx.working();
        let nctx = wctx.nested();
        let mut a = self.clone();
        let mut g = b.clone();

        let mut iter = Iteration::new(&wctx, "agm");
        loop {
            let an = wctx.round(&(&a + &g) * &*HALF);
            let gn = wctx.mul_num(&a, &g).sqrt(&nctx)?;
            iter.step(&(&an - &a))?;

            if ctx.converged(&a, &an) {
                a = an;
                break;
            }

            a = an;
            g = gn;
        }
        iter.done();

        ctx.finalize(a, 0)
    }

    /// Computes the complete elliptic integral of the first kind K(k) for the modulus `self`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the absolute value of the number is not less than 1.
    ///  - NonConvergence: the iteration limit of `ctx` is exceeded.
    pub(crate) fn elliptic_k(&self, ctx: &Context) -> Result<Self, Error> {
        if self.abs() >= *ONE {
            return Err(Error::domain(self.to_string(), "numbers between -1 and 1 exclusive"));
        }

        let wctx = ctx.working();

        // K(k) = pi / (2 * agm(1, sqrt(1 - k^2)))
        let kc = (&*ONE - &wctx.mul_num(self, self)).sqrt(&wctx.nested())?;
        let m = ONE.agm(&kc, &wctx)?;
        let half_pi = &consts::pi(&wctx)? * &*HALF;

        ctx.finalize(wctx.div_num(&half_pi, &m)?, 0)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_agm() {
        let ctx = Context::new(20).unwrap();

        assert_eq!(ctx.agm(1, 2).unwrap().to_string(), "1.4567910310469068692");
        assert_eq!(ctx.agm(24, 6).unwrap().to_string(), "13.458171481725615421");
        assert_eq!(ctx.agm(6, 24).unwrap().to_string(), "13.458171481725615421");
        assert_eq!(ctx.agm(1, "0.5").unwrap().to_string(), "0.72839551552345343459");
        assert_eq!(ctx.agm("0.001", 1000).unwrap().to_string(), "103.32959376570941023");
        assert_eq!(ctx.agm("1e10", 1).unwrap().to_string(), "643448704.76013322929");
        assert_eq!(ctx.agm(2, 2).unwrap().to_string(), "2");
        assert_eq!(ctx.agm(0, 5).unwrap(), Decimal::zero());
        assert_eq!(ctx.agm(5, 0).unwrap(), Decimal::zero());

        assert!(ctx.agm(-1, 2).unwrap_err().is_domain());
        assert!(ctx.agm(1, "-0.5").unwrap_err().is_domain());

        // the limit is reported by the agm loop, not by the square roots inside it
        let ctx = ctx.with_max_iter(Some(2));
        assert_eq!(ctx.agm(1, 2).unwrap_err(), Error::NonConvergence("agm"));
        assert_eq!(ctx.agm(5, 5).unwrap().to_string(), "5");

        let ctx = ctx.with_max_iter(Some(10));
        assert_eq!(ctx.agm(1, 2).unwrap().to_string(), "1.4567910310469068692");
    }

    #[test]
    fn test_elliptic_k() {
        let ctx = Context::new(20).unwrap();

        assert_eq!(ctx.elliptic_k(0).unwrap().to_string(), "1.5707963267948966192");
        assert_eq!(ctx.elliptic_k("0.1").unwrap().to_string(), "1.5747455615173559527");
        assert_eq!(ctx.elliptic_k("0.5").unwrap().to_string(), "1.6857503548125960429");
        assert_eq!(ctx.elliptic_k("-0.5").unwrap().to_string(), "1.6857503548125960429");
        assert_eq!(ctx.elliptic_k("0.9").unwrap().to_string(), "2.2805491384227702046");
        assert_eq!(ctx.elliptic_k("0.999").unwrap().to_string(), "4.4955963958421441704");

        for x in ["1", "-1", "1.5", "-100"] {
            assert!(ctx.elliptic_k(x).unwrap_err().is_domain());
        }

        let ctx = ctx.with_max_iter(Some(1));
        assert_eq!(ctx.elliptic_k("0.5").unwrap_err(), Error::NonConvergence("agm"));
    }
}
