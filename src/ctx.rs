//! All operations on numbers are performed in some context.

use core::sync::atomic::AtomicUsize;
use core::sync::atomic::Ordering;

use num_bigint::BigUint;

use crate::conv::IntoDecimal;
use crate::defs::Error;
use crate::defs::Scale;
use crate::defs::Sign;
use crate::defs::DEFAULT_P;
use crate::defs::GUARD_DIGITS;
use crate::defs::PURE_GUARD_DIGITS;
use crate::defs::WORK_GUARD_DIGITS;
use crate::num::Decimal;

static PRECISION: AtomicUsize = AtomicUsize::new(DEFAULT_P);

/// Sets the process-wide precision used by contexts created with `Context::default()`.
/// Contexts created earlier are not affected.
///
/// ## Errors
///
///  - Domain: `p` is 0.
pub fn set_precision(p: usize) -> Result<(), Error> {
    if p == 0 {
        return Err(Error::domain("0", "positive precision"));
    }

    PRECISION.store(p, Ordering::Relaxed);
    Ok(())
}

/// Returns the process-wide precision in significant decimal digits.
pub fn precision() -> usize {
    PRECISION.load(Ordering::Relaxed)
}

/// Context contains parameters for all operations: precision in significant decimal digits,
/// and an optional limit on the number of iterations of iterative algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    p: usize,
    max_iter: Option<usize>,
}

impl Context {
    /// Creates a new context with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `p` is 0.
    pub fn new(p: usize) -> Result<Self, Error> {
        if p == 0 {
            return Err(Error::domain("0", "positive precision"));
        }

        Ok(Context { p, max_iter: None })
    }

    /// Sets the limit on the number of iterations of every iterative loop.
    /// An algorithm exceeding the limit fails with `Error::NonConvergence`.
    pub fn with_max_iter(mut self, max_iter: Option<usize>) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Returns the precision of the context.
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns the iteration limit of the context.
    pub fn max_iter(&self) -> Option<usize> {
        self.max_iter
    }

    /// Returns the context with precision `p` and the same iteration limit.
    pub(crate) fn with_precision(&self, p: usize) -> Self {
        Context {
            p: p.max(1),
            max_iter: self.max_iter,
        }
    }

    /// Returns the context with precision increased by `extra` digits.
    pub(crate) fn extended(&self, extra: usize) -> Self {
        self.with_precision(self.p + extra)
    }

    /// Returns the context iterative algorithms compute in.
    pub(crate) fn working(&self) -> Self {
        self.extended(WORK_GUARD_DIGITS)
    }

    /// Returns the context for computations nested in the loop of an iterative algorithm.
    /// Only the outer loop counts towards the iteration limit.
    pub(crate) fn nested(&self) -> Self {
        self.with_max_iter(None)
    }

    /// Rounds `x` to the precision of the context and removes trailing zeroes.
    /// `extra` adjusts the number of kept digits, and the result always keeps at least one digit.
    ///
    /// ## Errors
    ///
    ///  - Domain: `x` can't be converted to a decimal number.
    pub fn finalize<T: IntoDecimal>(&self, x: T, extra: i64) -> Result<Decimal, Error> {
        let n = (self.p as i64).saturating_add(extra).max(1) as usize;
        Ok(x.into_decimal()?.round_to_digits(n))
    }

    /// Rounds `x` to the precision of the context.
    pub(crate) fn round(&self, x: Decimal) -> Decimal {
        x.round_to_digits(self.p)
    }

    /// Returns the convergence threshold for an iterate `x`: one unit of the last significant digit.
    pub(crate) fn tolerance(&self, x: &Decimal) -> Decimal {
        let e = x.order() - self.p as Scale;
        Decimal::from_raw_parts(Sign::Pos, BigUint::from(1u32), e)
    }

    /// Returns true if the iterates `prev` and `next` differ by less than the tolerance.
    pub(crate) fn converged(&self, prev: &Decimal, next: &Decimal) -> bool {
        let delta = next - prev;
        delta.abs_cmp(&self.tolerance(next)).is_lt()
    }

    /// Returns the product of `a` and `b` rounded to the precision of the context.
    pub(crate) fn mul_num(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.round(a * b)
    }

    /// Returns the quotient of `a` and `b` with one guard digit.
    pub(crate) fn div_num(&self, a: &Decimal, b: &Decimal) -> Result<Decimal, Error> {
        a.div(b, self.p + PURE_GUARD_DIGITS)
    }
}

impl Default for Context {
    /// Returns the context with the process-wide precision and no iteration limit.
    fn default() -> Self {
        Context {
            p: precision(),
            max_iter: None,
        }
    }
}

macro_rules! impl_fun_unary {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        pub fn $fname<T: IntoDecimal>(&self, a: T) -> Result<Decimal, Error> {
            a.into_decimal()?.$fname(self)
        }
    };
}

macro_rules! impl_fun_binary {
    ($comment:literal, $fname:ident, $op:ident) => {
        #[doc=$comment]
        pub fn $fname<T: IntoDecimal, U: IntoDecimal>(&self, a: T, b: U) -> Result<Decimal, Error> {
            a.into_decimal()?.$op(&b.into_decimal()?, self)
        }
    };
}

impl Context {
    /// Returns the sum of `a` and `b`. The result is exact.
    pub fn add<T: IntoDecimal, U: IntoDecimal>(&self, a: T, b: U) -> Result<Decimal, Error> {
        Ok(a.into_decimal()? + b.into_decimal()?)
    }

    /// Returns the difference of `a` and `b`. The result is exact.
    pub fn subtract<T: IntoDecimal, U: IntoDecimal>(&self, a: T, b: U) -> Result<Decimal, Error> {
        Ok(a.into_decimal()? - b.into_decimal()?)
    }

    /// Returns the product of `a` and `b`. The result is exact.
    pub fn multiply<T: IntoDecimal, U: IntoDecimal>(&self, a: T, b: U) -> Result<Decimal, Error> {
        Ok(a.into_decimal()? * b.into_decimal()?)
    }

    /// Returns the quotient of `a` and `b` with the precision of the context plus 11 guard digits.
    ///
    /// ## Errors
    ///
    ///  - Domain: `b` is zero.
    pub fn divide<T: IntoDecimal, U: IntoDecimal>(&self, a: T, b: U) -> Result<Decimal, Error> {
        a.into_decimal()?.div(&b.into_decimal()?, self.p + GUARD_DIGITS)
    }

    /// Returns the quotient of `a` and `b` with the precision of the context plus 1 guard digit.
    /// Intended for intermediate results which are finalized by the caller.
    ///
    /// ## Errors
    ///
    ///  - Domain: `b` is zero.
    pub fn divide_pure<T: IntoDecimal, U: IntoDecimal>(&self, a: T, b: U) -> Result<Decimal, Error> {
        a.into_decimal()?.div(&b.into_decimal()?, self.p + PURE_GUARD_DIGITS)
    }

    impl_fun_binary!("Returns `a` to the power of `b`.", power, pow);
    impl_fun_binary!("Returns the arithmetic-geometric mean of `a` and `b`.", agm, agm);

    impl_fun_unary!("Returns the square root of a number.", sqrt);
    impl_fun_unary!("Returns the cube root of a number.", cbrt);
    impl_fun_unary!("Returns the natural logarithm of a number.", ln);
    impl_fun_unary!("Returns the natural logarithm of 1 plus a number.", ln1p);
    impl_fun_unary!("Returns the logarithm base two of a number.", log2);
    impl_fun_unary!("Returns the logarithm base ten of a number.", log10);
    impl_fun_unary!("Returns e to the power of a number.", exp);
    impl_fun_unary!("Returns e to the power of a number minus 1.", expm1);

    impl_fun_unary!("Returns the factorial of a non-negative integer.", factorial);
    impl_fun_unary!("Returns the double factorial of a non-negative integer.", double_factorial);
    impl_fun_unary!("Returns the product of the factorials of 1 to a non-negative integer.", super_factorial);
    impl_fun_unary!("Returns the gamma function of a number.", gamma);

    impl_fun_unary!("Returns the complete elliptic integral of the first kind of a number.", elliptic_k);
    impl_fun_unary!("Returns the principal branch of the Lambert W function of a number.", lambert_w);
    impl_fun_unary!("Returns the solution of `y = a^y` for a number `a`.", xy);

    /// Returns the value of the pi number with the precision of the context.
    pub fn const_pi(&self) -> Result<Decimal, Error> {
        crate::ops::consts::pi(self)
    }

    /// Returns the value of the natural logarithm of 2 with the precision of the context.
    pub fn const_ln2(&self) -> Result<Decimal, Error> {
        crate::ops::consts::ln2(self)
    }

    /// Returns the value of the natural logarithm of 10 with the precision of the context.
    pub fn const_ln10(&self) -> Result<Decimal, Error> {
        crate::ops::consts::ln10(self)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_context() {
        assert!(Context::new(0).unwrap_err().is_domain());
        assert!(set_precision(0).unwrap_err().is_domain());

        let ctx = Context::new(5).unwrap();
        assert_eq!(ctx.precision(), 5);
        assert_eq!(ctx.max_iter(), None);
        assert_eq!(ctx.with_max_iter(Some(3)).max_iter(), Some(3));
        assert_eq!(ctx.working().precision(), 5 + WORK_GUARD_DIGITS);

        let nctx = ctx.with_max_iter(Some(3)).working().nested();
        assert_eq!(nctx.max_iter(), None);
        assert_eq!(nctx.precision(), 5 + WORK_GUARD_DIGITS);

        let old = precision();
        set_precision(42).unwrap();
        let snapshot = Context::default();
        set_precision(7).unwrap();
        assert_eq!(snapshot.precision(), 42);
        assert_eq!(Context::default().precision(), 7);
        set_precision(old).unwrap();
    }

    #[test]
    fn test_finalize() {
        let ctx = Context::new(5).unwrap();

        assert_eq!(ctx.finalize("3.14159265", 0).unwrap().to_string(), "3.1416");
        assert_eq!(ctx.finalize("3.14159265", 2).unwrap().to_string(), "3.141593");
        assert_eq!(ctx.finalize("3.14159265", -3).unwrap().to_string(), "3.1");
        assert_eq!(ctx.finalize("3.14159265", -100).unwrap().to_string(), "3");
        assert_eq!(ctx.finalize("-99999.5", 0).unwrap().to_string(), "-100000");
        assert_eq!(ctx.finalize("1.2000", 0).unwrap().to_string(), "1.2");
        assert_eq!(ctx.finalize("123456789", 0).unwrap().to_string(), "123460000");
        assert_eq!(ctx.finalize(0, 0).unwrap(), Decimal::zero());
        assert!(ctx.finalize("x", 0).unwrap_err().is_domain());
    }

    #[test]
    fn test_tolerance() {
        let ctx = Context::new(10).unwrap();
        let tol = ctx.tolerance(&Decimal::from_u64(12345));
        assert_eq!(tol.to_string(), "0.000001");
        assert_eq!(ctx.tolerance(&Decimal::zero()).to_string(), "0.0000000001");

        let a: Decimal = "1.00000000001".parse().unwrap();
        let b: Decimal = "1.0000000001".parse().unwrap();
        assert!(ctx.converged(&a, &Decimal::one()));
        assert!(!ctx.converged(&b, &Decimal::one()));
    }
}
