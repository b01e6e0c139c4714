//! Factorial, double factorial, and super factorial.

use num_bigint::BigUint;
use num_traits::One;

use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;

const FACTORIALS: [u32; 7] = [1, 1, 2, 6, 24, 120, 720];

impl Decimal {
    // Returns the number as u64 if it is a non-negative integer.
    fn to_factorial_arg(&self) -> Result<u64, Error> {
        if self.is_negative() || !self.is_int() {
            return Err(Error::domain(self.to_string(), "non-negative integers"));
        }

        self.to_u64().ok_or(Error::ExponentOverflow)
    }

    /// Computes the factorial of a non-negative integer. The result is exact.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is not a non-negative integer.
    ///  - ExponentOverflow: the number does not fit in `u64`.
    pub(crate) fn factorial(&self, _ctx: &Context) -> Result<Self, Error> {
        let n = self.to_factorial_arg()?;
        Ok(Decimal::from_biguint(factorial(n)))
    }

    /// Computes the double factorial of a non-negative integer. The result is exact.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is not a non-negative integer.
    ///  - ExponentOverflow: the number does not fit in `u64`.
    pub(crate) fn double_factorial(&self, _ctx: &Context) -> Result<Self, Error> {
        let n = self.to_factorial_arg()?;
        Ok(Decimal::from_biguint(double_factorial(n)))
    }

    /// Computes the product of factorials of 1 to a non-negative integer. The result is exact.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is not a non-negative integer.
    ///  - ExponentOverflow: the number does not fit in `u64`.
    pub(crate) fn super_factorial(&self, _ctx: &Context) -> Result<Self, Error> {
        let n = self.to_factorial_arg()?;
        Ok(Decimal::from_biguint(super_factorial(n)))
    }
}

/// n! = 2^(n/2) * (n-1)!! * (n/2)! for even n.
pub(crate) fn factorial(n: u64) -> BigUint {
    if n < FACTORIALS.len() as u64 {
        return BigUint::from(FACTORIALS[n as usize]);
    }

    if n % 2 == 0 {
        let k = n / 2;
        (double_factorial(n - 1) << k) * factorial(k)
    } else {
        factorial(n - 1) * n
    }
}

fn double_factorial(n: u64) -> BigUint {
    if n < 2 {
        return BigUint::one();
    }

    match (n + 1) % 4 {
        0 => {
            // pairs (n + 1 - k) * k for odd k
            let m = n as u128 + 1;
            let p = (n as u128 - 1) / 2;
            let mut prod = BigUint::one();
            let mut k = 1u128;
            while k <= p {
                prod *= (m - k) * k;
                k += 2;
            }
            prod
        }
        2 => double_factorial(n - 2) * n,
        _ => factorial(n / 2) << (n / 2),
    }
}

fn super_factorial(n: u64) -> BigUint {
    if n < 2 {
        return BigUint::one();
    }

    // even part of the product: 2! * 3! * 4! * 5! * ... = prod2 * prod^2 * ...
    let m = if n % 2 == 0 { n } else { n - 1 };

    let mut prod = BigUint::one();
    let mut fact = BigUint::one();
    let mut prod2 = BigUint::one();

    let mut i = 2;
    while i < m {
        fact *= i * (i + 1);
        prod2 *= i;
        prod *= &fact;
        i += 2;
    }

    let prod_sq = &prod * &prod;
    if n % 2 == 0 {
        prod2 * n * prod_sq
    } else {
        prod2 * prod_sq * fact * m * (m + 1) * m
    }
}
