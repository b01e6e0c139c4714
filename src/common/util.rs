//! Auxiliary functions.

use num_bigint::BigUint;
use num_traits::Pow;
use num_traits::Zero;

/// Returns 10^n.
pub fn pow10(n: usize) -> BigUint {
    Pow::pow(BigUint::from(10u32), n)
}

/// Returns the number of decimal digits in `m`. Zero has one digit.
pub fn digit_len(m: &BigUint) -> usize {
    if m.is_zero() {
        return 1;
    }

    // number of digits of 2^(bits-1), possibly off by one due to rounding of the float product
    let bits = m.bits();
    let mut d = ((bits - 1) as f64 * core::f64::consts::LOG10_2) as usize + 1;

    while d > 1 && *m < pow10(d - 1) {
        d -= 1;
    }

    while *m >= pow10(d) {
        d += 1;
    }

    d
}

/// Returns the number of decimal digits in `n`.
pub fn digit_len_u64(n: u64) -> usize {
    n.checked_ilog10().unwrap_or(0) as usize + 1
}
