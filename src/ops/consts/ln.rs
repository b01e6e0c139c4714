//! Natural logarithms of small integers computed with binary splitting of atanh(1/x).

use num_bigint::BigUint;

use crate::defs::Error;
use crate::num::Decimal;

// p(a, b) / q(a, b) = sum of 1 / ((2k + 1) * x^(2(k - a))) for k in a+1..=b.
fn pqr(a: usize, b: usize, x2: u64) -> (BigUint, BigUint, BigUint) {
    if a == b - 1 {
        let r = BigUint::from(2 * b as u64 + 1);
        let q = &r * x2;
        (BigUint::from(1u32), q, r)
    } else {
        let m = (a + b) / 2;

        let (pa, qa, ra) = pqr(a, m, x2);
        let (pb, qb, rb) = pqr(m, b, x2);

        let p = pa * &qb + pb * &ra;
        let q = qa * qb;
        let r = ra * rb;

        (p, q, r)
    }
}

/// Returns atanh(1/x) with `p` significant digits.
pub(super) fn atanh_inv(x: u32, p: usize) -> Result<Decimal, Error> {
    let x2 = x as u64 * x as u64;

    // each term is smaller than the previous one by at least x^2
    let n = ((p + 2) as f64 / (2.0 * (x as f64).log10())).ceil() as usize + 1;

    let (p_s, q_s, _) = pqr(0, n, x2);

    // atanh(1/x) = (1 + p / q) / x
    let num = Decimal::from_biguint(&q_s + p_s);
    let den = Decimal::from_biguint(q_s * x);

    num.div(&den, p)
}

/// Returns ln(2) with `p` significant digits.
pub(super) fn ln2(p: usize) -> Result<Decimal, Error> {
    let t = atanh_inv(3, p + 1)?;
    Ok((&t + &t).round_to_digits(p))
}

/// Returns ln(3) with `p` significant digits.
pub(super) fn ln3(p: usize) -> Result<Decimal, Error> {
    // ln(3) = ln(2) + ln(3/2) = ln(2) + 2 atanh(1/5)
    let l2 = ln2(p + 1)?;
    let t = atanh_inv(5, p + 1)?;
    Ok((l2 + &t + &t).round_to_digits(p))
}

/// Returns ln(10) with `p` significant digits.
pub(super) fn ln10(p: usize) -> Result<Decimal, Error> {
    // ln(10) = 3 ln(2) + ln(10/8) = 3 ln(2) + 2 atanh(1/9)
    let l2 = ln2(p + 2)?;
    let t = atanh_inv(9, p + 2)?;
    Ok((&l2 + &l2 + &l2 + &t + &t).round_to_digits(p))
}
