//! Pi number computed with the Chudnovsky series using binary splitting.

use num_bigint::BigInt;
use num_bigint::BigUint;

use crate::common::util::pow10;
use crate::defs::Error;
use crate::defs::Scale;
use crate::defs::Sign;
use crate::num::Decimal;

// 640320^3 / 24
const C3_24: u64 = 10939058860032000;

fn pqt(a: u64, b: u64) -> (BigInt, BigInt, BigInt) {
    if a == b - 1 {
        let p = -BigInt::from((6 * b - 5) * (2 * b - 1) * (6 * b - 1));
        let q = BigInt::from(b) * b * b * C3_24;
        let t = &p * (13591409 + 545140134 * b);
        (p, q, t)
    } else {
        let m = (a + b) / 2;

        let (pa, qa, ta) = pqt(a, m);
        let (pb, qb, tb) = pqt(m, b);

        let t = ta * &qb + &pa * tb;
        let p = pa * pb;
        let q = qa * qb;

        (p, q, t)
    }
}

/// Returns pi with `p` significant digits.
pub(super) fn pi(p: usize) -> Result<Decimal, Error> {
    // every term adds about 14 digits
    let n = p as u64 / 14 + 2;
    let (_, q, t) = pqt(0, n);

    // pi = 426880 * sqrt(10005) * Q / (13591409 * Q + T)
    let shift = p + 5;
    let sqrt_c = (BigUint::from(10005u32) * pow10(2 * shift)).sqrt();

    let den = Decimal::from_bigint(&q * 13591409u32 + t);
    let q = q.magnitude() * sqrt_c * 426880u32;
    let num = Decimal::from_raw_parts(Sign::Pos, q, -(shift as Scale));

    num.div(&den, p)
}
