//! Addition and subtraction.

use core::cmp::Ordering;
use core::ops::Add;
use core::ops::Sub;

use num_bigint::BigUint;

use crate::common::util::pow10;
use crate::defs::Scale;
use crate::num::Decimal;

impl Decimal {
    // add if op >= 0, subtract if op < 0
    fn add_sub(&self, d2: &Self, op: i8) -> Self {
        let s2 = if op < 0 { d2.s.invert() } else { d2.s };

        if d2.is_zero() {
            return self.clone().trim();
        }

        if self.is_zero() {
            return Decimal::from_raw_parts(s2, d2.m.clone(), d2.e).trim();
        }

        // bring both numbers to the smaller scale
        let e = self.e.min(d2.e);
        let m1 = aligned(&self.m, self.e - e);
        let m2 = aligned(&d2.m, d2.e - e);

        if self.s == s2 {
            Decimal::from_raw_parts(self.s, m1 + m2, e).trim()
        } else {
            match m1.cmp(&m2) {
                Ordering::Greater => Decimal::from_raw_parts(self.s, m1 - m2, e).trim(),
                Ordering::Less => Decimal::from_raw_parts(s2, m2 - m1, e).trim(),
                Ordering::Equal => Decimal::zero(),
            }
        }
    }
}

fn aligned(m: &BigUint, shift: Scale) -> BigUint {
    if shift == 0 {
        m.clone()
    } else {
        m * pow10(shift as usize)
    }
}

macro_rules! impl_add_sub {
    ($trait:ident, $fname:ident, $op:literal) => {
        impl $trait<Decimal> for Decimal {
            type Output = Decimal;

            fn $fname(self, rhs: Decimal) -> Self::Output {
                self.add_sub(&rhs, $op)
            }
        }

        impl $trait<&Decimal> for Decimal {
            type Output = Decimal;

            fn $fname(self, rhs: &Decimal) -> Self::Output {
                self.add_sub(rhs, $op)
            }
        }

        impl $trait<Decimal> for &Decimal {
            type Output = Decimal;

            fn $fname(self, rhs: Decimal) -> Self::Output {
                self.add_sub(&rhs, $op)
            }
        }

        impl $trait<&Decimal> for &Decimal {
            type Output = Decimal;

            fn $fname(self, rhs: &Decimal) -> Self::Output {
                self.add_sub(rhs, $op)
            }
        }
    };
}

impl_add_sub!(Add, add, 1);
impl_add_sub!(Sub, sub, -1);
