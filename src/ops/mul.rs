//! Multiplication.

use core::ops::Mul;

use crate::num::Decimal;

impl Decimal {
    // exact product, the scale saturates on overflow
    fn mul_exact(&self, d2: &Self) -> Self {
        if self.is_zero() || d2.is_zero() {
            return Decimal::zero();
        }

        let s = self.s.product(d2.s);
        let e = self.e.saturating_add(d2.e);

        Decimal::from_raw_parts(s, &self.m * &d2.m, e).trim()
    }
}

macro_rules! impl_mul {
    ($lhs:ty, $rhs:ty) => {
        impl Mul<$rhs> for $lhs {
            type Output = Decimal;

            fn mul(self, rhs: $rhs) -> Self::Output {
                self.mul_exact(&rhs)
            }
        }
    };
}

impl_mul!(Decimal, Decimal);
impl_mul!(Decimal, &Decimal);
impl_mul!(&Decimal, Decimal);
impl_mul!(&Decimal, &Decimal);
