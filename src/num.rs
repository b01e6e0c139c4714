//! Decimal number definition and basic operations on it.

use core::cmp::Ordering;

use num_bigint::BigInt;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;
use num_traits::Zero;

use crate::common::util::digit_len;
use crate::common::util::pow10;
use crate::defs::Error;
use crate::defs::Scale;
use crate::defs::Sign;

/// 10^19, the largest power of 10 fitting in u64.
const TEN_POW_19: u64 = 10_000_000_000_000_000_000;

/// Arbitrary precision decimal number: `mantissa * 10^scale`.
///
/// All values returned by the library are canonical: the mantissa has no trailing zero digits,
/// and zero is represented by positive sign, zero mantissa, and zero scale.
/// Equality and ordering are numeric.
#[derive(Debug, Clone)]
pub struct Decimal {
    pub(crate) s: Sign,
    pub(crate) m: BigUint,
    pub(crate) e: Scale,
}

impl Decimal {
    /// Returns zero.
    pub fn zero() -> Self {
        Decimal {
            s: Sign::Pos,
            m: BigUint::zero(),
            e: 0,
        }
    }

    /// Returns one.
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Constructs a number from sign `s`, mantissa `m`, and scale `e` without trimming it.
    /// Use `trim` to bring the result to the canonical form.
    pub fn from_raw_parts(s: Sign, m: BigUint, e: Scale) -> Self {
        Decimal { s, m, e }
    }

    /// Returns sign, mantissa, and scale of the number.
    pub fn to_raw_parts(&self) -> (Sign, &BigUint, Scale) {
        (self.s, &self.m, self.e)
    }

    /// Constructs a number from an unsigned integer.
    pub fn from_u64(v: u64) -> Self {
        Decimal::from_raw_parts(Sign::Pos, BigUint::from(v), 0).trim()
    }

    /// Constructs a number from a signed integer.
    pub fn from_i64(v: i64) -> Self {
        let s = if v < 0 { Sign::Neg } else { Sign::Pos };
        Decimal::from_raw_parts(s, BigUint::from(v.unsigned_abs()), 0).trim()
    }

    /// Constructs a number from a big unsigned integer.
    pub fn from_biguint(m: BigUint) -> Self {
        Decimal::from_raw_parts(Sign::Pos, m, 0).trim()
    }

    /// Constructs a number from a big signed integer.
    pub fn from_bigint(v: BigInt) -> Self {
        let (s, m) = v.into_parts();
        let s = if s == num_bigint::Sign::Minus {
            Sign::Neg
        } else {
            Sign::Pos
        };
        Decimal::from_raw_parts(s, m, 0).trim()
    }

    /// Returns the sign of the number.
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns the mantissa of the number.
    pub fn mantissa(&self) -> &BigUint {
        &self.m
    }

    /// Returns the scale of the number.
    pub fn scale(&self) -> Scale {
        self.e
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if the number is greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.m.is_zero() && self.s.is_positive()
    }

    /// Returns true if the number is less than zero.
    pub fn is_negative(&self) -> bool {
        !self.m.is_zero() && self.s.is_negative()
    }

    /// Returns true if the number has no fractional part.
    pub fn is_int(&self) -> bool {
        if self.e >= 0 || self.m.is_zero() {
            true
        } else {
            let k = self.e.unsigned_abs() as usize;
            // the mantissa is less than 10^k
            k < digit_len(&self.m) && (&self.m % pow10(k)).is_zero()
        }
    }

    /// Returns true if the number is 1.
    pub(crate) fn is_one(&self) -> bool {
        self.s.is_positive() && self.e == 0 && self.m == BigUint::from(1u32)
    }

    /// Returns the number of significant digits, i.e. the number of digits in the mantissa.
    pub fn digits(&self) -> usize {
        digit_len(&self.m)
    }

    /// Returns the decimal order of the number: the power of 10 of its most significant digit.
    /// The order of zero is 0.
    pub fn order(&self) -> Scale {
        if self.m.is_zero() {
            0
        } else {
            digit_len(&self.m) as Scale + self.e - 1
        }
    }

    /// Returns the number with the opposite sign.
    pub fn neg(&self) -> Self {
        let mut ret = self.clone();
        if !ret.m.is_zero() {
            ret.s = ret.s.invert();
        }
        ret
    }

    /// Returns the absolute value of the number.
    pub fn abs(&self) -> Self {
        let mut ret = self.clone();
        ret.s = Sign::Pos;
        ret
    }

    /// Removes trailing zero digits of the mantissa increasing the scale,
    /// and collapses any zero into the canonical zero.
    pub fn trim(mut self) -> Self {
        if self.m.is_zero() {
            return Self::zero();
        }

        loop {
            let (q, r) = self.m.div_rem(&BigUint::from(TEN_POW_19));
            if !r.is_zero() {
                break;
            }
            self.m = q;
            self.e += 19;
        }

        let ten = BigUint::from(10u32);
        loop {
            let (q, r) = self.m.div_rem(&ten);
            if !r.is_zero() {
                break;
            }
            self.m = q;
            self.e += 1;
        }

        self
    }

    /// Rounds the number to at most `n` significant digits using rounding half away from zero,
    /// and trims the result.
    pub(crate) fn round_to_digits(self, n: usize) -> Self {
        let n = n.max(1);
        let len = digit_len(&self.m);

        if len <= n {
            return self.trim();
        }

        let k = len - n;
        let d = pow10(k);
        let (mut q, r) = self.m.div_rem(&d);

        if (r << 1usize) >= d {
            q += 1u32;
        }

        Decimal::from_raw_parts(self.s, q, self.e + k as Scale).trim()
    }

    /// Returns the absolute value of the integer part of the number.
    pub(crate) fn int_part(&self) -> BigUint {
        if self.e >= 0 {
            &self.m * pow10(self.e as usize)
        } else {
            let k = self.e.unsigned_abs() as usize;
            if k >= digit_len(&self.m) {
                BigUint::zero()
            } else {
                &self.m / pow10(k)
            }
        }
    }

    /// Returns the value as `u64` if the number is a non-negative integer fitting in `u64`.
    pub(crate) fn to_u64(&self) -> Option<u64> {
        // u64::MAX has 20 digits
        if self.is_negative() || !self.is_int() || self.order() >= 20 {
            None
        } else {
            self.int_part().to_u64()
        }
    }

    /// Returns the nearest integer, halfway cases rounded away from zero.
    pub(crate) fn round_int(&self) -> Self {
        if self.e >= 0 {
            return self.clone();
        }

        // |self| < 0.1
        let k = self.e.unsigned_abs() as usize;
        if k > digit_len(&self.m) {
            return Decimal::zero();
        }

        let d = pow10(k);
        let (mut q, r) = self.m.div_rem(&d);

        if (r << 1usize) >= d {
            q += 1u32;
        }

        Decimal::from_raw_parts(self.s, q, 0).trim()
    }

    /// Raises the number to the integer power `n` exactly.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the scale of the result does not fit in `Scale`.
    pub(crate) fn powi(&self, n: u32) -> Result<Self, Error> {
        let e = self.e.checked_mul(n as Scale).ok_or(Error::ExponentOverflow)?;
        let s = if self.s.is_negative() && n & 1 == 1 {
            Sign::Neg
        } else {
            Sign::Pos
        };

        Ok(Decimal::from_raw_parts(s, self.m.pow(n), e).trim())
    }

    /// Compares absolute values of `self` and `d2`.
    pub fn abs_cmp(&self, d2: &Self) -> Ordering {
        match (self.m.is_zero(), d2.m.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        let o1 = self.order();
        let o2 = d2.order();
        if o1 != o2 {
            return o1.cmp(&o2);
        }

        // same order, hence the scale difference is bounded by the mantissa length
        if self.e > d2.e {
            (&self.m * pow10((self.e - d2.e) as usize)).cmp(&d2.m)
        } else {
            self.m.cmp(&(&d2.m * pow10((d2.e - self.e) as usize)))
        }
    }

    /// Returns a random number with `digits` significant digits and scale in the range [`scale_min`, `scale_max`].
    #[cfg(feature = "random")]
    pub fn random_normal(digits: usize, scale_min: Scale, scale_max: Scale) -> Self {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let mut buf: Vec<u8> = (0..digits.max(1)).map(|_| rng.gen_range(0..10)).collect();
        buf[0] = rng.gen_range(1..10);

        let m = BigUint::from_radix_be(&buf, 10).unwrap_or_else(BigUint::zero);
        let e = rng.gen_range(scale_min..=scale_max);
        let s = if rng.gen::<bool>() { Sign::Neg } else { Sign::Pos };

        Decimal::from_raw_parts(s, m, e).trim()
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.abs_cmp(other),
            (true, true) => other.abs_cmp(self),
        }
    }
}

impl core::ops::Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        Decimal::neg(&self)
    }
}

impl core::ops::Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        Decimal::neg(self)
    }
}
