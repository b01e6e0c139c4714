//! Conversion of native numbers, big integers, and strings into `Decimal`.

use core::str::FromStr;

use num_bigint::BigInt;
use num_bigint::BigUint;

use crate::defs::Error;
use crate::defs::Sign;
use crate::num::Decimal;

/// A value that can be brought to the canonical decimal form.
pub trait IntoDecimal {
    /// Converts `self` into a canonical `Decimal`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the value is a non-finite float, or a string which is not a decimal number.
    ///  - ExponentOverflow: the exponent of a string does not fit in `Scale`.
    fn into_decimal(self) -> Result<Decimal, Error>;
}

/// Brings `x` to the canonical form: no trailing zeroes in the mantissa, and a single zero.
///
/// ## Errors
///
///  - Domain: `x` is a non-finite float, or a string which is not a decimal number.
///  - ExponentOverflow: the exponent of a string does not fit in `Scale`.
pub fn normalize<T: IntoDecimal>(x: T) -> Result<Decimal, Error> {
    x.into_decimal()
}

impl IntoDecimal for Decimal {
    fn into_decimal(self) -> Result<Decimal, Error> {
        Ok(self.trim())
    }
}

impl IntoDecimal for &Decimal {
    fn into_decimal(self) -> Result<Decimal, Error> {
        Ok(self.clone().trim())
    }
}

macro_rules! impl_int_conv {
    ($($t:ty),*) => {
        $(
            impl IntoDecimal for $t {
                fn into_decimal(self) -> Result<Decimal, Error> {
                    Ok(Decimal::from(self))
                }
            }

            impl From<$t> for Decimal {
                fn from(v: $t) -> Self {
                    let s = if v < 0 { Sign::Neg } else { Sign::Pos };
                    Decimal::from_raw_parts(s, BigUint::from(v.unsigned_abs()), 0).trim()
                }
            }
        )*
    };
}

macro_rules! impl_uint_conv {
    ($($t:ty),*) => {
        $(
            impl IntoDecimal for $t {
                fn into_decimal(self) -> Result<Decimal, Error> {
                    Ok(Decimal::from(self))
                }
            }

            impl From<$t> for Decimal {
                fn from(v: $t) -> Self {
                    Decimal::from_raw_parts(Sign::Pos, BigUint::from(v), 0).trim()
                }
            }
        )*
    };
}

impl_int_conv!(i8, i16, i32, i64, i128, isize);
impl_uint_conv!(u8, u16, u32, u64, u128, usize);

impl IntoDecimal for BigUint {
    fn into_decimal(self) -> Result<Decimal, Error> {
        Ok(Decimal::from_biguint(self))
    }
}

impl IntoDecimal for &BigUint {
    fn into_decimal(self) -> Result<Decimal, Error> {
        Ok(Decimal::from_biguint(self.clone()))
    }
}

impl IntoDecimal for BigInt {
    fn into_decimal(self) -> Result<Decimal, Error> {
        Ok(Decimal::from_bigint(self))
    }
}

impl IntoDecimal for &BigInt {
    fn into_decimal(self) -> Result<Decimal, Error> {
        Ok(Decimal::from_bigint(self.clone()))
    }
}

impl From<BigUint> for Decimal {
    fn from(v: BigUint) -> Self {
        Decimal::from_biguint(v)
    }
}

impl From<BigInt> for Decimal {
    fn from(v: BigInt) -> Self {
        Decimal::from_bigint(v)
    }
}

impl Decimal {
    /// Converts `f` to a decimal number using the shortest decimal representation
    /// which converts back to the same `f64`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `f` is NaN or infinite.
    pub fn from_f64(f: f64) -> Result<Self, Error> {
        if !f.is_finite() {
            return Err(Error::domain(format!("{}", f), "finite numbers"));
        }

        Decimal::from_str(&format!("{:e}", f))
    }

    /// Converts `f` to a decimal number using the shortest decimal representation
    /// which converts back to the same `f32`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `f` is NaN or infinite.
    pub fn from_f32(f: f32) -> Result<Self, Error> {
        if !f.is_finite() {
            return Err(Error::domain(format!("{}", f), "finite numbers"));
        }

        Decimal::from_str(&format!("{:e}", f))
    }
}

impl IntoDecimal for f64 {
    fn into_decimal(self) -> Result<Decimal, Error> {
        Decimal::from_f64(self)
    }
}

impl IntoDecimal for f32 {
    fn into_decimal(self) -> Result<Decimal, Error> {
        Decimal::from_f32(self)
    }
}

impl IntoDecimal for &str {
    fn into_decimal(self) -> Result<Decimal, Error> {
        Decimal::from_str(self)
    }
}

impl IntoDecimal for String {
    fn into_decimal(self) -> Result<Decimal, Error> {
        Decimal::from_str(&self)
    }
}

impl IntoDecimal for &String {
    fn into_decimal(self) -> Result<Decimal, Error> {
        Decimal::from_str(self)
    }
}
