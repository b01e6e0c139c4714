//! Decimal number formatting and parsing.

use core::fmt::Display;
use core::str::FromStr;

use itertools::repeat_n;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::defs::Error;
use crate::num::Decimal;
use crate::parser;

impl Display for Decimal {
    /// Formats the number as a plain decimal string without exponent.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digits = self.m.to_str_radix(10);

        let mut mstr = String::new();
        if self.is_negative() {
            mstr.push('-');
        }

        if self.m.is_zero() {
            mstr.push('0');
        } else if self.e >= 0 {
            mstr.push_str(&digits);
            mstr.extend(repeat_n('0', self.e as usize));
        } else {
            let frac_len = self.e.unsigned_abs() as usize;
            if digits.len() > frac_len {
                let (int, frac) = digits.split_at(digits.len() - frac_len);
                mstr.push_str(int);
                mstr.push('.');
                mstr.push_str(frac);
            } else {
                mstr.push_str("0.");
                mstr.extend(repeat_n('0', frac_len - digits.len()));
                mstr.push_str(&digits);
            }
        }

        f.write_str(&mstr)
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Parses a decimal number, e.g. `-123.45`, `.5`, `1e-10`, `+6.02E23`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ps = parser::parse(s)?;
        let (sign, digits, e) = ps.raw_parts();

        let m = if digits.is_empty() {
            BigUint::zero()
        } else {
            BigUint::from_radix_be(digits, 10).ok_or_else(|| Error::domain(s, "decimal numbers"))?
        };

        Ok(Decimal::from_raw_parts(sign, m, e).trim())
    }
}
