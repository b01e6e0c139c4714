//! Deserialization of Decimal.

use core::fmt::Formatter;
use core::str::FromStr;

use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

use crate::num::Decimal;

pub struct DecimalVisitor {}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor {})
    }
}

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "a decimal number as `String` or `Number`")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Decimal::from_u64(v))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Decimal::from_i64(v))
    }

    // shortest representation which round-trips
    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Decimal::from_f64(v).map_err(Error::custom)
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Decimal::from_str(v).map_err(Error::custom)
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}
