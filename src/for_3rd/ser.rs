//! Serialization of Decimal.
//! A number is serialized as its plain decimal string, which keeps all of its digits.

use serde::{Serialize, Serializer};

use crate::num::Decimal;

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
