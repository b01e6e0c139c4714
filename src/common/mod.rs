//! Common items.

pub mod consts;
pub mod util;
