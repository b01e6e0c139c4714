//! Implementations of traits from third-party crates.

mod de;
mod ser;
