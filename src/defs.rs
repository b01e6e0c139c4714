//! Definitions.

use core::fmt::Display;

/// A decimal exponent (scale).
pub type Scale = i64;

/// Default precision in significant decimal digits.
pub const DEFAULT_P: usize = 100;

/// Number of guard digits produced by division.
pub const GUARD_DIGITS: usize = 11;

/// Number of guard digits produced by division when the caller finalizes the result itself.
pub const PURE_GUARD_DIGITS: usize = 1;

/// Number of additional digits iterative algorithms compute with before finalizing.
pub const WORK_GUARD_DIGITS: usize = 10;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns the sign of a product of two numbers with signs `self` and `s2`.
    pub fn product(&self, s2: Sign) -> Self {
        if *self == s2 {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }
}

/// Argument of a function lies outside of the function's domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    expr: String,
    domain: &'static str,
}

impl DomainError {
    pub(crate) fn new(expr: impl Into<String>, domain: &'static str) -> Self {
        DomainError {
            expr: expr.into(),
            domain,
        }
    }

    /// Returns the offending expression.
    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// Returns the description of the valid domain.
    pub fn domain(&self) -> &'static str {
        self.domain
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} is out of domain, expected {}", self.expr, self.domain)
    }
}

/// Possible errors.
#[derive(Debug, Clone)]
pub enum Error {
    /// The argument is outside of the domain of the function.
    Domain(DomainError),

    /// An iterative algorithm exceeded the iteration limit set in the context.
    NonConvergence(&'static str),

    /// An exponent or an integer argument does not fit the range supported by the operation.
    ExponentOverflow,
}

impl Error {
    pub(crate) fn domain(expr: impl Into<String>, domain: &'static str) -> Self {
        Error::Domain(DomainError::new(expr, domain))
    }

    /// Returns true if `self` is a domain error.
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain(_))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Domain(e) => write!(f, "domain error: {}", e),
            Error::NonConvergence(op) => write!(f, "{} did not converge", op),
            Error::ExponentOverflow => f.write_str("exponent overflow"),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Domain(l0), Self::Domain(r0)) => l0 == r0,
            (Self::NonConvergence(l0), Self::NonConvergence(r0)) => l0 == r0,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl From<DomainError> for Error {
    fn from(e: DomainError) -> Self {
        Error::Domain(e)
    }
}
