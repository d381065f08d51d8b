use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::num::ParseIntError;

use thiserror::Error;

// -----------------------------------------------------------------------------
// ErrorCode

/// The two user visible failure categories of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCode {
    /// The path does not resolve.
    NotFound = 1,
    /// The value exists but cannot become the requested type.
    TypeMismatch = 2,
}

impl ErrorCode {
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ErrorCode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_u8(), f)
    }
}

// -----------------------------------------------------------------------------
// Cause

/// The failure a [`QueryError`] wraps.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Cause {
    #[error(transparent)]
    Query(Box<QueryError>),

    #[error(transparent)]
    ParseInt(#[from] ParseIntError),
}

impl From<QueryError> for Cause {
    #[inline]
    fn from(value: QueryError) -> Self {
        Self::Query(Box::new(value))
    }
}

// -----------------------------------------------------------------------------
// QueryError

/// An error returned by a query.
///
/// Each level of the path adds its own detail while the failure propagates
/// upwards, keeping the inner error as [`cause`](QueryError::cause). The
/// rendered message lists the details from the innermost outwards:
///
/// ```text
/// QueryError[1]: [map] value not found by key zip -> [struct] error query keys: [zip]
/// ```
///
/// # Examples
///
/// ```
/// use vc_query::{ErrorCode, QueryError};
///
/// let inner = QueryError::not_found("[map] value not found by key zip");
/// let outer = inner.wrap("[struct] error query keys: [zip]");
///
/// assert_eq!(outer.code(), ErrorCode::NotFound);
/// assert_eq!(
///     outer.to_string(),
///     "QueryError[1]: [map] value not found by key zip -> [struct] error query keys: [zip]",
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub struct QueryError {
    code: ErrorCode,
    detail: String,
    #[source]
    cause: Option<Cause>,
}

impl QueryError {
    #[inline]
    pub fn new(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
            cause: None,
        }
    }

    #[inline]
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, detail)
    }

    #[inline]
    pub fn type_mismatch(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::TypeMismatch, detail)
    }

    /// Attaches the failure that led to this error.
    #[inline]
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Wraps `self` in a new error with the same code and the given detail.
    #[inline]
    pub fn wrap(self, detail: impl Into<String>) -> Self {
        Self::new(self.code, detail).with_cause(self)
    }

    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// The detail added at this level.
    #[inline]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[inline]
    pub const fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Returns the innermost [`QueryError`] of the chain.
    pub fn root(&self) -> &QueryError {
        let mut current = self;
        while let Some(Cause::Query(inner)) = &current.cause {
            current = inner;
        }
        current
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }

    #[inline]
    pub fn is_type_mismatch(&self) -> bool {
        self.code == ErrorCode::TypeMismatch
    }

    /// Writes the detail chain, returns `false` if nothing was written.
    fn write_chain(&self, f: &mut fmt::Formatter<'_>) -> Result<bool, fmt::Error> {
        let mut written = match &self.cause {
            Some(Cause::Query(inner)) => inner.write_chain(f)?,
            Some(Cause::ParseInt(error)) => {
                write!(f, "{error}")?;
                true
            }
            None => false,
        };

        if !self.detail.is_empty() {
            if written {
                f.write_str(" -> ")?;
            }
            f.write_str(&self.detail)?;
            written = true;
        }

        Ok(written)
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QueryError[{}]: ", self.code)?;
        self.write_chain(f).map(|_| ())
    }
}

// -----------------------------------------------------------------------------
// Tests
