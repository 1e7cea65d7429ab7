//! Host-side error types for the badfactors sandbox.
//!
//! `HostError` is returned by host functions the guest imports and is
//! converted to an `i32` code before it crosses the boundary.
//! `BindingError` is returned while building a [`BindingTable`](crate::BindingTable).

use badfactors_primitives::ErrorCode;
use std::fmt;

/// Host-side error type returned by host functions.
///
/// Guests see the `i32` error code via [`to_error_code`](HostError::to_error_code).
/// The `Internal` variant is mapped to `ErrorCode::Internal` for the guest
/// but carries a descriptive message for host-side debugging.
#[derive(Debug, Clone)]
pub enum HostError {
    /// A code defined by the boundary ABI.
    Code(ErrorCode),
    /// An internal host error not directly mapped to an ABI code.
    Internal(String),
}

impl HostError {
    /// Convert to the `i32` error code returned to the WASM guest.
    pub fn to_error_code(&self) -> i32 {
        match self {
            Self::Code(code) => code.as_i32(),
            Self::Internal(_) => ErrorCode::Internal as i32,
        }
    }

    /// Create a bad-pointer error.
    pub fn bad_pointer() -> Self {
        Self::Code(ErrorCode::BadPointer)
    }

    /// Create an invalid-encoding error.
    pub fn invalid_encoding() -> Self {
        Self::Code(ErrorCode::InvalidEncoding)
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "host error: {}", code),
            Self::Internal(msg) => write!(f, "internal host error: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

impl From<ErrorCode> for HostError {
    fn from(code: ErrorCode) -> Self {
        Self::Code(code)
    }
}

/// Error building a binding table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// No slot with this name is declared.
    #[error("unknown slot: {0}")]
    UnknownSlot(String),

    /// The slot exists but the guest implements it; the host cannot bind it.
    #[error("slot '{0}' is an export and cannot be bound by the host")]
    NotAnImport(String),

    /// The slot already has a binding.
    #[error("slot '{0}' is already bound")]
    AlreadyBound(String),

    /// The import slot has no binding.
    #[error("import slot '{0}' is not bound")]
    Unbound(String),
}
