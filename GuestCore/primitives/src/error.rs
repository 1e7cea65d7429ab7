//! Error codes returned across the host/guest boundary.
//!
//! Host functions that the guest imports return `i32` codes. `0` = OK,
//! non-zero = error. The repr values are part of the ABI.

use core::fmt;

/// Host function result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    Ok = 0,
    BadPointer = 1,
    InvalidEncoding = 2,
    Internal = 3,
}

impl ErrorCode {
    /// Return the i32 representation of this code.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::BadPointer => write!(f, "ERR_BAD_POINTER"),
            Self::InvalidEncoding => write!(f, "ERR_INVALID_ENCODING"),
            Self::Internal => write!(f, "ERR_INTERNAL"),
        }
    }
}
