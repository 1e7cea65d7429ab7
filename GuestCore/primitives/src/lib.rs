//! `badfactors-primitives` — foundational types for the badfactors guest and host.
//!
//! This crate provides the divisor engine, the host/guest function-slot
//! contract, and the `i32` error codes that cross the boundary. It is shared
//! by the WASM guest and the sandbox host.
//!
//! Supports `#![no_std]` for WASM guest compatibility (use `default-features = false`).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod abi;
pub mod divisors;
pub mod error;

// Re-export commonly used types at the crate root for convenience.
pub use abi::{
    SlotDescriptor, SlotDirection, SlotSignature, SLOTS, SLOT_NAMESPACE,
    multiply,
};
pub use divisors::{
    Abundance, DivisorError, DivisorMode, proper_divisors, proper_divisors_paired,
    proper_divisors_with,
};
pub use error::ErrorCode;
