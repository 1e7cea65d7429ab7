//! `badfactors-hostapi` — host-side boundary types for the badfactors WASM sandbox.
//!
//! This crate defines what the host supplies to a guest. It provides:
//!
//! - `HostImports` trait — typed implementation of the import slots
//! - `BindingTable` — immutable map from import slot name to host function
//! - `OutputChannel` trait — sink for the guest's diagnostic line
//! - `MemOutput` / `TracingOutput` / `NullOutput` — output channel impls
//! - `HostError` / `BindingError` — host-side error types
//!
//! The slot contract itself (names, directions, signatures) lives in
//! `badfactors-primitives::abi`.

pub mod error;
pub mod bindings;
pub mod output;
pub mod traits;

// Re-export commonly used types at the crate root.
pub use error::{BindingError, HostError};
pub use bindings::{BindingTable, BindingTableBuilder, SlotFn};
pub use output::{MemOutput, NullOutput, OutputChannel, TracingOutput};
pub use traits::{HostImports, WrappingArithmetic};
