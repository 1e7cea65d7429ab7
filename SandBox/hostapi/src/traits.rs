//! Host imports trait — typed host-side implementation of the import slots.
//!
//! Each method corresponds to an import slot declared by the guest under
//! the `env` module. [`BindingTable::from_imports`](crate::BindingTable::from_imports)
//! turns an implementation into the binding table handed to the sandbox.

/// Host-side implementation of every import slot.
///
/// Implementations must be pure: no shared mutable state, identical inputs
/// give identical outputs.
pub trait HostImports {
    /// Import slot `add`.
    fn add(&self, x: i32, y: i32) -> i32;
}

/// Native `i32` arithmetic: wraps on overflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct WrappingArithmetic;

impl HostImports for WrappingArithmetic {
    fn add(&self, x: i32, y: i32) -> i32 {
        x.wrapping_add(y)
    }
}
