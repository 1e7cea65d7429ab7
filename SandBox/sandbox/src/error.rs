//! Sandbox error types.

/// Top-level error type for the sandbox crate.
#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    /// Wasmtime engine, compilation, or linking error.
    #[error("wasmtime error: {0}")]
    Wasmtime(#[from] anyhow::Error),

    /// Module validation failed (missing exports, bad imports, etc.).
    #[error("validation error: {0}")]
    ValidationError(String),

    /// The guest imports a slot the host never bound. The module is not
    /// instantiated.
    #[error("unbound import {module}::{name}")]
    UnboundImport { module: String, name: String },

    /// No callable slot with this name and signature.
    #[error("unknown slot: {0}")]
    UnknownSlot(String),

    /// Fuel exhausted during a guest call.
    #[error("fuel exhausted (instruction limit)")]
    FuelExhausted,

    /// WASM guest trapped.
    #[error("guest trapped: {0}")]
    GuestTrapped(String),
}
