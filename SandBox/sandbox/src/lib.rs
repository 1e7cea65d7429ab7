//! `badfactors-sandbox` — Wasmtime-based sandbox for the badfactors guest.
//!
//! This crate loads, validates, and instantiates the badfactors WASM guest
//! and enforces the host/guest function boundary:
//!
//! - **Import binding:** every `env` import must be bound in a
//!   [`BindingTable`](badfactors_hostapi::BindingTable) before instantiation
//! - **Initializer:** the guest's `init` export runs exactly once, before any
//!   export slot is reachable
//! - **Import whitelisting:** only `env` slots and the `console` output
//!   channel, no WASI
//! - **Fuel metering:** instruction-level metering, refilled per call
//! - **Memory limits:** bounded linear memory growth
//!
//! The primary entry points are [`Sandbox::instantiate`] and
//! [`GuestInstance::multiply`].

pub mod error;
pub mod config;
pub mod memory;
pub mod host_impl;
pub mod validation;
pub mod linker;
pub mod runtime;

pub use error::SandboxError;
pub use config::SandboxConfig;
pub use runtime::{GuestInstance, Sandbox};
