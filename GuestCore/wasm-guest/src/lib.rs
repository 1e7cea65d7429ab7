//! `badfactors-wasm-guest` — WASM cdylib for the badfactors boundary.
//!
//! This crate compiles to a `.wasm` artifact with:
//!
//! - import `env.add` — bound by the host before instantiation
//! - import `console.write_line` — host output channel
//! - export `init` — module initializer, called once by the host
//! - export `multiply` — wrapping `i32` multiplication
//!
//! Build with:
//!
//! ```text
//! cargo build -p badfactors-wasm-guest --release --target wasm32-unknown-unknown
//! ```
//!
//! The guest holds no state and shares no buffers with the host. The only
//! bytes the host ever reads from guest memory are the initializer's
//! diagnostic line.
//!
//! `badfactors-primitives` is pulled in without its `std` feature. The
//! `wasm32-unknown-unknown` standard library linked through the dependency
//! graph provides the panic handler.

#![no_std]

mod imports;
mod exports;

// Re-export the exported functions so the linker sees them.
pub use exports::{init, multiply};
