//! Shared test helpers for integration tests.
//!
//! Provides a WAT guest that mirrors the `badfactors-wasm-guest` ABI,
//! binding tables, and sandbox factory functions used across all
//! integration test files.

#![allow(dead_code)]

use std::sync::Arc;

use badfactors_hostapi::{BindingTable, MemOutput, WrappingArithmetic};
use badfactors_sandbox::{GuestInstance, Sandbox, SandboxConfig};

/// Guest artifact path (relative to sandbox crate manifest dir).
const WASM_ARTIFACT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../target/wasm32-unknown-unknown/release/badfactors_wasm_guest.wasm"
);

/// Same imports and exports as the Rust guest, plus `probe_add`, which
/// calls the `add` import from inside the guest.
pub const GUEST_WAT: &str = r#"
    (module
        (import "env" "add" (func $add (param i32 i32) (result i32)))
        (import "console" "write_line" (func $write_line (param i32 i32) (result i32)))
        (memory (export "memory") 1)
        (data (i32.const 16) "badfactors guest initialised")
        (func (export "init")
            (drop (call $write_line (i32.const 16) (i32.const 28))))
        (func (export "multiply") (param i32 i32) (result i32)
            (i32.mul (local.get 0) (local.get 1)))
        (func (export "probe_add") (param i32 i32) (result i32)
            (call $add (local.get 0) (local.get 1)))
    )
"#;

// ── Binding Tables ──

/// `add` bound to wrapping integer addition.
pub fn adder_bindings() -> BindingTable {
    BindingTable::from_imports(WrappingArithmetic)
}

// ── Sandbox Loaders ──

/// Load the WAT guest with default config.
pub fn load_sandbox() -> Sandbox {
    Sandbox::new(GUEST_WAT.as_bytes(), SandboxConfig::default()).expect("failed to load sandbox")
}

/// Load the WAT guest with a custom SandboxConfig.
pub fn load_sandbox_with_config(config: SandboxConfig) -> Sandbox {
    Sandbox::new(GUEST_WAT.as_bytes(), config).expect("failed to load sandbox with config")
}

/// Load an arbitrary WAT module with default config.
pub fn load_wat(wat: &str) -> Sandbox {
    Sandbox::new(wat.as_bytes(), SandboxConfig::default()).expect("failed to load wat module")
}

/// Load the compiled Rust guest, if it has been built.
///
/// Build with: `cargo build -p badfactors-wasm-guest --release --target wasm32-unknown-unknown`
pub fn load_artifact_sandbox() -> Option<Sandbox> {
    let path = std::path::Path::new(WASM_ARTIFACT);
    if !path.exists() {
        eprintln!("WASM artifact not found at {:?}, skipping", path);
        return None;
    }
    Some(Sandbox::from_file(path, SandboxConfig::default()).expect("failed to load guest artifact"))
}

// ── Instances ──

/// Instantiate with `add` bound and an in-memory output channel.
pub fn instantiate(sandbox: &Sandbox) -> (GuestInstance, Arc<MemOutput>) {
    let output = Arc::new(MemOutput::new());
    let guest = sandbox
        .instantiate(&adder_bindings(), output.clone())
        .expect("instantiation failed");
    (guest, output)
}
