//! Resource limit tests — fuel exhaustion, memory limits, output limits.

mod common;

use std::sync::Arc;

use badfactors_hostapi::{MemOutput, NullOutput};
use badfactors_sandbox::{Sandbox, SandboxConfig, SandboxError};

use common::*;

/// Guest whose `spin` export never returns.
const SPIN_WAT: &str = r#"
    (module
        (import "env" "add" (func (param i32 i32) (result i32)))
        (memory (export "memory") 1)
        (func (export "init"))
        (func (export "multiply") (param i32 i32) (result i32)
            (i32.mul (local.get 0) (local.get 1)))
        (func (export "spin") (param i32 i32) (result i32)
            (loop $forever (br $forever))
            i32.const 0)
    )
"#;

// ── Test: fuel exhaustion ──

#[test]
fn test_fuel_exhaustion() {
    let config = SandboxConfig {
        fuel_limit: 10_000,
        ..SandboxConfig::default()
    };
    let sandbox = Sandbox::new(SPIN_WAT.as_bytes(), config).unwrap();
    let mut guest = sandbox
        .instantiate(&adder_bindings(), Arc::new(NullOutput))
        .unwrap();

    let result = guest.call_export("spin", 0, 0);
    assert!(
        matches!(result, Err(SandboxError::FuelExhausted)),
        "expected FuelExhausted, got: {:?}",
        result
    );
}

// ── Test: fuel is refilled per call ──

#[test]
fn test_fuel_refilled_between_calls() {
    let config = SandboxConfig {
        fuel_limit: 10_000,
        ..SandboxConfig::default()
    };
    let sandbox = Sandbox::new(SPIN_WAT.as_bytes(), config).unwrap();
    let mut guest = sandbox
        .instantiate(&adder_bindings(), Arc::new(NullOutput))
        .unwrap();

    assert!(guest.call_export("spin", 0, 0).is_err());
    // A call that exhausted fuel does not starve the next one.
    for _ in 0..100 {
        assert_eq!(guest.multiply(6, 7).unwrap(), 42);
    }
}

// ── Test: memory limit enforced at instantiation ──

#[test]
fn test_memory_limit_enforced() {
    let wat = r#"
        (module
            (import "env" "add" (func (param i32 i32) (result i32)))
            (memory (export "memory") 4)
            (func (export "init"))
            (func (export "multiply") (param i32 i32) (result i32)
                (i32.mul (local.get 0) (local.get 1)))
        )
    "#;
    let config = SandboxConfig {
        max_memory_pages: 2,
        ..SandboxConfig::default()
    };
    let sandbox = Sandbox::new(wat.as_bytes(), config).unwrap();
    let result = sandbox.instantiate(&adder_bindings(), Arc::new(NullOutput));
    assert!(result.is_err(), "4 pages must not fit a 2 page limit");
}

// ── Test: memory growth beyond the limit fails inside the guest ──

#[test]
fn test_memory_grow_denied() {
    let wat = r#"
        (module
            (import "env" "add" (func (param i32 i32) (result i32)))
            (memory (export "memory") 1)
            (func (export "init"))
            (func (export "multiply") (param i32 i32) (result i32)
                (i32.mul (local.get 0) (local.get 1)))
            (func (export "grow") (param i32 i32) (result i32)
                (memory.grow (local.get 0)))
        )
    "#;
    let config = SandboxConfig {
        max_memory_pages: 2,
        ..SandboxConfig::default()
    };
    let sandbox = Sandbox::new(wat.as_bytes(), config).unwrap();
    let mut guest = sandbox
        .instantiate(&adder_bindings(), Arc::new(NullOutput))
        .unwrap();

    assert_eq!(guest.call_export("grow", 1, 0).unwrap(), 1);
    assert_eq!(guest.call_export("grow", 1, 0).unwrap(), -1);
}

// ── Test: long guest lines are truncated ──

#[test]
fn test_output_line_truncated() {
    let config = SandboxConfig {
        max_output_line_len: 10,
        ..SandboxConfig::default()
    };
    let sandbox = load_sandbox_with_config(config);
    let output = Arc::new(MemOutput::new());
    let guest = sandbox.instantiate(&adder_bindings(), output.clone()).unwrap();

    assert_eq!(output.lines(), ["badfactors"]);
    assert_eq!(guest.lines_written(), 1);
}

// ── Test: disabled output still counts the liveness line ──

#[test]
fn test_output_disabled() {
    let config = SandboxConfig {
        enable_guest_output: false,
        ..SandboxConfig::default()
    };
    let sandbox = load_sandbox_with_config(config);
    let output = Arc::new(MemOutput::new());
    let guest = sandbox.instantiate(&adder_bindings(), output.clone()).unwrap();

    assert!(output.is_empty());
    assert_eq!(guest.lines_written(), 1);
}

// ── Test: invalid UTF-8 is reported to the guest, not delivered ──

#[test]
fn test_invalid_utf8_line_rejected() {
    let wat = r#"
        (module
            (import "env" "add" (func (param i32 i32) (result i32)))
            (import "console" "write_line" (func $write_line (param i32 i32) (result i32)))
            (memory (export "memory") 1)
            (data (i32.const 0) "\ff\fe")
            (global $code (mut i32) (i32.const -1))
            (func (export "init")
                (global.set $code (call $write_line (i32.const 0) (i32.const 2))))
            (func (export "multiply") (param i32 i32) (result i32)
                (i32.mul (local.get 0) (local.get 1)))
            (func (export "last_code") (param i32 i32) (result i32)
                (global.get $code))
        )
    "#;
    let sandbox = load_wat(wat);
    let output = Arc::new(MemOutput::new());
    let mut guest = sandbox.instantiate(&adder_bindings(), output.clone()).unwrap();

    assert!(output.is_empty());
    assert_eq!(guest.call_export("last_code", 0, 0).unwrap(), 2); // ERR_INVALID_ENCODING
}
