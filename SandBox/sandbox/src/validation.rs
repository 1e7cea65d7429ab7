//! WASM module validation — boundary ABI checks.
//!
//! Validates that a compiled WASM module meets the badfactors boundary
//! before the sandbox accepts it. Checks:
//!
//! 1. Memory export present
//! 2. `init` export present as `() -> ()`
//! 3. Every export slot present as `(i32, i32) -> i32`
//! 4. Every import slot declared under `env` with the slot signature
//! 5. No imports other than `env` slots and `console.write_line`; no WASI
//!
//! [`validate_bindings`] runs separately at instantiation time and checks
//! the module's `env` imports against a binding table.

use wasmtime::{ExternType, FuncType, Module, ValType};

use badfactors_hostapi::BindingTable;
use badfactors_primitives::abi::{
    self, INIT_EXPORT, MEMORY_EXPORT, OUTPUT_NAMESPACE, OUTPUT_WRITE_LINE, SLOT_NAMESPACE,
    SlotSignature,
};

use crate::error::SandboxError;

/// Check if a ValType is i32.
fn is_i32(vt: &ValType) -> bool {
    matches!(vt, ValType::I32)
}

/// Check a function type against an all-i32 signature.
fn matches_signature(ty: &FuncType, sig: SlotSignature) -> bool {
    let params: Vec<ValType> = ty.params().collect();
    let results: Vec<ValType> = ty.results().collect();
    params.len() == sig.params
        && params.iter().all(is_i32)
        && results.len() == sig.results
        && results.iter().all(is_i32)
}

/// Validate that a WASM module meets the boundary ABI.
pub fn validate_module(module: &Module) -> Result<(), SandboxError> {
    validate_exports(module)?;
    validate_imports(module)?;
    Ok(())
}

/// Look up a function export by name.
fn func_export(module: &Module, name: &str) -> Result<FuncType, SandboxError> {
    let export = module
        .exports()
        .find(|e| e.name() == name)
        .ok_or_else(|| {
            SandboxError::ValidationError(format!("missing required export: {}", name))
        })?;

    match export.ty() {
        ExternType::Func(ft) => Ok(ft),
        _ => Err(SandboxError::ValidationError(format!(
            "export '{}' must be a function",
            name
        ))),
    }
}

/// Check that the memory, initializer, and export slots are present.
fn validate_exports(module: &Module) -> Result<(), SandboxError> {
    let has_memory = module
        .exports()
        .any(|e| e.name() == MEMORY_EXPORT && matches!(e.ty(), ExternType::Memory(_)));
    if !has_memory {
        return Err(SandboxError::ValidationError(format!(
            "module must export '{}'",
            MEMORY_EXPORT
        )));
    }

    let init_ty = func_export(module, INIT_EXPORT)?;
    if !matches_signature(&init_ty, SlotSignature { params: 0, results: 0 }) {
        return Err(SandboxError::ValidationError(format!(
            "export '{}' must take no params and return nothing",
            INIT_EXPORT
        )));
    }

    for slot in abi::export_slots() {
        let ty = func_export(module, slot.name)?;
        if !matches_signature(&ty, slot.signature) {
            return Err(SandboxError::ValidationError(format!(
                "export '{}' has wrong signature: expected {} i32 params and {} i32 results",
                slot.name, slot.signature.params, slot.signature.results
            )));
        }
    }

    Ok(())
}

/// Check that imports are limited to declared slots and the output channel.
fn validate_imports(module: &Module) -> Result<(), SandboxError> {
    for import in module.imports() {
        let module_name = import.module();
        let name = import.name();

        // Reject WASI imports
        if module_name.starts_with("wasi") {
            return Err(SandboxError::ValidationError(format!(
                "WASI import not allowed: {}::{}",
                module_name, name
            )));
        }

        let func_ty = match import.ty() {
            ExternType::Func(ft) => ft,
            _ => {
                return Err(SandboxError::ValidationError(format!(
                    "non-function import not allowed: {}::{}",
                    module_name, name
                )));
            }
        };

        if module_name == SLOT_NAMESPACE {
            let slot = abi::slot(name).filter(|s| s.is_import()).ok_or_else(|| {
                SandboxError::ValidationError(format!(
                    "'{}::{}' is not a declared import slot",
                    module_name, name
                ))
            })?;
            if !matches_signature(&func_ty, slot.signature) {
                return Err(SandboxError::ValidationError(format!(
                    "import '{}::{}' has wrong signature",
                    module_name, name
                )));
            }
        } else if module_name == OUTPUT_NAMESPACE && name == OUTPUT_WRITE_LINE {
            if !matches_signature(&func_ty, SlotSignature::BINARY_I32) {
                return Err(SandboxError::ValidationError(format!(
                    "import '{}::{}' has wrong signature",
                    module_name, name
                )));
            }
        } else {
            return Err(SandboxError::ValidationError(format!(
                "import from unknown module '{}' (only '{}' and '{}::{}' allowed): {}",
                module_name, SLOT_NAMESPACE, OUTPUT_NAMESPACE, OUTPUT_WRITE_LINE, name
            )));
        }
    }

    // Every import slot must be declared by the guest.
    for slot in abi::import_slots() {
        let declared = module
            .imports()
            .any(|i| i.module() == SLOT_NAMESPACE && i.name() == slot.name);
        if !declared {
            return Err(SandboxError::ValidationError(format!(
                "module does not declare import slot '{}::{}'",
                SLOT_NAMESPACE, slot.name
            )));
        }
    }

    Ok(())
}

/// Check that every `env` import of the module has a binding.
pub fn validate_bindings(module: &Module, bindings: &BindingTable) -> Result<(), SandboxError> {
    for import in module.imports() {
        if import.module() == SLOT_NAMESPACE && !bindings.is_bound(import.name()) {
            tracing::error!(
                module = import.module(),
                name = import.name(),
                "import slot not bound; refusing to instantiate"
            );
            return Err(SandboxError::UnboundImport {
                module: import.module().to_string(),
                name: import.name().to_string(),
            });
        }
    }
    Ok(())
}
