//! Host function registration via Wasmtime linker.
//!
//! Registers the bound import slots under `env` and the output channel
//! under `console`. Slots missing from the binding table are simply not
//! defined; [`validate_bindings`](crate::validation::validate_bindings)
//! rejects the instantiation before the linker would.

use std::sync::Arc;

use wasmtime::{Caller, Linker, Memory};

use badfactors_hostapi::BindingTable;
use badfactors_primitives::{
    ErrorCode,
    abi::{self, MEMORY_EXPORT, OUTPUT_NAMESPACE, OUTPUT_WRITE_LINE, SLOT_NAMESPACE},
};

use crate::error::SandboxError;
use crate::host_impl::HostState;
use crate::memory;

/// Get the guest's exported memory from a Caller.
fn get_memory(caller: &mut Caller<'_, HostState>) -> Option<Memory> {
    caller.get_export(MEMORY_EXPORT).and_then(|e| e.into_memory())
}

/// Register every bound import slot and the output channel.
pub fn register_host_functions(
    linker: &mut Linker<HostState>,
    bindings: &BindingTable,
) -> Result<(), SandboxError> {
    register_slots(linker, bindings)?;
    register_write_line(linker)?;
    Ok(())
}

// ── Import slots ──

fn register_slots(
    linker: &mut Linker<HostState>,
    bindings: &BindingTable,
) -> Result<(), SandboxError> {
    for slot in abi::import_slots() {
        let Some(func) = bindings.get(slot.name) else {
            continue;
        };
        let func = Arc::clone(func);
        linker.func_wrap(SLOT_NAMESPACE, slot.name, move |x: i32, y: i32| -> i32 {
            func(x, y)
        })?;
        tracing::trace!(module = SLOT_NAMESPACE, name = slot.name, "import slot registered");
    }
    Ok(())
}

// ── Output channel ──

fn register_write_line(linker: &mut Linker<HostState>) -> Result<(), SandboxError> {
    linker.func_wrap(
        OUTPUT_NAMESPACE,
        OUTPUT_WRITE_LINE,
        |mut caller: Caller<'_, HostState>, msg_ptr: i32, msg_len: i32| -> i32 {
            let mem = match get_memory(&mut caller) {
                Some(m) => m,
                None => return ErrorCode::Internal as i32,
            };

            let msg_bytes = {
                let data = mem.data(&caller);
                match memory::read_bytes(data, msg_ptr, msg_len) {
                    Ok(b) => b,
                    Err(e) => return e.to_error_code(),
                }
            };

            match caller.data_mut().emit_line(&msg_bytes) {
                Ok(()) => ErrorCode::Ok as i32,
                Err(e) => {
                    tracing::warn!(error = %e, "guest line rejected");
                    e.to_error_code()
                }
            }
        },
    )?;
    Ok(())
}
