//! Sandbox runtime — Wasmtime engine, module loading, and instantiation.
//!
//! The `Sandbox` struct loads a WASM module and validates its ABI.
//! [`Sandbox::instantiate`] resolves the module's imports against a
//! binding table, links it, and runs the guest initializer once, producing
//! a [`GuestInstance`]. Export slots are only reachable through a
//! `GuestInstance`, so nothing can call `multiply` on a module whose imports
//! were not bound.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use wasmtime::{Config, Engine, ExternType, Instance, Linker, Module, Store, Trap, TypedFunc};

use badfactors_hostapi::{BindingTable, OutputChannel};
use badfactors_primitives::abi::{self, INIT_EXPORT, SLOT_MULTIPLY, SLOT_NAMESPACE};

use crate::config::SandboxConfig;
use crate::error::SandboxError;
use crate::host_impl::HostState;
use crate::linker::register_host_functions;
use crate::validation::{validate_bindings, validate_module};

/// The WASM guest sandbox.
///
/// Holds a compiled, validated module. Each call to
/// [`instantiate`](Sandbox::instantiate) produces an independent instance
/// with its own store.
pub struct Sandbox {
    engine: Engine,
    module: Module,
    config: SandboxConfig,
}

impl Sandbox {
    /// Create a new sandbox from WASM bytecode (or WAT text).
    ///
    /// Validates the module's exports and imports before accepting.
    pub fn new(wasm_bytes: &[u8], config: SandboxConfig) -> Result<Self, SandboxError> {
        let engine = create_engine()?;
        let module = Module::new(&engine, wasm_bytes)?;
        validate_module(&module)?;
        tracing::debug!(bytes = wasm_bytes.len(), "guest module loaded");
        Ok(Self {
            engine,
            module,
            config,
        })
    }

    /// Load from a `.wasm` file path.
    pub fn from_file(path: &Path, config: SandboxConfig) -> Result<Self, SandboxError> {
        let engine = create_engine()?;
        let module = Module::from_file(&engine, path)?;
        validate_module(&module)?;
        tracing::debug!(path = %path.display(), "guest module loaded");
        Ok(Self {
            engine,
            module,
            config,
        })
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// `(module, name)` of every function the guest imports.
    pub fn imports(&self) -> Vec<(String, String)> {
        self.module
            .imports()
            .filter(|i| matches!(i.ty(), ExternType::Func(_)))
            .map(|i| (i.module().to_string(), i.name().to_string()))
            .collect()
    }

    /// Instantiate the guest.
    ///
    /// 1. Every `env` import must be bound in `bindings`; otherwise
    ///    `SandboxError::UnboundImport` and nothing is instantiated.
    /// 2. Host functions are registered and the module is linked.
    /// 3. The guest's `init` export runs once.
    ///
    /// The returned instance keeps `bindings` for its whole lifetime.
    pub fn instantiate(
        &self,
        bindings: &BindingTable,
        output: Arc<dyn OutputChannel>,
    ) -> Result<GuestInstance, SandboxError> {
        // 1. Resolve imports against the binding table
        validate_bindings(&self.module, bindings)?;

        // 2. Create store with limits and fuel
        let host_state = HostState::new(bindings.clone(), output, &self.config);
        let mut store = Store::new(&self.engine, host_state);
        store.limiter(|state| &mut state.limits);
        store.set_fuel(self.config.fuel_limit)?;

        // 3. Create linker and register host functions
        let mut linker = Linker::new(&self.engine);
        register_host_functions(&mut linker, bindings)?;

        // 4. Instantiate module
        let instance = linker.instantiate(&mut store, &self.module)?;

        // 5. Run the initializer
        let init_fn = instance.get_typed_func::<(), ()>(&mut store, INIT_EXPORT)?;
        handle_trap(init_fn.call(&mut store, ()))?;
        tracing::debug!(
            lines = store.data().lines_written,
            bound = ?bindings.bound_names().collect::<Vec<_>>(),
            "guest initialised"
        );

        // 6. Resolve slots. Each bound import is materialised in the store
        //    once here; `Linker::get` allocates a new host func per call.
        let multiply = instance.get_typed_func::<(i32, i32), i32>(&mut store, SLOT_MULTIPLY)?;
        let mut imports = BTreeMap::new();
        for slot in abi::import_slots().filter(|s| bindings.is_bound(s.name)) {
            let func = linker
                .get(&mut store, SLOT_NAMESPACE, slot.name)
                .and_then(|e| e.into_func())
                .ok_or_else(|| SandboxError::UnboundImport {
                    module: SLOT_NAMESPACE.to_string(),
                    name: slot.name.to_string(),
                })?;
            imports.insert(slot.name, func.typed::<(i32, i32), i32>(&store)?);
        }

        Ok(GuestInstance {
            store,
            instance,
            imports,
            multiply,
            fuel_limit: self.config.fuel_limit,
        })
    }
}

/// A linked, initialised guest.
///
/// Calls are synchronous and independent: the store is refuelled before
/// every call and the guest keeps no state between them.
pub struct GuestInstance {
    store: Store<HostState>,
    instance: Instance,
    imports: BTreeMap<&'static str, TypedFunc<(i32, i32), i32>>,
    multiply: TypedFunc<(i32, i32), i32>,
    fuel_limit: u64,
}

impl GuestInstance {
    /// Call the `multiply` export slot.
    pub fn multiply(&mut self, x: i32, y: i32) -> Result<i32, SandboxError> {
        self.refuel()?;
        handle_trap(self.multiply.call(&mut self.store, (x, y)))
    }

    /// Call any `(i32, i32) -> i32` export by name.
    pub fn call_export(&mut self, name: &str, x: i32, y: i32) -> Result<i32, SandboxError> {
        let func = self
            .instance
            .get_typed_func::<(i32, i32), i32>(&mut self.store, name)
            .map_err(|_| SandboxError::UnknownSlot(name.to_string()))?;
        self.refuel()?;
        handle_trap(func.call(&mut self.store, (x, y)))
    }

    /// Call an import slot through the definition the guest was linked
    /// against.
    pub fn call_import(&mut self, name: &str, x: i32, y: i32) -> Result<i32, SandboxError> {
        abi::slot(name)
            .filter(|s| s.is_import())
            .ok_or_else(|| SandboxError::UnknownSlot(name.to_string()))?;

        let func = self.imports.get(name).ok_or_else(|| SandboxError::UnboundImport {
            module: SLOT_NAMESPACE.to_string(),
            name: name.to_string(),
        })?;
        self.store.set_fuel(self.fuel_limit)?;
        handle_trap(func.call(&mut self.store, (x, y)))
    }

    /// Lines the guest has written to the output channel.
    pub fn lines_written(&self) -> u32 {
        self.store.data().lines_written
    }

    /// The bindings this instance was linked against.
    pub fn bindings(&self) -> &BindingTable {
        &self.store.data().bindings
    }

    fn refuel(&mut self) -> Result<(), SandboxError> {
        self.store.set_fuel(self.fuel_limit)?;
        Ok(())
    }
}

/// Create a Wasmtime engine for pure, deterministic guest calls.
fn create_engine() -> Result<Engine, SandboxError> {
    let mut wasm_config = Config::new();

    // Fuel metering — prevents infinite loops
    wasm_config.consume_fuel(true);

    // Determinism enforcement
    wasm_config.wasm_threads(false);
    wasm_config.wasm_simd(false);
    wasm_config.wasm_relaxed_simd(false);
    wasm_config.wasm_multi_memory(false);
    wasm_config.cranelift_nan_canonicalization(true);

    Ok(Engine::new(&wasm_config)?)
}

/// Handle a guest function call result, converting traps to SandboxError.
///
/// Fuel exhaustion → `SandboxError::FuelExhausted`
/// Other traps → `SandboxError::GuestTrapped`
fn handle_trap<R>(result: Result<R, anyhow::Error>) -> Result<R, SandboxError> {
    result.map_err(|e| match e.downcast_ref::<Trap>() {
        Some(Trap::OutOfFuel) => SandboxError::FuelExhausted,
        _ => SandboxError::GuestTrapped(format!("{:#}", e)),
    })
}
