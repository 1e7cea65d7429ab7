//! Binding table — the host's side of the import slots.
//!
//! A `BindingTable` maps each import slot name to a host function. It is
//! assembled once with [`BindingTableBuilder`], then frozen: there is no
//! operation that adds, replaces, or removes a binding afterwards. The
//! sandbox resolves every import of a guest against the table at
//! instantiation time.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use badfactors_primitives::abi::{self, SlotDirection};

use crate::error::BindingError;
use crate::traits::HostImports;

/// A host function bound to an `(i32, i32) -> i32` slot.
pub type SlotFn = Arc<dyn Fn(i32, i32) -> i32 + Send + Sync>;

/// Collects bindings before the table is frozen.
#[derive(Default)]
pub struct BindingTableBuilder {
    bindings: BTreeMap<&'static str, SlotFn>,
}

impl BindingTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a host function to the import slot `name`.
    ///
    /// Fails if `name` is not a declared slot, names an export slot, or is
    /// already bound.
    pub fn bind<F>(mut self, name: &str, func: F) -> Result<Self, BindingError>
    where
        F: Fn(i32, i32) -> i32 + Send + Sync + 'static,
    {
        let slot = abi::slot(name).ok_or_else(|| BindingError::UnknownSlot(name.to_string()))?;
        if slot.direction != SlotDirection::Import {
            return Err(BindingError::NotAnImport(name.to_string()));
        }
        if self.bindings.contains_key(slot.name) {
            return Err(BindingError::AlreadyBound(name.to_string()));
        }
        self.bindings.insert(slot.name, Arc::new(func));
        Ok(self)
    }

    /// Freeze the bindings.
    pub fn build(self) -> BindingTable {
        BindingTable {
            bindings: Arc::new(self.bindings),
        }
    }
}

/// Immutable import-slot bindings. Cheap to clone.
#[derive(Clone)]
pub struct BindingTable {
    bindings: Arc<BTreeMap<&'static str, SlotFn>>,
}

impl BindingTable {
    pub fn builder() -> BindingTableBuilder {
        BindingTableBuilder::new()
    }

    /// A table with nothing bound. Any guest that imports a slot will fail
    /// to instantiate against it.
    pub fn empty() -> Self {
        BindingTableBuilder::new().build()
    }

    /// Bind every import slot to the corresponding `HostImports` method.
    pub fn from_imports<H>(host: H) -> Self
    where
        H: HostImports + Send + Sync + 'static,
    {
        let host = Arc::new(host);
        let mut bindings: BTreeMap<&'static str, SlotFn> = BTreeMap::new();
        bindings.insert(abi::SLOT_ADD, Arc::new(move |x: i32, y: i32| host.add(x, y)));
        Self {
            bindings: Arc::new(bindings),
        }
    }

    /// The function bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&SlotFn> {
        self.bindings.get(name)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Call the function bound to `name` directly on the host.
    pub fn call(&self, name: &str, x: i32, y: i32) -> Result<i32, BindingError> {
        let func = self
            .get(name)
            .ok_or_else(|| BindingError::Unbound(name.to_string()))?;
        Ok(func(x, y))
    }

    /// Names of all bound slots, in ascending order.
    pub fn bound_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bindings.keys().copied()
    }

    /// Declared import slots that have no binding.
    pub fn missing_imports(&self) -> Vec<&'static str> {
        abi::import_slots()
            .filter(|s| !self.is_bound(s.name))
            .map(|s| s.name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for BindingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingTable")
            .field("bound", &self.bindings.keys().collect::<Vec<_>>())
            .finish()
    }
}
