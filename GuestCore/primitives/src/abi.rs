//! The host/guest function-slot contract.
//!
//! A slot is a named entry point with a fixed `(i32, i32) -> i32` signature
//! and a direction. Import slots are declared by the guest and must be bound
//! by the host before the module links; export slots are implemented by the
//! guest and callable by the host once the module has been instantiated.
//!
//! The slot set is fixed at definition time. Nothing in this crate (or in the
//! host) can add, remove, or rebind a slot afterwards.

use serde::Serialize;

/// WASM import module that holds every function slot.
pub const SLOT_NAMESPACE: &str = "env";

/// Import slot: host-supplied addition.
pub const SLOT_ADD: &str = "add";

/// Export slot: guest-supplied multiplication.
pub const SLOT_MULTIPLY: &str = "multiply";

/// WASM import module of the host-provided output channel.
pub const OUTPUT_NAMESPACE: &str = "console";

/// Output channel function: `write_line(ptr, len) -> i32`.
pub const OUTPUT_WRITE_LINE: &str = "write_line";

/// Guest initializer export, called once by the host after instantiation.
pub const INIT_EXPORT: &str = "init";

/// Guest linear memory export.
pub const MEMORY_EXPORT: &str = "memory";

/// Diagnostic line the guest initializer writes to the output channel.
pub const INIT_MESSAGE: &str = "badfactors guest initialised";

/// Which side of the boundary supplies the slot's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotDirection {
    /// Declared by the guest, bound by the host before instantiation.
    Import,
    /// Implemented by the guest, called by the host after instantiation.
    Export,
}

/// Number of `i32` params and results of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SlotSignature {
    pub params: usize,
    pub results: usize,
}

impl SlotSignature {
    /// `(i32, i32) -> i32`, the only signature used by this boundary.
    pub const BINARY_I32: Self = Self { params: 2, results: 1 };
}

/// A declared function slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SlotDescriptor {
    pub name: &'static str,
    pub direction: SlotDirection,
    pub signature: SlotSignature,
}

impl SlotDescriptor {
    pub fn is_import(&self) -> bool {
        self.direction == SlotDirection::Import
    }

    pub fn is_export(&self) -> bool {
        self.direction == SlotDirection::Export
    }
}

/// Every slot of the boundary, in declaration order.
pub const SLOTS: &[SlotDescriptor] = &[
    SlotDescriptor {
        name: SLOT_ADD,
        direction: SlotDirection::Import,
        signature: SlotSignature::BINARY_I32,
    },
    SlotDescriptor {
        name: SLOT_MULTIPLY,
        direction: SlotDirection::Export,
        signature: SlotSignature::BINARY_I32,
    },
];

/// Look up a slot by name.
pub fn slot(name: &str) -> Option<&'static SlotDescriptor> {
    SLOTS.iter().find(|s| s.name == name)
}

/// Slots the host must bind.
pub fn import_slots() -> impl Iterator<Item = &'static SlotDescriptor> {
    SLOTS.iter().filter(|s| s.is_import())
}

/// Slots the guest must export.
pub fn export_slots() -> impl Iterator<Item = &'static SlotDescriptor> {
    SLOTS.iter().filter(|s| s.is_export())
}

/// Semantics of the `multiply` export slot.
///
/// Native two's-complement `i32` multiplication: wraps on overflow, never
/// saturates, never fails.
pub fn multiply(x: i32, y: i32) -> i32 {
    x.wrapping_mul(y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_table() {
        assert_eq!(SLOTS.len(), 2);

        let add = slot(SLOT_ADD).unwrap();
        assert!(add.is_import());
        assert_eq!(add.signature, SlotSignature::BINARY_I32);

        let mul = slot(SLOT_MULTIPLY).unwrap();
        assert!(mul.is_export());
        assert_eq!(mul.signature, SlotSignature::BINARY_I32);

        assert!(slot("subtract").is_none());
    }

    #[test]
    fn test_direction_partition() {
        let imports: alloc::vec::Vec<_> = import_slots().map(|s| s.name).collect();
        let exports: alloc::vec::Vec<_> = export_slots().map(|s| s.name).collect();
        assert_eq!(imports, [SLOT_ADD]);
        assert_eq!(exports, [SLOT_MULTIPLY]);
    }

    #[test]
    fn test_multiply_basic() {
        assert_eq!(multiply(3, 4), 12);
        assert_eq!(multiply(-3, 4), -12);
        assert_eq!(multiply(-3, -4), 12);
    }

    #[test]
    fn test_multiply_zero_and_commutative() {
        let samples = [0, 1, -1, 7, -13, 46_341, i32::MAX, i32::MIN];
        for &a in &samples {
            assert_eq!(multiply(a, 0), 0);
            assert_eq!(multiply(0, a), 0);
            for &b in &samples {
                assert_eq!(multiply(a, b), multiply(b, a), "{} * {}", a, b);
            }
        }
    }

    #[test]
    fn test_multiply_wraps() {
        assert_eq!(multiply(i32::MAX, 2), -2);
        assert_eq!(multiply(i32::MIN, -1), i32::MIN);
        assert_eq!(multiply(65_536, 65_536), 0);
    }
}
