//! Guest exported functions.
//!
//! - `init` — liveness signal, called once by the host after instantiation
//! - `multiply` — the export slot
//!
//! Exported functions must never panic; panics in WASM cause traps.

use badfactors_primitives::abi::INIT_MESSAGE;

use crate::imports;

/// Module initializer.
///
/// Writes one line to the host output channel. The result code is not
/// checked: the line is a liveness probe and the guest must not branch on
/// its delivery.
#[no_mangle]
pub extern "C" fn init() {
    // Referencing `add` keeps `env.add` in the import section even though no
    // export calls it. The host has to bind it for the module to link.
    let _ = core::hint::black_box(imports::add as unsafe extern "C" fn(i32, i32) -> i32);

    unsafe {
        imports::write_line(INIT_MESSAGE.as_ptr() as i32, INIT_MESSAGE.len() as i32);
    }
}

/// Export slot `multiply`: wrapping `i32` multiplication.
#[no_mangle]
pub extern "C" fn multiply(x: i32, y: i32) -> i32 {
    badfactors_primitives::multiply(x, y)
}
