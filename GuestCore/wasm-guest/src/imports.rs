//! Host function imports.
//!
//! `add` has no body here; the host binds it under the `env` module before
//! instantiation, otherwise the module never links.

#[link(wasm_import_module = "env")]
extern "C" {
    /// Import slot: `(i32, i32) -> i32`, supplied by the host.
    pub fn add(x: i32, y: i32) -> i32;
}

#[link(wasm_import_module = "console")]
extern "C" {
    /// Write one diagnostic line. Returns 0 on success.
    pub fn write_line(msg_ptr: i32, msg_len: i32) -> i32;
}
