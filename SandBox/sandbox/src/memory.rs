//! Bounds-checked reads from WASM linear memory.
//!
//! The host never writes into guest memory. The only read is the line the
//! guest passes to `console.write_line`. Out-of-bounds access returns
//! `ERR_BAD_POINTER`.

use badfactors_hostapi::HostError;

/// Read `len` bytes from guest memory at `ptr`.
///
/// Returns `Err(BadPointer)` if the range `[ptr, ptr+len)` is out of bounds.
pub fn read_bytes(mem: &[u8], ptr: i32, len: i32) -> Result<Vec<u8>, HostError> {
    if ptr < 0 || len < 0 {
        return Err(HostError::bad_pointer());
    }
    let start = ptr as usize;
    let end = start
        .checked_add(len as usize)
        .ok_or_else(HostError::bad_pointer)?;
    if end > mem.len() {
        return Err(HostError::bad_pointer());
    }
    Ok(mem[start..end].to_vec())
}
