//! Sandbox configuration.

/// Configuration for the WASM sandbox.
///
/// Controls memory limits, instruction fuel, and guest output handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxConfig {
    /// Maximum linear memory pages (1 page = 64 KiB).
    /// Default: 256 pages = 16 MiB.
    pub max_memory_pages: u32,

    /// Wasmtime fuel granted to each guest call (instruction metering).
    /// Prevents infinite loops in guest compute.
    pub fuel_limit: u64,

    /// Lines longer than this many bytes are truncated before delivery.
    pub max_output_line_len: usize,

    /// Whether guest lines reach the output channel. Lines are counted
    /// either way.
    pub enable_guest_output: bool,
}

impl SandboxConfig {
    /// Maximum linear memory in bytes.
    pub fn max_memory_bytes(&self) -> usize {
        (self.max_memory_pages as usize) * 65536
    }
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            max_memory_pages: 256, // 16 MiB
            fuel_limit: 10_000_000,
            max_output_line_len: 1024,
            enable_guest_output: true,
        }
    }
}
