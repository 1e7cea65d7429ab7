//! Per-instance state held in the Wasmtime Store.
//!
//! `HostState` carries the binding table the instance was linked against,
//! the output channel, and the store's resource limits. It lives inside
//! `Store<HostState>` for the lifetime of one `GuestInstance`.

use std::sync::Arc;

use badfactors_hostapi::{BindingTable, HostError, OutputChannel};
use wasmtime::{StoreLimits, StoreLimitsBuilder};

use crate::config::SandboxConfig;

/// Per-instance state held in the Wasmtime `Store`.
pub struct HostState {
    /// Import bindings, frozen for the life of the instance.
    pub bindings: BindingTable,
    /// Sink for guest diagnostic lines.
    pub output: Arc<dyn OutputChannel>,
    /// Memory and instance limits enforced by the store.
    pub limits: StoreLimits,
    /// Lines received from the guest, delivered or not.
    pub lines_written: u32,
    max_line_len: usize,
    forward_output: bool,
}

impl HostState {
    pub fn new(
        bindings: BindingTable,
        output: Arc<dyn OutputChannel>,
        config: &SandboxConfig,
    ) -> Self {
        let limits = StoreLimitsBuilder::new()
            .memory_size(config.max_memory_bytes())
            .instances(1)
            .build();
        Self {
            bindings,
            output,
            limits,
            lines_written: 0,
            max_line_len: config.max_output_line_len,
            forward_output: config.enable_guest_output,
        }
    }

    /// Handle one line written by the guest.
    ///
    /// The bytes must be UTF-8. Lines over the configured length are cut at
    /// the last char boundary that fits.
    pub fn emit_line(&mut self, raw: &[u8]) -> Result<(), HostError> {
        let line = std::str::from_utf8(raw).map_err(|_| HostError::invalid_encoding())?;
        let line = truncate_line(line, self.max_line_len);

        self.lines_written = self.lines_written.saturating_add(1);
        tracing::debug!(len = line.len(), count = self.lines_written, "guest line received");

        if !self.forward_output {
            return Ok(());
        }
        self.output.write_line(line)
    }
}

fn truncate_line(line: &str, max: usize) -> &str {
    if line.len() <= max {
        return line;
    }
    let mut end = max;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}
