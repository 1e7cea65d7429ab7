//! Output channel — where the guest's diagnostic line goes.
//!
//! The sandbox decodes each line the guest writes through the
//! `console.write_line` import and forwards it to an `OutputChannel`.
//! Delivery is best-effort; the guest never branches on it.

use std::sync::Mutex;

use crate::error::HostError;

/// Sink for lines written by the guest.
pub trait OutputChannel: Send + Sync {
    fn write_line(&self, line: &str) -> Result<(), HostError>;
}

/// Forwards guest lines to `tracing` at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingOutput;

impl OutputChannel for TracingOutput {
    fn write_line(&self, line: &str) -> Result<(), HostError> {
        tracing::info!(target: "badfactors::guest", %line, "guest output");
        Ok(())
    }
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOutput;

impl OutputChannel for NullOutput {
    fn write_line(&self, _line: &str) -> Result<(), HostError> {
        Ok(())
    }
}

/// In-memory output channel for testing.
#[derive(Debug, Default)]
pub struct MemOutput {
    lines: Mutex<Vec<String>>,
}

impl MemOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line received so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutputChannel for MemOutput {
    fn write_line(&self, line: &str) -> Result<(), HostError> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| HostError::Internal("output buffer poisoned".into()))?;
        lines.push(line.to_string());
        Ok(())
    }
}
