/*!
error.rs - Typed errors for the crate's fallible boundary operations.

Everything inside the CPU/bus/peripheral core is total: bus reads and
writes never fail, undocumented opcodes behave as NOPs, interrupt entry is
infallible. The only fallible operations are at the system boundary: ROM
loading and the machine's boot-stall diagnostic.
*/

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmuError {
    #[error("failed to read {which} ROM image at {path}: {source}")]
    RomRead {
        which: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{which} ROM image has the wrong size: expected {expected} bytes, got {actual}")]
    RomSize {
        which: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("boot did not clear the interrupt-disable flag within {0} instructions")]
    BootStalled(usize),
}
