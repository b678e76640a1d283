#![doc = r#"
vic64-core: the CPU/bus/peripheral core of a C64-class 6502 microcomputer
emulator.

Modules:
- cpu: 6502 register state, addressing modes, instruction semantics, and
  the interrupt-aware per-step dispatcher.
- bus: memory map, ROM storage, MMU soft switches, VIC and CIA peripheral
  registers, the keyboard injection path, and the per-instruction scheduler.
- rom: loads the three system ROM images off disk into a `RomSet`.
- machine: `Machine`, owning a `Cpu` and `Bus`, and the power-on/run loop.
- host: the `HostSurface` trait that decouples screen/color RAM mirroring
  and keyboard input from any concrete front end.
- error: `EmuError`, the crate's only fallible-boundary error type.

In tests, shared builders for synthetic ROM sets and CPU/bus pairs are
available under `crate::test_utils`.
"#]

pub mod bus;
pub mod cpu;
pub mod error;
pub mod host;
pub mod machine;
pub mod rom;

pub use bus::Bus;
pub use cpu::Cpu;
pub use error::EmuError;
pub use host::HostSurface;
pub use machine::{Machine, MachineConfig};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
