/*!
cpu::mod - Public facade for the 6502 CPU core.

Layout:

    state.rs   - Architectural register/flag state (`CpuState`) and its
                 inline helpers (fetch, push/pop, flag composition).
    regs.rs    - `CpuRegs` trait, decoupling instruction semantics from
                 `CpuState`'s concrete layout.
    addressing.rs - Addressing-mode operand resolution helpers.
    execute.rs - ALU/instruction semantic helpers shared by the dispatch
                 family handlers.
    cycles.rs  - Per-opcode baseline cycle counts and the RMW predicate.
    dispatch   - Orchestrates a single CPU step: interrupt servicing, then
                 the family-handler chain, then finalization.
    core       - The public `Cpu` facade wrapping `CpuState`.

Only `Cpu` and the flag constants are meant for use outside this module;
everything else is `pub(crate)` plumbing for the dispatch family handlers.
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub(crate) mod dispatch;
pub mod execute;
pub mod regs;
pub mod state;

pub use core::Cpu;
