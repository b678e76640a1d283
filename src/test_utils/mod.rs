/*!
Shared test utilities for building a minimal CPU/Bus pair without requiring
a full set of real ROM images.

These helpers de-duplicate setup logic across the CPU, Bus, and peripheral
test suites. A "blank" `RomSet` (all zero bytes) is used throughout so that
tests can load short hand-assembled programs directly into RAM and point
the reset vector at them, exactly as the machine-level integration tests do
with real ROM images.
*/
#![allow(dead_code)]

use crate::bus::Bus;
use crate::bus::roms::RomSet;
use crate::cpu::core::Cpu;

/// Build a `Bus` with a blank (zeroed) `RomSet` attached.
pub fn build_bus_with_roms() -> Bus {
    Bus::new(RomSet::blank())
}

/// Build a `Bus` whose RESET vector ($FFFC/$FFFD) points at `target`, with
/// the NMI ($FFFA) and IRQ/BRK ($FFFE) vectors also defaulted to `target`
/// so a handler-less program doesn't jump into garbage if an interrupt
/// fires unexpectedly during a test.
pub fn build_bus_with_reset_vector(target: u16) -> Bus {
    let mut bus = build_bus_with_roms();
    write_vector(&mut bus, 0xFFFC, target);
    write_vector(&mut bus, 0xFFFA, target);
    write_vector(&mut bus, 0xFFFE, target);
    bus
}

fn write_vector(bus: &mut Bus, addr: u16, value: u16) {
    bus.write(addr, (value & 0x00FF) as u8);
    bus.write(addr.wrapping_add(1), (value >> 8) as u8);
}

/// Load `prg` at $8000, point RESET/NMI/IRQ vectors at $8000, construct a
/// `Cpu`, and run its reset sequence. Returns the ready-to-step pair.
pub fn setup_cpu(prg: &[u8]) -> (Cpu, Bus) {
    let mut bus = build_bus_with_reset_vector(0x8000);
    for (offset, byte) in prg.iter().enumerate() {
        bus.write(0x8000 + offset as u16, *byte);
    }
    let mut cpu = Cpu::default();
    cpu.reset(&mut bus);
    (cpu, bus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_cpu_places_program_and_resets() {
        let (cpu, mut bus) = setup_cpu(&[0xEA, 0xEA]);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(bus.read(0x8000), 0xEA);
        assert_eq!(bus.read(0x8001), 0xEA);
    }

    #[test]
    fn build_bus_with_reset_vector_sets_all_three_vectors() {
        let mut bus = build_bus_with_reset_vector(0x1234);
        assert_eq!(bus.read_word(0xFFFC), 0x1234);
        assert_eq!(bus.read_word(0xFFFA), 0x1234);
        assert_eq!(bus.read_word(0xFFFE), 0x1234);
    }
}
