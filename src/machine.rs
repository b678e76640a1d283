/*!
machine.rs - Top-level `Machine` owning a `Cpu` and `Bus`, and the
power-on/run-loop sequence that turns the two into a bootable computer.

Grounded on the reference implementation's `init()` and its 50 Hz main
loop: `Machine::power_on` reproduces the same register-poke sequence
(processor port defaults, VIC/CIA interrupt mask setup) without the
original's KERNAL-patch workaround, and `run_forever`/`step_once` expose
the `step(); poll_keyboard();` loop as a reusable method instead of
inlining it into a binary's `main`.
*/

use log::{error, info};

use crate::bus::Bus;
use crate::bus::roms::RomSet;
use crate::cpu::Cpu;
use crate::error::EmuError;
use crate::host::HostSurface;

/// Run-time knobs a `Machine` is constructed with. PAL timing and MMU
/// presence are compile-time concerns (the scheduler's constants and the
/// `mmu` Cargo feature, respectively); this struct only carries fields a
/// caller would plausibly want to change between runs without recompiling.
#[derive(Debug, Clone, Copy)]
pub struct MachineConfig {
    /// Maximum number of instructions `power_on` will step through while
    /// waiting for the startup code to clear the Interrupt-disable flag,
    /// before giving up with `EmuError::BootStalled`.
    pub boot_step_budget: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            boot_step_budget: 100_000,
        }
    }
}

pub struct Machine {
    cpu: Cpu,
    bus: Bus,
    config: MachineConfig,
}

impl Machine {
    pub fn new(roms: RomSet, config: MachineConfig) -> Self {
        Self {
            cpu: Cpu::default(),
            bus: Bus::new(roms),
            config,
        }
    }

    pub fn with_host(roms: RomSet, host: Box<dyn HostSurface>, config: MachineConfig) -> Self {
        Self {
            cpu: Cpu::default(),
            bus: Bus::with_host(roms, host),
            config,
        }
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Reproduce the reference boot sequence: zero RAM, set the processor
    /// port to its documented power-up value, reset the CPU, run until
    /// interrupts are re-enabled by the startup code, then arm the VIC
    /// raster IRQ and CIA #1 timers the same way the reference `init()`
    /// does.
    pub fn power_on(&mut self) -> Result<(), EmuError> {
        self.bus.ram.reset();
        self.bus.write(0x0000, 0xFF);
        self.bus.write(0x0001, 0x17);

        self.cpu.reset(&mut self.bus);

        let mut steps = 0usize;
        while self.cpu.get_flag(crate::cpu::state::IRQ_DISABLE) {
            if steps >= self.config.boot_step_budget {
                error!(
                    "boot stalled: interrupt-disable flag still set after {} instructions",
                    self.config.boot_step_budget
                );
                return Err(EmuError::BootStalled(self.config.boot_step_budget));
            }
            self.cpu.step(&mut self.bus);
            steps += 1;
        }

        // Arm the VIC raster IRQ.
        self.bus.write(0xD01A, 0x01);
        // Enable CIA #1 Timer A + Timer B interrupt sources (bit 7 set => OR into mask).
        self.bus.write(0xDC0D, 0b1000_0011);
        // Start CIA #1 Timer A (0 -> 1 transition on control bit 0).
        self.bus.write(0xDC0E, 0x01);

        info!("power-on sequence complete after {steps} boot instructions");
        Ok(())
    }

    /// Execute one CPU step and poll the host for a pending key, exactly
    /// the reference main loop's per-iteration body.
    pub fn step_once(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.bus);
        self.bus.poll_keyboard();
        cycles
    }

    /// Run `step_once` forever. Intended for a real front end driving its
    /// own event loop timing around calls into `Machine`; most callers
    /// will not use this directly and will instead call `step_once` from
    /// their own frame-paced loop.
    pub fn run_forever(&mut self) -> ! {
        loop {
            self.step_once();
        }
    }

    /// Heuristic lockup detector: PC hasn't moved in `window` consecutive
    /// steps and interrupts are disabled, the signature of an infinite
    /// tight loop parked at the reset vector with a dead ROM image.
    pub fn detect_stuck_pc(&mut self, window: usize) -> bool {
        if !self.cpu.get_flag(crate::cpu::state::IRQ_DISABLE) {
            return false;
        }
        let pc_before = self.cpu.pc();
        for _ in 0..window {
            self.cpu.step(&mut self.bus);
            if self.cpu.pc() != pc_before {
                return false;
            }
        }
        true
    }
}
