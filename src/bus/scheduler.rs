/*!
scheduler.rs - Advances raster and CIA timer state by the cycle cost of
each retired CPU instruction, and decides when to raise the shared IRQ
line.

Grounded directly on the reference machine's 50 Hz tick routine: a PAL
C64 runs its CPU at 985248 Hz, draws 312 raster lines per frame, and
refreshes the screen 50 times a second, which fixes how many CPU cycles
correspond to one raster line and to one full frame ("jiffy") tick.
*/

use crate::bus::Bus;
use crate::bus::cia::{TIMER_A_FLAG, TIMER_B_FLAG};

pub const CPU_HZ: u32 = 985_248;
pub const IRQ_RATE: u32 = 50;
pub const VIC_RASTER_LINES: u32 = 312;
pub const CYCLES_PER_LINE: u32 = CPU_HZ / (VIC_RASTER_LINES * IRQ_RATE);
pub const CYCLES_PER_IRQ: u32 = CPU_HZ / IRQ_RATE;

#[derive(Default)]
pub struct Scheduler {
    raster_acc: u32,
    jiffy_acc: u32,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            raster_acc: 0,
            jiffy_acc: 0,
        }
    }
}

/// Called once per retired instruction (or interrupt-entry lump sum) with
/// the number of cycles it cost.
pub(crate) fn on_instruction_retired(bus: &mut Bus, cycles: u32) {
    advance_raster(bus, cycles);
    advance_cia1_timer_a(bus, cycles);
    advance_cia1_timer_b_jiffy(bus, cycles);
    recompute_irq_line(bus);
}

fn advance_raster(bus: &mut Bus, cycles: u32) {
    bus.scheduler.raster_acc += cycles;
    while bus.scheduler.raster_acc >= CYCLES_PER_LINE {
        bus.scheduler.raster_acc -= CYCLES_PER_LINE;
        bus.vic.raster_line = ((bus.vic.raster_line as u32 + 1) % VIC_RASTER_LINES) as u16;
        bus.vic.note_raster_match_if_due();
    }
}

fn advance_cia1_timer_a(bus: &mut Bus, cycles: u32) {
    if !bus.cia1.timer_a_running() {
        return;
    }
    let cycles = cycles as u16;
    if bus.cia1.timer_a_counter > cycles {
        bus.cia1.timer_a_counter -= cycles;
    } else {
        bus.cia1.timer_a_counter = bus.cia1.timer_a_latch;
        bus.cia1.ifr |= TIMER_A_FLAG;
    }
}

fn advance_cia1_timer_b_jiffy(bus: &mut Bus, cycles: u32) {
    if !bus.cia1.timer_b_running() {
        return;
    }
    bus.scheduler.jiffy_acc += cycles;
    if bus.scheduler.jiffy_acc >= CYCLES_PER_IRQ {
        bus.scheduler.jiffy_acc -= CYCLES_PER_IRQ;
        bus.cia1.ifr |= TIMER_B_FLAG;
    }
}

fn recompute_irq_line(bus: &mut Bus) {
    bus.irq_line = bus.cia1.irq_pending() || bus.vic.irq_pending();
}

/// Clear exactly the flag that caused the most recently delivered IRQ,
/// checked in the same priority order the source machine used: CIA Timer A,
/// then the VIC raster compare, then CIA Timer B.
pub(crate) fn clear_originating_flag(bus: &mut Bus) {
    if bus.cia1.ifr & bus.cia1.icr_mask & TIMER_A_FLAG != 0 {
        bus.cia1.ifr &= !TIMER_A_FLAG;
    } else if bus.vic.irq_pending() {
        bus.vic.clear_irq_flag();
    } else if bus.cia1.ifr & bus.cia1.icr_mask & TIMER_B_FLAG != 0 {
        bus.cia1.ifr &= !TIMER_B_FLAG;
    }
}
