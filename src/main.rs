/*!
main.rs - Command-line front end: load the three system ROM images, power
on a `Machine`, and run it headlessly.

This binary attaches no `HostSurface` (it runs with `NullHost`, so screen
and color RAM writes and keyboard polling are no-ops); it exists to
exercise the core end to end and to give a place to wire in a real
front end later.
*/

use std::env;
use std::process::ExitCode;

use vic64_core::{Machine, MachineConfig};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: {} <char.rom> <basic.rom> <kernal.rom>", args[0]);
        return ExitCode::FAILURE;
    }

    let roms = match vic64_core::rom::load_roms(&args[1], &args[2], &args[3]) {
        Ok(roms) => roms,
        Err(err) => {
            eprintln!("failed to load ROM images: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut machine = Machine::new(roms, MachineConfig::default());
    if let Err(err) = machine.power_on() {
        eprintln!("power-on failed: {err}");
        return ExitCode::FAILURE;
    }

    loop {
        machine.step_once();
        if machine.detect_stuck_pc(1000) {
            eprintln!("halted: PC not advancing with interrupts disabled");
            return ExitCode::FAILURE;
        }
    }
}
