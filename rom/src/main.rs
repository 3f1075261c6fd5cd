/*++

Licensed under the Apache-2.0 license.

File Name:

    main.rs

Abstract:

    File contains main entry point for the Lumen boot ROM

--*/
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(feature = "std"), no_main)]

use lumen_drivers::{IntCtrl, IrqDispatch};
use lumen_error::LumenError;
use lumen_registers::RealMmio;
use lumen_rom::print::HexU32;
use lumen_rom::{cprintln, BootConfig, BootFlow, RomEnv};

#[cfg(all(not(feature = "std"), feature = "riscv"))]
core::arch::global_asm!(include_str!("start.S"));

#[cfg(feature = "std")]
pub fn main() {}

const BANNER: &str = r#"
Running Lumen ROM ...
"#;

/// No handlers are registered at boot; every interrupt that arrives is
/// dropped by the dispatch table.
static IRQ_DISPATCH: IrqDispatch = IrqDispatch::new();

#[no_mangle]
pub extern "C" fn rom_entry() -> ! {
    cprintln!("{}", BANNER);

    let mut env = unsafe { RomEnv::new_from_registers() };

    if let Err(err) = BootFlow::run(&mut env, BootConfig::from_build()) {
        handle_fatal_error(err);
    }

    // MemoryReady -> Idle: terminal state, nothing left to run until the
    // next power cycle.
    #[allow(clippy::empty_loop)]
    loop {}
}

/// Trap target. Interrupts go through the dispatch table and resume;
/// anything else is an exception the ROM cannot continue from.
#[no_mangle]
#[inline(never)]
pub extern "C" fn rom_trap_handler(mcause: u32) {
    const INTERRUPT: u32 = 1 << 31;

    if mcause & INTERRUPT != 0 {
        let mut intc = IntCtrl::new(unsafe { RealMmio::new() });
        IRQ_DISPATCH.dispatch(intc.pending());
    } else {
        handle_fatal_error(LumenError::ROM_GLOBAL_EXCEPTION);
    }
}

#[panic_handler]
#[inline(never)]
#[cfg(not(feature = "std"))]
fn rom_panic(_: &core::panic::PanicInfo) -> ! {
    cprintln!("Panic!!");
    handle_fatal_error(LumenError::ROM_GLOBAL_PANIC);
}

#[allow(clippy::empty_loop)]
fn handle_fatal_error(err: LumenError) -> ! {
    cprintln!("ROM Fatal Error: {}", HexU32(err.into()));
    loop {}
}
