/*++

Licensed under the Apache-2.0 license.

File Name:

    mmio.rs

Abstract:

    File contains the hardware access capability used by the drivers.

--*/

/// Hardware access capability.
///
/// All register traffic in the drivers goes through an `Mmio`
/// implementation handed to the driver at construction time. On the SoC
/// this is [`RealMmio`]; the software emulator substitutes an
/// implementation backed by its bus so the same driver code runs against
/// simulated devices in tests.
pub trait Mmio {
    /// Read a 32-bit register at the given physical address.
    fn read_u32(&mut self, addr: u32) -> u32;

    /// Write a 32-bit register at the given physical address.
    fn write_u32(&mut self, addr: u32, val: u32);
}

/// Register access via volatile loads and stores.
#[derive(Clone, Copy, Debug)]
pub struct RealMmio {
    _private: (),
}

impl RealMmio {
    /// Create the hardware access capability.
    ///
    /// # Safety
    ///
    /// The caller must be executing on the SoC, where the addresses in
    /// this crate decode to the peripherals they name. Creating more than
    /// one instance aliases the register file; the ROM creates exactly
    /// one per driver, all from the single-threaded boot path.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl Mmio for RealMmio {
    fn read_u32(&mut self, addr: u32) -> u32 {
        unsafe { core::ptr::read_volatile(addr as *const u32) }
    }

    fn write_u32(&mut self, addr: u32, val: u32) {
        unsafe { core::ptr::write_volatile(addr as *mut u32, val) }
    }
}
