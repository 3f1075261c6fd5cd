/*++

Licensed under the Apache-2.0 license.

File Name:

    mmio.rs

Abstract:

    File contains an Mmio implementation that reads and writes to a Bus,
    so driver code written against the hardware access capability runs
    against emulated devices.

--*/

use std::cell::RefCell;
use std::rc::Rc;

use lumen_registers::Mmio;

use crate::{Bus, Clock, RvSize};

/// An MMIO implementation backed by a shared [`Bus`].
///
/// Every register access advances the clock by one cycle and processes
/// fired timer actions, so deferred peripheral behavior (a flash
/// transfer completing, SDRAM training finishing) unfolds while the
/// firmware is busy-polling, the way it does on hardware.
pub struct BusMmio<TBus: Bus> {
    bus: Rc<RefCell<TBus>>,
    clock: Clock,
}

impl<TBus: Bus> BusMmio<TBus> {
    pub fn new(bus: Rc<RefCell<TBus>>, clock: Clock) -> Self {
        Self { bus, clock }
    }
}

impl<TBus: Bus> Clone for BusMmio<TBus> {
    fn clone(&self) -> Self {
        Self {
            bus: Rc::clone(&self.bus),
            clock: self.clock.clone(),
        }
    }
}

impl<TBus: Bus> Mmio for BusMmio<TBus> {
    /// Loads from address `addr` on the bus and returns the value.
    ///
    /// # Panics
    ///
    /// Panics if the bus faults; in a test that means the firmware
    /// touched an address the SoC does not decode.
    fn read_u32(&mut self, addr: u32) -> u32 {
        let mut bus = self.bus.borrow_mut();
        let val = bus
            .read(RvSize::Word, addr)
            .unwrap_or_else(|e| panic!("bus fault reading {addr:#010x}: {e:?}"));
        self.clock
            .increment_and_process_timer_actions(1, &mut *bus);
        val
    }

    /// Stores `val` to address `addr` on the bus.
    ///
    /// # Panics
    ///
    /// Panics if the bus faults.
    fn write_u32(&mut self, addr: u32, val: u32) {
        let mut bus = self.bus.borrow_mut();
        bus.write(RvSize::Word, addr, val)
            .unwrap_or_else(|e| panic!("bus fault writing {addr:#010x}: {e:?}"));
        self.clock
            .increment_and_process_timer_actions(1, &mut *bus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ram;

    #[test]
    fn test_bus_mmio() {
        let clock = Clock::new();
        let ram = Rc::new(RefCell::new(Ram::new(vec![0u8; 16])));
        let mut mmio = BusMmio::new(ram.clone(), clock.clone());

        mmio.write_u32(4, 0x3abc_9321);
        assert_eq!(mmio.read_u32(4), 0x3abc_9321);
        assert_eq!(ram.borrow().data()[4..8], [0x21, 0x93, 0xbc, 0x3a]);

        // One cycle per access
        assert_eq!(clock.now(), 2);
    }

    #[test]
    #[should_panic(expected = "bus fault reading")]
    fn test_bus_mmio_fault() {
        let clock = Clock::new();
        let ram = Rc::new(RefCell::new(Ram::new(vec![0u8; 4])));
        let mut mmio = BusMmio::new(ram, clock);
        mmio.read_u32(0x1000);
    }
}
