/*++

Licensed under the Apache-2.0 license.

File Name:

    intc.rs

Abstract:

    File contains the interrupt controller device implementation.

--*/

use lumen_emu_bus::{Bus, BusError, RvAddr, RvData, RvSize};
use lumen_registers::intc;
use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::InMemoryRegister;

/// Interrupt controller registers, named for the write-order log.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IntcReg {
    Mask,
    Enable,
}

/// Interrupt controller model. No source ever raises, so pending always
/// reads zero; the model latches what the firmware programmed.
pub struct IntCtrl {
    mask: InMemoryRegister<u32>,
    enable: InMemoryRegister<u32>,
    write_log: Vec<IntcReg>,
}

impl IntCtrl {
    pub fn new() -> Self {
        Self {
            mask: InMemoryRegister::new(0),
            enable: InMemoryRegister::new(0),
            write_log: Vec::new(),
        }
    }

    /// The programmed per-source enable mask.
    pub fn mask(&self) -> u32 {
        self.mask.get()
    }

    /// Whether interrupt taking was globally enabled.
    pub fn enabled(&self) -> bool {
        self.enable.get() != 0
    }

    /// Every mask/enable write, in order.
    pub fn write_log(&self) -> &[IntcReg] {
        &self.write_log
    }
}

impl Default for IntCtrl {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for IntCtrl {
    fn read(&mut self, size: RvSize, addr: RvAddr) -> Result<RvData, BusError> {
        if size != RvSize::Word {
            return Err(BusError::LoadAccessFault);
        }
        match addr {
            intc::MASK => Ok(self.mask.get()),
            intc::PENDING => Ok(0),
            intc::ENABLE => Ok(self.enable.get()),
            _ => Err(BusError::LoadAccessFault),
        }
    }

    fn write(&mut self, size: RvSize, addr: RvAddr, val: RvData) -> Result<(), BusError> {
        if size != RvSize::Word {
            return Err(BusError::StoreAccessFault);
        }
        match addr {
            intc::MASK => {
                self.mask.set(val);
                self.write_log.push(IntcReg::Mask);
            }
            intc::ENABLE => {
                self.enable.set(val);
                self.write_log.push(IntcReg::Enable);
            }
            _ => Err(BusError::StoreAccessFault)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_and_order() {
        let mut ctrl = IntCtrl::new();
        ctrl.write(RvSize::Word, intc::MASK, 0).unwrap();
        ctrl.write(RvSize::Word, intc::ENABLE, 1).unwrap();

        assert_eq!(ctrl.mask(), 0);
        assert!(ctrl.enabled());
        assert_eq!(ctrl.write_log(), &[IntcReg::Mask, IntcReg::Enable]);
        assert_eq!(ctrl.read(RvSize::Word, intc::PENDING).unwrap(), 0);
    }
}
