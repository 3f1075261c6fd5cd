/*++

Licensed under the Apache-2.0 license.

File Name:

    uart.rs

Abstract:

    File contains UART device implementation.

--*/

use lumen_emu_bus::{Bus, BusError, RvAddr, RvData, RvSize};
use lumen_registers::uart;
use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::InMemoryRegister;

/// Diagnostic UART model.
///
/// Transmitted bytes are captured instead of printed; the transmit FIFO
/// never fills. The model also counts every register access so tests can
/// prove a console-less boot never touched the block.
pub struct Uart {
    ev_pending: InMemoryRegister<u32>,
    ev_enable: InMemoryRegister<u32>,
    tx_data: Vec<u8>,
    accesses: u32,
}

impl Uart {
    pub fn new() -> Self {
        Self {
            ev_pending: InMemoryRegister::new(0),
            ev_enable: InMemoryRegister::new(0),
            tx_data: Vec::new(),
            accesses: 0,
        }
    }

    /// Everything the firmware transmitted.
    pub fn output(&self) -> &[u8] {
        &self.tx_data
    }

    /// Whether the driver brought the transmitter up (any event source
    /// enabled).
    pub fn initialized(&self) -> bool {
        self.ev_enable.get() != 0
    }

    /// Total register reads and writes observed.
    pub fn access_count(&self) -> u32 {
        self.accesses
    }
}

impl Default for Uart {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for Uart {
    fn read(&mut self, size: RvSize, addr: RvAddr) -> Result<RvData, BusError> {
        if size != RvSize::Word {
            return Err(BusError::LoadAccessFault);
        }
        self.accesses += 1;
        match addr {
            uart::RXTX => Ok(0),
            uart::TXFULL => Ok(0),
            uart::RXEMPTY => Ok(1),
            uart::EV_PENDING => Ok(self.ev_pending.get()),
            uart::EV_ENABLE => Ok(self.ev_enable.get()),
            _ => Err(BusError::LoadAccessFault),
        }
    }

    fn write(&mut self, size: RvSize, addr: RvAddr, val: RvData) -> Result<(), BusError> {
        if size != RvSize::Word {
            return Err(BusError::StoreAccessFault);
        }
        self.accesses += 1;
        match addr {
            uart::RXTX => self.tx_data.push(val as u8),
            // Writing 1 to a pending bit acknowledges it
            uart::EV_PENDING => self.ev_pending.set(self.ev_pending.get() & !val),
            uart::EV_ENABLE => self.ev_enable.set(val),
            _ => Err(BusError::StoreAccessFault)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_capture() {
        let mut dev = Uart::new();
        for byte in b"hi" {
            dev.write(RvSize::Word, uart::RXTX, *byte as RvData).unwrap();
        }
        assert_eq!(dev.output(), b"hi");
    }

    #[test]
    fn test_init_tracking() {
        let mut dev = Uart::new();
        assert!(!dev.initialized());
        assert_eq!(dev.access_count(), 0);

        dev.write(RvSize::Word, uart::EV_ENABLE, uart::EV_TX | uart::EV_RX)
            .unwrap();
        assert!(dev.initialized());
        assert_eq!(dev.access_count(), 1);
    }

    #[test]
    fn test_ev_pending_ack() {
        let mut dev = Uart::new();
        dev.ev_pending.set(0b11);
        dev.write(RvSize::Word, uart::EV_PENDING, 0b01).unwrap();
        assert_eq!(dev.read(RvSize::Word, uart::EV_PENDING).unwrap(), 0b10);
    }
}
