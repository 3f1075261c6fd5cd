/*++

Licensed under the Apache-2.0 license.

File Name:

    uart.rs

Abstract:

    File contains the driver for the diagnostic UART.

--*/

use core::fmt;

use lumen_registers::uart;
use lumen_registers::Mmio;

use crate::wait;

/// Diagnostic console transmitter.
pub struct Uart<M: Mmio> {
    mmio: M,
}

impl<M: Mmio> Uart<M> {
    pub fn new(mmio: M) -> Self {
        Self { mmio }
    }

    /// Bring up the transmitter: acknowledge any stale events and enable
    /// both event sources.
    pub fn init(&mut self) {
        let pending = self.mmio.read_u32(uart::EV_PENDING);
        self.mmio.write_u32(uart::EV_PENDING, pending);
        self.mmio.write_u32(uart::EV_ENABLE, uart::EV_TX | uart::EV_RX);
    }

    /// Write the string to the UART
    ///
    /// # Arguments
    ///
    /// `str` - String to write to UART
    pub fn write(&mut self, str: &str) {
        for byte in str.bytes() {
            match byte {
                0x20..=0x7e | b'\n' | b'\t' => self.write_byte(byte),
                _ => self.write_byte(0xfe),
            }
        }
    }

    /// Write the byte to the UART, blocking while the transmit FIFO is
    /// full.
    pub fn write_byte(&mut self, byte: u8) {
        let mmio = &mut self.mmio;
        wait::until(|| mmio.read_u32(uart::TXFULL) == 0);
        mmio.write_u32(uart::RXTX, byte as u32);
    }
}

impl<M: Mmio> fmt::Write for Uart<M> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s);
        Ok(())
    }
}
