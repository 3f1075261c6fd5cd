/*++

Licensed under the Apache-2.0 license.

File Name:

    spiflash.rs

Abstract:

    File contains the driver for the SPI NOR flash transaction engine.

--*/

use lumen_error::{LumenError, LumenResult};
use lumen_registers::spiflash;
use lumen_registers::Mmio;

use crate::wait;

/// JEDEC READ command, 3-byte address
const CMD_READ: u32 = 0x03;

/// Bits shifted per read transaction: 8 command + 24 address + 8 response
const XFER_BITS: u32 = 40;

/// How long to wait for the transfer-done bit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PollPolicy {
    /// Poll forever. An absent or unresponsive flash device hangs the
    /// boot at this call.
    Unbounded,

    /// Give up after this many unsatisfied polls and report
    /// `DRIVER_SPIFLASH_NOT_RESPONDING`.
    Bounded(u32),
}

/// SPI flash transaction engine.
///
/// Supports exactly one operation: a single-byte read at an arbitrary
/// flash offset. Each call is a complete transaction; chip select is
/// asserted fresh every time and never explicitly deasserted.
pub struct SpiFlash<M: Mmio> {
    mmio: M,
    poll: PollPolicy,
}

impl<M: Mmio> SpiFlash<M> {
    /// Create the driver with the unbounded poll behavior.
    pub fn new(mmio: M) -> Self {
        Self::with_poll_policy(mmio, PollPolicy::Unbounded)
    }

    /// Create the driver with an explicit poll policy.
    pub fn with_poll_policy(mmio: M, poll: PollPolicy) -> Self {
        Self { mmio, poll }
    }

    /// Read one byte at `addr`.
    ///
    /// Drives a full command/address/response shift on the controller and
    /// blocks until the controller reports the transfer done, subject to
    /// the poll policy.
    pub fn read_byte(&mut self, addr: u32) -> LumenResult<u8> {
        // Select the device
        self.mmio.write_u32(spiflash::CS, 1);

        // Command word: opcode in the high word, the address shifted up
        // by the response byte the controller clocks in at the end.
        self.mmio.write_u32(spiflash::MOSI0, CMD_READ);
        self.mmio.write_u32(spiflash::MOSI1, addr << 8);

        // Start a single 40-bit operation
        let mut ctrl = spiflash::XferCtrl::new(0);
        ctrl.set_bits(XFER_BITS);
        ctrl.set_ops(1);
        self.mmio.write_u32(spiflash::CONTROL, ctrl.raw());

        self.wait_done()?;

        Ok((self.mmio.read_u32(spiflash::MISO1) & 0xff) as u8)
    }

    fn wait_done(&mut self) -> LumenResult<()> {
        let mmio = &mut self.mmio;
        let mut done = || mmio.read_u32(spiflash::STATUS) & spiflash::STATUS_DONE != 0;
        match self.poll {
            PollPolicy::Unbounded => {
                wait::until(&mut done);
                Ok(())
            }
            PollPolicy::Bounded(max) => {
                if wait::until_counted(max, &mut done) {
                    Ok(())
                } else {
                    Err(LumenError::DRIVER_SPIFLASH_NOT_RESPONDING)
                }
            }
        }
    }
}
