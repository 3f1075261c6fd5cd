/*++

Licensed under the Apache-2.0 license.

File Name:

    spiflash.rs

Abstract:

    File contains register definitions for the SPI flash controller.

    The controller shifts out the top `bits` bits of the 64-bit MOSI word
    MSB-first and latches whatever the device answers into the 64-bit MISO
    word. Both wide words are exposed as two 32-bit registers, high word
    first.

--*/

use bitfield::bitfield;

use crate::SPIFLASH_BASE;

/// Chip select; write 1 to drive the select line active
pub const CS: u32 = SPIFLASH_BASE;

/// Outgoing shift word, bits 63:32
pub const MOSI0: u32 = SPIFLASH_BASE + 0x04;

/// Outgoing shift word, bits 31:0
pub const MOSI1: u32 = SPIFLASH_BASE + 0x08;

/// Transfer control; writing starts the transfer
pub const CONTROL: u32 = SPIFLASH_BASE + 0x0C;

/// Transfer status
pub const STATUS: u32 = SPIFLASH_BASE + 0x10;

/// Incoming shift word, bits 63:32
pub const MISO0: u32 = SPIFLASH_BASE + 0x14;

/// Incoming shift word, bits 31:0
pub const MISO1: u32 = SPIFLASH_BASE + 0x18;

/// Transfer-done bit in [`STATUS`]
pub const STATUS_DONE: u32 = 1 << 0;

bitfield! {
    /// Transfer control word
    #[derive(Clone, Copy)]
    pub struct XferCtrl(u32);

    /// Number of chained operations started by this write
    pub u32, ops, set_ops: 7, 0;

    /// Bit length of the shift
    pub u32, bits, set_bits: 15, 8;
}

impl XferCtrl {
    pub fn new(val: u32) -> Self {
        Self(val)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}
