/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains the register map for the Lumen SoC.

    The addresses below are deployment constants produced from the hardware
    description of the SoC; every peripheral occupies one 2 KiB CSR block.

--*/
#![no_std]

mod mmio;

pub mod ethmac;
pub mod intc;
pub mod sdram;
pub mod spiflash;
pub mod uart;

pub use mmio::{Mmio, RealMmio};

/// Interrupt controller CSR block
pub const INTC_BASE: u32 = 0xF000_0000;

/// UART CSR block
pub const UART_BASE: u32 = 0xF000_0800;

/// SPI flash controller CSR block
pub const SPIFLASH_BASE: u32 = 0xF000_1000;

/// Network MAC CSR block
pub const ETHMAC_BASE: u32 = 0xF000_1800;

/// SDRAM controller CSR block
pub const SDRAM_BASE: u32 = 0xF000_2000;

/// Size of one CSR block; peripheral decoding masks addresses down to
/// this granularity.
pub const CSR_BLOCK_SIZE: u32 = 0x800;
