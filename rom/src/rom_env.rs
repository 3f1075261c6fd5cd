/*++

Licensed under the Apache-2.0 license.

File Name:

    rom_env.rs

Abstract:

    File implements a context holding all the drivers utilized by the
    ROM. The primary need for this abstraction is to hide the hardware
    details from the boot flow; it is generic over the hardware access
    capability so the tests substitute the emulated SoC.

--*/

use lumen_drivers::{EthMac, IntCtrl, Mmio, PollPolicy, RealMmio, SdramCtrl, SpiFlash, Uart};

/// Flash status polls before the boot gives up on the device.
///
/// Generous: a healthy controller completes a 40-bit shift within tens
/// of cycles. [`PollPolicy::Unbounded`] restores the hang-forever
/// behavior when that is wanted for compatibility testing.
pub const SPIFLASH_POLL_BOUND: u32 = 1_000_000;

/// ROM Context
pub struct RomEnv<M: Mmio> {
    /// Interrupt controller
    pub intc: IntCtrl<M>,

    /// Diagnostic UART
    pub uart: Uart<M>,

    /// SPI flash transaction engine
    pub spi_flash: SpiFlash<M>,

    /// Network MAC identity registers
    pub eth_mac: EthMac<M>,

    /// SDRAM controller
    pub sdram: SdramCtrl<M>,
}

impl RomEnv<RealMmio> {
    /// Build the context over the SoC's register file.
    ///
    /// # Safety
    ///
    /// Must only be called while executing on the SoC; see
    /// [`RealMmio::new`].
    pub unsafe fn new_from_registers() -> Self {
        Self::new(RealMmio::new())
    }
}

impl<M: Mmio + Clone> RomEnv<M> {
    /// Build the context over any hardware access capability.
    pub fn new(mmio: M) -> Self {
        Self {
            intc: IntCtrl::new(mmio.clone()),
            uart: Uart::new(mmio.clone()),
            spi_flash: SpiFlash::with_poll_policy(
                mmio.clone(),
                PollPolicy::Bounded(SPIFLASH_POLL_BOUND),
            ),
            eth_mac: EthMac::new(mmio.clone()),
            sdram: SdramCtrl::new(mmio),
        }
    }
}
