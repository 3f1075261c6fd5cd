/*++

Licensed under the Apache-2.0 license.

File Name:

    root_bus.rs

Abstract:

    File contains the root Bus implementation for the emulated Lumen SoC.

--*/

use lumen_emu_bus::{Bus, BusError, Clock, RvAddr, RvData, RvSize};
use lumen_registers::{
    CSR_BLOCK_SIZE, ETHMAC_BASE, INTC_BASE, SDRAM_BASE, SPIFLASH_BASE, UART_BASE,
};

use crate::{EthMac, IntCtrl, SdramCtrl, SpiFlashCtrl, Uart};

/// The emulated SoC: every peripheral the boot firmware can touch,
/// dispatched by CSR block.
pub struct LumenRootBus {
    pub intc: IntCtrl,
    pub uart: Uart,
    pub spi_flash: SpiFlashCtrl,
    pub eth_mac: EthMac,
    pub sdram: SdramCtrl,
}

impl LumenRootBus {
    /// Build the SoC with the given NOR flash contents.
    pub fn new(clock: &Clock, flash_image: Vec<u8>) -> Self {
        Self {
            intc: IntCtrl::new(),
            uart: Uart::new(),
            spi_flash: SpiFlashCtrl::new(clock, flash_image),
            eth_mac: EthMac::new(),
            sdram: SdramCtrl::new(clock),
        }
    }

    fn device(&mut self, addr: RvAddr) -> Option<&mut dyn Bus> {
        match addr & !(CSR_BLOCK_SIZE - 1) {
            INTC_BASE => Some(&mut self.intc),
            UART_BASE => Some(&mut self.uart),
            SPIFLASH_BASE => Some(&mut self.spi_flash),
            ETHMAC_BASE => Some(&mut self.eth_mac),
            SDRAM_BASE => Some(&mut self.sdram),
            _ => None,
        }
    }
}

impl Bus for LumenRootBus {
    fn read(&mut self, size: RvSize, addr: RvAddr) -> Result<RvData, BusError> {
        match self.device(addr) {
            Some(dev) => dev.read(size, addr),
            None => Err(BusError::LoadAccessFault),
        }
    }

    fn write(&mut self, size: RvSize, addr: RvAddr, val: RvData) -> Result<(), BusError> {
        match self.device(addr) {
            Some(dev) => dev.write(size, addr, val),
            None => Err(BusError::StoreAccessFault),
        }
    }

    fn poll(&mut self) {
        self.spi_flash.poll();
        self.sdram.poll();
    }
}
