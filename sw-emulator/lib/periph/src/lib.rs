/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the Lumen Emulator Peripherals library.

--*/

mod ethmac;
mod intc;
mod root_bus;
mod sdram;
mod spiflash;
mod uart;

pub use crate::ethmac::{EthMac, IdentityReg};
pub use crate::intc::{IntCtrl, IntcReg};
pub use crate::root_bus::LumenRootBus;
pub use crate::sdram::SdramCtrl;
pub use crate::spiflash::SpiFlashCtrl;
pub use crate::uart::Uart;
