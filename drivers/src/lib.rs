/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the Lumen driver library.

--*/

#![no_std]

mod ethmac;
mod identity;
mod intc;
mod sdram;
mod spiflash;
mod uart;
pub mod wait;

pub use ethmac::EthMac;
pub use identity::{Ipv4Addr, MacAddr, NetIdentity, NET_CONFIG_OFFSET};
pub use intc::{IntCtrl, IrqDispatch, IrqHandler, IRQ_SOURCES};
pub use lumen_error::{LumenError, LumenResult};
pub use lumen_registers::{Mmio, RealMmio};
pub use sdram::SdramCtrl;
pub use spiflash::{PollPolicy, SpiFlash};
pub use uart::Uart;
