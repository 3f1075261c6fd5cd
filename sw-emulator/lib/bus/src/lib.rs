/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the Lumen Emulator Bus library.

--*/

mod bus;
mod clock;
mod mem;
mod mmio;
mod ram;
mod rom;

pub use crate::bus::{Bus, BusError, RvAddr, RvData, RvSize};
pub use crate::clock::{ActionHandle, Clock, Timer};
pub use crate::mmio::BusMmio;
pub use crate::ram::Ram;
pub use crate::rom::Rom;
