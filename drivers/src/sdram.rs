/*++

Licensed under the Apache-2.0 license.

File Name:

    sdram.rs

Abstract:

    File contains the driver for the SDRAM controller's initialization
    interface.

--*/

use lumen_registers::sdram;
use lumen_registers::Mmio;

use crate::wait;

/// SDRAM controller bring-up.
pub struct SdramCtrl<M: Mmio> {
    mmio: M,
}

impl<M: Mmio> SdramCtrl<M> {
    pub fn new(mmio: M) -> Self {
        Self { mmio }
    }

    /// Start the controller's training sequence and block until it
    /// reports ready. The sequence either succeeds or never completes;
    /// firmware has no visibility into its internals.
    pub fn init(&mut self) {
        self.mmio.write_u32(sdram::CONTROL, sdram::CONTROL_INIT);
        let mmio = &mut self.mmio;
        wait::until(|| mmio.read_u32(sdram::STATUS) & sdram::STATUS_READY != 0);
    }
}
