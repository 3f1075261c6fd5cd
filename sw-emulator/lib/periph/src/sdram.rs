/*++

Licensed under the Apache-2.0 license.

File Name:

    sdram.rs

Abstract:

    File contains the SDRAM controller device implementation.

--*/

use lumen_emu_bus::{ActionHandle, Bus, BusError, Clock, RvAddr, RvData, RvSize, Timer};
use lumen_registers::sdram;
use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::InMemoryRegister;

/// Cycles the modeled training sequence takes.
const TRAINING_CYCLES: u64 = 32;

/// SDRAM controller model: a start bit and a ready bit with a training
/// delay in between. The training internals are outside the firmware's
/// contract, so nothing else is modeled.
pub struct SdramCtrl {
    control: InMemoryRegister<u32>,
    status: InMemoryRegister<u32>,
    timer: Timer,
    training_action: Option<ActionHandle>,
    init_count: u32,
}

impl SdramCtrl {
    pub fn new(clock: &Clock) -> Self {
        Self {
            control: InMemoryRegister::new(0),
            status: InMemoryRegister::new(0),
            timer: clock.timer(),
            training_action: None,
            init_count: 0,
        }
    }

    /// How many times firmware started the training sequence.
    pub fn init_count(&self) -> u32 {
        self.init_count
    }

    /// Whether training has completed.
    pub fn ready(&self) -> bool {
        self.status.get() & sdram::STATUS_READY != 0
    }
}

impl Bus for SdramCtrl {
    fn read(&mut self, size: RvSize, addr: RvAddr) -> Result<RvData, BusError> {
        if size != RvSize::Word {
            return Err(BusError::LoadAccessFault);
        }
        match addr {
            sdram::CONTROL => Ok(self.control.get()),
            sdram::STATUS => Ok(self.status.get()),
            _ => Err(BusError::LoadAccessFault),
        }
    }

    fn write(&mut self, size: RvSize, addr: RvAddr, val: RvData) -> Result<(), BusError> {
        if size != RvSize::Word {
            return Err(BusError::StoreAccessFault);
        }
        match addr {
            sdram::CONTROL => {
                self.control.set(val);
                if val & sdram::CONTROL_INIT != 0 {
                    self.status.set(0);
                    self.init_count += 1;
                    self.training_action = Some(self.timer.schedule_poll_in(TRAINING_CYCLES));
                }
            }
            _ => Err(BusError::StoreAccessFault)?,
        }
        Ok(())
    }

    fn poll(&mut self) {
        if self.timer.fired(&mut self.training_action) {
            self.status.set(sdram::STATUS_READY);
        }
    }
}
