/*++

Licensed under the Apache-2.0 license.

File Name:

    spiflash.rs

Abstract:

    File contains the SPI flash controller device implementation,
    including the NOR array behind it.

--*/

use lumen_emu_bus::{ActionHandle, Bus, BusError, Clock, Rom, RvAddr, RvData, RvSize, Timer};
use lumen_registers::spiflash;
use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::InMemoryRegister;

/// Cycles between a transfer start and the done bit, unless overridden.
const DEFAULT_XFER_CYCLES: u64 = 16;

/// A transfer in flight: the response byte the device will present, and
/// the decoded flash address when the framing was a well-formed read.
struct PendingXfer {
    addr: Option<RvAddr>,
    data: u8,
}

/// SPI flash controller model.
///
/// Mirrors the controller's framing: the top `bits` bits of the 64-bit
/// MOSI word shift out MSB-first, and the device's answer lands in the
/// low MISO word. Only the JEDEC READ (0x03) 40-bit framing addresses
/// the NOR array; any other shift completes with an all-ones response.
pub struct SpiFlashCtrl {
    cs: InMemoryRegister<u32>,
    mosi0: InMemoryRegister<u32>,
    mosi1: InMemoryRegister<u32>,
    control: InMemoryRegister<u32>,
    status: InMemoryRegister<u32>,
    miso0: InMemoryRegister<u32>,
    miso1: InMemoryRegister<u32>,

    /// NOR array contents
    image: Rom,

    timer: Timer,
    xfer_cycles: u64,
    op_complete_action: Option<ActionHandle>,
    pending_xfer: Option<PendingXfer>,

    /// Addresses of completed, device-selected reads, in completion order
    read_log: Vec<RvAddr>,
}

impl SpiFlashCtrl {
    pub fn new(clock: &Clock, image: Vec<u8>) -> Self {
        Self {
            cs: InMemoryRegister::new(0),
            mosi0: InMemoryRegister::new(0),
            mosi1: InMemoryRegister::new(0),
            control: InMemoryRegister::new(0),
            status: InMemoryRegister::new(0),
            miso0: InMemoryRegister::new(0),
            miso1: InMemoryRegister::new(0),
            image: Rom::new(image),
            timer: clock.timer(),
            xfer_cycles: DEFAULT_XFER_CYCLES,
            op_complete_action: None,
            pending_xfer: None,
            read_log: Vec::new(),
        }
    }

    /// Override how many cycles a transfer takes to complete.
    pub fn set_xfer_cycles(&mut self, cycles: u64) {
        self.xfer_cycles = cycles;
    }

    /// Whether the select line is currently driven active.
    pub fn selected(&self) -> bool {
        self.cs.get() != 0
    }

    /// Addresses of every completed read, in order.
    pub fn read_log(&self) -> &[RvAddr] {
        &self.read_log
    }

    fn start_xfer(&mut self, ctrl: u32) {
        let ctrl = spiflash::XferCtrl::new(ctrl);
        if ctrl.ops() == 0 {
            return;
        }

        self.status.set(0);
        self.miso0.set(0);
        self.miso1.set(0);

        let mosi = ((self.mosi0.get() as u64) << 32) | self.mosi1.get() as u64;
        let mut xfer = PendingXfer {
            addr: None,
            data: 0xFF,
        };

        // An unselected device leaves the response line floating high.
        if self.selected() && ctrl.bits() == 40 && (mosi >> 32) & 0xFF == 0x03 {
            let addr = ((mosi >> 8) & 0x00FF_FFFF) as RvAddr;
            xfer.addr = Some(addr);
            // Reads past the array return erased NOR
            xfer.data = self
                .image
                .read(RvSize::Byte, addr)
                .map_or(0xFF, |data| data as u8);
        }

        self.pending_xfer = Some(xfer);
        self.op_complete_action = Some(self.timer.schedule_poll_in(self.xfer_cycles));
    }
}

impl Bus for SpiFlashCtrl {
    fn read(&mut self, size: RvSize, addr: RvAddr) -> Result<RvData, BusError> {
        if size != RvSize::Word {
            return Err(BusError::LoadAccessFault);
        }
        match addr {
            spiflash::CS => Ok(self.cs.get()),
            spiflash::MOSI0 => Ok(self.mosi0.get()),
            spiflash::MOSI1 => Ok(self.mosi1.get()),
            spiflash::CONTROL => Ok(self.control.get()),
            spiflash::STATUS => Ok(self.status.get()),
            spiflash::MISO0 => Ok(self.miso0.get()),
            spiflash::MISO1 => Ok(self.miso1.get()),
            _ => Err(BusError::LoadAccessFault),
        }
    }

    fn write(&mut self, size: RvSize, addr: RvAddr, val: RvData) -> Result<(), BusError> {
        if size != RvSize::Word {
            return Err(BusError::StoreAccessFault);
        }
        match addr {
            spiflash::CS => self.cs.set(val),
            spiflash::MOSI0 => self.mosi0.set(val),
            spiflash::MOSI1 => self.mosi1.set(val),
            spiflash::CONTROL => {
                self.control.set(val);
                self.start_xfer(val);
            }
            _ => Err(BusError::StoreAccessFault)?,
        }
        Ok(())
    }

    fn poll(&mut self) {
        if self.timer.fired(&mut self.op_complete_action) {
            if let Some(xfer) = self.pending_xfer.take() {
                self.miso1.set(xfer.data as RvData);
                self.status.set(spiflash::STATUS_DONE);
                if let Some(addr) = xfer.addr {
                    self.read_log.push(addr);
                }
            }
        }
    }
}
