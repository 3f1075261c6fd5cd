/*++

Licensed under the Apache-2.0 license.

File Name:

    intc.rs

Abstract:

    File contains the driver for the interrupt controller and the
    interrupt dispatch table.

--*/

use lumen_registers::intc;
use lumen_registers::Mmio;

/// Number of interrupt sources the controller decodes.
pub const IRQ_SOURCES: usize = 32;

/// Interrupt controller driver.
pub struct IntCtrl<M: Mmio> {
    mmio: M,
}

impl<M: Mmio> IntCtrl<M> {
    pub fn new(mmio: M) -> Self {
        Self { mmio }
    }

    /// Select which sources may raise an interrupt. Zero masks them all.
    pub fn set_source_mask(&mut self, mask: u32) {
        self.mmio.write_u32(intc::MASK, mask);
    }

    /// Globally enable interrupt taking.
    pub fn enable(&mut self) {
        self.mmio.write_u32(intc::ENABLE, 1);
    }

    /// Sources currently pending.
    pub fn pending(&mut self) -> u32 {
        self.mmio.read_u32(intc::PENDING)
    }
}

/// Handler invoked with the source number that raised the interrupt.
pub type IrqHandler = fn(u32);

/// Interrupt dispatch table.
///
/// The boot firmware registers no handlers, so every delivery falls
/// through [`IrqDispatch::dispatch`] as a no-op and execution resumes
/// where it was preempted. Later firmware stages register handlers here
/// instead of replacing the trap entry.
pub struct IrqDispatch {
    handlers: [Option<IrqHandler>; IRQ_SOURCES],
}

impl IrqDispatch {
    /// An empty table: no handlers registered.
    pub const fn new() -> Self {
        Self {
            handlers: [None; IRQ_SOURCES],
        }
    }

    /// Register a handler for one source.
    pub fn register(&mut self, irq: u32, handler: IrqHandler) {
        self.handlers[irq as usize] = Some(handler);
    }

    /// Invoke the handler of every pending source that has one; sources
    /// without a handler are dropped.
    pub fn dispatch(&self, pending: u32) {
        for irq in 0..IRQ_SOURCES as u32 {
            if pending & (1 << irq) != 0 {
                if let Some(handler) = self.handlers[irq as usize] {
                    handler(irq);
                }
            }
        }
    }
}

impl Default for IrqDispatch {
    fn default() -> Self {
        Self::new()
    }
}
