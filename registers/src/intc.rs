/*++

Licensed under the Apache-2.0 license.

File Name:

    intc.rs

Abstract:

    File contains register definitions for the interrupt controller.

--*/

use crate::INTC_BASE;

/// Per-source enable mask; a set bit lets that source raise an interrupt
pub const MASK: u32 = INTC_BASE;

/// Pending sources
pub const PENDING: u32 = INTC_BASE + 0x04;

/// Global interrupt enable
pub const ENABLE: u32 = INTC_BASE + 0x08;
