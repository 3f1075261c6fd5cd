/*++

Licensed under the Apache-2.0 license.

File Name:

    uart.rs

Abstract:

    File contains register definitions for the diagnostic UART.

--*/

use crate::UART_BASE;

/// Transmit/receive holding register
pub const RXTX: u32 = UART_BASE;

/// Transmit FIFO full flag
pub const TXFULL: u32 = UART_BASE + 0x04;

/// Receive FIFO empty flag
pub const RXEMPTY: u32 = UART_BASE + 0x08;

/// Event pending; write 1 to a bit to acknowledge it
pub const EV_PENDING: u32 = UART_BASE + 0x0C;

/// Event enable
pub const EV_ENABLE: u32 = UART_BASE + 0x10;

/// Transmit-ready event bit
pub const EV_TX: u32 = 1 << 0;

/// Receive-ready event bit
pub const EV_RX: u32 = 1 << 1;
