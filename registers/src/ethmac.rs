/*++

Licensed under the Apache-2.0 license.

File Name:

    ethmac.rs

Abstract:

    File contains register definitions for the network MAC identity
    block. The 48-bit MAC address is exposed as two 32-bit registers,
    high word first; both identity registers are write-only from the
    CPU's perspective.

--*/

use crate::ETHMAC_BASE;

/// MAC address, bits 47:32
pub const MAC_ADDR0: u32 = ETHMAC_BASE;

/// MAC address, bits 31:0
pub const MAC_ADDR1: u32 = ETHMAC_BASE + 0x04;

/// IPv4 address
pub const IP_ADDR: u32 = ETHMAC_BASE + 0x08;
