/*++

Licensed under the Apache-2.0 license.

File Name:

    sdram.rs

Abstract:

    File contains register definitions for the SDRAM controller's
    initialization interface. The training sequence itself runs inside
    the controller; firmware only starts it and waits for completion.

--*/

use crate::SDRAM_BASE;

/// Initialization control
pub const CONTROL: u32 = SDRAM_BASE;

/// Initialization status
pub const STATUS: u32 = SDRAM_BASE + 0x04;

/// Start-initialization bit in [`CONTROL`]
pub const CONTROL_INIT: u32 = 1 << 0;

/// Training-complete bit in [`STATUS`]
pub const STATUS_READY: u32 = 1 << 0;
