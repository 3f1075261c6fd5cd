/*++

Licensed under the Apache-2.0 license.

File Name:

    flow.rs

Abstract:

    File contains the implementation of the boot flow.

--*/

use lumen_drivers::{LumenResult, Mmio, NetIdentity};

use crate::cprintln;
use crate::rom_env::RomEnv;

/// Hardware configuration of this build, evaluated once at startup and
/// threaded through the boot transitions. A peripheral that is absent is
/// skipped entirely; its registers are never touched.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BootConfig {
    /// The CPU has interrupt hardware
    pub interrupts: bool,

    /// A console UART is present
    pub console: bool,
}

impl BootConfig {
    /// The configuration selected by the build's feature set.
    pub const fn from_build() -> Self {
        Self {
            interrupts: cfg!(feature = "interrupts"),
            console: cfg!(feature = "uart"),
        }
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self::from_build()
    }
}

/// Boot Flow
///
/// Orders bring-up from reset to the terminal idle state:
/// interrupt configuration, console enablement, identity retrieval from
/// flash, identity publication, memory bring-up. The caller enters idle;
/// the flow returns the identity it published so it can be observed.
pub struct BootFlow {}

impl BootFlow {
    /// Execute the boot flow.
    ///
    /// # Arguments
    ///
    /// * `env` - ROM Environment
    /// * `config` - Hardware configuration of this build
    #[inline(never)]
    pub fn run<M: Mmio>(env: &mut RomEnv<M>, config: BootConfig) -> LumenResult<NetIdentity> {
        // Reset -> InterruptsConfigured: mask every source, then allow
        // the CPU to take interrupts at all.
        if config.interrupts {
            env.intc.set_source_mask(0);
            env.intc.enable();
        }

        // InterruptsConfigured -> ConsoleReady
        if config.console {
            env.uart.init();
        }

        cprintln!("[boot] ++");

        // ConsoleReady -> IdentityLoaded
        let identity = NetIdentity::load(&mut env.spi_flash)?;
        cprintln!("[boot] ip  = {}", identity.ip);
        cprintln!("[boot] mac = {}", identity.mac);

        // IdentityLoaded -> IdentityPublished: MAC first, then IP.
        env.eth_mac.set_mac_addr(identity.mac);
        env.eth_mac.set_ip_addr(identity.ip);

        // IdentityPublished -> MemoryReady
        cprintln!("[sdram] ++");
        env.sdram.init();
        cprintln!("[sdram] --");

        cprintln!("[boot] --");
        Ok(identity)
    }
}
