/*++

Licensed under the Apache-2.0 license.

File Name:

    boot_flow.rs

Abstract:

    File contains tests running the boot flow against the emulated SoC.

--*/

use std::cell::RefCell;
use std::rc::Rc;

use lumen_drivers::{LumenError, PollPolicy, SpiFlash, NET_CONFIG_OFFSET};
use lumen_emu_bus::{BusMmio, Clock};
use lumen_emu_periph::{IdentityReg, IntcReg, LumenRootBus};
use lumen_rom::{BootConfig, BootFlow, RomEnv};

const RECORD: [u8; 10] = [192, 168, 1, 50, 0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC];

const FULL: BootConfig = BootConfig {
    interrupts: true,
    console: true,
};

struct Soc {
    env: RomEnv<BusMmio<LumenRootBus>>,
    mmio: BusMmio<LumenRootBus>,
    bus: Rc<RefCell<LumenRootBus>>,
}

fn boot_soc(record: [u8; 10]) -> Soc {
    let clock = Clock::new();
    let base = NET_CONFIG_OFFSET as usize;
    let mut image = vec![0u8; base + 64];
    image[base..base + 10].copy_from_slice(&record);

    let bus = Rc::new(RefCell::new(LumenRootBus::new(&clock, image)));
    let mmio = BusMmio::new(bus.clone(), clock);
    Soc {
        env: RomEnv::new(mmio.clone()),
        mmio,
        bus,
    }
}

#[test]
fn test_boot_publishes_identity() {
    let mut soc = boot_soc(RECORD);

    let identity = BootFlow::run(&mut soc.env, FULL).unwrap();
    assert_eq!(identity.ip.0, 0xC0A8_0132);
    assert_eq!(identity.mac.0, 0x1234_5678_9ABC);

    let bus = soc.bus.borrow();
    assert_eq!(bus.eth_mac.ip_addr(), 0xC0A8_0132);
    assert_eq!(bus.eth_mac.mac_addr(), 0x1234_5678_9ABC);

    // MAC lands before IP
    assert_eq!(
        bus.eth_mac.write_log(),
        &[
            IdentityReg::MacAddr0,
            IdentityReg::MacAddr1,
            IdentityReg::IpAddr
        ]
    );

    // Every source masked, then interrupt taking enabled
    assert_eq!(bus.intc.mask(), 0);
    assert!(bus.intc.enabled());
    assert_eq!(bus.intc.write_log(), &[IntcReg::Mask, IntcReg::Enable]);

    // Console came up, memory trained exactly once
    assert!(bus.uart.initialized());
    assert_eq!(bus.sdram.init_count(), 1);
    assert!(bus.sdram.ready());
}

#[test]
fn test_publication_is_pure_function_of_record() {
    let mut soc = boot_soc(RECORD);

    let first = BootFlow::run(&mut soc.env, FULL).unwrap();

    // Boot again over the same flash contents with a fresh environment.
    let mut env = RomEnv::new(soc.mmio.clone());
    let second = BootFlow::run(&mut env, FULL).unwrap();
    assert_eq!(first, second);

    let bus = soc.bus.borrow();
    assert_eq!(bus.eth_mac.ip_addr(), 0xC0A8_0132);
    assert_eq!(bus.eth_mac.mac_addr(), 0x1234_5678_9ABC);
    assert_eq!(
        bus.eth_mac.write_log(),
        &[
            IdentityReg::MacAddr0,
            IdentityReg::MacAddr1,
            IdentityReg::IpAddr,
            IdentityReg::MacAddr0,
            IdentityReg::MacAddr1,
            IdentityReg::IpAddr
        ]
    );
}

#[test]
fn test_no_console_build_skips_uart() {
    let mut soc = boot_soc(RECORD);
    let config = BootConfig {
        interrupts: true,
        console: false,
    };

    BootFlow::run(&mut soc.env, config).unwrap();

    let bus = soc.bus.borrow();
    // The identity still loaded...
    assert_eq!(bus.spi_flash.read_log().len(), 10);
    // ...without a single UART register access
    assert!(!bus.uart.initialized());
    assert_eq!(bus.uart.access_count(), 0);
}

#[test]
fn test_no_interrupt_hardware_skips_configuration() {
    let mut soc = boot_soc(RECORD);
    let config = BootConfig {
        interrupts: false,
        console: true,
    };

    BootFlow::run(&mut soc.env, config).unwrap();

    let bus = soc.bus.borrow();
    assert!(bus.intc.write_log().is_empty());
    assert!(!bus.intc.enabled());
}

#[test]
fn test_boundary_records() {
    let mut soc = boot_soc([0; 10]);
    BootFlow::run(&mut soc.env, FULL).unwrap();
    {
        let bus = soc.bus.borrow();
        assert_eq!(bus.eth_mac.ip_addr(), 0);
        assert_eq!(bus.eth_mac.mac_addr(), 0);
    }

    let mut soc = boot_soc([0xFF; 10]);
    BootFlow::run(&mut soc.env, FULL).unwrap();
    let bus = soc.bus.borrow();
    assert_eq!(bus.eth_mac.ip_addr(), 0xFFFF_FFFF);
    assert_eq!(bus.eth_mac.mac_addr(), 0x0000_FFFF_FFFF_FFFF);
}

#[test]
fn test_unresponsive_flash_fails_the_boot() {
    let mut soc = boot_soc(RECORD);
    soc.bus.borrow_mut().spi_flash.set_xfer_cycles(1000);
    soc.env.spi_flash = SpiFlash::with_poll_policy(soc.mmio.clone(), PollPolicy::Bounded(16));

    let result = BootFlow::run(&mut soc.env, FULL);
    assert_eq!(result.err(), Some(LumenError::DRIVER_SPIFLASH_NOT_RESPONDING));

    // The boot never published an identity
    assert!(soc.bus.borrow().eth_mac.write_log().is_empty());
}
