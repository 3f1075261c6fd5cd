/*++

Licensed under the Apache-2.0 license.

File Name:

    ethmac.rs

Abstract:

    File contains the network MAC identity-register device
    implementation.

--*/

use lumen_emu_bus::{Bus, BusError, RvAddr, RvData, RvSize};
use lumen_registers::ethmac;
use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::InMemoryRegister;

/// Identity registers, named for the write-order log.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IdentityReg {
    MacAddr0,
    MacAddr1,
    IpAddr,
}

/// Network MAC identity latch.
///
/// The registers are write-only from the CPU side, matching the
/// hardware; tests observe the latched values and the order they were
/// written in through the accessors.
pub struct EthMac {
    mac0: InMemoryRegister<u32>,
    mac1: InMemoryRegister<u32>,
    ip: InMemoryRegister<u32>,
    write_log: Vec<IdentityReg>,
}

impl EthMac {
    pub fn new() -> Self {
        Self {
            mac0: InMemoryRegister::new(0),
            mac1: InMemoryRegister::new(0),
            ip: InMemoryRegister::new(0),
            write_log: Vec::new(),
        }
    }

    /// The latched 48-bit MAC address.
    pub fn mac_addr(&self) -> u64 {
        ((self.mac0.get() as u64) << 32) | self.mac1.get() as u64
    }

    /// The latched IPv4 address.
    pub fn ip_addr(&self) -> u32 {
        self.ip.get()
    }

    /// Every identity-register write, in order.
    pub fn write_log(&self) -> &[IdentityReg] {
        &self.write_log
    }
}

impl Default for EthMac {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for EthMac {
    /// The identity registers are write-only.
    fn read(&mut self, _size: RvSize, _addr: RvAddr) -> Result<RvData, BusError> {
        Err(BusError::LoadAccessFault)
    }

    fn write(&mut self, size: RvSize, addr: RvAddr, val: RvData) -> Result<(), BusError> {
        if size != RvSize::Word {
            return Err(BusError::StoreAccessFault);
        }
        match addr {
            ethmac::MAC_ADDR0 => {
                self.mac0.set(val);
                self.write_log.push(IdentityReg::MacAddr0);
            }
            ethmac::MAC_ADDR1 => {
                self.mac1.set(val);
                self.write_log.push(IdentityReg::MacAddr1);
            }
            ethmac::IP_ADDR => {
                self.ip.set(val);
                self.write_log.push(IdentityReg::IpAddr);
            }
            _ => Err(BusError::StoreAccessFault)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_latch() {
        let mut mac = EthMac::new();
        mac.write(RvSize::Word, ethmac::MAC_ADDR0, 0x1234).unwrap();
        mac.write(RvSize::Word, ethmac::MAC_ADDR1, 0x5678_9ABC)
            .unwrap();
        mac.write(RvSize::Word, ethmac::IP_ADDR, 0xC0A8_0132).unwrap();

        assert_eq!(mac.mac_addr(), 0x1234_5678_9ABC);
        assert_eq!(mac.ip_addr(), 0xC0A8_0132);
        assert_eq!(
            mac.write_log(),
            &[
                IdentityReg::MacAddr0,
                IdentityReg::MacAddr1,
                IdentityReg::IpAddr
            ]
        );
    }

    #[test]
    fn test_write_only() {
        let mut mac = EthMac::new();
        assert_eq!(
            mac.read(RvSize::Word, ethmac::IP_ADDR).err(),
            Some(BusError::LoadAccessFault)
        );
    }
}
