/*++

Licensed under the Apache-2.0 license.

File Name:

    rom.rs

Abstract:

    File contains implementation of ROM

--*/

use crate::bus::{Bus, BusError, RvAddr, RvData, RvSize};
use crate::mem::Mem;

/// Read Only Memory Device
pub struct Rom {
    /// Read Only Data
    data: Mem,
}

impl Rom {
    /// Create new ROM
    ///
    /// # Arguments
    ///
    /// * `data` - Data to be stored in the ROM
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data: Mem::new(data),
        }
    }

    pub fn mmap_size(&self) -> RvAddr {
        self.data.len() as RvAddr
    }

    pub fn data(&self) -> &[u8] {
        self.data.data()
    }
}

impl Bus for Rom {
    fn read(&mut self, size: RvSize, addr: RvAddr) -> Result<RvData, BusError> {
        Ok(self.data.read(size, addr)?)
    }

    /// Writes are always a store fault; the device is read only.
    fn write(&mut self, _size: RvSize, _addr: RvAddr, _val: RvData) -> Result<(), BusError> {
        Err(BusError::StoreAccessFault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read() {
        let mut rom = Rom::new(vec![1, 2, 3, 4]);
        assert_eq!(rom.read(RvSize::Word, 0).ok(), Some(0x0403_0201));
    }

    #[test]
    fn test_write() {
        let mut rom = Rom::new(vec![1, 2, 3, 4]);
        assert_eq!(
            rom.write(RvSize::Byte, 0, 0).err(),
            Some(BusError::StoreAccessFault)
        );
    }
}
