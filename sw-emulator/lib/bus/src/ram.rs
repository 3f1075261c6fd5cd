/*++

Licensed under the Apache-2.0 license.

File Name:

    ram.rs

Abstract:

    File contains implementation of RAM

--*/

use crate::bus::{Bus, BusError, RvAddr, RvData, RvSize};
use crate::mem::Mem;

/// Random Access Memory Device
pub struct Ram {
    /// Data
    data: Mem,
}

impl Ram {
    /// Create new RAM
    ///
    /// # Arguments
    ///
    /// * `data` - Data to be stored in the RAM
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

    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data.data_mut()
    }
}

impl Bus for Ram {
    fn read(&mut self, size: RvSize, addr: RvAddr) -> Result<RvData, BusError> {
        Ok(self.data.read(size, addr)?)
    }

    fn write(&mut self, size: RvSize, addr: RvAddr, val: RvData) -> Result<(), BusError> {
        Ok(self.data.write(size, addr, val)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read() {
        let mut ram = Ram::new(vec![1, 2, 3, 4]);
        assert_eq!(ram.read(RvSize::Byte, 0).ok(), Some(1));
        assert_eq!(ram.read(RvSize::HalfWord, 0).ok(), Some(1 | 2 << 8));
        assert_eq!(
            ram.read(RvSize::Word, 0).ok(),
            Some(1 | 2 << 8 | 3 << 16 | 4 << 24)
        );
    }

    #[test]
    fn test_read_error() {
        let mut ram = Ram::new(vec![1, 2, 3, 4]);
        let addr = ram.mmap_size();
        assert_eq!(
            ram.read(RvSize::Byte, addr).err(),
            Some(BusError::LoadAccessFault)
        );
    }

    #[test]
    fn test_write() {
        let mut ram = Ram::new(vec![1, 2, 3, 4]);
        assert_eq!(ram.write(RvSize::Byte, 0, u32::MAX).ok(), Some(()));
        assert_eq!(ram.read(RvSize::Byte, 0).ok(), Some(0xff));
    }

    #[test]
    fn test_write_error() {
        let mut ram = Ram::new(vec![1, 2, 3, 4]);
        let addr = ram.mmap_size();
        assert_eq!(
            ram.write(RvSize::Byte, addr, 0).err(),
            Some(BusError::StoreAccessFault)
        );
    }
}
