/*++

Licensed under the Apache-2.0 license.

File Name:

    bus.rs

Abstract:

    File contains definition of the Bus trait and its core types.

--*/

/// Bus data width
pub type RvData = u32;

/// Bus address width
pub type RvAddr = u32;

/// Bus IO operation size
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum RvSize {
    Byte = 1,
    HalfWord = 2,
    Word = 4,
}

impl From<RvSize> for usize {
    fn from(size: RvSize) -> usize {
        size as usize
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BusError {
    /// Load address misaligned exception
    LoadAddrMisaligned,

    /// Load access fault exception
    LoadAccessFault,

    /// Store address misaligned exception
    StoreAddrMisaligned,

    /// Store access fault exception
    StoreAccessFault,
}

/// Represents an abstract memory bus. Used to read and write from RAM and
/// peripheral addresses.
pub trait Bus {
    /// Read data of specified size from given address
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the read
    /// * `addr` - Address to read from
    fn read(&mut self, size: RvSize, addr: RvAddr) -> Result<RvData, BusError>;

    /// Write data of specified size to given address
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the write
    /// * `addr` - Address to write
    /// * `val` - Data to write
    fn write(&mut self, size: RvSize, addr: RvAddr, val: RvData) -> Result<(), BusError>;

    /// Called by the clock whenever a scheduled timer action has fired;
    /// peripherals with deferred behavior complete it here.
    fn poll(&mut self) {}
}
