//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from a specific
//! memory implementation, and `FlatMemory`, a zero-initialized 64KB store.
//!
//! ## Address Range
//!
//! Single-byte accesses take a `u16`, so they can never leave the address space.
//! Operations that derive further addresses from a starting one (word writes,
//! program loads) and the host-side accessors that accept `usize` addresses check
//! the range and fail with `ExecutionError::AddressOutOfRange` instead of wrapping.

use crate::{Budget, ExecutionError};

/// Number of addressable bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementors provide `read` and `write`; the remaining operations have
/// default implementations built on top of them.
///
/// # Examples
///
/// ```
/// use mini6502::{Budget, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// let mut budget = Budget::new(10);
///
/// mem.write_word(0x0100, 0xFFFE, &mut budget).unwrap();
/// assert_eq!(mem.read(0x0100), 0xFE);
/// assert_eq!(mem.read(0x0101), 0xFF);
/// assert_eq!(budget.remaining(), 8);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8);

    /// Sets every cell to zero.
    fn clear(&mut self) {
        for addr in 0..=u16::MAX {
            self.write(addr, 0);
        }
    }

    /// Stores `value` little-endian at `addr` and `addr + 1`, charging 2 budget units.
    ///
    /// Fails without touching memory or budget when `addr + 1` leaves the
    /// address space.
    fn write_word(&mut self, addr: u16, value: u16, budget: &mut Budget) -> Result<(), ExecutionError> {
        let high_addr = addr
            .checked_add(1)
            .ok_or(ExecutionError::AddressOutOfRange(addr as usize + 1))?;

        let [low, high] = value.to_le_bytes();
        self.write(addr, low);
        self.write(high_addr, high);
        budget.spend(2);

        Ok(())
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// The whole range is validated before anything is written.
    ///
    /// # Examples
    ///
    /// ```
    /// use mini6502::{ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFFFE, &[0x01, 0x02]).unwrap();
    /// assert_eq!(mem.read(0xFFFF), 0x02);
    ///
    /// assert_eq!(
    ///     mem.load(0xFFFF, &[0x01, 0x02]),
    ///     Err(ExecutionError::AddressOutOfRange(0x10000))
    /// );
    /// ```
    fn load(&mut self, start: u16, bytes: &[u8]) -> Result<(), ExecutionError> {
        let end = start as usize + bytes.len();
        if end > MEMORY_SIZE {
            return Err(ExecutionError::AddressOutOfRange(MEMORY_SIZE));
        }

        for (addr, &byte) in (start..=u16::MAX).zip(bytes) {
            self.write(addr, byte);
        }

        Ok(())
    }

    /// Lists every non-zero cell as `(address, value)`, in address order.
    fn dump(&self) -> Vec<(u16, u8)> {
        (0..=u16::MAX)
            .filter_map(|addr| {
                let value = self.read(addr);
                (value != 0).then_some((addr, value))
            })
            .collect()
    }
}

/// Simple 64KB flat memory implementation.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use mini6502::{ExecutionError, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x00FA, 229);
///
/// assert_eq!(memory.read_at(0x00FA), Ok(229));
/// assert_eq!(
///     memory.read_at(0x10000),
///     Err(ExecutionError::AddressOutOfRange(0x10000))
/// );
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Reads a byte at a host-side address, rejecting anything past 0xFFFF.
    pub fn read_at(&self, address: usize) -> Result<u8, ExecutionError> {
        self.data
            .get(address)
            .copied()
            .ok_or(ExecutionError::AddressOutOfRange(address))
    }

    /// Writes a byte at a host-side address, rejecting anything past 0xFFFF.
    pub fn write_at(&mut self, address: usize, value: u8) -> Result<(), ExecutionError> {
        let cell = self
            .data
            .get_mut(address)
            .ok_or(ExecutionError::AddressOutOfRange(address))?;
        *cell = value;
        Ok(())
    }

    /// Borrows a contiguous range of memory.
    pub fn slice(&self, start: u16, len: usize) -> Result<&[u8], ExecutionError> {
        let start = start as usize;
        let end = start
            .checked_add(len)
            .filter(|&end| end <= MEMORY_SIZE)
            .ok_or(ExecutionError::AddressOutOfRange(MEMORY_SIZE))?;
        Ok(&self.data[start..end])
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        // Initially all zeros
        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_write_word_little_endian() {
        let mut mem = FlatMemory::new();
        let mut budget = Budget::new(3);

        mem.write_word(0x4000, 0x1234, &mut budget).unwrap();

        assert_eq!(mem.read(0x4000), 0x34);
        assert_eq!(mem.read(0x4001), 0x12);
        assert_eq!(budget.remaining(), 1);
    }

    #[test]
    fn test_write_word_at_top_of_memory_is_rejected() {
        let mut mem = FlatMemory::new();
        let mut budget = Budget::new(3);

        let result = mem.write_word(0xFFFF, 0xABCD, &mut budget);

        assert_eq!(result, Err(ExecutionError::AddressOutOfRange(0x10000)));
        assert_eq!(mem.read(0xFFFF), 0x00);
        assert_eq!(budget.remaining(), 3);
    }

    #[test]
    fn test_load_past_end_writes_nothing() {
        let mut mem = FlatMemory::new();

        assert!(mem.load(0xFFFD, &[1, 2, 3, 4]).is_err());
        assert_eq!(mem.read(0xFFFD), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);
    }

    #[test]
    fn test_clear_and_dump() {
        let mut mem = FlatMemory::new();
        mem.write(0x00FA, 1);
        mem.write(0xFFFC, 0xA9);

        assert_eq!(mem.dump(), vec![(0x00FA, 1), (0xFFFC, 0xA9)]);

        mem.clear();
        assert!(mem.dump().is_empty());
    }

    #[test]
    fn test_host_accessors_check_range() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.write_at(0xFFFF, 7), Ok(()));
        assert_eq!(mem.read_at(0xFFFF), Ok(7));
        assert_eq!(
            mem.write_at(0x1_0000, 7),
            Err(ExecutionError::AddressOutOfRange(0x1_0000))
        );
        assert!(mem.slice(0xFFF0, 0x11).is_err());
        assert_eq!(mem.slice(0xFFFF, 1).unwrap(), &[7]);
    }

    #[test]
    fn test_slice_rejects_huge_length() {
        let mem = FlatMemory::new();

        assert_eq!(
            mem.slice(1, usize::MAX),
            Err(ExecutionError::AddressOutOfRange(MEMORY_SIZE))
        );
        assert_eq!(
            mem.slice(0, MEMORY_SIZE + 1),
            Err(ExecutionError::AddressOutOfRange(MEMORY_SIZE))
        );
        assert_eq!(mem.slice(0, MEMORY_SIZE).map(|bytes| bytes.len()), Ok(MEMORY_SIZE));
    }
}
