//! Shared-memory I/O window (spec component C1).
//!
//! A [`SharedMemoryWindow`] is a contiguous byte range identified by a
//! physical address, a local virtual address, and a size. Every access is
//! bounds-checked against the window and every multi-byte access is
//! little-endian, matching `morpheus-network::asm::core::mmio`'s contract
//! for fixed-width MMIO accessors — except here the backing store is a
//! shared-memory region rather than a device register file, so reads and
//! writes move whole byte ranges via volatile copies rather than a single
//! ASM intrinsic per width.
//!
//! No caching policy is imposed: callers that need an uncached mapping or
//! explicit cache maintenance around block operations arrange that when they
//! construct the window's `vaddr`. The window itself only guarantees bounds
//! safety and ordering between bytes written and the byte count reported.

use crate::error::{AmpError, Result};

/// A borrowed window onto shared memory.
///
/// The window does not own the memory it describes and never frees it: it
/// is borrowed for the life of whatever bus or queue pair is built on top of
/// it (spec.md §9, "Shared-memory ownership").
#[derive(Debug, Clone, Copy)]
pub struct SharedMemoryWindow {
    paddr: u64,
    vaddr: usize,
    size: usize,
}

impl SharedMemoryWindow {
    /// Build a window over `size` bytes of shared memory, mapped locally at
    /// `vaddr` and known to the peer at physical address `paddr`.
    ///
    /// # Safety
    /// `vaddr` must be a valid, writable mapping of at least `size` bytes for
    /// the lifetime of every `SharedMemoryWindow` built from it, and must
    /// remain valid for as long as any handle derived from it is used.
    pub unsafe fn new(paddr: u64, vaddr: usize, size: usize) -> Self {
        Self { paddr, vaddr, size }
    }

    /// Physical address of the start of the window, as seen by the peer.
    pub fn paddr(&self) -> u64 {
        self.paddr
    }

    /// Size of the window in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    fn bounds_check(&self, offset: usize, len: usize) -> Result<*mut u8> {
        let end = offset.checked_add(len).ok_or(AmpError::ShortIo)?;
        if end > self.size {
            return Err(AmpError::ShortIo);
        }
        // SAFETY: `vaddr` was asserted valid for `size` bytes at construction
        // time, and `offset + len <= size` was just checked above.
        Ok((self.vaddr as *mut u8).wrapping_add(offset))
    }

    /// Copy exactly `dst.len()` bytes from the window starting at `offset`.
    pub fn block_read(&self, offset: usize, dst: &mut [u8]) -> Result<()> {
        let src = self.bounds_check(offset, dst.len())?;
        for (i, byte) in dst.iter_mut().enumerate() {
            // SAFETY: `src.add(i)` stays within the bounds just checked.
            *byte = unsafe { core::ptr::read_volatile(src.add(i)) };
        }
        Ok(())
    }

    /// Copy exactly `src.len()` bytes into the window starting at `offset`.
    pub fn block_write(&self, offset: usize, src: &[u8]) -> Result<()> {
        let dst = self.bounds_check(offset, src.len())?;
        for (i, byte) in src.iter().enumerate() {
            // SAFETY: `dst.add(i)` stays within the bounds just checked.
            unsafe { core::ptr::write_volatile(dst.add(i), *byte) };
        }
        Ok(())
    }

    /// Read a little-endian `u16` at `offset`.
    ///
    /// # Safety requirement
    /// `offset` should be 2-byte aligned relative to the window's mapping;
    /// this is not enforced (the window may back a packed shared-memory
    /// layout), but misaligned access may be slow or illegal on some
    /// targets.
    pub fn read16(&self, offset: usize) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.block_read(offset, &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// Write a little-endian `u16` at `offset`.
    pub fn write16(&self, offset: usize, value: u16) -> Result<()> {
        self.block_write(offset, &value.to_le_bytes())
    }

    /// Read a little-endian `u32` at `offset`.
    pub fn read32(&self, offset: usize) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.block_read(offset, &mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Write a little-endian `u32` at `offset`.
    pub fn write32(&self, offset: usize, value: u32) -> Result<()> {
        self.block_write(offset, &value.to_le_bytes())
    }

    /// Read a little-endian `u64` at `offset`.
    pub fn read64(&self, offset: usize) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.block_read(offset, &mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    /// Write a little-endian `u64` at `offset`.
    pub fn write64(&self, offset: usize, value: u64) -> Result<()> {
        self.block_write(offset, &value.to_le_bytes())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec;

    fn window_over(buf: &mut [u8]) -> SharedMemoryWindow {
        // SAFETY: `buf` outlives the window in every test below.
        unsafe { SharedMemoryWindow::new(0, buf.as_mut_ptr() as usize, buf.len()) }
    }

    #[test]
    fn block_round_trip() {
        let mut buf = vec![0u8; 16];
        let win = window_over(&mut buf);
        win.block_write(4, &[1, 2, 3, 4]).unwrap();
        let mut out = [0u8; 4];
        win.block_read(4, &mut out).unwrap();
        assert_eq!(out, [1, 2, 3, 4]);
    }

    #[test]
    fn out_of_bounds_is_short_io() {
        let mut buf = vec![0u8; 8];
        let win = window_over(&mut buf);
        assert_eq!(win.block_read(6, &mut [0u8; 4]), Err(AmpError::ShortIo));
        assert_eq!(win.block_write(8, &[0u8]), Err(AmpError::ShortIo));
    }

    #[test]
    fn word_accessors_are_little_endian() {
        let mut buf = vec![0u8; 16];
        let win = window_over(&mut buf);
        win.write32(0, 0xCAFEBABE).unwrap();
        assert_eq!(buf[0..4], [0xBE, 0xBA, 0xFE, 0xCA]);
        assert_eq!(win.read32(0).unwrap(), 0xCAFEBABE);

        win.write64(8, 0x1122_3344_5566_7788).unwrap();
        assert_eq!(win.read64(8).unwrap(), 0x1122_3344_5566_7788);
    }
}
