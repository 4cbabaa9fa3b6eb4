//! Wire layout of the static queue-pair definition and queue heads
//! (spec.md §3, §6).
//!
//! These are plain Rust structs, not `#[repr(C)]` structures cast directly
//! onto the shared window — unlike `morpheus-network::types::repr_c`'s
//! ASM-interop structs (same process, same endianness), the queue
//! definition crosses a peer boundary that spec.md requires to be
//! little-endian regardless of either peer's native endianness. So each
//! struct here carries its own `encode`/`decode` pair built on
//! [`crate::io::SharedMemoryWindow`]'s explicit little-endian word
//! accessors.

use crate::error::Result;
use crate::io::SharedMemoryWindow;

/// Queue-definition magic value once the device peer has written it.
pub const MAGIC_Q_DEF: u32 = 0x1A2B_3C4D;
/// Fixed queue-definition version.
pub const QUEUE_DEF_VERSION: u32 = 1;
/// Default `drv_peer_ord` (spec.md §9: unused but must be written).
pub const DRV_PEER_ORD: u32 = 0;
/// Default `dev_peer_ord` (spec.md §9: unused but must be written).
pub const DEV_PEER_ORD: u32 = 1;

/// `QueueHead.status` READY bit.
pub const QUEUE_HEAD_READY: u16 = 1 << 0;

/// On-wire byte size of a [`QueueHead`].
pub const QUEUE_HEAD_SIZE: usize = 8;

/// The live control block for one direction of one peer (spec.md §3).
///
/// A peer's own head stores its TX write index in `w_idx` and its RX read
/// index in `r_idx` (spec.md §4.2) — see [`super::pair::QueuePair`] for how
/// the two roles of a single head are used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueHead {
    pub status: u16,
    pub reserved: u16,
    pub w_idx: u16,
    pub r_idx: u16,
}

impl QueueHead {
    /// A freshly zeroed head, not yet READY.
    pub const fn new() -> Self {
        Self {
            status: 0,
            reserved: 0,
            w_idx: 0,
            r_idx: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status & QUEUE_HEAD_READY != 0
    }

    /// Read a head from `window` at `offset`.
    pub fn decode(window: &SharedMemoryWindow, offset: usize) -> Result<Self> {
        Ok(Self {
            status: window.read16(offset)?,
            reserved: window.read16(offset + 2)?,
            w_idx: window.read16(offset + 4)?,
            r_idx: window.read16(offset + 6)?,
        })
    }

    /// Write this head to `window` at `offset`.
    pub fn encode(&self, window: &SharedMemoryWindow, offset: usize) -> Result<()> {
        window.write16(offset, self.status)?;
        window.write16(offset + 2, self.reserved)?;
        window.write16(offset + 4, self.w_idx)?;
        window.write16(offset + 6, self.r_idx)?;
        Ok(())
    }
}

/// On-wire byte size of a [`StaticQueueDef`] (12 scalar fields: four `u32`,
/// four `u16`, four `u64` — naturally aligned, no implicit padding).
pub const STATIC_QUEUE_DEF_SIZE: usize = 4 * 4 + 4 * 2 + 4 * 8;

/// The record written once by the device peer at offset 0 of the message
/// window, describing where both queues' heads and data areas live
/// (spec.md §3, §6).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticQueueDef {
    pub magic: u32,
    pub version: u32,
    pub drv_peer_ord: u32,
    pub dev_peer_ord: u32,
    pub drv_elt_size: u16,
    pub drv_num_elts: u16,
    pub dev_elt_size: u16,
    pub dev_num_elts: u16,
    pub drv_head: u64,
    pub drv_data: u64,
    pub dev_head: u64,
    pub dev_data: u64,
}

impl StaticQueueDef {
    pub fn is_ready(&self) -> bool {
        self.magic == MAGIC_Q_DEF
    }

    /// Read the definition from offset 0 of `window`.
    pub fn decode(window: &SharedMemoryWindow) -> Result<Self> {
        Ok(Self {
            magic: window.read32(0)?,
            version: window.read32(4)?,
            drv_peer_ord: window.read32(8)?,
            dev_peer_ord: window.read32(12)?,
            drv_elt_size: window.read16(16)?,
            drv_num_elts: window.read16(18)?,
            dev_elt_size: window.read16(20)?,
            dev_num_elts: window.read16(22)?,
            drv_head: window.read64(24)?,
            drv_data: window.read64(32)?,
            dev_head: window.read64(40)?,
            dev_data: window.read64(48)?,
        })
    }

    /// Write the definition to offset 0 of `window`.
    pub fn encode(&self, window: &SharedMemoryWindow) -> Result<()> {
        window.write32(0, self.magic)?;
        window.write32(4, self.version)?;
        window.write32(8, self.drv_peer_ord)?;
        window.write32(12, self.dev_peer_ord)?;
        window.write16(16, self.drv_elt_size)?;
        window.write16(18, self.drv_num_elts)?;
        window.write16(20, self.dev_elt_size)?;
        window.write16(22, self.dev_num_elts)?;
        window.write64(24, self.drv_head)?;
        window.write64(32, self.drv_data)?;
        window.write64(40, self.dev_head)?;
        window.write64(48, self.dev_data)?;
        Ok(())
    }
}
