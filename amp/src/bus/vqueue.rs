//! Virtqueue binding (spec.md §4.5, component C7).
//!
//! A [`Virtqueue`] starts as bare index-only bookkeeping and becomes
//! *bound* once a `SET_VQUEUE` message supplies ring base addresses. No
//! descriptor-chain walking lives here — spec.md's design notes model the
//! consumer side as an externally supplied callback, fired synchronously by
//! [`super::Bus::receive`] on an inbound `EVENT_AVAIL`, so that higher
//! layers (out of scope for this core) own the actual ring traversal.

use alloc::boxed::Box;

use crate::error::{AmpError, Result};
use crate::io::SharedMemoryWindow;

/// Fixed profile constant: no virtqueue in this profile exceeds 16 entries.
pub const VIRTQUEUE_MAX_SIZE: u32 = 0x10;
/// Fixed profile constant: ring base addresses are 4096-byte aligned.
pub const VIRTQUEUE_ALIGN: u32 = 4096;

/// One virtqueue slot on a [`super::LogicalDevice`].
pub struct Virtqueue {
    pub index: u32,
    pub num_descs: u32,
    pub descriptor_addr: u64,
    pub driver_addr: u64,
    pub device_addr: u64,
    pub align: u32,
    pub bound: bool,
    /// The data window this vring's addresses are interpreted against, set
    /// by [`super::Bus`] once `SET_VQUEUE` binds the ring (spec.md §4.5:
    /// "Record the data window as the vring's shared I/O region").
    pub shm_io: Option<SharedMemoryWindow>,
    callback: Option<Box<dyn FnMut(&Virtqueue)>>,
}

impl Virtqueue {
    /// A freshly registered, unbound virtqueue slot.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            num_descs: 0,
            descriptor_addr: 0,
            driver_addr: 0,
            device_addr: 0,
            align: 0,
            bound: false,
            shm_io: None,
            callback: None,
        }
    }

    /// Unbind this vring (`RESET_VQUEUE`, spec.md §4.3): clears the ring
    /// base addresses and the bound flag, but leaves any installed callback
    /// in place so a later `SET_VQUEUE` can rebind without re-registering
    /// the consumer.
    pub fn reset(&mut self) {
        self.num_descs = 0;
        self.descriptor_addr = 0;
        self.driver_addr = 0;
        self.device_addr = 0;
        self.align = 0;
        self.bound = false;
        self.shm_io = None;
    }

    /// Install the consumer callback invoked on `EVENT_AVAIL` for this
    /// queue.
    pub fn set_callback(&mut self, cb: impl FnMut(&Virtqueue) + 'static) {
        self.callback = Some(Box::new(cb));
    }

    /// Bind ring base addresses supplied by the remote driver's
    /// `SET_VQUEUE` (spec.md §4.5): fill the allocation record with
    /// `{num_descs, vaddr: driver_addr, align: 4096}`, then override the
    /// three ring-base pointers with the exact values from the message
    /// (the remote may have placed them with a different alignment than a
    /// local allocator would have chosen).
    pub fn bind(
        &mut self,
        num_descs: u32,
        descriptor_addr: u64,
        driver_addr: u64,
        device_addr: u64,
    ) -> Result<()> {
        if num_descs == 0 || num_descs > VIRTQUEUE_MAX_SIZE || !num_descs.is_power_of_two() {
            return Err(AmpError::InvalidArg);
        }
        self.num_descs = num_descs;
        self.descriptor_addr = descriptor_addr;
        self.driver_addr = driver_addr;
        self.device_addr = device_addr;
        self.align = VIRTQUEUE_ALIGN;
        self.bound = true;
        Ok(())
    }

    /// Fire the installed callback exactly once, passing it a read-only
    /// view of this queue's current binding.
    pub fn invoke_callback(&mut self) -> Result<()> {
        let mut cb = self.callback.take().ok_or(AmpError::InvalidArg)?;
        cb(self);
        self.callback = Some(cb);
        Ok(())
    }
}
