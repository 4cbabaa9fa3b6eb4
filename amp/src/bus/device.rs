//! Logical VirtIO device state and its role-gated capability set
//! (spec.md §3 `LogicalDevice`, §4.5, component C6).
//!
//! spec.md's design notes (§9) call for representing each role as "a tagged
//! variant over a shared capability set ... Statically select the variant at
//! registration; do not share mutable vtable slots across instances." Rather
//! than the C original's function-pointer dispatch table
//! (`virtio_dev_msg_dispatch`/`virtio_drv_msg_dispatch` in
//! `lib/virtio_msg/virtio_msg.c`), this crate selects behavior with a plain
//! `match` on [`Role`] inside each capability method — one struct, one set of
//! methods, per-instance role data instead of a shared global vtable.

use alloc::vec::Vec;

use crate::bus::vqueue::Virtqueue;
use crate::error::{AmpError, Result};

/// Number of 32-bit feature words carried by `GET_FEATURES`/`SET_FEATURES`
/// (spec.md §3: `features: [u32; 8]`, 256 feature bits).
pub const FEATURE_WORDS: usize = 8;

/// Which side of the bus a [`LogicalDevice`] plays (spec.md §3 `role`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Driver,
    Device,
}

/// The `{device_id, vendor_id, version}` identity triple a device is
/// registered with (spec.md §6 "register_vdev(device, id_triple, role)").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceIdentity {
    pub device_id: u32,
    pub vendor_id: u32,
    pub version: u32,
}

/// Per-device state addressed by bus-local id (spec.md §3 `LogicalDevice`).
pub struct LogicalDevice {
    pub bus_id: u32,
    pub role: Role,
    pub device_id: u32,
    pub vendor_id: u32,
    pub version: u32,
    /// The VirtIO status byte (spec.md GLOSSARY): ACK, DRIVER, DRIVER_OK,
    /// FEATURES_OK, NEEDS_RESET, FAILED bits.
    pub status: u32,
    pub features: [u32; FEATURE_WORDS],
    pub vrings: Vec<Virtqueue>,
}

impl LogicalDevice {
    /// A freshly constructed device with `num_vrings` unbound virtqueue
    /// slots, not yet attached to a bus. `role` defaults to `Device` and is
    /// overwritten by [`super::Bus::register_vdev`] at registration time.
    pub fn new(bus_id: u32, num_vrings: usize) -> Self {
        Self {
            bus_id,
            role: Role::Device,
            device_id: 0,
            vendor_id: 0,
            version: 0,
            status: 0,
            features: [0; FEATURE_WORDS],
            vrings: (0..num_vrings as u32).map(Virtqueue::new).collect(),
        }
    }

    /// `GET_FEATURES` capability, shared by both roles: device-role returns
    /// the authoritative stored word, driver-role returns its local cache
    /// (spec.md §4.5) — both are simply `self.features[0]`, since a driver's
    /// cache is populated by [`super::Bus`] absorbing `GET_FEATURES`
    /// responses (spec.md §4.3's table has no `SET_FEATURES`-only response
    /// path that would diverge the two).
    ///
    /// Only `index == 0` is supported in this profile (spec.md §4.4).
    pub fn get_features(&self, index: u32) -> Result<u32> {
        if index != 0 {
            return Err(AmpError::Unsupported);
        }
        Ok(self.features[0])
    }

    /// `SET_FEATURES` capability. Device-role rejects with `BadState` once
    /// `status != 0` (spec.md §8 "Status gate"); driver-role is a no-op at
    /// this layer but still stores the word locally so later `GET_FEATURES`
    /// reads see it, matching spec.md §4.5's "no-op... feature-get returns
    /// the local cache".
    pub fn set_features(&mut self, index: u32, value: u32) -> Result<()> {
        if index != 0 {
            return Err(AmpError::Unsupported);
        }
        if self.role == Role::Device && self.status != 0 {
            return Err(AmpError::BadState);
        }
        self.features[0] = value;
        Ok(())
    }

    /// `GET_DEVICE_STATUS` capability: returns the stored status word for
    /// either role.
    pub fn get_status(&self) -> u32 {
        self.status
    }

    /// `SET_DEVICE_STATUS` capability. Device-role mutates `status`;
    /// driver-role is a no-op (spec.md §4.5: "status-set are no-ops at this
    /// layer — the real driver lives on the other peer").
    pub fn set_status(&mut self, status: u32) {
        if self.role == Role::Device {
            self.status = status;
        }
    }

    pub fn vring(&self, index: u32) -> Result<&Virtqueue> {
        self.vrings.get(index as usize).ok_or(AmpError::InvalidArg)
    }

    pub fn vring_mut(&mut self, index: u32) -> Result<&mut Virtqueue> {
        self.vrings
            .get_mut(index as usize)
            .ok_or(AmpError::InvalidArg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_role_rejects_set_features_once_status_nonzero() {
        let mut dev = LogicalDevice::new(7, 0);
        dev.role = Role::Device;
        dev.set_status(1);
        assert_eq!(
            dev.set_features(0, 0xCAFEBABE),
            Err(AmpError::BadState)
        );
        assert_eq!(dev.features[0], 0);
    }

    #[test]
    fn device_role_accepts_set_features_while_status_zero() {
        let mut dev = LogicalDevice::new(7, 0);
        dev.role = Role::Device;
        dev.set_features(0, 0xCAFEBABE).unwrap();
        assert_eq!(dev.get_features(0).unwrap(), 0xCAFEBABE);
    }

    #[test]
    fn driver_role_set_status_is_noop() {
        let mut dev = LogicalDevice::new(7, 0);
        dev.role = Role::Driver;
        dev.set_status(7);
        assert_eq!(dev.get_status(), 0);
    }

    #[test]
    fn unsupported_feature_index_is_rejected() {
        let dev = LogicalDevice::new(7, 0);
        assert_eq!(dev.get_features(1), Err(AmpError::Unsupported));
    }

    #[test]
    fn vring_out_of_range_is_invalid_arg() {
        let mut dev = LogicalDevice::new(7, 1);
        assert!(dev.vring(0).is_ok());
        assert_eq!(dev.vring_mut(1).err(), Some(AmpError::InvalidArg));
    }
}
