//! Typed payload variants carried in a [`super::VirtioMsg`]'s 36-byte
//! payload area (spec.md §4.3's table).
//!
//! Each struct's `encode`/`decode` pair works on the fixed
//! `[u8; PAYLOAD_SIZE]` array directly — the payload has already been
//! copied out of shared memory by the time anything here runs, so there is
//! no window or offset involved, only little-endian field layout.

use crate::error::{AmpError, Result};
use crate::msg::frame::PAYLOAD_SIZE;

const FEATURE_WORDS: usize = 8;

fn read_u32(buf: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]])
}

fn write_u32(buf: &mut [u8], off: usize, value: u32) {
    buf[off..off + 4].copy_from_slice(&value.to_le_bytes());
}

fn read_u64(buf: &[u8], off: usize) -> u64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&buf[off..off + 8]);
    u64::from_le_bytes(raw)
}

fn write_u64(buf: &mut [u8], off: usize, value: u64) {
    buf[off..off + 8].copy_from_slice(&value.to_le_bytes());
}

fn read_feature_words(buf: &[u8], off: usize) -> [u32; FEATURE_WORDS] {
    let mut out = [0u32; FEATURE_WORDS];
    for (i, word) in out.iter_mut().enumerate() {
        *word = read_u32(buf, off + i * 4);
    }
    out
}

fn write_feature_words(buf: &mut [u8], off: usize, words: &[u32; FEATURE_WORDS]) {
    for (i, word) in words.iter().enumerate() {
        write_u32(buf, off + i * 4, *word);
    }
}

/// 24-bit little-endian config offset plus an 8-bit size, the shape shared
/// by `GET_CONFIG`/`SET_CONFIG`/`EVENT_CONFIG` (spec.md §4.3).
fn read_offset24(buf: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([buf[off], buf[off + 1], buf[off + 2], 0])
}

fn write_offset24(buf: &mut [u8], off: usize, value: u32) -> Result<()> {
    if value > 0x00FF_FFFF {
        return Err(AmpError::InvalidArg);
    }
    let bytes = value.to_le_bytes();
    buf[off..off + 3].copy_from_slice(&bytes[0..3]);
    Ok(())
}

/// `DEVICE_INFO` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceInfoResp {
    pub version: u32,
    pub device_id: u32,
    pub vendor_id: u32,
}

impl DeviceInfoResp {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            version: read_u32(buf, 0),
            device_id: read_u32(buf, 4),
            vendor_id: read_u32(buf, 8),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) {
        write_u32(buf, 0, self.version);
        write_u32(buf, 4, self.device_id);
        write_u32(buf, 8, self.vendor_id);
    }
}

/// `GET_FEATURES` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetFeaturesReq {
    pub index: u32,
}

impl GetFeaturesReq {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            index: read_u32(buf, 0),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) {
        write_u32(buf, 0, self.index);
    }
}

/// `GET_FEATURES`/`SET_FEATURES` response, and `SET_FEATURES` request — all
/// three share the `{index, features[8]}` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturesPayload {
    pub index: u32,
    pub features: [u32; FEATURE_WORDS],
}

impl Default for FeaturesPayload {
    fn default() -> Self {
        Self {
            index: 0,
            features: [0; FEATURE_WORDS],
        }
    }
}

impl FeaturesPayload {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            index: read_u32(buf, 0),
            features: read_feature_words(buf, 4),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) {
        write_u32(buf, 0, self.index);
        write_feature_words(buf, 4, &self.features);
    }
}

/// `GET_CONFIG` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetConfigReq {
    pub offset: u32,
    pub size: u8,
}

impl GetConfigReq {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            offset: read_offset24(buf, 0),
            size: buf[3],
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) -> Result<()> {
        write_offset24(buf, 0, self.offset)?;
        buf[3] = self.size;
        Ok(())
    }
}

/// `GET_CONFIG`/`SET_CONFIG` response, and `SET_CONFIG` request — all three
/// share the `{offset, size, value[8]}` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigPayload {
    pub offset: u32,
    pub size: u8,
    pub value: [u32; FEATURE_WORDS],
}

impl Default for ConfigPayload {
    fn default() -> Self {
        Self {
            offset: 0,
            size: 0,
            value: [0; FEATURE_WORDS],
        }
    }
}

impl ConfigPayload {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            offset: read_offset24(buf, 0),
            size: buf[3],
            value: read_feature_words(buf, 4),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) -> Result<()> {
        write_offset24(buf, 0, self.offset)?;
        buf[3] = self.size;
        write_feature_words(buf, 4, &self.value);
        Ok(())
    }
}

/// `GET_CONFIG_GEN` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetConfigGenResp {
    pub generation: u32,
}

impl GetConfigGenResp {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            generation: read_u32(buf, 0),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) {
        write_u32(buf, 0, self.generation);
    }
}

/// `GET_DEVICE_STATUS` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetDeviceStatusResp {
    pub status: u32,
}

impl GetDeviceStatusResp {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            status: read_u32(buf, 0),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) {
        write_u32(buf, 0, self.status);
    }
}

/// `SET_DEVICE_STATUS` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetDeviceStatusReq {
    pub status: u32,
}

impl SetDeviceStatusReq {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            status: read_u32(buf, 0),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) {
        write_u32(buf, 0, self.status);
    }
}

/// `GET_VQUEUE` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetVqReq {
    pub index: u32,
}

impl GetVqReq {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            index: read_u32(buf, 0),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) {
        write_u32(buf, 0, self.index);
    }
}

/// `GET_VQUEUE` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetVqResp {
    pub index: u32,
    pub max_size: u32,
}

impl GetVqResp {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            index: read_u32(buf, 0),
            max_size: read_u32(buf, 4),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) {
        write_u32(buf, 0, self.index);
        write_u32(buf, 4, self.max_size);
    }
}

/// `SET_VQUEUE` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetVqReq {
    pub index: u32,
    pub size: u32,
    pub descriptor_addr: u64,
    pub driver_addr: u64,
    pub device_addr: u64,
}

impl SetVqReq {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            index: read_u32(buf, 0),
            // bytes [4, 8) are the unused field from the source layout.
            size: read_u32(buf, 8),
            descriptor_addr: read_u64(buf, 12),
            driver_addr: read_u64(buf, 20),
            device_addr: read_u64(buf, 28),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) {
        write_u32(buf, 0, self.index);
        write_u32(buf, 4, 0);
        write_u32(buf, 8, self.size);
        write_u64(buf, 12, self.descriptor_addr);
        write_u64(buf, 20, self.driver_addr);
        write_u64(buf, 28, self.device_addr);
    }
}

/// `RESET_VQUEUE` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResetVqReq {
    pub index: u32,
}

impl ResetVqReq {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            index: read_u32(buf, 0),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) {
        write_u32(buf, 0, self.index);
    }
}

/// `EVENT_CONFIG` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventConfigReq {
    pub status: u64,
    pub offset: u32,
    pub size: u8,
    pub value: [u8; 16],
}

impl Default for EventConfigReq {
    fn default() -> Self {
        Self {
            status: 0,
            offset: 0,
            size: 0,
            value: [0; 16],
        }
    }
}

impl EventConfigReq {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        let mut value = [0u8; 16];
        value.copy_from_slice(&buf[12..28]);
        Self {
            status: read_u64(buf, 0),
            offset: read_offset24(buf, 8),
            size: buf[11],
            value,
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) -> Result<()> {
        write_u64(buf, 0, self.status);
        write_offset24(buf, 8, self.offset)?;
        buf[11] = self.size;
        buf[12..28].copy_from_slice(&self.value);
        Ok(())
    }
}

/// `EVENT_AVAIL` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventAvailReq {
    pub vq_idx: u32,
    pub next_offset: u64,
    pub next_wrap: u64,
}

impl EventAvailReq {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            vq_idx: read_u32(buf, 0),
            next_offset: read_u64(buf, 4),
            next_wrap: read_u64(buf, 12),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) {
        write_u32(buf, 0, self.vq_idx);
        write_u64(buf, 4, self.next_offset);
        write_u64(buf, 12, self.next_wrap);
    }
}

/// `EVENT_USED` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventUsedReq {
    pub vq_idx: u32,
}

impl EventUsedReq {
    pub fn decode(buf: &[u8; PAYLOAD_SIZE]) -> Self {
        Self {
            vq_idx: read_u32(buf, 0),
        }
    }

    pub fn encode(&self, buf: &mut [u8; PAYLOAD_SIZE]) {
        write_u32(buf, 0, self.vq_idx);
    }
}
