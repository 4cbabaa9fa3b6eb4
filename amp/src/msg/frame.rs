//! The 40-byte virtio-msg record: header plus opaque payload bytes.

use crate::error::{AmpError, Result};

/// Total on-wire size of one virtio-msg record (spec.md §4.3, §6 "Profile
/// constants").
pub const VIRTIO_MSG_SIZE: usize = 40;

/// Size of the payload area following the 4-byte header.
pub const PAYLOAD_SIZE: usize = VIRTIO_MSG_SIZE - 4;

/// `type` bit 0: this record is a response (else a request).
pub const TYPE_RESPONSE: u8 = 1 << 0;
/// `type` bit 1: this record is bus-scope (else device-scope).
pub const TYPE_BUS_SCOPE: u8 = 1 << 1;

/// Message kind, carried in the `id` byte (spec.md §4.3's table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MsgId {
    Connect = 0x01,
    Disconnect = 0x02,
    DeviceInfo = 0x03,
    GetFeatures = 0x04,
    SetFeatures = 0x05,
    GetConfig = 0x06,
    SetConfig = 0x07,
    GetConfigGen = 0x08,
    GetDeviceStatus = 0x09,
    SetDeviceStatus = 0x0A,
    GetVqueue = 0x0B,
    SetVqueue = 0x0C,
    ResetVqueue = 0x0D,
    EventConfig = 0x10,
    EventAvail = 0x11,
    EventUsed = 0x12,
}

impl MsgId {
    /// Map a wire byte to a known message kind; unknown ids are `Protocol`
    /// (spec.md §4.3: "any received message with `id` outside this set is
    /// logged and discarded").
    pub fn from_u8(raw: u8) -> Result<Self> {
        Ok(match raw {
            0x01 => Self::Connect,
            0x02 => Self::Disconnect,
            0x03 => Self::DeviceInfo,
            0x04 => Self::GetFeatures,
            0x05 => Self::SetFeatures,
            0x06 => Self::GetConfig,
            0x07 => Self::SetConfig,
            0x08 => Self::GetConfigGen,
            0x09 => Self::GetDeviceStatus,
            0x0A => Self::SetDeviceStatus,
            0x0B => Self::GetVqueue,
            0x0C => Self::SetVqueue,
            0x0D => Self::ResetVqueue,
            0x10 => Self::EventConfig,
            0x11 => Self::EventAvail,
            0x12 => Self::EventUsed,
            _ => return Err(AmpError::Protocol),
        })
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Bus-scope messages per spec.md §4.3's "scope" column.
    pub fn is_bus_scope(self) -> bool {
        matches!(self, Self::Connect | Self::Disconnect)
    }
}

/// One 40-byte virtio-msg record: 4-byte header plus a 36-byte opaque
/// payload, decoded per `id` via [`super::payload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtioMsg {
    pub ty: u8,
    pub id: u8,
    pub dev_id: u16,
    pub payload: [u8; PAYLOAD_SIZE],
}

impl VirtioMsg {
    /// Build a request frame with a zeroed payload area, device-scope by
    /// default.
    pub fn request(id: MsgId, dev_id: u16) -> Self {
        let ty = if id.is_bus_scope() { TYPE_BUS_SCOPE } else { 0 };
        Self {
            ty,
            id: id.as_u8(),
            dev_id,
            payload: [0u8; PAYLOAD_SIZE],
        }
    }

    /// Build a response frame mirroring the scope of `req`.
    pub fn response_to(req: &VirtioMsg) -> Self {
        Self {
            ty: req.ty | TYPE_RESPONSE,
            id: req.id,
            dev_id: req.dev_id,
            payload: [0u8; PAYLOAD_SIZE],
        }
    }

    pub fn is_response(&self) -> bool {
        self.ty & TYPE_RESPONSE != 0
    }

    pub fn is_bus_scope(&self) -> bool {
        self.ty & TYPE_BUS_SCOPE != 0
    }

    pub fn msg_id(&self) -> Result<MsgId> {
        MsgId::from_u8(self.id)
    }

    /// Parse a wire-format record.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != VIRTIO_MSG_SIZE {
            return Err(AmpError::InvalidArg);
        }
        let dev_id = u16::from_le_bytes([bytes[2], bytes[3]]);
        let mut payload = [0u8; PAYLOAD_SIZE];
        payload.copy_from_slice(&bytes[4..VIRTIO_MSG_SIZE]);
        Ok(Self {
            ty: bytes[0],
            id: bytes[1],
            dev_id,
            payload,
        })
    }

    /// Serialize to a wire-format record.
    pub fn encode(&self) -> [u8; VIRTIO_MSG_SIZE] {
        let mut out = [0u8; VIRTIO_MSG_SIZE];
        out[0] = self.ty;
        out[1] = self.id;
        out[2..4].copy_from_slice(&self.dev_id.to_le_bytes());
        out[4..].copy_from_slice(&self.payload);
        out
    }
}
