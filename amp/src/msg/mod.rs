//! virtio-msg wire framing (spec.md §4.3, component C4).
//!
//! A [`VirtioMsg`] is always exactly [`VIRTIO_MSG_SIZE`] bytes: a 4-byte
//! header (`type`, `id`, `dev_id`) followed by a 36-byte payload area whose
//! interpretation depends on `id`. [`payload`] holds one Rust struct per
//! payload variant in spec.md §4.3's table, each with its own `encode`/
//! `decode` into that fixed 36-byte area — the same little-endian,
//! explicit-offset style `queue::def` uses for `StaticQueueDef`, since this
//! wire format also crosses a peer boundary.

pub mod frame;
pub mod payload;

pub use frame::{MsgId, VirtioMsg, TYPE_BUS_SCOPE, TYPE_RESPONSE, VIRTIO_MSG_SIZE};
