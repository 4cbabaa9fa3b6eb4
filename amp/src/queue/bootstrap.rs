//! Queue-pair bootstrap (spec.md §4.2 "Bootstrap", component C3).
//!
//! The device peer authors the [`StaticQueueDef`] once; the driver peer
//! reads and mirrors it. Both sides then write their own head with the
//! READY bit set.

use crate::error::{AmpError, Result};
use crate::io::SharedMemoryWindow;
use crate::queue::def::{
    QueueHead, StaticQueueDef, DEV_PEER_ORD, DRV_PEER_ORD, MAGIC_Q_DEF, QUEUE_DEF_VERSION,
    QUEUE_HEAD_READY, QUEUE_HEAD_SIZE, STATIC_QUEUE_DEF_SIZE,
};
use crate::queue::pair::{Queue, QueuePair};

fn align_up(value: u64, align: u64) -> u64 {
    (value + align - 1) & !(align - 1)
}

/// User-supplied sizing for a queue pair (spec.md §6 `QueuePairCfg`).
#[derive(Debug, Clone, Copy)]
pub struct QueuePairCfg {
    pub drv_elt_size: u16,
    pub drv_num_elts: u16,
    pub dev_elt_size: u16,
    pub dev_num_elts: u16,
    /// Pin the driver queue's head offset; `None` auto-computes it
    /// immediately after the device data area, aligned up to 8 bytes.
    pub drv_queue_off: Option<u64>,
}

/// `num_elts` must be at least 2 (a one-slot queue can never hold anything,
/// per the "one slot wasted" full rule) and must fit in a `u8` — indices are
/// compared modulo `num_elts` in this profile's tighter `u8` interpretation
/// (SPEC_FULL.md §3, spec.md's adopted Open Question resolution).
fn validate_elts(num_elts: u16) -> Result<()> {
    if num_elts < 2 || num_elts as u32 > u8::MAX as u32 + 1 {
        return Err(AmpError::Config);
    }
    Ok(())
}

/// Device-side init: write a fresh [`StaticQueueDef`] at offset 0 of
/// `window`, lay out both sub-regions, and bring up the device's own head.
pub fn dev_init(window: &SharedMemoryWindow, cfg: &QueuePairCfg) -> Result<QueuePair> {
    validate_elts(cfg.drv_num_elts)?;
    validate_elts(cfg.dev_num_elts)?;

    let dev_head = STATIC_QUEUE_DEF_SIZE as u64;
    let dev_data = dev_head + QUEUE_HEAD_SIZE as u64;
    let dev_region_len = cfg.dev_num_elts as u64 * cfg.dev_elt_size as u64;

    let drv_head = match cfg.drv_queue_off {
        Some(off) if off != 0 => off,
        _ => align_up(dev_data + dev_region_len, 8),
    };
    let drv_data = drv_head + QUEUE_HEAD_SIZE as u64;
    let drv_region_len = cfg.drv_num_elts as u64 * cfg.drv_elt_size as u64;

    let total = align_up(drv_data + drv_region_len, 8);
    if total > window.size() as u64 {
        return Err(AmpError::Capacity);
    }

    let def = StaticQueueDef {
        magic: MAGIC_Q_DEF,
        version: QUEUE_DEF_VERSION,
        drv_peer_ord: DRV_PEER_ORD,
        dev_peer_ord: DEV_PEER_ORD,
        drv_elt_size: cfg.drv_elt_size,
        drv_num_elts: cfg.drv_num_elts,
        dev_elt_size: cfg.dev_elt_size,
        dev_num_elts: cfg.dev_num_elts,
        drv_head,
        drv_data,
        dev_head,
        dev_data,
    };
    def.encode(window)?;

    let pair = QueuePair {
        tx: Queue {
            elt_size: cfg.dev_elt_size,
            num_elts: cfg.dev_num_elts,
            head_off: dev_head as usize,
            data_off: dev_data as usize,
        },
        rx: Queue {
            elt_size: cfg.drv_elt_size,
            num_elts: cfg.drv_num_elts,
            head_off: drv_head as usize,
            data_off: drv_data as usize,
        },
    };

    let mut own_head = QueueHead::new();
    own_head.status = QUEUE_HEAD_READY;
    own_head.encode(window, pair.tx.head_off)?;

    Ok(pair)
}

/// Driver-side init: read the [`StaticQueueDef`] the device peer wrote, bind
/// `tx` to the driver sub-regions and `rx` to the device sub-regions
/// (spec.md §4.2 Open Questions: `elt_size` is taken from the matching
/// `_elt_size` field, not `_num_elts` — restoring the original's intended
/// assignment), and bring up the driver's own head.
pub fn drv_init(window: &SharedMemoryWindow) -> Result<QueuePair> {
    let def = StaticQueueDef::decode(window)?;
    if !def.is_ready() || def.version != QUEUE_DEF_VERSION {
        return Err(AmpError::Protocol);
    }

    let pair = QueuePair {
        tx: Queue {
            elt_size: def.drv_elt_size,
            num_elts: def.drv_num_elts,
            head_off: def.drv_head as usize,
            data_off: def.drv_data as usize,
        },
        rx: Queue {
            elt_size: def.dev_elt_size,
            num_elts: def.dev_num_elts,
            head_off: def.dev_head as usize,
            data_off: def.dev_data as usize,
        },
    };

    let mut own_head = QueueHead::new();
    own_head.status = QUEUE_HEAD_READY;
    own_head.encode(window, pair.tx.head_off)?;

    Ok(pair)
}

/// (Re-)assert READY on the local head, preserving any indices already
/// advanced. Spec.md's "Idempotent connect" property only requires the
/// READY bit and notify count to be stable across repeated calls — clobbering
/// `w_idx`/`r_idx` back to zero the way the C original's
/// `amp_static_queue_connect` does would corrupt an already-active queue, so
/// this reads the current head and only flips the READY bit.
pub fn connect_local_head(window: &SharedMemoryWindow, pair: &QueuePair) -> Result<()> {
    let mut head = QueueHead::decode(window, pair.tx.head_off)?;
    head.status |= QUEUE_HEAD_READY;
    head.encode(window, pair.tx.head_off)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec;

    fn shared_window(size: usize) -> (std::vec::Vec<u8>, SharedMemoryWindow) {
        let mut buf = vec![0u8; size];
        let win = unsafe { SharedMemoryWindow::new(0, buf.as_mut_ptr() as usize, buf.len()) };
        (buf, win)
    }

    #[test]
    fn dev_init_then_drv_init_agree_on_layout() {
        let cfg = QueuePairCfg {
            drv_elt_size: 40,
            drv_num_elts: 4,
            dev_elt_size: 40,
            dev_num_elts: 4,
            drv_queue_off: None,
        };
        let (_buf, win) = shared_window(4096);
        let dev_pair = dev_init(&win, &cfg).unwrap();
        let drv_pair = drv_init(&win).unwrap();

        assert_eq!(dev_pair.tx.head_off, drv_pair.rx.head_off);
        assert_eq!(dev_pair.tx.data_off, drv_pair.rx.data_off);
        assert_eq!(dev_pair.rx.head_off, drv_pair.tx.head_off);
        assert_eq!(dev_pair.rx.data_off, drv_pair.tx.data_off);
    }

    #[test]
    fn num_elts_out_of_u8_range_is_config_error() {
        let cfg = QueuePairCfg {
            drv_elt_size: 40,
            drv_num_elts: 300,
            dev_elt_size: 40,
            dev_num_elts: 4,
            drv_queue_off: None,
        };
        let (_buf, win) = shared_window(65536);
        assert_eq!(dev_init(&win, &cfg), Err(AmpError::Config));
    }

    #[test]
    fn single_elt_queue_is_config_error() {
        let cfg = QueuePairCfg {
            drv_elt_size: 40,
            drv_num_elts: 1,
            dev_elt_size: 40,
            dev_num_elts: 4,
            drv_queue_off: None,
        };
        let (_buf, win) = shared_window(4096);
        assert_eq!(dev_init(&win, &cfg), Err(AmpError::Config));
    }

    #[test]
    fn layout_overflow_is_capacity_error() {
        let cfg = QueuePairCfg {
            drv_elt_size: 40,
            drv_num_elts: 200,
            dev_elt_size: 40,
            dev_num_elts: 200,
            drv_queue_off: None,
        };
        let (_buf, win) = shared_window(64);
        assert_eq!(dev_init(&win, &cfg), Err(AmpError::Capacity));
    }

    #[test]
    fn connect_is_idempotent_and_preserves_indices() {
        let cfg = QueuePairCfg {
            drv_elt_size: 40,
            drv_num_elts: 4,
            dev_elt_size: 40,
            dev_num_elts: 4,
            drv_queue_off: None,
        };
        let (_buf, win) = shared_window(4096);
        let dev_pair = dev_init(&win, &cfg).unwrap();
        let drv_pair = drv_init(&win).unwrap();

        drv_pair.send(&win, &[7u8; 40]).unwrap();
        connect_local_head(&win, &dev_pair).unwrap();
        connect_local_head(&win, &dev_pair).unwrap();

        let head = QueueHead::decode(&win, dev_pair.tx.head_off).unwrap();
        assert!(head.is_ready());

        let mut out = [0u8; 40];
        dev_pair.receive(&win, &mut out).unwrap();
        assert_eq!(out, [7u8; 40]);
    }
}
