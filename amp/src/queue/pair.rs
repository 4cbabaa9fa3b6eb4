//! The SPSC queue pair view and its send/receive discipline (spec.md §4.2,
//! component C2).
//!
//! A [`Queue`] is a lightweight view `{elt_size, num_elts, head_off,
//! data_off}` derived once at bootstrap time. A peer's [`QueuePair`] always
//! names `tx` as *this peer's own* physical head (the only head this peer
//! ever writes) and `rx` as the *opposite* peer's physical head (read-only
//! from here) — see [`super::bootstrap`] for how the two roles get bound to
//! `drv_head`/`dev_head` depending on which peer is initializing.
//!
//! One physical head stores both indices a peer ever writes: its own TX
//! `w_idx` and its own RX `r_idx` (spec.md §4.2, "Semantics of a head").
//! `tx.head_off` is therefore read *and* written by both `send` and
//! `receive`; `rx.head_off` is only ever read.

use crate::error::{AmpError, Result};
use crate::io::SharedMemoryWindow;
use crate::queue::def::QueueHead;

/// A view onto one direction's ring: element size, element count, and the
/// byte offsets (within the message window) of its head and data area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Queue {
    pub elt_size: u16,
    pub num_elts: u16,
    pub head_off: usize,
    pub data_off: usize,
}

fn wrap_inc(idx: u16, num_elts: u16) -> u16 {
    let next = idx + 1;
    if next == num_elts {
        0
    } else {
        next
    }
}

/// The two queues (`tx`, `rx`) this peer uses to talk to the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueuePair {
    pub tx: Queue,
    pub rx: Queue,
}

impl QueuePair {
    /// Push `msg` into the local TX data area and advance the local `w_idx`
    /// (spec.md §4.2 "Send").
    ///
    /// `msg.len()` must equal `tx.elt_size`; every byte of the element is
    /// always written, so a caller with a shorter payload must pad it
    /// itself (virtio-msg frames are always exactly
    /// [`crate::msg::VIRTIO_MSG_SIZE`] bytes, so this never comes up on the
    /// hot path).
    pub fn send(&self, window: &SharedMemoryWindow, msg: &[u8]) -> Result<()> {
        if msg.len() != self.tx.elt_size as usize {
            return Err(AmpError::InvalidArg);
        }

        let opposite = QueueHead::decode(window, self.rx.head_off)?;
        let tail = opposite.r_idx;

        let mut own = QueueHead::decode(window, self.tx.head_off)?;
        let next = wrap_inc(own.w_idx, self.tx.num_elts);
        if next == tail {
            return Err(AmpError::QueueFull);
        }

        let offset = self.tx.data_off + own.w_idx as usize * self.tx.elt_size as usize;
        window.block_write(offset, msg)?;

        own.w_idx = next;
        own.encode(window, self.tx.head_off)?;
        Ok(())
    }

    /// Pop one element from the local RX data area into `buf` and advance
    /// the local `r_idx` (spec.md §4.2 "Receive").
    ///
    /// `buf.len()` must equal `rx.elt_size`.
    pub fn receive(&self, window: &SharedMemoryWindow, buf: &mut [u8]) -> Result<()> {
        if buf.len() != self.rx.elt_size as usize {
            return Err(AmpError::InvalidArg);
        }

        let opposite = QueueHead::decode(window, self.rx.head_off)?;
        let tail = opposite.w_idx;

        let mut own = QueueHead::decode(window, self.tx.head_off)?;
        let head = own.r_idx;
        if head == tail {
            return Err(AmpError::QueueEmpty);
        }

        let offset = self.rx.data_off + head as usize * self.rx.elt_size as usize;
        window.block_read(offset, buf)?;

        own.r_idx = wrap_inc(head, self.rx.num_elts);
        own.encode(window, self.tx.head_off)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::queue::bootstrap::{dev_init, drv_init, QueuePairCfg};
    use std::vec;
    use std::vec::Vec;

    fn shared_window(size: usize) -> (Vec<u8>, SharedMemoryWindow) {
        let mut buf = vec![0u8; size];
        let win = unsafe { SharedMemoryWindow::new(0, buf.as_mut_ptr() as usize, buf.len()) };
        (buf, win)
    }

    fn bootstrap_pair(num_elts: u16) -> (Vec<u8>, SharedMemoryWindow, QueuePair, QueuePair) {
        let cfg = QueuePairCfg {
            drv_elt_size: 40,
            drv_num_elts: num_elts,
            dev_elt_size: 40,
            dev_num_elts: num_elts,
            drv_queue_off: None,
        };
        let (buf, win) = shared_window(4096);
        let dev = dev_init(&win, &cfg).unwrap();
        let drv = drv_init(&win).unwrap();
        (buf, win, dev, drv)
    }

    #[test]
    fn empty_queue_receive_fails() {
        let (_buf, win, dev, _drv) = bootstrap_pair(4);
        let mut out = [0u8; 40];
        assert_eq!(dev.receive(&win, &mut out), Err(AmpError::QueueEmpty));
    }

    #[test]
    fn round_trip_preserves_order_and_bytes() {
        let (_buf, win, dev, drv) = bootstrap_pair(4);
        let msgs: [[u8; 40]; 3] = [[1u8; 40], [2u8; 40], [3u8; 40]];
        for m in &msgs {
            drv.send(&win, m).unwrap();
        }
        for m in &msgs {
            let mut out = [0u8; 40];
            dev.receive(&win, &mut out).unwrap();
            assert_eq!(&out, m);
        }
        assert_eq!(dev.receive(&win, &mut [0u8; 40]), Err(AmpError::QueueEmpty));
    }

    #[test]
    fn full_then_drain() {
        let (_buf, win, dev, drv) = bootstrap_pair(4);
        for _ in 0..3 {
            drv.send(&win, &[0xAAu8; 40]).unwrap();
        }
        assert_eq!(drv.send(&win, &[0xAAu8; 40]), Err(AmpError::QueueFull));

        let mut out = [0u8; 40];
        dev.receive(&win, &mut out).unwrap();
        drv.send(&win, &[0xBBu8; 40]).unwrap();
    }

    #[test]
    fn wrap_correctness_over_many_cycles() {
        let (_buf, win, dev, drv) = bootstrap_pair(4);
        for round in 0..(4 * 4) {
            let byte = (round % 251) as u8;
            drv.send(&win, &[byte; 40]).unwrap();
            assert_eq!(
                drv.send(&win, &[byte; 40]),
                Err(AmpError::QueueFull),
                "round {round}: queue should report full with 3 in flight max"
            );
            let mut out = [0u8; 40];
            dev.receive(&win, &mut out).unwrap();
            assert_eq!(out, [byte; 40]);
        }
    }

    #[test]
    fn wrong_length_is_invalid_arg() {
        let (_buf, win, _dev, drv) = bootstrap_pair(4);
        assert_eq!(drv.send(&win, &[0u8; 10]), Err(AmpError::InvalidArg));
    }
}
