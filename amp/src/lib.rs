//! Asymmetric multi-processing (AMP) virtio-msg core.
//!
//! Two independent peers — a driver peer and a device peer — share a region
//! of memory and a pair of doorbell-style notifications. This crate provides,
//! over that shared memory:
//!
//! - a bounded single-producer/single-consumer byte-record queue pair
//!   ([`queue`]),
//! - a compact virtio-msg wire protocol carried across that queue pair
//!   ([`msg`]),
//! - a bus multiplexer that dispatches virtio-msg records to logical VirtIO
//!   devices and binds their virtqueues ([`bus`]).
//!
//! Platform bring-up (interrupt wiring, cache maintenance, physical-memory
//! mapping, CPU boot/shutdown) is not this crate's concern: callers hand in
//! [`io::SharedMemoryWindow`]s that already behave correctly for the target,
//! and a `notify` closure that rings the peer's doorbell.

#![no_std]

extern crate alloc;

pub mod bus;
pub mod error;
pub mod io;
pub mod msg;
pub mod queue;

pub use error::{AmpError, Result};
