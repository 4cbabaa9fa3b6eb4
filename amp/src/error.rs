//! Error taxonomy for the AMP virtio-msg core.
//!
//! Mirrors the hand-rolled `Display`-over-`Debug` pattern used throughout
//! `morpheus-network` (see `driver::block_io_adapter::BlockIoError`): no
//! `thiserror`, since this crate is `no_std` and the error set is small and
//! fixed.

/// Errors produced by the queue, framing, and bus layers.
///
/// Propagation policy (spec.md §7): every error bubbles to the direct caller
/// unchanged. Nothing here is retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmpError {
    /// A required `BusCfg`/`QueuePairCfg` field was missing or zero.
    Config,
    /// The computed queue-pair layout does not fit in the supplied window.
    Capacity,
    /// A block read or write returned fewer bytes than requested.
    ShortIo,
    /// The producer's queue has no free slot.
    QueueFull,
    /// The consumer's queue has nothing to read.
    QueueEmpty,
    /// An out-of-range virtqueue index, missing dispatch entry, or malformed
    /// message.
    InvalidArg,
    /// The operation is not valid in the bus's or device's current state.
    BadState,
    /// The request names a feature/config index this profile does not
    /// support (currently: any `GET_FEATURES`/`SET_FEATURES` with
    /// `index != 0`).
    Unsupported,
    /// An unexpected message `id`, a truncated payload, or a response with
    /// no pending request.
    Protocol,
}

impl core::fmt::Display for AmpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Config => write!(f, "missing or zero-valued configuration field"),
            Self::Capacity => write!(f, "layout exceeds the supplied shared window"),
            Self::ShortIo => write!(f, "short block read or write"),
            Self::QueueFull => write!(f, "queue full"),
            Self::QueueEmpty => write!(f, "queue empty"),
            Self::InvalidArg => write!(f, "invalid argument"),
            Self::BadState => write!(f, "operation invalid in current state"),
            Self::Unsupported => write!(f, "unsupported feature or config index"),
            Self::Protocol => write!(f, "protocol violation"),
        }
    }
}

/// Result alias used throughout this crate, matching `morpheus-network`'s
/// `DiskResult`-style per-module alias.
pub type Result<T> = core::result::Result<T, AmpError>;
