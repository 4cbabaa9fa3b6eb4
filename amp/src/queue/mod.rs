//! Shared-memory SPSC queue pair: wire layout, bootstrap, and send/receive
//! (spec.md §3, §4.2; components C2, C3).

pub mod bootstrap;
pub mod def;
pub mod pair;

pub use bootstrap::{connect_local_head, dev_init, drv_init, QueuePairCfg};
pub use def::{QueueHead, StaticQueueDef};
pub use pair::{Queue, QueuePair};
