//! An implementation of UUID version 1 with pluggable concurrency strategies
//!
//! ```rust
//! use uuid1::uuid1;
//!
//! let uuid = uuid1();
//! println!("{}", uuid); // e.g., "7f75a000-a07c-11f1-91b4-3af9d3f4565a"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp spread over the `time_low`, `time_mid`, and `time_high` fields counts
//!   100-nanosecond intervals elapsed since the Gregorian epoch (1582-10-15 00:00:00 UTC).
//! - The 4-bit `ver` field is set at `0001`.
//! - The 14-bit `clock_seq` field starts from a random number and is incremented whenever the
//!   timestamp fails to move past the preceding one, keeping UUIDs distinct through clock
//!   rollbacks and bursts of calls within one 100-nanosecond tick.
//! - The 2-bit `var` field is set at `10`.
//! - The 48-bit `node` field carries the IEEE 802 (MAC) address of the machine, or random
//!   multicast-marked bytes where no interface reports one.
//!
//! # Sharing strategies
//!
//! A UUIDv1 generator is a piece of shared mutable state: the clock sequence bookkeeping has to
//! observe every timestamp handed out. This crate ships the single-owner state machine and two
//! synchronized wrappers so callers can pick how that state is shared:
//!
//! - [`V1Generator`] is the unsynchronized core for callers that manage exclusivity themselves.
//! - [`MutexGenerator`] guards one [`V1Generator`] with a mutex for lock-based sharing.
//! - [`QueueGenerator`] moves its [`V1Generator`] into a dedicated producer thread and hands
//!   UUIDs to consumers through a bounded queue.
//! - [`uuid1()`] and [`uuid1_lock_free()`] expose one process-wide instance of each wrapper.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` integrates the library with the system clock, the OS random source, and the network
//!   interfaces of the machine, and enables the synchronized generator types. Without `std`,
//!   this crate provides the core [`Uuid`] type and [`V1Generator`] over a caller-supplied
//!   timestamp source only.
//! - `global_gen` (implies `std`) enables the process-wide [`uuid1()`] and
//!   [`uuid1_lock_free()`] entry point functions.
//!
//! Optional features:
//!
//! - `uuid` enables conversions to and from the [uuid](https://crates.io/crates/uuid) crate's
//!   UUID type.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

mod id;
pub use id::{Uuid, Variant};

pub mod generator;
#[doc(inline)]
pub use generator::V1Generator;

mod mutex_gen;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use mutex_gen::MutexGenerator;

mod queue_gen;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use queue_gen::QueueGenerator;

mod global_gen;
#[cfg(feature = "global_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub use global_gen::{uuid1, uuid1_lock_free};
