//! UUIDv1 generator-related types

#[cfg(not(feature = "std"))]
use core as std;

use crate::Uuid;

/// The number of 100-nanosecond intervals between the Gregorian epoch (1582-10-15 00:00:00 UTC)
/// and the Unix epoch (1970-01-01 00:00:00 UTC).
pub const UUID_TICKS_BETWEEN_EPOCHS: u64 = 122_192_928_000_000_000;

/// A trait that defines the timestamp source interface for [`V1Generator`].
pub trait TimeSource {
    /// Returns the current number of 100-nanosecond intervals elapsed since the Gregorian epoch
    /// (1582-10-15 00:00:00 UTC).
    fn gregorian_ticks(&mut self) -> u64;
}

/// The default [`TimeSource`] that reads [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl TimeSource for StdSystemTime {
    fn gregorian_ticks(&mut self) -> u64 {
        use std::time;
        let unix_ticks = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_nanos()
            / 100;
        UUID_TICKS_BETWEEN_EPOCHS + unix_ticks as u64
    }
}

/// Represents a UUIDv1 generator that encapsulates the clock sequence, the timestamp of the last
/// generated UUID, and the node identifier.
///
/// This type does not synchronize access by itself; it is the single-owner core that the sharing
/// strategies in this crate build upon. Wrap an instance in `MutexGenerator` to share it among
/// threads under a lock, or hand it to `QueueGenerator` to delegate generation to a dedicated
/// producer thread.
///
/// # Examples
///
/// ```rust
/// use uuid1::V1Generator;
///
/// let mut g = V1Generator::new();
/// println!("{}", g.generate()); // e.g., "7f75a000-a07c-11f1-91b4-3af9d3f4565a"
/// println!("{}", g.generate());
/// ```
///
/// The generator state can also be assembled from explicit parts, with a custom timestamp source
/// plugged in:
///
/// ```rust
/// use uuid1::{generator::TimeSource, V1Generator};
///
/// struct FrozenClock(u64);
///
/// impl TimeSource for FrozenClock {
///     fn gregorian_ticks(&mut self) -> u64 {
///         self.0
///     }
/// }
///
/// let node_id = [0x9f, 0x6b, 0xde, 0xce, 0xd8, 0x46];
/// let mut g = V1Generator::from_parts(0x2b1, node_id, FrozenClock(0x1ec9414c232ab00));
/// assert_eq!(g.generate().to_string(), "c232ab00-9414-11ec-82b1-9f6bdeced846");
/// assert_eq!(g.generate().to_string(), "c232ab00-9414-11ec-82b2-9f6bdeced846");
/// ```
#[derive(Eq, PartialEq, Debug)]
pub struct V1Generator<T> {
    clock_seq: u16,
    last_ticks: u64,
    node_id: [u8; 6],

    /// Timestamp source used by the generator.
    time_source: T,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl V1Generator<StdSystemTime> {
    /// Creates a generator instance with a randomly initialized clock sequence, the node
    /// identifier of this machine, and the system clock as the timestamp source.
    ///
    /// The node identifier falls back to random multicast-marked bytes when no network interface
    /// reports a hardware address.
    ///
    /// # Panics
    ///
    /// Panics if the system random source fails to supply the initial random bytes.
    pub fn new() -> Self {
        Self::with_time_source(StdSystemTime)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl Default for V1Generator<StdSystemTime> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> V1Generator<T> {
    /// Creates a generator instance with a randomly initialized clock sequence and the node
    /// identifier of this machine, reading timestamps from `time_source`.
    ///
    /// # Panics
    ///
    /// Panics if the system random source fails to supply the initial random bytes.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn with_time_source(time_source: T) -> Self {
        use rand::rngs::OsRng;
        Self::from_parts(
            random_clock_seq(&mut OsRng),
            acquire_node_id(&mut OsRng),
            time_source,
        )
    }

    /// Creates a generator instance from the initial clock sequence, the node identifier, and
    /// the timestamp source. The timestamp of the last generated UUID starts at zero.
    pub const fn from_parts(clock_seq: u16, node_id: [u8; 6], time_source: T) -> Self {
        Self {
            clock_seq,
            last_ticks: 0,
            node_id,
            time_source,
        }
    }

    /// Generates a new UUIDv1 object from the current timestamp reported by the encapsulated
    /// time source.
    pub fn generate(&mut self) -> Uuid {
        let ticks = self.time_source.gregorian_ticks();
        self.generate_core(ticks)
    }

    /// Generates a new UUIDv1 object from the `ticks` passed.
    ///
    /// The clock sequence is incremented (wrapping at the 16-bit boundary) whenever `ticks` does
    /// not run past the timestamp of the preceding call, and the new UUID encodes `ticks` as
    /// passed even when it runs behind the preceding UUID. Excess high bits of `ticks` are
    /// discarded by the encoding.
    pub fn generate_core(&mut self, ticks: u64) -> Uuid {
        if ticks <= self.last_ticks {
            self.clock_seq = self.clock_seq.wrapping_add(1);
        }
        self.last_ticks = ticks;
        Uuid::from_fields_v1(ticks, self.clock_seq, self.node_id)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv1 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid1::V1Generator;
///
/// V1Generator::new()
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{i}] {e}"));
/// ```
impl<T: TimeSource> Iterator for V1Generator<T> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: TimeSource> std::iter::FusedIterator for V1Generator<T> {}

/// Returns the initial clock sequence read from `rng` as a big-endian pair of bytes.
///
/// # Panics
///
/// Panics if `rng` fails.
#[cfg(feature = "std")]
fn random_clock_seq(rng: &mut impl rand::RngCore) -> u16 {
    let mut buffer = [0u8; 2];
    rng.try_fill_bytes(&mut buffer)
        .expect("uuid1: could not read from the system random source");
    u16::from_be_bytes(buffer)
}

/// Returns the hardware address of the first network interface that reports one, or random
/// multicast-marked bytes where no interface does.
#[cfg(feature = "std")]
fn acquire_node_id(rng: &mut impl rand::RngCore) -> [u8; 6] {
    match mac_address::get_mac_address() {
        Ok(Some(addr)) => addr.bytes(),
        _ => random_node_id(rng),
    }
}

/// Returns a random node identifier with the multicast bit set as RFC 4122 requires of node
/// identifiers that do not come from an IEEE 802 address.
#[cfg(feature = "std")]
fn random_node_id(rng: &mut impl rand::RngCore) -> [u8; 6] {
    let mut node_id = [0u8; 6];
    rng.try_fill_bytes(&mut node_id)
        .expect("uuid1: could not read from the system random source");
    node_id[0] |= 0x01;
    node_id
}
