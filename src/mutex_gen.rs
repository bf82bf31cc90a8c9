//! Mutex-guarded shared generator.

#![cfg(feature = "std")]
#![cfg_attr(docsrs, doc(cfg(feature = "std")))]

use std::sync::Mutex;

use crate::generator::{StdSystemTime, TimeSource, V1Generator};
use crate::Uuid;

/// A UUIDv1 generator that many threads may drive through shared references.
///
/// This type guards a single [`V1Generator`] with a [`Mutex`]: every call to
/// [`generate`](MutexGenerator::generate) locks the state, reads the clock, updates the clock
/// sequence bookkeeping, and releases the lock before returning. Concurrent callers therefore
/// never observe the same combination of timestamp and clock sequence.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use uuid1::MutexGenerator;
///
/// let g = sync::Arc::new(MutexGenerator::new());
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Debug)]
pub struct MutexGenerator<T = StdSystemTime> {
    inner: Mutex<V1Generator<T>>,
}

impl MutexGenerator<StdSystemTime> {
    /// Creates a generator guarding a freshly initialized [`V1Generator`] driven by the system
    /// clock.
    ///
    /// # Panics
    ///
    /// Panics if the system random source fails to supply the initial random bytes.
    pub fn new() -> Self {
        Self::with_generator(V1Generator::new())
    }
}

impl Default for MutexGenerator<StdSystemTime> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> MutexGenerator<T> {
    /// Creates a generator that takes over the state of `generator` and guards it with a lock.
    pub fn with_generator(generator: V1Generator<T>) -> Self {
        Self {
            inner: Mutex::new(generator),
        }
    }

    /// Generates a new UUIDv1 object under the lock.
    ///
    /// # Panics
    ///
    /// Panics if another holder of the lock has panicked while generating.
    pub fn generate(&self) -> Uuid {
        self.inner
            .lock()
            .expect("uuid1: could not lock generator state")
            .generate()
    }
}
