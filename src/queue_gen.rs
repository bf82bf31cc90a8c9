//! Background-producer generator over a bounded queue.

#![cfg(feature = "std")]
#![cfg_attr(docsrs, doc(cfg(feature = "std")))]

use std::sync::{mpsc, Mutex};
use std::thread;

use crate::generator::{TimeSource, V1Generator};
use crate::Uuid;

/// A UUIDv1 generator that delegates generation to a dedicated producer thread.
///
/// The producer thread exclusively owns a [`V1Generator`] and keeps minting UUIDs into a bounded
/// queue; [`generate`](QueueGenerator::generate) takes one out, blocking while the queue is
/// empty. No lock guards the generator state itself: the producer is its only user, and the
/// queue hands each UUID to exactly one caller.
///
/// The queue capacity bounds how far production runs ahead of consumption, so a UUID taken from
/// the queue carries the timestamp of the moment it was minted, which may trail the moment the
/// caller receives it. At zero capacity the producer and a consumer meet for every hand-over,
/// and only the single value in flight can predate its consumer's call.
///
/// The producer thread exits once the generator is dropped.
///
/// # Examples
///
/// ```rust
/// use uuid1::QueueGenerator;
///
/// let g = QueueGenerator::new(10);
/// let first = g.generate();
/// let second = g.generate();
/// assert_ne!(first, second);
/// ```
#[derive(Debug)]
pub struct QueueGenerator {
    receiver: Mutex<mpsc::Receiver<Uuid>>,
}

impl QueueGenerator {
    /// Creates a generator whose producer thread owns a freshly initialized [`V1Generator`]
    /// driven by the system clock. `capacity` bounds the number of UUIDs minted ahead of
    /// consumption.
    ///
    /// # Panics
    ///
    /// Panics if the system random source fails to supply the initial random bytes or the
    /// producer thread cannot be spawned.
    pub fn new(capacity: usize) -> Self {
        Self::with_generator(V1Generator::new(), capacity)
    }

    /// Creates a generator whose producer thread takes over the state of `generator`.
    ///
    /// # Panics
    ///
    /// Panics if the producer thread cannot be spawned.
    pub fn with_generator<T>(mut generator: V1Generator<T>, capacity: usize) -> Self
    where
        T: TimeSource + Send + 'static,
    {
        let (sender, receiver) = mpsc::sync_channel(capacity);
        thread::Builder::new()
            .name("uuid1-producer".to_owned())
            .spawn(move || {
                // runs until every receiving handle is dropped
                while sender.send(generator.generate()).is_ok() {}
            })
            .expect("uuid1: could not spawn producer thread");

        Self {
            receiver: Mutex::new(receiver),
        }
    }

    /// Takes the next UUIDv1 object minted by the producer thread, blocking while the queue is
    /// empty.
    ///
    /// # Panics
    ///
    /// Panics if the producer thread has terminated abnormally.
    pub fn generate(&self) -> Uuid {
        self.receiver
            .lock()
            .expect("uuid1: could not lock queue receiver")
            .recv()
            .expect("uuid1: producer thread terminated")
    }
}

#[cfg(test)]
mod tests {
    use super::QueueGenerator;
    use crate::generator::{TimeSource, V1Generator, UUID_TICKS_BETWEEN_EPOCHS};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    /// Clock that returns its current reading and then advances by one tick
    struct StepClock(u64);

    impl TimeSource for StepClock {
        fn gregorian_ticks(&mut self) -> u64 {
            let ticks = self.0;
            self.0 += 1;
            ticks
        }
    }

    /// Clock over a shared counter so tests can watch how many values the producer has minted
    struct CountingClock(Arc<AtomicU64>);

    impl TimeSource for CountingClock {
        fn gregorian_ticks(&mut self) -> u64 {
            UUID_TICKS_BETWEEN_EPOCHS + self.0.fetch_add(1, Ordering::SeqCst)
        }
    }

    /// Delivers UUIDs in production order
    #[test]
    fn delivers_uuids_in_production_order() {
        let t0 = UUID_TICKS_BETWEEN_EPOCHS;
        let state = V1Generator::from_parts(0x3c, [0xbe; 6], StepClock(t0));
        let g = QueueGenerator::with_generator(state, 10);
        for i in 0..1_000 {
            let e = g.generate();
            assert_eq!(e.timestamp(), t0 + i);
            assert_eq!(e.clock_seq(), 0x3c);
        }
    }

    /// Hands over UUIDs one at a time at zero capacity
    #[test]
    fn hands_over_uuids_one_at_a_time_at_zero_capacity() {
        use std::{thread, time};

        let minted = Arc::new(AtomicU64::new(0));
        let state = V1Generator::from_parts(0, [0x01; 6], CountingClock(Arc::clone(&minted)));
        let g = QueueGenerator::with_generator(state, 0);

        let t0 = UUID_TICKS_BETWEEN_EPOCHS;
        for i in 0..10 {
            assert_eq!(g.generate().timestamp(), t0 + i);
            thread::sleep(time::Duration::from_millis(5));
            // only the single value in the blocked hand-over may be minted ahead
            assert!(minted.load(Ordering::SeqCst) <= i + 2);
        }
    }

    /// Delivers each UUID to exactly one consumer under multithreading
    #[test]
    fn delivers_each_uuid_to_exactly_one_consumer_under_multithreading(
    ) -> Result<(), Box<dyn std::error::Error>> {
        use std::{collections::HashSet, sync, sync::mpsc, thread};

        let t0 = UUID_TICKS_BETWEEN_EPOCHS;
        let state = V1Generator::from_parts(0, [0x0b; 6], StepClock(t0));
        let g = sync::Arc::new(QueueGenerator::with_generator(state, 10));

        let (tx, rx) = mpsc::channel();
        for _ in 0..4 {
            let tx = tx.clone();
            let g = sync::Arc::clone(&g);
            thread::Builder::new()
                .spawn(move || {
                    for _ in 0..1_000 {
                        tx.send(g.generate()).unwrap();
                    }
                })
                .map_err(|err| format!("failed to spawn thread: {:?}", err))?;
        }
        drop(tx);

        let mut timestamps = HashSet::new();
        let mut count = 0usize;
        while let Ok(e) = rx.recv() {
            timestamps.insert(e.timestamp());
            count += 1;
        }

        assert_eq!(count, 4 * 1_000);
        assert_eq!(timestamps.len(), 4 * 1_000);
        assert!(timestamps.iter().all(|&t| (t0..t0 + 4_000).contains(&t)));
        Ok(())
    }

    /// Generates version 1 identifiers from the default producer
    #[test]
    fn generates_version_1_identifiers_from_the_default_producer() {
        let g = QueueGenerator::new(4);
        for _ in 0..100 {
            let e = g.generate();
            assert_eq!(e.version(), Some(1));
            assert_eq!(e.variant(), crate::Variant::Var10);
        }
    }
}
