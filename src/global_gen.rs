//! Default generators and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync::OnceLock;

use crate::{MutexGenerator, QueueGenerator, Uuid};

/// The number of UUIDs the process-wide queue-backed generator mints ahead of consumption.
const PREFETCH_DEPTH: usize = 10;

/// Returns a reference to the process-wide mutex-guarded generator, creating one if none exists.
fn global_mutex_gen() -> &'static MutexGenerator {
    static G: OnceLock<MutexGenerator> = OnceLock::new();
    G.get_or_init(Default::default)
}

/// Returns a reference to the process-wide queue-backed generator, starting its producer thread
/// if none exists.
fn global_queue_gen() -> &'static QueueGenerator {
    static G: OnceLock<QueueGenerator> = OnceLock::new();
    G.get_or_init(|| QueueGenerator::new(PREFETCH_DEPTH))
}

/// Generates a UUIDv1 object.
///
/// This function employs a process-wide generator guarded by a mutex, so concurrent callers
/// never draw the same combination of timestamp and clock sequence. The clock sequence and the
/// node identifier are initialized upon the first call.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid1::uuid1();
/// println!("{}", uuid); // e.g., "7f75a000-a07c-11f1-91b4-3af9d3f4565a"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuid1::uuid1().to_string();
/// ```
pub fn uuid1() -> Uuid {
    global_mutex_gen().generate()
}

/// Generates a UUIDv1 object without taking a lock on the generator state.
///
/// This function takes UUIDs from a process-wide queue fed by a dedicated producer thread that
/// exclusively owns its generator state. The producer starts upon the first call and keeps up to
/// ten UUIDs minted ahead of consumption, so the timestamp inside a returned UUID may slightly
/// predate the call that receives it.
///
/// The underlying generator does not coordinate with the one behind [`uuid1`]: each of the two
/// maintains its own clock sequence.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid1::uuid1_lock_free();
/// println!("{}", uuid); // e.g., "7f75a028-a07c-11f1-91b4-3af9d3f4565a"
/// ```
pub fn uuid1_lock_free() -> Uuid {
    global_queue_gen().generate()
}


#[cfg(test)]
mod tests_lock_free {
    use super::uuid1_lock_free;
    use crate::Variant;

    const N_SAMPLES: usize = 100_000;
    thread_local!(
        static SAMPLES: Vec<String> = (0..N_SAMPLES).map(|_| uuid1_lock_free().into()).collect()
    );

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-1[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use crate::generator::UUID_TICKS_BETWEEN_EPOCHS;
        use std::time;

        // drain the values minted ahead of this test
        for _ in 0..=super::PREFETCH_DEPTH {
            uuid1_lock_free();
        }

        for _ in 0..10_000 {
            let ticks_now = UUID_TICKS_BETWEEN_EPOCHS
                + (time::SystemTime::now()
                    .duration_since(time::UNIX_EPOCH)
                    .expect("clock may have gone backwards")
                    .as_nanos()
                    / 100) as u64;
            let timestamp = uuid1_lock_free().timestamp();
            assert!(ticks_now.abs_diff(timestamp) < 160_000); // within 16 milliseconds
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = uuid1_lock_free();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(1));
        }
    }

    /// Generates no identical UUIDs under multithreading
    #[test]
    fn generates_no_identical_uuids_under_multithreading(
    ) -> Result<(), Box<dyn std::error::Error>> {
        use std::{collections::HashSet, sync::mpsc, thread};

        let (tx, rx) = mpsc::channel();
        for _ in 0..4 {
            let tx = tx.clone();
            thread::Builder::new()
                .spawn(move || {
                    for _ in 0..10_000 {
                        tx.send(uuid1_lock_free()).unwrap();
                    }
                })
                .map_err(|err| format!("failed to spawn thread: {:?}", err))?;
        }
        drop(tx);

        let mut s = HashSet::new();
        while let Ok(e) = rx.recv() {
            s.insert(e);
        }

        assert_eq!(s.len(), 4 * 10_000);
        Ok(())
    }
}
