//! Purpose: Shared-instance handles demonstrating lazy vs. eager initialization.
//! Exports: `SharedInstance`, `RacyLazy`, `EagerShared`.
//! Role: The singleton contract made explicit: handles instead of hidden globals.
//! Invariants: `EagerShared` constructs exactly once, before any accessor exists.
//! Invariants: `RacyLazy` keeps its check-then-act window on purpose; callers
//! racing through the window observe different instances. Do not "fix" it.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use super::error::Error;
use super::token::make_token;

pub const RACY_ID_LEN: usize = 6;
pub const EAGER_ID_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedInstance {
    id: String,
}

impl SharedInstance {
    fn generate(length: usize) -> Result<Self, Error> {
        Ok(Self {
            id: make_token(length)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Unguarded lazy initialization. The slot check and the slot store are
/// separated by an injectable delay, so concurrent first callers each build
/// and return their own instance.
pub struct RacyLazy {
    slot: Mutex<Option<Arc<SharedInstance>>>,
    delay: Duration,
}

impl RacyLazy {
    pub fn new(delay: Duration) -> Self {
        Self {
            slot: Mutex::new(None),
            delay,
        }
    }

    /// Returns the cached instance, or builds one after the delay window.
    /// A caller that saw an empty slot returns the instance it built, even
    /// if another caller stored one in the meantime.
    pub fn get(&self) -> Result<Arc<SharedInstance>, Error> {
        if let Some(existing) = self.lock_slot().as_ref() {
            return Ok(Arc::clone(existing));
        }
        thread::sleep(self.delay);
        let built = Arc::new(SharedInstance::generate(RACY_ID_LEN)?);
        *self.lock_slot() = Some(Arc::clone(&built));
        Ok(built)
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<Arc<SharedInstance>>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Eager initialization: the instance exists before the handle can be shared,
/// so concurrent accessors cannot race and no lock is needed.
pub struct EagerShared {
    instance: Arc<SharedInstance>,
}

impl EagerShared {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            instance: Arc::new(SharedInstance::generate(EAGER_ID_LEN)?),
        })
    }

    pub fn get(&self) -> Arc<SharedInstance> {
        Arc::clone(&self.instance)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    use super::{EAGER_ID_LEN, EagerShared, RACY_ID_LEN, RacyLazy};

    #[test]
    fn racy_lazy_reuses_instance_across_sequential_calls() {
        let lazy = RacyLazy::new(Duration::ZERO);
        let first = lazy.get().expect("first");
        let second = lazy.get().expect("second");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.id().len(), RACY_ID_LEN);
    }

    #[test]
    fn racy_lazy_loses_uniqueness_under_concurrent_first_access() {
        let lazy = Arc::new(RacyLazy::new(Duration::from_millis(100)));
        let barrier = Arc::new(Barrier::new(3));
        let handles: Vec<_> = (0..3)
            .map(|_| {
                let lazy = Arc::clone(&lazy);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    lazy.get().expect("instance")
                })
            })
            .collect();
        let observed: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().expect("join"))
            .collect();

        // All callers enter the delay window before any store happens, so
        // each returns a distinct allocation.
        let distinct = observed
            .iter()
            .enumerate()
            .any(|(idx, a)| observed[idx + 1..].iter().any(|b| !Arc::ptr_eq(a, b)));
        assert!(distinct, "expected at least two distinct instances");
    }

    #[test]
    fn eager_shared_hands_out_one_instance_to_all_callers() {
        let eager = Arc::new(EagerShared::new().expect("eager"));
        let barrier = Arc::new(Barrier::new(4));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let eager = Arc::clone(&eager);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    eager.get()
                })
            })
            .collect();
        let observed: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().expect("join"))
            .collect();

        let first = &observed[0];
        assert!(observed.iter().all(|other| Arc::ptr_eq(first, other)));
        assert!(observed.iter().all(|other| other.id() == first.id()));
        assert_eq!(first.id().len(), EAGER_ID_LEN);
    }

    #[test]
    fn eager_shared_holds_for_a_single_caller() {
        let eager = EagerShared::new().expect("eager");
        assert_eq!(eager.get().id(), eager.get().id());
    }
}
