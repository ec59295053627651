use std::sync::Arc;

use parking_lot::Mutex;
use parking_lot::MutexGuard;

use crate::observable::Observable;
use crate::phase::Phase;
use crate::phase::Phases;

/// An [`Observable`] behind one mutex, for owners under preemptive
/// concurrency.
///
/// The contract of `Observable` requires all mutation and registration to
/// go through a single exclusive-access discipline; this wrapper is that
/// discipline packaged as a type. The lock is held across the whole
/// notification sweep, so callbacks run serialized and must not touch the
/// same `SharedObservable` or they will deadlock.
pub struct SharedObservable<T> {
    inner: Arc<Mutex<Observable<T>>>,
}

impl<T> SharedObservable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Observable::new(value))),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Observable<T>> {
        self.inner.lock()
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.lock().get()
    }

    pub fn set(&self, new_value: T) {
        self.inner.lock().set(new_value);
    }

    pub fn add_observer<O, F>(&self, owner: &Arc<O>, callback: F)
    where
        O: Send + Sync + 'static,
        F: FnMut(&T, Phase) + Send + 'static,
    {
        self.inner.lock().add_observer(owner, callback);
    }

    pub fn add_observer_with<O, F>(
        &self,
        owner: &Arc<O>,
        remove_if_exists: bool,
        phases: Phases,
        callback: F,
    ) where
        O: Send + Sync + 'static,
        F: FnMut(&T, Phase) + Send + 'static,
    {
        self.inner
            .lock()
            .add_observer_with(owner, remove_if_exists, phases, callback);
    }

    pub fn remove_observer<O>(&self, owner: &Arc<O>)
    where
        O: Send + Sync + 'static,
    {
        self.inner.lock().remove_observer(owner);
    }

    pub fn observer_count(&self) -> usize {
        self.inner.lock().observer_count()
    }
}

impl<T> Clone for SharedObservable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
