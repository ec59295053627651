use std::fmt::Debug;
use std::sync::Arc;

use crate::listener::AnyOwner;
use crate::listener::ListenerRecord;
use crate::phase::Phase;
use crate::phase::Phases;

/// A mutable value container that synchronously notifies registered
/// listeners on every mutation.
///
/// Listeners are keyed by a caller-supplied `Arc` owner identity; the
/// container holds only weak references, so registrations die with their
/// owner. Dead records are purged lazily on the next mutation.
///
/// Mutation and registration take `&mut self`; callers under preemptive
/// concurrency serialize through [`crate::SharedObservable`].
pub struct Observable<T> {
    value: T,
    listeners: Vec<ListenerRecord<T>>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// Assigns `new_value` and notifies listeners. Always fires, even when
    /// the new value equals the old one.
    ///
    /// Delivery order for one mutation: dead records are pruned, then every
    /// surviving listener subscribed to `Old` receives the pre-mutation
    /// value in registration order, then every listener subscribed to `New`
    /// receives the post-mutation value in registration order. A listener
    /// whose owner dies during the sweep does not fire again. Callback
    /// panics propagate to the caller and abort the rest of the sweep.
    pub fn set(&mut self, new_value: T) {
        let old_value = std::mem::replace(&mut self.value, new_value);
        self.prune_dead();
        deliver(&mut self.listeners, &old_value, Phase::Old);
        deliver(&mut self.listeners, &self.value, Phase::New);
    }

    /// Registers `callback` for the `New` phase, replacing any existing
    /// registration for `owner`.
    pub fn add_observer<O, F>(&mut self, owner: &Arc<O>, callback: F)
    where
        O: Send + Sync + 'static,
        F: FnMut(&T, Phase) + Send + 'static,
    {
        self.add_observer_with(owner, true, Phases::NEW, callback);
    }

    /// Full registration form.
    ///
    /// When `remove_if_exists` is set, any prior registration for `owner`
    /// is removed first. The record is appended to the end of the listener
    /// list, and if `phases` contains `INITIAL` the callback is invoked
    /// with the current value before this method returns.
    pub fn add_observer_with<O, F>(
        &mut self,
        owner: &Arc<O>,
        remove_if_exists: bool,
        phases: Phases,
        callback: F,
    ) where
        O: Send + Sync + 'static,
        F: FnMut(&T, Phase) + Send + 'static,
    {
        let owner: Arc<AnyOwner> = owner.clone();
        if remove_if_exists {
            self.remove_by_identity(Arc::as_ptr(&owner) as *const ());
        }
        self.listeners
            .push(ListenerRecord::new(&owner, phases, Box::new(callback)));
        log::trace!(
            "registered listener for {:?}, {} record(s) total",
            phases,
            self.listeners.len()
        );
        if phases.contains(Phases::INITIAL) {
            if let Some(record) = self.listeners.last_mut() {
                record.invoke(&self.value, Phase::Initial);
            }
        }
    }

    /// Removes every registration keyed on `owner`. No-op when there is
    /// none.
    pub fn remove_observer<O>(&mut self, owner: &Arc<O>)
    where
        O: Send + Sync + 'static,
    {
        self.remove_by_identity(Arc::as_ptr(owner) as *const ());
    }

    /// Number of stored listener records, dead ones included until the
    /// next mutation purges them.
    pub fn observer_count(&self) -> usize {
        self.listeners.len()
    }

    fn remove_by_identity(&mut self, owner: *const ()) {
        self.listeners.retain(|record| !record.is_owned_by(owner));
    }

    fn prune_dead(&mut self) {
        let before = self.listeners.len();
        self.listeners.retain(ListenerRecord::is_live);
        let pruned = before - self.listeners.len();
        if pruned > 0 {
            log::trace!("pruned {} dead listener record(s)", pruned);
        }
    }
}

fn deliver<T>(listeners: &mut [ListenerRecord<T>], value: &T, phase: Phase) {
    for record in listeners.iter_mut() {
        if record.wants(phase) && record.is_live() {
            record.invoke(value, phase);
        }
    }
}

impl<T: Debug> Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
