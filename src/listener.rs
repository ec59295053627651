use std::any::Any;
use std::sync::Arc;
use std::sync::Weak;

use crate::phase::Phase;
use crate::phase::Phases;

pub type AnyOwner = dyn Any + Send + Sync;

/// Opaque owner identity for callers that have no object of their own to
/// key a registration on. Hold it in an `Arc`; dropping the last `Arc`
/// kills every registration keyed on it.
#[derive(Debug, Default)]
pub struct ObserverToken;

/// One registration: who owns it, which phases it wants, and what to call.
///
/// The record holds only a weak reference to its owner, so a long-lived
/// container never keeps an otherwise-unreferenced subscriber alive. A
/// record whose owner is gone is dead and must never fire.
pub(crate) struct ListenerRecord<T> {
    owner: Weak<AnyOwner>,
    phases: Phases,
    callback: Box<dyn FnMut(&T, Phase) + Send>,
}

impl<T> ListenerRecord<T> {
    pub(crate) fn new(
        owner: &Arc<AnyOwner>,
        phases: Phases,
        callback: Box<dyn FnMut(&T, Phase) + Send>,
    ) -> Self {
        Self {
            owner: Arc::downgrade(owner),
            phases,
            callback,
        }
    }

    pub(crate) fn is_live(&self) -> bool {
        self.owner.strong_count() > 0
    }

    /// Identity comparison by allocation pointer, never by value.
    pub(crate) fn is_owned_by(&self, owner: *const ()) -> bool {
        self.owner.as_ptr() as *const () == owner
    }

    pub(crate) fn wants(&self, phase: Phase) -> bool {
        self.phases.contains_phase(phase)
    }

    pub(crate) fn invoke(&mut self, value: &T, phase: Phase) {
        (self.callback)(value, phase);
    }
}
