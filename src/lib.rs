mod listener;
mod observable;
mod phase;
mod shared;

pub use listener::ObserverToken;
pub use observable::Observable;
pub use phase::Phase;
pub use phase::Phases;
pub use shared::SharedObservable;
