//! One-time readiness barrier for the map/directions provider.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};

use crate::error::ProviderInitError;

/// Lifecycle of the provider's asynchronous initialisation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    /// Initialisation has not completed yet.
    #[default]
    Pending,
    /// The provider is usable.
    Ready,
    /// Initialisation failed; the provider will never become ready.
    Failed(ProviderInitError),
}

/// Shared handle on the provider readiness state.
///
/// Clones observe the same state. The gate moves from
/// [`GateState::Pending`] to either [`GateState::Ready`] or
/// [`GateState::Failed`] exactly once; later transitions are ignored.
#[derive(Debug, Clone, Default)]
pub struct ReadinessGate {
    state: Rc<RefCell<GateState>>,
}

impl ReadinessGate {
    /// A gate that is still pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A gate that is already open.
    #[must_use]
    pub fn ready() -> Self {
        let gate = Self::new();
        gate.open();
        gate
    }

    /// Mark initialisation as complete. Returns whether the state changed.
    pub fn open(&self) -> bool {
        let mut state = self.state.borrow_mut();
        match *state {
            GateState::Pending => {
                info!("map provider ready");
                *state = GateState::Ready;
                true
            }
            GateState::Ready => false,
            GateState::Failed(ref err) => {
                warn!("ignoring readiness signal after failure: {err}");
                false
            }
        }
    }

    /// Record an initialisation failure. Returns whether the state changed.
    pub fn fail(&self, reason: impl Into<String>) -> bool {
        let mut state = self.state.borrow_mut();
        if *state != GateState::Pending {
            return false;
        }
        let err = ProviderInitError {
            reason: reason.into(),
        };
        warn!("{err}");
        *state = GateState::Failed(err);
        true
    }

    /// Whether provider-dependent calls may proceed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        *self.state.borrow() == GateState::Ready
    }

    /// The recorded initialisation failure, if any.
    #[must_use]
    pub fn failure(&self) -> Option<ProviderInitError> {
        match &*self.state.borrow() {
            GateState::Failed(err) => Some(err.clone()),
            GateState::Pending | GateState::Ready => None,
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> GateState {
        self.state.borrow().clone()
    }
}
