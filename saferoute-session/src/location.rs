//! Cancellable device-location lookup.
//!
//! The lookup runs as a fire-and-forget task on the current
//! [`tokio::task::LocalSet`]. Its result is handed back over a oneshot
//! channel and applied by the owner when it next polls. Dropping the
//! [`LocationLookup`] cancels the task, so a late fix is never applied to a
//! disposed session.

use std::rc::Rc;
use std::time::SystemTime;

use log::debug;
use saferoute_core::{GeolocationError, GeolocationProvider, Position, PositionOptions};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio_util::sync::CancellationToken;

/// Query `provider` once, bounded by `options.timeout`.
///
/// # Errors
///
/// Returns the provider's error, [`GeolocationError::Timeout`] when no fix
/// arrives in time, or [`GeolocationError::Stale`] when the fix is older
/// than `options.maximum_age`.
pub async fn locate(
    provider: &dyn GeolocationProvider,
    options: &PositionOptions,
) -> Result<Position, GeolocationError> {
    let position = tokio::time::timeout(options.timeout, provider.current_position(options))
        .await
        .map_err(|_| GeolocationError::Timeout {
            timeout: options.timeout,
        })??;
    position.ensure_fresh(options, SystemTime::now())?;
    Ok(position)
}

/// Progress of a [`LocationLookup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupStatus {
    /// No answer yet.
    Pending,
    /// A fresh fix arrived.
    Ready(Position),
    /// The lookup ended without a usable fix, or its result was already
    /// taken.
    Finished,
}

/// Handle on a background location lookup.
#[derive(Debug)]
pub struct LocationLookup {
    receiver: oneshot::Receiver<Position>,
    token: CancellationToken,
}

impl LocationLookup {
    /// Start a lookup on the current `LocalSet`.
    ///
    /// Failures are logged and end the lookup without a result; the map
    /// keeps its default centre.
    ///
    /// # Panics
    ///
    /// Panics when called outside a [`tokio::task::LocalSet`] context.
    #[must_use]
    pub fn spawn(provider: Rc<dyn GeolocationProvider>, options: PositionOptions) -> Self {
        let (sender, receiver) = oneshot::channel();
        let token = CancellationToken::new();
        let task_token = token.clone();
        tokio::task::spawn_local(async move {
            tokio::select! {
                () = task_token.cancelled() => debug!("location lookup cancelled"),
                result = locate(provider.as_ref(), &options) => match result {
                    Ok(position) => {
                        if sender.send(position).is_err() {
                            debug!("location fix arrived after the session was disposed");
                        }
                    }
                    Err(err) => debug!("location unavailable, keeping default centre: {err}"),
                },
            }
        });
        Self { receiver, token }
    }

    /// Take the result if it has arrived.
    pub fn try_take(&mut self) -> LookupStatus {
        match self.receiver.try_recv() {
            Ok(position) => LookupStatus::Ready(position),
            Err(TryRecvError::Empty) => LookupStatus::Pending,
            Err(TryRecvError::Closed) => LookupStatus::Finished,
        }
    }

    /// Wait for the lookup to end.
    ///
    /// Must not be called again after it has returned.
    pub async fn finished(&mut self) -> Option<Position> {
        (&mut self.receiver).await.ok()
    }

    /// Stop the task; any late result is dropped.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether [`LocationLookup::cancel`] has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for LocationLookup {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
