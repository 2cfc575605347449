//! Cancel-on-supersede delay timer.
//!
//! A widget owns at most one pending delayed action per timer. Scheduling a
//! new action aborts the previous one, and dropping the timer (widget
//! unmount) aborts whatever is still pending.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{Error, Result};

/// Identifies one scheduled action.
///
/// The action receives its token and must check [`DelayTimer::is_current`]
/// under the widget lock before applying its effect; an abort that races a
/// wake-up is caught there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

#[derive(Debug, Default)]
pub struct DelayTimer {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl DelayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `fire` after `delay`, superseding any pending action.
    ///
    /// Fails with [`Error::NoRuntime`] outside a tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, fire: F) -> Result<TimerToken>
    where
        F: FnOnce(TimerToken) + Send + 'static,
    {
        let handle = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        self.cancel();

        self.generation += 1;
        let token = TimerToken(self.generation);
        log::trace!("[timer] schedule token={:?} delay={:?}", token, delay);
        self.task = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            fire(token);
        }));
        Ok(token)
    }

    /// Abort the pending action, if any.
    /// Returns true if something was pending.
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                log::trace!("[timer] cancel generation={}", self.generation);
                task.abort();
                self.generation += 1;
                true
            }
            None => false,
        }
    }

    /// Whether `token` is still the pending action.
    pub fn is_current(&self, token: TimerToken) -> bool {
        self.task.is_some() && self.generation == token.0
    }

    /// Mark the action for `token` as fired.
    pub fn complete(&mut self, token: TimerToken) {
        if self.generation == token.0 {
            self.task = None;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for DelayTimer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
