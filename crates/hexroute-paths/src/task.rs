//! Handles for work running on the rayon thread pool.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::error::{Error, Result};

/// The eventual result of a job handed to the rayon pool.
///
/// The job sends its result back over a channel; if it panics, the sending
/// half is dropped unsent and the handle reports [`Error::WorkerLost`].
#[derive(Debug)]
#[must_use = "a pending result does nothing unless waited on"]
pub struct Pending<T> {
    rx: Receiver<T>,
}

impl<T: Send + 'static> Pending<T> {
    /// Run `job` on the rayon pool.
    pub fn spawn<F>(job: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        rayon::spawn(move || {
            // An unwinding rayon job aborts the process, so stop it here and
            // let the dropped sender speak for it.
            match panic::catch_unwind(AssertUnwindSafe(job)) {
                // The receiver may already be gone; nobody wants the result then.
                Ok(value) => {
                    let _ = tx.send(value);
                }
                Err(_) => log::error!("pooled job panicked"),
            }
        });
        Self { rx }
    }
}

impl<T> Pending<T> {
    /// Block until the job finishes.
    pub fn wait(self) -> Result<T> {
        self.rx.recv().map_err(|_| Error::WorkerLost)
    }

    /// The result if the job has finished, `None` if it is still running.
    pub fn try_take(&self) -> Result<Option<T>> {
        match self.rx.try_recv() {
            Ok(value) => Ok(Some(value)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(Error::WorkerLost),
        }
    }
}
