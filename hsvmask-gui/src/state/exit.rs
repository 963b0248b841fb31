//! Error handed from the event loop back to `main`.

use std::sync::{Arc, Mutex, PoisonError};

/// Shared slot for the error that ended the tuner.
///
/// The app keeps one clone and `main` keeps another; after the window
/// closes `main` takes the error out and exits non-zero.
#[derive(Debug, Clone, Default)]
pub struct FatalError(Arc<Mutex<Option<hsvmask_io::Error>>>);

impl FatalError {
    /// Record `error`; the first one recorded is kept.
    pub fn set(&self, error: hsvmask_io::Error) {
        let mut slot = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() {
            *slot = Some(error);
        }
    }

    /// Whether an error has been recorded.
    pub fn is_set(&self) -> bool {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    /// Remove and return the recorded error.
    pub fn take(&self) -> Option<hsvmask_io::Error> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}
