use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{FanIdError, Result};

/// Allows one outstanding submission at a time. Rapid repeat taps get
/// `SubmissionInFlight` instead of a second request.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    busy: Arc<AtomicBool>,
}

/// Held for the duration of a submission; releases the guard on drop.
#[derive(Debug)]
pub struct SubmissionTicket {
    busy: Arc<AtomicBool>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_begin(&self) -> Result<SubmissionTicket> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| FanIdError::SubmissionInFlight)?;
        Ok(SubmissionTicket {
            busy: Arc::clone(&self.busy),
        })
    }

    pub fn is_pending(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_rejected_until_drop() {
        let guard = SubmissionGuard::new();
        let ticket = guard.try_begin().unwrap();
        assert!(guard.is_pending());
        assert!(matches!(
            guard.try_begin(),
            Err(FanIdError::SubmissionInFlight)
        ));

        drop(ticket);
        assert!(!guard.is_pending());
        assert!(guard.try_begin().is_ok());
    }
}
