// In: src/bridge/status.rs

//! The Status Adapter.
//!
//! Every fallible native call is passed through [`check`] exactly once, right
//! after it returns. A failure is echoed to the diagnostic sink and travels on
//! inside the returned [`Outcome`], so the host can always ask for the text
//! and code before deciding what to do with the missing value.

use crate::config::BridgeConfig;
use crate::error::FeatherError;
use crate::native::Status;

/// A bridged result: a Status plus the value it guards.
///
/// The value is present if and only if the status is OK.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    status: Status,
    value: Option<T>,
}

impl<T> Outcome<T> {
    pub fn is_ok(&self) -> bool {
        self.status.ok()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }

    pub fn into_result(self) -> Result<T, Status> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(self.status),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            status: self.status,
            value: self.value.map(f),
        }
    }
}

/// Consumes a native result and turns it into an `Outcome`, emitting the
/// diagnostic text on failure.
pub fn check<T>(result: Result<T, FeatherError>, config: &BridgeConfig) -> Outcome<T> {
    match result {
        Ok(value) => Outcome {
            status: Status::new_ok(),
            value: Some(value),
        },
        Err(err) => {
            let status = Status::from(&err);
            diag!(failure: config, "{}", status);
            Outcome {
                status,
                value: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::StatusKind;

    #[test]
    fn test_check_success() {
        let outcome = check(Ok::<_, FeatherError>(7), &BridgeConfig::silent());
        assert!(outcome.is_ok());
        assert_eq!(outcome.status().posix_code(), 0);
        assert_eq!(outcome.into_option(), Some(7));
    }

    #[test]
    fn test_check_failure_keeps_diagnostic() {
        let err = FeatherError::NotCategorical("Aint32".into());
        let outcome: Outcome<i32> = check(Err(err), &BridgeConfig::silent());
        assert!(!outcome.is_ok());
        assert!(outcome.value().is_none());

        let status = outcome.into_result().unwrap_err();
        assert_eq!(status.kind(), StatusKind::Invalid);
        assert!(status.to_string().contains("Aint32"));
        assert_ne!(status.posix_code(), 0);
    }
}
