use crate::{CheckOutcome, ServiceState};

/// Warning and critical thresholds in days since the last password change.
///
/// Both bounds are inclusive. Nothing forces `warning < critical`; an inverted pair is reported
/// through [Thresholds::advisory] but still used as given, critical first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: u32,
    pub critical: u32,
}

impl Thresholds {
    pub fn new(warning: u32, critical: u32) -> Self {
        Thresholds { warning, critical }
    }

    /// Returns an informational line if warning does not come before critical.
    pub fn advisory(&self) -> Option<String> {
        if self.warning >= self.critical {
            Some(format!(
                "INFO: warning {} is set higher than critical {}",
                self.warning, self.critical
            ))
        } else {
            None
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds::new(90, 110)
    }
}

/// Classifies the password age of `user`.
///
/// The messages name the threshold that was crossed, not the actual age.
pub fn classify(user: &str, days_since_change: i64, thresholds: Thresholds) -> CheckOutcome {
    if i64::from(thresholds.critical) <= days_since_change {
        CheckOutcome::new(
            ServiceState::Critical,
            format!(
                "Critical: {} password not changed in {} days",
                user, thresholds.critical
            ),
        )
    } else if i64::from(thresholds.warning) <= days_since_change {
        CheckOutcome::new(
            ServiceState::Warning,
            format!(
                "Warning: {} password not changed in {} days",
                user, thresholds.warning
            ),
        )
    } else {
        CheckOutcome::new(ServiceState::Ok, "OK!")
    }
}
