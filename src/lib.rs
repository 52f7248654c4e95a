//! The check_password_age crate implements a nagios/icinga check which reports how long ago the
//! password of an operating system account was changed.
//!
//! The check looks the account up in the system account database, asks `passwd -S` for the
//! password status, and classifies the days since the last change against a warning and a
//! critical threshold.
//!
//! ```rust
//! # use check_password_age::{classify, ServiceState, Thresholds};
//! let outcome = classify("bob", 95, Thresholds::new(90, 110));
//! assert_eq!(outcome.state(), ServiceState::Warning);
//! assert_eq!(
//!     &outcome.to_nagios_string(),
//!     "Warning: bob password not changed in 90 days"
//! );
//! ```

use std::fmt;
use std::process;

#[macro_use]
mod macros;

pub mod account;
mod age;
pub mod check;
mod classifier;
pub mod cli;
pub mod config_generator;
mod error;
pub mod logging;
pub mod passwd;
mod perfdata;
mod runner;

pub use crate::age::days_since;
pub use crate::check::{CheckParams, PasswordAgeCheck};
pub use crate::classifier::{classify, Thresholds};
pub use crate::error::CheckError;
pub use crate::perfdata::{PerfData, ToPerfString};
pub use crate::runner::{Runner, RunnerResult};

/// The single result of a check run: a service state and the line handed to the monitoring
/// system.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckOutcome {
    state: ServiceState,
    message: String,
    perfdata: Option<PerfData>,
}

impl CheckOutcome {
    pub fn new(state: ServiceState, message: impl Into<String>) -> Self {
        CheckOutcome {
            state,
            message: message.into(),
            perfdata: None,
        }
    }

    /// Attaches performance data which is appended after a `|` in the plugin output.
    pub fn with_perfdata(mut self, perfdata: PerfData) -> Self {
        self.perfdata = Some(perfdata);
        self
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn perfdata(&self) -> Option<&PerfData> {
        self.perfdata.as_ref()
    }

    /// Returns the line nagios reads from stdout.
    pub fn to_nagios_string(&self) -> String {
        match self.perfdata {
            Some(ref perfdata) => format!("{} | {}", self.message, perfdata.to_perf_string()),
            None => self.message.clone(),
        }
    }

    /// Will return the exit code of the state.
    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }

    /// Will print Self::to_nagios_string and exit with the exit code from Self::exit_code
    pub fn print_and_exit(&self) -> ! {
        println!("{}", self.to_nagios_string());
        process::exit(self.exit_code());
    }
}

/// Represents a service state from nagios.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    /// Returns the corresponding nagios exit code to signal the service state of self.
    pub fn exit_code(&self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}
