use std::fmt::Display;

use log::error;

use crate::{CheckOutcome, ServiceState};

/// Runs a check and turns its error, if any, into a service state.
///
/// Without an [Runner::on_error] handler errors are reported as [ServiceState::Unknown].
pub struct Runner<E> {
    on_error: Option<Box<dyn FnOnce(&E) -> ServiceState>>,
}

impl<E: Display> Runner<E> {
    pub fn new() -> Self {
        Self { on_error: None }
    }

    pub fn on_error(mut self, f: impl FnOnce(&E) -> ServiceState + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// This will run either the default `on_error` handler or the one specified by calling
    /// [Runner::on_error] and keep the error for reporting.
    pub fn safe_run(self, f: impl FnOnce() -> Result<CheckOutcome, E>) -> RunnerResult<E> {
        match f() {
            Ok(outcome) => RunnerResult::Ok(outcome),
            Err(err) => {
                let state = self
                    .on_error
                    .map(|f| f(&err))
                    .unwrap_or(ServiceState::Unknown);

                RunnerResult::Err(state, err)
            }
        }
    }
}

impl<E: Display> Default for Runner<E> {
    fn default() -> Self {
        Self::new()
    }
}

pub enum RunnerResult<E> {
    Ok(CheckOutcome),
    Err(ServiceState, E),
}

impl<E: Display> RunnerResult<E> {
    /// Converts a failed run into an outcome reading `<STATE>: <error>`.
    pub fn into_outcome(self) -> CheckOutcome {
        match self {
            RunnerResult::Ok(outcome) => outcome,
            RunnerResult::Err(state, err) => {
                error!("check failed: {err}");
                CheckOutcome::new(state, format!("{state}: {err}"))
            }
        }
    }

    pub fn print_and_exit(self) -> ! {
        self.into_outcome().print_and_exit()
    }
}
