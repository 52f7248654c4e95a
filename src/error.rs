use std::process::ExitStatus;

/// Everything that can go wrong between looking up the account and classifying its password age.
///
/// A missing account is not an error, it is a regular UNKNOWN outcome of the check.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("failed to look up user {user}: {source}")]
    AccountLookup {
        user: String,
        #[source]
        source: nix::Error,
    },
    #[error("failed to run {command}: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{command} failed with {status}{}", stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("password status is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("password status {0:?} has no last change field")]
    MissingLastChange(String),
    #[error("invalid last change date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
